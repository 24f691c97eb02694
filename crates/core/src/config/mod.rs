use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{overlay::OverlayKind, timeline::Millis, Result, SiteError};

/// Top-level configuration structure for the site controllers.
///
/// Every section falls back to its defaults, so a partial JSON file only has
/// to name the values it overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub carousel: CarouselConfig,
    pub overlays: OverlayTimings,
    pub submission: SubmissionConfig,
    pub navigation: NavigationConfig,
}

impl SiteConfig {
    /// Parses and validates a configuration from a JSON string.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.carousel.window == 0 {
            return Err(SiteError::InvalidConfig(
                "carousel.window must be at least 1".to_string(),
            ));
        }
        if self.carousel.stride == 0 {
            return Err(SiteError::InvalidConfig(
                "carousel.stride must be at least 1".to_string(),
            ));
        }
        if self.carousel.period_ms == 0 {
            return Err(SiteError::InvalidConfig(
                "carousel.period_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Timing and geometry of the testimonial carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub period_ms: Millis,
    pub window: usize,
    pub stride: usize,
    pub exit_ms: Millis,
    pub enter_ms: Millis,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            period_ms: 6_000,
            window: 2,
            stride: 2,
            exit_ms: 700,
            enter_ms: 900,
        }
    }
}

/// Entry and exit animation lengths for a single overlay site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayTiming {
    pub entry_ms: Millis,
    pub exit_ms: Millis,
}

impl OverlayTiming {
    pub const fn new(entry_ms: Millis, exit_ms: Millis) -> Self {
        Self { entry_ms, exit_ms }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayTimings {
    pub partner: OverlayTiming,
    pub programme: OverlayTiming,
    pub video: OverlayTiming,
    pub menu: OverlayTiming,
}

impl Default for OverlayTimings {
    fn default() -> Self {
        Self {
            partner: OverlayTiming::new(600, 400),
            programme: OverlayTiming::new(1_400, 500),
            video: OverlayTiming::new(800, 500),
            menu: OverlayTiming::new(800, 0),
        }
    }
}

impl OverlayTimings {
    pub fn for_kind(&self, kind: OverlayKind) -> OverlayTiming {
        match kind {
            OverlayKind::PartnerApplication => self.partner,
            OverlayKind::ProgrammeRegistration => self.programme,
            OverlayKind::Video => self.video,
            OverlayKind::MobileMenu => self.menu,
        }
    }
}

/// Stand-in network round trip for form submissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    pub delay_ms: Millis,
    /// Fade of the form before the success view replaces it.
    pub success_fade_ms: Millis,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1_500,
            success_fade_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Height of the fixed navbar subtracted from anchor scroll positions.
    pub anchor_offset_px: u32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            anchor_offset_px: 100,
        }
    }
}
