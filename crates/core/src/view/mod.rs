use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{overlay::OverlayKind, SiteError};

/// Pages the site can display. Exactly one is current at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Home,
    #[serde(rename = "why-shiftup")]
    WhyShiftUp,
    Partner,
    Programme,
    PrivacyPolicy,
    TermsOfService,
    Blog,
}

impl View {
    pub const ALL: [View; 7] = [
        View::Home,
        View::WhyShiftUp,
        View::Partner,
        View::Programme,
        View::PrivacyPolicy,
        View::TermsOfService,
        View::Blog,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            View::Home => "home",
            View::WhyShiftUp => "why-shiftup",
            View::Partner => "partner",
            View::Programme => "programme",
            View::PrivacyPolicy => "privacy-policy",
            View::TermsOfService => "terms-of-service",
            View::Blog => "blog",
        }
    }

    /// Whether the view renders a selected content record.
    pub fn takes_content_id(self) -> bool {
        matches!(self, View::Blog)
    }

    /// Overlay site mounted as part of this view, if any.
    pub fn mounted_overlay(self) -> Option<OverlayKind> {
        match self {
            View::Home => Some(OverlayKind::Video),
            View::Partner => Some(OverlayKind::PartnerApplication),
            View::Programme => Some(OverlayKind::ProgrammeRegistration),
            _ => None,
        }
    }

    /// Home hosts the testimonial carousel and the FAQ accordion.
    pub fn mounts_home_sections(self) -> bool {
        matches!(self, View::Home)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for View {
    type Err = SiteError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.slug() == value)
            .ok_or_else(|| SiteError::msg(format!("unknown view `{value}`")))
    }
}

/// Where the viewport should land once a freshly navigated view has rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScrollTarget {
    Top,
    Anchor { id: String, offset_px: u32 },
}

/// The current page plus its companion data. Replaced wholesale on every
/// navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub view: View,
    pub anchor: Option<String>,
    pub content_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationOutcome {
    pub previous: View,
    pub current: View,
    /// A scroll from an earlier navigation was still waiting for its render.
    pub superseded_scroll: bool,
}

impl NavigationOutcome {
    pub fn changed_view(&self) -> bool {
        self.previous != self.current
    }
}

/// Client-side router. Navigation cannot fail; the scroll it implies is
/// deferred until the render layer reports the new view as mounted.
#[derive(Debug, Clone)]
pub struct ViewController {
    current: ViewState,
    pending_scroll: Option<ScrollTarget>,
    last_scroll: Option<ScrollTarget>,
    anchor_offset_px: u32,
    navigations: u64,
}

impl ViewController {
    pub fn new(anchor_offset_px: u32) -> Self {
        Self {
            current: ViewState::default(),
            pending_scroll: None,
            last_scroll: None,
            anchor_offset_px,
            navigations: 0,
        }
    }

    pub fn current(&self) -> &ViewState {
        &self.current
    }

    pub fn view(&self) -> View {
        self.current.view
    }

    /// Content id recorded by the latest navigation, for views that use one.
    pub fn selected_content_id(&self) -> Option<u32> {
        self.current.content_id
    }

    pub fn pending_scroll(&self) -> Option<&ScrollTarget> {
        self.pending_scroll.as_ref()
    }

    pub fn last_scroll(&self) -> Option<&ScrollTarget> {
        self.last_scroll.as_ref()
    }

    pub fn navigations(&self) -> u64 {
        self.navigations
    }

    pub fn navigate(
        &mut self,
        view: View,
        anchor: Option<String>,
        content_id: Option<u32>,
    ) -> NavigationOutcome {
        let previous = self.current.view;
        let content_id = content_id.filter(|_| view.takes_content_id());
        let scroll = match &anchor {
            Some(id) => ScrollTarget::Anchor {
                id: id.clone(),
                offset_px: self.anchor_offset_px,
            },
            None => ScrollTarget::Top,
        };

        self.current = ViewState {
            view,
            anchor,
            content_id,
        };
        let superseded_scroll = self.pending_scroll.replace(scroll).is_some();
        self.navigations += 1;

        tracing::info!(from = %previous, to = %view, ?content_id, "navigate");
        NavigationOutcome {
            previous,
            current: view,
            superseded_scroll,
        }
    }

    /// Called once the render pass following a navigation has mounted the
    /// new view. Yields the single scroll that navigation asked for.
    pub fn on_render_complete(&mut self) -> Option<ScrollTarget> {
        let scroll = self.pending_scroll.take()?;
        tracing::debug!(?scroll, view = %self.current.view, "scrolling after render");
        self.last_scroll = Some(scroll.clone());
        Some(scroll)
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(0)
    }
}
