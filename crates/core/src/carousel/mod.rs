use serde::{Deserialize, Serialize};

use crate::{config::CarouselConfig, Result, SiteError, Transition};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarouselPhase {
    #[default]
    Showing,
    /// Current items are animating out.
    Exiting,
    /// The advanced window is animating in.
    Entering,
}

/// Rotating window over a fixed, ordered list.
///
/// A tick starts the exit animation; the window only advances once that
/// animation reports completion, and the next tick is accepted after the
/// entry animation finishes. Indices wrap modulo the list length, so a list
/// whose length is not a multiple of the stride reuses its first items.
#[derive(Debug, Clone)]
pub struct CarouselController {
    len: usize,
    window: usize,
    stride: usize,
    start: usize,
    advances: u64,
    phase: CarouselPhase,
}

impl CarouselController {
    pub fn new(len: usize, config: &CarouselConfig) -> Result<Self> {
        if config.window == 0 || config.stride == 0 {
            return Err(SiteError::InvalidConfig(
                "carousel window and stride must be at least 1".to_string(),
            ));
        }
        if len < config.window {
            return Err(SiteError::NotEnoughItems {
                needed: config.window,
                available: len,
            });
        }

        Ok(Self {
            len,
            window: config.window,
            stride: config.stride,
            start: 0,
            advances: 0,
            phase: CarouselPhase::Showing,
        })
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    pub fn start_index(&self) -> usize {
        self.start
    }

    /// Completed window advances since the last reset.
    pub fn advances(&self) -> u64 {
        self.advances
    }

    /// Indices into the source list currently on screen.
    pub fn window_indices(&self) -> Vec<usize> {
        (0..self.window)
            .map(|offset| (self.start + offset) % self.len)
            .collect()
    }

    /// Timer tick. Ignored while a transition is already running.
    pub fn tick(&mut self) -> Transition {
        if self.phase != CarouselPhase::Showing {
            tracing::debug!(phase = ?self.phase, "carousel tick ignored");
            return Transition::Ignored;
        }
        self.phase = CarouselPhase::Exiting;
        Transition::Applied
    }

    /// User-driven advance. Same transition as a tick; the caller restarts
    /// the periodic timer.
    pub fn advance_now(&mut self) -> Transition {
        self.tick()
    }

    pub fn exit_complete(&mut self) -> Transition {
        if self.phase != CarouselPhase::Exiting {
            return Transition::Ignored;
        }
        self.start = (self.start + self.stride) % self.len;
        self.advances += 1;
        self.phase = CarouselPhase::Entering;
        tracing::debug!(start = self.start, "carousel advanced");
        Transition::Applied
    }

    pub fn enter_complete(&mut self) -> Transition {
        if self.phase != CarouselPhase::Entering {
            return Transition::Ignored;
        }
        self.phase = CarouselPhase::Showing;
        Transition::Applied
    }

    /// Back to the first window, as on a fresh mount.
    pub fn reset(&mut self) {
        self.start = 0;
        self.advances = 0;
        self.phase = CarouselPhase::Showing;
    }
}
