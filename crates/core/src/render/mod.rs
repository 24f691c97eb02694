use serde::Serialize;

use crate::{
    carousel::CarouselPhase,
    overlay::{OverlayController, OverlayKind, OverlayPhase, OverlaySubject, ResultState},
    timeline::Millis,
    view::{ScrollTarget, View},
};

/// Everything the render layer needs to draw one frame of the site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub at_ms: Millis,
    pub view: View,
    pub anchor: Option<String>,
    pub content_id: Option<u32>,
    /// Blog article on screen. `None` on the blog index, including when the
    /// requested id does not exist.
    pub blog_post: Option<u32>,
    pub last_scroll: Option<ScrollTarget>,
    pub active_overlay: Option<OverlayKind>,
    pub scroll_locked: bool,
    pub overlays: Vec<OverlaySnapshot>,
    pub carousel: Option<CarouselSnapshot>,
    pub faq_open: Option<usize>,
}

impl RenderSnapshot {
    pub fn overlay(&self, kind: OverlayKind) -> Option<&OverlaySnapshot> {
        self.overlays.iter().find(|overlay| overlay.kind == kind)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlaySnapshot {
    pub kind: OverlayKind,
    pub phase: OverlayPhase,
    pub result: ResultState,
    pub subject: Option<OverlaySubject>,
}

impl From<&OverlayController> for OverlaySnapshot {
    fn from(controller: &OverlayController) -> Self {
        Self {
            kind: controller.kind(),
            phase: controller.phase(),
            result: controller.result().clone(),
            subject: controller.subject().cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselSnapshot {
    pub phase: CarouselPhase,
    pub indices: Vec<usize>,
    pub authors: Vec<&'static str>,
}
