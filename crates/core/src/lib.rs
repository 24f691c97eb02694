//! Core library for the ShiftUp Africa site.
//!
//! The site itself is static copy; what lives here is the interaction logic
//! behind it, expressed as small state machines that never touch a real
//! clock or DOM. Each module owns one concern (routing, overlays, the
//! testimonial carousel, forms) and [`Site`] wires them to a deterministic
//! event loop so a render layer, a test or the command line can drive them.

pub mod accordion;
pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod forms;
pub mod overlay;
pub mod render;
pub mod site;
pub mod timeline;
pub mod transition;
pub mod view;

pub use accordion::Accordion;
pub use carousel::{CarouselController, CarouselPhase};
pub use config::{CarouselConfig, OverlayTiming, OverlayTimings, SiteConfig};
pub use content::{BlogPost, ContentCatalog, FaqEntry, Programme, TeamMember, Testimonial};
pub use error::{Result, SiteError};
pub use forms::{
    FormData, FormLayout, ScriptedBackend, SimulatedBackend, SubmissionBackend, SubmissionOutcome,
};
pub use overlay::{
    ClosedNotice, DismissSource, OverlayController, OverlayKind, OverlayManager, OverlayPhase,
    OverlaySubject, PartnerCategory, ResultState, ScrollLease, ScrollLock,
};
pub use render::{CarouselSnapshot, OverlaySnapshot, RenderSnapshot};
pub use site::{ScriptStep, Site, UiCommand};
pub use timeline::{Millis, Scheduler, SiteClock, SiteEvent, TimerOwner};
pub use transition::Transition;
pub use view::{NavigationOutcome, ScrollTarget, View, ViewController, ViewState};
