//! Modal and full-screen overlay lifecycle.
//!
//! The partner application modal, the programme registration modal, the hero
//! video player and the navbar mobile menu all share one state machine:
//!
//! ```text
//! Closed --open--> Opening --entry done--> Open --close--> Closing --exit done--> Closed
//! ```
//!
//! `close` is also accepted from `Opening`. Form overlays carry an orthogonal
//! [`ResultState`] driven by `submit` and `complete_submission`.

mod manager;
mod scroll_lock;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    forms::{FormData, FormLayout, SubmissionOutcome},
    Result, SiteError, Transition,
};

pub use manager::OverlayManager;
pub use scroll_lock::{ScrollLease, ScrollLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayKind {
    PartnerApplication,
    ProgrammeRegistration,
    Video,
    MobileMenu,
}

impl OverlayKind {
    pub const ALL: [OverlayKind; 4] = [
        OverlayKind::PartnerApplication,
        OverlayKind::ProgrammeRegistration,
        OverlayKind::Video,
        OverlayKind::MobileMenu,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn slug(self) -> &'static str {
        match self {
            OverlayKind::PartnerApplication => "partner_application",
            OverlayKind::ProgrammeRegistration => "programme_registration",
            OverlayKind::Video => "video",
            OverlayKind::MobileMenu => "mobile_menu",
        }
    }
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Which partner form layout the partner modal renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartnerCategory {
    Mentor,
    Trainer,
    Sponsorship,
}

impl FromStr for PartnerCategory {
    type Err = SiteError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "mentor" => Ok(Self::Mentor),
            "trainer" => Ok(Self::Trainer),
            "sponsorship" | "sponsor" => Ok(Self::Sponsorship),
            other => Err(SiteError::msg(format!(
                "unknown partner category `{other}`"
            ))),
        }
    }
}

/// What an overlay is showing. Determines the overlay kind and, for form
/// overlays, the field layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OverlaySubject {
    Partner { category: PartnerCategory },
    Programme { title: String, image: String },
    Video,
    Menu,
}

impl OverlaySubject {
    pub fn kind(&self) -> OverlayKind {
        match self {
            OverlaySubject::Partner { .. } => OverlayKind::PartnerApplication,
            OverlaySubject::Programme { .. } => OverlayKind::ProgrammeRegistration,
            OverlaySubject::Video => OverlayKind::Video,
            OverlaySubject::Menu => OverlayKind::MobileMenu,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl OverlayPhase {
    /// `Opening`, `Open` and `Closing` all hold the background scroll lock.
    pub fn is_active(self) -> bool {
        !matches!(self, OverlayPhase::Closed)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ResultState {
    #[default]
    Pending,
    Submitting,
    Succeeded,
    /// Non-fatal: the overlay stays open and the form can be resubmitted.
    Failed { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissSource {
    Escape,
    Backdrop,
    CloseButton,
}

/// Delivered exactly once per completed close.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClosedNotice {
    pub kind: OverlayKind,
    pub subject: Option<OverlaySubject>,
    pub result: ResultState,
}

#[derive(Debug, Clone)]
pub struct OverlayController {
    kind: OverlayKind,
    phase: OverlayPhase,
    result: ResultState,
    subject: Option<OverlaySubject>,
    submitted: Option<FormData>,
}

impl OverlayController {
    pub fn new(kind: OverlayKind) -> Self {
        Self {
            kind,
            phase: OverlayPhase::Closed,
            result: ResultState::Pending,
            subject: None,
            submitted: None,
        }
    }

    pub fn kind(&self) -> OverlayKind {
        self.kind
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn result(&self) -> &ResultState {
        &self.result
    }

    pub fn subject(&self) -> Option<&OverlaySubject> {
        self.subject.as_ref()
    }

    /// Form data handed over by the latest accepted `submit`, while the
    /// submission is in flight.
    pub fn submitted_form(&self) -> Option<&FormData> {
        self.submitted.as_ref()
    }

    pub fn layout(&self) -> Option<FormLayout> {
        self.subject.as_ref().and_then(FormLayout::for_subject)
    }

    /// Starts the entry animation. Ignored unless `Closed`, and for subjects
    /// belonging to a different overlay site.
    pub fn open(&mut self, subject: OverlaySubject) -> Transition {
        if subject.kind() != self.kind {
            tracing::warn!(kind = %self.kind, ?subject, "subject belongs to another overlay");
            return Transition::Ignored;
        }
        if self.phase != OverlayPhase::Closed {
            tracing::debug!(kind = %self.kind, phase = ?self.phase, "open ignored");
            return Transition::Ignored;
        }

        tracing::debug!(kind = %self.kind, ?subject, "opening");
        self.phase = OverlayPhase::Opening;
        self.result = ResultState::Pending;
        self.subject = Some(subject);
        self.submitted = None;
        Transition::Applied
    }

    pub fn entry_complete(&mut self) -> Transition {
        if self.phase != OverlayPhase::Opening {
            return Transition::Ignored;
        }
        self.phase = OverlayPhase::Open;
        tracing::debug!(kind = %self.kind, "open");
        Transition::Applied
    }

    /// Starts the exit animation from `Open` or `Opening`. An in-flight
    /// submission is abandoned.
    pub fn close(&mut self) -> Transition {
        if !matches!(self.phase, OverlayPhase::Open | OverlayPhase::Opening) {
            return Transition::Ignored;
        }
        if self.result == ResultState::Submitting {
            tracing::debug!(kind = %self.kind, "abandoning in-flight submission");
            self.result = ResultState::Pending;
            self.submitted = None;
        }
        self.phase = OverlayPhase::Closing;
        tracing::debug!(kind = %self.kind, "closing");
        Transition::Applied
    }

    /// Escape key, backdrop click and the close control all route here.
    pub fn dismiss(&mut self, source: DismissSource) -> Transition {
        let transition = self.close();
        if !transition.is_applied() {
            tracing::debug!(kind = %self.kind, ?source, phase = ?self.phase, "dismiss ignored");
        }
        transition
    }

    /// Finishes the exit animation. Returns the closed notice the first time
    /// only.
    pub fn exit_complete(&mut self) -> Option<ClosedNotice> {
        if self.phase != OverlayPhase::Closing {
            return None;
        }
        self.phase = OverlayPhase::Closed;
        self.submitted = None;
        let notice = ClosedNotice {
            kind: self.kind,
            subject: self.subject.take(),
            result: std::mem::take(&mut self.result),
        };
        tracing::debug!(kind = %self.kind, "closed");
        Some(notice)
    }

    /// Validates `form` against the subject's layout and starts the
    /// submission. Only accepted while `Open` with no submission running or
    /// already succeeded.
    pub fn submit(&mut self, form: FormData) -> Result<Transition> {
        if self.phase != OverlayPhase::Open {
            return Ok(Transition::Ignored);
        }
        if !matches!(
            self.result,
            ResultState::Pending | ResultState::Failed { .. }
        ) {
            return Ok(Transition::Ignored);
        }
        let Some(layout) = self.layout() else {
            tracing::warn!(kind = %self.kind, "overlay has no form to submit");
            return Ok(Transition::Ignored);
        };

        layout.validate(&form)?;
        tracing::info!(kind = %self.kind, fields = form.len(), "submitting");
        self.result = ResultState::Submitting;
        self.submitted = Some(form);
        Ok(Transition::Applied)
    }

    pub fn complete_submission(&mut self, outcome: SubmissionOutcome) -> Transition {
        if self.result != ResultState::Submitting {
            return Transition::Ignored;
        }
        self.result = match outcome {
            SubmissionOutcome::Accepted => {
                self.submitted = None;
                tracing::info!(kind = %self.kind, "submission succeeded");
                ResultState::Succeeded
            }
            SubmissionOutcome::Rejected { reason } => {
                tracing::warn!(kind = %self.kind, %reason, "submission failed");
                ResultState::Failed { reason }
            }
        };
        Transition::Applied
    }

    /// Unmount: jump straight to `Closed` without a closed notice.
    pub fn teardown(&mut self) -> bool {
        let was_active = self.phase.is_active();
        self.phase = OverlayPhase::Closed;
        self.result = ResultState::Pending;
        self.subject = None;
        self.submitted = None;
        was_active
    }
}
