use std::collections::BTreeMap;

use super::{
    ClosedNotice, DismissSource, OverlayController, OverlayKind, OverlayPhase, OverlaySubject,
    ScrollLease, ScrollLock,
};
use crate::{
    forms::{FormData, SubmissionOutcome},
    Result, Transition,
};

/// Owns one controller per overlay site together with the background scroll
/// lock.
///
/// At most one overlay is non-`Closed` at a time across all sites. The
/// overlay that moves from `Closed` to `Opening` acquires a lease and gives it
/// back when it reaches `Closed` again, so the lock is held exactly while
/// some overlay is active.
#[derive(Debug)]
pub struct OverlayManager {
    controllers: Vec<OverlayController>,
    leases: BTreeMap<OverlayKind, ScrollLease>,
    lock: ScrollLock,
    closed: Vec<ClosedNotice>,
}

impl OverlayManager {
    pub fn new() -> Self {
        Self {
            controllers: OverlayKind::ALL
                .into_iter()
                .map(OverlayController::new)
                .collect(),
            leases: BTreeMap::new(),
            lock: ScrollLock::new(),
            closed: Vec::new(),
        }
    }

    pub fn controller(&self, kind: OverlayKind) -> &OverlayController {
        &self.controllers[kind.index()]
    }

    fn controller_mut(&mut self, kind: OverlayKind) -> &mut OverlayController {
        &mut self.controllers[kind.index()]
    }

    pub fn controllers(&self) -> &[OverlayController] {
        &self.controllers
    }

    /// The overlay currently holding the screen, if any.
    pub fn active(&self) -> Option<OverlayKind> {
        self.controllers
            .iter()
            .find(|controller| controller.phase().is_active())
            .map(OverlayController::kind)
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.lock.is_locked()
    }

    /// Closed notices not yet taken, oldest first.
    pub fn closed_notices(&self) -> &[ClosedNotice] {
        &self.closed
    }

    /// Hands over the pending closed notices and empties the queue.
    pub fn take_closed_notices(&mut self) -> Vec<ClosedNotice> {
        std::mem::take(&mut self.closed)
    }

    pub fn open(&mut self, subject: OverlaySubject) -> Transition {
        let kind = subject.kind();
        if let Some(active) = self.active() {
            if active != kind {
                tracing::warn!(
                    requested = %kind,
                    %active,
                    "another overlay is active, open ignored"
                );
            }
            return Transition::Ignored;
        }

        let transition = self.controller_mut(kind).open(subject);
        if transition.is_applied() {
            let lease = self.lock.acquire(kind);
            self.leases.insert(kind, lease);
        }
        transition
    }

    pub fn entry_complete(&mut self, kind: OverlayKind) -> Transition {
        self.controller_mut(kind).entry_complete()
    }

    pub fn close(&mut self, kind: OverlayKind) -> Transition {
        self.controller_mut(kind).close()
    }

    pub fn dismiss(&mut self, kind: OverlayKind, source: DismissSource) -> Transition {
        self.controller_mut(kind).dismiss(source)
    }

    pub fn exit_complete(&mut self, kind: OverlayKind) -> Option<ClosedNotice> {
        let notice = self.controller_mut(kind).exit_complete()?;
        self.release(kind);
        self.closed.push(notice.clone());
        Some(notice)
    }

    pub fn submit(&mut self, kind: OverlayKind, form: FormData) -> Result<Transition> {
        self.controller_mut(kind).submit(form)
    }

    pub fn complete_submission(
        &mut self,
        kind: OverlayKind,
        outcome: SubmissionOutcome,
    ) -> Transition {
        self.controller_mut(kind).complete_submission(outcome)
    }

    /// Unmounts an overlay site. Returns whether it was active.
    pub fn teardown(&mut self, kind: OverlayKind) -> bool {
        let was_active = self.controller_mut(kind).teardown();
        if was_active {
            tracing::debug!(%kind, "overlay torn down");
            self.release(kind);
        }
        was_active
    }

    pub fn phase(&self, kind: OverlayKind) -> OverlayPhase {
        self.controller(kind).phase()
    }

    fn release(&mut self, kind: OverlayKind) {
        if let Some(lease) = self.leases.remove(&kind) {
            self.lock.release(lease);
        }
    }
}

impl Default for OverlayManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::PartnerCategory;

    fn lock_matches_phases(manager: &OverlayManager) -> bool {
        let any_active = manager
            .controllers()
            .iter()
            .any(|controller| controller.phase().is_active());
        any_active == manager.is_scroll_locked()
    }

    #[test]
    fn scroll_lock_tracks_active_overlay() {
        let mut manager = OverlayManager::new();
        assert!(lock_matches_phases(&manager));

        let _ = manager.open(OverlaySubject::Video);
        assert!(manager.is_scroll_locked());
        let _ = manager.entry_complete(OverlayKind::Video);
        assert!(lock_matches_phases(&manager));
        let _ = manager.dismiss(OverlayKind::Video, DismissSource::Backdrop);
        assert!(manager.is_scroll_locked());

        manager.exit_complete(OverlayKind::Video).unwrap();
        assert!(!manager.is_scroll_locked());
        assert!(lock_matches_phases(&manager));
    }

    #[test]
    fn only_one_overlay_at_a_time() {
        let mut manager = OverlayManager::new();
        let _ = manager.open(OverlaySubject::Menu);

        let partner = OverlaySubject::Partner {
            category: PartnerCategory::Trainer,
        };
        assert_eq!(manager.open(partner.clone()), Transition::Ignored);
        assert_eq!(manager.active(), Some(OverlayKind::MobileMenu));

        let _ = manager.close(OverlayKind::MobileMenu);
        assert_eq!(manager.open(partner.clone()), Transition::Ignored);
        manager.exit_complete(OverlayKind::MobileMenu).unwrap();
        assert_eq!(manager.open(partner), Transition::Applied);
        assert!(lock_matches_phases(&manager));
    }

    #[test]
    fn double_dismiss_yields_one_notice() {
        let mut manager = OverlayManager::new();
        let _ = manager.open(OverlaySubject::Video);
        let _ = manager.entry_complete(OverlayKind::Video);

        assert!(manager
            .dismiss(OverlayKind::Video, DismissSource::Escape)
            .is_applied());
        assert_eq!(
            manager.dismiss(OverlayKind::Video, DismissSource::Backdrop),
            Transition::Ignored
        );
        assert!(manager.exit_complete(OverlayKind::Video).is_some());
        assert!(manager.exit_complete(OverlayKind::Video).is_none());
        assert_eq!(manager.closed_notices().len(), 1);
    }

    #[test]
    fn taking_notices_empties_the_queue() {
        let mut manager = OverlayManager::new();
        for _ in 0..3 {
            let _ = manager.open(OverlaySubject::Menu);
            let _ = manager.close(OverlayKind::MobileMenu);
            let _ = manager.exit_complete(OverlayKind::MobileMenu);
        }
        assert_eq!(manager.closed_notices().len(), 3);

        let taken = manager.take_closed_notices();
        assert_eq!(taken.len(), 3);
        assert!(taken
            .iter()
            .all(|notice| notice.kind == OverlayKind::MobileMenu));
        assert!(manager.closed_notices().is_empty());
        assert!(manager.take_closed_notices().is_empty());
    }

    #[test]
    fn teardown_releases_lock_silently() {
        let mut manager = OverlayManager::new();
        let _ = manager.open(OverlaySubject::Video);

        assert!(manager.teardown(OverlayKind::Video));
        assert!(!manager.is_scroll_locked());
        assert!(manager.closed_notices().is_empty());
        assert!(!manager.teardown(OverlayKind::Video));
    }
}
