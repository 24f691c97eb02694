//! The site as a whole: router, overlays, carousel and FAQ wired to one
//! deterministic event loop.
//!
//! Inputs arrive as [`UiCommand`]s; everything that the browser would defer
//! (next paint, animation completion, the submission round trip, carousel
//! ticks) is scheduled on the [`Scheduler`] and only happens when the caller
//! advances the clock with [`Site::advance`].

use serde::{Deserialize, Serialize};

use crate::{
    accordion::Accordion,
    carousel::CarouselController,
    config::SiteConfig,
    content::ContentCatalog,
    forms::{FormData, SimulatedBackend, SubmissionBackend, SubmissionOutcome},
    overlay::{
        ClosedNotice, DismissSource, OverlayKind, OverlayManager, OverlayPhase, OverlaySubject,
        PartnerCategory,
    },
    render::{CarouselSnapshot, OverlaySnapshot, RenderSnapshot},
    timeline::{Millis, Scheduler, SiteClock, SiteEvent, TimerOwner},
    view::{NavigationOutcome, View, ViewController},
    Result, SiteError, Transition,
};

/// User input the site reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiCommand {
    Navigate {
        view: View,
        #[serde(default)]
        anchor: Option<String>,
        #[serde(default)]
        content_id: Option<u32>,
    },
    OpenPartner {
        category: PartnerCategory,
    },
    OpenProgramme {
        programme_id: u32,
    },
    OpenVideo,
    ToggleMenu,
    Submit {
        overlay: OverlayKind,
        form: FormData,
    },
    Dismiss {
        overlay: OverlayKind,
        source: DismissSource,
    },
    ToggleFaq {
        index: usize,
    },
    AdvanceCarousel,
}

/// Longest stretch of virtual time a single [`Site::advance`] call covers.
/// One day holds a few thousand carousel rotations.
pub const MAX_ADVANCE_MS: Millis = 24 * 60 * 60 * 1_000;

/// One step of a replay script: run the clock to `at_ms`, then apply
/// `command`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub at_ms: Millis,
    pub command: UiCommand,
}

#[derive(Debug)]
pub struct Site {
    config: SiteConfig,
    clock: SiteClock,
    scheduler: Scheduler,
    views: ViewController,
    overlays: OverlayManager,
    carousel: CarouselController,
    faq: Accordion,
    catalog: ContentCatalog,
    backend: Box<dyn SubmissionBackend>,
    home_mounted: bool,
    last_closed: Option<ClosedNotice>,
}

impl Site {
    pub fn new(config: SiteConfig) -> Result<Self> {
        Self::with_backend(config, Box::new(SimulatedBackend::new()))
    }

    pub fn with_backend(config: SiteConfig, backend: Box<dyn SubmissionBackend>) -> Result<Self> {
        config.validate()?;
        let catalog = ContentCatalog::shiftup();
        let carousel = CarouselController::new(catalog.testimonials().len(), &config.carousel)?;

        let mut site = Self {
            views: ViewController::new(config.navigation.anchor_offset_px),
            faq: Accordion::new(catalog.faqs().len()),
            config,
            clock: SiteClock::default(),
            scheduler: Scheduler::new(),
            overlays: OverlayManager::new(),
            carousel,
            catalog,
            backend,
            home_mounted: false,
            last_closed: None,
        };
        site.mount(site.views.view());
        Ok(site)
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn now(&self) -> Millis {
        self.clock.now()
    }

    pub fn views(&self) -> &ViewController {
        &self.views
    }

    pub fn overlays(&self) -> &OverlayManager {
        &self.overlays
    }

    pub fn carousel(&self) -> &CarouselController {
        &self.carousel
    }

    pub fn faq(&self) -> &Accordion {
        &self.faq
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// The most recent overlay that finished closing through its exit
    /// animation. Teardowns on unmount do not count.
    pub fn last_closed(&self) -> Option<&ClosedNotice> {
        self.last_closed.as_ref()
    }

    pub fn apply(&mut self, command: UiCommand) -> Result<Transition> {
        tracing::debug!(?command, at_ms = self.now(), "command");
        match command {
            UiCommand::Navigate {
                view,
                anchor,
                content_id,
            } => {
                self.navigate(view, anchor, content_id);
                Ok(Transition::Applied)
            }
            UiCommand::OpenPartner { category } => {
                Ok(self.open_overlay(OverlaySubject::Partner { category }))
            }
            UiCommand::OpenProgramme { programme_id } => {
                let programme = self.catalog.programme(programme_id)?;
                Ok(self.open_overlay(OverlaySubject::Programme {
                    title: programme.title.to_string(),
                    image: programme.image.to_string(),
                }))
            }
            UiCommand::OpenVideo => Ok(self.open_overlay(OverlaySubject::Video)),
            UiCommand::ToggleMenu => Ok(self.toggle_menu()),
            UiCommand::Submit { overlay, form } => self.submit(overlay, form),
            UiCommand::Dismiss { overlay, source } => Ok(self.dismiss(overlay, source)),
            UiCommand::ToggleFaq { index } => Ok(self.toggle_faq(index)),
            UiCommand::AdvanceCarousel => Ok(self.advance_carousel()),
        }
    }

    /// Replaces the current view. The mobile menu closes, overlays and
    /// sections owned by the previous view are unmounted, and one scroll is
    /// scheduled for the next render pass.
    pub fn navigate(
        &mut self,
        view: View,
        anchor: Option<String>,
        content_id: Option<u32>,
    ) -> NavigationOutcome {
        self.unmount_overlay(OverlayKind::MobileMenu);

        let outcome = self.views.navigate(view, anchor, content_id);
        if outcome.changed_view() {
            self.unmount(outcome.previous);
            self.mount(view);
        }

        self.scheduler.cancel_owner(TimerOwner::View);
        self.schedule(TimerOwner::View, 0, SiteEvent::RenderComplete);
        outcome
    }

    pub fn open_overlay(&mut self, subject: OverlaySubject) -> Transition {
        let kind = subject.kind();
        if !self.is_mounted(kind) {
            tracing::warn!(
                %kind,
                view = %self.views.view(),
                "overlay is not mounted on this view"
            );
            return Transition::Ignored;
        }

        let transition = self.overlays.open(subject);
        if transition.is_applied() {
            let entry_ms = self.config.overlays.for_kind(kind).entry_ms;
            self.schedule(
                TimerOwner::Overlay(kind),
                entry_ms,
                SiteEvent::OverlayEntryComplete(kind),
            );
        }
        transition
    }

    pub fn dismiss(&mut self, kind: OverlayKind, source: DismissSource) -> Transition {
        let transition = self.overlays.dismiss(kind, source);
        if transition.is_applied() {
            // Pending entry or submission timers must not fire into a closing overlay.
            let owner = TimerOwner::Overlay(kind);
            self.scheduler.cancel_owner(owner);
            let exit_ms = self.config.overlays.for_kind(kind).exit_ms;
            self.schedule(owner, exit_ms, SiteEvent::OverlayExitComplete(kind));
        }
        transition
    }

    pub fn toggle_menu(&mut self) -> Transition {
        match self.overlays.phase(OverlayKind::MobileMenu) {
            OverlayPhase::Opening | OverlayPhase::Open => {
                self.dismiss(OverlayKind::MobileMenu, DismissSource::CloseButton)
            }
            OverlayPhase::Closing => Transition::Ignored,
            OverlayPhase::Closed => self.open_overlay(OverlaySubject::Menu),
        }
    }

    pub fn submit(&mut self, kind: OverlayKind, form: FormData) -> Result<Transition> {
        let transition = self.overlays.submit(kind, form)?;
        if transition.is_applied() {
            let delay_ms = self.config.submission.delay_ms;
            self.schedule(
                TimerOwner::Overlay(kind),
                delay_ms,
                SiteEvent::SubmissionResolved(kind),
            );
        }
        Ok(transition)
    }

    pub fn toggle_faq(&mut self, index: usize) -> Transition {
        if !self.home_mounted {
            return Transition::Ignored;
        }
        self.faq.toggle(index)
    }

    /// Skips to the next testimonial window and restarts the rotation timer.
    pub fn advance_carousel(&mut self) -> Transition {
        if !self.home_mounted {
            return Transition::Ignored;
        }
        let transition = self.carousel.advance_now();
        if transition.is_applied() {
            self.scheduler.cancel_owner(TimerOwner::Carousel);
            let carousel = &self.config.carousel;
            let (exit_ms, period_ms) = (carousel.exit_ms, carousel.period_ms);
            self.schedule(
                TimerOwner::Carousel,
                exit_ms,
                SiteEvent::CarouselExitComplete,
            );
            self.schedule(TimerOwner::Carousel, period_ms, SiteEvent::CarouselTick);
        }
        transition
    }

    /// Runs the clock forward by `delta_ms`, firing every event that falls
    /// due on the way, including ones scheduled by handlers along the way.
    /// Returns how many events fired.
    ///
    /// `delta_ms` is clamped to [`MAX_ADVANCE_MS`].
    pub fn advance(&mut self, delta_ms: Millis) -> usize {
        let delta_ms = if delta_ms > MAX_ADVANCE_MS {
            tracing::warn!(delta_ms, max_ms = MAX_ADVANCE_MS, "advance clamped");
            MAX_ADVANCE_MS
        } else {
            delta_ms
        };
        let target = self.clock.now().saturating_add(delta_ms);
        let mut fired = 0;

        while let Some(due) = self.scheduler.next_due() {
            if due > target {
                break;
            }
            self.clock.advance_to(due);
            let Some(scheduled) = self.scheduler.pop_due(self.clock.now()) else {
                break;
            };
            self.handle(scheduled.event);
            fired += 1;
        }

        self.clock.advance_to(target);
        fired
    }

    /// Runs a replay script in order. Commands the site rejects are logged
    /// and skipped. A step scheduled before the current time, or more than
    /// [`MAX_ADVANCE_MS`] after it, is an error.
    pub fn replay(&mut self, steps: &[ScriptStep]) -> Result<Vec<RenderSnapshot>> {
        let mut snapshots = Vec::with_capacity(steps.len());
        for step in steps {
            let now = self.now();
            if step.at_ms < now {
                return Err(SiteError::msg(format!(
                    "replay step at {} ms is earlier than the current time {now} ms",
                    step.at_ms
                )));
            }
            let gap_ms = step.at_ms - now;
            if gap_ms > MAX_ADVANCE_MS {
                return Err(SiteError::msg(format!(
                    "replay step at {} ms is {gap_ms} ms ahead, more than {MAX_ADVANCE_MS} ms",
                    step.at_ms
                )));
            }
            self.advance(gap_ms);

            match self.apply(step.command.clone()) {
                Ok(Transition::Ignored) => {
                    tracing::warn!(
                        at_ms = step.at_ms,
                        command = ?step.command,
                        "command ignored"
                    );
                }
                Ok(Transition::Applied) => {}
                Err(err) => {
                    tracing::warn!(at_ms = step.at_ms, error = %err, "command rejected");
                }
            }
            snapshots.push(self.snapshot());
        }
        Ok(snapshots)
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        let state = self.views.current();
        let blog_post = state
            .content_id
            .filter(|_| state.view == View::Blog)
            .and_then(|id| self.catalog.post(id).ok())
            .map(|post| post.id);

        let carousel = self.home_mounted.then(|| {
            let indices = self.carousel.window_indices();
            let testimonials = self.catalog.testimonials();
            CarouselSnapshot {
                phase: self.carousel.phase(),
                authors: indices.iter().map(|&index| testimonials[index].author).collect(),
                indices,
            }
        });

        RenderSnapshot {
            at_ms: self.now(),
            view: state.view,
            anchor: state.anchor.clone(),
            content_id: state.content_id,
            blog_post,
            last_scroll: self.views.last_scroll().cloned(),
            active_overlay: self.overlays.active(),
            scroll_locked: self.overlays.is_scroll_locked(),
            overlays: self
                .overlays
                .controllers()
                .iter()
                .map(OverlaySnapshot::from)
                .collect(),
            carousel,
            faq_open: self.home_mounted.then(|| self.faq.active()).flatten(),
        }
    }

    fn handle(&mut self, event: SiteEvent) {
        tracing::trace!(?event, at_ms = self.now(), "event");
        match event {
            SiteEvent::RenderComplete => {
                let _ = self.views.on_render_complete();
            }
            SiteEvent::OverlayEntryComplete(kind) => {
                let _ = self.overlays.entry_complete(kind);
            }
            SiteEvent::OverlayExitComplete(kind) => {
                let _ = self.overlays.exit_complete(kind);
                for notice in self.overlays.take_closed_notices() {
                    tracing::info!(kind = %notice.kind, result = ?notice.result, "overlay closed");
                    self.last_closed = Some(notice);
                }
            }
            SiteEvent::SubmissionResolved(kind) => self.resolve_submission(kind),
            SiteEvent::SuccessFadeComplete(kind) => {
                let _ = self
                    .overlays
                    .complete_submission(kind, SubmissionOutcome::Accepted);
            }
            SiteEvent::CarouselTick => {
                if self.carousel.tick().is_applied() {
                    let exit_ms = self.config.carousel.exit_ms;
                    self.schedule(
                        TimerOwner::Carousel,
                        exit_ms,
                        SiteEvent::CarouselExitComplete,
                    );
                }
                let period_ms = self.config.carousel.period_ms;
                self.schedule(TimerOwner::Carousel, period_ms, SiteEvent::CarouselTick);
            }
            SiteEvent::CarouselExitComplete => {
                if self.carousel.exit_complete().is_applied() {
                    let enter_ms = self.config.carousel.enter_ms;
                    self.schedule(
                        TimerOwner::Carousel,
                        enter_ms,
                        SiteEvent::CarouselEnterComplete,
                    );
                }
            }
            SiteEvent::CarouselEnterComplete => {
                let _ = self.carousel.enter_complete();
            }
        }
    }

    fn resolve_submission(&mut self, kind: OverlayKind) {
        let Some(form) = self.overlays.controller(kind).submitted_form().cloned() else {
            return;
        };
        match self.backend.submit(kind, &form) {
            // Only the registration modal fades its form out before the success view.
            SubmissionOutcome::Accepted if kind == OverlayKind::ProgrammeRegistration => {
                let fade_ms = self.config.submission.success_fade_ms;
                self.schedule(
                    TimerOwner::Overlay(kind),
                    fade_ms,
                    SiteEvent::SuccessFadeComplete(kind),
                );
            }
            outcome => {
                let _ = self.overlays.complete_submission(kind, outcome);
            }
        }
    }

    fn schedule(&mut self, owner: TimerOwner, delay_ms: Millis, event: SiteEvent) {
        let now = self.clock.now();
        let _ = self.scheduler.schedule(now, owner, delay_ms, event);
    }

    fn is_mounted(&self, kind: OverlayKind) -> bool {
        kind == OverlayKind::MobileMenu || self.views.view().mounted_overlay() == Some(kind)
    }

    fn mount(&mut self, view: View) {
        if view.mounts_home_sections() {
            self.carousel.reset();
            self.faq.reset();
            self.home_mounted = true;
            let period_ms = self.config.carousel.period_ms;
            self.schedule(TimerOwner::Carousel, period_ms, SiteEvent::CarouselTick);
        }
    }

    fn unmount(&mut self, view: View) {
        if let Some(kind) = view.mounted_overlay() {
            self.unmount_overlay(kind);
        }
        if view.mounts_home_sections() {
            self.scheduler.cancel_owner(TimerOwner::Carousel);
            self.home_mounted = false;
        }
    }

    fn unmount_overlay(&mut self, kind: OverlayKind) {
        self.scheduler.cancel_owner(TimerOwner::Overlay(kind));
        let _ = self.overlays.teardown(kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        carousel::CarouselPhase, forms::ScriptedBackend, overlay::ResultState, view::ScrollTarget,
    };

    fn site() -> Site {
        Site::new(SiteConfig::default()).unwrap()
    }

    fn sponsorship_form() -> FormData {
        FormData::new()
            .with("organisation", "Acme Foundation")
            .with("email", "partnerships@acme.org")
            .with("category", "financial")
    }

    fn registration_form() -> FormData {
        FormData::new()
            .with("full_name", "Amara Nwosu")
            .with("email", "amara@example.com")
            .with("intent", "Lead a product team")
    }

    fn assert_lock_invariant(site: &Site) {
        let any_active = site
            .overlays()
            .controllers()
            .iter()
            .any(|controller| controller.phase().is_active());
        assert_eq!(any_active, site.overlays().is_scroll_locked());
    }

    #[test]
    fn blog_navigation_selects_post() {
        let mut site = site();
        site.apply(UiCommand::Navigate {
            view: View::Blog,
            anchor: None,
            content_id: Some(3),
        })
        .unwrap();

        assert_eq!(site.views().selected_content_id(), Some(3));
        assert_eq!(site.snapshot().blog_post, Some(3));

        site.navigate(View::Blog, None, Some(42));
        assert_eq!(site.snapshot().blog_post, None);
    }

    #[test]
    fn scroll_happens_after_render() {
        let mut site = site();
        site.navigate(View::Home, Some("faq".to_string()), None);
        assert!(site.views().last_scroll().is_none());

        assert_eq!(site.advance(0), 1);
        assert_eq!(
            site.views().last_scroll(),
            Some(&ScrollTarget::Anchor {
                id: "faq".to_string(),
                offset_px: 100
            })
        );
    }

    #[test]
    fn rapid_navigation_scrolls_once() {
        let mut site = site();
        site.navigate(View::Partner, Some("benefits".to_string()), None);
        site.navigate(View::Programme, None, None);

        assert_eq!(site.scheduler().pending_for(TimerOwner::View), 1);
        site.advance(0);
        assert_eq!(site.views().last_scroll(), Some(&ScrollTarget::Top));
    }

    #[test]
    fn sponsorship_submission_stays_open() {
        let mut site = site();
        site.navigate(View::Partner, None, None);
        let opened = site
            .apply(UiCommand::OpenPartner {
                category: PartnerCategory::Sponsorship,
            })
            .unwrap();
        assert!(opened.is_applied());
        site.advance(600);
        assert_eq!(
            site.overlays().phase(OverlayKind::PartnerApplication),
            OverlayPhase::Open
        );

        site.submit(OverlayKind::PartnerApplication, sponsorship_form())
            .unwrap();
        site.advance(1_499);
        let controller = site.overlays().controller(OverlayKind::PartnerApplication);
        assert_eq!(controller.result(), &ResultState::Submitting);

        site.advance(1);
        let controller = site.overlays().controller(OverlayKind::PartnerApplication);
        assert_eq!(controller.result(), &ResultState::Succeeded);
        assert_eq!(controller.phase(), OverlayPhase::Open);
        assert!(site.overlays().is_scroll_locked());
    }

    #[test]
    fn registration_success_waits_for_form_fade() {
        let mut site = site();
        let registration = OverlayKind::ProgrammeRegistration;
        site.navigate(View::Programme, None, None);
        site.apply(UiCommand::OpenProgramme { programme_id: 2 })
            .unwrap();
        site.advance(1_400);

        site.submit(registration, registration_form()).unwrap();
        site.advance(1_500);
        let controller = site.overlays().controller(registration);
        assert_eq!(controller.result(), &ResultState::Submitting);

        site.advance(499);
        let controller = site.overlays().controller(registration);
        assert_eq!(controller.result(), &ResultState::Submitting);

        site.advance(1);
        let controller = site.overlays().controller(registration);
        assert_eq!(controller.result(), &ResultState::Succeeded);
        assert_eq!(controller.phase(), OverlayPhase::Open);
    }

    #[test]
    fn rejected_submission_can_be_retried() {
        let backend = ScriptedBackend::new([SubmissionOutcome::Rejected {
            reason: "mail relay unavailable".to_string(),
        }]);
        let mut site = Site::with_backend(SiteConfig::default(), Box::new(backend)).unwrap();
        let registration = OverlayKind::ProgrammeRegistration;
        site.navigate(View::Programme, None, None);
        site.apply(UiCommand::OpenProgramme { programme_id: 4 })
            .unwrap();
        site.advance(1_400);

        site.submit(registration, registration_form()).unwrap();
        site.advance(1_500);
        let controller = site.overlays().controller(registration);
        assert!(matches!(controller.result(), ResultState::Failed { .. }));

        let retried = site.submit(registration, registration_form()).unwrap();
        assert!(retried.is_applied());
        site.advance(2_000);
        let controller = site.overlays().controller(registration);
        assert_eq!(controller.result(), &ResultState::Succeeded);
    }

    #[test]
    fn unknown_programme_is_an_error() {
        let mut site = site();
        site.navigate(View::Programme, None, None);
        let err = site
            .apply(UiCommand::OpenProgramme { programme_id: 99 })
            .unwrap_err();
        assert!(matches!(
            err,
            SiteError::UnknownContent {
                kind: "programme",
                id: 99
            }
        ));
    }

    #[test]
    fn close_during_entry_notifies_once() {
        let mut site = site();
        site.apply(UiCommand::OpenVideo).unwrap();
        site.advance(100);
        assert!(site
            .dismiss(OverlayKind::Video, DismissSource::Escape)
            .is_applied());
        assert_eq!(
            site.dismiss(OverlayKind::Video, DismissSource::Backdrop),
            Transition::Ignored
        );

        assert_eq!(site.advance(2_000), 1);
        assert_eq!(
            site.overlays().phase(OverlayKind::Video),
            OverlayPhase::Closed
        );
        assert_eq!(
            site.last_closed().map(|notice| notice.kind),
            Some(OverlayKind::Video)
        );
        assert!(site.overlays().closed_notices().is_empty());
        assert!(!site.overlays().is_scroll_locked());
    }

    #[test]
    fn overlays_require_their_view() {
        let mut site = site();
        let partner = OverlaySubject::Partner {
            category: PartnerCategory::Mentor,
        };
        assert_eq!(site.open_overlay(partner), Transition::Ignored);
        assert!(site.open_overlay(OverlaySubject::Video).is_applied());
    }

    #[test]
    fn navigation_tears_down_overlays_and_menu() {
        let mut site = site();
        site.navigate(View::Programme, None, None);
        site.apply(UiCommand::OpenProgramme { programme_id: 1 })
            .unwrap();
        site.advance(1_400);
        site.submit(OverlayKind::ProgrammeRegistration, registration_form())
            .unwrap();

        site.navigate(View::TermsOfService, None, None);
        assert_eq!(
            site.overlays().phase(OverlayKind::ProgrammeRegistration),
            OverlayPhase::Closed
        );
        assert_eq!(
            site.scheduler()
                .pending_for(TimerOwner::Overlay(OverlayKind::ProgrammeRegistration)),
            0
        );
        assert!(!site.overlays().is_scroll_locked());
        assert!(site.last_closed().is_none());

        assert!(site.toggle_menu().is_applied());
        site.navigate(View::Blog, None, None);
        assert_eq!(
            site.overlays().phase(OverlayKind::MobileMenu),
            OverlayPhase::Closed
        );
        assert!(!site.overlays().is_scroll_locked());
    }

    #[test]
    fn menu_toggles_open_and_closed() {
        let mut site = site();
        assert!(site.toggle_menu().is_applied());
        site.advance(800);
        assert_eq!(
            site.overlays().phase(OverlayKind::MobileMenu),
            OverlayPhase::Open
        );

        assert!(site.toggle_menu().is_applied());
        assert_eq!(site.toggle_menu(), Transition::Ignored);
        site.advance(0);
        assert_eq!(
            site.overlays().phase(OverlayKind::MobileMenu),
            OverlayPhase::Closed
        );
        assert_eq!(
            site.last_closed().map(|notice| notice.kind),
            Some(OverlayKind::MobileMenu)
        );
    }

    #[test]
    fn carousel_rotates_on_its_timer() {
        let mut site = site();
        assert_eq!(site.snapshot().carousel.unwrap().indices, vec![0, 1]);

        site.advance(6_000);
        assert_eq!(site.carousel().phase(), CarouselPhase::Exiting);
        site.advance(700);
        assert_eq!(site.carousel().window_indices(), vec![2, 3]);
        site.advance(900);
        assert_eq!(site.carousel().phase(), CarouselPhase::Showing);

        site.advance(12_000);
        assert_eq!(site.carousel().advances(), 3);
        let snapshot = site.snapshot().carousel.unwrap();
        assert_eq!(snapshot.indices, vec![0, 1]);
        assert_eq!(snapshot.authors, vec!["Mr. John Doe", "Jane Smith"]);
    }

    #[test]
    fn manual_advance_restarts_the_timer() {
        let mut site = site();
        site.advance(5_000);
        assert!(site.advance_carousel().is_applied());
        assert_eq!(site.advance_carousel(), Transition::Ignored);

        site.advance(1_600);
        assert_eq!(site.carousel().window_indices(), vec![2, 3]);
        // The original tick at 6 000 ms was cancelled; the next one is due at 11 000 ms.
        site.advance(4_300);
        assert_eq!(site.carousel().phase(), CarouselPhase::Showing);
        site.advance(100);
        assert_eq!(site.carousel().phase(), CarouselPhase::Exiting);
    }

    #[test]
    fn leaving_home_stops_the_carousel() {
        let mut site = site();
        site.advance(6_100);
        site.navigate(View::Partner, None, None);
        assert_eq!(site.scheduler().pending_for(TimerOwner::Carousel), 0);
        assert!(site.snapshot().carousel.is_none());
        assert_eq!(site.advance_carousel(), Transition::Ignored);

        site.navigate(View::Home, None, None);
        assert_eq!(site.carousel().window_indices(), vec![0, 1]);
        assert_eq!(site.carousel().phase(), CarouselPhase::Showing);
    }

    #[test]
    fn faq_resets_on_remount() {
        let mut site = site();
        assert!(site.toggle_faq(2).is_applied());
        assert_eq!(site.snapshot().faq_open, Some(2));

        site.navigate(View::Partner, None, None);
        assert_eq!(site.toggle_faq(1), Transition::Ignored);
        site.navigate(View::Home, None, None);
        assert_eq!(site.faq().active(), Some(0));
    }

    #[test]
    fn scroll_lock_invariant_holds_across_a_session() {
        let mut site = site();
        let steps: Vec<(UiCommand, Millis)> = vec![
            (UiCommand::OpenVideo, 100),
            (UiCommand::ToggleMenu, 900),
            (
                UiCommand::Dismiss {
                    overlay: OverlayKind::Video,
                    source: DismissSource::Escape,
                },
                200,
            ),
            (UiCommand::ToggleMenu, 400),
            (
                UiCommand::Navigate {
                    view: View::Partner,
                    anchor: None,
                    content_id: None,
                },
                0,
            ),
            (
                UiCommand::OpenPartner {
                    category: PartnerCategory::Sponsorship,
                },
                300,
            ),
            (UiCommand::ToggleMenu, 700),
            (
                UiCommand::Submit {
                    overlay: OverlayKind::PartnerApplication,
                    form: sponsorship_form(),
                },
                1_000,
            ),
            (
                UiCommand::Navigate {
                    view: View::Home,
                    anchor: Some("faq".to_string()),
                    content_id: None,
                },
                3_000,
            ),
        ];

        for (command, wait) in steps {
            let _ = site.apply(command);
            assert_lock_invariant(&site);
            site.advance(wait);
            assert_lock_invariant(&site);
        }
        assert!(!site.overlays().is_scroll_locked());
    }

    #[test]
    fn replay_rejects_steps_in_the_past() {
        let mut site = site();
        let steps = vec![
            ScriptStep {
                at_ms: 1_000,
                command: UiCommand::OpenVideo,
            },
            ScriptStep {
                at_ms: 500,
                command: UiCommand::ToggleMenu,
            },
        ];
        assert!(site.replay(&steps).is_err());
    }

    #[test]
    fn huge_advance_is_clamped_to_one_day() {
        let mut site = site();
        let fired = site.advance(Millis::MAX);

        assert_eq!(site.now(), MAX_ADVANCE_MS);
        // Every period fires a tick plus exit and enter completions, except the
        // last, whose tick lands exactly on the target.
        let periods = MAX_ADVANCE_MS / 6_000;
        assert_eq!(fired as u64, periods * 3 - 2);
        assert_eq!(site.carousel().advances(), periods - 1);
        assert_eq!(site.carousel().phase(), CarouselPhase::Exiting);
    }

    #[test]
    fn replay_rejects_steps_far_in_the_future() {
        let mut site = site();
        let steps = vec![ScriptStep {
            at_ms: MAX_ADVANCE_MS + 1,
            command: UiCommand::OpenVideo,
        }];

        let err = site.replay(&steps).unwrap_err();
        assert!(format!("{err}").contains("ahead"));
        assert_eq!(site.now(), 0);
    }

    #[test]
    fn replay_collects_snapshots() {
        let script = r#"[
            { "at_ms": 0, "command": { "type": "navigate", "view": "partner" } },
            { "at_ms": 10, "command": { "type": "open_partner", "category": "Mentor" } },
            { "at_ms": 700, "command": { "type": "submit", "overlay": "partner_application",
              "form": { "full_name": "Kofi", "email": "kofi@example.com" } } }
        ]"#;
        let steps: Vec<ScriptStep> = serde_json::from_str(script).unwrap();
        let mut site = site();
        let snapshots = site.replay(&steps).unwrap();

        assert_eq!(snapshots.len(), 3);
        assert_eq!(snapshots[0].view, View::Partner);
        assert_eq!(
            snapshots[1].active_overlay,
            Some(OverlayKind::PartnerApplication)
        );
        let partner = snapshots[2].overlay(OverlayKind::PartnerApplication).unwrap();
        assert_eq!(partner.phase, OverlayPhase::Open);
        assert_eq!(partner.result, ResultState::Pending);
    }
}
