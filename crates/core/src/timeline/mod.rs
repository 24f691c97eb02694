//! Deterministic event loop used in place of browser timers.
//!
//! Every deferred step of the site (next paint, animation completion, the
//! simulated submission round trip, carousel ticks) is a [`ScheduledEvent`]
//! owned by the component that registered it, so unmounting a component can
//! drop its pending work in one call.

use serde::{Deserialize, Serialize};

use crate::overlay::OverlayKind;

/// Milliseconds on the virtual site clock.
pub type Millis = u64;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SiteClock {
    now_ms: Millis,
}

impl SiteClock {
    pub fn now(&self) -> Millis {
        self.now_ms
    }

    pub fn reset(&mut self) {
        self.now_ms = 0;
    }

    pub fn advance(&mut self, delta: Millis) {
        self.now_ms = self.now_ms.saturating_add(delta);
    }

    /// Moves the clock forward to `time`. The clock never runs backwards.
    pub fn advance_to(&mut self, time: Millis) {
        self.now_ms = self.now_ms.max(time);
    }
}

/// Component that registered a timer and is responsible for cancelling it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerOwner {
    View,
    Overlay(OverlayKind),
    Carousel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// Continuations the site reacts to once their timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiteEvent {
    RenderComplete,
    OverlayEntryComplete(OverlayKind),
    OverlayExitComplete(OverlayKind),
    SubmissionResolved(OverlayKind),
    SuccessFadeComplete(OverlayKind),
    CarouselTick,
    CarouselExitComplete,
    CarouselEnterComplete,
}

#[derive(Debug, Clone)]
pub struct ScheduledEvent {
    pub id: TimerId,
    pub due_ms: Millis,
    pub owner: TimerOwner,
    pub event: SiteEvent,
}

/// Pending events kept in due order. Events due at the same instant fire in
/// the order they were scheduled.
#[derive(Debug, Default)]
pub struct Scheduler {
    events: Vec<ScheduledEvent>,
    next_id: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(
        &mut self,
        now: Millis,
        owner: TimerOwner,
        delay_ms: Millis,
        event: SiteEvent,
    ) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let due_ms = now.saturating_add(delay_ms);
        let position = self
            .events
            .partition_point(|pending| pending.due_ms <= due_ms);
        self.events.insert(
            position,
            ScheduledEvent {
                id,
                due_ms,
                owner,
                event,
            },
        );
        tracing::trace!(?id, ?owner, ?event, due_ms, "scheduled");
        id
    }

    /// Removes a single timer. Returns `false` if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.events.len();
        self.events.retain(|pending| pending.id != id);
        before != self.events.len()
    }

    /// Drops every timer registered by `owner` and returns how many were
    /// removed.
    pub fn cancel_owner(&mut self, owner: TimerOwner) -> usize {
        let before = self.events.len();
        self.events.retain(|pending| pending.owner != owner);
        let removed = before - self.events.len();
        if removed > 0 {
            tracing::debug!(?owner, removed, "cancelled pending timers");
        }
        removed
    }

    pub fn pending(&self) -> usize {
        self.events.len()
    }

    pub fn pending_for(&self, owner: TimerOwner) -> usize {
        self.events
            .iter()
            .filter(|pending| pending.owner == owner)
            .count()
    }

    pub fn next_due(&self) -> Option<Millis> {
        self.events.first().map(|pending| pending.due_ms)
    }

    /// Pops the earliest event if it is due at or before `now`.
    pub fn pop_due(&mut self, now: Millis) -> Option<ScheduledEvent> {
        match self.events.first() {
            Some(pending) if pending.due_ms <= now => Some(self.events.remove(0)),
            _ => None,
        }
    }
}
