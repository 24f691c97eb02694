use super::OverlayKind;

/// Reference-counted "background scroll disabled" flag.
///
/// Every holder owns a [`ScrollLease`]; releasing consumes it, so a single
/// acquisition can never be released twice.
#[derive(Debug, Default)]
pub struct ScrollLock {
    holders: usize,
}

/// Proof of one acquisition of a [`ScrollLock`].
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping a lease without releasing it leaves scrolling disabled"]
pub struct ScrollLease {
    owner: OverlayKind,
}

impl ScrollLease {
    pub fn owner(&self) -> OverlayKind {
        self.owner
    }
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&mut self, owner: OverlayKind) -> ScrollLease {
        self.holders += 1;
        if self.holders == 1 {
            tracing::debug!(%owner, "background scroll disabled");
        }
        ScrollLease { owner }
    }

    pub fn release(&mut self, lease: ScrollLease) {
        self.holders = self.holders.saturating_sub(1);
        if self.holders == 0 {
            tracing::debug!(owner = %lease.owner, "background scroll enabled");
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders > 0
    }

    pub fn holders(&self) -> usize {
        self.holders
    }
}
