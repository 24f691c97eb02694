/// Outcome of feeding an input to one of the site state machines.
///
/// Inputs that do not apply to the current state are ignored rather than
/// reported as errors; callers decide whether that is worth logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Transition {
    Applied,
    Ignored,
}

impl Transition {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }

    pub(crate) fn from_bool(applied: bool) -> Self {
        if applied {
            Self::Applied
        } else {
            Self::Ignored
        }
    }
}
