use crate::Transition;

/// Single-open accordion used by the FAQ section. The first entry starts
/// expanded; toggling the expanded entry collapses everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    active: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: (len > 0).then_some(0),
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn toggle(&mut self, index: usize) -> Transition {
        if index >= self.len {
            return Transition::Ignored;
        }
        self.active = if self.is_open(index) {
            None
        } else {
            Some(index)
        };
        Transition::Applied
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_one_entry_at_a_time() {
        let mut faq = Accordion::new(5);
        assert!(faq.is_open(0));

        let _ = faq.toggle(3);
        assert_eq!(faq.active(), Some(3));
        let _ = faq.toggle(3);
        assert_eq!(faq.active(), None);

        assert_eq!(faq.toggle(5), Transition::Ignored);
        faq.reset();
        assert_eq!(faq.active(), Some(0));
    }

    #[test]
    fn empty_accordion_has_nothing_open() {
        assert_eq!(Accordion::new(0).active(), None);
    }
}
