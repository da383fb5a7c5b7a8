//! Step sequencing for the portal's wizard flows.
//!
//! A wizard is a fixed, ordered list of steps. Forward navigation is gated
//! on the current step's validity; backward navigation is always allowed.
//! Validity is recomputed by the owning flow from its own state and pushed
//! in before navigating, so the wizard never holds stale flags.

/// Fixed-step wizard controller.
#[derive(Debug, Clone)]
pub struct Wizard {
    titles: Vec<&'static str>,
    current: usize,
    valid: Vec<bool>,
}

impl Wizard {
    pub fn new(titles: Vec<&'static str>) -> Self {
        let len = titles.len();
        assert!(len > 0, "a wizard needs at least one step");
        Self {
            titles,
            current: 0,
            valid: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn titles(&self) -> &[&'static str] {
        &self.titles
    }

    pub fn is_last(&self) -> bool {
        self.current == self.titles.len() - 1
    }

    /// Record the validity of a step, as computed by the owning flow.
    pub fn set_valid(&mut self, index: usize, valid: bool) {
        if index < self.valid.len() {
            self.valid[index] = valid;
        }
    }

    pub fn is_valid(&self, index: usize) -> bool {
        self.valid.get(index).copied().unwrap_or(false)
    }

    pub fn can_advance(&self) -> bool {
        !self.is_last() && self.valid[self.current]
    }

    /// Advance one step when the current step is valid. Returns true if the
    /// index moved. Invalid or last-step calls are no-ops, mirroring the
    /// disabled Next button.
    pub fn next(&mut self) -> bool {
        if self.can_advance() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Go back one step. Always allowed above step 0.
    pub fn previous(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Submit is offered only on a valid final step.
    pub fn can_submit(&self) -> bool {
        self.is_last() && self.valid[self.current]
    }

    /// Return to the initial state. Called by the owning flow after a
    /// successful submit (reset-after-submit policy) or on cancel.
    pub fn reset(&mut self) {
        self.current = 0;
        self.valid.fill(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_step() -> Wizard {
        Wizard::new(vec!["Select User", "Select Location", "Select Access"])
    }

    #[test]
    fn test_starts_at_first_step() {
        let wizard = three_step();
        assert_eq!(wizard.current(), 0);
        assert_eq!(wizard.len(), 3);
        assert!(!wizard.is_last());
    }

    #[test]
    fn test_next_blocked_when_invalid() {
        let mut wizard = three_step();
        assert!(!wizard.next());
        assert_eq!(wizard.current(), 0);
    }

    #[test]
    fn test_next_advances_when_valid() {
        let mut wizard = three_step();
        wizard.set_valid(0, true);
        assert!(wizard.next());
        assert_eq!(wizard.current(), 1);
    }

    #[test]
    fn test_next_noop_on_last_step() {
        let mut wizard = three_step();
        wizard.set_valid(0, true);
        wizard.set_valid(1, true);
        wizard.set_valid(2, true);
        wizard.next();
        wizard.next();
        assert!(wizard.is_last());
        assert!(!wizard.next());
        assert_eq!(wizard.current(), 2);
    }

    #[test]
    fn test_previous_always_allowed_above_zero() {
        let mut wizard = three_step();
        wizard.set_valid(0, true);
        wizard.next();
        // Step 1 never validated, back still works.
        assert!(wizard.previous());
        assert_eq!(wizard.current(), 0);
        assert!(!wizard.previous());
    }

    #[test]
    fn test_submit_only_on_valid_last_step() {
        let mut wizard = three_step();
        wizard.set_valid(0, true);
        wizard.set_valid(1, true);
        wizard.next();
        wizard.next();
        assert!(!wizard.can_submit());
        wizard.set_valid(2, true);
        assert!(wizard.can_submit());
    }

    #[test]
    fn test_reset_returns_to_initial_state() {
        let mut wizard = three_step();
        wizard.set_valid(0, true);
        wizard.next();
        wizard.reset();
        assert_eq!(wizard.current(), 0);
        assert!(!wizard.is_valid(0));
        assert!(!wizard.can_advance());
    }
}
