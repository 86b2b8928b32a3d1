//! Focus-trap arithmetic for the terms dialog.
//!
//! The dialog collects its focusable controls into a ring when it
//! opens; this type owns the current position and the Tab / Shift+Tab
//! wrapping. Moving actual keyboard focus is the UI layer's job.

/// Position tracker over a fixed ring of focusable controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusCycle {
    len: usize,
    current: usize,
}

impl FocusCycle {
    /// A ring of `len` controls with the first one focused.
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Record a focus move that happened outside the trap, e.g. a mouse
    /// click on one of the controls. Out-of-range indices are ignored.
    pub fn focus(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }

    /// Advance (Tab). The last control wraps to the first.
    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }

    /// Retreat (Shift+Tab). The first control wraps to the last.
    pub fn previous(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_from_last_wraps_to_first() {
        let mut cycle = FocusCycle::new(3);
        cycle.focus(2);
        assert_eq!(cycle.next(), 0);
    }

    #[test]
    fn shift_tab_from_first_wraps_to_last() {
        let mut cycle = FocusCycle::new(3);
        assert_eq!(cycle.previous(), 2);
    }

    #[test]
    fn cycles_through_all_positions() {
        let mut cycle = FocusCycle::new(3);
        assert_eq!(cycle.next(), 1);
        assert_eq!(cycle.next(), 2);
        assert_eq!(cycle.next(), 0);
    }

    #[test]
    fn singleton_ring_stays_put() {
        let mut cycle = FocusCycle::new(1);
        assert_eq!(cycle.next(), 0);
        assert_eq!(cycle.previous(), 0);
    }

    #[test]
    fn empty_ring_is_inert() {
        let mut cycle = FocusCycle::new(0);
        assert_eq!(cycle.next(), 0);
        assert_eq!(cycle.previous(), 0);
    }

    #[test]
    fn out_of_range_focus_is_ignored() {
        let mut cycle = FocusCycle::new(3);
        cycle.focus(1);
        cycle.focus(9);
        assert_eq!(cycle.current(), 1);
    }
}
