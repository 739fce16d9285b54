//! Mode selector state machine
//!
//! Two states: value-adjust (initial), where rotation goes to the active
//! mode, and mode-select, where rotation moves the selection. The button
//! toggles between them; it never momentarily enters a state.

use talaria_protocol::Direction;

/// Tracks which mode is active and which input state the panel is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Selector {
    active: usize,
    select_mode: bool,
}

impl Default for Selector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector {
    /// Start at the first mode, in value-adjust state
    pub const fn new() -> Self {
        Self {
            active: 0,
            select_mode: false,
        }
    }

    /// Index of the mode currently receiving rotation input
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Whether rotation currently changes the selection instead of a value
    pub fn in_select_mode(&self) -> bool {
        self.select_mode
    }

    /// Button press: toggle the input state, returning the new state
    pub fn press(&mut self) -> bool {
        self.select_mode = !self.select_mode;
        self.select_mode
    }

    /// Move the selection one step, clamped to `[0, count - 1]`
    ///
    /// Returns `true` when the active index actually changed.
    pub fn rotate(&mut self, dir: Direction, count: usize) -> bool {
        if count == 0 {
            return false;
        }

        let next = (self.active as i32 + dir.delta()).clamp(0, count as i32 - 1) as usize;
        let changed = next != self.active;
        self.active = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_value_adjust() {
        let selector = Selector::new();
        assert!(!selector.in_select_mode());
        assert_eq!(selector.active_index(), 0);
    }

    #[test]
    fn press_toggles_and_press_twice_returns() {
        let mut selector = Selector::new();
        assert!(selector.press());
        assert!(selector.in_select_mode());
        assert!(!selector.press());
        assert!(!selector.in_select_mode());
    }

    #[test]
    fn rotation_clamps_at_both_ends() {
        let mut selector = Selector::new();

        // Never below zero, regardless of rotation count
        for _ in 0..10 {
            selector.rotate(Direction::Left, 3);
        }
        assert_eq!(selector.active_index(), 0);

        // Never above count - 1
        for _ in 0..10 {
            selector.rotate(Direction::Right, 3);
        }
        assert_eq!(selector.active_index(), 2);
    }

    #[test]
    fn rotate_reports_change() {
        let mut selector = Selector::new();
        assert!(selector.rotate(Direction::Right, 3));
        assert!(!selector.rotate(Direction::Right, 2));
        assert!(selector.rotate(Direction::Left, 2));
        assert!(!selector.rotate(Direction::Left, 2));
    }
}
