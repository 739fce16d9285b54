//! Change-tracked value container
//!
//! Every field that reaches the panel over the wire is wrapped in a
//! [`Tracked`] so the protocol layer can retransmit only what changed.

/// A value with a dirty flag raised on observable mutation
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tracked<T> {
    value: T,
    changed: bool,
}

impl<T: PartialEq> Tracked<T> {
    /// Wrap an initial value; the flag starts cleared
    pub const fn new(value: T) -> Self {
        Self {
            value,
            changed: false,
        }
    }

    /// Replace the value, raising the flag if the new value differs
    pub fn set(&mut self, value: T) {
        if value != self.value {
            self.changed = true;
        }
        self.value = value;
    }

    /// Replace the value without touching the flag
    ///
    /// Used when the value arrives from an authoritative source that has
    /// already acknowledged it, so no retransmission should be queued.
    pub fn set_raw(&mut self, value: T) {
        self.value = value;
    }

    /// Current value
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Whether the value changed since the last transmission
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Read and clear the flag
    ///
    /// Only the protocol layer calls this, after it has transmitted the
    /// value.
    pub fn take_changed(&mut self) -> bool {
        core::mem::replace(&mut self.changed, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_set_does_not_flag() {
        let mut v = Tracked::new(42);
        v.set(42);
        assert!(!v.is_changed());
    }

    #[test]
    fn differing_set_flags() {
        let mut v = Tracked::new(42);
        v.set(43);
        assert!(v.is_changed());
        assert_eq!(*v.get(), 43);
    }

    #[test]
    fn raw_set_never_flags() {
        let mut v = Tracked::new(42);
        v.set_raw(99);
        assert!(!v.is_changed());
        assert_eq!(*v.get(), 99);
    }

    #[test]
    fn take_changed_clears() {
        let mut v = Tracked::new(1);
        v.set(2);
        assert!(v.take_changed());
        assert!(!v.take_changed());
    }

    #[test]
    fn flag_sticks_across_equal_set() {
        let mut v = Tracked::new(1);
        v.set(2);
        v.set(2);
        assert!(v.is_changed());
    }
}
