//! Append-only mode registry
//!
//! Built once at startup; membership and order never change afterwards.
//! Indices handed out by [`ModeRegistry::register`] stay valid for the
//! registry's lifetime and double as the wire mode indices.

use heapless::Vec;

use crate::mode::DisplayMode;

/// Maximum number of registered modes
pub const MAX_MODES: usize = 16;

/// Errors raised while building the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// Capacity of [`MAX_MODES`] exceeded
    Full,
}

/// Ordered collection of all mode instances
#[derive(Debug, Default)]
pub struct ModeRegistry {
    modes: Vec<DisplayMode, MAX_MODES>,
}

impl ModeRegistry {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self { modes: Vec::new() }
    }

    /// Append a mode, returning its stable index
    pub fn register(&mut self, mode: DisplayMode) -> Result<usize, RegistryError> {
        let index = self.modes.len();
        self.modes.push(mode).map_err(|_| RegistryError::Full)?;
        Ok(index)
    }

    /// Mode at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&DisplayMode> {
        self.modes.get(index)
    }

    /// Mutable mode at `index`, if in range
    pub fn get_mut(&mut self, index: usize) -> Option<&mut DisplayMode> {
        self.modes.get_mut(index)
    }

    /// Number of registered modes
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    /// Whether the registry holds no modes
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// Iterate over all modes in registration order
    pub fn iter(&self) -> impl Iterator<Item = &DisplayMode> {
        self.modes.iter()
    }

    /// Iterate mutably, for the external refresh tick
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut DisplayMode> {
        self.modes.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{CommandSpec, SimEvent};

    fn throttle() -> DisplayMode {
        DisplayMode::percent("THR", CommandSpec::axis(SimEvent::ThrottleSet)).unwrap()
    }

    #[test]
    fn register_returns_sequential_indices() {
        let mut registry = ModeRegistry::new();
        assert_eq!(registry.register(throttle()), Ok(0));
        assert_eq!(registry.register(throttle()), Ok(1));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn get_out_of_range_is_none() {
        let mut registry = ModeRegistry::new();
        registry.register(throttle()).unwrap();
        assert!(registry.get(0).is_some());
        assert!(registry.get(1).is_none());
    }

    #[test]
    fn capacity_is_enforced() {
        let mut registry = ModeRegistry::new();
        for _ in 0..MAX_MODES {
            registry.register(throttle()).unwrap();
        }
        assert_eq!(registry.register(throttle()), Err(RegistryError::Full));
        assert_eq!(registry.len(), MAX_MODES);
    }
}
