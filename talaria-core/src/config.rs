//! Static per-mode configuration
//!
//! All mode state is rebuilt at startup from these types; nothing is
//! persisted. Misconfiguration is rejected at construction time and is
//! never a runtime error.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum title/suffix length
pub const MAX_LABEL_LEN: usize = 16;

/// Fast-spin threshold in milliseconds
///
/// A rotation arriving sooner than this after the previous one selects
/// the coarse step of the mode's [`StepRule`].
pub const FAST_SPIN_MS: u64 = 30;

/// Errors raised by invalid mode or panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `min` exceeds `max`
    InvalidRange,
    /// A step value is zero or negative
    InvalidStep,
    /// Title or suffix exceeds [`MAX_LABEL_LEN`]
    LabelTooLong,
    /// Registry holds no modes (a panel needs at least one)
    NoModes,
    /// Registry capacity exceeded while building a preset table
    TooManyModes,
}

/// Coarse/fine step schedule for integer modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepRule {
    /// Step applied at leisurely rotation speed
    pub slow: i32,
    /// Step applied while fast-spinning (see [`FAST_SPIN_MS`])
    pub fast: i32,
}

impl StepRule {
    /// Plain ±1 stepping at any speed
    pub const SINGLE: StepRule = StepRule { slow: 1, fast: 1 };

    /// The same step at any speed
    pub const fn fixed(step: i32) -> Self {
        Self {
            slow: step,
            fast: step,
        }
    }

    /// Separate slow and fast steps
    pub const fn accelerated(slow: i32, fast: i32) -> Self {
        Self { slow, fast }
    }

    /// Select the step for a rotation that arrived `elapsed_ms` after
    /// the previous one
    pub fn step_for(&self, elapsed_ms: u64) -> i32 {
        if elapsed_ms < FAST_SPIN_MS {
            self.fast
        } else {
            self.slow
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.slow <= 0 || self.fast <= 0 {
            return Err(ConfigError::InvalidStep);
        }
        Ok(())
    }
}

/// Bounds and stepping parameters of an integer mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntParams {
    /// Minimum value, inclusive
    pub min: i32,
    /// Maximum value, inclusive
    pub max: i32,
    /// Wrap to the opposite bound instead of clamping
    pub cycling: bool,
    /// Step schedule
    pub rule: StepRule,
}

impl IntParams {
    /// Percent-style parameters: `[0, 100]`, fine 1 / coarse 10
    pub const fn percent() -> Self {
        Self {
            min: 0,
            max: 100,
            cycling: false,
            rule: StepRule::accelerated(1, 10),
        }
    }

    /// Check the construction-time contract: `min <= max`, steps > 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvalidRange);
        }
        self.rule.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_defaults() {
        let p = IntParams::percent();
        assert_eq!((p.min, p.max), (0, 100));
        assert!(!p.cycling);
        assert_eq!(p.rule, StepRule::accelerated(1, 10));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn inverted_range_rejected() {
        let p = IntParams {
            min: 10,
            max: 0,
            cycling: false,
            rule: StepRule::SINGLE,
        };
        assert_eq!(p.validate(), Err(ConfigError::InvalidRange));
    }

    #[test]
    fn non_positive_step_rejected() {
        for rule in [StepRule::fixed(0), StepRule::accelerated(1, -10)] {
            let p = IntParams {
                min: 0,
                max: 100,
                cycling: false,
                rule,
            };
            assert_eq!(p.validate(), Err(ConfigError::InvalidStep));
        }
    }

    #[test]
    fn threshold_selects_step() {
        let rule = StepRule::accelerated(1, 10);
        assert_eq!(rule.step_for(10), 10);
        assert_eq!(rule.step_for(29), 10);
        assert_eq!(rule.step_for(30), 1);
        assert_eq!(rule.step_for(500), 1);
    }
}
