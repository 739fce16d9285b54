//! Simulator command vocabulary
//!
//! The core does not talk to the simulator SDK. It only names the client
//! event a mode maps to and scales the mode's value into the unit the
//! event expects; delivery is the [`CommandSink`](crate::traits::CommandSink)
//! collaborator's concern.

/// Simulator client events the preset modes map to
///
/// Names follow the SimConnect client events they are bound to by the
/// integration layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SimEvent {
    ThrottleSet,
    MixtureSet,
    ElevatorTrimSet,
    ApSpdVarSet,
    HeadingBugSet,
    ApAltVarSet,
    ApVsVarSet,
    ApMasterSet,
    ApFlcSet,
    ApHdgHoldSet,
    ApVsHoldSet,
    ParkingBrakeSet,
}

/// How a mode's value maps to the unit its simulator event expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UnitScale {
    /// Value passed through unchanged (degrees, feet, knots, booleans)
    Raw,
    /// Percent mapped onto the 0..16384 axis range
    AxisPercent,
}

impl UnitScale {
    /// Scale a clamped mode value into simulator units
    pub fn apply(&self, value: i32) -> i32 {
        match self {
            UnitScale::Raw => value,
            UnitScale::AxisPercent => {
                // Widened to i64: the product overflows i32 for values past
                // roughly +/-131071, and nothing stops a mode from pairing
                // axis scaling with wider bounds. Saturate on the way back.
                let numerator = i64::from(value) * 16384;
                // Round to nearest, away from zero on halves
                let scaled = if numerator >= 0 {
                    (numerator + 50) / 100
                } else {
                    (numerator - 50) / 100
                };
                scaled.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
            }
        }
    }
}

/// A mode's simulator binding: which event, in which unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandSpec {
    /// Target client event
    pub event: SimEvent,
    /// Value scaling applied before sending
    pub scale: UnitScale,
}

impl CommandSpec {
    /// Event taking the mode value as-is
    pub const fn raw(event: SimEvent) -> Self {
        Self {
            event,
            scale: UnitScale::Raw,
        }
    }

    /// Event taking the mode value as a 0..16384 axis fraction
    pub const fn axis(event: SimEvent) -> Self {
        Self {
            event,
            scale: UnitScale::AxisPercent,
        }
    }
}
