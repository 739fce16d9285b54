//! Default instrument mode table
//!
//! The standard panel layout: engine controls, autopilot toggles, and the
//! autopilot bug values. Registration order is fixed because the indices
//! double as the device's mode indices.

use crate::config::{ConfigError, IntParams, StepRule};
use crate::mode::DisplayMode;
use crate::registry::ModeRegistry;
use crate::sim::{CommandSpec, SimEvent};

/// Build the standard mode registry
pub fn standard_registry() -> Result<ModeRegistry, ConfigError> {
    let mut registry = ModeRegistry::new();

    let mut add = |mode: DisplayMode| -> Result<(), ConfigError> {
        registry.register(mode).map_err(|_| ConfigError::TooManyModes)?;
        Ok(())
    };

    add(DisplayMode::percent(
        "THR",
        CommandSpec::axis(SimEvent::ThrottleSet),
    )?)?;
    add(DisplayMode::percent(
        "MIX",
        CommandSpec::axis(SimEvent::MixtureSet),
    )?)?;
    add(DisplayMode::integer(
        "EL TRIM",
        "%",
        IntParams {
            min: -100,
            max: 100,
            cycling: false,
            rule: StepRule::accelerated(1, 10),
        },
        CommandSpec::axis(SimEvent::ElevatorTrimSet),
    )?)?;

    add(DisplayMode::boolean(
        "PRK BRK",
        CommandSpec::raw(SimEvent::ParkingBrakeSet),
    )?)?;
    add(DisplayMode::boolean(
        "A/P",
        CommandSpec::raw(SimEvent::ApMasterSet),
    )?)?;
    add(DisplayMode::boolean(
        "FLC",
        CommandSpec::raw(SimEvent::ApFlcSet),
    )?)?;
    add(DisplayMode::boolean(
        "HDG HOLD",
        CommandSpec::raw(SimEvent::ApHdgHoldSet),
    )?)?;
    add(DisplayMode::boolean(
        "V/S HOLD",
        CommandSpec::raw(SimEvent::ApVsHoldSet),
    )?)?;

    add(DisplayMode::integer(
        "SPD",
        "kt",
        IntParams {
            min: 0,
            max: 2500,
            cycling: false,
            rule: StepRule::SINGLE,
        },
        CommandSpec::raw(SimEvent::ApSpdVarSet),
    )?)?;
    add(DisplayMode::integer(
        "HDG",
        "deg",
        IntParams {
            min: 0,
            max: 360,
            cycling: true,
            rule: StepRule::accelerated(1, 10),
        },
        CommandSpec::raw(SimEvent::HeadingBugSet),
    )?)?;
    add(DisplayMode::integer(
        "ALT",
        "ft",
        IntParams {
            min: 0,
            max: 250_000,
            cycling: true,
            rule: StepRule::accelerated(100, 1000),
        },
        CommandSpec::raw(SimEvent::ApAltVarSet),
    )?)?;
    add(DisplayMode::integer(
        "V/S",
        "ft/min",
        IntParams {
            min: -2500,
            max: 2500,
            cycling: false,
            rule: StepRule::fixed(100),
        },
        CommandSpec::raw(SimEvent::ApVsVarSet),
    )?)?;

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::Value;
    use crate::panel::Panel;

    #[test]
    fn standard_table_builds() {
        let registry = standard_registry().unwrap();
        assert_eq!(registry.len(), 12);
        assert!(Panel::new(registry).is_ok());
    }

    #[test]
    fn registration_order_is_stable() {
        let registry = standard_registry().unwrap();
        let titles: heapless::Vec<&str, 12> = registry.iter().map(|m| m.title()).collect();
        assert_eq!(
            &titles[..],
            &[
                "THR", "MIX", "EL TRIM", "PRK BRK", "A/P", "FLC", "HDG HOLD", "V/S HOLD", "SPD",
                "HDG", "ALT", "V/S"
            ]
        );
    }

    #[test]
    fn suffixes_match_units() {
        let registry = standard_registry().unwrap();
        assert_eq!(registry.get(0).unwrap().suffix(), "%");
        assert_eq!(registry.get(8).unwrap().suffix(), "kt");
        assert_eq!(registry.get(9).unwrap().suffix(), "deg");
        assert_eq!(registry.get(10).unwrap().suffix(), "ft");
        assert_eq!(registry.get(11).unwrap().suffix(), "ft/min");
        // Boolean toggles carry no unit
        assert_eq!(registry.get(4).unwrap().suffix(), "");
    }

    #[test]
    fn all_modes_start_in_range() {
        let registry = standard_registry().unwrap();
        for mode in registry.iter() {
            match mode.value() {
                Value::Int(v) => assert_eq!(v, 0),
                Value::Bool(b) => assert!(!b),
            }
        }
    }
}
