//! Host-side core logic for the Talaria panel bridge
//!
//! This crate contains all application logic that does not depend on a
//! concrete transport or simulator SDK:
//!
//! - Change-tracked values (retransmit only what changed)
//! - Display mode variants with per-kind stepping and bounds rules
//! - The append-only mode registry
//! - The mode selector state machine
//! - The panel controller tying input events to protocol writes
//! - Boundary traits for the byte transport and the simulator sink

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod mode;
pub mod panel;
pub mod presets;
pub mod registry;
pub mod selector;
pub mod sim;
pub mod tracked;
pub mod traits;

pub use config::{ConfigError, IntParams, StepRule, FAST_SPIN_MS};
pub use mode::{DisplayMode, Value};
pub use panel::{Panel, PanelError};
pub use registry::{ModeRegistry, RegistryError, MAX_MODES};
pub use selector::Selector;
pub use sim::{CommandSpec, SimEvent, UnitScale};
pub use tracked::Tracked;
pub use traits::{CommandSink, Transport};
