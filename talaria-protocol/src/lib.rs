//! Panel Communication Protocol
//!
//! This crate defines the serial protocol between the Talaria host and the
//! rotary-encoder panel device. The protocol is byte-oriented and designed
//! for minimal traffic: after an initial full sync, only fields that
//! actually changed are retransmitted.
//!
//! # Protocol Overview
//!
//! Every command is a single opcode byte, optionally followed by a payload:
//! ```text
//! ┌────────┬──────────────────────────────┐
//! │ OPCODE │ PAYLOAD                      │
//! │ 1B     │ 1B fixed, or ASCII + '\n'    │
//! └────────┴──────────────────────────────┘
//! ```
//!
//! Device → host commands carry input events (rotation, button press, and
//! a reset request on device boot). Host → device commands carry the
//! selector state and the active mode's title, body, and suffix. The
//! device is a dumb terminal — all mode logic stays on the host.

#![no_std]
#![deny(unsafe_code)]

pub mod commands;
pub mod decoder;
pub mod events;

pub use commands::{EncodeError, HostCommand, MAX_TEXT_LEN, MAX_WRITE_LEN, TEXT_TERMINATOR};
pub use decoder::{DecodeError, Decoder};
pub use events::{Direction, PanelEvent};
