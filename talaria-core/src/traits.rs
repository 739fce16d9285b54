//! Boundary traits for the external collaborators
//!
//! The core consumes an abstract byte transport and exposes mode updates
//! to an abstract simulator sink. Opening/configuring the physical serial
//! channel and the simulator SDK session are the integrations' concern.

use crate::sim::SimEvent;

/// Write half of the panel serial link
///
/// The read half is the caller feeding received bytes into
/// [`Panel::handle_byte`](crate::panel::Panel::handle_byte).
pub trait Transport {
    /// Transport-specific write error
    type Error;

    /// Write one contiguous chunk of protocol bytes
    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// Receives simulator commands derived from rotation-driven updates
///
/// The value is the mode's already-clamped, post-rotation value scaled
/// per the mode's [`UnitScale`](crate::sim::UnitScale). The sink owns its
/// delivery policy; the core never retries.
pub trait CommandSink {
    /// Deliver one command to the simulator
    fn send(&mut self, event: SimEvent, value: i32);
}
