//! Decoding of device-originated command bytes
//!
//! The decoder consumes exactly as many bytes as each opcode declares
//! before returning to the read loop. An unrecognized opcode byte is
//! reported (and counted) rather than silently discarded; the decoder
//! stays in sync by dropping the byte and waiting for the next opcode.

use crate::events::{Direction, PanelEvent, OP_PRESSED, OP_RESET, OP_ROTATION};

/// Errors that can occur while decoding device commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Byte received in opcode position is not a known opcode
    UnknownOpcode(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    /// Waiting for an opcode byte
    AwaitOpcode,
    /// Got Rotation, waiting for the direction byte
    RotationPayload,
    /// Got Pressed, waiting for the button state byte
    PressedPayload,
}

/// State machine for decoding incoming command bytes
#[derive(Debug, Clone)]
pub struct Decoder {
    state: DecodeState,
    errors: u32,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self {
            state: DecodeState::AwaitOpcode,
            errors: 0,
        }
    }

    /// Reset the decoder to the opcode-waiting state
    ///
    /// Any partially decoded command is dropped. The error counter is
    /// preserved; it tracks the lifetime of the link, not of one frame.
    pub fn reset(&mut self) {
        self.state = DecodeState::AwaitOpcode;
    }

    /// Number of malformed bytes seen since construction
    pub fn error_count(&self) -> u32 {
        self.errors
    }

    /// Feed a single byte to the decoder
    ///
    /// Returns `Ok(Some(event))` when a complete command is decoded,
    /// `Ok(None)` when more bytes are needed (or the byte was consumed
    /// without producing an event, e.g. a button release), or `Err` for
    /// an unrecognized opcode.
    pub fn feed(&mut self, byte: u8) -> Result<Option<PanelEvent>, DecodeError> {
        match self.state {
            DecodeState::AwaitOpcode => match byte {
                OP_RESET => Ok(Some(PanelEvent::Reset)),
                OP_ROTATION => {
                    self.state = DecodeState::RotationPayload;
                    Ok(None)
                }
                OP_PRESSED => {
                    self.state = DecodeState::PressedPayload;
                    Ok(None)
                }
                other => {
                    self.errors = self.errors.wrapping_add(1);
                    Err(DecodeError::UnknownOpcode(other))
                }
            },
            DecodeState::RotationPayload => {
                self.state = DecodeState::AwaitOpcode;
                Ok(Some(PanelEvent::Rotation(Direction::from_byte(byte))))
            }
            DecodeState::PressedPayload => {
                self.state = DecodeState::AwaitOpcode;
                // Only an actual press is an event; releases are consumed
                if byte == 1 {
                    Ok(Some(PanelEvent::Pressed))
                } else {
                    Ok(None)
                }
            }
        }
    }

    /// Feed multiple bytes to the decoder
    ///
    /// Returns the first complete event found, if any. Remaining bytes
    /// after a complete event are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<PanelEvent>, DecodeError> {
        for &byte in bytes {
            if let Some(event) = self.feed(byte)? {
                return Ok(Some(event));
            }
        }
        Ok(None)
    }
}
