//! Host-originated commands and their wire encoding
//!
//! Fixed-width commands (selector state) are opcode + one byte. Text
//! commands (title, body, suffix) are opcode + ASCII bytes + `'\n'`.

use heapless::Vec;

// Opcodes: host → device
pub const OP_MODE_INDEX: u8 = 0x03;
pub const OP_MODE_COUNT: u8 = 0x04;
pub const OP_SELECT_MODE: u8 = 0x05;
pub const OP_TITLE: u8 = 0x06;
pub const OP_SUFFIX: u8 = 0x07;
pub const OP_BODY: u8 = 0x08;

/// Terminator for text payloads
pub const TEXT_TERMINATOR: u8 = b'\n';

/// Maximum text payload length (one display line on the device)
pub const MAX_TEXT_LEN: usize = 21;

/// Maximum bytes of one contiguous write (a full resync: three two-byte
/// commands plus three terminated text commands)
pub const MAX_WRITE_LEN: usize = 3 * 2 + 3 * (2 + MAX_TEXT_LEN);

/// Errors that can occur during command encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Output buffer too small for the encoded command
    BufferFull,
    /// Text payload is not ASCII, contains the terminator, or is too long
    InvalidText,
}

/// A command from the host to the panel device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostCommand<'a> {
    /// Currently active mode index
    ModeIndex(u8),
    /// Total number of registered modes
    ModeCount(u8),
    /// Whether the selector is in mode-select state
    SelectMode(bool),
    /// Active mode's title
    Title(&'a str),
    /// Active mode's rendered body
    Body(&'a str),
    /// Active mode's unit suffix
    Suffix(&'a str),
}

impl HostCommand<'_> {
    /// Wire opcode of this command
    pub fn opcode(&self) -> u8 {
        match self {
            HostCommand::ModeIndex(_) => OP_MODE_INDEX,
            HostCommand::ModeCount(_) => OP_MODE_COUNT,
            HostCommand::SelectMode(_) => OP_SELECT_MODE,
            HostCommand::Title(_) => OP_TITLE,
            HostCommand::Body(_) => OP_BODY,
            HostCommand::Suffix(_) => OP_SUFFIX,
        }
    }

    /// Append the encoded command to `out`
    ///
    /// Encoding is all-or-nothing: on error `out` is left as it was.
    pub fn encode<const N: usize>(&self, out: &mut Vec<u8, N>) -> Result<(), EncodeError> {
        let rollback = out.len();
        let result = match *self {
            HostCommand::ModeIndex(index) => encode_fixed(OP_MODE_INDEX, index, out),
            HostCommand::ModeCount(count) => encode_fixed(OP_MODE_COUNT, count, out),
            HostCommand::SelectMode(select) => {
                encode_fixed(OP_SELECT_MODE, select as u8, out)
            }
            HostCommand::Title(text) => encode_text(OP_TITLE, text, out),
            HostCommand::Body(text) => encode_text(OP_BODY, text, out),
            HostCommand::Suffix(text) => encode_text(OP_SUFFIX, text, out),
        };

        if result.is_err() {
            out.truncate(rollback);
        }
        result
    }
}

fn encode_fixed<const N: usize>(
    opcode: u8,
    payload: u8,
    out: &mut Vec<u8, N>,
) -> Result<(), EncodeError> {
    out.push(opcode).map_err(|_| EncodeError::BufferFull)?;
    out.push(payload).map_err(|_| EncodeError::BufferFull)?;
    Ok(())
}

fn encode_text<const N: usize>(
    opcode: u8,
    text: &str,
    out: &mut Vec<u8, N>,
) -> Result<(), EncodeError> {
    let bytes = text.as_bytes();
    if bytes.len() > MAX_TEXT_LEN || !text.is_ascii() || bytes.contains(&TEXT_TERMINATOR) {
        return Err(EncodeError::InvalidText);
    }

    out.push(opcode).map_err(|_| EncodeError::BufferFull)?;
    out.extend_from_slice(bytes)
        .map_err(|_| EncodeError::BufferFull)?;
    out.push(TEXT_TERMINATOR).map_err(|_| EncodeError::BufferFull)?;
    Ok(())
}
