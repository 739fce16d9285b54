//! Input events sent by the panel device

// Opcodes: device → host
pub const OP_ROTATION: u8 = 0x00;
pub const OP_PRESSED: u8 = 0x01;
pub const OP_RESET: u8 = 0x02;

/// Rotation direction of the encoder knob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Counter-clockwise detent
    Left,
    /// Clockwise detent
    Right,
}

impl Direction {
    /// Parse a direction from the Rotation payload byte (0 = left, >0 = right)
    pub fn from_byte(byte: u8) -> Self {
        if byte == 0 {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    /// Convert to the wire payload byte
    pub fn to_byte(self) -> u8 {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
        }
    }

    /// Returns the rotation as a signed delta (-1 or +1)
    pub fn delta(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Decoded input event from the panel device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelEvent {
    /// Device requests a full state resync (sent on device boot)
    Reset,
    /// Encoder turned one detent
    Rotation(Direction),
    /// Button pressed (releases are consumed but never reported)
    Pressed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_roundtrip() {
        for dir in [Direction::Left, Direction::Right] {
            assert_eq!(Direction::from_byte(dir.to_byte()), dir);
        }
    }

    #[test]
    fn nonzero_payload_is_right() {
        assert_eq!(Direction::from_byte(0), Direction::Left);
        assert_eq!(Direction::from_byte(1), Direction::Right);
        assert_eq!(Direction::from_byte(0xFF), Direction::Right);
    }

    #[test]
    fn delta_sign() {
        assert_eq!(Direction::Left.delta(), -1);
        assert_eq!(Direction::Right.delta(), 1);
    }
}
