//! Motion command encoding for the vehicle wire protocol.
//!
//! The vehicle understands short ASCII tokens: one direction character,
//! optionally followed by a single speed digit (`"F"`, `"S"`, `"F3"`,
//! `"B0"`). Encoding is pure; transmission lives in `dispatch`.

use std::fmt;

/// Driving direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Drive forward
    Forward,
    /// Drive backward
    Backward,
    /// Turn left
    Left,
    /// Turn right
    Right,
    /// Stop, the fail-safe default
    Stop,
}

impl Direction {
    /// Single-character wire encoding
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Forward => 'F',
            Self::Backward => 'B',
            Self::Left => 'L',
            Self::Right => 'R',
            Self::Stop => 'S',
        }
    }
}

/// A complete motion command: direction plus an optional speed step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandToken {
    /// Driving direction
    pub direction: Direction,
    /// Speed step, absent in the direction-only variant (0-9 otherwise)
    pub speed: Option<u8>,
}

impl CommandToken {
    /// Create a command token
    #[must_use]
    pub fn new(direction: Direction, speed: Option<u8>) -> Self {
        Self { direction, speed }
    }

    /// Wire encoding: direction character followed by the speed digit, if any
    #[must_use]
    pub fn encode(&self) -> String {
        match self.speed {
            Some(speed) => format!("{}{}", self.direction.as_char(), speed),
            None => self.direction.as_char().to_string(),
        }
    }
}

impl fmt::Display for CommandToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
