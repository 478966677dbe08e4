use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;

/// Stone color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    /// Validates a raw color tag: 0 is black, 1 is white.
    pub fn from_tag(tag: i32) -> Result<Self, ValidationError> {
        match tag {
            0 => Ok(Color::Black),
            1 => Ok(Color::White),
            _ => Err(ValidationError::InvalidColor(tag)),
        }
    }

    pub fn tag(self) -> i32 {
        self as i32
    }

    /// Returns the opponent's color.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl TryFrom<i32> for Color {
    type Error = ValidationError;

    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        Self::from_tag(tag)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("黒"),
            Color::White => f.write_str("白"),
        }
    }
}
