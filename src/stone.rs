use crate::color::Color;
use crate::error::ReversiError;

/// A placed piece. Its color flips when captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stone {
    color: Color,
}

impl Stone {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    /// Creates a stone from a raw color tag.
    pub fn from_tag(tag: i32) -> Result<Self, ReversiError> {
        let color = Color::from_tag(tag).map_err(ReversiError::CreateStone)?;
        Ok(Self::new(color))
    }

    /// Default one-character glyph for this stone.
    pub fn get(&self) -> &'static str {
        match self.color {
            Color::White => "o",
            Color::Black => "●",
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    pub fn reverse(&mut self) {
        self.color = self.color.reversed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn from_tag_wraps_invalid_color() {
        assert_eq!(Stone::from_tag(1), Ok(Stone::new(Color::White)));

        let err = Stone::from_tag(2).unwrap_err();
        assert_eq!(err, ReversiError::CreateStone(ValidationError::InvalidColor(2)));
        assert_eq!(err.to_string(), "failed to create stone: \"2\" is invalid as color");
    }

    #[test]
    fn reverse_flips_color_and_glyph() {
        let mut stone = Stone::new(Color::Black);
        assert!(stone.is_black());
        assert_eq!(stone.get(), "●");

        stone.reverse();
        assert!(!stone.is_black());
        assert_eq!(stone.color(), Color::White);
        assert_eq!(stone.get(), "o");
    }
}
