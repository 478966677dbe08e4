use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ValidationError;

/// Shared default glyph set used by `Board::draw` and `Display`.
pub static DEFAULT_RENDER: Lazy<RenderConfig> = Lazy::new(RenderConfig::default);

/// Glyphs used when rendering the board as text.
///
/// Missing fields fall back to the defaults, so `{"white": "○"}` is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub black: String,
    pub white: String,
    pub empty: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            black: "●".to_string(),
            white: "o".to_string(),
            empty: " ".to_string(),
        }
    }
}

impl RenderConfig {
    /// Every glyph must be exactly one character so the grid stays aligned.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for glyph in [&self.black, &self.white, &self.empty] {
            if glyph.chars().count() != 1 {
                return Err(ValidationError::InvalidGlyph(glyph.clone()));
            }
        }
        Ok(())
    }

    pub fn glyph(&self, color: Option<Color>) -> &str {
        match color {
            Some(Color::Black) => &self.black,
            Some(Color::White) => &self.white,
            None => &self.empty,
        }
    }
}
