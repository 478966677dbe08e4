use crate::color::Color;
use crate::config::{DEFAULT_RENDER, RenderConfig};
use crate::error::ReversiError;
use crate::stone::Stone;

/// One board square, empty or holding a single stone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    stone: Option<Stone>,
}

impl Cell {
    pub fn new(color: Option<Color>) -> Self {
        Self {
            stone: color.map(Stone::new),
        }
    }

    /// Creates a cell from an optional raw color tag.
    pub fn from_tag(tag: Option<i32>) -> Result<Self, ReversiError> {
        let color = tag
            .map(Color::from_tag)
            .transpose()
            .map_err(ReversiError::CreateCell)?;
        Ok(Self::new(color))
    }

    /// Places a new stone, replacing any stone already here.
    /// Occupancy is checked by `Board::put`, not here.
    pub fn put(&mut self, color: Color) {
        self.stone = Some(Stone::new(color));
    }

    pub fn put_tag(&mut self, tag: i32) -> Result<(), ReversiError> {
        let color = Color::from_tag(tag).map_err(ReversiError::Put)?;
        self.put(color);
        Ok(())
    }

    pub fn glyph<'a>(&self, config: &'a RenderConfig) -> &'a str {
        config.glyph(self.color())
    }

    /// Writes `|` and the cell glyph to stdout.
    pub fn draw(&self) {
        print!("|{}", self.glyph(&DEFAULT_RENDER));
    }

    pub fn reverse(&mut self) {
        if let Some(stone) = self.stone.as_mut() {
            stone.reverse();
        }
    }

    pub fn color(&self) -> Option<Color> {
        self.stone.map(|stone| stone.color())
    }

    pub fn is_none(&self) -> bool {
        self.stone.is_none()
    }

    pub fn is_black(&self) -> bool {
        self.color() == Some(Color::Black)
    }

    pub fn is_white(&self) -> bool {
        self.color() == Some(Color::White)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn empty_cell_queries() {
        let cell = Cell::new(None);

        assert!(cell.is_none());
        assert!(!cell.is_black());
        assert!(!cell.is_white());
        assert_eq!(cell.glyph(&RenderConfig::default()), " ");
        assert_eq!(cell, Cell::default());
    }

    #[test]
    fn from_tag_validates_color() {
        assert_eq!(Cell::from_tag(None), Ok(Cell::new(None)));
        assert_eq!(Cell::from_tag(Some(0)), Ok(Cell::new(Some(Color::Black))));
        assert_eq!(
            Cell::from_tag(Some(-1)),
            Err(ReversiError::CreateCell(ValidationError::InvalidColor(-1)))
        );
    }

    #[test]
    fn put_overwrites_and_reverse_flips() {
        let mut cell = Cell::new(Some(Color::White));

        cell.put(Color::Black);
        assert!(cell.is_black());

        cell.reverse();
        assert!(cell.is_white());
        assert_eq!(cell.glyph(&RenderConfig::default()), "o");
    }

    #[test]
    fn put_tag_rejects_invalid_color_and_keeps_cell() {
        let mut cell = Cell::new(None);

        let err = cell.put_tag(3).unwrap_err();
        assert_eq!(err.to_string(), "failed to put: \"3\" is invalid as color");
        assert!(cell.is_none());

        cell.put_tag(1).unwrap();
        assert!(cell.is_white());
    }

    #[test]
    fn reverse_on_empty_is_noop() {
        let mut cell = Cell::new(None);
        cell.reverse();
        assert!(cell.is_none());
    }
}
