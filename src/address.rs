use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;

/// Board edge length.
pub const BOARD_SIZE: usize = 8;

/// Zero-based board coordinate: `x` is the column, `y` the row.
///
/// Construction never fails; call [`Address::valid`] before using it as a
/// board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    x: i32,
    y: i32,
}

impl Address {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn valid(&self) -> Result<(), ValidationError> {
        if in_bounds(self.x) && in_bounds(self.y) {
            Ok(())
        } else {
            Err(ValidationError::InvalidAddress(*self))
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// The neighbouring address one `(dx, dy)` step away. May be off-board.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Row-major `(row, col)` indices. Only meaningful after `valid()`.
    pub(crate) fn to_row_col(self) -> (usize, usize) {
        (self.y as usize, self.x as usize)
    }

    /// Every on-board address in row-major order.
    pub fn all() -> impl Iterator<Item = Address> {
        (0..BOARD_SIZE as i32).flat_map(|y| (0..BOARD_SIZE as i32).map(move |x| Address::new(x, y)))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {}, y: {}", self.x, self.y)
    }
}

fn in_bounds(v: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&v)
}
