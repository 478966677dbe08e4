use crate::address::Address;

/// A raw value that does not describe a valid piece of board state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Color tag other than black (0) or white (1).
    #[error("\"{0}\" is invalid as color")]
    InvalidColor(i32),

    /// Coordinate outside `0..=7` on either axis.
    #[error("\"{0}\" is invalid as address")]
    InvalidAddress(Address),

    /// Render glyph that is not exactly one character.
    #[error("\"{0}\" is invalid as glyph")]
    InvalidGlyph(String),
}

/// Errors returned by stone, cell and board operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReversiError {
    #[error("failed to create stone: {0}")]
    CreateStone(#[source] ValidationError),

    #[error("failed to create cell: {0}")]
    CreateCell(#[source] ValidationError),

    #[error("failed to create board: {0}")]
    CreateBoard(#[source] ValidationError),

    #[error("failed to put: {0}")]
    Put(#[source] ValidationError),

    /// The target cell already holds a stone.
    #[error("\"{0}\" is already occupied")]
    Occupied(Address),

    /// No direction from the target captures an opponent stone.
    #[error("\"{0}\" cannot reverse opponent's stone")]
    IllegalMove(Address),
}

impl ReversiError {
    /// Returns the validation failure wrapped by a context variant, if any.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::CreateStone(err)
            | Self::CreateCell(err)
            | Self::CreateBoard(err)
            | Self::Put(err) => Some(err),
            Self::Occupied(_) | Self::IllegalMove(_) => None,
        }
    }
}
