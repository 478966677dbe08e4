use serde::Serialize;

/// Serializable view of a board returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    /// Row-major, 0=empty, 1=black, 2=white.
    pub cells: Vec<u8>,
    pub black_count: u8,
    pub white_count: u8,
    pub empty_count: u8,
}
