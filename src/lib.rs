//! Reversi/Othello rules core: board state, directional capture search and
//! stone counting, with a text renderer and a thin WASM facade.

use wasm_bindgen::prelude::*;

pub mod address;
pub mod bindings;
pub mod board;
pub mod cell;
pub mod color;
pub mod config;
pub mod error;
pub mod stone;
pub mod types;

pub use address::Address;
pub use board::Board;
pub use cell::Cell;
pub use color::Color;
pub use config::RenderConfig;
pub use error::{ReversiError, ValidationError};
pub use stone::Stone;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
