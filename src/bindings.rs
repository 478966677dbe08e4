use std::fmt::Display;

use wasm_bindgen::prelude::*;

use crate::address::Address;
use crate::board::Board;
use crate::color::Color;
use crate::config::RenderConfig;
use crate::error::ReversiError;

/// Board handle exported to JavaScript. Turn order stays with the caller.
#[wasm_bindgen]
pub struct ReversiBoard {
    board: Board,
    config: RenderConfig,
}

#[wasm_bindgen]
impl ReversiBoard {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ReversiBoard, JsValue> {
        Self::from_config(RenderConfig::default()).map_err(to_js_error)
    }

    /// Creates a board rendered with glyphs from a JS object such as
    /// `{ black: "X", white: "O" }`.
    pub fn with_config(config: JsValue) -> Result<ReversiBoard, JsValue> {
        let config: RenderConfig = serde_wasm_bindgen::from_value(config)?;
        Self::from_config(config).map_err(to_js_error)
    }

    /// `color` is 0 for black, 1 for white.
    pub fn put(&mut self, color: i32, x: i32, y: i32) -> Result<(), JsValue> {
        self.put_tag(color, x, y).map_err(to_js_error)
    }

    pub fn render(&self) -> String {
        self.board.render_with(&self.config)
    }

    pub fn count_black(&self) -> usize {
        self.board.count_black()
    }

    pub fn count_white(&self) -> usize {
        self.board.count_white()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.board.snapshot())?)
    }

    pub fn legal_moves(&self, color: i32) -> Result<JsValue, JsValue> {
        let moves = self.legal_moves_for_tag(color).map_err(to_js_error)?;
        Ok(serde_wasm_bindgen::to_value(&moves)?)
    }
}

impl ReversiBoard {
    fn from_config(config: RenderConfig) -> Result<Self, String> {
        config.validate().map_err(|err| err.to_string())?;
        let board = Board::new().map_err(|err| err.to_string())?;
        Ok(Self { board, config })
    }

    fn put_tag(&mut self, color: i32, x: i32, y: i32) -> Result<(), ReversiError> {
        let color = Color::from_tag(color).map_err(ReversiError::Put)?;
        self.board.put(color, Address::new(x, y))
    }

    fn legal_moves_for_tag(&self, color: i32) -> Result<Vec<Address>, ReversiError> {
        let color = Color::from_tag(color).map_err(ReversiError::Put)?;
        Ok(self.board.legal_moves(color))
    }
}

fn to_js_error<E: Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}
