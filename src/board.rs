use std::fmt;
use std::io::{self, Write};

use log::{debug, trace};

use crate::address::{Address, BOARD_SIZE};
use crate::cell::Cell;
use crate::color::Color;
use crate::config::{DEFAULT_RENDER, RenderConfig};
use crate::error::{ReversiError, ValidationError};
use crate::types::BoardSnapshot;

const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
const HEADER: &str = "  0 1 2 3 4 5 6 7";

/// Step vectors in scan order: N, S, W, E, NW, NE, SW, SE.
const DIRECTIONS: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

const OPENING: [(Address, Color); 4] = [
    (Address::new(3, 3), Color::Black),
    (Address::new(4, 3), Color::White),
    (Address::new(3, 4), Color::White),
    (Address::new(4, 4), Color::Black),
];

/// Reversi board: an 8x8 grid of cells, row-major by y then x.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the initial board:
    /// (3,3)=black, (4,3)=white, (3,4)=white, (4,4)=black.
    pub fn new() -> Result<Self, ReversiError> {
        let mut board = Self {
            cells: [[Cell::new(None); BOARD_SIZE]; BOARD_SIZE],
        };
        for (address, color) in OPENING {
            address.valid().map_err(ReversiError::CreateBoard)?;
            board.cell_mut(address).put(color);
        }
        Ok(board)
    }

    /// Places a stone of `color` at `address` and flips every captured stone.
    ///
    /// Fails without touching the board when the address is off-board, the
    /// cell is occupied, or no opponent stone would be captured.
    pub fn put(&mut self, color: Color, address: Address) -> Result<(), ReversiError> {
        let targets = self.flips(color, address).inspect_err(|err| {
            debug!("rejected {color} at {address}: {err}");
        })?;

        self.cell_mut(address).put(color);
        for target in &targets {
            self.cell_mut(*target).reverse();
        }
        debug!("{color} at {address} flipped {} stone(s)", targets.len());
        Ok(())
    }

    /// Addresses `put(color, address)` would flip, without changing the board.
    pub fn flips(&self, color: Color, address: Address) -> Result<Vec<Address>, ReversiError> {
        address.valid().map_err(ReversiError::Put)?;
        if !self.cell_ref(address).is_none() {
            return Err(ReversiError::Occupied(address));
        }

        let targets = self.search(color, address);
        if targets.is_empty() {
            return Err(ReversiError::IllegalMove(address));
        }
        Ok(targets)
    }

    /// Every empty address where `color` captures at least one stone.
    pub fn legal_moves(&self, color: Color) -> Vec<Address> {
        Address::all()
            .filter(|address| self.cell_ref(*address).is_none())
            .filter(|address| !self.search(color, *address).is_empty())
            .collect()
    }

    pub fn cell(&self, address: Address) -> Result<&Cell, ValidationError> {
        address.valid()?;
        Ok(self.cell_ref(address))
    }

    pub fn count_white(&self) -> usize {
        self.iter_cells().filter(|cell| cell.is_white()).count()
    }

    pub fn count_black(&self) -> usize {
        self.iter_cells().filter(|cell| cell.is_black()).count()
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.count_black() as u8, self.count_white() as u8)
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count();
        NUM_SQUARES as u8 - black_count - white_count
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (square, cell) in board.iter_mut().zip(self.iter_cells()) {
            *square = match cell.color() {
                Some(Color::Black) => 1,
                Some(Color::White) => 2,
                None => 0,
            };
        }
        board
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let (black_count, white_count) = self.count();
        BoardSnapshot {
            cells: self.to_array().to_vec(),
            black_count,
            white_count,
            empty_count: self.empty_count(),
        }
    }

    /// Renders the board with the given glyphs.
    pub fn render_with(&self, config: &RenderConfig) -> String {
        let mut out = String::with_capacity((HEADER.len() + 1) * (BOARD_SIZE + 1) * 2);
        out.push_str(HEADER);
        out.push('\n');
        for (y, row) in self.cells.iter().enumerate() {
            out.push_str(&y.to_string());
            for cell in row {
                out.push('|');
                out.push_str(cell.glyph(config));
            }
            out.push_str("|\n");
        }
        out
    }

    pub fn render(&self) -> String {
        self.render_with(&DEFAULT_RENDER)
    }

    pub fn draw_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.render().as_bytes())
    }

    /// Prints the board to stdout.
    pub fn draw(&self) {
        println!("{HEADER}");
        for (y, row) in self.cells.iter().enumerate() {
            print!("{y}");
            for cell in row {
                cell.draw();
            }
            println!("|");
        }
    }

    fn search(&self, color: Color, start: Address) -> Vec<Address> {
        let mut results = Vec::new();

        for (dx, dy) in DIRECTIONS {
            let mut line = Vec::new();
            let mut current = start.offset(dx, dy);

            while current.valid().is_ok() {
                match self.cell_ref(current).color() {
                    None => break,
                    Some(found) if found == color => {
                        if !line.is_empty() {
                            trace!("({dx}, {dy}) from {start} captures {}", line.len());
                        }
                        results.append(&mut line);
                        break;
                    }
                    Some(_) => line.push(current),
                }
                current = current.offset(dx, dy);
            }
        }

        results
    }

    fn iter_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    fn cell_ref(&self, address: Address) -> &Cell {
        let (row, col) = address.to_row_col();
        &self.cells[row][col]
    }

    fn cell_mut(&mut self, address: Address) -> &mut Cell {
        let (row, col) = address.to_row_col();
        &mut self.cells[row][col]
    }

    #[cfg(test)]
    fn from_rows(rows: [&str; BOARD_SIZE]) -> Self {
        let mut cells = [[Cell::new(None); BOARD_SIZE]; BOARD_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                cells[y][x] = match ch {
                    'B' => Cell::new(Some(Color::Black)),
                    'W' => Cell::new(Some(Color::White)),
                    _ => Cell::new(None),
                };
            }
        }
        Self { cells }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
