//! Validation of user-supplied grids.

use std::str::FromStr;

use thiserror::Error;

use crate::puzzle::{Grid, CELLS};

/// Why a piece of text is not a valid 8-puzzle grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseGridError {
    /// Expected exactly nine tiles
    #[error("expected 9 tiles, found {0}")]
    TileCount(usize),

    /// A token that is not a single digit 0-8
    #[error("invalid tile {0:?}, tiles are the digits 0 to 8")]
    InvalidTile(String),

    /// The same tile given twice
    #[error("tile {0} appears more than once")]
    DuplicateTile(u8),
}

/// Checks that `raw` holds each digit 0-8 exactly once, separated by whitespace.
pub fn is_valid_grid(raw: &str) -> bool {
    raw.parse::<Grid>().is_ok()
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Accepts the tiles in row-major order, split across lines however the
    /// caller likes, e.g. `"1 2 0\n3 4 5\n6 7 8"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != CELLS {
            return Err(ParseGridError::TileCount(tokens.len()));
        }

        let mut cells = [0u8; CELLS];
        let mut seen = [false; CELLS];

        for (cell, token) in cells.iter_mut().zip(&tokens) {
            let value = match token.as_bytes() {
                [digit @ b'0'..=b'8'] => digit - b'0',
                _ => return Err(ParseGridError::InvalidTile(token.to_string())),
            };
            if seen[value as usize] {
                return Err(ParseGridError::DuplicateTile(value));
            }
            seen[value as usize] = true;
            *cell = value;
        }

        Ok(Grid::from_cells(cells))
    }
}
