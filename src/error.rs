//! Error types for the solver

use thiserror::Error;

use crate::parse::ParseGridError;
use crate::puzzle::Grid;

/// Main error type
#[derive(Error, Debug)]
pub enum PuzzleError {
    /// The grid could not be parsed
    #[error("invalid grid: {0}")]
    Parse(#[from] ParseGridError),

    /// The goal cannot be reached from this grid
    #[error("this state is not solvable:\n{0}")]
    Unsolvable(Grid),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
