//! Solves the 8-puzzle with depth-first, breadth-first or A* search.
//!
//! ```
//! use eight_puzzle::{solve, Grid, Manhattan, Strategy};
//!
//! let start: Grid = "1 0 2 3 4 5 6 7 8".parse().unwrap();
//! assert!(start.is_solvable());
//!
//! let report = solve(Strategy::AStar, start, &Manhattan);
//! assert_eq!(report.cost(), Some(1));
//! ```

pub mod cli;
pub mod error;
pub mod heuristic;
pub mod parse;
pub mod path;
pub mod puzzle;
pub mod render;
pub mod search;
pub mod visited;

pub use error::PuzzleError;
pub use heuristic::{Euclidean, Heuristic, HeuristicKind, LinearConflict, Manhattan};
pub use parse::{is_valid_grid, ParseGridError};
pub use path::{ParentMap, Path};
pub use puzzle::{Grid, Move, Position};
pub use search::{solve, SearchReport, Stats, Strategy};
pub use visited::VisitedSet;
