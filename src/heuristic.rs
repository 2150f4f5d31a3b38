//! Distance estimates used to order the A* frontier.
//!
//! Every estimator here is admissible and consistent for unit-cost slides, and
//! returns 0 only for the goal grid.

use std::fmt;

use clap::ValueEnum;

use crate::puzzle::{Grid, Position, SIDE};

/// An estimate of how many slides remain before `grid` reaches the goal.
pub trait Heuristic {
    fn estimate(&self, grid: &Grid) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(&Grid) -> f64,
{
    fn estimate(&self, grid: &Grid) -> f64 {
        self(grid)
    }
}

/// Tile `value` belongs at `(value / 3, value % 3)`.
fn goal_position(value: u8) -> Position {
    Position::new(value as usize / SIDE, value as usize % SIDE)
}

/// Calls `f` with the current and goal position of every non-blank tile.
fn for_each_tile(grid: &Grid, mut f: impl FnMut(Position, Position)) {
    for row in 0..SIDE {
        for col in 0..SIDE {
            let pos = Position::new(row, col);
            let value = grid.get(pos);
            if value != 0 {
                f(pos, goal_position(value));
            }
        }
    }
}

/// Sum of row and column offsets of every tile from its goal cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl Manhattan {
    pub fn distance(grid: &Grid) -> usize {
        let mut distance = 0;
        for_each_tile(grid, |pos, target| {
            distance += pos.row.abs_diff(target.row);
            distance += pos.col.abs_diff(target.col);
        });
        distance
    }
}

impl Heuristic for Manhattan {
    fn estimate(&self, grid: &Grid) -> f64 {
        Self::distance(grid) as f64
    }
}

/// Sum of straight-line distances of every tile from its goal cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl Heuristic for Euclidean {
    fn estimate(&self, grid: &Grid) -> f64 {
        let mut distance = 0.0;
        for_each_tile(grid, |pos, target| {
            let dr = pos.row.abs_diff(target.row) as f64;
            let dc = pos.col.abs_diff(target.col) as f64;
            distance += (dr * dr + dc * dc).sqrt();
        });
        distance
    }
}

/// Manhattan distance plus two slides for every tile that has to step out of
/// its goal row or column to let another tile in that line past it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearConflict;

impl LinearConflict {
    pub fn conflicts(grid: &Grid) -> usize {
        let mut conflicts = 0;

        // Row conflicts
        for row in 0..SIDE {
            let in_line: Vec<usize> = (0..SIDE)
                .map(|col| grid.get(Position::new(row, col)))
                .filter(|&value| value != 0 && goal_position(value).row == row)
                .map(|value| goal_position(value).col)
                .collect();
            conflicts += tiles_to_remove(&in_line);
        }

        // Column conflicts
        for col in 0..SIDE {
            let in_line: Vec<usize> = (0..SIDE)
                .map(|row| grid.get(Position::new(row, col)))
                .filter(|&value| value != 0 && goal_position(value).col == col)
                .map(|value| goal_position(value).row)
                .collect();
            conflicts += tiles_to_remove(&in_line);
        }

        conflicts
    }
}

/// Fewest entries to drop from `targets` to leave it strictly increasing.
fn tiles_to_remove(targets: &[usize]) -> usize {
    // Longest increasing subsequence; lines hold at most three tiles.
    let mut best = vec![1usize; targets.len()];
    for i in 0..targets.len() {
        for j in 0..i {
            if targets[j] < targets[i] {
                best[i] = best[i].max(best[j] + 1);
            }
        }
    }
    targets.len() - best.iter().copied().max().unwrap_or(0)
}

impl Heuristic for LinearConflict {
    fn estimate(&self, grid: &Grid) -> f64 {
        (Manhattan::distance(grid) + 2 * Self::conflicts(grid)) as f64
    }
}

/// Runtime choice of estimator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum HeuristicKind {
    /// Sum of row and column offsets
    #[default]
    Manhattan,
    /// Sum of straight-line offsets
    Euclidean,
    /// Manhattan plus linear conflicts
    LinearConflict,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 3] = [
        HeuristicKind::Manhattan,
        HeuristicKind::Euclidean,
        HeuristicKind::LinearConflict,
    ];
}

impl Heuristic for HeuristicKind {
    fn estimate(&self, grid: &Grid) -> f64 {
        match self {
            HeuristicKind::Manhattan => Manhattan.estimate(grid),
            HeuristicKind::Euclidean => Euclidean.estimate(grid),
            HeuristicKind::LinearConflict => LinearConflict.estimate(grid),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            HeuristicKind::Manhattan => "Manhattan",
            HeuristicKind::Euclidean => "Euclidean",
            HeuristicKind::LinearConflict => "Linear conflict",
        };
        write!(f, "{}", s)
    }
}
