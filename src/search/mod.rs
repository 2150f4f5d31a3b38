//! The three search strategies and the common report they produce.
//!
//! Every call owns its visited set, parent links and frontier, so repeated
//! calls are independent of each other. None of them checks solvability: on
//! an unsolvable grid they exhaust the 181,440 reachable states and report
//! no path.

pub mod astar;
pub mod bfs;
pub mod dfs;

use std::fmt;
use std::time::{Duration, Instant};

use clap::ValueEnum;
use log::debug;

use crate::heuristic::Heuristic;
use crate::path::Path;
use crate::puzzle::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Depth-first search
    Dfs,
    /// Breadth-first search
    Bfs,
    /// A* search guided by a heuristic
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Dfs, Strategy::Bfs, Strategy::AStar];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Strategy::Dfs => "Depth-first",
            Strategy::Bfs => "Breadth-first",
            Strategy::AStar => "A*",
        };
        write!(f, "{}", s)
    }
}

/// Counters gathered while a strategy runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Distinct grids expanded
    pub expanded: usize,
    /// Deepest node generated; for depth-first search, the longest trail
    pub max_depth: usize,
    /// Largest frontier size observed
    pub max_frontier: usize,
}

impl Stats {
    fn observe_depth(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
    }

    fn observe_frontier(&mut self, len: usize) {
        self.max_frontier = self.max_frontier.max(len);
    }
}

/// What a strategy returns before timing is attached.
#[derive(Debug)]
pub struct Outcome {
    pub path: Option<Path>,
    pub stats: Stats,
}

/// The result of one [`solve`] call.
#[derive(Debug)]
pub struct SearchReport {
    pub strategy: Strategy,
    /// Start to goal; `None` when the frontier ran dry first
    pub path: Option<Path>,
    pub stats: Stats,
    pub elapsed: Duration,
}

impl SearchReport {
    pub fn expanded(&self) -> usize {
        self.stats.expanded
    }

    /// Slides in the reported path, if one was found.
    pub fn cost(&self) -> Option<usize> {
        self.path.as_ref().map(Path::cost)
    }

    pub fn is_solved(&self) -> bool {
        self.path.is_some()
    }
}

/// Runs `strategy` from `start`. `heuristic` only matters for A*.
///
/// The caller is expected to have checked [`Grid::is_solvable`].
pub fn solve<H>(strategy: Strategy, start: Grid, heuristic: &H) -> SearchReport
where
    H: Heuristic + ?Sized,
{
    debug!("{} search from {:?}", strategy, start);
    let started = Instant::now();

    let outcome = match strategy {
        Strategy::Dfs => dfs::search(start),
        Strategy::Bfs => bfs::search(start),
        Strategy::AStar => astar::search(start, heuristic),
    };

    let elapsed = started.elapsed();
    debug!(
        "{} search finished in {:?}: {} expanded, cost {:?}",
        strategy,
        elapsed,
        outcome.stats.expanded,
        outcome.path.as_ref().map(Path::cost)
    );

    SearchReport {
        strategy,
        path: outcome.path,
        stats: outcome.stats,
        elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::{Euclidean, HeuristicKind, Manhattan};

    #[test]
    fn every_strategy_accepts_solved_start() {
        for strategy in Strategy::ALL {
            let report = solve(strategy, Grid::GOAL, &Manhattan);
            assert_eq!(report.strategy, strategy);
            assert_eq!(report.cost(), Some(0));
            assert_eq!(report.expanded(), 1);
        }
    }

    #[test]
    fn one_slide_from_goal() {
        let start = Grid::from_rows([[1, 0, 2], [3, 4, 5], [6, 7, 8]]);

        for strategy in [Strategy::Bfs, Strategy::AStar] {
            let report = solve(strategy, start, &Euclidean);
            let path = report.path.as_ref().unwrap();
            assert_eq!(path.cost(), 1);
            assert!(report.expanded() <= 4);
            assert_eq!(path.last(), Some(&Grid::GOAL));
            assert_eq!(path.start(), Some(&start));
        }
    }

    #[test]
    fn blank_in_top_right_needs_two_slides() {
        let start = Grid::from_rows([[1, 2, 0], [3, 4, 5], [6, 7, 8]]);
        let middle = Grid::from_rows([[1, 0, 2], [3, 4, 5], [6, 7, 8]]);

        for strategy in [Strategy::Bfs, Strategy::AStar] {
            let report = solve(strategy, start, &Manhattan);
            let path = report.path.as_ref().unwrap();
            assert_eq!(path.grids(), &[start, middle, Grid::GOAL]);
            assert_eq!(path.cost(), 2);
        }
    }

    #[test]
    fn heuristic_can_be_chosen_at_runtime() {
        let start = Grid::from_rows([[3, 1, 2], [6, 4, 5], [7, 0, 8]]);
        let bfs = solve(Strategy::Bfs, start, &Manhattan);

        for kind in HeuristicKind::ALL {
            let heuristic: &dyn Heuristic = &kind;
            let report = solve(Strategy::AStar, start, heuristic);
            assert_eq!(report.cost(), bfs.cost());
        }
    }

    #[test]
    fn unsolvable_start_reports_no_path() {
        let start = Grid::from_rows([[0, 2, 1], [3, 4, 5], [6, 7, 8]]);
        assert!(!start.is_solvable());

        let report = solve(Strategy::Bfs, start, &Manhattan);
        assert!(!report.is_solved());
        assert_eq!(report.expanded(), 181_440);
    }
}
