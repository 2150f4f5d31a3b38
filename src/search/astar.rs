//! A* search keyed by `g + h`.
//!
//! Grids may sit on the heap several times with different costs; only the
//! first pop of a grid is expanded. Parent links are recorded at that pop,
//! so they always describe the cheapest known route.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use log::trace;

use super::{Outcome, Stats};
use crate::heuristic::Heuristic;
use crate::path::ParentMap;
use crate::puzzle::{Grid, Position};
use crate::visited::VisitedSet;

#[derive(Debug)]
struct SearchNode {
    grid: Grid,
    blank: Position,
    parent: Option<Grid>,
    /// Slides from the start
    dist: usize,
    /// `dist` plus the heuristic estimate
    key: f64,
    /// Push order, breaks ties between equal keys first-in first-out
    seq: u64,
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .total_cmp(&other.key)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}

pub fn search<H>(start: Grid, heuristic: &H) -> Outcome
where
    H: Heuristic + ?Sized,
{
    let mut visited = VisitedSet::new();
    let mut parents = ParentMap::new();
    let mut stats = Stats::default();
    let mut to_visit = BinaryHeap::new();
    let mut seq = 0u64;

    to_visit.push(Reverse(SearchNode {
        grid: start,
        blank: start.blank(),
        parent: None,
        dist: 0,
        key: heuristic.estimate(&start),
        seq,
    }));
    stats.observe_frontier(to_visit.len());

    while let Some(Reverse(cur_node)) = to_visit.pop() {
        if !visited.insert(cur_node.grid) {
            continue;
        }
        if let Some(parent) = cur_node.parent {
            parents.link(cur_node.grid, parent);
        }
        stats.expanded += 1;

        if cur_node.grid.is_goal() {
            trace!("goal expanded at depth {}", cur_node.dist);
            return Outcome {
                path: Some(parents.reconstruct(cur_node.grid)),
                stats,
            };
        }

        for (child, child_blank) in cur_node.grid.children(cur_node.blank) {
            // Expanded grids are discarded on pop, so pushing them only
            // grows the heap; the pop order of the rest is unchanged.
            if visited.contains(&child) {
                continue;
            }

            let dist = cur_node.dist + 1;
            seq += 1;
            stats.observe_depth(dist);
            to_visit.push(Reverse(SearchNode {
                grid: child,
                blank: child_blank,
                parent: Some(cur_node.grid),
                dist,
                key: heuristic.estimate(&child) + dist as f64,
                seq,
            }));
        }

        stats.observe_frontier(to_visit.len());
    }

    Outcome { path: None, stats }
}
