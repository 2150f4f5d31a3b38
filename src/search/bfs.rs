//! Breadth-first search over a FIFO queue.
//!
//! The goal is recognised as soon as it is generated as a child, so the
//! reported path is a shortest one.

use std::collections::VecDeque;

use log::trace;

use super::{Outcome, Stats};
use crate::path::ParentMap;
use crate::puzzle::Grid;
use crate::visited::VisitedSet;

pub fn search(start: Grid) -> Outcome {
    let mut visited = VisitedSet::new();
    let mut parents = ParentMap::new();
    let mut stats = Stats::default();
    let mut queue = VecDeque::from([(start, start.blank(), 0usize)]);

    stats.observe_frontier(queue.len());

    while let Some((current, blank, depth)) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        stats.expanded += 1;

        if current.is_goal() {
            return Outcome {
                path: Some(parents.reconstruct(current)),
                stats,
            };
        }

        for (child, child_blank) in current.children(blank) {
            if visited.contains(&child) {
                continue;
            }

            parents.link(child, current);
            stats.observe_depth(depth + 1);

            if child.is_goal() {
                trace!("goal generated at depth {}", depth + 1);
                return Outcome {
                    path: Some(parents.reconstruct(child)),
                    stats,
                };
            }

            queue.push_back((child, child_blank, depth + 1));
        }

        stats.observe_frontier(queue.len());
    }

    Outcome { path: None, stats }
}
