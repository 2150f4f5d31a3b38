//! Depth-first search with an explicit stack.
//!
//! Alongside the search stack the search keeps a trail of expanded grids that
//! becomes the reported path. After each expansion, trail entries whose
//! children are all visited are popped off its end. The search stack itself
//! is untouched by this, so the reported path is neither the literal stack
//! order nor guaranteed to be short.

use log::trace;

use super::{Outcome, Stats};
use crate::path::Path;
use crate::puzzle::{Grid, Position};
use crate::visited::VisitedSet;

pub fn search(start: Grid) -> Outcome {
    let mut visited = VisitedSet::new();
    let mut stats = Stats::default();
    let mut stack = vec![(start, start.blank())];
    let mut trail: Vec<(Grid, Position)> = Vec::new();

    stats.observe_frontier(stack.len());

    while let Some((current, blank)) = stack.pop() {
        // Duplicates pushed by several parents are skipped here, not on push.
        if !visited.insert(current) {
            continue;
        }

        stats.expanded += 1;
        trail.push((current, blank));
        stats.observe_depth(trail.len() - 1);

        if current.is_goal() {
            let path = Path::new(trail.into_iter().map(|(grid, _)| grid).collect());
            return Outcome {
                path: Some(path),
                stats,
            };
        }

        while let Some(&(top, top_blank)) = trail.last() {
            if has_unvisited_children(&visited, &top, top_blank) {
                break;
            }
            trace!("trail backtracks past {:?}", top);
            trail.pop();
        }

        let children = current.children(blank);
        if children.is_empty() {
            trace!("dead end at depth {}", trail.len());
        }
        stack.extend(children);
        stats.observe_frontier(stack.len());
    }

    Outcome { path: None, stats }
}

fn has_unvisited_children(visited: &VisitedSet, grid: &Grid, blank: Position) -> bool {
    grid.children(blank)
        .iter()
        .any(|(child, _)| !visited.contains(child))
}
