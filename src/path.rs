//! Turning parent links into start-to-goal solutions.

use std::ops::Index;

use rustc_hash::FxHashMap;

use crate::puzzle::{Grid, Move};

/// Child grid to the grid it was reached from.
#[derive(Debug, Default)]
pub struct ParentMap {
    parents: FxHashMap<Grid, Grid>,
}

impl ParentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `parent` for `child` unless one is already recorded.
    pub fn link(&mut self, child: Grid, parent: Grid) {
        self.parents.entry(child).or_insert(parent);
    }

    pub fn parent(&self, child: &Grid) -> Option<&Grid> {
        self.parents.get(child)
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Follows links back from `goal` until a grid without a parent, then
    /// reverses so the path reads start to goal.
    pub fn reconstruct(&self, goal: Grid) -> Path {
        let mut grids = vec![goal];
        let mut current = goal;

        while let Some(&parent) = self.parent(&current) {
            grids.push(parent);
            current = parent;
        }

        grids.reverse();
        Path::new(grids)
    }
}

/// Grids from the start state to the goal, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    grids: Vec<Grid>,
}

impl Path {
    pub fn new(grids: Vec<Grid>) -> Self {
        Self { grids }
    }

    /// Number of slides, one less than the number of grids.
    pub fn cost(&self) -> usize {
        self.grids.len().saturating_sub(1)
    }

    pub fn grids(&self) -> &[Grid] {
        &self.grids
    }

    pub fn start(&self) -> Option<&Grid> {
        self.grids.first()
    }

    pub fn last(&self) -> Option<&Grid> {
        self.grids.last()
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// The blank's direction for each step, or `None` if two neighbouring
    /// grids are not one slide apart.
    pub fn moves(&self) -> Option<Vec<Move>> {
        self.grids
            .windows(2)
            .map(|pair| pair[0].move_towards(&pair[1]))
            .collect()
    }
}

impl Index<usize> for Path {
    type Output = Grid;

    fn index(&self, index: usize) -> &Self::Output {
        &self.grids[index]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Grid;
    type IntoIter = std::slice::Iter<'a, Grid>;

    fn into_iter(self) -> Self::IntoIter {
        self.grids.iter()
    }
}
