use rustc_hash::FxHashSet;

use crate::puzzle::Grid;

/// Grids already expanded during one search.
///
/// Each search owns a fresh set and drops it when it returns.
#[derive(Debug, Default)]
pub struct VisitedSet {
    grids: FxHashSet<Grid>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `grid` visited. Returns `false` if it already was.
    pub fn insert(&mut self, grid: Grid) -> bool {
        self.grids.insert(grid)
    }

    pub fn contains(&self, grid: &Grid) -> bool {
        self.grids.contains(grid)
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}
