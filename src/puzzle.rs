use rand::{seq::SliceRandom, Rng};
use std::fmt;

/// Width and height of the board.
pub const SIDE: usize = 3;
/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// Direction the blank travels when a neighbouring tile slides into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Right,
    Left,
}

impl Move {
    /// Child generation order. Search output depends on it, so it is fixed.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Right, Move::Left];

    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Right => (0, 1),
            Move::Left => (0, -1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Left => "Left",
            Move::Down => "Down",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// A cell on the board, `row` and `col` both in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    fn from_index(index: usize) -> Self {
        Self::new(index / SIDE, index % SIDE)
    }

    fn index(&self) -> usize {
        self.row * SIDE + self.col
    }

    /// The neighbouring cell in direction `movement`, if it is on the board.
    pub fn step(&self, movement: Move) -> Option<Position> {
        let (dr, dc) = movement.as_offset();

        let new_row = self.row as isize + dr;
        let new_col = self.col as isize + dc;

        if new_row >= 0 && new_row < SIDE as isize && new_col >= 0 && new_col < SIDE as isize {
            Some(Position::new(new_row as usize, new_col as usize))
        } else {
            None
        }
    }
}

/// A 3x3 board holding each of the digits 0..=8 exactly once, 0 being the blank.
///
/// Cells are stored row-major, so the grid doubles as its own canonical key
/// for hashing and equality. Grids are never changed in place by the search:
/// every move yields a new value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [u8; CELLS],
}

impl Grid {
    pub const GOAL: Grid = Grid {
        cells: [0, 1, 2, 3, 4, 5, 6, 7, 8],
    };

    /// Builds a grid from row-major cells.
    ///
    /// The cells must be a permutation of 0..=8; use [`crate::parse::is_valid_grid`]
    /// or `str::parse` to validate untrusted input first.
    pub const fn from_cells(cells: [u8; CELLS]) -> Self {
        Self { cells }
    }

    pub fn from_rows(rows: [[u8; SIDE]; SIDE]) -> Self {
        let mut cells = [0; CELLS];
        for (i, row) in rows.iter().enumerate() {
            cells[i * SIDE..(i + 1) * SIDE].copy_from_slice(row);
        }
        Self { cells }
    }

    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    pub fn rows(&self) -> [[u8; SIDE]; SIDE] {
        let mut rows = [[0; SIDE]; SIDE];
        for (i, row) in rows.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[i * SIDE..(i + 1) * SIDE]);
        }
        rows
    }

    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.index()]
    }

    /// Locates the blank tile.
    pub fn blank(&self) -> Position {
        let index = self
            .cells
            .iter()
            .position(|&v| v == 0)
            .unwrap_or_default();
        Position::from_index(index)
    }

    pub fn is_goal(&self) -> bool {
        *self == Self::GOAL
    }

    /// Slides the neighbour in direction `movement` into the blank at `blank`.
    ///
    /// Returns the new grid and the blank's new position, or `None` when the
    /// neighbour would be off the board.
    pub fn apply_move(&self, blank: Position, movement: Move) -> Option<(Grid, Position)> {
        let target = blank.step(movement)?;
        let mut cells = self.cells;
        cells.swap(blank.index(), target.index());
        Some((Grid { cells }, target))
    }

    /// All grids one legal slide away, in [`Move::ALL`] order, each paired with
    /// its blank position.
    pub fn children(&self, blank: Position) -> Vec<(Grid, Position)> {
        Move::ALL
            .iter()
            .filter_map(|&movement| self.apply_move(blank, movement))
            .collect()
    }

    /// The move that turns `self` into `next`, if they are one slide apart.
    pub fn move_towards(&self, next: &Grid) -> Option<Move> {
        let blank = self.blank();
        Move::ALL.iter().copied().find(|&movement| {
            self.apply_move(blank, movement)
                .is_some_and(|(child, _)| child == *next)
        })
    }

    /// Even inversion count means the goal is reachable.
    pub fn is_solvable(&self) -> bool {
        count_inversions(&self.cells) % 2 == 0
    }

    /// A uniformly random solvable grid.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cells = Self::GOAL.cells;

        loop {
            cells.shuffle(rng);
            if count_inversions(&cells) % 2 == 0 {
                return Self { cells };
            }
        }
    }

    /// The grid reached from the goal by a random walk of `moves` slides,
    /// never undoing the previous slide straight away.
    pub fn scrambled<R: Rng + ?Sized>(rng: &mut R, moves: usize) -> Self {
        let mut grid = Self::GOAL;
        let mut blank = grid.blank();
        let mut last: Option<Move> = None;

        for _ in 0..moves {
            let options: Vec<(Move, Grid, Position)> = Move::ALL
                .iter()
                .filter(|&&movement| last.map_or(true, |l| movement != l.opposite()))
                .filter_map(|&movement| {
                    grid.apply_move(blank, movement)
                        .map(|(child, pos)| (movement, child, pos))
                })
                .collect();

            if let Some(&(movement, child, pos)) = options.choose(rng) {
                grid = child;
                blank = pos;
                last = Some(movement);
            }
        }

        grid
    }
}

/// Pairs `i < j` of non-blank tiles with `values[i] > values[j]`.
pub fn count_inversions(values: &[u8]) -> usize {
    values
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            values[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({:?})", self.rows())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for val in row {
                write!(f, "{:2} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn is_permutation(grid: &Grid) -> bool {
        let mut seen = [false; CELLS];
        for &v in grid.cells() {
            if v as usize >= CELLS || seen[v as usize] {
                return false;
            }
            seen[v as usize] = true;
        }
        true
    }

    #[test]
    fn blank_is_found() {
        let grid = Grid::from_rows([[1, 2, 3], [4, 0, 5], [6, 7, 8]]);
        assert_eq!(grid.blank(), Position::new(1, 1));
        assert_eq!(Grid::GOAL.blank(), Position::new(0, 0));
    }

    #[test]
    fn rows_round_trip_through_cells() {
        let rows = [[8, 7, 6], [5, 4, 3], [2, 1, 0]];
        let grid = Grid::from_rows(rows);
        assert_eq!(grid.rows(), rows);
        assert_eq!(grid.cells(), &[8, 7, 6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn child_count_depends_on_blank_cell() {
        let corner = Grid::GOAL;
        let edge = Grid::from_rows([[1, 0, 2], [3, 4, 5], [6, 7, 8]]);
        let center = Grid::from_rows([[1, 2, 3], [4, 0, 5], [6, 7, 8]]);

        assert_eq!(corner.children(corner.blank()).len(), 2);
        assert_eq!(edge.children(edge.blank()).len(), 3);
        assert_eq!(center.children(center.blank()).len(), 4);
    }

    #[test]
    fn children_follow_fixed_order() {
        let center = Grid::from_rows([[1, 2, 3], [4, 0, 5], [6, 7, 8]]);
        let children = center.children(center.blank());

        let expected = [
            (Grid::from_rows([[1, 0, 3], [4, 2, 5], [6, 7, 8]]), Position::new(0, 1)),
            (Grid::from_rows([[1, 2, 3], [4, 7, 5], [6, 0, 8]]), Position::new(2, 1)),
            (Grid::from_rows([[1, 2, 3], [4, 5, 0], [6, 7, 8]]), Position::new(1, 2)),
            (Grid::from_rows([[1, 2, 3], [0, 4, 5], [6, 7, 8]]), Position::new(1, 0)),
        ];
        assert_eq!(children, expected);
    }

    #[test]
    fn children_keep_blank_consistent() {
        let grid = Grid::from_rows([[4, 1, 2], [3, 0, 5], [6, 7, 8]]);
        for (child, blank) in grid.children(grid.blank()) {
            assert!(is_permutation(&child));
            assert_eq!(child.blank(), blank);
            assert_eq!(child.get(blank), 0);
        }
    }

    #[test]
    fn apply_move_rejects_off_board() {
        let grid = Grid::GOAL;
        assert!(grid.apply_move(grid.blank(), Move::Up).is_none());
        assert!(grid.apply_move(grid.blank(), Move::Left).is_none());
        assert!(grid.apply_move(grid.blank(), Move::Right).is_some());
    }

    #[test]
    fn move_towards_names_the_slide() {
        let start = Grid::from_rows([[1, 2, 0], [3, 4, 5], [6, 7, 8]]);
        let next = Grid::from_rows([[1, 0, 2], [3, 4, 5], [6, 7, 8]]);
        assert_eq!(start.move_towards(&next), Some(Move::Left));
        assert_eq!(next.move_towards(&start), Some(Move::Right));
        assert_eq!(start.move_towards(&Grid::GOAL), None);
    }

    #[test]
    fn inversions_decide_solvability() {
        assert_eq!(count_inversions(Grid::GOAL.cells()), 0);
        assert!(Grid::GOAL.is_solvable());

        // 1 0 2 / 3 4 5 / 6 7 8 has no inversions among non-blank tiles.
        let one_slide = Grid::from_rows([[1, 0, 2], [3, 4, 5], [6, 7, 8]]);
        assert_eq!(count_inversions(one_slide.cells()), 0);
        assert!(one_slide.is_solvable());

        let swapped = Grid::from_rows([[0, 2, 1], [3, 4, 5], [6, 7, 8]]);
        assert_eq!(count_inversions(swapped.cells()), 1);
        assert!(!swapped.is_solvable());
    }

    #[test]
    fn shuffled_grids_are_solvable_permutations() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let grid = Grid::shuffled(&mut rng);
            assert!(is_permutation(&grid));
            assert!(grid.is_solvable());
        }
    }

    #[test]
    fn scrambled_grids_stay_solvable() {
        let mut rng = StdRng::seed_from_u64(42);
        for moves in 0..30 {
            let grid = Grid::scrambled(&mut rng, moves);
            assert!(is_permutation(&grid));
            assert!(grid.is_solvable());
        }
        assert_eq!(Grid::scrambled(&mut rng, 0), Grid::GOAL);
    }

    #[test]
    fn display_prints_three_rows() {
        let text = Grid::GOAL.to_string();
        assert_eq!(text, " 0  1  2 \n 3  4  5 \n 6  7  8 \n");
    }
}
