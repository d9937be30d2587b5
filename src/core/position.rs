//! Grid coordinates and slide directions.
//!
//! ## Pos
//!
//! A cell on the 3x3 grid, `row` and `col` both in `0..=2`. Constructing an
//! out-of-range `Pos` is a programming error; moves that would leave the grid
//! are never generated (see [`Pos::step`]).
//!
//! ## Direction
//!
//! The four slide directions, always listed in the order up, right, down,
//! left. That order doubles as the deterministic tie-break code used by the
//! priority frontiers.

use serde::{Deserialize, Serialize};

/// Side length of the grid.
pub const SIZE: usize = 3;

/// Number of cells on the grid.
pub const CELLS: usize = SIZE * SIZE;

/// A cell on the 3x3 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < SIZE && (col as usize) < SIZE);
        Self { row, col }
    }

    /// Position of a row-major cell index.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::new((index / SIZE) as u8, (index % SIZE) as u8)
    }

    /// Row-major index into a board's cell array.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * SIZE + self.col as usize
    }

    /// Neighbouring cell in `dir`, or `None` past the grid edge.
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        let limit = SIZE as i8;
        if (0..limit).contains(&row) && (0..limit).contains(&col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Manhattan distance to another cell.
    #[must_use]
    pub fn distance(self, other: Pos) -> u32 {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as u32
    }

    /// The same cell with row and column swapped.
    #[must_use]
    pub const fn transpose(self) -> Pos {
        Pos::new(self.col, self.row)
    }

    /// Iterate over every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..CELLS).map(Pos::from_index)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Slide direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in listing order.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// Row/column offset of one step.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// Tie-break code (1-4, listing order).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 3,
            Direction::Left => 4,
        }
    }

    /// Single-letter symbol used in solution paths.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Right => 'R',
            Direction::Down => 'D',
            Direction::Left => 'L',
        }
    }

    /// The direction that undoes this one.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
