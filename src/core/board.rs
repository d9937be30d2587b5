//! The 3x3 grid of cell labels.
//!
//! A `Board` is a plain `[u8; 9]` of digit labels in row-major order, `0`
//! meaning empty. It is `Copy`, so every state transition works on its own
//! copy and sibling branches can never observe each other's moves.
//!
//! `Eq` and `Hash` are derived from the cells. This is the one definition of
//! state identity: visited sets and goal tests all compare boards, never
//! whole search states.

use serde::{Deserialize, Serialize};

use super::position::{Direction, Pos, CELLS, SIZE};
use crate::error::{Error, Result};

/// Label of an empty cell.
pub const EMPTY: u8 = 0;

/// A 3x3 grid of digit labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [u8; CELLS],
}

impl Board {
    /// Create a board from row-major cells.
    #[must_use]
    pub const fn new(cells: [u8; CELLS]) -> Self {
        Self { cells }
    }

    /// Parse a whitespace-delimited grid, one row per line.
    ///
    /// Blank lines are ignored. Every label must be a single ASCII digit.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
        if rows.len() != SIZE {
            return Err(Error::InvalidRowCount {
                expected: SIZE,
                got: rows.len(),
            });
        }

        let mut cells = [EMPTY; CELLS];
        for (row, line) in rows.iter().enumerate() {
            let labels: Vec<&str> = line.split_whitespace().collect();
            if labels.len() != SIZE {
                return Err(Error::InvalidRowLength {
                    row,
                    expected: SIZE,
                    got: labels.len(),
                });
            }
            for (col, label) in labels.iter().enumerate() {
                let mut chars = label.chars();
                let digit = match (chars.next(), chars.next()) {
                    (Some(c), None) => c.to_digit(10),
                    _ => None,
                };
                let Some(digit) = digit else {
                    return Err(Error::InvalidLabel {
                        label: (*label).to_string(),
                        row,
                        col,
                    });
                };
                cells[row * SIZE + col] = digit as u8;
            }
        }

        Ok(Self { cells })
    }

    /// Row-major cells.
    #[must_use]
    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    /// Label at a position.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Pos) -> u8 {
        self.cells[pos.index()]
    }

    /// Check whether a cell is empty.
    #[inline]
    #[must_use]
    pub fn is_vacant(&self, pos: Pos) -> bool {
        self.get(pos) == EMPTY
    }

    /// Number of cells carrying `label`.
    #[must_use]
    pub fn count(&self, label: u8) -> usize {
        self.cells.iter().filter(|&&c| c == label).count()
    }

    /// Positions carrying `label`, in row-major order.
    pub fn positions_of(&self, label: u8) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&pos| self.get(pos) == label)
    }

    /// Directions that stay on the grid from `pos`, in listing order.
    pub fn directions_from(pos: Pos) -> impl Iterator<Item = (Direction, Pos)> {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| pos.step(dir).map(|to| (dir, to)))
    }

    /// Slide the label at `from` one cell in `dir`, swapping it with the
    /// destination's label.
    ///
    /// Returns the new board and the mover's new position, or `None` if the
    /// move would leave the grid. `self` is untouched.
    #[must_use]
    pub fn slide(&self, from: Pos, dir: Direction) -> Option<(Board, Pos)> {
        let to = from.step(dir)?;
        let mut next = *self;
        next.cells.swap(from.index(), to.index());
        Some((next, to))
    }

    /// The board mirrored across its main diagonal.
    #[must_use]
    pub fn transpose(&self) -> Board {
        let mut cells = [EMPTY; CELLS];
        for pos in Pos::all() {
            cells[pos.transpose().index()] = self.get(pos);
        }
        Board { cells }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(SIZE) {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Board::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_parse_grid() {
        let board = Board::parse("1 2 3\n4 5 6\n7 0 8\n").unwrap();
        assert_eq!(board.get(Pos::new(0, 0)), 1);
        assert_eq!(board.get(Pos::new(2, 1)), EMPTY);
        assert_eq!(board.get(Pos::new(2, 2)), 8);
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let board = Board::parse("\n 1  2 3\n4 5\t6\n7 8 0\n\n").unwrap();
        assert_eq!(board, Board::new([1, 2, 3, 4, 5, 6, 7, 8, 0]));
    }

    #[test]
    fn test_parse_rejects_wrong_row_count() {
        let err = Board::parse("1 2 3\n4 5 6\n").unwrap_err();
        assert!(matches!(err, Error::InvalidRowCount { expected: 3, got: 2 }));
    }

    #[test]
    fn test_parse_rejects_wrong_row_length() {
        let err = Board::parse("1 2 3\n4 5\n7 8 0").unwrap_err();
        assert!(matches!(err, Error::InvalidRowLength { row: 1, expected: 3, got: 2 }));
    }

    #[test]
    fn test_parse_rejects_bad_label() {
        let err = Board::parse("1 2 3\n4 x 6\n7 8 0").unwrap_err();
        assert!(matches!(err, Error::InvalidLabel { row: 1, col: 1, .. }));

        let err = Board::parse("1 2 3\n4 56 6\n7 8 0").unwrap_err();
        assert!(matches!(err, Error::InvalidLabel { .. }));
    }

    #[test]
    fn test_display_roundtrip() {
        let board = Board::new([8, 1, 3, 4, 0, 2, 7, 6, 5]);
        assert_eq!(board.to_string(), "8 1 3\n4 0 2\n7 6 5\n");
        assert_eq!(Board::parse(&board.to_string()).unwrap(), board);
    }

    #[test]
    fn test_slide_copies() {
        let board = Board::new([1, 2, 3, 4, 5, 6, 7, 0, 8]);
        let (next, to) = board.slide(Pos::new(2, 1), Direction::Right).unwrap();

        assert_eq!(to, Pos::new(2, 2));
        assert_eq!(next, Board::new([1, 2, 3, 4, 5, 6, 7, 8, 0]));
        // Original untouched
        assert_eq!(board.get(Pos::new(2, 1)), EMPTY);
    }

    #[test]
    fn test_slide_off_grid() {
        let board = Board::new([0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(board.slide(Pos::new(0, 0), Direction::Up).is_none());
    }

    #[test]
    fn test_slide_and_back_restores() {
        let board = Board::new([1, 2, 3, 4, 0, 5, 6, 7, 8]);
        for dir in Direction::ALL {
            let (moved, to) = board.slide(Pos::new(1, 1), dir).unwrap();
            let (back, _) = moved.slide(to, dir.opposite()).unwrap();
            assert_eq!(back, board);
        }
    }

    #[test]
    fn test_directions_from_corner() {
        let dirs: Vec<_> = Board::directions_from(Pos::new(2, 2)).map(|(d, _)| d).collect();
        assert_eq!(dirs, vec![Direction::Up, Direction::Left]);
    }

    #[test]
    fn test_count_and_positions() {
        let board = Board::new([1, 2, 3, 4, 5, 6, 0, 0, 0]);
        assert_eq!(board.count(EMPTY), 3);
        let blanks: Vec<_> = board.positions_of(EMPTY).collect();
        assert_eq!(blanks, vec![Pos::new(2, 0), Pos::new(2, 1), Pos::new(2, 2)]);
    }

    #[test]
    fn test_transpose() {
        let board = Board::new([1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(board.transpose(), Board::new([1, 4, 7, 2, 5, 8, 3, 6, 0]));
        assert_eq!(board.transpose().transpose(), board);
    }

    #[test]
    fn test_content_identity() {
        let mut seen = FxHashSet::default();
        seen.insert(Board::new([1, 2, 3, 4, 5, 6, 7, 8, 0]));
        assert!(seen.contains(&Board::parse("1 2 3\n4 5 6\n7 8 0").unwrap()));
        assert!(!seen.contains(&Board::new([1, 2, 3, 4, 5, 6, 7, 0, 8])));
    }
}
