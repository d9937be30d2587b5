//! Admissible distance estimates for the single-agent puzzles.
//!
//! ## Manhattan distance
//!
//! Sum over all labelled tiles of the row and column distance to the tile's
//! goal cell. Search states keep this value cached and adjust it with
//! [`GoalLayout::manhattan_delta`] on every slide, so it is never recomputed
//! from scratch during a search. The cached value must always equal
//! [`GoalLayout::manhattan`] on the same board.
//!
//! ## Linear conflicts
//!
//! Two tiles sitting in their shared goal row (or column) in reversed order
//! cost at least two moves beyond their Manhattan distance. A* may add
//! `LINEAR_CONFLICT_PENALTY` per conflicting pair and stay admissible.

use crate::core::{Board, Pos, EMPTY, SIZE};

/// Extra moves charged per linear conflict.
pub const LINEAR_CONFLICT_PENALTY: u32 = 2;

/// Highest label a digit board can carry.
const MAX_LABEL: usize = 9;

static ROW_MAJOR: GoalLayout = GoalLayout::row_major();

/// Goal cell of every label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoalLayout {
    goals: [Option<Pos>; MAX_LABEL + 1],
}

impl GoalLayout {
    /// Label `k` belongs at row-major index `k - 1`.
    #[must_use]
    pub const fn row_major() -> Self {
        let mut goals = [None; MAX_LABEL + 1];
        let mut label = 1;
        while label <= MAX_LABEL {
            goals[label] = Some(Pos::from_index(label - 1));
            label += 1;
        }
        Self { goals }
    }

    /// Shared row-major layout used by both puzzle variants.
    #[must_use]
    pub fn standard() -> &'static GoalLayout {
        &ROW_MAJOR
    }

    /// Derive a layout from a goal board. Empty cells carry no goal.
    #[must_use]
    pub fn from_board(goal: &Board) -> Self {
        let mut goals = [None; MAX_LABEL + 1];
        for pos in Pos::all() {
            let label = goal.get(pos);
            if label != EMPTY {
                goals[label as usize] = Some(pos);
            }
        }
        Self { goals }
    }

    /// The layout mirrored across the main diagonal.
    #[must_use]
    pub fn transposed(&self) -> Self {
        let mut goals = self.goals;
        for goal in goals.iter_mut() {
            *goal = goal.map(Pos::transpose);
        }
        Self { goals }
    }

    /// Goal cell of `label`, if it has one.
    #[inline]
    #[must_use]
    pub fn goal_of(&self, label: u8) -> Option<Pos> {
        self.goals.get(label as usize).copied().flatten()
    }

    /// Full Manhattan distance of a board.
    #[must_use]
    pub fn manhattan(&self, board: &Board) -> u32 {
        Pos::all()
            .filter_map(|pos| {
                let label = board.get(pos);
                if label == EMPTY {
                    return None;
                }
                self.goal_of(label).map(|goal| pos.distance(goal))
            })
            .sum()
    }

    /// Change in Manhattan distance when `label` moves from `from` to `to`.
    #[must_use]
    pub fn manhattan_delta(&self, label: u8, from: Pos, to: Pos) -> i32 {
        if label == EMPTY {
            return 0;
        }
        match self.goal_of(label) {
            Some(goal) => to.distance(goal) as i32 - from.distance(goal) as i32,
            None => 0,
        }
    }

    /// Number of linear conflicts (pairs, not moves) on a board.
    #[must_use]
    pub fn linear_conflicts(&self, board: &Board) -> u32 {
        let mut conflicts = 0;
        for line in 0..SIZE as u8 {
            // Tiles whose goal row is this row, keyed by goal column
            let row: Vec<u8> = (0..SIZE as u8)
                .filter_map(|col| {
                    let goal = self.goal_of(board.get(Pos::new(line, col)))?;
                    (goal.row == line).then_some(goal.col)
                })
                .collect();
            conflicts += inversions(&row);

            let column: Vec<u8> = (0..SIZE as u8)
                .filter_map(|row| {
                    let goal = self.goal_of(board.get(Pos::new(row, line)))?;
                    (goal.col == line).then_some(goal.row)
                })
                .collect();
            conflicts += inversions(&column);
        }
        conflicts
    }
}

impl Default for GoalLayout {
    fn default() -> Self {
        Self::row_major()
    }
}

fn inversions(keys: &[u8]) -> u32 {
    let mut count = 0;
    for (i, a) in keys.iter().enumerate() {
        count += keys[i + 1..].iter().filter(|&b| a > b).count() as u32;
    }
    count
}

/// Manhattan distance under the standard layout.
#[must_use]
pub fn manhattan(board: &Board) -> u32 {
    ROW_MAJOR.manhattan(board)
}

/// Linear conflicts under the standard layout.
#[must_use]
pub fn linear_conflicts(board: &Board) -> u32 {
    ROW_MAJOR.linear_conflicts(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    fn board(cells: [u8; 9]) -> Board {
        Board::new(cells)
    }

    #[test]
    fn test_row_major_goals() {
        let layout = GoalLayout::row_major();
        assert_eq!(layout.goal_of(1), Some(Pos::new(0, 0)));
        assert_eq!(layout.goal_of(6), Some(Pos::new(1, 2)));
        assert_eq!(layout.goal_of(8), Some(Pos::new(2, 1)));
        assert_eq!(layout.goal_of(EMPTY), None);
    }

    #[test]
    fn test_from_board_matches_row_major() {
        let goal = board([1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let derived = GoalLayout::from_board(&goal);
        for label in 1..=8 {
            assert_eq!(derived.goal_of(label), GoalLayout::row_major().goal_of(label));
        }
        assert_eq!(derived.goal_of(9), None);
    }

    #[test]
    fn test_manhattan_goal_is_zero() {
        assert_eq!(manhattan(&board([1, 2, 3, 4, 5, 6, 7, 8, 0])), 0);
        assert_eq!(manhattan(&board([1, 2, 3, 4, 5, 6, 0, 0, 0])), 0);
    }

    #[test]
    fn test_manhattan_known_board() {
        assert_eq!(manhattan(&board([8, 1, 3, 4, 0, 2, 7, 6, 5])), 10);
        assert_eq!(manhattan(&board([1, 2, 3, 4, 5, 6, 7, 0, 8])), 1);
    }

    #[test]
    fn test_delta_matches_full_recompute() {
        let layout = GoalLayout::standard();
        let start = board([8, 1, 3, 4, 0, 2, 7, 6, 5]);
        let blank = Pos::new(1, 1);

        for dir in Direction::ALL {
            let (next, to) = start.slide(blank, dir).unwrap();
            // The tile travels from the blank's destination to its origin
            let label = start.get(to);
            let delta = layout.manhattan_delta(label, to, blank);
            assert_eq!(
                layout.manhattan(&start) as i32 + delta,
                layout.manhattan(&next) as i32
            );
            assert_eq!(delta.abs(), 1);
        }
    }

    #[test]
    fn test_linear_conflicts_row() {
        assert_eq!(linear_conflicts(&board([2, 1, 3, 4, 5, 6, 7, 8, 0])), 1);
        assert_eq!(linear_conflicts(&board([3, 2, 1, 4, 5, 6, 7, 8, 0])), 3);
    }

    #[test]
    fn test_linear_conflicts_column() {
        assert_eq!(linear_conflicts(&board([7, 2, 3, 4, 5, 6, 1, 8, 0])), 3);
    }

    #[test]
    fn test_linear_conflicts_none() {
        assert_eq!(linear_conflicts(&board([1, 2, 3, 4, 5, 6, 7, 8, 0])), 0);
        // Reversed tiles outside their goal line do not count
        assert_eq!(linear_conflicts(&board([4, 1, 3, 7, 2, 6, 0, 5, 8])), 0);
    }

    #[test]
    fn test_linear_conflicts_transpose_symmetry() {
        let layout = GoalLayout::standard();
        let mirrored = layout.transposed();
        let b = board([3, 2, 1, 7, 5, 6, 4, 8, 0]);
        assert_eq!(layout.linear_conflicts(&b), mirrored.linear_conflicts(&b.transpose()));
        assert_eq!(layout.manhattan(&b), mirrored.manhattan(&b.transpose()));
    }
}
