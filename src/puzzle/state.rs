//! Search states for the single-agent puzzles.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Variant;
use crate::core::{Board, Direction, Pos, EMPTY};
use crate::error::Result;

/// One blank slide: which blank moved, and where.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    /// Blank position before the slide.
    pub blank: Pos,
    /// Direction the blank moved.
    pub dir: Direction,
}

impl Step {
    /// Create a new step.
    #[must_use]
    pub const fn new(blank: Pos, dir: Direction) -> Self {
        Self { blank, dir }
    }

    /// Where the blank ends up, if that cell is on the grid.
    #[must_use]
    pub fn destination(self) -> Option<Pos> {
        self.blank.step(self.dir)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.blank, self.dir)
    }
}

/// A board snapshot plus everything the search needs to order and report it.
///
/// ## Ownership
///
/// Children are produced by [`PuzzleState::apply`] and own their own board
/// copy. The move path is an `im::Vector`, so siblings share their common
/// prefix; a parent's path is never modified after it branches.
///
/// ## Cached heuristic
///
/// `manhattan` is updated by the single moved tile's contribution on every
/// slide and always equals [`GoalLayout::manhattan`](crate::heuristic::GoalLayout::manhattan)
/// for `board`.
#[derive(Clone, Debug)]
pub struct PuzzleState {
    variant: Variant,
    board: Board,
    /// Blank cells, row-major sorted.
    blanks: SmallVec<[Pos; 3]>,
    cost: u32,
    path: Vector<Step>,
    manhattan: u32,
}

impl PuzzleState {
    /// Create an initial state, checking the board fits the variant.
    pub fn new(board: Board, variant: Variant) -> Result<Self> {
        variant.validate(&board)?;
        Ok(Self::unchecked(board, variant))
    }

    /// Parse a board and wrap it as an initial state.
    pub fn parse(text: &str, variant: Variant) -> Result<Self> {
        Self::new(Board::parse(text)?, variant)
    }

    /// The solved state of a variant.
    #[must_use]
    pub fn solved(variant: Variant) -> Self {
        Self::unchecked(variant.goal(), variant)
    }

    fn unchecked(board: Board, variant: Variant) -> Self {
        Self {
            variant,
            blanks: board.positions_of(EMPTY).collect(),
            cost: 0,
            path: Vector::new(),
            manhattan: variant.layout().manhattan(&board),
            board,
        }
    }

    // === Accessors ===

    /// Puzzle variant.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Blank cells in row-major order.
    #[must_use]
    pub fn blanks(&self) -> &[Pos] {
        &self.blanks
    }

    /// Moves made from the initial state.
    #[must_use]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Steps taken from the initial state.
    #[must_use]
    pub fn path(&self) -> &Vector<Step> {
        &self.path
    }

    /// Cached Manhattan distance.
    #[must_use]
    pub fn heuristic(&self) -> u32 {
        self.manhattan
    }

    /// The step that produced this state (`None` for an initial state).
    #[must_use]
    pub fn last_step(&self) -> Option<Step> {
        self.path.last().copied()
    }

    /// Tie-break code of the last step's direction, 0 for an initial state.
    #[must_use]
    pub fn direction_code(&self) -> u8 {
        self.last_step().map_or(0, |step| step.dir.code())
    }

    // === Rules ===

    /// Check whether the board equals the variant's goal.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.board == self.variant.goal()
    }

    /// Legal slides: blanks in row-major order, directions up, right, down,
    /// left. A blank never slides off the grid or into another blank.
    #[must_use]
    pub fn available_moves(&self) -> SmallVec<[Step; 8]> {
        let mut moves = SmallVec::new();
        for &blank in &self.blanks {
            for (dir, to) in Board::directions_from(blank) {
                if !self.board.is_vacant(to) {
                    moves.push(Step::new(blank, dir));
                }
            }
        }
        moves
    }

    /// Apply a slide to a copy of this state.
    ///
    /// Returns `None` if `step` is not legal here.
    #[must_use]
    pub fn apply(&self, step: Step) -> Option<PuzzleState> {
        if self.board.is_vacant(step.blank) {
            let to = step.destination()?;
            if self.board.is_vacant(to) {
                return None;
            }
            // The tile travels the opposite way: from `to` into the old blank
            let label = self.board.get(to);
            let delta = self.variant.layout().manhattan_delta(label, to, step.blank);
            let (board, _) = self.board.slide(step.blank, step.dir)?;

            let mut blanks = self.blanks.clone();
            for blank in blanks.iter_mut() {
                if *blank == step.blank {
                    *blank = to;
                }
            }
            blanks.sort_unstable();

            let mut path = self.path.clone();
            path.push_back(step);

            Some(PuzzleState {
                variant: self.variant,
                board,
                blanks,
                cost: self.cost + 1,
                path,
                manhattan: self.manhattan.checked_add_signed(delta)?,
            })
        } else {
            None
        }
    }

    /// Every child state, in [`available_moves`](Self::available_moves) order.
    #[must_use]
    pub fn expand(&self) -> Vec<PuzzleState> {
        self.available_moves()
            .into_iter()
            .filter_map(|step| self.apply(step))
            .collect()
    }

    /// Whether the goal is reachable at all.
    ///
    /// On the classic board a slide never changes the parity of the number of
    /// inverted tile pairs, and the goal has none. With three blanks every
    /// arrangement is reachable.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        match self.variant {
            Variant::Classic => {
                let tiles: SmallVec<[u8; 9]> = self
                    .board
                    .cells()
                    .iter()
                    .copied()
                    .filter(|&c| c != EMPTY)
                    .collect();
                let mut inversions = 0;
                for (i, a) in tiles.iter().enumerate() {
                    inversions += tiles[i + 1..].iter().filter(|&b| a > b).count();
                }
                inversions % 2 == 0
            }
            Variant::MultiBlank => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::manhattan;

    fn classic(text: &str) -> PuzzleState {
        PuzzleState::parse(text, Variant::Classic).unwrap()
    }

    #[test]
    fn test_new_state() {
        let state = classic("1 2 3\n4 5 6\n7 0 8");
        assert_eq!(state.blanks(), &[Pos::new(2, 1)]);
        assert_eq!(state.cost(), 0);
        assert!(state.path().is_empty());
        assert_eq!(state.heuristic(), 1);
        assert_eq!(state.direction_code(), 0);
        assert!(!state.is_goal());
    }

    #[test]
    fn test_available_moves_order() {
        let state = classic("1 2 3\n4 5 6\n7 0 8");
        let dirs: Vec<_> = state.available_moves().iter().map(|s| s.dir).collect();
        assert_eq!(dirs, vec![Direction::Up, Direction::Right, Direction::Left]);
    }

    #[test]
    fn test_apply_reaches_goal() {
        let state = classic("1 2 3\n4 5 6\n7 0 8");
        let child = state.apply(Step::new(Pos::new(2, 1), Direction::Right)).unwrap();

        assert!(child.is_goal());
        assert_eq!(child.cost(), 1);
        assert_eq!(child.heuristic(), 0);
        assert_eq!(child.blanks(), &[Pos::new(2, 2)]);
        assert_eq!(child.direction_code(), Direction::Right.code());
        // Parent untouched
        assert_eq!(state.board().get(Pos::new(2, 1)), EMPTY);
        assert!(state.path().is_empty());
    }

    #[test]
    fn test_apply_rejects_illegal_steps() {
        let state = classic("1 2 3\n4 5 6\n7 0 8");
        // Not a blank
        assert!(state.apply(Step::new(Pos::new(0, 0), Direction::Right)).is_none());
        // Off the grid
        assert!(state.apply(Step::new(Pos::new(2, 1), Direction::Down)).is_none());
    }

    #[test]
    fn test_expand_keeps_heuristic_exact() {
        let state = classic("8 1 3\n4 0 2\n7 6 5");
        let mut frontier = vec![state];
        for _ in 0..4 {
            frontier = frontier.iter().flat_map(|s| s.expand()).collect();
            for child in &frontier {
                assert_eq!(child.heuristic(), manhattan(child.board()));
            }
        }
    }

    #[test]
    fn test_siblings_do_not_share_boards() {
        let state = classic("1 2 3\n4 0 5\n6 7 8");
        let children = state.expand();
        assert_eq!(children.len(), 4);
        for (i, a) in children.iter().enumerate() {
            for b in &children[i + 1..] {
                assert_ne!(a.board(), b.board());
            }
            assert_eq!(a.path().len(), 1);
        }
    }

    #[test]
    fn test_multi_blank_moves() {
        let state = PuzzleState::parse("1 2 3\n4 5 6\n0 0 0", Variant::MultiBlank).unwrap();
        assert!(state.is_goal());
        // Each blank can only slide up; sideways moves hit another blank
        let moves = state.available_moves();
        assert_eq!(moves.len(), 3);
        assert!(moves.iter().all(|s| s.dir == Direction::Up));
        assert_eq!(moves[0].blank, Pos::new(2, 0));
    }

    #[test]
    fn test_multi_blank_blanks_stay_sorted() {
        let state = PuzzleState::parse("1 2 3\n4 5 6\n0 0 0", Variant::MultiBlank).unwrap();
        let child = state.apply(Step::new(Pos::new(2, 2), Direction::Up)).unwrap();
        assert_eq!(child.blanks(), &[Pos::new(1, 2), Pos::new(2, 0), Pos::new(2, 1)]);
        assert_eq!(child.heuristic(), manhattan(child.board()));
    }

    #[test]
    fn test_solvability_parity() {
        assert!(classic("1 2 3\n4 5 6\n7 0 8").is_solvable());
        assert!(!classic("2 1 3\n4 5 6\n7 8 0").is_solvable());
        assert!(PuzzleState::solved(Variant::MultiBlank).is_solvable());
    }

    #[test]
    fn test_step_display() {
        let step = Step::new(Pos::new(0, 1), Direction::Down);
        assert_eq!(step.to_string(), "(0, 1)->D");
    }
}
