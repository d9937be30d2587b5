//! Duel game states: shared board, both agents and whose turn it is.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::agent::{Agent, Token, TokenMove};
use super::config::DuelLayout;
use super::side::{Side, SideMap};
use crate::core::{Board, Pos};
use crate::error::{Error, Result};

/// Tokens each side must own.
pub const TOKENS_PER_SIDE: usize = 2;

/// Result of a duel position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Side One won (its goal, or Side Two broke the forbidden-zone rule).
    OneWins,
    /// Side Two won.
    TwoWins,
    Ongoing,
}

impl Outcome {
    /// Game value from Side One's perspective: +1, -1 or 0.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Outcome::OneWins => 1,
            Outcome::TwoWins => -1,
            Outcome::Ongoing => 0,
        }
    }

    /// The winning side, if decided.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::OneWins => Some(Side::One),
            Outcome::TwoWins => Some(Side::Two),
            Outcome::Ongoing => None,
        }
    }
}

/// Children of one expansion plus the reversals that were dropped.
#[derive(Clone, Debug, Default)]
pub struct Expansion {
    pub children: Vec<DuelState>,
    /// Legal moves skipped because they undo the mover's previous move.
    pub suppressed: u64,
}

impl Expansion {
    /// Moves counted toward the expansion statistic: every child plus every
    /// suppressed reversal.
    #[must_use]
    pub fn counted(&self) -> u64 {
        self.children.len() as u64 + self.suppressed
    }
}

/// A node of the duel game tree.
///
/// Each child owns its board and a fresh copy of both agents; only the
/// immutable rule layout is shared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuelState {
    board: Board,
    agents: SideMap<Agent>,
    cost: u32,
    to_move: Side,
    layout: Arc<DuelLayout>,
}

impl DuelState {
    /// Create the root state. Each side must own exactly two tokens.
    pub fn new(board: Board, first: Side, layout: &DuelLayout) -> Result<Self> {
        let mut tokens: SideMap<Vec<Token>> = SideMap::default();
        for pos in Pos::all() {
            let label = board.get(pos);
            for side in Side::ALL {
                if layout.rules(side).owns(label) {
                    tokens[side].push(Token::new(label, pos));
                }
            }
        }

        for (side, owned) in tokens.iter() {
            if owned.len() != TOKENS_PER_SIDE {
                return Err(Error::TokenCount {
                    side: side.to_string(),
                    expected: TOKENS_PER_SIDE,
                    got: owned.len(),
                });
            }
        }

        let agents = SideMap::new(|side| {
            Agent::new(
                side,
                tokens[side].iter().copied(),
                &layout.rules(side).watch,
            )
        });

        Ok(Self {
            board,
            agents,
            cost: 0,
            to_move: first,
            layout: Arc::new(layout.clone()),
        })
    }

    /// Parse a board and wrap it as a root state.
    pub fn parse(text: &str, first: Side, layout: &DuelLayout) -> Result<Self> {
        Self::new(Board::parse(text)?, first, layout)
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn agent(&self, side: Side) -> &Agent {
        &self.agents[side]
    }

    /// Side whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Plies played from the root.
    #[must_use]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Moves made by both agents together.
    #[must_use]
    pub fn total_moves(&self) -> u32 {
        self.agents[Side::One].moves() + self.agents[Side::Two].moves()
    }

    #[must_use]
    pub fn layout(&self) -> &DuelLayout {
        &self.layout
    }

    // === Rules ===

    /// Decide the position. Forbidden-zone losses are checked before goals,
    /// Side One before Side Two.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.agents[Side::One].has_lost() {
            return Outcome::TwoWins;
        }
        if self.agents[Side::Two].has_lost() {
            return Outcome::OneWins;
        }
        if self.goal_reached(Side::One) {
            return Outcome::OneWins;
        }
        if self.goal_reached(Side::Two) {
            return Outcome::TwoWins;
        }
        Outcome::Ongoing
    }

    fn goal_reached(&self, side: Side) -> bool {
        let rules = self.layout.rules(side);
        let [a, b] = rules.goal;
        rules.goal_reached(self.board.get(a), self.board.get(b))
    }

    /// Moves available to `side`: tokens in (label, position) order, each
    /// trying U, R, D, L into a vacant cell. Reversals are included.
    pub fn available_moves(&self, side: Side) -> SmallVec<[TokenMove; 8]> {
        let mut moves = SmallVec::new();
        for &token in self.agents[side].tokens() {
            for (dir, to) in Board::directions_from(token.pos) {
                if self.board.is_vacant(to) {
                    moves.push(TokenMove::new(token, dir));
                }
            }
        }
        moves
    }

    /// Play `mv` for the side to move, returning the child state.
    ///
    /// `None` if the side to move does not own the token or the destination
    /// is off the grid or occupied.
    pub fn apply(&self, mv: &TokenMove) -> Option<DuelState> {
        let to = mv.destination()?;
        if !self.board.is_vacant(to) || self.board.get(mv.token.pos) != mv.token.label {
            return None;
        }

        let mut child = self.clone();
        let (board, _) = self.board.slide(mv.token.pos, mv.dir)?;
        if !child.agents[self.to_move].record_move(mv, self.layout.forbidden_limit) {
            return None;
        }
        child.board = board;
        child.cost += 1;
        child.to_move = self.to_move.opponent();
        Some(child)
    }

    /// Children for the side to move, skipping moves that undo its previous
    /// move.
    pub fn expand(&self) -> Expansion {
        let agent = &self.agents[self.to_move];
        let mut expansion = Expansion::default();
        for mv in self.available_moves(self.to_move) {
            if agent.is_reversal(&mv) {
                expansion.suppressed += 1;
                continue;
            }
            if let Some(child) = self.apply(&mv) {
                expansion.children.push(child);
            }
        }
        expansion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    fn token_move(label: u8, row: u8, col: u8, dir: Direction) -> TokenMove {
        TokenMove::new(Token::new(label, Pos::new(row, col)), dir)
    }

    fn state(text: &str, first: Side) -> DuelState {
        DuelState::parse(text, first, &DuelLayout::default()).unwrap()
    }

    #[test]
    fn test_token_count_validated() {
        let layout = DuelLayout::default();
        let err = DuelState::parse("1 0 0\n0 0 0\n8 0 9", Side::One, &layout).unwrap_err();
        assert!(matches!(err, Error::TokenCount { got: 1, .. }));

        let err = DuelState::parse("1 2 1\n0 0 0\n8 0 9", Side::One, &layout).unwrap_err();
        assert!(matches!(err, Error::TokenCount { got: 3, .. }));
    }

    #[test]
    fn test_repeated_label_allowed() {
        let s = state("1 0 1\n0 5 0\n8 0 9", Side::One);
        assert_eq!(s.agent(Side::One).tokens().len(), 2);
        assert_eq!(s.outcome(), Outcome::Ongoing);
    }

    #[test]
    fn test_outcome_goals() {
        assert_eq!(state("1 2 0\n0 0 0\n8 0 9", Side::One).outcome(), Outcome::OneWins);
        assert_eq!(state("2 1 0\n0 0 0\n8 0 9", Side::Two).outcome(), Outcome::OneWins);
        assert_eq!(state("1 0 2\n0 0 0\n0 9 8", Side::One).outcome(), Outcome::TwoWins);
        // Side One's goal is checked first.
        assert_eq!(state("1 2 0\n0 0 0\n0 8 9", Side::One).outcome(), Outcome::OneWins);
    }

    #[test]
    fn test_available_moves_order() {
        let s = state("1 0 0\n0 2 0\n8 0 9", Side::One);
        let moves: Vec<String> = s.available_moves(Side::One).iter().map(|m| m.to_string()).collect();
        assert_eq!(
            moves,
            vec![
                "1@(0, 0)->R",
                "1@(0, 0)->D",
                "2@(1, 1)->U",
                "2@(1, 1)->R",
                "2@(1, 1)->D",
                "2@(1, 1)->L",
            ]
        );
    }

    #[test]
    fn test_obstacles_block_moves() {
        let s = state("1 5 0\n5 2 0\n8 0 9", Side::One);
        let moves = s.available_moves(Side::One);
        assert!(moves.iter().all(|m| m.token.label == 2));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn test_apply_switches_turn() {
        let s = state("1 0 0\n0 2 0\n8 0 9", Side::One);
        let child = s.apply(&token_move(1, 0, 0, Direction::Right)).unwrap();

        assert_eq!(child.to_move(), Side::Two);
        assert_eq!(child.cost(), 1);
        assert_eq!(child.total_moves(), 1);
        assert_eq!(child.board().to_string(), "0 1 0\n0 2 0\n8 0 9\n");
        // Parent untouched.
        assert_eq!(s.board().get(Pos::new(0, 0)), 1);
        assert_eq!(s.agent(Side::One).moves(), 0);
    }

    #[test]
    fn test_apply_rejects_illegal() {
        let s = state("1 0 0\n0 2 0\n8 0 9", Side::One);
        assert!(s.apply(&token_move(1, 0, 0, Direction::Up)).is_none());
        assert!(s.apply(&token_move(8, 2, 0, Direction::Up)).is_none());
        assert!(s.apply(&token_move(1, 1, 1, Direction::Up)).is_none());
    }

    #[test]
    fn test_reversal_suppressed_but_counted() {
        let s = state("1 0 0\n0 2 0\n8 0 9", Side::One);
        let s = s.apply(&token_move(2, 1, 1, Direction::Right)).unwrap();
        let s = s.apply(&token_move(8, 2, 0, Direction::Up)).unwrap();

        let expansion = s.expand();
        assert_eq!(expansion.suppressed, 1);
        assert_eq!(expansion.children.len(), 2);
        assert_eq!(expansion.counted(), 3);
        assert!(expansion
            .children
            .iter()
            .all(|c| c.board().get(Pos::new(1, 1)) == 0));
    }

    #[test]
    fn test_forbidden_zone_loss() {
        let s = state("0 0 2\n0 0 0\n8 1 9", Side::One);
        let s = s.apply(&token_move(2, 0, 2, Direction::Left)).unwrap();
        let s = s.apply(&token_move(8, 2, 0, Direction::Up)).unwrap();
        let s = s.apply(&token_move(2, 0, 1, Direction::Down)).unwrap();
        let s = s.apply(&token_move(8, 1, 0, Direction::Up)).unwrap();
        assert_eq!(s.outcome(), Outcome::Ongoing);
        assert!(!s.agent(Side::One).has_lost());

        let s = s.apply(&token_move(2, 1, 1, Direction::Right)).unwrap();
        assert!(s.agent(Side::One).has_lost());
        assert_eq!(s.outcome(), Outcome::TwoWins);
    }
}
