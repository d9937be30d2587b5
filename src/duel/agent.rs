//! Duel agents: owned tokens, forbidden-zone counters and the last move.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::side::Side;
use crate::core::{Direction, Pos};

/// A labelled piece on the board owned by one side.
///
/// Ordered by label, then position, which is the order moves are listed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Token {
    pub label: u8,
    pub pos: Pos,
}

impl Token {
    /// Create a token.
    #[must_use]
    pub const fn new(label: u8, pos: Pos) -> Self {
        Self { label, pos }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.label, self.pos)
    }
}

/// One token sliding one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenMove {
    pub token: Token,
    pub dir: Direction,
}

impl TokenMove {
    /// Create a move.
    #[must_use]
    pub const fn new(token: Token, dir: Direction) -> Self {
        Self { token, dir }
    }

    /// Cell the token lands on, `None` if it would leave the grid.
    #[must_use]
    pub fn destination(&self) -> Option<Pos> {
        self.token.pos.step(self.dir)
    }

    /// The token as it will be after the move.
    #[must_use]
    pub fn moved_token(&self) -> Option<Token> {
        self.destination().map(|pos| Token::new(self.token.label, pos))
    }
}

impl std::fmt::Display for TokenMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.token, self.dir)
    }
}

/// Consecutive-occupancy counter for one forbidden cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WatchCell {
    pub pos: Pos,
    pub streak: u8,
}

/// One duel player's private state. Every branch of the game tree clones it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Agent {
    side: Side,
    tokens: SmallVec<[Token; 2]>,
    watch: SmallVec<[WatchCell; 2]>,
    prev: Option<Token>,
    moves: u32,
    lost: bool,
}

impl Agent {
    /// Create an agent owning `tokens` and watching `watch`.
    pub fn new(side: Side, tokens: impl IntoIterator<Item = Token>, watch: &[Pos]) -> Self {
        let mut tokens: SmallVec<[Token; 2]> = tokens.into_iter().collect();
        tokens.sort_unstable();
        Self {
            side,
            tokens,
            watch: watch.iter().map(|&pos| WatchCell { pos, streak: 0 }).collect(),
            prev: None,
            moves: 0,
            lost: false,
        }
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Owned tokens, ascending by (label, position).
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn watch(&self) -> &[WatchCell] {
        &self.watch
    }

    /// The token as it was before this agent's last move.
    #[must_use]
    pub fn prev(&self) -> Option<Token> {
        self.prev
    }

    /// Moves made so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Set once a watch counter exceeds the forbidden limit.
    #[must_use]
    pub fn has_lost(&self) -> bool {
        self.lost
    }

    /// Check if this agent owns a token at `pos`.
    #[must_use]
    pub fn occupies(&self, pos: Pos) -> bool {
        self.tokens.iter().any(|t| t.pos == pos)
    }

    /// Check if `mv` would put a token back where this agent just took it
    /// from.
    #[must_use]
    pub fn is_reversal(&self, mv: &TokenMove) -> bool {
        self.prev.is_some() && mv.moved_token() == self.prev
    }

    /// Apply one of this agent's moves to its own bookkeeping.
    ///
    /// Returns false (and changes nothing) if the agent does not own the
    /// moving token or the move leaves the grid.
    pub(crate) fn record_move(&mut self, mv: &TokenMove, forbidden_limit: u8) -> bool {
        let Some(moved) = mv.moved_token() else {
            return false;
        };
        let Some(slot) = self.tokens.iter_mut().find(|t| **t == mv.token) else {
            return false;
        };

        *slot = moved;
        self.tokens.sort_unstable();
        self.prev = Some(mv.token);
        self.check_forbidden(forbidden_limit);
        self.moves += 1;
        true
    }

    fn check_forbidden(&mut self, limit: u8) {
        for i in 0..self.watch.len() {
            let pos = self.watch[i].pos;
            if self.occupies(pos) {
                let cell = &mut self.watch[i];
                cell.streak = cell.streak.saturating_add(1);
                if cell.streak > limit {
                    self.lost = true;
                }
            } else {
                self.watch[i].streak = 0;
            }
        }
    }
}
