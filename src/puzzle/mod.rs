//! Single-agent sliding puzzles.
//!
//! Two variants share the same machinery:
//!
//! - **Classic**: the 8-puzzle, one blank, goal `1 2 3 / 4 5 6 / 7 8 0`.
//! - **Multi-blank**: six tiles and three blanks, goal `1 2 3 / 4 5 6 / 0 0 0`.
//!   Any blank may slide, but never into another blank.
//!
//! In both, the thing that moves is a blank: a path is the sequence of
//! blank slides that turns the start board into the goal.

mod scramble;
mod state;

pub use scramble::{scramble, scramble_batch, scramble_seeded};
pub use state::{PuzzleState, Step};

use serde::{Deserialize, Serialize};

use crate::core::{Board, EMPTY};
use crate::error::{Error, Result};
use crate::heuristic::GoalLayout;

const CLASSIC_GOAL: Board = Board::new([1, 2, 3, 4, 5, 6, 7, 8, 0]);
const MULTI_BLANK_GOAL: Board = Board::new([1, 2, 3, 4, 5, 6, 0, 0, 0]);

/// Which puzzle is being solved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    #[default]
    Classic,
    MultiBlank,
}

impl Variant {
    /// Goal board.
    #[must_use]
    pub const fn goal(self) -> Board {
        match self {
            Variant::Classic => CLASSIC_GOAL,
            Variant::MultiBlank => MULTI_BLANK_GOAL,
        }
    }

    /// Number of blanks on every board of this variant.
    #[must_use]
    pub const fn blank_count(self) -> usize {
        match self {
            Variant::Classic => 1,
            Variant::MultiBlank => 3,
        }
    }

    /// Goal cells of the labelled tiles.
    #[must_use]
    pub fn layout(self) -> &'static GoalLayout {
        // Both goals place label k at row-major index k - 1
        GoalLayout::standard()
    }

    /// Whether A* adds the linear-conflict penalty unless configured otherwise.
    #[must_use]
    pub const fn uses_linear_conflicts(self) -> bool {
        matches!(self, Variant::MultiBlank)
    }

    /// Check that `board` carries exactly the labels of this variant's goal.
    pub fn validate(self, board: &Board) -> Result<()> {
        let goal = self.goal();
        for label in EMPTY..=9 {
            let expected = goal.count(label);
            let got = board.count(label);
            if expected != got {
                return Err(Error::LabelCount {
                    label,
                    expected,
                    got,
                });
            }
        }
        Ok(())
    }

    /// Short name used in logs and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::MultiBlank => "multi-blank",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" | "8" => Ok(Variant::Classic),
            "multi-blank" | "multi" | "6" => Ok(Variant::MultiBlank),
            other => Err(format!("unknown puzzle variant '{other}'")),
        }
    }
}
