//! # slide-search
//!
//! Search engines for 3x3 sliding-tile puzzles.
//!
//! ## Design Principles
//!
//! 1. **One Loop, Many Orders**: BFS, DFS, UCS, Greedy and A* share a single
//!    expand/visit driver and differ only in their frontier.
//!
//! 2. **Deterministic Results**: Moves are generated in a fixed order and
//!    priority ties break on direction, then insertion order. Identical input
//!    gives identical paths and expansion counts.
//!
//! 3. **Copy On Branch**: Every child owns its board. Move paths use `im-rs`
//!    vectors so siblings share their prefix.
//!
//! ## Modules
//!
//! - `core`: Board, positions, directions, seeded RNG
//! - `heuristic`: Manhattan distance and linear conflicts
//! - `puzzle`: Classic and multi-blank puzzle states, scrambler
//! - `search`: Frontiers, strategies and the solver
//! - `duel`: Two-agent game with alpha-beta minimax
//! - `config`: TOML run configuration
//! - `io`: Board input and result output

pub mod config;
pub mod core;
pub mod duel;
pub mod error;
pub mod heuristic;
pub mod io;
pub mod puzzle;
pub mod search;

// Re-export commonly used types
pub use crate::config::Config;

pub use crate::core::{Board, BoardRng, Direction, Pos, EMPTY};

pub use crate::error::{Error, Result};

pub use crate::heuristic::{linear_conflicts, manhattan, GoalLayout};

pub use crate::puzzle::{PuzzleState, Step, Variant};

pub use crate::search::{
    SearchConfig, SearchOutcome, SearchStats, Solution, Solver, Strategy,
};

pub use crate::duel::{
    DuelConfig, DuelLayout, DuelReport, DuelState, Minimax, MinimaxStats, Outcome, Side,
};
