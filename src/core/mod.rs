//! Core grid types: positions, directions, boards and the scramble RNG.
//!
//! These are shared by the single-agent puzzle and the two-player duel.
//! Nothing here knows about goals or search strategies.

pub mod board;
pub mod position;
pub mod rng;

pub use board::{Board, EMPTY};
pub use position::{Direction, Pos, CELLS, SIZE};
pub use rng::BoardRng;
