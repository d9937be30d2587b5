//! Solvable start boards from seeded random walks.

use super::{PuzzleState, Variant};
use crate::core::{Board, BoardRng};

/// Walk `moves` random legal slides away from the goal.
///
/// The result is always solvable in at most `moves` slides.
#[must_use]
pub fn scramble(variant: Variant, moves: usize, rng: &mut BoardRng) -> Board {
    let mut state = PuzzleState::solved(variant);
    for _ in 0..moves {
        let steps = state.available_moves();
        let Some(&step) = rng.choose(&steps) else {
            break;
        };
        if let Some(next) = state.apply(step) {
            state = next;
        }
    }
    *state.board()
}

/// [`scramble`] with a fresh RNG.
#[must_use]
pub fn scramble_seeded(variant: Variant, moves: usize, seed: u64) -> Board {
    scramble(variant, moves, &mut BoardRng::new(seed))
}

/// `count` boards, each walked on its own forked stream.
///
/// Board `i` does not depend on how many boards follow it.
#[must_use]
pub fn scramble_batch(variant: Variant, moves: usize, count: usize, seed: u64) -> Vec<Board> {
    let mut rng = BoardRng::new(seed);
    (0..count)
        .map(|_| scramble(variant, moves, &mut rng.fork()))
        .collect()
}
