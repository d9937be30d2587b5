//! Depth-limited minimax with alpha-beta pruning.
//!
//! ## Values
//!
//! Every node scores -1, 0 or +1 from Side One's perspective. Side One
//! maximises and Side Two minimises. A node is a leaf when the game is
//! decided or the depth budget is spent (undecided leaves score 0). A side
//! with no legal move loses.
//!
//! ## Statistics
//!
//! [`MinimaxStats`] is threaded through the recursion as an explicit
//! accumulator; nothing is global, so searches can run back to back.
//!
//! ```
//! use slide_search::duel::{DuelConfig, DuelState, Minimax, Side};
//!
//! let config = DuelConfig::default().with_depth(1);
//! let root = DuelState::parse("1 0 0\n0 2 0\n8 0 9", Side::One, &config.layout).unwrap();
//!
//! let report = Minimax::new(config).search(&root);
//! assert_eq!(report.utility, 1);
//! ```

use std::time::Instant;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::config::DuelConfig;
use super::side::{Side, SideMap};
use super::state::{DuelState, Outcome};

/// Counters collected during one minimax search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimaxStats {
    /// Moves generated at expanded nodes, suppressed reversals included.
    pub expanded: u64,

    /// Per side, the largest total move count of a node the opponent was
    /// to move at and could not avoid losing: a Side One node backed up to
    /// -1 counts for Side Two, a Side Two node backed up to +1 for Side One.
    pub deciding_moves: SideMap<u32>,

    /// Nodes whose remaining children were pruned.
    pub cutoffs: u64,

    /// Decided leaves reached.
    pub decided_leaves: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl MinimaxStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Note a node whose mover is lost whatever it plays.
    fn record_forced_loss(&mut self, mover: Side, total_moves: u32) {
        let best = &mut self.deciding_moves[mover.opponent()];
        *best = (*best).max(total_moves);
    }
}

/// Result of a duel search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelReport {
    /// Side that moved at the root.
    pub first: Side,

    /// Game value from the first mover's perspective.
    pub utility: i32,

    /// Game value from Side One's perspective.
    pub value: i32,

    /// Same as `stats.expanded`.
    pub expanded: u64,

    /// Deciding move count of the winning side, 0 on a draw.
    pub max_moves: u32,

    pub stats: MinimaxStats,
}

impl DuelReport {
    fn new(first: Side, value: i32, stats: MinimaxStats) -> Self {
        let max_moves = match value {
            1 => stats.deciding_moves[Side::One],
            -1 => stats.deciding_moves[Side::Two],
            _ => 0,
        };
        Self {
            first,
            utility: value * first.sign(),
            value,
            expanded: stats.expanded,
            max_moves,
            stats,
        }
    }

    /// The side the search predicts wins, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self.value {
            1 => Some(Side::One),
            -1 => Some(Side::Two),
            _ => None,
        }
    }
}

/// Alpha-beta searcher.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    config: DuelConfig,
}

impl Minimax {
    /// Create a searcher.
    pub fn new(config: DuelConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &DuelConfig {
        &self.config
    }

    /// Search from `root` to the configured depth.
    pub fn search(&self, root: &DuelState) -> DuelReport {
        let start = Instant::now();
        let first = root.to_move();
        debug!("duel: {first} to move, depth {}", self.config.depth);

        let mut stats = MinimaxStats::new();
        let value = alpha_beta(root, self.config.depth, i32::MIN, i32::MAX, &mut stats);
        stats.time_us = start.elapsed().as_micros() as u64;

        let report = DuelReport::new(first, value, stats);
        info!(
            "duel: value {} ({} first, utility {}), {} expanded, {} cutoffs",
            report.value, first, report.utility, report.expanded, report.stats.cutoffs
        );
        report
    }
}

/// Score `state` to `depth` plies within the `(alpha, beta)` window.
pub fn alpha_beta(
    state: &DuelState,
    depth: u32,
    alpha: i32,
    beta: i32,
    stats: &mut MinimaxStats,
) -> i32 {
    let outcome = state.outcome();
    if outcome != Outcome::Ongoing {
        stats.decided_leaves += 1;
        return outcome.value();
    }
    if depth == 0 {
        return 0;
    }

    let mover = state.to_move();
    let expansion = state.expand();
    stats.expanded += expansion.counted();

    let best = if expansion.children.is_empty() {
        -mover.sign()
    } else {
        best_child(mover, &expansion.children, depth, alpha, beta, stats)
    };

    if best == -mover.sign() {
        stats.record_forced_loss(mover, state.total_moves());
    }
    best
}

fn best_child(
    mover: Side,
    children: &[DuelState],
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    stats: &mut MinimaxStats,
) -> i32 {
    match mover {
        Side::One => {
            let mut best = i32::MIN;
            for child in children {
                let value = alpha_beta(child, depth - 1, alpha, beta, stats);
                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
        Side::Two => {
            let mut best = i32::MAX;
            for child in children {
                let value = alpha_beta(child, depth - 1, alpha, beta, stats);
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duel::DuelLayout;

    fn search(text: &str, first: Side, depth: u32) -> DuelReport {
        let config = DuelConfig::default().with_depth(depth);
        let root = DuelState::parse(text, first, &config.layout).unwrap();
        Minimax::new(config).search(&root)
    }

    #[test]
    fn test_decided_root() {
        let report = search("1 2 0\n0 8 0\n0 0 9", Side::One, 10);
        assert_eq!(report.utility, 1);
        assert_eq!(report.expanded, 0);
        assert_eq!(report.max_moves, 0);
    }

    #[test]
    fn test_one_ply_win() {
        let report = search("1 0 0\n0 2 0\n8 0 9", Side::One, 1);
        assert_eq!(report.value, 1);
        assert_eq!(report.utility, 1);
        assert_eq!(report.expanded, 6);
        // A Side One node backed up to +1 is not a forced loss for anyone.
        assert_eq!(report.max_moves, 0);
        assert_eq!(report.winner(), Some(Side::One));
    }

    #[test]
    fn test_second_side_first_win_is_positive_utility() {
        let report = search("1 0 0\n0 2 0\n8 0 9", Side::Two, 1);
        assert_eq!(report.value, -1);
        assert_eq!(report.utility, 1);
        assert_eq!(report.expanded, 4);
        assert_eq!(report.max_moves, 0);
    }

    #[test]
    fn test_zero_depth_is_draw() {
        let report = search("1 0 0\n0 2 0\n8 0 9", Side::One, 0);
        assert_eq!(report.value, 0);
        assert_eq!(report.expanded, 0);
        assert_eq!(report.max_moves, 0);
        assert_eq!(report.winner(), None);
    }

    #[test]
    fn test_side_without_moves_loses() {
        // Side One's tokens are boxed in by obstacles.
        let layout = DuelLayout::default();
        let root = DuelState::parse("1 5 0\n5 2 5\n8 5 9", Side::One, &layout).unwrap();
        let mut stats = MinimaxStats::new();
        assert_eq!(alpha_beta(&root, 3, i32::MIN, i32::MAX, &mut stats), -1);
        assert_eq!(stats.expanded, 0);
        assert_eq!(stats.deciding_moves[Side::Two], 0);

        let report = search("1 5 0\n5 2 5\n8 5 9", Side::One, 1);
        assert_eq!((report.utility, report.expanded, report.max_moves), (-1, 0, 0));

        // Same board with Side Two boxed in and to move.
        let root = DuelState::parse("1 5 0\n5 2 5\n8 5 9", Side::Two, &layout).unwrap();
        let mut stats = MinimaxStats::new();
        assert_eq!(alpha_beta(&root, 3, i32::MIN, i32::MAX, &mut stats), 1);
    }

    #[test]
    fn test_forced_loss_recorded_at_inner_node() {
        // Side Two is boxed in; 1 -> (0, 1) leaves it without a move after
        // one total move, while 2 -> (0, 1) wins outright.
        let report = search("1 0 0\n5 2 5\n8 5 9", Side::One, 2);
        assert_eq!(report.value, 1);
        assert_eq!(report.expanded, 2);
        assert_eq!(report.stats.deciding_moves[Side::One], 1);
        assert_eq!(report.max_moves, 1);

        // One ply short, the boxed-in reply is never expanded.
        let report = search("1 0 0\n5 2 5\n8 5 9", Side::One, 1);
        assert_eq!(report.value, 1);
        assert_eq!(report.max_moves, 0);
    }

    #[test]
    fn test_stats_serialization() {
        let report = search("1 0 0\n0 2 0\n8 0 9", Side::One, 2);
        let json = serde_json::to_string(&report.stats).unwrap();
        let deserialized: MinimaxStats = serde_json::from_str(&json).unwrap();
        assert_eq!(report.stats, deserialized);
    }
}
