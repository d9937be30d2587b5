//! The shared expand/visit loop.
//!
//! ```
//! use slide_search::puzzle::{PuzzleState, Variant};
//! use slide_search::search::{Solver, SearchConfig, Strategy};
//!
//! let start = PuzzleState::parse("1 2 3\n4 5 6\n7 0 8", Variant::Classic).unwrap();
//! let solver = Solver::new(SearchConfig::default());
//!
//! let outcome = solver.run(&start, Strategy::AStar);
//! assert_eq!(outcome.cost(), Some(1));
//! ```

use std::time::Instant;

use log::{debug, info};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::config::SearchConfig;
use super::frontier::Strategy;
use super::stats::SearchStats;
use crate::core::Board;
use crate::puzzle::{PuzzleState, Step, Variant};

/// A goal state reached by a search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Number of moves.
    pub cost: u32,
    /// Blank slides from the start board to the goal.
    pub path: Vec<Step>,
    /// The goal board.
    pub board: Board,
}

impl From<&PuzzleState> for Solution {
    fn from(state: &PuzzleState) -> Self {
        Self {
            cost: state.cost(),
            path: state.path().iter().copied().collect(),
            board: *state.board(),
        }
    }
}

/// Result of running one strategy.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub strategy: Strategy,
    pub variant: Variant,
    /// States expanded before the goal was popped (or the frontier ran dry).
    pub expanded: u64,
    /// `None` when the frontier emptied without reaching the goal.
    pub solution: Option<Solution>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// Check if a solution was found.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// Solution length, if solved.
    #[must_use]
    pub fn cost(&self) -> Option<u32> {
        self.solution.as_ref().map(|s| s.cost)
    }
}

/// Runs single-agent searches with a fixed configuration.
#[derive(Clone, Debug, Default)]
pub struct Solver {
    config: SearchConfig,
}

impl Solver {
    /// Create a solver.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The solver's configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search from `initial` with one strategy.
    ///
    /// Pops states in the strategy's order. A state whose board was already
    /// visited is discarded without counting as an expansion; the first state
    /// popped for a board wins. The search stops at the first goal popped or
    /// when the frontier is empty.
    pub fn run(&self, initial: &PuzzleState, strategy: Strategy) -> SearchOutcome {
        let start = Instant::now();
        let variant = initial.variant();
        let linear_conflict = strategy == Strategy::AStar && self.config.linear_conflict_for(variant);
        debug!(
            "{strategy}: searching {variant} board (h={}, linear conflicts: {linear_conflict}, shortest path guaranteed: {})",
            initial.heuristic(),
            strategy.is_optimal()
        );

        let mut stats = SearchStats::new();
        let mut frontier = strategy.frontier(&self.config, linear_conflict);
        let mut visited: FxHashSet<Board> = FxHashSet::default();
        let mut solution = None;

        frontier.push(initial.clone());
        stats.max_frontier = frontier.len();

        while let Some(state) = frontier.pop() {
            if !visited.insert(*state.board()) {
                stats.duplicates += 1;
                continue;
            }

            if state.is_goal() {
                solution = Some(Solution::from(&state));
                break;
            }

            let children = state.expand();
            stats.expanded += 1;
            stats.generated += children.len() as u64;
            frontier.extend(children);
            stats.max_frontier = stats.max_frontier.max(frontier.len());
        }

        stats.time_us = start.elapsed().as_micros() as u64;

        match &solution {
            Some(found) => info!(
                "{strategy}: solved in {} moves, {} expanded, {} visited ({:.0} exp/s, branching {:.2})",
                found.cost,
                stats.expanded,
                visited.len(),
                stats.expansions_per_second(),
                stats.branching_factor()
            ),
            None => info!(
                "{strategy}: no solution, {} expanded, {} visited ({:.0} exp/s, branching {:.2})",
                stats.expanded,
                visited.len(),
                stats.expansions_per_second(),
                stats.branching_factor()
            ),
        }

        SearchOutcome {
            strategy,
            variant,
            expanded: stats.expanded,
            solution,
            stats,
        }
    }

    /// Run every configured strategy in order, each from an untouched copy
    /// of `initial`.
    pub fn run_all(&self, initial: &PuzzleState) -> Vec<SearchOutcome> {
        self.config
            .strategies
            .iter()
            .map(|&strategy| self.run(initial, strategy))
            .collect()
    }
}

/// Search with the default configuration.
pub fn search(initial: &PuzzleState, strategy: Strategy) -> SearchOutcome {
    Solver::default().run(initial, strategy)
}
