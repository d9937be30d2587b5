//! Single-agent search: five strategies over one expand/visit loop.
//!
//! ## Overview
//!
//! [`Solver::run`] pulls a state from a [`Frontier`], skips boards it has
//! already visited, stops at the goal, and otherwise pushes every child
//! back. The strategies differ only in the frontier they build:
//!
//! - **BFS** and **UCS** and **A\*** return shortest paths
//! - **DFS** and **Greedy** reach the goal but may take detours
//!
//! Tie-breaking is fixed (direction code, then insertion order), so the same
//! board always yields the same path and expansion count.

pub mod config;
pub mod frontier;
pub mod solver;
pub mod stats;

pub use config::SearchConfig;
pub use frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier, PriorityKey, Strategy};
pub use solver::{search, SearchOutcome, Solution, Solver};
pub use stats::SearchStats;
