//! Search statistics for diagnostics and reporting.

use serde::{Deserialize, Serialize};

/// Statistics collected during one single-agent search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States expanded (popped, not yet visited, not the goal).
    pub expanded: u64,

    /// Child states pushed onto the frontier.
    pub generated: u64,

    /// Pops discarded because their board was already visited.
    pub duplicates: u64,

    /// Largest frontier size observed.
    pub max_frontier: usize,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate expansions per second.
    #[must_use]
    pub fn expansions_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.expanded as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Average children pushed per expansion.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.expanded == 0 {
            0.0
        } else {
            self.generated as f64 / self.expanded as f64
        }
    }
}
