//! Single-agent search configuration.

use serde::{Deserialize, Serialize};

use super::Strategy;
use crate::heuristic::LINEAR_CONFLICT_PENALTY;
use crate::puzzle::Variant;

/// Single-agent search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Strategies to run, in order (default: BFS, DFS, UCS, Greedy, A*).
    pub strategies: Vec<Strategy>,

    /// Force the A* linear-conflict term on or off.
    /// `None` follows the puzzle variant (on for multi-blank only).
    pub linear_conflict: Option<bool>,

    /// Moves charged per linear conflict (default: 2).
    pub conflict_penalty: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategies: Strategy::ALL.to_vec(),
            linear_conflict: None,
            conflict_penalty: LINEAR_CONFLICT_PENALTY,
        }
    }
}

impl SearchConfig {
    /// Run only the given strategies.
    pub fn with_strategies(mut self, strategies: impl Into<Vec<Strategy>>) -> Self {
        self.strategies = strategies.into();
        self
    }

    /// Force the A* linear-conflict term on or off.
    pub fn with_linear_conflict(mut self, enabled: bool) -> Self {
        self.linear_conflict = Some(enabled);
        self
    }

    /// Set the per-conflict penalty.
    pub fn with_conflict_penalty(mut self, penalty: u32) -> Self {
        self.conflict_penalty = penalty;
        self
    }

    /// Whether A* adds linear conflicts for this variant.
    #[must_use]
    pub fn linear_conflict_for(&self, variant: Variant) -> bool {
        self.linear_conflict
            .unwrap_or_else(|| variant.uses_linear_conflicts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.strategies, Strategy::ALL.to_vec());
        assert_eq!(config.conflict_penalty, 2);
        assert!(!config.linear_conflict_for(Variant::Classic));
        assert!(config.linear_conflict_for(Variant::MultiBlank));
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_strategies([Strategy::AStar])
            .with_linear_conflict(true)
            .with_conflict_penalty(4);

        assert_eq!(config.strategies, vec![Strategy::AStar]);
        assert!(config.linear_conflict_for(Variant::Classic));
        assert_eq!(config.conflict_penalty, 4);
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_linear_conflict(false);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: SearchConfig = serde_json::from_str(r#"{"strategies": ["a-star"]}"#).unwrap();
        assert_eq!(config.strategies, vec![Strategy::AStar]);
        assert_eq!(config.conflict_penalty, 2);
    }
}
