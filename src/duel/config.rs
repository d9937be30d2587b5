//! Duel configuration: search depth and the rule constants.

use serde::{Deserialize, Serialize};

use super::side::{Side, SideMap};
use crate::core::Pos;

/// What one side owns, where it must get to, and which cells it may not
/// loiter on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideRules {
    /// Labels this side moves. Tokens may repeat a label.
    pub labels: [u8; 2],

    /// Cells that must hold both labels (in either order) for a win.
    pub goal: [Pos; 2],

    /// Cells whose consecutive occupancy by this side's tokens is counted.
    pub watch: Vec<Pos>,
}

impl SideRules {
    /// Check if `label` belongs to this side.
    #[must_use]
    pub fn owns(&self, label: u8) -> bool {
        self.labels.contains(&label)
    }

    /// Check if a pair of cell contents matches the label pair in either
    /// order.
    #[must_use]
    pub fn goal_reached(&self, a: u8, b: u8) -> bool {
        let [x, y] = self.labels;
        (a == x && b == y) || (a == y && b == x)
    }
}

/// Rule constants for both sides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuelLayout {
    pub sides: SideMap<SideRules>,

    /// A watch counter above this value loses the game.
    pub forbidden_limit: u8,
}

impl DuelLayout {
    /// Rules for one side.
    #[must_use]
    pub fn rules(&self, side: Side) -> &SideRules {
        &self.sides[side]
    }

    /// Create a new layout with a custom forbidden-zone limit.
    pub fn with_forbidden_limit(mut self, limit: u8) -> Self {
        self.forbidden_limit = limit;
        self
    }
}

impl Default for DuelLayout {
    fn default() -> Self {
        let top = [Pos::new(0, 0), Pos::new(0, 1)];
        let bottom = [Pos::new(2, 1), Pos::new(2, 2)];
        Self {
            sides: SideMap::new(|side| match side {
                Side::One => SideRules {
                    labels: [1, 2],
                    goal: top,
                    watch: bottom.to_vec(),
                },
                Side::Two => SideRules {
                    labels: [8, 9],
                    goal: bottom,
                    watch: top.to_vec(),
                },
            }),
            forbidden_limit: 2,
        }
    }
}

/// Duel search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuelConfig {
    /// Plies searched below the root.
    pub depth: u32,

    pub layout: DuelLayout,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            depth: 10,
            layout: DuelLayout::default(),
        }
    }
}

impl DuelConfig {
    /// Create a new config with custom search depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with a custom rule layout.
    pub fn with_layout(mut self, layout: DuelLayout) -> Self {
        self.layout = layout;
        self
    }
}
