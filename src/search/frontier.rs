//! Frontier orderings for the shared search loop.
//!
//! Every strategy drives the same expand/visit loop; they differ only in
//! which pending state comes out of the frontier next.
//!
//! | Strategy | Frontier | Key |
//! |---|---|---|
//! | BFS | [`FifoFrontier`] | insertion order |
//! | DFS | [`LifoFrontier`] | reverse insertion, siblings in listing order |
//! | UCS | [`PriorityFrontier`] | cost |
//! | Greedy | [`PriorityFrontier`] | heuristic |
//! | A* | [`PriorityFrontier`] | cost + heuristic (+ linear conflicts) |
//!
//! Priority keys tie-break on the direction code of the state's last step and
//! then on insertion order, which makes every ordering total and every run
//! reproducible.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use serde::{Deserialize, Serialize};

use super::config::SearchConfig;
use crate::puzzle::PuzzleState;

/// Worklist of states waiting to be visited.
pub trait Frontier {
    /// Add a state.
    fn push(&mut self, state: PuzzleState);

    /// Remove the next state to visit.
    fn pop(&mut self) -> Option<PuzzleState>;

    /// Number of pending states.
    fn len(&self) -> usize;

    /// Check if no states are pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add the children of one expansion, given in listing order.
    fn extend(&mut self, children: Vec<PuzzleState>) {
        for child in children {
            self.push(child);
        }
    }
}

// =============================================================================
// FIFO / LIFO
// =============================================================================

/// First in, first out.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<PuzzleState>,
}

impl FifoFrontier {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, state: PuzzleState) {
        self.queue.push_back(state);
    }

    fn pop(&mut self) -> Option<PuzzleState> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<PuzzleState>,
}

impl LifoFrontier {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, state: PuzzleState) {
        self.stack.push(state);
    }

    fn pop(&mut self) -> Option<PuzzleState> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    /// Pushed in reverse so the first listed child is popped first.
    fn extend(&mut self, children: Vec<PuzzleState>) {
        self.stack.extend(children.into_iter().rev());
    }
}

// =============================================================================
// Priority
// =============================================================================

/// Primary ordering key of a [`PriorityFrontier`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriorityKey {
    /// Accumulated cost (UCS).
    Cost,
    /// Cached Manhattan distance (Greedy).
    Heuristic,
    /// Cost plus Manhattan distance, optionally plus `penalty` per linear
    /// conflict (A*).
    CostPlusHeuristic {
        linear_conflict: bool,
        penalty: u32,
    },
}

impl PriorityKey {
    /// Primary key of a state.
    #[must_use]
    pub fn of(&self, state: &PuzzleState) -> u32 {
        match *self {
            PriorityKey::Cost => state.cost(),
            PriorityKey::Heuristic => state.heuristic(),
            PriorityKey::CostPlusHeuristic {
                linear_conflict,
                penalty,
            } => {
                let mut key = state.cost() + state.heuristic();
                if linear_conflict {
                    let layout = state.variant().layout();
                    key += penalty * layout.linear_conflicts(state.board());
                }
                key
            }
        }
    }
}

#[derive(Debug)]
struct Entry {
    key: (u32, u8, u64),
    state: PuzzleState,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-heap on `(key, direction code, insertion counter)`.
#[derive(Debug)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Reverse<Entry>>,
    key: PriorityKey,
    counter: u64,
}

impl PriorityFrontier {
    /// Create an empty heap ordered by `key`.
    pub fn new(key: PriorityKey) -> Self {
        Self {
            heap: BinaryHeap::new(),
            key,
            counter: 0,
        }
    }

    /// The ordering key.
    #[must_use]
    pub fn key(&self) -> PriorityKey {
        self.key
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, state: PuzzleState) {
        self.counter += 1;
        let key = (self.key.of(&state), state.direction_code(), self.counter);
        self.heap.push(Reverse(Entry { key, state }));
    }

    fn pop(&mut self) -> Option<PuzzleState> {
        self.heap.pop().map(|Reverse(entry)| entry.state)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

// =============================================================================
// Strategy
// =============================================================================

/// Search strategy, i.e. frontier ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    #[serde(alias = "bfs")]
    BreadthFirst,
    #[serde(alias = "dfs")]
    DepthFirst,
    #[serde(alias = "ucs")]
    UniformCost,
    #[serde(alias = "greedy")]
    GreedyBestFirst,
    #[serde(alias = "astar")]
    AStar,
}

impl Strategy {
    /// Every strategy in the fixed reporting order.
    pub const ALL: [Strategy; 5] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::UniformCost,
        Strategy::GreedyBestFirst,
        Strategy::AStar,
    ];

    /// Build an empty frontier with this strategy's ordering.
    #[must_use]
    pub fn frontier(self, config: &SearchConfig, linear_conflict: bool) -> Box<dyn Frontier> {
        match self {
            Strategy::BreadthFirst => Box::new(FifoFrontier::new()),
            Strategy::DepthFirst => Box::new(LifoFrontier::new()),
            Strategy::UniformCost => Box::new(PriorityFrontier::new(PriorityKey::Cost)),
            Strategy::GreedyBestFirst => Box::new(PriorityFrontier::new(PriorityKey::Heuristic)),
            Strategy::AStar => Box::new(PriorityFrontier::new(PriorityKey::CostPlusHeuristic {
                linear_conflict,
                penalty: config.conflict_penalty,
            })),
        }
    }

    /// Whether the returned path is guaranteed shortest.
    #[must_use]
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Strategy::DepthFirst | Strategy::GreedyBestFirst)
    }

    /// Short name used in logs and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "bfs",
            Strategy::DepthFirst => "dfs",
            Strategy::UniformCost => "ucs",
            Strategy::GreedyBestFirst => "greedy",
            Strategy::AStar => "astar",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "ucs" | "uniform-cost" => Ok(Strategy::UniformCost),
            "greedy" | "greedy-best-first" => Ok(Strategy::GreedyBestFirst),
            "astar" | "a-star" | "a*" => Ok(Strategy::AStar),
            other => Err(format!("unknown strategy '{other}'")),
        }
    }
}
