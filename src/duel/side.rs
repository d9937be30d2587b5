//! The two duel players and per-player storage.
//!
//! ## Side
//!
//! `Side::One` is the maximising player (outcome +1 is its win),
//! `Side::Two` the minimising one.
//!
//! ## SideMap
//!
//! Two-slot storage indexed by `Side`. Cloning a `SideMap<Agent>` clones
//! both agents, which is how every game-tree branch gets its own copy.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::error::Error;

/// One of the two duel players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// Both sides, `One` first.
    pub const ALL: [Side; 2] = [Side::One, Side::Two];

    /// Slot index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// +1 for `One`, -1 for `Two`; flips a `One`-relative value to this
    /// side's perspective.
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Side::One => 1,
            Side::Two => -1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "agent {}", self.index() + 1)
    }
}

impl std::str::FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Side::One),
            "2" => Ok(Side::Two),
            other => Err(Error::InvalidSide(other.to_string())),
        }
    }
}

/// Per-side data storage.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a SideMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            data: [factory(Side::One), factory(Side::Two)],
        }
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for SideMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        &self.data[side.index()]
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        &mut self.data[side.index()]
    }
}
