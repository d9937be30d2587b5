//! Run configuration read from a TOML file.
//!
//! Every section and field is optional; missing values fall back to the
//! defaults of [`SearchConfig`] and [`DuelConfig`].
//!
//! ```toml
//! [search]
//! strategies = ["bfs", "astar"]
//! linear_conflict = true
//!
//! [duel]
//! depth = 6
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::duel::DuelConfig;
use crate::error::{Error, Result};
use crate::search::SearchConfig;

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub duel: DuelConfig,
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("read config {}", path.display()), e))?;
        let config = Self::from_toml(&text)?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
