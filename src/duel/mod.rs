//! Two-agent adversarial sliding game.
//!
//! ## Rules
//!
//! Each side owns two tokens and slides one of them per turn into a vacant
//! cell. Side One wins by covering its goal cells with labels 1 and 2; Side
//! Two wins with labels 8 and 9 on the bottom-right cells. Any other label
//! is an immovable obstacle.
//!
//! Two extra rules keep games short:
//!
//! - an agent never immediately undoes its own previous move
//! - an agent that keeps a token on one of the opponent's goal cells for
//!   more than `forbidden_limit` consecutive own moves loses
//!
//! [`Minimax`] scores a position with depth-limited alpha-beta search.

pub mod agent;
pub mod config;
pub mod minimax;
pub mod side;
pub mod state;

pub use agent::{Agent, Token, TokenMove, WatchCell};
pub use config::{DuelConfig, DuelLayout, SideRules};
pub use minimax::{alpha_beta, DuelReport, Minimax, MinimaxStats};
pub use side::{Side, SideMap};
pub use state::{DuelState, Expansion, Outcome, TOKENS_PER_SIDE};
