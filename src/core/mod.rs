//! Core types: players, RNG, configuration, errors.
//!
//! Nothing here knows about any particular ruleset.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::MatchConfig;
pub use error::AgentError;
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
