//! Player agents.
//!
//! An agent is a decision function: given a position and the identity of
//! the player to move, it proposes one of that player's options. Agents
//! may keep state between calls and need not be deterministic.
//!
//! - `PlayerAgent`: the contract the referee drives
//! - `RandomAgent`: uniform choice over the legal options (seeded)
//! - `FirstOptionAgent`: always the first listed option

pub mod agent;

pub use agent::{FirstOptionAgent, PlayerAgent, RandomAgent};
