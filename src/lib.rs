//! # combinatorial-referee
//!
//! A referee for two-player, perfect-information, alternating-move games
//! ("combinatorial games") played between pluggable agents.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: A ruleset only defines its positions and each
//!    player's legal options. The referee never looks inside a position.
//!
//! 2. **Explicit Outcomes**: Every agent answer is classified as a legal
//!    move, a "no move available" signal, an illegal move, or a fault.
//!    Forfeit-versus-retry decisions branch on that tag.
//!
//! 3. **Reproducible**: All randomness flows from a seeded `GameRng`, and
//!    every match gets its own forked stream.
//!
//! ## Modules
//!
//! - `core`: Player IDs, per-player maps, RNG, configuration, errors
//! - `rules`: `GamePosition` and `PositionFactory` contracts
//! - `agents`: `PlayerAgent` contract and reference agents
//! - `referee`: The match engine and tournament driver
//! - `games`: Sample rulesets (Rotisserie Nim)

pub mod agents;
pub mod core;
pub mod games;
pub mod referee;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{AgentError, GameRng, MatchConfig, PlayerId, PlayerMap};

pub use crate::rules::{FixedPosition, GamePosition, PositionFactory};

pub use crate::agents::{FirstOptionAgent, PlayerAgent, RandomAgent};

pub use crate::referee::{
    Attempt, ForfeitCause, MatchEnd, MatchOutcome, MatchPhase, PacerHandle, Pause, Referee,
    TournamentResult, TurnOutcome,
};
