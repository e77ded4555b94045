//! Ruleset contracts.
//!
//! Rulesets implement `GamePosition` to define:
//! - The legal options of each player from a position
//! - Identity equality between positions (used for legality checks)
//! - How a position is rendered and how the players' roles are named
//!
//! A `PositionFactory` hands the referee a fresh starting position for
//! every match. The referee calls into both but never interprets
//! ruleset-specific state directly.

pub mod factory;
pub mod position;

pub use factory::{FixedPosition, PositionFactory};
pub use position::GamePosition;
