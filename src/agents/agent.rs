//! The agent contract and reference agents.

use crate::core::{AgentError, GameRng, PlayerId};
use crate::rules::GamePosition;

// =============================================================================
// Agent Contract
// =============================================================================

/// A player of combinatorial games.
pub trait PlayerAgent<G: GamePosition>: Send {
    /// Choose an option of `position` for `player`.
    ///
    /// Returning a position that is not one of `player`'s options forfeits
    /// the match. `Err(AgentError::NoMoveAvailable)` asks the referee for
    /// another attempt; `Err(AgentError::Fault(_))` forfeits.
    fn choose_move(&mut self, position: &G, player: PlayerId) -> Result<G, AgentError>;

    /// Display name.
    fn name(&self) -> String {
        format!("A {} player.", G::ruleset_name())
    }
}

impl<G: GamePosition, A: PlayerAgent<G> + ?Sized> PlayerAgent<G> for Box<A> {
    fn choose_move(&mut self, position: &G, player: PlayerId) -> Result<G, AgentError> {
        (**self).choose_move(position, player)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

// =============================================================================
// Reference Agents
// =============================================================================

/// Uniform random agent.
///
/// Selects uniformly from the legal options using its own seeded stream.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    /// Create a random agent with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl<G: GamePosition> PlayerAgent<G> for RandomAgent {
    fn choose_move(&mut self, position: &G, player: PlayerId) -> Result<G, AgentError> {
        let options = position.options(player);
        self.rng
            .choose(&options)
            .cloned()
            .ok_or(AgentError::NoMoveAvailable)
    }

    fn name(&self) -> String {
        format!("Random {} player", G::ruleset_name())
    }
}

/// Deterministic agent that always plays the first listed option.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstOptionAgent;

impl<G: GamePosition> PlayerAgent<G> for FirstOptionAgent {
    fn choose_move(&mut self, position: &G, player: PlayerId) -> Result<G, AgentError> {
        position
            .options(player)
            .into_iter()
            .next()
            .ok_or(AgentError::NoMoveAvailable)
    }

    fn name(&self) -> String {
        "First-option player".to_string()
    }
}
