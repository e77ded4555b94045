//! Per-attempt, per-turn and per-match outcomes, and the transient state
//! of a match in progress.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, PlayerId, PlayerMap};
use crate::rules::GamePosition;

/// What a single request to an agent produced.
///
/// The referee branches on this tag: `Legal` ends the turn, `NoMoveSignal`
/// costs one attempt, `IllegalMove` and `Fault` forfeit the match.
#[derive(Clone, Debug, PartialEq)]
pub enum Attempt<G> {
    /// The proposal is one of the mover's options.
    Legal(G),
    /// The agent reported that it found no move.
    NoMoveSignal,
    /// The proposal is not one of the mover's options.
    IllegalMove(G),
    /// The agent failed (returned a fault or panicked).
    Fault(String),
}

/// Why a player forfeited a match.
#[derive(Clone, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum ForfeitCause {
    /// The agent proposed a position that is not a legal option.
    #[display("illegal move to {proposed}")]
    IllegalMove {
        /// Rendering of the proposed position.
        proposed: String,
    },
    /// The agent failed while producing or validating a move.
    #[display("fault: {_0}")]
    Fault(String),
}

/// Result of one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The mover's position was replaced by a legal option.
    Moved {
        /// Whether the referee picked the move after the agent ran out of attempts.
        fallback: bool,
    },
    /// The mover forfeited; the match is over.
    Forfeit(ForfeitCause),
    /// The mover had no options; the match is over.
    NoOptions,
}

/// How a finished match ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEnd {
    /// `stuck` had no legal option on their turn.
    NoOptions {
        /// The player who could not move.
        stuck: PlayerId,
    },
    /// `player` forfeited.
    Forfeit {
        /// The forfeiting player.
        player: PlayerId,
        /// What they did wrong.
        cause: ForfeitCause,
    },
}

/// Where a referee is in the match state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchPhase {
    /// No match has been started.
    NotStarted,
    /// Waiting on the given player's move.
    AwaitingMove(PlayerId),
    /// The match is over.
    Terminal {
        /// The winner.
        winner: PlayerId,
    },
}

/// Summary of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// The winning player.
    pub winner: PlayerId,
    /// How the match ended.
    pub end: MatchEnd,
    /// Who moved first.
    pub starting_player: PlayerId,
    /// Number of completed moves (fallback moves included).
    pub turns: u32,
    /// "No move available" answers per player.
    pub failed_attempts: PlayerMap<u32>,
    /// Moves the referee chose on a player's behalf.
    pub fallback_moves: PlayerMap<u32>,
}

impl MatchOutcome {
    /// The player who forfeited, if the match ended that way.
    #[must_use]
    pub fn forfeited_by(&self) -> Option<PlayerId> {
        match self.end {
            MatchEnd::Forfeit { player, .. } => Some(player),
            MatchEnd::NoOptions { .. } => None,
        }
    }
}

/// Transient state of one match.
///
/// Created when a match starts; position and current player change every
/// turn. Kept after the match ends so the final position can be inspected.
#[derive(Clone, Debug)]
pub(crate) struct MatchState<G> {
    pub position: G,
    pub current: PlayerId,
    pub starting_player: PlayerId,
    pub turns: u32,
    pub failed_attempts: PlayerMap<u32>,
    pub fallback_moves: PlayerMap<u32>,
    pub rng: GameRng,
    pub end: Option<(PlayerId, MatchEnd)>,
}

impl<G: GamePosition> MatchState<G> {
    pub fn new(position: G, starting_player: PlayerId, rng: GameRng) -> Self {
        Self {
            position,
            current: starting_player,
            starting_player,
            turns: 0,
            failed_attempts: PlayerMap::with_default(),
            fallback_moves: PlayerMap::with_default(),
            rng,
            end: None,
        }
    }

    /// Replace the position with `next` and hand the move to the opponent.
    pub fn advance(&mut self, next: G) {
        self.position = next;
        self.current = self.current.other();
        self.turns += 1;
    }

    pub fn finish(&mut self, winner: PlayerId, end: MatchEnd) {
        self.end = Some((winner, end));
    }

    pub fn phase(&self) -> MatchPhase {
        match self.end {
            Some((winner, _)) => MatchPhase::Terminal { winner },
            None => MatchPhase::AwaitingMove(self.current),
        }
    }

    /// The outcome, once the match has ended.
    pub fn outcome(&self) -> Option<MatchOutcome> {
        let (winner, end) = self.end.clone()?;
        Some(MatchOutcome {
            winner,
            end,
            starting_player: self.starting_player,
            turns: self.turns,
            failed_attempts: self.failed_attempts,
            fallback_moves: self.fallback_moves,
        })
    }
}
