//! Errors an agent can report instead of a move.
//!
//! Neither variant ever escapes the referee: a `NoMoveAvailable` answer is
//! retried and eventually replaced by a random legal move, a `Fault` ends
//! the match as a forfeit.

use derive_more::{Display, Error};

/// Reason an agent could not supply a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum AgentError {
    /// The agent found nothing to play this attempt. Retryable.
    #[display("no move available")]
    NoMoveAvailable,

    /// The agent failed for a reason unrelated to the game.
    #[display("agent fault: {_0}")]
    Fault(#[error(not(source))] String),
}

impl AgentError {
    /// Wrap any displayable failure as a fault.
    pub fn fault(message: impl std::fmt::Display) -> Self {
        Self::Fault(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(AgentError::NoMoveAvailable.to_string(), "no move available");
        assert_eq!(
            AgentError::fault("index 4 out of range").to_string(),
            "agent fault: index 4 out of range"
        );
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(AgentError::NoMoveAvailable);
        assert!(err.source().is_none());
    }
}
