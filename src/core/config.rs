//! Match configuration.
//!
//! A `MatchConfig` is set on a referee and applies to every match that
//! referee runs until it is changed.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Referee configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Pause before each turn and after each failed attempt, in milliseconds.
    /// Pacing only; zero disables it.
    pub delay_ms: u64,

    /// Number of times an agent may answer "no move available" before the
    /// referee picks a random legal move for it.
    pub max_attempts: u32,

    /// Whether match narration is logged.
    pub verbose: bool,

    /// Seed for the referee's random stream (starting player, fallback
    /// moves, randomized starting positions).
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            delay_ms: 3000,
            max_attempts: 1,
            verbose: true,
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// A config suited to batch runs and tests: no delay, no narration.
    pub fn quiet() -> Self {
        Self::default().with_delay(Duration::ZERO).with_verbose(false)
    }

    /// Set the inter-turn delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the number of move attempts per turn.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Turn narration on or off.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The inter-turn delay as a `Duration`.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
