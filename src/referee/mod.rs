//! Match referee and tournament driver.
//!
//! ## Turn protocol
//!
//! On each turn the referee pauses for the configured delay, then asks the
//! mover's agent for a move up to `max_attempts` times:
//!
//! - **Legal option**: applied; the turn ends
//! - **No move available**: costs one attempt
//! - **Illegal proposal** or **fault**: the mover forfeits; the match ends
//!
//! If every attempt is spent on "no move available", the referee plays a
//! uniformly random legal option for the mover. A player with no legal
//! options on their turn loses.
//!
//! ## Usage
//!
//! ```
//! use combinatorial_referee::agents::RandomAgent;
//! use combinatorial_referee::core::MatchConfig;
//! use combinatorial_referee::games::rotisserie::RotisserieNim;
//! use combinatorial_referee::referee::Referee;
//!
//! let mut referee = Referee::with_initial_position(
//!     RandomAgent::new(1),
//!     RandomAgent::new(2),
//!     RotisserieNim::new(&[3, 5, 7]),
//! )
//! .with_config(MatchConfig::quiet());
//!
//! let result = referee.run_tournament(10);
//! assert_eq!(result.total_forfeits(), 0);
//! assert!((result.left_win_fraction() + result.right_win_fraction() - 1.0).abs() < 1e-9);
//! ```

pub mod engine;
pub mod gauntlet;
pub mod pacing;
pub mod turn;

pub use engine::Referee;
pub use gauntlet::TournamentResult;
pub use pacing::{PacerHandle, Pause};
pub use turn::{Attempt, ForfeitCause, MatchEnd, MatchOutcome, MatchPhase, TurnOutcome};
