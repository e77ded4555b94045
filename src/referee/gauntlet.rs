//! Tournament driver ("gauntlet").
//!
//! Runs the same two agents against each other many times, alternating
//! who starts, and reports each side's win fraction and forfeits.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::{MatchConfig, PlayerId, PlayerMap};
use crate::rules::GamePosition;

use super::engine::Referee;

/// Aggregate result of a tournament.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentResult {
    /// Number of matches played.
    pub games: u32,
    /// Matches won per player.
    pub wins: PlayerMap<u32>,
    /// Matches forfeited per player.
    pub forfeits: PlayerMap<u32>,
}

impl TournamentResult {
    /// Fraction of matches won by `player`. Zero when no games were played.
    #[must_use]
    pub fn win_fraction(&self, player: PlayerId) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        f64::from(self.wins[player]) / f64::from(self.games)
    }

    /// Fraction of matches won by Left (player 0).
    #[must_use]
    pub fn left_win_fraction(&self) -> f64 {
        self.win_fraction(PlayerId::Left)
    }

    /// Fraction of matches won by Right (player 1).
    #[must_use]
    pub fn right_win_fraction(&self) -> f64 {
        self.win_fraction(PlayerId::Right)
    }

    /// Forfeits by both players combined.
    #[must_use]
    pub fn total_forfeits(&self) -> u32 {
        self.forfeits[PlayerId::Left] + self.forfeits[PlayerId::Right]
    }
}

impl std::fmt::Display for TournamentResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Games played: {}", self.games)?;
        for player in PlayerId::ALL {
            writeln!(
                f,
                "    {}: {} ({:.1}%)  forfeits: {}",
                player,
                self.wins[player],
                self.win_fraction(player) * 100.0,
                self.forfeits[player]
            )?;
        }
        Ok(())
    }
}

impl<G: GamePosition> Referee<G> {
    /// Run `games` matches without per-match narration.
    pub fn run_tournament(&mut self, games: u32) -> TournamentResult {
        self.run_tournament_verbose(games, false)
    }

    /// Run `games` matches, Left starting the even-numbered ones and Right
    /// the odd-numbered ones.
    ///
    /// Pauses are disabled for the run and `verbose` controls per-match
    /// narration. Afterwards the previous delay is restored and narration
    /// is switched back to the default (on), whatever it was before.
    /// Forfeit counts cover this run only.
    pub fn run_tournament_verbose(&mut self, games: u32, verbose: bool) -> TournamentResult {
        let saved_delay = self.delay();

        info!(
            games,
            left = %self.player_name(PlayerId::Left),
            right = %self.player_name(PlayerId::Right),
            "Beginning the competition!"
        );
        if games == 0 {
            warn!("tournament with no games; win fractions are reported as zero");
        }

        self.set_delay(Duration::ZERO);
        self.set_verbose(verbose);

        let mut result = TournamentResult {
            games,
            wins: PlayerMap::with_default(),
            forfeits: PlayerMap::with_default(),
        };
        for game_index in 0..games {
            let starting_player = if game_index % 2 == 0 {
                PlayerId::Left
            } else {
                PlayerId::Right
            };
            let outcome = self.play_match(starting_player);
            if let Some(forfeiter) = outcome.forfeited_by() {
                result.forfeits[forfeiter] += 1;
            }
            result.wins[outcome.winner] += 1;
        }

        self.set_delay(saved_delay);
        self.set_verbose(MatchConfig::default().verbose);

        for player in PlayerId::ALL {
            info!(
                player = %self.player_name(player),
                role = %self.player_role(player),
                wins = result.wins[player],
                forfeits = result.forfeits[player],
                "Competition complete!"
            );
        }
        result
    }
}
