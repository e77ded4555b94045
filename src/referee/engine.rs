//! The match referee.
//!
//! Drives the turn loop between two agents, validates every proposal
//! against the mover's legal options, resolves forfeits, and falls back
//! to a random legal move when an agent keeps saying it has nothing.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::agents::PlayerAgent;
use crate::core::{AgentError, GameRng, MatchConfig, PlayerId, PlayerMap};
use crate::rules::{FixedPosition, GamePosition, PositionFactory};

use super::pacing::{Pacer, PacerHandle, Pause};
use super::turn::{Attempt, ForfeitCause, MatchEnd, MatchOutcome, MatchPhase, MatchState, TurnOutcome};

/// Log match narration when the referee is verbose.
pub(crate) fn announce(verbose: bool, message: std::fmt::Arguments<'_>) {
    if verbose {
        info!("{}", message);
    }
}

/// Referee for matches between two agents.
///
/// One referee runs one match at a time. To run matches concurrently,
/// give each its own referee: the match state and random stream are not
/// shared between instances.
pub struct Referee<G: GamePosition> {
    agents: PlayerMap<Box<dyn PlayerAgent<G>>>,
    factory: Box<dyn PositionFactory<G>>,
    config: MatchConfig,
    rng: GameRng,
    pacer: Pacer,
    state: Option<MatchState<G>>,
}

impl<G: GamePosition> Referee<G> {
    /// Create a referee whose matches start from positions built by `factory`.
    pub fn new(
        left: impl PlayerAgent<G> + 'static,
        right: impl PlayerAgent<G> + 'static,
        factory: impl PositionFactory<G> + 'static,
    ) -> Self {
        let config = MatchConfig::default();
        let left: Box<dyn PlayerAgent<G>> = Box::new(left);
        let right: Box<dyn PlayerAgent<G>> = Box::new(right);
        Self {
            agents: PlayerMap::from_pair(left, right),
            factory: Box::new(factory),
            rng: GameRng::new(config.seed),
            config,
            pacer: Pacer::default(),
            state: None,
        }
    }

    /// Create a referee whose matches all start from `position`.
    pub fn with_initial_position(
        left: impl PlayerAgent<G> + 'static,
        right: impl PlayerAgent<G> + 'static,
        position: G,
    ) -> Self {
        Self::new(left, right, FixedPosition::new(position))
    }

    /// Replace the configuration (builder style). Reseeds the random stream.
    #[must_use]
    pub fn with_config(mut self, config: MatchConfig) -> Self {
        self.set_config(config);
        self
    }

    // === Configuration ===

    /// The current configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Replace the configuration and reseed the random stream from it.
    pub fn set_config(&mut self, config: MatchConfig) {
        self.rng = GameRng::new(config.seed);
        self.config = config;
    }

    /// Set the pause before each turn.
    pub fn set_delay(&mut self, delay: Duration) {
        self.config = self.config.clone().with_delay(delay);
    }

    /// The pause before each turn.
    pub fn delay(&self) -> Duration {
        self.config.delay()
    }

    /// Set how many "no move available" answers an agent gets per turn
    /// before the referee picks a random move for it.
    pub fn set_attempts(&mut self, attempts: u32) {
        self.config.max_attempts = attempts;
    }

    /// Move attempts per turn.
    pub fn attempts(&self) -> u32 {
        self.config.max_attempts
    }

    /// Turn match narration on or off.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.config.verbose = verbose;
    }

    /// Whether match narration is on.
    pub fn is_verbose(&self) -> bool {
        self.config.verbose
    }

    /// Handle for interrupting pauses from another thread.
    pub fn pacer_handle(&self) -> PacerHandle {
        self.pacer.handle()
    }

    // === Accessors ===

    /// Display name of a player's agent.
    pub fn player_name(&self, player: PlayerId) -> String {
        self.agents[player].name()
    }

    /// Role of a player in the current (or last) match's ruleset.
    ///
    /// Before any match has started, the canonical Left/Right name.
    pub fn player_role(&self, player: PlayerId) -> String {
        match &self.state {
            Some(state) => state.position.role_name(player),
            None => player.canonical_name().to_string(),
        }
    }

    /// The player to move, if a match has been started.
    pub fn current_player(&self) -> Option<PlayerId> {
        self.state.as_ref().map(|state| state.current)
    }

    /// Display name of the player to move.
    pub fn current_player_name(&self) -> Option<String> {
        self.current_player().map(|player| self.player_name(player))
    }

    /// Role of the player to move.
    pub fn current_player_role(&self) -> Option<String> {
        self.current_player().map(|player| self.player_role(player))
    }

    /// The current (or final) position of the latest match.
    pub fn position(&self) -> Option<&G> {
        self.state.as_ref().map(|state| &state.position)
    }

    /// Where the latest match is in its life cycle.
    pub fn phase(&self) -> MatchPhase {
        self.state
            .as_ref()
            .map_or(MatchPhase::NotStarted, |state| state.phase())
    }

    /// Outcome of the latest match, once it has ended.
    pub fn last_outcome(&self) -> Option<MatchOutcome> {
        self.state.as_ref().and_then(|state| state.outcome())
    }

    // === Matches ===

    /// Play a match with a randomly chosen starting player. Returns the winner.
    pub fn run_match(&mut self) -> PlayerId {
        let starting_player = if self.rng.gen_bool(0.5) {
            PlayerId::Left
        } else {
            PlayerId::Right
        };
        self.run_match_from(starting_player)
    }

    /// Play a match where `starting_player` moves first. Returns the winner.
    pub fn run_match_from(&mut self, starting_player: PlayerId) -> PlayerId {
        self.play_match(starting_player).winner
    }

    /// Play a match to completion and report how it went.
    pub fn play_match(&mut self, starting_player: PlayerId) -> MatchOutcome {
        self.start_match(starting_player);
        loop {
            self.step();
            if let Some(outcome) = self.last_outcome() {
                return outcome;
            }
        }
    }

    /// Begin a new match from a fresh starting position, discarding any
    /// previous match state.
    pub fn start_match(&mut self, starting_player: PlayerId) {
        let mut match_rng = self.rng.fork();
        let position = self.factory.new_position(&mut match_rng);
        let state = MatchState::new(position, starting_player, match_rng);

        let verbose = self.config.verbose;
        debug!(starting = %starting_player, seed = state.rng.seed(), "starting match");
        announce(verbose, format_args!("Let's get ready to rumble!"));
        for player in PlayerId::ALL {
            announce(
                verbose,
                format_args!(
                    "In this corner ... playing as {} ... {}!",
                    state.position.role_name(player),
                    self.player_name(player)
                ),
            );
        }
        announce(verbose, format_args!("Starting position:\n{}", state.position));
        announce(
            verbose,
            format_args!("{} will start us off.  Begin!", self.player_name(starting_player)),
        );

        self.state = Some(state);
    }

    /// Play one turn of the match in progress and report the new phase.
    ///
    /// Does nothing if no match was started or the match is already over.
    pub fn step(&mut self) -> MatchPhase {
        let Some(mut state) = self.state.take() else {
            return MatchPhase::NotStarted;
        };

        if state.end.is_none() {
            self.play_turn(&mut state);
        }

        let phase = state.phase();
        self.state = Some(state);
        phase
    }

    fn play_turn(&mut self, state: &mut MatchState<G>) {
        let mover = state.current;
        let verbose = self.config.verbose;

        let outcome = if state.position.player_has_option(mover) {
            self.pause();
            self.request_turn(state)
        } else {
            TurnOutcome::NoOptions
        };

        match outcome {
            TurnOutcome::Moved { fallback } => {
                debug!(player = %mover, fallback, turn = state.turns, "move applied");
            }
            TurnOutcome::NoOptions => {
                let winner = mover.other();
                announce(
                    verbose,
                    format_args!(
                        "There are no options for {}!  {} wins!\nCongratulations to {}!",
                        self.player_name(mover),
                        self.player_name(winner),
                        self.player_name(winner)
                    ),
                );
                state.finish(winner, MatchEnd::NoOptions { stuck: mover });
            }
            TurnOutcome::Forfeit(cause) => {
                warn!(player = %mover, %cause, turn = state.turns, "forfeit");
                announce(
                    verbose,
                    format_args!(
                        "A problem occurred ({}) while {} was taking their turn.  The other player wins by default!",
                        cause,
                        self.player_name(mover)
                    ),
                );
                state.finish(mover.other(), MatchEnd::Forfeit { player: mover, cause });
            }
        }
    }

    /// Obtain and apply one move for the player to move.
    ///
    /// Retries only on "no move available"; an illegal proposal or a fault
    /// ends the turn as a forfeit. When every attempt is used up, a
    /// uniformly random legal option is played instead.
    fn request_turn(&mut self, state: &mut MatchState<G>) -> TurnOutcome {
        let mover = state.current;
        let verbose = self.config.verbose;
        let max_attempts = self.config.max_attempts;

        for attempt in 1..=max_attempts {
            match self.attempt_move(&state.position, mover) {
                Attempt::Legal(next) => {
                    self.apply_move(state, next);
                    return TurnOutcome::Moved { fallback: false };
                }
                Attempt::NoMoveSignal => {
                    state.failed_attempts[mover] += 1;
                    let remaining = max_attempts - attempt;
                    debug!(player = %mover, attempt, remaining, "agent reported no move");
                    announce(
                        verbose,
                        format_args!(
                            "{} says there is no option for {} from {}, but that can't be right!  {} tries left.",
                            self.player_name(mover),
                            state.position.role_name(mover),
                            state.position,
                            remaining
                        ),
                    );
                    if remaining > 0 {
                        self.pause();
                    }
                }
                Attempt::IllegalMove(proposed) => {
                    announce(
                        verbose,
                        format_args!(
                            "{} ({}) tried to move from\n{}\n  to  \n{}\nwhich is not a legal option.  They forfeit the game!",
                            self.player_name(mover),
                            state.position.role_name(mover),
                            state.position,
                            proposed
                        ),
                    );
                    return TurnOutcome::Forfeit(ForfeitCause::IllegalMove {
                        proposed: proposed.to_string(),
                    });
                }
                Attempt::Fault(message) => {
                    return TurnOutcome::Forfeit(ForfeitCause::Fault(message));
                }
            }
        }

        let options = state.position.options(mover);
        let Some(fallback) = state.rng.choose(&options).cloned() else {
            return TurnOutcome::NoOptions;
        };
        debug!(player = %mover, options = options.len(), "playing fallback move");
        announce(
            verbose,
            format_args!("Choosing a random move for {} instead!", self.player_name(mover)),
        );
        state.fallback_moves[mover] += 1;
        self.apply_move(state, fallback);
        TurnOutcome::Moved { fallback: true }
    }

    /// Ask `player`'s agent once and classify the answer.
    ///
    /// Panics raised by the agent, or by option enumeration while the
    /// proposal is checked, count as faults.
    fn attempt_move(&mut self, position: &G, player: PlayerId) -> Attempt<G> {
        let agent = &mut self.agents[player];
        let classified = panic::catch_unwind(AssertUnwindSafe(|| {
            match agent.choose_move(position, player) {
                Ok(candidate) if position.has_option(player, &candidate) => Attempt::Legal(candidate),
                Ok(candidate) => Attempt::IllegalMove(candidate),
                Err(AgentError::NoMoveAvailable) => Attempt::NoMoveSignal,
                Err(AgentError::Fault(message)) => Attempt::Fault(message),
            }
        }));

        classified.unwrap_or_else(|payload| Attempt::Fault(panic_message(payload.as_ref())))
    }

    fn apply_move(&self, state: &mut MatchState<G>, next: G) {
        let mover = state.current;
        state.advance(next);
        announce(
            self.config.verbose,
            format_args!(
                "{} ({}) moved to\n{}",
                self.player_name(mover),
                state.position.role_name(mover),
                state.position
            ),
        );
    }

    fn pause(&self) {
        if self.pacer.pause(self.config.delay()) == Pause::Interrupted {
            debug!("pause interrupted");
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {}", message)
    } else {
        "panicked".to_string()
    }
}

impl<G: GamePosition> std::fmt::Debug for Referee<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Referee")
            .field("left", &self.player_name(PlayerId::Left))
            .field("right", &self.player_name(PlayerId::Right))
            .field("config", &self.config)
            .field("phase", &self.phase())
            .finish()
    }
}
