//! Starting-position factories.

use crate::core::GameRng;

use super::GamePosition;

/// Produces a fresh starting position for each match.
///
/// The referee passes in its per-match random stream so randomized
/// factories stay reproducible under a fixed seed. Returned positions
/// must be independent of every previously returned one.
pub trait PositionFactory<G: GamePosition>: Send {
    /// Build a new starting position.
    fn new_position(&mut self, rng: &mut GameRng) -> G;
}

impl<G, F> PositionFactory<G> for F
where
    G: GamePosition,
    F: FnMut(&mut GameRng) -> G + Send,
{
    fn new_position(&mut self, rng: &mut GameRng) -> G {
        self(rng)
    }
}

/// A factory that always starts from the same position.
#[derive(Clone, Debug)]
pub struct FixedPosition<G> {
    position: G,
}

impl<G: GamePosition> FixedPosition<G> {
    /// Wrap a starting position.
    pub fn new(position: G) -> Self {
        Self { position }
    }

    /// The position every match starts from.
    pub fn position(&self) -> &G {
        &self.position
    }
}

impl<G: GamePosition> PositionFactory<G> for FixedPosition<G> {
    fn new_position(&mut self, _rng: &mut GameRng) -> G {
        self.position.clone()
    }
}
