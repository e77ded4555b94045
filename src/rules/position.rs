//! The game position contract.

use std::fmt::{Debug, Display};

use crate::core::PlayerId;

/// A position of a two-player combinatorial game.
///
/// The referee works on owned clones and never mutates a position it was
/// given. `PartialEq` must compare represented state (identity), never
/// game value: two positions that are strategically equivalent but
/// represented differently are *not* equal.
///
/// ## Implementation Notes
///
/// - `options`: return every legal successor; empty means the player is stuck
/// - `Clone`: must be independent of the original
/// - Repeated moves must eventually reach a position with no options
pub trait GamePosition: Clone + PartialEq + Display + Debug + Send + 'static {
    /// Name of the ruleset.
    fn ruleset_name() -> &'static str;

    /// All positions `player` may move to from here.
    fn options(&self, player: PlayerId) -> Vec<Self>;

    /// Role name of a player in this ruleset (e.g. "Blue" or "Vertical").
    ///
    /// Defaults to the canonical Left/Right names.
    fn role_name(&self, player: PlayerId) -> String {
        player.canonical_name().to_string()
    }

    // === Convenience Methods ===

    /// Whether `candidate` is one of `player`'s options.
    fn has_option(&self, player: PlayerId, candidate: &Self) -> bool {
        self.options(player).iter().any(|option| option == candidate)
    }

    /// Whether `player` can move at all.
    fn player_has_option(&self, player: PlayerId) -> bool {
        !self.options(player).is_empty()
    }
}
