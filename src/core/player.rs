//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Combinatorial games always have exactly two players. `Left` (index 0)
//! and `Right` (index 1) are the canonical names; rulesets may give them
//! other role names (Blue/Red, Vertical/Horizontal, ...).
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players of a combinatorial game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    /// Player 0.
    Left,
    /// Player 1.
    Right,
}

impl PlayerId {
    /// Both players, in index order.
    pub const ALL: [PlayerId; 2] = [PlayerId::Left, PlayerId::Right];

    /// Get the raw player index (0 for Left, 1 for Right).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::Left => 0,
            PlayerId::Right => 1,
        }
    }

    /// The opponent of this player.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerId::Left => PlayerId::Right,
            PlayerId::Right => PlayerId::Left,
        }
    }

    /// Canonical name: "Left" or "Right".
    #[must_use]
    pub const fn canonical_name(self) -> &'static str {
        match self {
            PlayerId::Left => "Left",
            PlayerId::Right => "Right",
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Per-player data storage, one slot per player.
///
/// ## Example
///
/// ```
/// use combinatorial_referee::core::{PlayerId, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::with_default();
/// wins[PlayerId::Right] += 1;
///
/// assert_eq!(wins[PlayerId::Left], 0);
/// assert_eq!(wins[PlayerId::Right], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::Left), factory(PlayerId::Right)],
        }
    }

    /// Create a new PlayerMap from Left's and Right's values.
    pub fn from_pair(left: T, right: T) -> Self {
        Self { data: [left, right] }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::Left.index(), 0);
        assert_eq!(PlayerId::Right.index(), 1);
        assert_eq!(format!("{}", PlayerId::Left), "Left");
        assert_eq!(format!("{}", PlayerId::Right), "Right");
    }

    #[test]
    fn test_other_is_an_involution() {
        for player in PlayerId::ALL {
            assert_ne!(player.other(), player);
            assert_eq!(player.other().other(), player);
        }
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);

        assert_eq!(map[PlayerId::Left], 0);
        assert_eq!(map[PlayerId::Right], 10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_default();

        map[PlayerId::Left] = 10;
        map[PlayerId::Right] += 20;

        assert_eq!(map, PlayerMap::from_pair(10, 20));
    }

    #[test]
    fn test_player_map_serialization() {
        let map = PlayerMap::from_pair(3u32, 7u32);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
