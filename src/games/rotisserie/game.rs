//! Rotisserie Nim positions and a random starting-position factory.

use im::Vector;
use tracing::warn;

use crate::core::{GameRng, PlayerId};
use crate::rules::{GamePosition, PositionFactory};

/// A Rotisserie Nim position: a queue of positive pile sizes.
///
/// The front of the queue is the next pile to be played. Piles live in a
/// persistent vector, so cloning a position is O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RotisserieNim {
    piles: Vector<u32>,
}

impl RotisserieNim {
    /// Build a position from pile sizes, front pile first.
    ///
    /// Empty piles are not part of the game and are skipped.
    pub fn new(piles: &[u32]) -> Self {
        let mut queue = Vector::new();
        for &size in piles {
            if size > 0 {
                queue.push_back(size);
            } else {
                warn!(size, "skipping empty pile");
            }
        }
        Self { piles: queue }
    }

    /// Pile sizes, front pile first.
    pub fn piles(&self) -> impl Iterator<Item = u32> + '_ {
        self.piles.iter().copied()
    }

    /// Size of the next pile to be played.
    #[must_use]
    pub fn front(&self) -> Option<u32> {
        self.piles.front().copied()
    }

    /// Total number of sticks across all piles.
    #[must_use]
    pub fn total_sticks(&self) -> u64 {
        self.piles.iter().map(|&size| u64::from(size)).sum()
    }

    /// Number of piles in the queue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.piles.len()
    }

    /// Whether the queue is empty (no one can move).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.piles.is_empty()
    }
}

impl std::fmt::Display for RotisserieNim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "A Rotisserie Nim position: Next Pile -->")?;
        for size in &self.piles {
            write!(f, " {}", size)?;
        }
        write!(f, " <-- Last Pile")
    }
}

impl GamePosition for RotisserieNim {
    fn ruleset_name() -> &'static str {
        "Rotisserie Nim"
    }

    fn options(&self, _player: PlayerId) -> Vec<Self> {
        let mut take_all = self.piles.clone();
        let front = match take_all.pop_front() {
            Some(size) => size,
            None => return Vec::new(),
        };

        let mut options = Vec::with_capacity(front as usize);
        for smaller in 1..front {
            let mut option = take_all.clone();
            option.push_back(smaller);
            options.push(Self { piles: option });
        }
        options.insert(0, Self { piles: take_all });
        options
    }
}

/// Random Rotisserie Nim starting positions.
///
/// Draws `num_piles` sizes uniformly from `0..=max_pile_size`; zero-sized
/// draws are dropped, so positions have at most `num_piles` piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotisserieFactory {
    num_piles: usize,
    max_pile_size: u32,
}

impl RotisserieFactory {
    /// Create a factory for at most `num_piles` piles of at most
    /// `max_pile_size` sticks.
    pub fn new(num_piles: usize, max_pile_size: u32) -> Self {
        Self {
            num_piles,
            max_pile_size,
        }
    }
}

impl PositionFactory<RotisserieNim> for RotisserieFactory {
    fn new_position(&mut self, rng: &mut GameRng) -> RotisserieNim {
        let piles = (0..self.num_piles)
            .map(|_| rng.gen_range_u32(0..=self.max_pile_size))
            .filter(|&size| size > 0)
            .collect();
        RotisserieNim { piles }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let position = RotisserieNim::new(&[3, 5, 7]);
        assert_eq!(
            position.to_string(),
            "A Rotisserie Nim position: Next Pile --> 3 5 7 <-- Last Pile"
        );
        assert_eq!(
            RotisserieNim::new(&[]).to_string(),
            "A Rotisserie Nim position: Next Pile --> <-- Last Pile"
        );
    }

    #[test]
    fn test_new_skips_empty_piles() {
        let position = RotisserieNim::new(&[0, 4, 0, 2]);
        assert_eq!(position.piles().collect::<Vec<_>>(), vec![4, 2]);
    }

    #[test]
    fn test_options_of_single_pile() {
        let position = RotisserieNim::new(&[3]);
        let options = position.options(PlayerId::Left);

        assert_eq!(
            options,
            vec![
                RotisserieNim::new(&[]),
                RotisserieNim::new(&[1]),
                RotisserieNim::new(&[2]),
            ]
        );
    }

    #[test]
    fn test_options_append_to_back() {
        let position = RotisserieNim::new(&[3, 5, 7]);
        let options = position.options(PlayerId::Right);

        assert_eq!(options.len(), 3);
        assert!(options.contains(&RotisserieNim::new(&[5, 7])));
        assert!(options.contains(&RotisserieNim::new(&[5, 7, 1])));
        assert!(options.contains(&RotisserieNim::new(&[5, 7, 2])));
    }

    #[test]
    fn test_options_are_impartial() {
        let position = RotisserieNim::new(&[4, 1]);
        assert_eq!(position.options(PlayerId::Left), position.options(PlayerId::Right));
    }

    #[test]
    fn test_pile_of_one_has_single_option() {
        let position = RotisserieNim::new(&[1, 6]);
        assert_eq!(position.options(PlayerId::Left), vec![RotisserieNim::new(&[6])]);
    }

    #[test]
    fn test_empty_queue_has_no_options() {
        let position = RotisserieNim::new(&[]);
        assert!(position.is_empty());
        assert!(!position.player_has_option(PlayerId::Left));
        assert!(!position.player_has_option(PlayerId::Right));
    }

    #[test]
    fn test_order_matters_for_identity() {
        assert_ne!(RotisserieNim::new(&[1, 2]), RotisserieNim::new(&[2, 1]));
    }

    #[test]
    fn test_every_option_has_fewer_sticks() {
        let position = RotisserieNim::new(&[5, 3, 8]);
        for option in position.options(PlayerId::Left) {
            assert!(option.total_sticks() < position.total_sticks());
        }
    }

    #[test]
    fn test_clone_is_independent() {
        let original = RotisserieNim::new(&[3, 5]);
        let mut copy = original.clone();
        copy.piles.push_back(9);

        assert_eq!(original.len(), 2);
        assert_eq!(copy.len(), 3);
    }

    #[test]
    fn test_factory_respects_bounds() {
        let mut factory = RotisserieFactory::new(4, 6);
        let mut rng = GameRng::new(42);

        for _ in 0..50 {
            let position: RotisserieNim = factory.new_position(&mut rng);
            assert!(position.len() <= 4);
            assert!(position.piles().all(|size| (1..=6).contains(&size)));
        }
    }

    #[test]
    fn test_factory_is_reproducible() {
        let mut factory = RotisserieFactory::new(5, 9);
        let mut rng1 = GameRng::new(3);
        let mut rng2 = GameRng::new(3);

        for _ in 0..10 {
            let first: RotisserieNim = factory.new_position(&mut rng1);
            let second: RotisserieNim = factory.new_position(&mut rng2);
            assert_eq!(first, second);
        }
    }
}
