//! Seeded randomness for dice and deck shuffles.
//!
//! A table is reproducible from one `u64` seed. Dice and decks each draw
//! from their own named stream, so reshuffling a deck never changes the
//! dice that follow.
//!
//! ```
//! use rust_monopoly::core::GameRng;
//!
//! let table = GameRng::new(42);
//! let mut dice = table.for_context("dice");
//! let mut again = table.for_context("dice");
//!
//! assert_eq!(dice.roll_die(6), again.roll_die(6));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// ChaCha8 stream that remembers the seed it was built from.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A fresh stream derived from this seed and a context name.
    ///
    /// Depends only on the seed, never on how much of this stream was used.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        (self.seed, context).hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// One die with `sides` faces: a value in `1..=sides`.
    pub fn roll_die(&mut self, sides: u8) -> u8 {
        self.stream.gen_range(1..=sides)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.stream);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_faces() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);

        let faces_a: Vec<_> = (0..100).map(|_| a.roll_die(6)).collect();
        let faces_b: Vec<_> = (0..100).map(|_| b.roll_die(6)).collect();
        assert_eq!(faces_a, faces_b);
    }

    #[test]
    fn test_roll_die_range() {
        let mut rng = GameRng::new(7);
        assert!((0..500).map(|_| rng.roll_die(6)).all(|face| (1..=6).contains(&face)));
    }

    #[test]
    fn test_contexts_are_independent() {
        let table = GameRng::new(42);
        let mut dice = table.for_context("dice");
        let mut decks = table.for_context("shuffle");

        let dice_faces: Vec<_> = (0..20).map(|_| dice.roll_die(100)).collect();
        let deck_faces: Vec<_> = (0..20).map(|_| decks.roll_die(100)).collect();
        assert_ne!(dice_faces, deck_faces);
    }

    #[test]
    fn test_context_ignores_stream_position() {
        let mut used = GameRng::new(9);
        for _ in 0..10 {
            used.roll_die(6);
        }
        let fresh = GameRng::new(9);

        assert_eq!(used.for_context("dice").seed(), fresh.for_context("dice").seed());
    }

    #[test]
    fn test_shuffle_keeps_items() {
        let mut rng = GameRng::new(42);
        let mut cards: Vec<u32> = (1..=16).collect();

        rng.shuffle(&mut cards);

        assert_ne!(cards, (1..=16).collect::<Vec<_>>());
        cards.sort_unstable();
        assert_eq!(cards, (1..=16).collect::<Vec<_>>());
    }
}
