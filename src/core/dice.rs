//! Dice rolls.
//!
//! The turn engine only needs a `Roll`: how far to move and whether the two
//! dice matched. `StandardDice` produces rolls from a seeded `GameRng`;
//! tests substitute their own `Dice` to script outcomes.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Faces shown by a pair of six-sided dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roll {
    pub first: u8,
    pub second: u8,
}

impl Roll {
    /// Create a roll from two faces.
    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// Total distance moved. Always in `2..=12` for two d6.
    #[must_use]
    pub const fn distance(self) -> u8 {
        self.first + self.second
    }

    /// Whether both dice show the same value.
    #[must_use]
    pub const fn is_doubles(self) -> bool {
        self.first == self.second
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+{}", self.first, self.second)
    }
}

/// Source of dice rolls.
pub trait Dice {
    /// Roll the dice.
    fn roll(&mut self) -> Roll;
}

/// Two fair six-sided dice.
#[derive(Clone, Debug)]
pub struct StandardDice {
    rng: GameRng,
}

impl StandardDice {
    /// Number of faces on each die.
    pub const SIDES: u8 = 6;

    /// Create dice rolling from the `"dice"` stream of a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed).for_context("dice"))
    }

    /// Create dice over an existing RNG stream.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Dice for StandardDice {
    fn roll(&mut self) -> Roll {
        let first = self.rng.roll_die(Self::SIDES);
        let second = self.rng.roll_die(Self::SIDES);
        Roll::new(first, second)
    }
}
