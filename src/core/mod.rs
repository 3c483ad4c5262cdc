//! Core types: players, RNG, dice, rule configuration and errors.
//!
//! Everything here is plain data or a thin RNG wrapper. The rules
//! themselves live in `rules`.

pub mod player;
pub mod rng;
pub mod dice;
pub mod config;
pub mod error;

pub use player::{JailStrategy, Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use dice::{Dice, Roll, StandardDice};
pub use config::RulesConfig;
pub use error::{RulesError, RulesResult};
