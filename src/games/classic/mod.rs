//! Classic table: the standard board and decks wired to the turn engine.
//!
//! - Every player starts on Go with the starting balance
//! - Chance and Community Chest are shuffled from the table seed
//! - A turn keeps rolling while the player's doubles streak is live
//! - Purchase policy: buy whenever affordable
//!
//! Supports 2-8 players.

mod game;

pub use game::{ClassicGame, ClassicGameBuilder, TurnReport};
