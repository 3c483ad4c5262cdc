//! Card system: cards, decks and the card-handling collaborator.
//!
//! ## Key Types
//!
//! - `Card`: ordered `CardTask`s plus a `CardKind` marker
//! - `Deck`: draw pile and discard pile for one `DeckKind`
//! - `CardHandler`: what the turn engine needs (draw, discard)
//! - `CardDecks`: the Chance and Community Chest decks of a table

pub mod card;
pub mod deck;
pub mod catalog;

pub use card::{Card, CardId, CardKind, CardTask, DeckKind};
pub use deck::{CardDecks, CardHandler, Deck};
pub use catalog::{classic_chance, classic_chest};
