//! # rust-monopoly
//!
//! Turn and jail rules engine for a property-trading board game.
//!
//! ## Design Principles
//!
//! 1. **Engine owns the branching**: `TurnEngine` decides what a roll means
//!    (doubles streaks, jail, card draws, purchase or rent). Collaborators
//!    only carry out side effects.
//!
//! 2. **Injected collaborators**: dice, jail registry, bank, movement and
//!    decks are traits borrowed by the engine, so every rule can be driven
//!    with scripted rolls and recording doubles.
//!
//! 3. **Errors propagate**: insufficient funds and contract violations end
//!    the turn and surface as `RulesError`. The engine never retries.
//!
//! ## Modules
//!
//! - `core`: players, RNG, dice, rule configuration, errors
//! - `board`: spaces, groups, locations, the classic layout
//! - `cards`: cards, decks, the card-handling collaborator
//! - `jail`: the jail registry
//! - `bank`: balances and charges
//! - `realty`: ownership, purchases, rent schedules
//! - `movement`: movement, landing tasks, purchase/rent dispatch
//! - `rules`: the turn engine and jail protocol
//! - `games`: the classic table wiring everything together

pub mod core;
pub mod board;
pub mod cards;
pub mod jail;
pub mod bank;
pub mod realty;
pub mod movement;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Dice, GameRng, JailStrategy, Player, PlayerId, PlayerMap, Roll,
    RulesConfig, RulesError, RulesResult, StandardDice,
};

pub use crate::board::{Board, LandingTask, Location, PropertyGroup, Space};

pub use crate::cards::{Card, CardDecks, CardHandler, CardId, CardKind, CardTask, Deck, DeckKind};

pub use crate::jail::{JailRegistry, Jailer};
pub use crate::bank::{Bank, Banker};
pub use crate::realty::Realtor;
pub use crate::movement::{BoardMovement, MovementHandler};
pub use crate::rules::{JailEscape, TurnEngine};
pub use crate::games::classic::{ClassicGame, ClassicGameBuilder, TurnReport};
