//! Errors surfaced by the engine and its collaborators.
//!
//! The engine never handles these itself: every failure ends the current
//! turn invocation and is returned to the caller.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::DeckKind;

/// Failure of a rules operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    /// A charge exceeded the player's balance. Bankruptcy is the caller's call.
    #[error("{player} cannot pay {required} (balance {available})")]
    InsufficientFunds {
        player: PlayerId,
        required: u32,
        available: u32,
    },

    #[error("{0} is already imprisoned")]
    AlreadyImprisoned(PlayerId),

    #[error("{0} is not imprisoned")]
    NotImprisoned(PlayerId),

    /// The sentence is already 0 and cannot be decremented further.
    #[error("{0} has already served their sentence")]
    SentenceServed(PlayerId),

    #[error("the {0} deck has no cards left")]
    EmptyDeck(DeckKind),

    #[error("space {0} is not on the board")]
    UnknownSpace(u8),
}

/// Result alias for rules operations.
pub type RulesResult<T> = Result<T, RulesError>;
