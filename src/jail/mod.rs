//! Jail bookkeeping.
//!
//! The `Jailer` only records who is imprisoned and how many failed doubles
//! attempts they have left. Deciding when to imprison or release belongs to
//! the turn engine.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::{RulesError, RulesResult};
use crate::core::player::PlayerId;

/// Registry of imprisoned players.
///
/// A player is imprisoned iff the registry holds a sentence for them.
/// Asking about the sentence of a free player is a contract violation and
/// returns `RulesError::NotImprisoned`.
pub trait Jailer {
    /// Start a full sentence.
    fn imprison(&mut self, player: PlayerId) -> RulesResult<()>;

    /// Remove the player from the registry.
    fn release(&mut self, player: PlayerId) -> RulesResult<()>;

    fn is_imprisoned(&self, player: PlayerId) -> bool;

    fn remaining_sentence(&self, player: PlayerId) -> RulesResult<u8>;

    /// Decrease the sentence by one and return what remains.
    fn decrement_sentence(&mut self, player: PlayerId) -> RulesResult<u8>;
}

/// In-memory `Jailer`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JailRegistry {
    sentence: u8,
    prisoners: FxHashMap<PlayerId, u8>,
}

impl JailRegistry {
    /// Create a registry handing out sentences of `sentence` turns.
    #[must_use]
    pub fn new(sentence: u8) -> Self {
        assert!(sentence > 0, "Jail sentence must be at least 1 turn");
        Self {
            sentence,
            prisoners: FxHashMap::default(),
        }
    }

    /// Number of imprisoned players.
    #[must_use]
    pub fn prisoner_count(&self) -> usize {
        self.prisoners.len()
    }
}

impl Default for JailRegistry {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Jailer for JailRegistry {
    fn imprison(&mut self, player: PlayerId) -> RulesResult<()> {
        if self.prisoners.contains_key(&player) {
            return Err(RulesError::AlreadyImprisoned(player));
        }
        self.prisoners.insert(player, self.sentence);
        Ok(())
    }

    fn release(&mut self, player: PlayerId) -> RulesResult<()> {
        self.prisoners
            .remove(&player)
            .map(|_| ())
            .ok_or(RulesError::NotImprisoned(player))
    }

    fn is_imprisoned(&self, player: PlayerId) -> bool {
        self.prisoners.contains_key(&player)
    }

    fn remaining_sentence(&self, player: PlayerId) -> RulesResult<u8> {
        self.prisoners
            .get(&player)
            .copied()
            .ok_or(RulesError::NotImprisoned(player))
    }

    fn decrement_sentence(&mut self, player: PlayerId) -> RulesResult<u8> {
        let sentence = self
            .prisoners
            .get_mut(&player)
            .ok_or(RulesError::NotImprisoned(player))?;

        if *sentence == 0 {
            return Err(RulesError::SentenceServed(player));
        }
        *sentence -= 1;
        Ok(*sentence)
    }
}
