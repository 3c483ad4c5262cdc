//! The jail protocol.
//!
//! An imprisoned player's turn is spent trying to get out. The player's
//! `JailStrategy` picks one of three escapes:
//!
//! | Escape | When | Effect |
//! |---|---|---|
//! | `SurrenderCard` | `UseCard` and a card is held | discard the card, release, then a full turn on a fresh roll |
//! | `PayFee` | `Pay` | charge the fee and release; the turn ends |
//! | `RollForDoubles` | `RollDoubles`, or `UseCard` without a card | doubles release and move with the same roll; otherwise serve one turn, and a served sentence forces a paid release and a move with the same roll |
//!
//! A served sentence is only checked after a failed roll; there is no
//! forced payment before the strategy runs.

use tracing::{debug, info};

use super::engine::TurnEngine;
use crate::core::error::RulesResult;
use crate::core::player::{JailStrategy, Player};

/// How an imprisoned player leaves jail this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JailEscape {
    SurrenderCard,
    PayFee,
    RollForDoubles,
}

impl JailEscape {
    /// Pick the escape for a strategy. Rolling for doubles is the base rule
    /// and covers any strategy whose precondition is not met.
    #[must_use]
    pub fn select(strategy: JailStrategy, holds_card: bool) -> Self {
        match strategy {
            JailStrategy::UseCard if holds_card => JailEscape::SurrenderCard,
            JailStrategy::Pay => JailEscape::PayFee,
            JailStrategy::UseCard | JailStrategy::RollDoubles => JailEscape::RollForDoubles,
        }
    }
}

impl<'a> TurnEngine<'a> {
    pub(super) fn run_jail_turn(
        &mut self,
        player: &mut Player,
        distance: u8,
        rolled_doubles: bool,
    ) -> RulesResult<()> {
        let escape = JailEscape::select(player.jail_strategy(), player.has_jail_card());
        debug!(player = %player.id, ?escape, "Jail turn");

        match escape {
            JailEscape::SurrenderCard => self.escape_with_card(player),
            JailEscape::PayFee => self.escape_by_paying(player),
            JailEscape::RollForDoubles => self.escape_by_rolling(player, distance, rolled_doubles),
        }
    }

    fn escape_with_card(&mut self, player: &mut Player) -> RulesResult<()> {
        if let Some(card) = player.surrender_jail_card() {
            info!(player = %player.id, card = %card.id, deck = %card.deck, "Used get-out-of-jail card");
            self.cards.discard(card);
        }
        self.release_from_jail(player)?;
        self.run_turn(player)
    }

    fn escape_by_paying(&mut self, player: &mut Player) -> RulesResult<()> {
        self.banker.charge_jail_fee(player.id)?;
        self.release_from_jail(player)
    }

    fn escape_by_rolling(
        &mut self,
        player: &mut Player,
        distance: u8,
        rolled_doubles: bool,
    ) -> RulesResult<()> {
        if rolled_doubles {
            self.release_from_jail(player)?;
            // The releasing roll does not start a new doubles streak.
            return self.run_turn_with(player, distance, false);
        }

        // A sentence already at 0 was served on a turn whose forced payment failed.
        let remaining = match self.jailer.remaining_sentence(player.id)? {
            0 => 0,
            _ => self.jailer.decrement_sentence(player.id)?,
        };
        debug!(player = %player.id, remaining, "Failed to roll doubles");
        if remaining > 0 {
            return Ok(());
        }

        info!(player = %player.id, "Sentence served, paying to leave");
        self.escape_by_paying(player)?;
        self.run_turn_with(player, distance, false)
    }
}
