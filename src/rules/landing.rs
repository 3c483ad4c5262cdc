//! Card draws for Chance and Community Chest spaces.

use tracing::debug;

use super::engine::TurnEngine;
use crate::cards::{Card, CardTask, DeckKind};
use crate::core::error::RulesResult;
use crate::core::player::Player;

impl<'a> TurnEngine<'a> {
    /// Draw from the deck matching the player's location, if any.
    ///
    /// A get-out-of-jail card is kept by the player until surrendered;
    /// every other card goes back to its discard pile once applied.
    pub(super) fn draw_card_for_location(&mut self, player: &mut Player) -> RulesResult<()> {
        let Some(deck) = DeckKind::for_group(player.location.group) else {
            return Ok(());
        };

        let card = self.cards.draw(deck)?;
        debug!(player = %player.id, deck = %deck, card = %card.title, "Drew card");

        self.complete_card_tasks(player, &card)?;

        if card.is_get_out_of_jail() {
            if let Err(card) = player.add_jail_card(card) {
                self.cards.discard(card);
            }
        } else {
            self.cards.discard(card);
        }
        Ok(())
    }

    /// Apply a card's tasks to the player, in order.
    pub fn complete_card_tasks(&mut self, player: &mut Player, card: &Card) -> RulesResult<()> {
        for task in &card.tasks {
            self.complete_card_task(player, *task)?;
        }
        Ok(())
    }

    fn complete_card_task(&mut self, player: &mut Player, task: CardTask) -> RulesResult<()> {
        match task {
            CardTask::Collect(amount) => {
                self.banker.pay(player.id, amount);
                Ok(())
            }
            CardTask::Pay(amount) => self.banker.charge(player.id, amount),
            CardTask::AdvanceTo(space) => self
                .movement
                .move_directly_to(player, space, &mut *self.banker)
                .map(|_| ()),
            CardTask::AdvanceToNearest(group) => self
                .movement
                .move_to_closest(player, group, &mut *self.banker)
                .map(|_| ()),
            CardTask::GoBack(spaces) => self.movement.move_back(player, spaces).map(|_| ()),
            CardTask::GoToJail => {
                if self.jailer.is_imprisoned(player.id) {
                    debug!(player = %player.id, "Already in jail, ignoring Go to Jail card");
                    return Ok(());
                }
                self.send_to_jail(player)
            }
        }
    }
}
