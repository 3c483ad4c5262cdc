//! Turn orchestration.
//!
//! `TurnEngine` runs one player-turn at a time. It owns every branching
//! decision of a turn and the turn-scoped player state (doubles streak,
//! jail transitions), and delegates side effects to its collaborators:
//!
//! - `Dice`: the roll
//! - `Jailer`: who is imprisoned, and for how long
//! - `Banker`: money
//! - `MovementHandler`: movement, landing tasks, purchase and rent
//! - `CardHandler`: Chance and Community Chest decks
//!
//! ## Turn sequence
//!
//! 1. Imprisoned players run the jail protocol instead (see `rules::jail`).
//! 2. Doubles extend the streak, anything else resets it.
//! 3. Reaching the doubles limit sends the player to jail without moving.
//! 4. Otherwise: move, go to jail if the space says so, landing tasks,
//!    card draw, then purchase or rent.
//!
//! Errors from collaborators end the turn and are returned unchanged.

use tracing::{debug, info};

use crate::bank::Banker;
use crate::board::Location;
use crate::cards::CardHandler;
use crate::core::config::RulesConfig;
use crate::core::dice::Dice;
use crate::core::error::RulesResult;
use crate::core::player::Player;
use crate::jail::Jailer;
use crate::movement::MovementHandler;

/// Runs player-turns against borrowed collaborators.
pub struct TurnEngine<'a> {
    pub(super) rules: &'a RulesConfig,
    pub(super) dice: &'a mut dyn Dice,
    pub(super) jailer: &'a mut dyn Jailer,
    pub(super) banker: &'a mut dyn Banker,
    pub(super) movement: &'a mut dyn MovementHandler,
    pub(super) cards: &'a mut dyn CardHandler,
}

impl<'a> TurnEngine<'a> {
    /// Create an engine over the given collaborators.
    pub fn new(
        rules: &'a RulesConfig,
        dice: &'a mut dyn Dice,
        jailer: &'a mut dyn Jailer,
        banker: &'a mut dyn Banker,
        movement: &'a mut dyn MovementHandler,
        cards: &'a mut dyn CardHandler,
    ) -> Self {
        Self {
            rules,
            dice,
            jailer,
            banker,
            movement,
            cards,
        }
    }

    /// Roll the dice and run the turn.
    pub fn run_turn(&mut self, player: &mut Player) -> RulesResult<()> {
        let roll = self.dice.roll();
        debug!(player = %player.id, roll = %roll, "Rolled");
        self.run_turn_with(player, roll.distance(), roll.is_doubles())
    }

    /// Run the turn for an already known roll.
    pub fn run_turn_with(
        &mut self,
        player: &mut Player,
        distance: u8,
        rolled_doubles: bool,
    ) -> RulesResult<()> {
        if self.jailer.is_imprisoned(player.id) {
            return self.run_jail_turn(player, distance, rolled_doubles);
        }

        if rolled_doubles {
            player.doubles_count += 1;
        } else {
            player.doubles_count = 0;
        }

        if player.doubles_count >= self.rules.doubles_limit {
            info!(player = %player.id, doubles = player.doubles_count, "Too many doubles");
            return self.send_to_jail(player);
        }

        self.run_standard_turn(player, distance)
    }

    /// Whether the player is currently imprisoned.
    #[must_use]
    pub fn is_imprisoned(&self, player: &Player) -> bool {
        self.jailer.is_imprisoned(player.id)
    }

    /// Lock the player in the jail cell and clear their doubles streak.
    pub fn send_to_jail(&mut self, player: &mut Player) -> RulesResult<()> {
        self.jailer.imprison(player.id)?;
        player.location = Location::jail_cell(self.rules.jail_space);
        player.doubles_count = 0;
        info!(player = %player.id, "Sent to jail");
        Ok(())
    }

    /// Free the player and move them to the Jail-Visiting space.
    pub fn release_from_jail(&mut self, player: &mut Player) -> RulesResult<()> {
        self.jailer.release(player.id)?;
        self.movement
            .move_directly_to(player, self.rules.jail_space, &mut *self.banker)?;
        info!(player = %player.id, location = %player.location, "Released from jail");
        Ok(())
    }

    fn run_standard_turn(&mut self, player: &mut Player, distance: u8) -> RulesResult<()> {
        let location = self
            .movement
            .move_player(player, distance, &mut *self.banker)?;

        // Remaining landing steps still run, against the jail cell.
        if location.is_jail() {
            self.send_to_jail(player)?;
        }

        self.movement
            .complete_landing_tasks(player, &mut *self.banker)?;

        self.draw_card_for_location(player)?;

        self.movement
            .handle_purchase(player, distance, &mut *self.banker)
    }
}
