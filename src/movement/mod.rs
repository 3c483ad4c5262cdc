//! Moving players around the board, and what happens where they land.
//!
//! `BoardMovement` owns the board and the realtor: it advances players
//! (paying the Go salary through the banker), applies landing taxes and
//! resolves purchase or rent for the space a turn ends on.

use tracing::debug;

use crate::bank::Banker;
use crate::board::{Board, LandingTask, Location, PropertyGroup};
use crate::core::error::{RulesError, RulesResult};
use crate::core::player::Player;
use crate::realty::Realtor;

/// Movement and landing collaborator.
pub trait MovementHandler {
    /// Move forward `distance` spaces, collecting salary when passing Go.
    fn move_player(
        &mut self,
        player: &mut Player,
        distance: u8,
        banker: &mut dyn Banker,
    ) -> RulesResult<Location>;

    /// Move forward to `space`, collecting salary when passing Go.
    fn move_directly_to(
        &mut self,
        player: &mut Player,
        space: u8,
        banker: &mut dyn Banker,
    ) -> RulesResult<Location>;

    /// Move forward to the nearest space of `group`.
    fn move_to_closest(
        &mut self,
        player: &mut Player,
        group: PropertyGroup,
        banker: &mut dyn Banker,
    ) -> RulesResult<Location>;

    /// Move backwards `spaces` spaces. Never collects salary.
    fn move_back(&mut self, player: &mut Player, spaces: u8) -> RulesResult<Location>;

    /// Apply the landing tasks of the player's current location.
    fn complete_landing_tasks(&mut self, player: &Player, banker: &mut dyn Banker) -> RulesResult<()>;

    /// Buy the current space if it is for sale, or pay rent if someone else owns it.
    ///
    /// `distance` is the dice total of the turn, used by dice-based rent.
    fn handle_purchase(
        &mut self,
        player: &Player,
        distance: u8,
        banker: &mut dyn Banker,
    ) -> RulesResult<()>;
}

/// `MovementHandler` over a `Board` and a `Realtor`.
///
/// Purchase policy: buy whenever the player can afford the price.
#[derive(Clone, Debug)]
pub struct BoardMovement {
    board: Board,
    realtor: Realtor,
    go_salary: u32,
}

impl BoardMovement {
    #[must_use]
    pub fn new(board: Board, go_salary: u32) -> Self {
        Self {
            board,
            realtor: Realtor::new(),
            go_salary,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn realtor(&self) -> &Realtor {
        &self.realtor
    }

    pub fn realtor_mut(&mut self) -> &mut Realtor {
        &mut self.realtor
    }

    fn land(
        &self,
        player: &mut Player,
        space: u8,
        passed_go: bool,
        banker: &mut dyn Banker,
    ) -> RulesResult<Location> {
        let location = self.board.location(space)?;
        if passed_go {
            banker.pay(player.id, self.go_salary);
            debug!(player = %player.id, salary = self.go_salary, "Passed Go");
        }
        debug!(player = %player.id, from = %player.location, to = %location, "Moved");
        player.location = location;
        Ok(location)
    }
}

impl MovementHandler for BoardMovement {
    fn move_player(
        &mut self,
        player: &mut Player,
        distance: u8,
        banker: &mut dyn Banker,
    ) -> RulesResult<Location> {
        let (space, passed_go) = self.board.advance(player.location.space, distance);
        self.land(player, space, passed_go, banker)
    }

    fn move_directly_to(
        &mut self,
        player: &mut Player,
        space: u8,
        banker: &mut dyn Banker,
    ) -> RulesResult<Location> {
        self.board.space(space)?;
        let passed_go = space < player.location.space;
        self.land(player, space, passed_go, banker)
    }

    fn move_to_closest(
        &mut self,
        player: &mut Player,
        group: PropertyGroup,
        banker: &mut dyn Banker,
    ) -> RulesResult<Location> {
        let from = player.location.space;
        let space = self
            .board
            .closest_ahead(from, group)
            .ok_or(RulesError::UnknownSpace(from))?;
        self.move_directly_to(player, space, banker)
    }

    fn move_back(&mut self, player: &mut Player, spaces: u8) -> RulesResult<Location> {
        let space = self.board.retreat(player.location.space, spaces);
        let location = self.board.location(space)?;
        debug!(player = %player.id, from = %player.location, to = %location, "Moved back");
        player.location = location;
        Ok(location)
    }

    fn complete_landing_tasks(&mut self, player: &Player, banker: &mut dyn Banker) -> RulesResult<()> {
        let space = self.board.space(player.location.space)?;
        match space.landing {
            Some(LandingTask::Tax(amount)) => {
                debug!(player = %player.id, amount, name = %space.name, "Tax due");
                banker.charge(player.id, amount)
            }
            None => Ok(()),
        }
    }

    fn handle_purchase(
        &mut self,
        player: &Player,
        distance: u8,
        banker: &mut dyn Banker,
    ) -> RulesResult<()> {
        let location = player.location;
        if location.is_jail() {
            return Ok(());
        }

        if self.realtor.is_for_sale(&self.board, location.space) {
            let price = self.board.space(location.space)?.price.unwrap_or(0);
            if banker.balance(player.id) >= price {
                self.realtor.make_purchase(&self.board, player.id, location.space, banker)?;
            } else {
                debug!(player = %player.id, space = location.space, price, "Cannot afford property");
            }
        } else if self.realtor.is_owned(location.space) {
            self.realtor
                .charge_rent(&self.board, player.id, location.space, distance, banker)?;
        }
        Ok(())
    }
}
