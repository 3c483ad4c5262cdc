//! Property ownership, purchases and rent.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::bank::Banker;
use crate::board::{Board, PropertyGroup};
use crate::core::error::RulesResult;
use crate::core::player::PlayerId;

/// Rent for one railroad; doubles with each additional railroad owned.
pub const RAILROAD_BASE_RENT: u32 = 25;

/// Tracks who owns which space.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Realtor {
    owners: FxHashMap<u8, PlayerId>,
}

impl Realtor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn owner_of(&self, space: u8) -> Option<PlayerId> {
        self.owners.get(&space).copied()
    }

    #[must_use]
    pub fn is_owned(&self, space: u8) -> bool {
        self.owners.contains_key(&space)
    }

    /// Whether the space can be bought and nobody owns it yet.
    #[must_use]
    pub fn is_for_sale(&self, board: &Board, space: u8) -> bool {
        !self.is_owned(space)
            && board
                .space(space)
                .map(|s| s.is_purchasable())
                .unwrap_or(false)
    }

    /// Spaces owned by a player, in board order.
    #[must_use]
    pub fn holdings(&self, player: PlayerId) -> Vec<u8> {
        let mut spaces: Vec<u8> = self
            .owners
            .iter()
            .filter(|&(_, &owner)| owner == player)
            .map(|(&space, _)| space)
            .collect();
        spaces.sort_unstable();
        spaces
    }

    /// Record ownership without payment (setup, trades).
    pub fn assign(&mut self, space: u8, owner: PlayerId) {
        self.owners.insert(space, owner);
    }

    /// Buy a space for its listed price.
    pub fn make_purchase(
        &mut self,
        board: &Board,
        buyer: PlayerId,
        space: u8,
        banker: &mut dyn Banker,
    ) -> RulesResult<()> {
        let listing = board.space(space)?;
        let price = listing.price.unwrap_or(0);

        banker.charge(buyer, price)?;
        self.owners.insert(space, buyer);
        info!(player = %buyer, space, name = %listing.name, price, "Property purchased");
        Ok(())
    }

    /// Rent owed for landing on an owned space.
    ///
    /// Utility rent is keyed off the dice `distance`.
    pub fn rent_for(&self, board: &Board, space: u8, distance: u8) -> RulesResult<u32> {
        let listing = board.space(space)?;
        let Some(owner) = self.owner_of(space) else {
            return Ok(0);
        };
        let owned_in_group = board
            .group(listing.group)
            .filter(|s| self.owner_of(s.number) == Some(owner))
            .count() as u32;

        let rent = match listing.group {
            PropertyGroup::Railroad => RAILROAD_BASE_RENT << owned_in_group.saturating_sub(1),
            PropertyGroup::Utility => {
                let multiplier = if owned_in_group >= 2 { 10 } else { 4 };
                multiplier * u32::from(distance)
            }
            group if group.is_street() => {
                let group_size = board.group(group).count() as u32;
                if owned_in_group == group_size {
                    listing.rent * 2
                } else {
                    listing.rent
                }
            }
            _ => 0,
        };
        Ok(rent)
    }

    /// Charge rent from `payer` to the owner of `space`. Returns the amount.
    pub fn charge_rent(
        &self,
        board: &Board,
        payer: PlayerId,
        space: u8,
        distance: u8,
        banker: &mut dyn Banker,
    ) -> RulesResult<u32> {
        let Some(owner) = self.owner_of(space) else {
            return Ok(0);
        };
        if owner == payer {
            return Ok(0);
        }

        let rent = self.rent_for(board, space, distance)?;
        banker.transfer(payer, owner, rent)?;
        info!(payer = %payer, owner = %owner, space, rent, "Rent paid");
        Ok(rent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::Bank;
    use crate::core::error::RulesError;

    fn players() -> (PlayerId, PlayerId) {
        (PlayerId::new(0), PlayerId::new(1))
    }

    #[test]
    fn test_purchase() {
        let board = Board::classic();
        let mut bank = Bank::new(2, 1500, 50);
        let mut realtor = Realtor::new();
        let (a, _) = players();

        assert!(realtor.is_for_sale(&board, 39));
        realtor.make_purchase(&board, a, 39, &mut bank).unwrap();

        assert_eq!(realtor.owner_of(39), Some(a));
        assert!(!realtor.is_for_sale(&board, 39));
        assert_eq!(bank.balance(a), 1100);
        assert_eq!(realtor.holdings(a), vec![39]);
    }

    #[test]
    fn test_unpurchasable_spaces() {
        let board = Board::classic();
        let realtor = Realtor::new();

        for space in [0, 2, 4, 7, 10, 20, 30] {
            assert!(!realtor.is_for_sale(&board, space), "space {}", space);
        }
    }

    #[test]
    fn test_purchase_without_funds() {
        let board = Board::classic();
        let mut bank = Bank::new(2, 100, 50);
        let mut realtor = Realtor::new();
        let (a, _) = players();

        let err = realtor.make_purchase(&board, a, 39, &mut bank).unwrap_err();
        assert!(matches!(err, RulesError::InsufficientFunds { required: 400, .. }));
        assert!(!realtor.is_owned(39));
    }

    #[test]
    fn test_street_rent_doubles_with_full_group() {
        let board = Board::classic();
        let mut realtor = Realtor::new();
        let (a, _) = players();

        realtor.assign(37, a);
        assert_eq!(realtor.rent_for(&board, 37, 7), Ok(35));

        realtor.assign(39, a);
        assert_eq!(realtor.rent_for(&board, 37, 7), Ok(70));
        assert_eq!(realtor.rent_for(&board, 39, 7), Ok(100));
    }

    #[test]
    fn test_railroad_rent() {
        let board = Board::classic();
        let mut realtor = Realtor::new();
        let (a, _) = players();

        realtor.assign(5, a);
        assert_eq!(realtor.rent_for(&board, 5, 4), Ok(25));
        realtor.assign(15, a);
        realtor.assign(25, a);
        assert_eq!(realtor.rent_for(&board, 5, 4), Ok(100));
        realtor.assign(35, a);
        assert_eq!(realtor.rent_for(&board, 5, 4), Ok(200));
    }

    #[test]
    fn test_utility_rent_uses_distance() {
        let board = Board::classic();
        let mut realtor = Realtor::new();
        let (a, _) = players();

        realtor.assign(12, a);
        assert_eq!(realtor.rent_for(&board, 12, 9), Ok(36));
        realtor.assign(28, a);
        assert_eq!(realtor.rent_for(&board, 12, 9), Ok(90));
    }

    #[test]
    fn test_charge_rent() {
        let board = Board::classic();
        let mut bank = Bank::new(2, 1500, 50);
        let mut realtor = Realtor::new();
        let (a, b) = players();
        realtor.assign(1, a);

        assert_eq!(realtor.charge_rent(&board, b, 1, 6, &mut bank), Ok(2));
        assert_eq!(bank.balance(a), 1502);
        assert_eq!(bank.balance(b), 1498);

        // Owners never pay themselves.
        assert_eq!(realtor.charge_rent(&board, a, 1, 6, &mut bank), Ok(0));
    }
}
