//! Money.
//!
//! The `Banker` moves money between players and the bank. A charge that
//! exceeds a balance fails with `RulesError::InsufficientFunds` and leaves
//! every balance untouched; resolving bankruptcy is up to the caller.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::{RulesError, RulesResult};
use crate::core::player::{PlayerId, PlayerMap};

/// Money-handling collaborator.
pub trait Banker {
    fn balance(&self, player: PlayerId) -> u32;

    /// Pay `amount` from the bank to the player.
    fn pay(&mut self, player: PlayerId, amount: u32);

    /// Take `amount` from the player.
    fn charge(&mut self, player: PlayerId, amount: u32) -> RulesResult<()>;

    /// Move `amount` from one player to another.
    fn transfer(&mut self, from: PlayerId, to: PlayerId, amount: u32) -> RulesResult<()>;

    /// Take the fee for leaving jail.
    fn charge_jail_fee(&mut self, player: PlayerId) -> RulesResult<()>;
}

/// Player balances.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    balances: PlayerMap<u32>,
    jail_fee: u32,
}

impl Bank {
    /// Give every player `starting_balance`.
    #[must_use]
    pub fn new(player_count: usize, starting_balance: u32, jail_fee: u32) -> Self {
        Self {
            balances: PlayerMap::filled(player_count, starting_balance),
            jail_fee,
        }
    }

    #[must_use]
    pub fn jail_fee(&self) -> u32 {
        self.jail_fee
    }
}

impl Banker for Bank {
    fn balance(&self, player: PlayerId) -> u32 {
        self.balances[player]
    }

    fn pay(&mut self, player: PlayerId, amount: u32) {
        let balance = &mut self.balances[player];
        *balance = balance.saturating_add(amount);
        debug!(player = %player, amount, balance = *balance, "Bank paid player");
    }

    fn charge(&mut self, player: PlayerId, amount: u32) -> RulesResult<()> {
        let balance = &mut self.balances[player];
        if *balance < amount {
            return Err(RulesError::InsufficientFunds {
                player,
                required: amount,
                available: *balance,
            });
        }
        *balance -= amount;
        debug!(player = %player, amount, balance = *balance, "Bank charged player");
        Ok(())
    }

    fn transfer(&mut self, from: PlayerId, to: PlayerId, amount: u32) -> RulesResult<()> {
        self.charge(from, amount)?;
        self.pay(to, amount);
        Ok(())
    }

    fn charge_jail_fee(&mut self, player: PlayerId) -> RulesResult<()> {
        self.charge(player, self.jail_fee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pay_and_charge() {
        let mut bank = Bank::new(2, 1500, 50);
        let p = PlayerId::new(0);

        bank.pay(p, 200);
        assert_eq!(bank.balance(p), 1700);

        bank.charge(p, 700).unwrap();
        assert_eq!(bank.balance(p), 1000);
    }

    #[test]
    fn test_insufficient_funds_leaves_balance() {
        let mut bank = Bank::new(2, 30, 50);
        let p = PlayerId::new(1);

        let err = bank.charge_jail_fee(p).unwrap_err();
        assert_eq!(
            err,
            RulesError::InsufficientFunds {
                player: p,
                required: 50,
                available: 30
            }
        );
        assert_eq!(bank.balance(p), 30);
    }

    #[test]
    fn test_transfer() {
        let mut bank = Bank::new(2, 100, 50);
        let (a, b) = (PlayerId::new(0), PlayerId::new(1));

        bank.transfer(a, b, 60).unwrap();
        assert_eq!(bank.balance(a), 40);
        assert_eq!(bank.balance(b), 160);

        assert!(bank.transfer(a, b, 60).is_err());
        assert_eq!(bank.balance(a), 40);
        assert_eq!(bank.balance(b), 160);
    }
}
