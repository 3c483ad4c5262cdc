//! Rule constants.
//!
//! `RulesConfig` holds the numbers the engine and the classic collaborators
//! agree on: where the jail is, jail terms and money amounts. Board
//! geometry belongs to `Board`. Defaults follow the classic board.

use serde::{Deserialize, Serialize};

/// House-rule configuration shared by the engine and its collaborators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Space number of the jail. Released players stand here as visitors.
    pub jail_space: u8,

    /// Salary collected for passing Go.
    pub go_salary: u32,

    /// Fee paid to leave jail.
    pub jail_fee: u32,

    /// Failed doubles attempts allowed before a forced paid release.
    pub jail_sentence: u8,

    /// Consecutive doubles that send a player to jail.
    pub doubles_limit: u8,

    /// Money each player starts with.
    pub starting_balance: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            jail_space: 10,
            go_salary: 200,
            jail_fee: 50,
            jail_sentence: 3,
            doubles_limit: 3,
            starting_balance: 1500,
        }
    }
}

impl RulesConfig {
    /// Classic rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the jail fee.
    #[must_use]
    pub fn with_jail_fee(mut self, fee: u32) -> Self {
        self.jail_fee = fee;
        self
    }

    /// Set the Go salary.
    #[must_use]
    pub fn with_go_salary(mut self, salary: u32) -> Self {
        self.go_salary = salary;
        self
    }

    /// Set the starting balance.
    #[must_use]
    pub fn with_starting_balance(mut self, balance: u32) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Set the jail sentence length.
    #[must_use]
    pub fn with_jail_sentence(mut self, turns: u8) -> Self {
        assert!(turns > 0, "Jail sentence must be at least 1 turn");
        self.jail_sentence = turns;
        self
    }
}
