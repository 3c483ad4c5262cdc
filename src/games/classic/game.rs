//! Classic table implementation.

use tracing::info;

use crate::bank::{Bank, Banker};
use crate::board::{Board, Location, PropertyGroup};
use crate::cards::{classic_chance, classic_chest, CardDecks};
use crate::core::{Dice, GameRng, JailStrategy, Player, PlayerId, RulesConfig, RulesResult, StandardDice};
use crate::jail::{JailRegistry, Jailer};
use crate::movement::BoardMovement;
use crate::rules::TurnEngine;

/// What a call to `ClassicGame::play_turn` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub player: PlayerId,
    /// Rolls taken, including extra rolls earned with doubles.
    pub rolls: u8,
    /// Where the player ended the turn.
    pub location: Location,
    pub imprisoned: bool,
}

/// A table with every collaborator the engine needs.
#[derive(Clone, Debug)]
pub struct ClassicGame<D: Dice = StandardDice> {
    rules: RulesConfig,
    dice: D,
    jail: JailRegistry,
    bank: Bank,
    movement: BoardMovement,
    decks: CardDecks,
    players: Vec<Player>,
}

/// Builder for creating a ClassicGame.
pub struct ClassicGameBuilder {
    player_count: usize,
    rules: RulesConfig,
    strategies: Vec<(PlayerId, JailStrategy)>,
}

impl Default for ClassicGameBuilder {
    fn default() -> Self {
        Self {
            player_count: 2,
            rules: RulesConfig::default(),
            strategies: Vec::new(),
        }
    }
}

impl ClassicGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(mut self, count: usize) -> Self {
        assert!((2..=8).contains(&count), "Player count must be 2-8");
        self.player_count = count;
        self
    }

    pub fn rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Configure how a seat tries to leave jail.
    pub fn jail_strategy(mut self, player: PlayerId, strategy: JailStrategy) -> Self {
        self.strategies.push((player, strategy));
        self
    }

    /// Build a table rolling `StandardDice` seeded from `seed`.
    pub fn build(self, seed: u64) -> ClassicGame {
        let dice = StandardDice::from_rng(GameRng::new(seed).for_context("dice"));
        self.build_with_dice(seed, dice)
    }

    /// Build a table with custom dice. `seed` still drives deck shuffling.
    pub fn build_with_dice<D: Dice>(self, seed: u64, dice: D) -> ClassicGame<D> {
        let board = Board::classic();
        assert_eq!(
            board.location(self.rules.jail_space).map(|l| l.group),
            Ok(PropertyGroup::JailVisiting),
            "Rules jail space is not the jail on the classic board"
        );

        let players = PlayerId::all(self.player_count)
            .map(|id| {
                let strategy = self
                    .strategies
                    .iter()
                    .rev()
                    .find(|(p, _)| *p == id)
                    .map(|&(_, s)| s)
                    .unwrap_or_default();
                Player::new(id, format!("Player {}", id.0 + 1)).with_jail_strategy(strategy)
            })
            .collect();

        let decks = CardDecks::new(
            classic_chance(),
            classic_chest(),
            GameRng::new(seed).for_context("shuffle"),
        );

        ClassicGame {
            dice,
            jail: JailRegistry::new(self.rules.jail_sentence),
            bank: Bank::new(self.player_count, self.rules.starting_balance, self.rules.jail_fee),
            movement: BoardMovement::new(board, self.rules.go_salary),
            decks,
            players,
            rules: self.rules,
        }
    }
}

impl<D: Dice> ClassicGame<D> {
    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Mutable access for setting up scenarios.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    #[must_use]
    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    #[must_use]
    pub fn jail(&self) -> &JailRegistry {
        &self.jail
    }

    pub fn jail_mut(&mut self) -> &mut JailRegistry {
        &mut self.jail
    }

    #[must_use]
    pub fn movement(&self) -> &BoardMovement {
        &self.movement
    }

    #[must_use]
    pub fn decks(&self) -> &CardDecks {
        &self.decks
    }

    /// Play one seat's turn, rolling again while the doubles streak is live.
    ///
    /// The doubles limit ends the streak in jail, so a turn takes at most
    /// `doubles_limit` rolls outside of jail escapes.
    pub fn play_turn(&mut self, id: PlayerId) -> RulesResult<TurnReport> {
        let Self {
            rules,
            dice,
            jail,
            bank,
            movement,
            decks,
            players,
        } = self;
        let player = &mut players[id.index()];
        let mut engine = TurnEngine::new(rules, dice, jail, bank, movement, decks);

        let mut rolls = 0;
        loop {
            rolls += 1;
            engine.run_turn(player)?;
            if player.doubles_count == 0 || engine.is_imprisoned(player) {
                break;
            }
        }
        drop(engine);

        let report = TurnReport {
            player: id,
            rolls,
            location: player.location,
            imprisoned: jail.is_imprisoned(id),
        };
        info!(
            player = %id,
            rolls,
            location = %report.location,
            imprisoned = report.imprisoned,
            balance = bank.balance(id),
            "Turn finished"
        );
        Ok(report)
    }

    /// Play one turn for every seat in order.
    pub fn play_round(&mut self) -> RulesResult<Vec<TurnReport>> {
        PlayerId::all(self.players.len())
            .map(|id| self.play_turn(id))
            .collect()
    }
}
