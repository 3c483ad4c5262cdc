//! Shared fixtures for integration tests.
//!
//! `Table` wires the real jail registry, bank, board and decks to the turn
//! engine, with scripted dice and a journal recording the order in which
//! the engine calls its movement and card collaborators.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use rust_monopoly::bank::{Bank, Banker};
use rust_monopoly::board::{Board, Location, PropertyGroup};
use rust_monopoly::cards::{Card, CardDecks, CardHandler, CardId, CardTask, Deck, DeckKind};
use rust_monopoly::core::{Dice, GameRng, Player, PlayerId, Roll, RulesConfig, RulesResult};
use rust_monopoly::jail::{JailRegistry, Jailer};
use rust_monopoly::movement::{BoardMovement, MovementHandler};
use rust_monopoly::rules::TurnEngine;

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once. Level from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Dice that return a fixed sequence of rolls.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<Roll>,
}

impl ScriptedDice {
    pub fn new(faces: &[(u8, u8)]) -> Self {
        Self {
            rolls: faces.iter().map(|&(a, b)| Roll::new(a, b)).collect(),
        }
    }

    pub fn push(&mut self, first: u8, second: u8) {
        self.rolls.push_back(Roll::new(first, second));
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self) -> Roll {
        self.rolls.pop_front().expect("scripted dice ran out of rolls")
    }
}

/// A collaborator call observed by the journal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Moved { to: u8 },
    MovedDirectly { to: u8 },
    MovedBack { to: u8 },
    Landed { at: Location },
    Drew { deck: DeckKind, card: CardId },
    Discarded { deck: DeckKind, card: CardId },
    Purchase { at: Location, distance: u8 },
}

pub type Journal = Rc<RefCell<Vec<Event>>>;

/// `BoardMovement` that records every call.
pub struct RecordingMovement {
    pub inner: BoardMovement,
    journal: Journal,
}

impl MovementHandler for RecordingMovement {
    fn move_player(&mut self, player: &mut Player, distance: u8, banker: &mut dyn Banker) -> RulesResult<Location> {
        let location = self.inner.move_player(player, distance, banker)?;
        self.journal.borrow_mut().push(Event::Moved { to: location.space });
        Ok(location)
    }

    fn move_directly_to(&mut self, player: &mut Player, space: u8, banker: &mut dyn Banker) -> RulesResult<Location> {
        let location = self.inner.move_directly_to(player, space, banker)?;
        self.journal.borrow_mut().push(Event::MovedDirectly { to: location.space });
        Ok(location)
    }

    fn move_to_closest(
        &mut self,
        player: &mut Player,
        group: PropertyGroup,
        banker: &mut dyn Banker,
    ) -> RulesResult<Location> {
        let location = self.inner.move_to_closest(player, group, banker)?;
        self.journal.borrow_mut().push(Event::MovedDirectly { to: location.space });
        Ok(location)
    }

    fn move_back(&mut self, player: &mut Player, spaces: u8) -> RulesResult<Location> {
        let location = self.inner.move_back(player, spaces)?;
        self.journal.borrow_mut().push(Event::MovedBack { to: location.space });
        Ok(location)
    }

    fn complete_landing_tasks(&mut self, player: &Player, banker: &mut dyn Banker) -> RulesResult<()> {
        self.journal.borrow_mut().push(Event::Landed { at: player.location });
        self.inner.complete_landing_tasks(player, banker)
    }

    fn handle_purchase(&mut self, player: &Player, distance: u8, banker: &mut dyn Banker) -> RulesResult<()> {
        self.journal.borrow_mut().push(Event::Purchase {
            at: player.location,
            distance,
        });
        self.inner.handle_purchase(player, distance, banker)
    }
}

/// `CardDecks` that records every draw and discard.
pub struct RecordingCards {
    pub inner: CardDecks,
    journal: Journal,
}

impl RecordingCards {
    fn record_draw(&self, card: &RulesResult<Card>) {
        if let Ok(card) = card {
            self.journal.borrow_mut().push(Event::Drew {
                deck: card.deck,
                card: card.id,
            });
        }
    }
}

impl CardHandler for RecordingCards {
    fn draw_chance(&mut self) -> RulesResult<Card> {
        let card = self.inner.draw_chance();
        self.record_draw(&card);
        card
    }

    fn draw_chest(&mut self) -> RulesResult<Card> {
        let card = self.inner.draw_chest();
        self.record_draw(&card);
        card
    }

    fn discard(&mut self, card: Card) {
        self.journal.borrow_mut().push(Event::Discarded {
            deck: card.deck,
            card: card.id,
        });
        self.inner.discard(card);
    }
}

/// A card that only pays the drawer.
pub fn payout(id: u16, deck: DeckKind, amount: u32) -> Card {
    Card::new(CardId::new(id), deck, format!("Collect {}", amount)).with_task(CardTask::Collect(amount))
}

/// Decks of harmless payout cards.
pub fn payout_decks() -> (Vec<Card>, Vec<Card>) {
    (
        (0..4).map(|i| payout(i, DeckKind::Chance, 10)).collect(),
        (0..4).map(|i| payout(i, DeckKind::Chest, 10)).collect(),
    )
}

/// Collaborators for one engine, with two players.
pub struct Table {
    pub rules: RulesConfig,
    pub dice: ScriptedDice,
    pub jail: JailRegistry,
    pub bank: Bank,
    pub movement: RecordingMovement,
    pub cards: RecordingCards,
    pub journal: Journal,
}

impl Table {
    /// Classic board and rules, harmless payout decks.
    pub fn new(rolls: &[(u8, u8)]) -> Self {
        let (chance, chest) = payout_decks();
        Self::with_decks(rolls, chance, chest)
    }

    /// Classic board and rules with stacked decks (first card drawn first).
    pub fn with_decks(rolls: &[(u8, u8)], chance: Vec<Card>, chest: Vec<Card>) -> Self {
        Self::with_rules(RulesConfig::default(), rolls, chance, chest)
    }

    pub fn with_rules(rules: RulesConfig, rolls: &[(u8, u8)], chance: Vec<Card>, chest: Vec<Card>) -> Self {
        init_logging();
        let journal: Journal = Rc::default();

        Self {
            dice: ScriptedDice::new(rolls),
            jail: JailRegistry::new(rules.jail_sentence),
            bank: Bank::new(2, rules.starting_balance, rules.jail_fee),
            movement: RecordingMovement {
                inner: BoardMovement::new(Board::classic(), rules.go_salary),
                journal: Rc::clone(&journal),
            },
            cards: RecordingCards {
                inner: CardDecks::stacked(
                    Deck::new(DeckKind::Chance, chance),
                    Deck::new(DeckKind::Chest, chest),
                    GameRng::new(0),
                ),
                journal: Rc::clone(&journal),
            },
            journal,
            rules,
        }
    }

    pub fn engine(&mut self) -> TurnEngine<'_> {
        TurnEngine::new(
            &self.rules,
            &mut self.dice,
            &mut self.jail,
            &mut self.bank,
            &mut self.movement,
            &mut self.cards,
        )
    }

    /// Recorded events, clearing the journal.
    pub fn take_events(&self) -> Vec<Event> {
        std::mem::take(&mut *self.journal.borrow_mut())
    }

    pub fn location(&self, space: u8) -> Location {
        self.movement.inner.board().location(space).unwrap()
    }

    /// Imprison a player and serve all but `sentence` turns of their term.
    pub fn imprison(&mut self, player: &mut Player, sentence: u8) {
        self.engine().send_to_jail(player).unwrap();
        while self.jail.remaining_sentence(player.id).unwrap() > sentence {
            self.jail.decrement_sentence(player.id).unwrap();
        }
        self.take_events();
    }

    pub fn balance(&self, player: PlayerId) -> u32 {
        self.bank.balance(player)
    }
}

/// A player standing on `space` of the classic board.
pub fn player_at(id: u8, space: u8) -> Player {
    let mut player = Player::new(PlayerId::new(id), format!("Player {}", id + 1));
    player.location = Board::classic().location(space).unwrap();
    player
}
