//! Decks and the card-handling collaborator.
//!
//! A `Deck` keeps a draw pile and a discard pile as `im::Vector`s so a table
//! snapshot is a cheap clone. When the draw pile runs out, the discard pile
//! is shuffled back in.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::card::{Card, DeckKind};
use crate::core::error::{RulesError, RulesResult};
use crate::core::rng::GameRng;

/// Draws and discards Chance and Community Chest cards.
pub trait CardHandler {
    fn draw_chance(&mut self) -> RulesResult<Card>;

    fn draw_chest(&mut self) -> RulesResult<Card>;

    /// Return a card to its own deck's discard pile.
    fn discard(&mut self, card: Card);

    /// Draw from the deck of the given kind.
    fn draw(&mut self, deck: DeckKind) -> RulesResult<Card> {
        match deck {
            DeckKind::Chance => self.draw_chance(),
            DeckKind::Chest => self.draw_chest(),
        }
    }
}

/// One deck of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    kind: DeckKind,
    /// Front is the top of the pile.
    draw_pile: Vector<Card>,
    discard_pile: Vector<Card>,
}

impl Deck {
    /// Create a deck with `cards` in draw order (first card on top).
    pub fn new(kind: DeckKind, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            kind,
            draw_pile: cards.into_iter().collect(),
            discard_pile: Vector::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> DeckKind {
        self.kind
    }

    /// Cards left to draw before a reshuffle.
    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn discard_pile_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// The discard pile, oldest first.
    pub fn discard_pile(&self) -> impl Iterator<Item = &Card> {
        self.discard_pile.iter()
    }

    /// Shuffle the draw pile.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.draw_pile.iter().cloned().collect();
        rng.shuffle(&mut cards);
        self.draw_pile = cards.into_iter().collect();
    }

    /// Take the top card, reshuffling the discard pile in if needed.
    pub fn draw(&mut self, rng: &mut GameRng) -> RulesResult<Card> {
        if self.draw_pile.is_empty() {
            self.reshuffle_discards(rng);
        }
        self.draw_pile
            .pop_front()
            .ok_or(RulesError::EmptyDeck(self.kind))
    }

    /// Put a card on the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push_back(card);
    }

    fn reshuffle_discards(&mut self, rng: &mut GameRng) {
        if self.discard_pile.is_empty() {
            return;
        }
        debug!(deck = %self.kind, cards = self.discard_pile.len(), "Reshuffling discard pile");
        self.draw_pile.append(std::mem::take(&mut self.discard_pile));
        self.shuffle(rng);
    }
}

/// The Chance and Community Chest decks of one table.
#[derive(Clone, Debug)]
pub struct CardDecks {
    chance: Deck,
    chest: Deck,
    rng: GameRng,
}

impl CardDecks {
    /// Create decks and shuffle both with `rng`.
    pub fn new(chance: Deck, chest: Deck, rng: GameRng) -> Self {
        let mut decks = Self::stacked(chance, chest, rng);
        decks.chance.shuffle(&mut decks.rng);
        decks.chest.shuffle(&mut decks.rng);
        decks
    }

    /// Create decks without shuffling, keeping the given draw order.
    pub fn stacked(chance: Deck, chest: Deck, rng: GameRng) -> Self {
        assert_eq!(chance.kind(), DeckKind::Chance, "Chance deck has the wrong kind");
        assert_eq!(chest.kind(), DeckKind::Chest, "Chest deck has the wrong kind");
        Self { chance, chest, rng }
    }

    #[must_use]
    pub fn deck(&self, kind: DeckKind) -> &Deck {
        match kind {
            DeckKind::Chance => &self.chance,
            DeckKind::Chest => &self.chest,
        }
    }

    fn deck_mut(&mut self, kind: DeckKind) -> &mut Deck {
        match kind {
            DeckKind::Chance => &mut self.chance,
            DeckKind::Chest => &mut self.chest,
        }
    }
}

impl CardHandler for CardDecks {
    fn draw_chance(&mut self) -> RulesResult<Card> {
        self.chance.draw(&mut self.rng)
    }

    fn draw_chest(&mut self) -> RulesResult<Card> {
        self.chest.draw(&mut self.rng)
    }

    fn discard(&mut self, card: Card) {
        self.deck_mut(card.deck).discard(card);
    }
}
