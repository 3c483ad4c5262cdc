//! Seats and the per-player state the turn engine works on.
//!
//! `PlayerId` names a seat, `PlayerMap` stores one value per seat (bank
//! balances), and `Player` carries what a turn reads and mutates: location,
//! doubles streak, held get-out-of-jail cards and the configured jail
//! strategy.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::board::Location;
use crate::cards::{Card, CardKind};

/// Seat number, 0-based. Displayed as `Player N`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Every seat at a table of `player_count`, in turn order.
    ///
    /// ```
    /// use rust_monopoly::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, [PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count).map(|seat| PlayerId(seat as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One value per seat, indexed by `PlayerId`.
///
/// ```
/// use rust_monopoly::core::{PlayerId, PlayerMap};
///
/// let mut balances = PlayerMap::filled(4, 1500u32);
/// balances[PlayerId::new(1)] -= 200;
/// assert_eq!(balances[PlayerId::new(1)], 1300);
/// assert_eq!(balances.get(PlayerId::new(4)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    slots: Vec<T>,
}

impl<T: Clone> PlayerMap<T> {
    /// Give every seat a copy of `value`.
    pub fn filled(player_count: usize, value: T) -> Self {
        assert!(
            (1..=usize::from(u8::MAX)).contains(&player_count),
            "Player count must be 1-255"
        );
        Self {
            slots: vec![value; player_count],
        }
    }
}

impl<T> PlayerMap<T> {
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.slots.len()
    }

    /// The value for a seat, or `None` for a seat not at this table.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.slots.get(player.index())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        &self.slots[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.slots[player.index()]
    }
}

/// How a player tries to leave jail. Chosen once per player.
///
/// The engine only executes the choice; it never changes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JailStrategy {
    /// Surrender a held get-out-of-jail card.
    UseCard,
    /// Pay the jail fee.
    Pay,
    /// Try to roll doubles. The base rule of the game.
    #[default]
    RollDoubles,
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat identifier.
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    /// Current board location.
    pub location: Location,

    /// Consecutive doubles rolled in the current jail-free streak.
    pub doubles_count: u8,

    jail_cards: Vec<Card>,
    jail_strategy: JailStrategy,
}

impl Player {
    /// Create a player standing on Go with the default jail strategy.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            location: Location::go(),
            doubles_count: 0,
            jail_cards: Vec::new(),
            jail_strategy: JailStrategy::default(),
        }
    }

    /// Set the jail strategy.
    #[must_use]
    pub fn with_jail_strategy(mut self, strategy: JailStrategy) -> Self {
        self.jail_strategy = strategy;
        self
    }

    /// The configured jail strategy.
    #[must_use]
    pub fn jail_strategy(&self) -> JailStrategy {
        self.jail_strategy
    }

    /// Number of get-out-of-jail cards held.
    #[must_use]
    pub fn jail_card_count(&self) -> usize {
        self.jail_cards.len()
    }

    /// Whether the player holds at least one get-out-of-jail card.
    #[must_use]
    pub fn has_jail_card(&self) -> bool {
        !self.jail_cards.is_empty()
    }

    /// Keep a get-out-of-jail card.
    ///
    /// Returns the card back if it is not a get-out-of-jail card.
    pub fn add_jail_card(&mut self, card: Card) -> Result<(), Card> {
        if card.kind != CardKind::GetOutOfJail {
            return Err(card);
        }
        self.jail_cards.push(card);
        Ok(())
    }

    /// Give up the most recently received get-out-of-jail card.
    pub fn surrender_jail_card(&mut self) -> Option<Card> {
        self.jail_cards.pop()
    }
}
