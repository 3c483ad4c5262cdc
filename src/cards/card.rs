//! Chance and Community Chest cards.
//!
//! A card is an ordered list of tasks applied to the player who drew it.
//! The get-out-of-jail card carries no tasks; it is marked by `CardKind`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::PropertyGroup;

/// Identifier for a card within its deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Which deck a card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckKind {
    Chance,
    Chest,
}

impl DeckKind {
    /// The deck drawn from when landing on a space of `group`, if any.
    #[must_use]
    pub fn for_group(group: PropertyGroup) -> Option<Self> {
        match group {
            PropertyGroup::Chance => Some(DeckKind::Chance),
            PropertyGroup::Chest => Some(DeckKind::Chest),
            _ => None,
        }
    }
}

impl std::fmt::Display for DeckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckKind::Chance => f.write_str("Chance"),
            DeckKind::Chest => f.write_str("Community Chest"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    #[default]
    Ordinary,
    /// Kept by the drawing player until surrendered to leave jail.
    GetOutOfJail,
}

/// One effect of a card, applied to the drawing player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardTask {
    /// Receive money from the bank.
    Collect(u32),
    /// Pay money to the bank.
    Pay(u32),
    /// Move forward to a space, collecting salary when passing Go.
    AdvanceTo(u8),
    /// Move forward to the nearest space of a group.
    AdvanceToNearest(PropertyGroup),
    /// Move backwards without passing Go.
    GoBack(u8),
    /// Go directly to jail.
    GoToJail,
}

/// A drawn card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub deck: DeckKind,
    pub title: String,
    pub kind: CardKind,
    /// Applied in order.
    pub tasks: SmallVec<[CardTask; 2]>,
}

impl Card {
    /// Create an ordinary card with no tasks.
    pub fn new(id: CardId, deck: DeckKind, title: impl Into<String>) -> Self {
        Self {
            id,
            deck,
            title: title.into(),
            kind: CardKind::Ordinary,
            tasks: SmallVec::new(),
        }
    }

    /// Create the get-out-of-jail card for a deck.
    #[must_use]
    pub fn get_out_of_jail(id: CardId, deck: DeckKind) -> Self {
        Self {
            kind: CardKind::GetOutOfJail,
            ..Self::new(id, deck, "Get Out of Jail Free")
        }
    }

    /// Append a task (builder pattern).
    #[must_use]
    pub fn with_task(mut self, task: CardTask) -> Self {
        self.tasks.push(task);
        self
    }

    #[must_use]
    pub fn is_get_out_of_jail(&self) -> bool {
        self.kind == CardKind::GetOutOfJail
    }
}
