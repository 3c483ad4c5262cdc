//! Board layout.

use serde::{Deserialize, Serialize};

use super::space::{Location, PropertyGroup, Space};
use crate::core::error::{RulesError, RulesResult};

/// An ordered ring of spaces, indexed by space number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    spaces: Vec<Space>,
}

impl Board {
    /// Create a board from spaces listed in order.
    ///
    /// Panics if space numbers are not `0..len`.
    pub fn new(spaces: Vec<Space>) -> Self {
        assert!(!spaces.is_empty(), "Board must have at least 1 space");
        assert!(spaces.len() <= 256, "At most 256 spaces supported");
        for (i, space) in spaces.iter().enumerate() {
            assert_eq!(space.number as usize, i, "Space {} listed out of order", space.name);
        }
        Self { spaces }
    }

    /// The classic 40-space board.
    pub fn classic() -> Self {
        use PropertyGroup::*;

        Self::new(vec![
            Space::new(0, "Go", Go),
            Space::street(1, "Mediterranean Avenue", Brown, 60, 2),
            Space::new(2, "Community Chest", Chest),
            Space::street(3, "Baltic Avenue", Brown, 60, 4),
            Space::tax(4, "Income Tax", 200),
            Space::railroad(5, "Reading Railroad", 200),
            Space::street(6, "Oriental Avenue", LightBlue, 100, 6),
            Space::new(7, "Chance", Chance),
            Space::street(8, "Vermont Avenue", LightBlue, 100, 6),
            Space::street(9, "Connecticut Avenue", LightBlue, 120, 8),
            Space::new(10, "Jail", JailVisiting),
            Space::street(11, "St. Charles Place", Pink, 140, 10),
            Space::utility(12, "Electric Company", 150),
            Space::street(13, "States Avenue", Pink, 140, 10),
            Space::street(14, "Virginia Avenue", Pink, 160, 12),
            Space::railroad(15, "Pennsylvania Railroad", 200),
            Space::street(16, "St. James Place", Orange, 180, 14),
            Space::new(17, "Community Chest", Chest),
            Space::street(18, "Tennessee Avenue", Orange, 180, 14),
            Space::street(19, "New York Avenue", Orange, 200, 16),
            Space::new(20, "Free Parking", FreeParking),
            Space::street(21, "Kentucky Avenue", Red, 220, 18),
            Space::new(22, "Chance", Chance),
            Space::street(23, "Indiana Avenue", Red, 220, 18),
            Space::street(24, "Illinois Avenue", Red, 240, 20),
            Space::railroad(25, "B. & O. Railroad", 200),
            Space::street(26, "Atlantic Avenue", Yellow, 260, 22),
            Space::street(27, "Ventnor Avenue", Yellow, 260, 22),
            Space::utility(28, "Water Works", 150),
            Space::street(29, "Marvin Gardens", Yellow, 280, 24),
            Space::new(30, "Go To Jail", Jail),
            Space::street(31, "Pacific Avenue", Green, 300, 26),
            Space::street(32, "North Carolina Avenue", Green, 300, 26),
            Space::new(33, "Community Chest", Chest),
            Space::street(34, "Pennsylvania Avenue", Green, 320, 28),
            Space::railroad(35, "Short Line", 200),
            Space::new(36, "Chance", Chance),
            Space::street(37, "Park Place", DarkBlue, 350, 35),
            Space::tax(38, "Luxury Tax", 100),
            Space::street(39, "Boardwalk", DarkBlue, 400, 50),
        ])
    }

    /// Number of spaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Look up a space by number.
    pub fn space(&self, number: u8) -> RulesResult<&Space> {
        self.spaces
            .get(number as usize)
            .ok_or(RulesError::UnknownSpace(number))
    }

    /// The location of a space.
    pub fn location(&self, number: u8) -> RulesResult<Location> {
        self.space(number).map(Space::location)
    }

    /// The space `distance` steps forward from `from`, and whether Go was passed.
    #[must_use]
    pub fn advance(&self, from: u8, distance: u8) -> (u8, bool) {
        let target = from as usize + distance as usize;
        ((target % self.len()) as u8, target >= self.len())
    }

    /// The space `distance` steps backwards from `from`.
    #[must_use]
    pub fn retreat(&self, from: u8, distance: u8) -> u8 {
        let len = self.len();
        ((from as usize + len - distance as usize % len) % len) as u8
    }

    /// Iterate over the spaces of a group in board order.
    pub fn group(&self, group: PropertyGroup) -> impl Iterator<Item = &Space> {
        self.spaces.iter().filter(move |s| s.group == group)
    }

    /// The first space of `group` strictly ahead of `from`, wrapping past Go.
    #[must_use]
    pub fn closest_ahead(&self, from: u8, group: PropertyGroup) -> Option<u8> {
        let len = self.len();
        (1..=len)
            .map(|step| ((from as usize + step) % len) as u8)
            .find(|&n| self.spaces[n as usize].group == group)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::classic()
    }
}
