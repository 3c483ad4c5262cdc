//! Board spaces and the groups they belong to.

use serde::{Deserialize, Serialize};

/// Group every board space belongs to.
///
/// The engine classifies a player's location by group to decide whether
/// landing sends them to jail or draws a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyGroup {
    Brown,
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    DarkBlue,
    Railroad,
    Utility,
    Go,
    /// The jail cell and the "Go To Jail" space.
    Jail,
    /// The jail space for players who are only passing through.
    JailVisiting,
    FreeParking,
    Chance,
    Chest,
    Tax,
}

impl PropertyGroup {
    /// Whether this is one of the eight colour groups.
    #[must_use]
    pub fn is_street(self) -> bool {
        matches!(
            self,
            PropertyGroup::Brown
                | PropertyGroup::LightBlue
                | PropertyGroup::Pink
                | PropertyGroup::Orange
                | PropertyGroup::Red
                | PropertyGroup::Yellow
                | PropertyGroup::Green
                | PropertyGroup::DarkBlue
        )
    }
}

/// Where a player stands: a space number and the group it is classified in.
///
/// The jail cell and the Jail-Visiting space share a space number but are
/// different locations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub space: u8,
    pub group: PropertyGroup,
}

impl Location {
    #[must_use]
    pub const fn new(space: u8, group: PropertyGroup) -> Self {
        Self { space, group }
    }

    /// The Go space.
    #[must_use]
    pub const fn go() -> Self {
        Self::new(0, PropertyGroup::Go)
    }

    /// The jail cell on the given jail space.
    #[must_use]
    pub const fn jail_cell(jail_space: u8) -> Self {
        Self::new(jail_space, PropertyGroup::Jail)
    }

    /// Whether this is the jail cell or the "Go To Jail" space.
    #[must_use]
    pub fn is_jail(self) -> bool {
        self.group == PropertyGroup::Jail
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.space, self.group)
    }
}

/// Effect applied to whoever lands on a space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandingTask {
    /// Pay a fixed amount to the bank.
    Tax(u32),
}

/// Static data for one board space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub number: u8,
    pub name: String,
    pub group: PropertyGroup,
    /// Purchase price. `None` for spaces that cannot be bought.
    pub price: Option<u32>,
    /// Unimproved rent for streets. Railroad and utility rent is computed.
    pub rent: u32,
    pub landing: Option<LandingTask>,
}

impl Space {
    /// A space that cannot be owned.
    pub fn new(number: u8, name: impl Into<String>, group: PropertyGroup) -> Self {
        Self {
            number,
            name: name.into(),
            group,
            price: None,
            rent: 0,
            landing: None,
        }
    }

    /// A colour-group street.
    pub fn street(number: u8, name: impl Into<String>, group: PropertyGroup, price: u32, rent: u32) -> Self {
        Self {
            price: Some(price),
            rent,
            ..Self::new(number, name, group)
        }
    }

    /// A railroad. Rent depends on how many railroads the owner holds.
    pub fn railroad(number: u8, name: impl Into<String>, price: u32) -> Self {
        Self {
            price: Some(price),
            ..Self::new(number, name, PropertyGroup::Railroad)
        }
    }

    /// A utility. Rent is a multiple of the dice total.
    pub fn utility(number: u8, name: impl Into<String>, price: u32) -> Self {
        Self {
            price: Some(price),
            ..Self::new(number, name, PropertyGroup::Utility)
        }
    }

    /// A tax space.
    pub fn tax(number: u8, name: impl Into<String>, amount: u32) -> Self {
        Self {
            landing: Some(LandingTask::Tax(amount)),
            ..Self::new(number, name, PropertyGroup::Tax)
        }
    }

    /// The location of this space.
    #[must_use]
    pub fn location(&self) -> Location {
        Location::new(self.number, self.group)
    }

    #[must_use]
    pub fn is_purchasable(&self) -> bool {
        self.price.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jail_cell_is_not_visiting() {
        let cell = Location::jail_cell(10);
        let visiting = Location::new(10, PropertyGroup::JailVisiting);

        assert!(cell.is_jail());
        assert!(!visiting.is_jail());
        assert_ne!(cell, visiting);
    }

    #[test]
    fn test_space_constructors() {
        let street = Space::street(1, "Mediterranean Avenue", PropertyGroup::Brown, 60, 2);
        assert!(street.is_purchasable());
        assert!(street.group.is_street());

        let tax = Space::tax(4, "Income Tax", 200);
        assert!(!tax.is_purchasable());
        assert_eq!(tax.landing, Some(LandingTask::Tax(200)));

        let rail = Space::railroad(5, "Reading Railroad", 200);
        assert!(!rail.group.is_street());
        assert_eq!(rail.location(), Location::new(5, PropertyGroup::Railroad));

        let power = Space::utility(12, "Electric Company", 150);
        assert!(power.is_purchasable());
        assert_eq!(power.group, PropertyGroup::Utility);
    }
}
