//! The board: spaces, groups and locations.
//!
//! ## Key Types
//!
//! - `PropertyGroup`: classification of a space (colour group, Jail, Chance, ...)
//! - `Location`: where a player stands
//! - `Space`: static space data (price, rent, landing task)
//! - `Board`: the ring of spaces, with `Board::classic()` for the standard layout

pub mod space;
pub mod layout;

pub use space::{LandingTask, Location, PropertyGroup, Space};
pub use layout::Board;
