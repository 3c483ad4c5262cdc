//! The turn engine.
//!
//! `TurnEngine` encodes the rules of a turn: doubles counting, the
//! triple-doubles-to-jail rule, the jail escape protocol and the sequencing
//! of movement, landing tasks, card draws and purchase/rent. Everything
//! else is delegated to collaborators passed in by the caller.

pub mod engine;
pub mod jail;
mod landing;

pub use engine::TurnEngine;
pub use jail::JailEscape;
