//! Ready-made tables built on the engine.

pub mod classic;
