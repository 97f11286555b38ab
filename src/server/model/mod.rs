//! Domain models shared between the Discord boundary and the game engine.

pub mod actor;
