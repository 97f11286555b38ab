//! Service layer between the Discord bot and the game engine.
//!
//! Services orchestrate everything a command needs besides parsing its options:
//!
//! - **Games** (`game`) - Starting hangman and trivia sessions and playing them to the end
//! - **Languages** (`language`) - Per-user display language preferences
//! - **Discord** (`discord`) - The Discord presentation surface games are rendered to

pub mod discord;
pub mod game;
pub mod language;
