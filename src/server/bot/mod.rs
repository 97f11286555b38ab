//! Discord bot integration for the game commands.
//!
//! This module connects the bot to Discord's gateway, registers the `/hangman`,
//! `/trivia` and `/language` slash commands once the connection is ready and routes
//! incoming command interactions to their handlers. Every command runs inside the
//! task Serenity spawns for its interaction, so a game in progress never blocks
//! other commands.
//!
//! # Gateway Intents
//!
//! The bot requires only the `GUILDS` intent. Slash commands and button presses are
//! delivered as interactions regardless of intents.

pub mod command;
pub mod handler;
pub mod start;
