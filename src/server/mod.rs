//! Discord game bot backend.
//!
//! This module contains the complete bot implementation: the turn-based game engine,
//! the services orchestrating it and the Discord integration presenting it. The bot
//! uses Serenity for the Discord gateway and interactions and reqwest for the Open
//! Trivia DB API.
//!
//! # Architecture
//!
//! The bot follows a layered architecture with clear separation of concerns:
//!
//! - **Bot Layer** (`bot/`) - Gateway connection, slash command registration and dispatch
//! - **Service Layer** (`service/`) - Starting and playing games, language preferences,
//!   the Discord presentation surface
//! - **Game Layer** (`game/`) - Pure game state machines, session ownership and the
//!   input collector
//! - **Model Layer** (`model/`) - Domain models shared across layers
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (question source, language store)
//! - **Startup** (`startup`) - Initialization of tracing, HTTP client and state
//! - **Localization** (`i18n`) - Display languages and the string catalog
//!
//! # Command Flow
//!
//! 1. **Bot** receives a slash command interaction and routes it to its command handler
//! 2. **Command** parses options and defers the response
//! 3. **Service** creates the session and renders its first view
//! 4. **Collector** feeds button presses into the session until it ends
//! 5. **Service** renders the outcome

pub mod bot;
pub mod config;
pub mod error;
pub mod game;
pub mod i18n;
pub mod model;
pub mod service;
pub mod startup;
pub mod state;
