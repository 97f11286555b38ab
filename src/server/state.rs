//! Application state shared across all command handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies the bot needs while handling interactions. The state is initialized
//! once during startup and handed to the Discord event handler.
//!
//! The state includes:
//! - Question source for trivia games
//! - Per-user language preferences
//! - Game timing settings

use std::sync::Arc;
use std::time::Duration;

use crate::server::{
    game::trivia::source::QuestionSource,
    service::{game::GameService, language::LanguageStore},
};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `Arc<dyn QuestionSource>` is a reference-counted pointer
/// - `LanguageStore` shares its maps through `Arc`s
#[derive(Clone)]
pub struct AppState {
    /// Source of trivia questions, backed by the shared reqwest client.
    pub questions: Arc<dyn QuestionSource>,

    /// Language each user has chosen for bot replies.
    pub languages: LanguageStore,

    /// How long a game waits for input before it times out.
    pub idle_timeout: Duration,

    /// Guild slash commands are registered on; global registration when `None`.
    pub discord_guild_id: Option<u64>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `questions` - Trivia question source
    /// - `languages` - Language preference store
    /// - `idle_timeout` - Idle window of a game session
    /// - `discord_guild_id` - Guild for command registration, if any
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        questions: Arc<dyn QuestionSource>,
        languages: LanguageStore,
        idle_timeout: Duration,
        discord_guild_id: Option<u64>,
    ) -> Self {
        Self {
            questions,
            languages,
            idle_timeout,
            discord_guild_id,
        }
    }

    /// Game service borrowing this state's resources.
    pub fn game_service(&self) -> GameService<'_> {
        GameService::new(self.questions.as_ref(), &self.languages, self.idle_timeout)
    }
}
