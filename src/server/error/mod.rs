//! Error types for the bot.
//!
//! `AppError` is the top-level error type returned by startup, command handlers and
//! the presentation surface. It wraps the domain-specific errors (`ConfigError`,
//! `GameError`, `InternalError`) and the errors of the external crates the bot talks
//! through (Serenity for Discord, reqwest for HTTP).

pub mod config;
pub mod game;
pub mod internal;

use thiserror::Error;

use crate::server::error::{config::ConfigError, game::GameError, internal::InternalError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion with `?`. None of these
/// errors are fatal once the bot is running: command handlers log them and the
/// game engine degrades to "no game" or "ended game".
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// The only error that stops the process, since the bot cannot connect
    /// without a valid configuration.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// A game could not be started.
    ///
    /// Raised when the question source is unreachable or returns a payload the
    /// engine cannot use. The caller renders an error message instead of a game.
    #[error(transparent)]
    GameErr(#[from] GameError),

    /// Unexpected internal state, such as a slash command missing a required option or
    /// carrying a value outside its registered choices.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Raised when sending, editing or acknowledging
    /// messages fails.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
