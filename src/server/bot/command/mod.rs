//! Slash command definitions and handlers.
//!
//! Each command module exposes its `NAME`, a `register` function building the command
//! definition sent to Discord and a `run` function executing an invocation.

pub mod hangman;
pub mod language;
pub mod trivia;

use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, ResolvedValue,
};

use crate::server::{
    error::{internal::InternalError, AppError},
    i18n::Language,
    service::language::LanguageResolver,
    state::AppState,
};

/// Definitions of every command the bot registers.
pub fn all() -> Vec<CreateCommand> {
    vec![hangman::register(), trivia::register(), language::register()]
}

/// Resolves the language replies to the invoking user are written in.
pub async fn caller_language(state: &AppState, command: &CommandInteraction) -> Language {
    state
        .languages
        .resolve(
            command.user.id.get(),
            command.guild_id.map(|guild_id| guild_id.get()),
        )
        .await
}

/// Reads a string option by name.
pub fn string_option<'a>(command: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    command
        .data
        .options()
        .into_iter()
        .find(|option| option.name == name)
        .and_then(|option| match option.value {
            ResolvedValue::String(value) => Some(value),
            _ => None,
        })
}

/// Reads an integer option by name.
pub fn integer_option(command: &CommandInteraction, name: &str) -> Option<i64> {
    command
        .data
        .options()
        .into_iter()
        .find(|option| option.name == name)
        .and_then(|option| match option.value {
            ResolvedValue::Integer(value) => Some(value),
            _ => None,
        })
}

/// Reads a string option Discord guarantees to be present.
///
/// # Returns
/// - `Ok(&str)` - Option value
/// - `Err(AppError::InternalErr)` - Option missing, the registered definition is out of date
pub fn required_string_option<'a>(
    command: &'a CommandInteraction,
    name: &str,
) -> Result<&'a str, AppError> {
    string_option(command, name).ok_or_else(|| {
        InternalError::MissingOption {
            command: command.data.name.clone(),
            option: name.to_string(),
        }
        .into()
    })
}

/// Sends an ephemeral text reply as the first response to a command.
pub async fn reply_ephemeral(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
) -> Result<(), AppError> {
    command
        .create_response(
            ctx,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(content)
                    .ephemeral(true),
            ),
        )
        .await?;
    Ok(())
}

/// Sends an ephemeral follow-up to a command that was already responded to.
pub async fn followup_ephemeral(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
) -> Result<(), AppError> {
    command
        .create_followup(
            ctx,
            CreateInteractionResponseFollowup::new()
                .content(content)
                .ephemeral(true),
        )
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the set of registered commands.
    ///
    /// Expected: hangman, trivia and language
    #[test]
    fn registers_every_command() {
        let names: Vec<String> = all()
            .into_iter()
            .map(|command| {
                serde_json::to_value(command).unwrap()["name"]
                    .as_str()
                    .unwrap_or_default()
                    .to_string()
            })
            .collect();

        assert_eq!(names, vec!["hangman", "trivia", "language"]);
    }
}
