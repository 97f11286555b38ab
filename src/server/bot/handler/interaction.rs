//! Interaction handler dispatching slash commands.
//!
//! Button presses are not handled here; each running game collects the presses on
//! its own message.

use serenity::all::{Context, Interaction};

use crate::server::{
    bot::command::{
        caller_language, followup_ephemeral, hangman, language, reply_ephemeral, trivia,
    },
    i18n::{t, Text},
    state::AppState,
};

/// Runs the slash command behind an interaction.
///
/// Errors are logged and reported to the caller with a generic ephemeral message.
pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    tracing::debug!(
        "Command /{} invoked by {}",
        command.data.name,
        command.user.id
    );

    let result = match command.data.name.as_str() {
        hangman::NAME => hangman::run(state, &ctx, &command).await,
        trivia::NAME => trivia::run(state, &ctx, &command).await,
        language::NAME => language::run(state, &ctx, &command).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            return;
        }
    };

    let Err(e) = result else {
        return;
    };
    tracing::error!("Command /{} failed: {}", command.data.name, e);

    let lang = caller_language(state, &command).await;
    let text = t(lang, Text::CommandError);
    if reply_ephemeral(&ctx, &command, text).await.is_err() {
        if let Err(e) = followup_ephemeral(&ctx, &command, text).await {
            tracing::debug!("Failed to report command error: {}", e);
        }
    }
}
