//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. The handler
//! logs the connection and registers the bot's slash commands, either on the
//! configured guild (instant, for development) or globally.

use serenity::all::{Command, Context, GuildId, Ready};

use crate::server::{bot::command, state::AppState};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Application state holding the optional registration guild
/// - `ctx` - Discord context for the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let commands = command::all();
    let registered = match state.discord_guild_id {
        Some(guild_id) => GuildId::new(guild_id).set_commands(&ctx.http, commands).await,
        None => Command::set_global_commands(&ctx.http, commands).await,
    };

    match (registered, state.discord_guild_id) {
        (Ok(commands), Some(guild_id)) => {
            tracing::info!(
                "Registered {} slash commands on guild {}",
                commands.len(),
                guild_id
            );
        }
        (Ok(commands), None) => {
            tracing::info!("Registered {} global slash commands", commands.len());
        }
        (Err(e), _) => {
            tracing::error!("Failed to register slash commands: {}", e);
        }
    }
}
