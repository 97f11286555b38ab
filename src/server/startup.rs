use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, game::trivia::source::OpenTdbSource,
    service::language::LanguageStore, state::AppState,
};

/// Installs the global tracing subscriber.
///
/// Log levels come from `RUST_LOG`, defaulting to `info` when unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds the HTTP client used for trivia API requests.
///
/// Redirects are not followed and requests time out after 10 seconds.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured HTTP client
/// - `Err(AppError::ReqwestErr)` - TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(10))
        .build()?;

    Ok(client)
}

/// Builds the shared application state from configuration.
///
/// # Arguments
/// - `config` - Loaded application configuration
/// - `http_client` - HTTP client shared by outgoing API requests
///
/// # Returns
/// - `AppState` - State ready to hand to the bot
pub fn build_state(config: &Config, http_client: reqwest::Client) -> AppState {
    let questions = OpenTdbSource::new(http_client, config.trivia_api_url.clone());

    AppState::new(
        Arc::new(questions),
        LanguageStore::new(config.default_language),
        config.idle_timeout,
        config.discord_guild_id,
    )
}
