use std::time::Duration;

use crate::server::{
    error::{config::ConfigError, AppError},
    i18n::Language,
};

const DEFAULT_TRIVIA_API_URL: &str = "https://opentdb.com/api.php";
const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 60;

pub struct Config {
    pub discord_bot_token: String,
    /// Guild to register slash commands on; global registration when unset.
    pub discord_guild_id: Option<u64>,

    pub trivia_api_url: String,

    pub idle_timeout: Duration,
    pub default_language: Language,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of an environment variable by name, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every value valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DISCORD_BOT_TOKEN` is not set
    /// - `Err(ConfigError::InvalidEnvVar)` - A variable is set to an unusable value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_bot_token = lookup("DISCORD_BOT_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;

        let discord_guild_id = match lookup("DISCORD_GUILD_ID") {
            Some(value) if !value.trim().is_empty() => Some(
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| invalid("DISCORD_GUILD_ID", &value, e.to_string()))?,
            ),
            _ => None,
        };

        let trivia_api_url =
            lookup("TRIVIA_API_URL").unwrap_or_else(|| DEFAULT_TRIVIA_API_URL.to_string());

        let idle_timeout_secs = match lookup("GAME_IDLE_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                Ok(_) => {
                    return Err(invalid(
                        "GAME_IDLE_TIMEOUT_SECS",
                        &value,
                        "must be greater than zero".to_string(),
                    ))
                }
                Err(e) => return Err(invalid("GAME_IDLE_TIMEOUT_SECS", &value, e.to_string())),
            },
            None => DEFAULT_IDLE_TIMEOUT_SECS,
        };

        let default_language = match lookup("DEFAULT_LANGUAGE") {
            Some(value) => Language::from_tag(&value).ok_or_else(|| {
                invalid(
                    "DEFAULT_LANGUAGE",
                    &value,
                    "unsupported language".to_string(),
                )
            })?,
            None => Language::default(),
        };

        Ok(Self {
            discord_bot_token,
            discord_guild_id,
            trivia_api_url,
            idle_timeout: Duration::from_secs(idle_timeout_secs),
            default_language,
        })
    }
}

fn invalid(name: &str, value: &str, reason: String) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason,
    }
}
