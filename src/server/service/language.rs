//! Per-user and per-server display language preferences.
//!
//! This module provides the `LanguageStore` which keeps the languages chosen by users
//! and by servers in memory and resolves the language replies to a user should be
//! rendered in. A user's own choice wins over the choice of the server they are in;
//! without either the configured default applies.

use std::collections::HashMap;
use std::sync::Arc;

use serenity::async_trait;
use tokio::sync::RwLock;

use crate::server::i18n::Language;

/// Resolves the display language of a user.
///
/// Called every time text is rendered for a user so a language change takes effect
/// on the next render of any running game.
#[async_trait]
pub trait LanguageResolver: Send + Sync {
    /// # Arguments
    /// - `actor_id` - Discord user ID of the reader
    /// - `guild_id` - Server the text is shown in; `None` in direct messages
    async fn resolve(&self, actor_id: u64, guild_id: Option<u64>) -> Language;
}

/// In-memory language preferences keyed by Discord user and guild ids.
///
/// Cheap to clone; clones share the same underlying maps.
#[derive(Clone)]
pub struct LanguageStore {
    users: Arc<RwLock<HashMap<u64, Language>>>,
    guilds: Arc<RwLock<HashMap<u64, Language>>>,
    default: Language,
}

impl LanguageStore {
    /// Creates an empty store.
    ///
    /// # Arguments
    /// - `default` - Language used when neither the user nor the server chose one
    pub fn new(default: Language) -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            guilds: Arc::new(RwLock::new(HashMap::new())),
            default,
        }
    }

    /// Stores the language for a user, replacing any previous choice.
    pub async fn set_user(&self, user_id: u64, language: Language) {
        self.users.write().await.insert(user_id, language);
    }

    /// Returns the stored preference of a user, if any.
    pub async fn user(&self, user_id: u64) -> Option<Language> {
        self.users.read().await.get(&user_id).copied()
    }

    /// Stores the language for a server, replacing any previous choice.
    pub async fn set_guild(&self, guild_id: u64, language: Language) {
        self.guilds.write().await.insert(guild_id, language);
    }

    /// Returns the stored preference of a server, if any.
    pub async fn guild(&self, guild_id: u64) -> Option<Language> {
        self.guilds.read().await.get(&guild_id).copied()
    }

    /// Returns the language in effect for a server, falling back to the default.
    pub async fn guild_language(&self, guild_id: u64) -> Language {
        self.guild(guild_id).await.unwrap_or(self.default)
    }
}

#[async_trait]
impl LanguageResolver for LanguageStore {
    async fn resolve(&self, actor_id: u64, guild_id: Option<u64>) -> Language {
        if let Some(language) = self.user(actor_id).await {
            return language;
        }

        match guild_id {
            Some(guild_id) => self.guild_language(guild_id).await,
            None => self.default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GUILD: u64 = 900;

    /// Tests resolving a user without any stored preference.
    ///
    /// Expected: configured default, inside and outside a server
    #[tokio::test]
    async fn resolves_default_for_unknown_user() {
        let store = LanguageStore::new(Language::German);

        assert_eq!(store.user(1).await, None);
        assert_eq!(store.resolve(1, None).await, Language::German);
        assert_eq!(store.resolve(1, Some(GUILD)).await, Language::German);
    }

    /// Tests storing and replacing a user preference.
    ///
    /// Expected: latest choice wins, other users unaffected
    #[tokio::test]
    async fn stores_latest_choice() {
        let store = LanguageStore::new(Language::English);

        store.set_user(1, Language::German).await;
        assert_eq!(store.resolve(1, None).await, Language::German);

        store.set_user(1, Language::English).await;
        assert_eq!(store.resolve(1, None).await, Language::English);
        assert_eq!(store.user(2).await, None);
    }

    /// Tests a server preference for users without their own choice.
    ///
    /// Expected: server language inside that server only
    #[tokio::test]
    async fn falls_back_to_server_language() {
        let store = LanguageStore::new(Language::English);
        store.set_guild(GUILD, Language::German).await;

        assert_eq!(store.resolve(1, Some(GUILD)).await, Language::German);
        assert_eq!(store.resolve(1, Some(GUILD + 1)).await, Language::English);
        assert_eq!(store.resolve(1, None).await, Language::English);
        assert_eq!(store.guild_language(GUILD).await, Language::German);
    }

    /// Tests a user preference inside a server with its own preference.
    ///
    /// Expected: the user's choice wins
    #[tokio::test]
    async fn user_choice_beats_server_choice() {
        let store = LanguageStore::new(Language::English);
        store.set_guild(GUILD, Language::German).await;
        store.set_user(1, Language::English).await;

        assert_eq!(store.resolve(1, Some(GUILD)).await, Language::English);
    }

    /// Tests that clones share preferences.
    ///
    /// Expected: a change through one clone is visible through the other
    #[tokio::test]
    async fn clones_share_state() {
        let store = LanguageStore::new(Language::English);
        let clone = store.clone();

        clone.set_user(7, Language::German).await;
        clone.set_guild(GUILD, Language::German).await;

        assert_eq!(store.resolve(7, None).await, Language::German);
        assert_eq!(store.guild(GUILD).await, Some(Language::German));
    }
}
