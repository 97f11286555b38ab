//! Identity of a user acting on a game session.

use serenity::all::User;

/// A Discord user as seen by the game engine.
///
/// Carries just enough to compare ownership and to render the embed author line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// Discord user ID.
    pub id: u64,
    /// Global display name, falling back to the username.
    pub name: String,
    /// Avatar URL used as the embed author icon.
    pub avatar_url: Option<String>,
}

impl Actor {
    /// Creates an actor without an avatar.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            avatar_url: None,
        }
    }

    /// Converts a Serenity user at the Discord boundary.
    ///
    /// # Arguments
    /// - `user` - The user who triggered the interaction
    ///
    /// # Returns
    /// - `Actor` - Identity with display name and avatar (default avatar if unset)
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.get(),
            name: user.display_name().to_string(),
            avatar_url: Some(user.face()),
        }
    }
}
