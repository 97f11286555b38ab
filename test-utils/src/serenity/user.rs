//! Test factory for creating Serenity User objects.
//!
//! Users are created by deserializing JSON, simulating what Discord's API would
//! return for the author of an interaction.

use serenity::all::User;

/// Creates a test Serenity User with customizable fields.
///
/// The user has no custom avatar, so `User::face` falls back to Discord's
/// default avatar URL. All other fields are set to defaults of a regular
/// (non-bot) account using the new username system.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Unique username
/// - `global_name` - Display name, if the user set one
///
/// # Returns
/// - `User` - A valid Serenity User struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::user::create_test_user;
///
/// let user = create_test_user(123456789, "moonman", Some("Moon Man"));
/// assert_eq!(user.display_name(), "Moon Man");
/// ```
pub fn create_test_user(user_id: u64, username: &str, global_name: Option<&str>) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": global_name,
        "avatar": null,
        "bot": false,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}
