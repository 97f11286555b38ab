//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs for
//! testing purposes. These factories create valid Serenity objects by deserializing
//! JSON, simulating what Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_user;
//!
//! #[test]
//! fn test_actor_conversion() {
//!     let user = create_test_user(123456789, "moonman", None);
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects

pub mod user;

pub use user::create_test_user;
