//! Parlor Test Utils
//!
//! Provides shared testing utilities for the parlor bot: factories for the Serenity
//! objects the bot receives from Discord and for the Open Trivia DB payloads it
//! fetches.
//!
//! # Overview
//!
//! - **serenity**: Serenity model objects built from JSON, as Discord sends them
//! - **trivia**: Open Trivia DB response bodies
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{serenity::create_test_user, trivia::response_payload};
//!
//! #[test]
//! fn test_empty_response() {
//!     let body = response_payload(1, vec![]).to_string();
//!     let user = create_test_user(1, "moonman", None);
//!     // ...
//! }
//! ```

pub mod serenity;
pub mod trivia;
