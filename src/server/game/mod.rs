//! Turn-based game session engine.
//!
//! A game is a value implementing [`Game`]: a pure transition function over control
//! presses plus a pure renderer. [`session::GameSession`] wraps a game with its owner
//! and terminal status and is the only place ownership and finality are enforced.
//! [`collector::Collector`] drives a session from a stream of input events with an
//! idle timeout.
//!
//! - `hangman` - guess a themed word letter by letter
//! - `trivia` - answer a single Open Trivia DB question

pub mod collector;
#[cfg(test)]
pub mod fake;
pub mod hangman;
pub mod session;
pub mod trivia;
pub mod view;

use crate::server::{game::view::View, i18n::Language};

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
    /// No accepted input arrived within the idle window.
    TimedOut,
    /// The owner pressed the stop control.
    Cancelled,
}

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Over(Outcome),
}

impl Status {
    pub fn is_over(self) -> bool {
        matches!(self, Status::Over(_))
    }
}

/// Result of applying one control press to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The control does not exist for this game; nothing changed.
    Ignored,
    /// The press was accepted and the game is still running.
    Updated,
    Won,
    Lost,
    Cancelled,
}

/// A single-player game driven by control presses.
///
/// Implementations never see presses from non-owners or presses after the game
/// ended; `GameSession` filters those out.
pub trait Game: Send {
    /// Applies a control press from the owner.
    fn apply(&mut self, control_id: &str) -> Step;

    /// Renders the game for the given status.
    ///
    /// While `status` is `Active` the view must not reveal the answer.
    fn render(&self, status: Status, language: Language) -> View;
}
