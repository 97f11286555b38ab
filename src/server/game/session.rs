//! Ownership and terminal-state gate around a game.

use crate::server::{
    game::{view::View, Game, Outcome, Status, Step},
    i18n::Language,
    model::actor::Actor,
};

/// What happened to an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// The session is already over; the event was dropped.
    Closed,
    /// The event came from someone other than the owner.
    Rejected,
    /// The owner pressed a control the game does not know.
    Ignored,
    /// The event was accepted and the session is still active.
    Updated,
    /// The event was accepted and ended the session.
    Finished(Outcome),
}

/// One play-through of a game, owned by the user who started it.
pub struct GameSession<G> {
    owner: Actor,
    game: G,
    status: Status,
}

impl<G: Game> GameSession<G> {
    pub fn new(owner: Actor, game: G) -> Self {
        Self {
            owner,
            game,
            status: Status::Active,
        }
    }

    pub fn owner(&self) -> &Actor {
        &self.owner
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            Status::Active => None,
            Status::Over(outcome) => Some(outcome),
        }
    }

    /// Applies an input event from `actor_id`.
    ///
    /// Finished sessions drop every event, and only the owner may mutate an
    /// active session.
    pub fn handle(&mut self, actor_id: u64, control_id: &str) -> Handled {
        if self.status.is_over() {
            return Handled::Closed;
        }
        if actor_id != self.owner.id {
            return Handled::Rejected;
        }

        match self.game.apply(control_id) {
            Step::Ignored => Handled::Ignored,
            Step::Updated => Handled::Updated,
            Step::Won => self.finish(Outcome::Won),
            Step::Lost => self.finish(Outcome::Lost),
            Step::Cancelled => self.finish(Outcome::Cancelled),
        }
    }

    /// Ends an active session because the idle window elapsed.
    ///
    /// Returns the existing outcome unchanged if the session already ended.
    pub fn expire(&mut self) -> Outcome {
        match self.status {
            Status::Over(outcome) => outcome,
            Status::Active => {
                self.status = Status::Over(Outcome::TimedOut);
                Outcome::TimedOut
            }
        }
    }

    /// Renders the session with the owner as embed author.
    pub fn view(&self, language: Language) -> View {
        self.game
            .render(self.status, language)
            .author(self.owner.clone())
    }

    fn finish(&mut self, outcome: Outcome) -> Handled {
        self.status = Status::Over(outcome);
        Handled::Finished(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::game::hangman::{words::Theme, Hangman};

    const OWNER: u64 = 1;
    const STRANGER: u64 = 2;

    fn session(word: &str) -> GameSession<Hangman> {
        GameSession::new(Actor::new(OWNER, "owner"), Hangman::new(Theme::Animals, word))
    }

    /// Tests that presses from someone other than the owner are rejected.
    ///
    /// Expected: Rejected, no guess recorded, no damage
    #[test]
    fn rejects_non_owner_without_mutation() {
        let mut session = session("OWL");

        let handled = session.handle(STRANGER, "hangman:letter:Q");

        assert_eq!(handled, Handled::Rejected);
        assert!(session.game().guesses().is_empty());
        assert_eq!(session.game().damage(), 0);
        assert_eq!(session.status(), Status::Active);
    }

    /// Tests that a finished session refuses every further event.
    ///
    /// Expected: Closed for the owner and strangers, state frozen
    #[test]
    fn terminal_session_refuses_events() {
        let mut session = session("AB");
        session.handle(OWNER, "hangman:letter:A");
        assert_eq!(
            session.handle(OWNER, "hangman:letter:B"),
            Handled::Finished(Outcome::Won)
        );

        assert_eq!(session.handle(OWNER, "hangman:letter:C"), Handled::Closed);
        assert_eq!(session.handle(STRANGER, "hangman:letter:C"), Handled::Closed);
        assert_eq!(session.handle(OWNER, "hangman:stop"), Handled::Closed);
        assert_eq!(session.game().guesses(), &['A', 'B']);
        assert_eq!(session.game().damage(), 0);
        assert_eq!(session.outcome(), Some(Outcome::Won));
    }

    /// Tests the stop control.
    ///
    /// Expected: Cancelled, distinct from a timeout
    #[test]
    fn stop_cancels_session() {
        let mut session = session("OWL");

        assert_eq!(
            session.handle(OWNER, "hangman:stop"),
            Handled::Finished(Outcome::Cancelled)
        );
        assert_eq!(session.expire(), Outcome::Cancelled);
    }

    /// Tests expiring an active session.
    ///
    /// Expected: TimedOut, then Closed for late events
    #[test]
    fn expire_times_out_active_session() {
        let mut session = session("OWL");

        assert_eq!(session.expire(), Outcome::TimedOut);
        assert_eq!(session.handle(OWNER, "hangman:letter:O"), Handled::Closed);
        assert!(session.game().guesses().is_empty());
    }

    /// Tests unknown controls from the owner.
    ///
    /// Expected: Ignored, session still active
    #[test]
    fn unknown_control_is_ignored() {
        let mut session = session("OWL");

        let handled = session.handle(OWNER, "trivia:answer:0");

        assert_eq!(handled, Handled::Ignored);
        assert_eq!(session.status(), Status::Active);
    }

    /// Tests that the rendered view names the owner as author.
    ///
    /// Expected: author equals owner
    #[test]
    fn view_carries_owner() {
        let session = session("OWL");

        let view = session.view(Language::English);

        assert_eq!(view.author, Some(Actor::new(OWNER, "owner")));
    }
}
