//! Input collector driving a game session from presentation events.
//!
//! The collector subscribes to the input events of one rendered message and feeds them
//! into a [`GameSession`] one at a time, in arrival order. An idle timer measured from
//! the last accepted event ends the session with [`Outcome::TimedOut`]; so does the
//! event stream closing. Dropping the collector's stream on return releases the
//! subscription.

use std::time::Duration;

use futures_util::{stream::BoxStream, StreamExt};
use serenity::async_trait;
use tokio::time::Instant;

use crate::server::{
    error::AppError,
    game::{
        session::{GameSession, Handled},
        view::View,
        Game, Outcome,
    },
    i18n::{t, Text},
    model::actor::Actor,
    service::language::LanguageResolver,
};

/// A control press delivered by the presentation surface.
pub struct InputEvent<T> {
    /// Who pressed the control.
    pub actor: Actor,
    pub control_id: String,
    /// Handle used to acknowledge the press or reply to the presser.
    pub token: T,
}

/// Presentation layer a game session is rendered to.
///
/// Delivery failures are returned to the caller, which logs them and carries on;
/// the game state never depends on a message reaching the user.
#[async_trait]
pub trait Surface: Send + Sync {
    /// Handle to a rendered message.
    type Message: Send + Sync;
    /// Per-event handle for acknowledging and replying to one press.
    type Token: Send + Sync;

    /// Renders the first view of a session.
    async fn render(&self, view: View) -> Result<Self::Message, AppError>;

    /// Server the surface is shown in; `None` in direct messages.
    fn guild_id(&self) -> Option<u64>;

    /// Subscribes to control presses on a rendered message.
    fn subscribe(&self, message: &Self::Message) -> BoxStream<'static, InputEvent<Self::Token>>;

    /// Acknowledges a press so the platform does not report it as failed.
    async fn acknowledge(&self, token: &Self::Token) -> Result<(), AppError>;

    /// Replaces the contents of a rendered message.
    async fn update(&self, message: &Self::Message, view: View) -> Result<(), AppError>;

    /// Sends a notice only the presser can see.
    async fn notify(&self, token: &Self::Token, text: &str) -> Result<(), AppError>;
}

/// Runs the input loop of one session.
pub struct Collector<'a, S> {
    surface: &'a S,
    languages: &'a dyn LanguageResolver,
    idle: Duration,
}

impl<'a, S: Surface> Collector<'a, S> {
    pub fn new(surface: &'a S, languages: &'a dyn LanguageResolver, idle: Duration) -> Self {
        Self {
            surface,
            languages,
            idle,
        }
    }

    /// Processes events for `message` until the session ends.
    ///
    /// Every delivered event is acknowledged first. Presses from anyone but the owner
    /// get an ephemeral notice in the presser's language and leave the session and the
    /// idle timer untouched. Accepted presses re-render the message and re-arm the
    /// timer. The final render is left to the caller.
    ///
    /// # Arguments
    /// - `message` - Rendered message the session lives in
    /// - `session` - Active session to drive
    ///
    /// # Returns
    /// - `Outcome` - How the session ended
    pub async fn run<G: Game>(&self, message: &S::Message, session: &mut GameSession<G>) -> Outcome {
        let guild_id = self.surface.guild_id();
        let mut events = self.surface.subscribe(message);
        let timer = tokio::time::sleep(self.idle);
        tokio::pin!(timer);

        loop {
            tokio::select! {
                event = events.next() => {
                    let Some(event) = event else {
                        tracing::debug!("Input stream closed before the session ended");
                        return session.expire();
                    };

                    if let Err(e) = self.surface.acknowledge(&event.token).await {
                        tracing::debug!("Failed to acknowledge input: {}", e);
                    }

                    match session.handle(event.actor.id, &event.control_id) {
                        Handled::Finished(outcome) => return outcome,
                        Handled::Updated => {
                            timer.as_mut().reset(Instant::now() + self.idle);

                            let language = self
                                .languages
                                .resolve(session.owner().id, guild_id)
                                .await;
                            if let Err(e) = self.surface.update(message, session.view(language)).await {
                                tracing::debug!("Failed to update game message: {}", e);
                            }
                        }
                        Handled::Rejected => {
                            let language = self.languages.resolve(event.actor.id, guild_id).await;
                            let notice = t(language, Text::AuthorOnly);
                            if let Err(e) = self.surface.notify(&event.token, notice).await {
                                tracing::debug!("Failed to notify user {}: {}", event.actor.id, e);
                            }
                        }
                        Handled::Ignored | Handled::Closed => {
                            tracing::debug!("Ignoring control '{}'", event.control_id);
                        }
                    }
                }
                _ = &mut timer => {
                    return session.expire();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{
        game::{
            fake::{Call, FakeSurface},
            hangman::{words::Theme, Hangman},
            Status,
        },
        i18n::Language,
        service::language::LanguageStore,
    };

    const OWNER: u64 = 1;
    const STRANGER: u64 = 2;
    const IDLE: Duration = Duration::from_secs(60);

    fn session(word: &str) -> GameSession<Hangman> {
        GameSession::new(Actor::new(OWNER, "owner"), Hangman::new(Theme::Animals, word))
    }

    /// Tests a session that never receives input.
    ///
    /// Expected: TimedOut after exactly the idle window, subscription released
    #[tokio::test(start_paused = true)]
    async fn times_out_without_input() {
        let (surface, sender) = FakeSurface::new();
        let languages = LanguageStore::new(Language::English);
        let collector = Collector::new(&surface, &languages, IDLE);
        let mut session = session("OWL");
        let started = Instant::now();

        let outcome = collector.run(&0, &mut session).await;

        assert_eq!(outcome, Outcome::TimedOut);
        assert_eq!(started.elapsed(), IDLE);
        assert_eq!(session.status(), Status::Over(Outcome::TimedOut));
        assert!(sender.send(FakeSurface::press(OWNER, "hangman:letter:O")).is_err());
        assert!(surface.calls().is_empty());
    }

    /// Tests that an accepted event re-arms the idle timer.
    ///
    /// Expected: timeout one full window after the last accepted event
    #[tokio::test(start_paused = true)]
    async fn accepted_event_resets_idle_timer() {
        let (surface, sender) = FakeSurface::new();
        let languages = LanguageStore::new(Language::English);
        let collector = Collector::new(&surface, &languages, IDLE);
        let mut session = session("OWL");
        let started = Instant::now();

        let (outcome, _) = tokio::join!(collector.run(&0, &mut session), async {
            tokio::time::sleep(Duration::from_secs(40)).await;
            sender
                .send(FakeSurface::press(OWNER, "hangman:page:1"))
                .ok();
        });

        assert_eq!(outcome, Outcome::TimedOut);
        assert_eq!(started.elapsed(), Duration::from_secs(100));
        let calls = surface.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], Call::Acknowledge(OWNER));
        assert!(matches!(
            &calls[1],
            Call::Update(view) if view.control("hangman:page:0").is_some()
        ));
    }

    /// Tests presses from someone other than the owner.
    ///
    /// Expected: state unchanged, notice only to the presser in their language,
    /// idle timer not re-armed
    #[tokio::test(start_paused = true)]
    async fn rejects_foreign_actor() {
        let (surface, sender) = FakeSurface::new();
        let languages = LanguageStore::new(Language::English);
        languages.set_user(STRANGER, Language::German).await;
        let collector = Collector::new(&surface, &languages, IDLE);
        let mut session = session("OWL");
        let started = Instant::now();

        let (outcome, _) = tokio::join!(collector.run(&0, &mut session), async {
            tokio::time::sleep(Duration::from_secs(40)).await;
            sender
                .send(FakeSurface::press(STRANGER, "hangman:letter:O"))
                .ok();
        });

        assert_eq!(outcome, Outcome::TimedOut);
        assert_eq!(started.elapsed(), IDLE);
        assert!(session.game().guesses().is_empty());
        assert_eq!(
            surface.calls(),
            vec![
                Call::Acknowledge(STRANGER),
                Call::Notify(
                    STRANGER,
                    t(Language::German, Text::AuthorOnly).to_string()
                ),
            ]
        );
    }

    /// Tests unknown controls from the owner.
    ///
    /// Expected: acknowledged but no update and no timer reset
    #[tokio::test(start_paused = true)]
    async fn ignored_event_does_not_reset_timer() {
        let (surface, sender) = FakeSurface::new();
        let languages = LanguageStore::new(Language::English);
        let collector = Collector::new(&surface, &languages, IDLE);
        let mut session = session("OWL");
        let started = Instant::now();

        let (outcome, _) = tokio::join!(collector.run(&0, &mut session), async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            sender.send(FakeSurface::press(OWNER, "hangman:bogus")).ok();
        });

        assert_eq!(outcome, Outcome::TimedOut);
        assert_eq!(started.elapsed(), IDLE);
        assert_eq!(surface.calls(), vec![Call::Acknowledge(OWNER)]);
    }

    /// Tests a game finished by input.
    ///
    /// Expected: outcome returned immediately, no update for the final event
    #[tokio::test(start_paused = true)]
    async fn returns_outcome_on_finish() {
        let (surface, sender) = FakeSurface::new();
        let languages = LanguageStore::new(Language::English);
        let collector = Collector::new(&surface, &languages, IDLE);
        let mut session = session("AB");
        let started = Instant::now();

        for letter in ["A", "B"] {
            sender
                .send(FakeSurface::press(OWNER, &format!("hangman:letter:{}", letter)))
                .ok();
        }

        let outcome = collector.run(&0, &mut session).await;

        assert_eq!(outcome, Outcome::Won);
        assert_eq!(started.elapsed(), Duration::ZERO);
        let updates = surface
            .calls()
            .into_iter()
            .filter(|call| matches!(call, Call::Update(_)))
            .count();
        assert_eq!(updates, 1);
    }

    /// Tests the surface closing the event stream.
    ///
    /// Expected: TimedOut without waiting for the idle window
    #[tokio::test(start_paused = true)]
    async fn closed_stream_times_out() {
        let (surface, sender) = FakeSurface::new();
        let languages = LanguageStore::new(Language::English);
        let collector = Collector::new(&surface, &languages, IDLE);
        let mut session = session("OWL");
        drop(sender);

        let outcome = collector.run(&0, &mut session).await;

        assert_eq!(outcome, Outcome::TimedOut);
        assert_eq!(session.outcome(), Some(Outcome::TimedOut));
    }

    /// Tests a surface that fails every acknowledge, update and notify.
    ///
    /// Expected: failures swallowed, game still resolved by its input
    #[tokio::test(start_paused = true)]
    async fn delivery_failures_do_not_affect_game() {
        let (surface, sender) = FakeSurface::new();
        let surface = surface.failing_delivery();
        let languages = LanguageStore::new(Language::English);
        let collector = Collector::new(&surface, &languages, IDLE);
        let mut session = session("OWL");

        sender.send(FakeSurface::press(OWNER, "hangman:letter:Q")).ok();
        sender.send(FakeSurface::press(STRANGER, "hangman:letter:X")).ok();
        for letter in ["O", "W", "L"] {
            sender
                .send(FakeSurface::press(OWNER, &format!("hangman:letter:{}", letter)))
                .ok();
        }

        let outcome = collector.run(&0, &mut session).await;

        assert_eq!(outcome, Outcome::Won);
        assert_eq!(session.game().damage(), 1);
        let calls = surface.calls();
        assert!(calls.contains(&Call::Notify(
            STRANGER,
            t(Language::English, Text::AuthorOnly).to_string()
        )));
        let updates = calls
            .iter()
            .filter(|call| matches!(call, Call::Update(_)))
            .count();
        assert_eq!(updates, 3);
    }

    /// Tests the notice to a presser without a language of their own.
    ///
    /// Expected: notice in the language of the server the game runs in
    #[tokio::test(start_paused = true)]
    async fn notice_uses_server_language() {
        const GUILD: u64 = 900;
        let (surface, sender) = FakeSurface::new();
        let surface = surface.in_guild(GUILD);
        let languages = LanguageStore::new(Language::English);
        languages.set_guild(GUILD, Language::German).await;
        let collector = Collector::new(&surface, &languages, IDLE);
        let mut session = session("OWL");

        sender
            .send(FakeSurface::press(STRANGER, "hangman:letter:O"))
            .ok();
        drop(sender);

        collector.run(&0, &mut session).await;

        assert!(surface.calls().contains(&Call::Notify(
            STRANGER,
            t(Language::German, Text::AuthorOnly).to_string()
        )));
    }
}
