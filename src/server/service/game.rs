//! Game service for starting and playing sessions.
//!
//! This module provides the `GameService` which creates hangman and trivia sessions and
//! plays them to completion on a presentation surface: render the first view, collect
//! input until the session ends and render the outcome.

use std::time::Duration;

use crate::server::{
    error::{game::GameError, AppError},
    game::{
        collector::{Collector, Surface},
        hangman::{words::Theme, Hangman},
        session::GameSession,
        trivia::{
            source::{QuestionQuery, QuestionSource},
            Trivia,
        },
        Game, Outcome,
    },
    model::actor::Actor,
    service::language::LanguageResolver,
};

pub struct GameService<'a> {
    questions: &'a dyn QuestionSource,
    languages: &'a dyn LanguageResolver,
    idle_timeout: Duration,
}

impl<'a> GameService<'a> {
    /// Creates a new GameService.
    ///
    /// # Arguments
    /// - `questions` - Source for trivia questions
    /// - `languages` - Resolves the language each user sees
    /// - `idle_timeout` - How long a session waits for input before timing out
    pub fn new(
        questions: &'a dyn QuestionSource,
        languages: &'a dyn LanguageResolver,
        idle_timeout: Duration,
    ) -> Self {
        Self {
            questions,
            languages,
            idle_timeout,
        }
    }

    /// Starts a hangman session with a random word from `theme`.
    pub fn start_hangman(&self, owner: Actor, theme: Theme) -> GameSession<Hangman> {
        let game = Hangman::random(theme, &mut rand::rng());
        GameSession::new(owner, game)
    }

    /// Starts a trivia session with a freshly fetched question.
    ///
    /// # Arguments
    /// - `owner` - User who started the game
    /// - `query` - Question type, difficulty and optional category
    ///
    /// # Returns
    /// - `Ok(GameSession<Trivia>)` - Session ready to play
    /// - `Err(GameError)` - No question could be fetched; no session exists
    pub async fn start_trivia(
        &self,
        owner: Actor,
        query: QuestionQuery,
    ) -> Result<GameSession<Trivia>, GameError> {
        let question = self.questions.fetch(&query).await?;
        let game = Trivia::new(question, &mut rand::rng());
        Ok(GameSession::new(owner, game))
    }

    /// Plays a session to completion on `surface`.
    ///
    /// Renders the initial view, runs the input collector and renders the final
    /// view. Text is rendered in the owner's language within the surface's server, resolved again for every
    /// render so a language change applies mid-game.
    ///
    /// # Returns
    /// - `Ok(Outcome)` - How the session ended
    /// - `Err(AppError)` - The initial view could not be delivered; the session
    ///   never started
    pub async fn play<S: Surface, G: Game>(
        &self,
        surface: &S,
        mut session: GameSession<G>,
    ) -> Result<Outcome, AppError> {
        let owner_id = session.owner().id;
        let guild_id = surface.guild_id();

        let language = self.languages.resolve(owner_id, guild_id).await;
        let message = surface.render(session.view(language)).await?;

        let outcome = Collector::new(surface, self.languages, self.idle_timeout)
            .run(&message, &mut session)
            .await;

        let language = self.languages.resolve(owner_id, guild_id).await;
        if let Err(e) = surface.update(&message, session.view(language)).await {
            tracing::debug!("Failed to render final game state: {}", e);
        }

        tracing::debug!("Game of user {} ended: {:?}", owner_id, outcome);

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{
        game::{
            fake::{Call, FakeSurface, FixedQuestions},
            hangman::words,
            trivia::source::{Difficulty, Question, TriviaMode},
            view::{ControlStyle, COLOR_LOST, COLOR_WON},
        },
        i18n::Language,
        service::language::LanguageStore,
    };

    const OWNER: u64 = 10;
    const IDLE: Duration = Duration::from_secs(60);

    fn boolean_question() -> Question {
        Question {
            mode: TriviaMode::Boolean,
            difficulty: Difficulty::Easy,
            category: "Science: Computers".to_string(),
            question: "Linux was first released in 1991.".to_string(),
            correct_answer: "True".to_string(),
            incorrect_answers: vec!["False".to_string()],
        }
    }

    fn query() -> QuestionQuery {
        QuestionQuery {
            mode: TriviaMode::Boolean,
            difficulty: Difficulty::Easy,
            category: Some(18),
        }
    }

    /// Tests starting a hangman game.
    ///
    /// Expected: active session owned by the caller with a word from the theme
    #[test]
    fn starts_hangman_from_theme() {
        let questions = FixedQuestions::failing();
        let languages = LanguageStore::new(Language::English);
        let service = GameService::new(&questions, &languages, IDLE);

        let session = service.start_hangman(Actor::new(OWNER, "owner"), Theme::Sports);

        assert_eq!(session.owner().id, OWNER);
        assert!(session.outcome().is_none());
        assert!(words::words_for(Theme::Sports)
            .iter()
            .any(|word| word.to_uppercase() == session.game().word()));
    }

    /// Tests starting trivia when the source fails.
    ///
    /// Expected: GameError and no session
    #[tokio::test]
    async fn trivia_fetch_failure_starts_nothing() {
        let questions = FixedQuestions::failing();
        let languages = LanguageStore::new(Language::English);
        let service = GameService::new(&questions, &languages, IDLE);

        let result = service.start_trivia(Actor::new(OWNER, "owner"), query()).await;

        assert!(matches!(result, Err(GameError::MalformedQuestion(_))));
        assert_eq!(questions.queries(), vec![query()]);
    }

    /// Tests playing a boolean trivia question answered wrongly.
    ///
    /// Expected: Lost, final render marks True success and False danger
    #[tokio::test(start_paused = true)]
    async fn plays_trivia_to_loss() {
        let questions = FixedQuestions::returning(boolean_question());
        let languages = LanguageStore::new(Language::English);
        let service = GameService::new(&questions, &languages, IDLE);
        let (surface, sender) = FakeSurface::new();
        let session = service
            .start_trivia(Actor::new(OWNER, "owner"), query())
            .await
            .unwrap();

        sender
            .send(FakeSurface::press(OWNER, "trivia:answer:1"))
            .unwrap();
        let outcome = service.play(&surface, session).await.unwrap();

        assert_eq!(outcome, Outcome::Lost);
        let calls = surface.calls();
        assert!(matches!(calls.first(), Some(Call::Render(_))));
        let Some(Call::Update(last)) = calls.last() else {
            panic!("expected a final update, got {:?}", calls.last());
        };
        assert_eq!(last.color, COLOR_LOST);
        assert_eq!(
            last.control("trivia:answer:0").map(|c| c.style),
            Some(ControlStyle::Success)
        );
        assert_eq!(
            last.control("trivia:answer:1").map(|c| c.style),
            Some(ControlStyle::Danger)
        );
    }

    /// Tests playing hangman to a win in the owner's language.
    ///
    /// Expected: Won, renders in German, final view without controls
    #[tokio::test(start_paused = true)]
    async fn plays_hangman_to_win() {
        let questions = FixedQuestions::failing();
        let languages = LanguageStore::new(Language::English);
        languages.set_user(OWNER, Language::German).await;
        let service = GameService::new(&questions, &languages, IDLE);
        let (surface, sender) = FakeSurface::new();
        let session = GameSession::new(
            Actor::new(OWNER, "owner"),
            Hangman::new(Theme::Animals, "cat"),
        );

        for letter in ['Q', 'C', 'A', 'T'] {
            sender
                .send(FakeSurface::press(OWNER, &format!("hangman:letter:{}", letter)))
                .unwrap();
        }
        let outcome = service.play(&surface, session).await.unwrap();

        assert_eq!(outcome, Outcome::Won);
        let calls = surface.calls();
        let Some(Call::Render(first)) = calls.first() else {
            panic!("expected an initial render");
        };
        assert_eq!(first.title, "Galgenmännchen");
        let Some(Call::Update(last)) = calls.last() else {
            panic!("expected a final update");
        };
        assert_eq!(last.color, COLOR_WON);
        assert!(last.rows.is_empty());
        assert_eq!(last.author, Some(Actor::new(OWNER, "owner")));
    }

    /// Tests a session nobody plays.
    ///
    /// Expected: TimedOut, the word revealed in the final render
    #[tokio::test(start_paused = true)]
    async fn plays_hangman_to_timeout() {
        let questions = FixedQuestions::failing();
        let languages = LanguageStore::new(Language::English);
        let service = GameService::new(&questions, &languages, IDLE);
        let (surface, _sender) = FakeSurface::new();
        let session = GameSession::new(
            Actor::new(OWNER, "owner"),
            Hangman::new(Theme::Animals, "owl"),
        );

        let outcome = service.play(&surface, session).await.unwrap();

        assert_eq!(outcome, Outcome::TimedOut);
        let Some(Call::Update(last)) = surface.calls().last().cloned() else {
            panic!("expected a final update");
        };
        assert!(last.visible_text().contains("**OWL**"));
    }

    /// Tests a game in a server whose language is German on a surface that fails
    /// every update.
    ///
    /// Expected: initial render in German, outcome still returned
    #[tokio::test(start_paused = true)]
    async fn plays_in_server_language_despite_failed_updates() {
        const GUILD: u64 = 900;
        let questions = FixedQuestions::failing();
        let languages = LanguageStore::new(Language::English);
        languages.set_guild(GUILD, Language::German).await;
        let service = GameService::new(&questions, &languages, IDLE);
        let (surface, sender) = FakeSurface::new();
        let surface = surface.in_guild(GUILD).failing_delivery();
        let session = GameSession::new(
            Actor::new(OWNER, "owner"),
            Hangman::new(Theme::Animals, "ox"),
        );

        for letter in ['O', 'X'] {
            sender
                .send(FakeSurface::press(OWNER, &format!("hangman:letter:{}", letter)))
                .unwrap();
        }
        let outcome = service.play(&surface, session).await.unwrap();

        assert_eq!(outcome, Outcome::Won);
        let calls = surface.calls();
        let Some(Call::Render(first)) = calls.first() else {
            panic!("expected an initial render");
        };
        assert_eq!(first.title, "Galgenmännchen");
        assert!(matches!(calls.last(), Some(Call::Update(last)) if last.color == COLOR_WON));
    }
}
