//! In-memory test doubles for the presentation surface and question source.

use std::sync::{Arc, Mutex};

use futures_util::{
    stream::{self, BoxStream},
    StreamExt,
};
use serenity::async_trait;
use tokio::sync::mpsc;

use crate::server::{
    error::{game::GameError, AppError},
    game::{
        collector::{InputEvent, Surface},
        trivia::source::{Question, QuestionQuery, QuestionSource},
        view::View,
    },
    model::actor::Actor,
};

/// Surface interaction recorded by [`FakeSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Render(View),
    Acknowledge(u64),
    Update(View),
    Notify(u64, String),
}

/// Channel-backed surface recording every call.
///
/// Messages are plain ids and the token of an event is the presser's id.
pub struct FakeSurface {
    events: Mutex<Option<mpsc::UnboundedReceiver<InputEvent<u64>>>>,
    calls: Arc<Mutex<Vec<Call>>>,
    guild_id: Option<u64>,
    failing: bool,
}

impl FakeSurface {
    pub fn new() -> (Self, mpsc::UnboundedSender<InputEvent<u64>>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let surface = Self {
            events: Mutex::new(Some(receiver)),
            calls: Arc::new(Mutex::new(Vec::new())),
            guild_id: None,
            failing: false,
        };
        (surface, sender)
    }

    /// Places the surface in a server.
    pub fn in_guild(mut self, guild_id: u64) -> Self {
        self.guild_id = Some(guild_id);
        self
    }

    /// Makes acknowledge, update and notify fail after recording the call.
    pub fn failing_delivery(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Builds a press of `control_id` by user `actor_id`.
    pub fn press(actor_id: u64, control_id: &str) -> InputEvent<u64> {
        InputEvent {
            actor: Actor::new(actor_id, format!("user{}", actor_id)),
            control_id: control_id.to_string(),
            token: actor_id,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn deliver(&self, call: Call) -> Result<(), AppError> {
        self.record(call);
        if self.failing {
            return Err(serenity::Error::Other("message could not be delivered").into());
        }
        Ok(())
    }
}

#[async_trait]
impl Surface for FakeSurface {
    type Message = u64;
    type Token = u64;

    async fn render(&self, view: View) -> Result<u64, AppError> {
        self.record(Call::Render(view));
        Ok(0)
    }

    fn guild_id(&self) -> Option<u64> {
        self.guild_id
    }

    fn subscribe(&self, _message: &u64) -> BoxStream<'static, InputEvent<u64>> {
        match self.events.lock().unwrap().take() {
            Some(receiver) => stream::unfold(receiver, |mut receiver| async move {
                receiver.recv().await.map(|event| (event, receiver))
            })
            .boxed(),
            None => stream::empty().boxed(),
        }
    }

    async fn acknowledge(&self, token: &u64) -> Result<(), AppError> {
        self.deliver(Call::Acknowledge(*token))
    }

    async fn update(&self, _message: &u64, view: View) -> Result<(), AppError> {
        self.deliver(Call::Update(view))
    }

    async fn notify(&self, token: &u64, text: &str) -> Result<(), AppError> {
        self.deliver(Call::Notify(*token, text.to_string()))
    }
}

/// Question source answering every query with the same result.
pub struct FixedQuestions {
    question: Option<Question>,
    queries: Mutex<Vec<QuestionQuery>>,
}

impl FixedQuestions {
    pub fn returning(question: Question) -> Self {
        Self {
            question: Some(question),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// A source that always fails as if the API answered with no results.
    pub fn failing() -> Self {
        Self {
            question: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<QuestionQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuestionSource for FixedQuestions {
    async fn fetch(&self, query: &QuestionQuery) -> Result<Question, GameError> {
        self.queries.lock().unwrap().push(query.clone());
        self.question
            .clone()
            .ok_or_else(|| GameError::MalformedQuestion("no results".to_string()))
    }
}
