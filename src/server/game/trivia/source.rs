//! Question source for trivia games backed by the Open Trivia DB API.

use std::fmt;

use serde::Deserialize;
use serenity::async_trait;

use crate::server::{error::game::GameError, game::trivia::entity::decode_entities};

/// Question type requested from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriviaMode {
    /// True or false.
    Boolean,
    /// One correct answer among several.
    Multiple,
}

impl TriviaMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TriviaMode::Boolean => "boolean",
            TriviaMode::Multiple => "multiple",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "boolean" => Some(TriviaMode::Boolean),
            "multiple" => Some(TriviaMode::Multiple),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(name)
    }
}

/// Parameters of a single question request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionQuery {
    pub mode: TriviaMode,
    pub difficulty: Difficulty,
    /// Open Trivia DB category id, any category when `None`.
    pub category: Option<u32>,
}

impl QuestionQuery {
    /// Query string parameters for the API request.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("amount", "1".to_string()),
            ("type", self.mode.as_str().to_string()),
            ("difficulty", self.difficulty.as_str().to_string()),
        ];
        if let Some(category) = self.category {
            params.push(("category", category.to_string()));
        }
        params
    }
}

/// A playable question with every text field already entity-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub mode: TriviaMode,
    pub difficulty: Difficulty,
    pub category: String,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

#[derive(Deserialize)]
struct ApiResponse {
    response_code: u8,
    #[serde(default)]
    results: Vec<ApiQuestion>,
}

#[derive(Deserialize)]
struct ApiQuestion {
    #[serde(rename = "type")]
    mode: TriviaMode,
    difficulty: Difficulty,
    category: String,
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

/// Parses an Open Trivia DB response body into a single question.
///
/// # Arguments
/// - `body` - Raw JSON body returned by the API
///
/// # Returns
/// - `Ok(Question)` - First result, decoded and validated for its mode
/// - `Err(GameError::MalformedQuestion)` - Body is not valid JSON, the API reported a
///   non-zero response code, there are no results or the answers do not fit the mode
pub fn parse_response(body: &str) -> Result<Question, GameError> {
    let response: ApiResponse = serde_json::from_str(body)
        .map_err(|e| GameError::MalformedQuestion(format!("undecodable body: {}", e)))?;

    if response.response_code != 0 {
        return Err(GameError::MalformedQuestion(format!(
            "response code {}",
            response.response_code
        )));
    }

    let raw = response
        .results
        .into_iter()
        .next()
        .ok_or_else(|| GameError::MalformedQuestion("no results".to_string()))?;

    let question = Question {
        mode: raw.mode,
        difficulty: raw.difficulty,
        category: decode_entities(&raw.category),
        question: decode_entities(&raw.question),
        correct_answer: decode_entities(&raw.correct_answer),
        incorrect_answers: raw
            .incorrect_answers
            .iter()
            .map(|answer| decode_entities(answer))
            .collect(),
    };

    match question.mode {
        TriviaMode::Boolean if !matches!(question.correct_answer.as_str(), "True" | "False") => {
            Err(GameError::MalformedQuestion(format!(
                "boolean question with answer '{}'",
                question.correct_answer
            )))
        }
        TriviaMode::Multiple if question.incorrect_answers.is_empty() => Err(
            GameError::MalformedQuestion("multiple choice question without alternatives".to_string()),
        ),
        _ => Ok(question),
    }
}

/// Supplies trivia questions.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch(&self, query: &QuestionQuery) -> Result<Question, GameError>;
}

/// Fetches questions from the Open Trivia DB HTTP API.
pub struct OpenTdbSource {
    http: reqwest::Client,
    base_url: String,
}

impl OpenTdbSource {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl QuestionSource for OpenTdbSource {
    /// Requests one question matching `query`.
    ///
    /// # Returns
    /// - `Ok(Question)` - Decoded question
    /// - `Err(GameError::QuestionUnavailable)` - Request failed or returned an error status
    /// - `Err(GameError::MalformedQuestion)` - Response could not be used
    async fn fetch(&self, query: &QuestionQuery) -> Result<Question, GameError> {
        let body = self
            .http
            .get(&self.base_url)
            .query(&query.query_params())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_response(&body)
    }
}
