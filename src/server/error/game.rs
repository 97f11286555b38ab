use thiserror::Error;

/// Failures that prevent a game session from being created.
#[derive(Error, Debug)]
pub enum GameError {
    /// The trivia API could not be reached or answered with an error status.
    ///
    /// No session is started; the user is asked to try again later.
    #[error("Trivia question unavailable: {0}")]
    QuestionUnavailable(#[from] reqwest::Error),

    /// The trivia API answered but the payload cannot be played.
    ///
    /// Covers undecodable JSON, a non-zero API response code, an empty result
    /// list and answers that do not fit the requested question type.
    #[error("Malformed trivia payload: {0}")]
    MalformedQuestion(String),
}
