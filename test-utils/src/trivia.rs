//! Test factories for Open Trivia DB payloads.
//!
//! Builds JSON in the shape the `api.php` endpoint returns so response parsing can
//! be tested without network access. Text is passed through as given, so tests can
//! include HTML entities exactly as the API encodes them.

use serde_json::{json, Value};

/// Creates a single entry of the `results` array.
///
/// # Arguments
/// - `kind` - Question type, `boolean` or `multiple`
/// - `difficulty` - `easy`, `medium` or `hard`
/// - `category` - Category name
/// - `question` - Question text
/// - `correct` - Correct answer
/// - `incorrect` - Incorrect answers
///
/// # Returns
/// - `Value` - JSON object for one question
pub fn question_payload(
    kind: &str,
    difficulty: &str,
    category: &str,
    question: &str,
    correct: &str,
    incorrect: &[&str],
) -> Value {
    json!({
        "type": kind,
        "difficulty": difficulty,
        "category": category,
        "question": question,
        "correct_answer": correct,
        "incorrect_answers": incorrect,
    })
}

/// Creates a full API response.
///
/// # Arguments
/// - `response_code` - API status, `0` on success
/// - `results` - Entries built with [`question_payload`]
///
/// # Returns
/// - `Value` - JSON response body
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::trivia::{question_payload, response_payload};
///
/// let body = response_payload(
///     0,
///     vec![question_payload("boolean", "easy", "General Knowledge", "Q?", "True", &["False"])],
/// )
/// .to_string();
/// ```
pub fn response_payload(response_code: u8, results: Vec<Value>) -> Value {
    json!({
        "response_code": response_code,
        "results": results,
    })
}
