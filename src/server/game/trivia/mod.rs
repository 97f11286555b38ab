//! Trivia: answer one Open Trivia DB question.
//!
//! The answer pool is built once when the game starts. The first valid answer
//! ends the game, won if it is the correct one.

pub mod board;
pub mod entity;
pub mod source;

use rand::{seq::SliceRandom, Rng};

use crate::server::{
    game::{
        view::{View, COLOR_LOST, COLOR_PENDING, COLOR_WON},
        Game, Outcome, Status, Step,
    },
    i18n::{t, Language, Text},
};

use source::{Question, TriviaMode};

/// Fixed answer order for true/false questions.
const BOOLEAN_ANSWERS: [&str; 2] = ["True", "False"];

#[derive(Debug, Clone)]
pub struct Trivia {
    question: Question,
    answers: Vec<String>,
    correct: usize,
    selected: Option<usize>,
}

impl Trivia {
    /// Creates a game and builds its answer pool.
    ///
    /// Boolean questions always offer True then False. Multiple choice questions
    /// offer the correct and incorrect answers without duplicates, shuffled.
    pub fn new<R: Rng + ?Sized>(question: Question, rng: &mut R) -> Self {
        let answers = match question.mode {
            TriviaMode::Boolean => BOOLEAN_ANSWERS.iter().map(|a| a.to_string()).collect(),
            TriviaMode::Multiple => {
                let mut answers: Vec<String> = Vec::new();
                for answer in std::iter::once(&question.correct_answer)
                    .chain(question.incorrect_answers.iter())
                {
                    if !answers.contains(answer) {
                        answers.push(answer.clone());
                    }
                }
                answers.shuffle(rng);
                answers
            }
        };

        let correct = answers
            .iter()
            .position(|answer| *answer == question.correct_answer)
            .unwrap_or_default();

        Self {
            question,
            answers,
            correct,
            selected: None,
        }
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    fn selected_answer(&self) -> &str {
        self.selected
            .and_then(|index| self.answers.get(index))
            .map(String::as_str)
            .unwrap_or("/")
    }
}

impl Game for Trivia {
    fn apply(&mut self, control_id: &str) -> Step {
        let Some(index) = board::parse_answer_id(control_id) else {
            return Step::Ignored;
        };
        if index >= self.answers.len() || self.selected.is_some() {
            return Step::Ignored;
        }

        self.selected = Some(index);
        if index == self.correct {
            Step::Won
        } else {
            Step::Lost
        }
    }

    fn render(&self, status: Status, language: Language) -> View {
        let view = View::new(t(language, Text::TriviaTitle), COLOR_PENDING)
            .field(t(language, Text::TriviaCategory), self.question.category.as_str())
            .field(
                t(language, Text::TriviaDifficulty),
                self.question.difficulty.to_string(),
            )
            .field(t(language, Text::TriviaQuestion), self.question.question.as_str());

        let Status::Over(outcome) = status else {
            return view.rows(board::answer_controls(
                self.question.mode,
                &self.answers,
                self.correct,
                false,
            ));
        };

        let (color, message) = match outcome {
            Outcome::Won => (COLOR_WON, Text::TriviaCorrect),
            Outcome::Lost => (COLOR_LOST, Text::TriviaIncorrect),
            Outcome::TimedOut | Outcome::Cancelled => (COLOR_LOST, Text::TriviaTimeout),
        };

        View { color, ..view }
            .description(t(language, message))
            .field(
                t(language, Text::TriviaAnswer),
                self.question.correct_answer.as_str(),
            )
            .field(t(language, Text::TriviaInput), self.selected_answer())
            .rows(board::answer_controls(
                self.question.mode,
                &self.answers,
                self.correct,
                true,
            ))
    }
}
