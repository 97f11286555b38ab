//! Hangman: guess a themed word one letter at a time.
//!
//! Every distinct wrong letter adds one point of damage and draws one more part of
//! the figure; the game is lost at [`board::MAX_DAMAGE`] and won once every letter
//! of the word has been guessed. Repeating a letter changes nothing.

pub mod board;
pub mod words;

use rand::Rng;

use crate::server::{
    game::{
        view::{View, COLOR_LOST, COLOR_PENDING, COLOR_WON},
        Game, Outcome, Status, Step,
    },
    i18n::{t, tf, Language, Text},
};

use board::{KeyboardPage, MAX_DAMAGE};
use words::Theme;

/// State of one hangman game.
#[derive(Debug, Clone)]
pub struct Hangman {
    theme: Theme,
    /// Uppercase target word.
    word: String,
    /// Distinct guessed letters in the order they were guessed.
    guesses: Vec<char>,
    damage: u8,
    page: KeyboardPage,
}

impl Hangman {
    /// Starts a game for a fixed word.
    pub fn new(theme: Theme, word: &str) -> Self {
        Self {
            theme,
            word: word.to_uppercase(),
            guesses: Vec::new(),
            damage: 0,
            page: KeyboardPage::default(),
        }
    }

    /// Starts a game with a word drawn uniformly from the theme's pool.
    pub fn random<R: Rng + ?Sized>(theme: Theme, rng: &mut R) -> Self {
        let pool = words::words_for(theme);
        let word = pool[rng.random_range(0..pool.len())];
        Self::new(theme, word)
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn guesses(&self) -> &[char] {
        &self.guesses
    }

    pub fn damage(&self) -> u8 {
        self.damage
    }

    pub fn page(&self) -> KeyboardPage {
        self.page
    }

    /// Whether every letter of the word has been guessed.
    pub fn is_solved(&self) -> bool {
        self.word
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .all(|c| self.guesses.contains(&c))
    }

    /// Guesses a letter.
    ///
    /// A repeated letter is accepted but changes nothing; anything that is not
    /// an ASCII letter is ignored.
    pub fn guess(&mut self, letter: char) -> Step {
        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return Step::Ignored;
        }
        if self.guesses.contains(&letter) {
            return Step::Updated;
        }

        self.guesses.push(letter);
        if !self.word.contains(letter) {
            self.damage += 1;
        }

        if self.damage >= MAX_DAMAGE {
            Step::Lost
        } else if self.is_solved() {
            Step::Won
        } else {
            Step::Updated
        }
    }

    fn letter_count(&self) -> usize {
        self.word.chars().filter(|c| c.is_ascii_alphabetic()).count()
    }

    fn guesses_list(&self) -> String {
        if self.guesses.is_empty() {
            return "/".to_string();
        }
        self.guesses
            .iter()
            .map(|letter| format!("`{}`", letter))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn result_message(&self, outcome: Outcome, language: Language) -> String {
        let args = [("word", self.word.as_str())];
        match outcome {
            Outcome::Won => t(language, Text::HangmanWon).to_string(),
            Outcome::Lost => tf(language, Text::HangmanLost, &args),
            Outcome::TimedOut => tf(language, Text::HangmanTimeout, &args),
            Outcome::Cancelled => tf(language, Text::HangmanCancelled, &args),
        }
    }
}

impl Game for Hangman {
    fn apply(&mut self, control_id: &str) -> Step {
        if control_id == board::STOP_ID {
            return Step::Cancelled;
        }
        if let Some(index) = control_id.strip_prefix("hangman:page:") {
            return match KeyboardPage::from_index(index) {
                Some(page) => {
                    self.page = page;
                    Step::Updated
                }
                None => Step::Ignored,
            };
        }
        if let Some(letter) = control_id.strip_prefix("hangman:letter:") {
            let mut chars = letter.chars();
            return match (chars.next(), chars.next()) {
                (Some(letter), None) => self.guess(letter),
                _ => Step::Ignored,
            };
        }
        Step::Ignored
    }

    fn render(&self, status: Status, language: Language) -> View {
        let figure = board::figure(self.damage);
        let length = self.letter_count().to_string();

        let (color, description, rows) = match status {
            Status::Active => (
                COLOR_PENDING,
                figure,
                board::keyboard(self.page, &self.guesses),
            ),
            Status::Over(outcome) => {
                let color = match outcome {
                    Outcome::Won => COLOR_WON,
                    Outcome::Lost | Outcome::Cancelled => COLOR_LOST,
                    Outcome::TimedOut => COLOR_PENDING,
                };
                let message = self.result_message(outcome, language);
                (color, format!("{}\n\n{}", message, figure), Vec::new())
            }
        };

        View::new(t(language, Text::HangmanTitle), color)
            .description(description)
            .field(t(language, Text::HangmanTheme), self.theme.name())
            .field(
                tf(language, Text::HangmanWord, &[("length", length.as_str())]),
                board::masked_word(&self.word, &self.guesses),
            )
            .field(t(language, Text::HangmanGuesses), self.guesses_list())
            .rows(rows)
    }
}
