//! Display languages and the bot's string catalog.
//!
//! Every user-facing string the game engine renders is looked up here by a typed
//! `Text` key and a `Language`. Templates may contain `{name}` placeholders which
//! are substituted with `fill`. Missing translations fall back to English.

use std::fmt;

/// Display language a user can choose for bot replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    German,
}

impl Language {
    /// All languages the catalog carries, in the order they are offered to users.
    pub const SUPPORTED: [Language; 2] = [Language::English, Language::German];

    /// Parses a language tag such as `en`, `de` or `en-US`.
    ///
    /// Only the primary subtag is considered and matching is case-insensitive.
    ///
    /// # Returns
    /// - `Some(Language)` - Tag names a supported language
    /// - `None` - Tag is empty or unsupported
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next()?.trim().to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Language::English),
            "de" => Some(Language::German),
            _ => None,
        }
    }

    /// Short tag used in command options and configuration.
    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Catalog keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    HangmanTitle,
    HangmanTheme,
    HangmanWord,
    HangmanGuesses,
    HangmanWon,
    HangmanLost,
    HangmanTimeout,
    HangmanCancelled,
    HangmanInvalidTheme,
    TriviaTitle,
    TriviaCategory,
    TriviaDifficulty,
    TriviaQuestion,
    TriviaAnswer,
    TriviaInput,
    TriviaCorrect,
    TriviaIncorrect,
    TriviaTimeout,
    TriviaError,
    AuthorOnly,
    LanguageCurrent,
    LanguageSuccess,
    LanguageInvalid,
    LanguageServerCurrent,
    LanguageServerSuccess,
    LanguageServerOnly,
    LanguageNoPermission,
    CommandError,
}

/// Looks up the template for `key` in `language`.
pub fn t(language: Language, key: Text) -> &'static str {
    match language {
        Language::English => english(key),
        Language::German => german(key).unwrap_or_else(|| english(key)),
    }
}

/// Looks up `key` and substitutes every `{name}` placeholder from `args`.
///
/// Placeholders without a matching argument are left in place.
pub fn tf(language: Language, key: Text, args: &[(&str, &str)]) -> String {
    fill(t(language, key), args)
}

/// Substitutes `{name}` placeholders in `template`.
pub fn fill(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{}}}", name), value);
    }
    out
}

fn english(key: Text) -> &'static str {
    match key {
        Text::HangmanTitle => "Hangman",
        Text::HangmanTheme => "Theme",
        Text::HangmanWord => "Word ({length} letters)",
        Text::HangmanGuesses => "Guesses",
        Text::HangmanWon => "You guessed the word!",
        Text::HangmanLost => "You lost! The word was **{word}**.",
        Text::HangmanTimeout => "Time's up! The word was **{word}**.",
        Text::HangmanCancelled => "Game stopped. The word was **{word}**.",
        Text::HangmanInvalidTheme => "**{theme}** is not a known theme.",
        Text::TriviaTitle => "Trivia",
        Text::TriviaCategory => "Category",
        Text::TriviaDifficulty => "Difficulty",
        Text::TriviaQuestion => "Question",
        Text::TriviaAnswer => "Correct answer",
        Text::TriviaInput => "Your answer",
        Text::TriviaCorrect => "Correct!",
        Text::TriviaIncorrect => "Incorrect!",
        Text::TriviaTimeout => "Time's up! You did not answer in time.",
        Text::TriviaError => "Could not fetch a trivia question, please try again later.",
        Text::AuthorOnly => "Only the person who started this game can use these buttons.",
        Text::LanguageCurrent => "Your language is **{language}**.",
        Text::LanguageSuccess => "Your language has been set to **{language}**.",
        Text::LanguageInvalid => "**{language}** is not supported. Supported languages: {languages}",
        Text::LanguageServerCurrent => "This server's language is **{language}**.",
        Text::LanguageServerSuccess => "This server's language has been set to **{language}**.",
        Text::LanguageServerOnly => "The server language can only be used inside a server.",
        Text::LanguageNoPermission => {
            "You need the Manage Server permission to change the server's language."
        }
        Text::CommandError => "Something went wrong while running this command.",
    }
}

fn german(key: Text) -> Option<&'static str> {
    let text = match key {
        Text::HangmanTitle => "Galgenmännchen",
        Text::HangmanTheme => "Thema",
        Text::HangmanWord => "Wort ({length} Buchstaben)",
        Text::HangmanGuesses => "Versuche",
        Text::HangmanWon => "Du hast das Wort erraten!",
        Text::HangmanLost => "Du hast verloren! Das Wort war **{word}**.",
        Text::HangmanTimeout => "Die Zeit ist um! Das Wort war **{word}**.",
        Text::HangmanCancelled => "Spiel beendet. Das Wort war **{word}**.",
        Text::TriviaTitle => "Quiz",
        Text::TriviaCategory => "Kategorie",
        Text::TriviaDifficulty => "Schwierigkeit",
        Text::TriviaQuestion => "Frage",
        Text::TriviaAnswer => "Richtige Antwort",
        Text::TriviaInput => "Deine Antwort",
        Text::TriviaCorrect => "Richtig!",
        Text::TriviaIncorrect => "Falsch!",
        Text::TriviaTimeout => "Die Zeit ist um! Du hast nicht rechtzeitig geantwortet.",
        Text::TriviaError => {
            "Es konnte keine Quizfrage geladen werden, bitte versuche es später erneut."
        }
        Text::AuthorOnly => {
            "Nur die Person, die dieses Spiel gestartet hat, kann diese Knöpfe benutzen."
        }
        Text::LanguageCurrent => "Deine Sprache ist **{language}**.",
        Text::LanguageSuccess => "Deine Sprache wurde auf **{language}** gesetzt.",
        Text::LanguageServerCurrent => "Die Sprache dieses Servers ist **{language}**.",
        Text::LanguageServerSuccess => {
            "Die Sprache dieses Servers wurde auf **{language}** gesetzt."
        }
        Text::LanguageServerOnly => "Die Serversprache gibt es nur auf einem Server.",
        Text::LanguageNoPermission => {
            "Du brauchst die Berechtigung \"Server verwalten\", um die Serversprache zu ändern."
        }
        Text::CommandError => "Beim Ausführen dieses Befehls ist ein Fehler aufgetreten.",
        Text::HangmanInvalidTheme | Text::LanguageInvalid => return None,
    };
    Some(text)
}
