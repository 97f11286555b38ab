//! Pure rendering helpers for hangman: gallows figure, masked word and keyboard.

use crate::server::game::view::{Control, ControlStyle};

pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Wrong guesses that complete the figure and lose the game.
pub const MAX_DAMAGE: u8 = 5;

/// Glyph shown for letters not guessed yet.
pub const PLACEHOLDER: &str = "🔵";

const LETTERS_PER_PAGE: usize = 12;
const LETTERS_PER_ROW: usize = 4;

/// Figure parts in the order they appear, one per point of damage.
const STAGES: [&str; MAX_DAMAGE as usize] = ["🎩", "😟", "👕", "👖", "👞👞"];

/// Which half of the keyboard is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardPage {
    /// A to L.
    #[default]
    First,
    /// M to X, plus Y and Z next to the navigation controls.
    Second,
}

impl KeyboardPage {
    pub fn index(self) -> u8 {
        match self {
            KeyboardPage::First => 0,
            KeyboardPage::Second => 1,
        }
    }

    pub fn from_index(index: &str) -> Option<Self> {
        match index {
            "0" => Some(KeyboardPage::First),
            "1" => Some(KeyboardPage::Second),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            KeyboardPage::First => KeyboardPage::Second,
            KeyboardPage::Second => KeyboardPage::First,
        }
    }
}

pub fn letter_id(letter: char) -> String {
    format!("hangman:letter:{}", letter)
}

pub fn page_id(page: KeyboardPage) -> String {
    format!("hangman:page:{}", page.index())
}

pub const STOP_ID: &str = "hangman:stop";

/// Draws the gallows with every stage up to `damage`.
pub fn figure(damage: u8) -> String {
    let mut lines = vec!["```".to_string(), "|‾‾‾‾‾‾‾|".to_string()];
    for (stage, &part) in STAGES.iter().enumerate() {
        let part = if (stage as u8) < damage { part } else { " " };
        lines.push(format!("|      {}", part));
    }
    lines.push("|___________".to_string());
    lines.push("```".to_string());
    lines.join("\n")
}

/// Regional indicator emoji for an ASCII letter.
pub fn letter_emoji(letter: char) -> Option<char> {
    let letter = letter.to_ascii_uppercase();
    if !letter.is_ascii_uppercase() {
        return None;
    }
    char::from_u32(0x1F1E6 + (letter as u32 - 'A' as u32))
}

/// Masks `word`, revealing guessed letters.
///
/// Letters compare case-insensitively against `guesses`. Characters that are
/// not ASCII letters are never hidden.
pub fn masked_word(word: &str, guesses: &[char]) -> String {
    word.chars()
        .map(|c| {
            let upper = c.to_ascii_uppercase();
            if !upper.is_ascii_uppercase() {
                c.to_string()
            } else if guesses.contains(&upper) {
                letter_emoji(upper).map(String::from).unwrap_or_else(|| upper.to_string())
            } else {
                PLACEHOLDER.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Letters laid out in the grid of the given page.
pub fn page_letters(page: KeyboardPage) -> &'static [char] {
    match page {
        KeyboardPage::First => &ALPHABET[..LETTERS_PER_PAGE],
        KeyboardPage::Second => &ALPHABET[LETTERS_PER_PAGE..2 * LETTERS_PER_PAGE],
    }
}

fn letter_control(letter: char, guesses: &[char]) -> Control {
    Control::labeled(letter_id(letter), letter.to_string(), ControlStyle::Primary)
        .disabled(guesses.contains(&letter))
}

/// Builds the keyboard rows for `page`.
///
/// Three rows of four letters, then a navigation row with the page toggle and
/// stop control. The second page adds Y and Z to the navigation row. Letters
/// already guessed are disabled.
pub fn keyboard(page: KeyboardPage, guesses: &[char]) -> Vec<Vec<Control>> {
    let mut rows: Vec<Vec<Control>> = page_letters(page)
        .chunks(LETTERS_PER_ROW)
        .map(|row| row.iter().map(|&letter| letter_control(letter, guesses)).collect())
        .collect();

    let arrow = match page {
        KeyboardPage::First => "➡️",
        KeyboardPage::Second => "⬅️",
    };
    let mut navigation = vec![
        Control::emoji(page_id(page.other()), arrow, ControlStyle::Success),
        Control::emoji(STOP_ID, "✖️", ControlStyle::Danger),
    ];
    if page == KeyboardPage::Second {
        for &letter in &ALPHABET[2 * LETTERS_PER_PAGE..] {
            navigation.push(letter_control(letter, guesses));
        }
    }
    rows.push(navigation);

    rows
}
