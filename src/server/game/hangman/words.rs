//! Themed word pools for hangman.

use std::fmt;

/// Word theme a player picks when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Animals,
    Countries,
    Food,
    Sports,
    Space,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Animals,
        Theme::Countries,
        Theme::Food,
        Theme::Sports,
        Theme::Space,
    ];

    /// Value used in the slash command choice.
    pub fn key(self) -> &'static str {
        match self {
            Theme::Animals => "animals",
            Theme::Countries => "countries",
            Theme::Food => "food",
            Theme::Sports => "sports",
            Theme::Space => "space",
        }
    }

    /// Name shown to players.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Animals => "Animals",
            Theme::Countries => "Countries",
            Theme::Food => "Food",
            Theme::Sports => "Sports",
            Theme::Space => "Space",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.key() == key)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const ANIMALS: &[&str] = &[
    "cat", "dog", "owl", "elephant", "giraffe", "penguin", "dolphin", "kangaroo", "squirrel",
    "crocodile", "hedgehog", "octopus", "polar bear", "sea turtle", "hummingbird",
];

const COUNTRIES: &[&str] = &[
    "germany", "brazil", "japan", "canada", "norway", "portugal", "argentina", "indonesia",
    "morocco", "iceland", "new zealand", "south africa", "switzerland", "vietnam",
];

const FOOD: &[&str] = &[
    "pizza", "lasagna", "pretzel", "avocado", "pancake", "burrito", "croissant", "dumpling",
    "spaghetti", "ice cream", "apple pie", "cheesecake", "broccoli", "pineapple",
];

const SPORTS: &[&str] = &[
    "football", "tennis", "basketball", "volleyball", "badminton", "cricket", "hockey",
    "swimming", "archery", "fencing", "table tennis", "rugby", "snowboarding", "marathon",
];

const SPACE: &[&str] = &[
    "galaxy", "nebula", "comet", "asteroid", "jupiter", "saturn", "telescope", "satellite",
    "astronaut", "supernova", "black hole", "milky way", "eclipse", "meteorite",
];

/// Returns the word pool for a theme. Every pool is non-empty.
pub fn words_for(theme: Theme) -> &'static [&'static str] {
    match theme {
        Theme::Animals => ANIMALS,
        Theme::Countries => COUNTRIES,
        Theme::Food => FOOD,
        Theme::Sports => SPORTS,
        Theme::Space => SPACE,
    }
}
