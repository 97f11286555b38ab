//! Surface-independent description of a rendered game message.
//!
//! Renderers build a `View`; the presentation surface turns it into whatever the
//! platform needs (embeds and button rows for Discord).

use crate::server::model::actor::Actor;

/// Embed colour shown while a game is running or after it timed out.
pub const COLOR_PENDING: u32 = 0xFEE75C;
/// Embed colour for a won game.
pub const COLOR_WON: u32 = 0x57F287;
/// Embed colour for a lost or cancelled game.
pub const COLOR_LOST: u32 = 0xED4245;

/// Visual style of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlStyle {
    Primary,
    Secondary,
    Success,
    Danger,
}

/// A single pressable control (a Discord button).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// Identifier delivered back with the input event.
    pub id: String,
    pub label: Option<String>,
    pub emoji: Option<String>,
    pub style: ControlStyle,
    pub disabled: bool,
}

impl Control {
    /// Creates an enabled control with a text label.
    pub fn labeled(id: impl Into<String>, label: impl Into<String>, style: ControlStyle) -> Self {
        Self {
            id: id.into(),
            label: Some(label.into()),
            emoji: None,
            style,
            disabled: false,
        }
    }

    /// Creates an enabled control showing only an emoji.
    pub fn emoji(id: impl Into<String>, emoji: impl Into<String>, style: ControlStyle) -> Self {
        Self {
            id: id.into(),
            label: None,
            emoji: Some(emoji.into()),
            style,
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn style(mut self, style: ControlStyle) -> Self {
        self.style = style;
        self
    }
}

/// A named value shown under the description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
}

/// Text plus structured controls making up one rendered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub title: String,
    pub color: u32,
    pub author: Option<Actor>,
    pub description: Option<String>,
    pub fields: Vec<Field>,
    pub rows: Vec<Vec<Control>>,
}

impl View {
    pub fn new(title: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            color,
            author: None,
            description: None,
            fields: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn author(mut self, author: Actor) -> Self {
        self.author = Some(author);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn rows(mut self, rows: Vec<Vec<Control>>) -> Self {
        self.rows = rows;
        self
    }

    /// Iterates every control across all rows.
    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        self.rows.iter().flatten()
    }

    /// Finds a control by its identifier.
    pub fn control(&self, id: &str) -> Option<&Control> {
        self.controls().find(|control| control.id == id)
    }

    /// Every piece of text the view shows, used to check nothing leaks.
    pub fn visible_text(&self) -> String {
        let mut text = vec![self.title.clone()];
        text.extend(self.description.clone());
        for field in &self.fields {
            text.push(field.name.clone());
            text.push(field.value.clone());
        }
        for control in self.controls() {
            text.extend(control.label.clone());
            text.extend(control.emoji.clone());
        }
        text.join("\n")
    }
}
