//! Discord presentation surface for game sessions.
//!
//! Renders a [`View`] as an embed with button rows in the response to a slash command
//! and collects button presses on that response through Serenity's component
//! interaction collector.

use futures_util::{stream::BoxStream, StreamExt};
use serenity::{
    all::{
        ButtonStyle, CommandInteraction, ComponentInteraction, ComponentInteractionCollector,
        Context, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedAuthor,
        CreateInteractionResponse, CreateInteractionResponseFollowup, EditInteractionResponse,
        MessageId, ReactionType,
    },
    async_trait,
};

use crate::server::{
    error::AppError,
    game::{
        collector::{InputEvent, Surface},
        view::{Control, ControlStyle, View},
    },
    model::actor::Actor,
};

/// Surface bound to the deferred response of one slash command.
pub struct InteractionSurface<'a> {
    ctx: &'a Context,
    interaction: &'a CommandInteraction,
}

impl<'a> InteractionSurface<'a> {
    /// Creates a surface for a command the caller has already deferred.
    pub fn new(ctx: &'a Context, interaction: &'a CommandInteraction) -> Self {
        Self { ctx, interaction }
    }

    fn edit(view: &View) -> EditInteractionResponse {
        EditInteractionResponse::new()
            .embed(to_embed(view))
            .components(to_components(view))
    }
}

#[async_trait]
impl Surface for InteractionSurface<'_> {
    type Message = MessageId;
    type Token = ComponentInteraction;

    async fn render(&self, view: View) -> Result<MessageId, AppError> {
        let message = self
            .interaction
            .edit_response(self.ctx, Self::edit(&view))
            .await?;
        Ok(message.id)
    }

    fn guild_id(&self) -> Option<u64> {
        self.interaction.guild_id.map(|guild_id| guild_id.get())
    }

    fn subscribe(&self, message: &MessageId) -> BoxStream<'static, InputEvent<ComponentInteraction>> {
        ComponentInteractionCollector::new(self.ctx)
            .message_id(*message)
            .stream()
            .map(|interaction| InputEvent {
                actor: Actor::from_user(&interaction.user),
                control_id: interaction.data.custom_id.clone(),
                token: interaction,
            })
            .boxed()
    }

    async fn acknowledge(&self, token: &ComponentInteraction) -> Result<(), AppError> {
        token
            .create_response(self.ctx, CreateInteractionResponse::Acknowledge)
            .await?;
        Ok(())
    }

    async fn update(&self, _message: &MessageId, view: View) -> Result<(), AppError> {
        self.interaction
            .edit_response(self.ctx, Self::edit(&view))
            .await?;
        Ok(())
    }

    async fn notify(&self, token: &ComponentInteraction, text: &str) -> Result<(), AppError> {
        token
            .create_followup(
                self.ctx,
                CreateInteractionResponseFollowup::new()
                    .content(text)
                    .ephemeral(true),
            )
            .await?;
        Ok(())
    }
}

/// Builds the embed for a view.
///
/// # Arguments
/// - `view` - Rendered game state
///
/// # Returns
/// - `CreateEmbed` - Embed with title, colour, author, description and fields
pub fn to_embed(view: &View) -> CreateEmbed {
    let mut embed = CreateEmbed::new().title(&view.title).color(view.color);

    if let Some(author) = &view.author {
        let mut embed_author = CreateEmbedAuthor::new(&author.name);
        if let Some(avatar_url) = &author.avatar_url {
            embed_author = embed_author.icon_url(avatar_url);
        }
        embed = embed.author(embed_author);
    }

    if let Some(description) = &view.description {
        embed = embed.description(description);
    }

    for field in &view.fields {
        embed = embed.field(&field.name, &field.value, false);
    }

    embed
}

/// Builds one action row of buttons per view row.
pub fn to_components(view: &View) -> Vec<CreateActionRow> {
    view.rows
        .iter()
        .map(|row| CreateActionRow::Buttons(row.iter().map(to_button).collect()))
        .collect()
}

fn to_button(control: &Control) -> CreateButton {
    let style = match control.style {
        ControlStyle::Primary => ButtonStyle::Primary,
        ControlStyle::Secondary => ButtonStyle::Secondary,
        ControlStyle::Success => ButtonStyle::Success,
        ControlStyle::Danger => ButtonStyle::Danger,
    };

    let mut button = CreateButton::new(&control.id)
        .style(style)
        .disabled(control.disabled);
    if let Some(label) = &control.label {
        button = button.label(label);
    }
    if let Some(emoji) = &control.emoji {
        button = button.emoji(ReactionType::Unicode(emoji.clone()));
    }
    button
}
