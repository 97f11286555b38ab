use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::server::{
    bot::command::{caller_language, reply_ephemeral, required_string_option},
    error::AppError,
    game::hangman::words::Theme,
    i18n::{tf, Text},
    model::actor::Actor,
    service::discord::InteractionSurface,
    state::AppState,
};

pub const NAME: &str = "hangman";

pub fn register() -> CreateCommand {
    let mut theme = CreateCommandOption::new(
        CommandOptionType::String,
        "theme",
        "Theme of the word to guess",
    )
    .required(true);
    for choice in Theme::ALL {
        theme = theme.add_string_choice(choice.name(), choice.key());
    }

    CreateCommand::new(NAME)
        .description("Guess a word letter by letter")
        .add_option(theme)
}

/// Runs a hangman game for the invoking user.
///
/// Replies with an ephemeral error for an unknown theme. Otherwise defers the
/// response and plays the game in it until the game ends.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let key = required_string_option(command, "theme")?;

    let Some(theme) = Theme::from_key(key) else {
        let language = caller_language(state, command).await;
        let text = tf(language, Text::HangmanInvalidTheme, &[("theme", key)]);
        return reply_ephemeral(ctx, command, text).await;
    };

    command.defer(ctx).await?;

    let service = state.game_service();
    let session = service.start_hangman(Actor::from_user(&command.user), theme);
    let surface = InteractionSurface::new(ctx, command);
    service.play(&surface, session).await?;

    Ok(())
}
