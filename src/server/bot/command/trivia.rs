use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    EditInteractionResponse,
};

use crate::server::{
    bot::command::{caller_language, integer_option, required_string_option},
    error::{internal::InternalError, AppError},
    game::trivia::source::{Difficulty, QuestionQuery, TriviaMode},
    i18n::{t, Text},
    model::actor::Actor,
    service::discord::InteractionSurface,
    state::AppState,
};

pub const NAME: &str = "trivia";

/// Lowest and highest Open Trivia DB category ids.
const CATEGORY_RANGE: (i64, i64) = (9, 32);

pub fn register() -> CreateCommand {
    let mode = CreateCommandOption::new(CommandOptionType::String, "mode", "Type of question")
        .required(true)
        .add_string_choice("True / False", TriviaMode::Boolean.as_str())
        .add_string_choice("Multiple choice", TriviaMode::Multiple.as_str());

    let difficulty =
        CreateCommandOption::new(CommandOptionType::String, "difficulty", "Question difficulty")
            .required(true)
            .add_string_choice("Easy", Difficulty::Easy.as_str())
            .add_string_choice("Medium", Difficulty::Medium.as_str())
            .add_string_choice("Hard", Difficulty::Hard.as_str());

    let category = CreateCommandOption::new(
        CommandOptionType::Integer,
        "category",
        "Open Trivia DB category id",
    )
    .min_int_value(CATEGORY_RANGE.0 as u64)
    .max_int_value(CATEGORY_RANGE.1 as u64);

    CreateCommand::new(NAME)
        .description("Answer a trivia question")
        .add_option(mode)
        .add_option(difficulty)
        .add_option(category)
}

/// Reads the question query from the command options.
fn parse_query(command: &CommandInteraction) -> Result<QuestionQuery, AppError> {
    let mode = required_string_option(command, "mode")?;
    let difficulty = required_string_option(command, "difficulty")?;
    let category = integer_option(command, "category");

    Ok(build_query(mode, difficulty, category)?)
}

/// Builds a question query from raw option values.
///
/// # Arguments
/// - `mode` - Value of the `mode` option
/// - `difficulty` - Value of the `difficulty` option
/// - `category` - Value of the `category` option, if given
///
/// # Returns
/// - `Ok(QuestionQuery)` - Query to fetch a question with; an out-of-range category
///   is dropped
/// - `Err(InternalError::InvalidOption)` - `mode` or `difficulty` is not a registered choice
fn build_query(
    mode: &str,
    difficulty: &str,
    category: Option<i64>,
) -> Result<QuestionQuery, InternalError> {
    let invalid = |option: &str, value: &str| InternalError::InvalidOption {
        command: NAME.to_string(),
        option: option.to_string(),
        value: value.to_string(),
    };

    let parsed_mode = TriviaMode::from_key(mode).ok_or_else(|| invalid("mode", mode))?;
    let parsed_difficulty =
        Difficulty::from_key(difficulty).ok_or_else(|| invalid("difficulty", difficulty))?;
    let category = category
        .filter(|id| (CATEGORY_RANGE.0..=CATEGORY_RANGE.1).contains(id))
        .map(|id| id as u32);

    Ok(QuestionQuery {
        mode: parsed_mode,
        difficulty: parsed_difficulty,
        category,
    })
}

/// Runs a trivia game for the invoking user.
///
/// The response is deferred while the question is fetched. When no question can
/// be fetched the response shows an error message and no game starts.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let query = parse_query(command)?;

    command.defer(ctx).await?;

    let service = state.game_service();
    let session = match service
        .start_trivia(Actor::from_user(&command.user), query)
        .await
    {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!("Failed to fetch trivia question: {}", e);
            let language = caller_language(state, command).await;
            command
                .edit_response(
                    ctx,
                    EditInteractionResponse::new().content(t(language, Text::TriviaError)),
                )
                .await?;
            return Ok(());
        }
    };

    let surface = InteractionSurface::new(ctx, command);
    service.play(&surface, session).await?;

    Ok(())
}
