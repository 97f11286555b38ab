use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    ResolvedOption, ResolvedValue,
};

use crate::server::{
    bot::command::reply_ephemeral,
    error::{internal::InternalError, AppError},
    i18n::{tf, Language, Text},
    service::language::{LanguageResolver, LanguageStore},
    state::AppState,
};

pub const NAME: &str = "language";

const USER: &str = "user";
const SERVER: &str = "server";
const LANGUAGE: &str = "language";

fn language_option() -> CreateCommandOption {
    let mut language =
        CreateCommandOption::new(CommandOptionType::String, LANGUAGE, "The new language to set");
    for supported in Language::SUPPORTED {
        language = language.add_string_choice(supported.tag(), supported.tag());
    }
    language
}

pub fn register() -> CreateCommand {
    let user = CreateCommandOption::new(
        CommandOptionType::SubCommand,
        USER,
        "Your personal language preference",
    )
    .add_sub_option(language_option());

    let server = CreateCommandOption::new(
        CommandOptionType::SubCommand,
        SERVER,
        "The server's language preference",
    )
    .add_sub_option(language_option());

    CreateCommand::new(NAME)
        .description("See or change the language of replies by the bot")
        .add_option(user)
        .add_option(server)
}

/// Server a `/language server` invocation was made in.
#[derive(Debug, Clone, Copy)]
pub struct ServerCaller {
    pub guild_id: u64,
    /// Whether the caller holds the Manage Server permission there.
    pub can_manage: bool,
}

/// Shows or changes the personal language of a user.
///
/// # Arguments
/// - `languages` - Preference store
/// - `user_id` - Discord user ID of the caller
/// - `guild_id` - Server the command was used in, if any
/// - `requested` - Language tag to switch to; `None` shows the current language
///
/// # Returns
/// - `String` - Reply text, in the language in effect after the change
pub async fn change_user_language(
    languages: &LanguageStore,
    user_id: u64,
    guild_id: Option<u64>,
    requested: Option<&str>,
) -> String {
    let current = languages.resolve(user_id, guild_id).await;

    let Some(tag) = requested else {
        return tf(current, Text::LanguageCurrent, &[("language", current.tag())]);
    };

    match Language::from_tag(tag) {
        Some(language) => {
            languages.set_user(user_id, language).await;
            tf(language, Text::LanguageSuccess, &[("language", language.tag())])
        }
        None => unsupported(current, tag),
    }
}

/// Shows or changes the language of a server.
///
/// Anyone in the server may see its language; changing it takes the Manage Server
/// permission.
///
/// # Arguments
/// - `languages` - Preference store
/// - `user_id` - Discord user ID of the caller
/// - `server` - Server the command was used in; `None` outside of servers
/// - `requested` - Language tag to switch to; `None` shows the current language
///
/// # Returns
/// - `String` - Reply text, in the caller's language
pub async fn change_server_language(
    languages: &LanguageStore,
    user_id: u64,
    server: Option<ServerCaller>,
    requested: Option<&str>,
) -> String {
    let guild_id = server.map(|server| server.guild_id);
    let current = languages.resolve(user_id, guild_id).await;

    let Some(server) = server else {
        return tf(current, Text::LanguageServerOnly, &[]);
    };

    let Some(tag) = requested else {
        let server_language = languages.guild_language(server.guild_id).await;
        return tf(
            current,
            Text::LanguageServerCurrent,
            &[("language", server_language.tag())],
        );
    };

    if !server.can_manage {
        return tf(current, Text::LanguageNoPermission, &[]);
    }

    let Some(language) = Language::from_tag(tag) else {
        return unsupported(current, tag);
    };

    languages.set_guild(server.guild_id, language).await;
    let current = languages.resolve(user_id, guild_id).await;
    tf(
        current,
        Text::LanguageServerSuccess,
        &[("language", language.tag())],
    )
}

/// Reply for a tag that names no supported language.
fn unsupported(current: Language, tag: &str) -> String {
    let supported = Language::SUPPORTED
        .iter()
        .map(|language| language.tag())
        .collect::<Vec<_>>()
        .join(", ");
    tf(
        current,
        Text::LanguageInvalid,
        &[("language", tag), ("languages", supported.as_str())],
    )
}

/// Reads the `language` value of a subcommand's options.
fn requested_language<'a>(options: &[ResolvedOption<'a>]) -> Option<&'a str> {
    options
        .iter()
        .find(|option| option.name == LANGUAGE)
        .and_then(|option| match &option.value {
            ResolvedValue::String(value) => Some(*value),
            _ => None,
        })
}

pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let user_id = command.user.id.get();
    let guild_id = command.guild_id.map(|guild_id| guild_id.get());

    let options = command.data.options();
    let Some(ResolvedOption {
        name: subcommand,
        value: ResolvedValue::SubCommand(sub_options),
        ..
    }) = options.first()
    else {
        return Err(InternalError::MissingOption {
            command: NAME.to_string(),
            option: "subcommand".to_string(),
        }
        .into());
    };
    let requested = requested_language(sub_options);

    let text = match *subcommand {
        USER => change_user_language(&state.languages, user_id, guild_id, requested).await,
        SERVER => {
            let server = guild_id.map(|guild_id| ServerCaller {
                guild_id,
                can_manage: command
                    .member
                    .as_ref()
                    .and_then(|member| member.permissions)
                    .is_some_and(|permissions| permissions.manage_guild()),
            });
            change_server_language(&state.languages, user_id, server, requested).await
        }
        other => {
            return Err(InternalError::InvalidOption {
                command: NAME.to_string(),
                option: "subcommand".to_string(),
                value: other.to_string(),
            }
            .into())
        }
    };

    reply_ephemeral(ctx, command, text).await
}
