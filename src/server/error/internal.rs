use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A slash command arrived without an option Discord marks as required.
    ///
    /// Indicates the registered command definition and the handler are out of sync.
    #[error("Command '{command}' is missing required option '{option}'")]
    MissingOption {
        /// Name of the command
        command: String,
        /// Name of the missing option
        option: String,
    },

    /// A slash command option carried a value outside its registered choices.
    #[error("Command '{command}' received invalid value '{value}' for option '{option}'")]
    InvalidOption {
        /// Name of the command
        command: String,
        /// Name of the option
        option: String,
        /// Value that was received
        value: String,
    },
}
