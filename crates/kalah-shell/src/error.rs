//! Console shell errors.

use kalah_core::{ConfigError, MoveError};
use kalah_engine::MachineMoveError;

/// Errors that can occur while handling shell input.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// A command word the shell does not know.
    #[error("unknown command: {command} (try `help`)")]
    UnknownCommand {
        /// The first word of the input line.
        command: String,
    },

    /// A command is missing a required argument.
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        /// The command name.
        command: &'static str,
        /// Description of the missing argument.
        argument: &'static str,
    },

    /// An argument is not a whole number.
    #[error("not a number: {value}")]
    InvalidNumber {
        /// The argument that failed to parse.
        value: String,
    },

    /// A numeric argument lies outside the range the shell accepts.
    #[error("{name} must be in {min}..={max}, got {value}")]
    OutOfRange {
        /// What the argument sets.
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// Smallest accepted value.
        min: u32,
        /// Largest accepted value.
        max: u32,
    },

    /// The requested game configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The requested move is not allowed.
    #[error(transparent)]
    Move(#[from] MoveError),

    /// The machine could not move.
    #[error(transparent)]
    Machine(#[from] MachineMoveError),

    /// An I/O error occurred while writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
