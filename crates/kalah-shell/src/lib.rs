//! Line-oriented console front-end for Kalah.

pub mod command;
pub mod error;
pub mod session;
pub mod shell;

pub use command::{BoardSize, Command, parse_command};
pub use error::ShellError;
pub use session::{Notice, Session};
pub use shell::Shell;
