//! Evaluation and minimax search for the Kalah machine player.

pub mod error;
pub mod eval;
pub mod machine;
pub mod search;

pub use error::{Cancelled, MachineMoveError};
pub use eval::evaluate;
pub use machine::MachineMove;
pub use search::control::SearchControl;
pub use search::{SearchResult, search};
