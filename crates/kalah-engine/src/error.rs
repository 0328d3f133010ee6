//! Error types for the machine player.

use kalah_core::{ConfigError, MoveError};

/// The search was stopped through its [`SearchControl`](crate::SearchControl)
/// before it finished. No partial result is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("search cancelled")]
pub struct Cancelled;

/// Errors from [`MachineMove::apply_machine_move`](crate::MachineMove::apply_machine_move).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MachineMoveError {
    /// The game is over or the human is to move.
    #[error(transparent)]
    Illegal(#[from] MoveError),
    /// The requested depth is not a valid search depth.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The search was cancelled.
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

#[cfg(test)]
mod tests {
    use super::*;
    use kalah_core::Player;

    #[test]
    fn display_forwards_inner_message() {
        let err = MachineMoveError::from(MoveError::NotYourTurn {
            player: Player::Machine,
        });
        assert_eq!(err.to_string(), "it is not Machine's turn");
        assert_eq!(MachineMoveError::from(Cancelled).to_string(), "search cancelled");
    }
}
