//! `apply_machine_move` on a snapshot.

use kalah_core::{ConfigError, Kalah, Player};

use crate::error::MachineMoveError;
use crate::search::control::SearchControl;
use crate::search::search;

/// Extension trait giving [`Kalah`] the machine's move.
pub trait MachineMove {
    /// Search `depth` plies and return the snapshot after the machine's
    /// best move. `self` is not modified.
    ///
    /// # Errors
    ///
    /// [`MachineMoveError::Illegal`] if the game is over or the human is to
    /// move, [`MachineMoveError::Config`] for a zero depth and
    /// [`MachineMoveError::Cancelled`] if `control` stops the search.
    fn apply_machine_move(
        &self,
        depth: u32,
        control: &SearchControl,
    ) -> Result<Kalah, MachineMoveError>;
}

impl MachineMove for Kalah {
    fn apply_machine_move(
        &self,
        depth: u32,
        control: &SearchControl,
    ) -> Result<Kalah, MachineMoveError> {
        self.check_turn(Player::Machine)?;
        if depth < 1 {
            return Err(ConfigError::InvalidSearchDepth { found: depth }.into());
        }
        Ok(search(self, depth, control)?.state)
    }
}
