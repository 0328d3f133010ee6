//! Error types for game construction and move application.

use crate::player::Player;

/// A game configuration value outside its valid range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Every player needs at least one pit.
    #[error("number of pits per player must be at least 1, got {found}")]
    TooFewPits {
        /// The rejected value.
        found: usize,
    },
    /// The board does not fit the legal-move bitset.
    #[error("number of pits per player must be at most {max}, got {found}")]
    TooManyPits {
        /// The rejected value.
        found: usize,
        /// Largest supported value.
        max: usize,
    },
    /// Every pit starts with at least one seed.
    #[error("number of seeds per pit must be at least 1, got {found}")]
    TooFewSeeds {
        /// The rejected value.
        found: u32,
    },
    /// The seeds on the board would overflow a pit counter.
    #[error("number of seeds per pit must be at most {max} for this board, got {found}")]
    TooManySeeds {
        /// The rejected value.
        found: u32,
        /// Largest supported value for the configured row length.
        max: u32,
    },
    /// A position lists the wrong number of pits and stores.
    #[error("expected {expected} pits and stores, got {found}")]
    WrongPitCount {
        /// Board indices for the configured row length.
        expected: usize,
        /// Entries supplied.
        found: usize,
    },
    /// A position does not hold the seeds the configuration starts with.
    #[error("expected {expected} seeds in total, got {found}")]
    SeedTotal {
        /// Seeds at the start of the configured game.
        expected: u64,
        /// Seeds supplied.
        found: u64,
    },
    /// The search must look at least one ply ahead.
    #[error("search depth must be at least 1, got {found}")]
    InvalidSearchDepth {
        /// The rejected value.
        found: u32,
    },
}

/// Errors from requesting a move on a [`Kalah`](crate::board::Kalah) snapshot.
///
/// An empty pit is not an error: it is reported as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The pit is not on the mover's row.
    #[error("invalid pit {pit}, expected 0..{pits_per_player}")]
    InvalidPit {
        /// The rejected pit number.
        pit: usize,
        /// Number of pits on each row.
        pits_per_player: usize,
    },
    /// The game has already ended.
    #[error("the game is already over")]
    GameOver,
    /// The requesting player is not the one to move.
    #[error("it is not {player}'s turn")]
    NotYourTurn {
        /// The player who asked to move.
        player: Player,
    },
}
