//! Core Kalah types: board snapshots, sowing and capture rules.

mod board;
mod config;
mod error;
mod perft;
mod pit_set;
mod player;
mod sow;

pub use board::{Kalah, LastMove};
pub use config::{
    DEFAULT_PITS_PER_PLAYER, DEFAULT_SEARCH_DEPTH, DEFAULT_SEEDS_PER_PIT, GameConfig,
    MAX_PITS_PER_PLAYER, max_seeds_per_pit,
};
pub use error::{ConfigError, MoveError};
pub use perft::{divide, perft};
pub use pit_set::PitSet;
pub use player::{Outcome, Player};
pub use sow::PotentialCapture;
