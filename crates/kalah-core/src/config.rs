//! Construction parameters for a game.

use crate::error::ConfigError;
use crate::pit_set::PitSet;
use crate::player::Player;

/// Pits per player in classical Kalah.
pub const DEFAULT_PITS_PER_PLAYER: usize = 6;

/// Seeds initially placed in every pit.
pub const DEFAULT_SEEDS_PER_PIT: u32 = 3;

/// Plies searched for the machine's move unless configured otherwise.
pub const DEFAULT_SEARCH_DEPTH: u32 = 3;

/// Largest row length whose `2P + 2` board indices fit in a [`PitSet`].
pub const MAX_PITS_PER_PLAYER: usize = PitSet::CAPACITY / 2 - 1;

/// Largest seed count per pit for which every seed on a board of `pits`
/// pits per player still fits a `u32` counter.
pub const fn max_seeds_per_pit(pits: usize) -> u32 {
    if pits == 0 {
        return u32::MAX;
    }
    (u32::MAX as usize / (2 * pits)) as u32
}

/// Fixed parameters of a game, validated by [`GameConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Pits on each player's row, excluding the store.
    pub pits_per_player: usize,
    /// Seeds in each pit at the start.
    pub seeds_per_pit: u32,
    /// Ply limit of the machine's search.
    pub search_depth: u32,
    /// Player who makes the first move.
    pub opening_player: Player,
}

impl GameConfig {
    /// Check every field, reporting the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pits_per_player < 1 {
            return Err(ConfigError::TooFewPits {
                found: self.pits_per_player,
            });
        }
        if self.pits_per_player > MAX_PITS_PER_PLAYER {
            return Err(ConfigError::TooManyPits {
                found: self.pits_per_player,
                max: MAX_PITS_PER_PLAYER,
            });
        }
        if self.seeds_per_pit < 1 {
            return Err(ConfigError::TooFewSeeds {
                found: self.seeds_per_pit,
            });
        }
        let max = max_seeds_per_pit(self.pits_per_player);
        if self.seeds_per_pit > max {
            return Err(ConfigError::TooManySeeds {
                found: self.seeds_per_pit,
                max,
            });
        }
        validate_search_depth(self.search_depth)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pits_per_player: DEFAULT_PITS_PER_PLAYER,
            seeds_per_pit: DEFAULT_SEEDS_PER_PIT,
            search_depth: DEFAULT_SEARCH_DEPTH,
            opening_player: Player::Human,
        }
    }
}

pub(crate) fn validate_search_depth(depth: u32) -> Result<(), ConfigError> {
    if depth < 1 {
        Err(ConfigError::InvalidSearchDepth { found: depth })
    } else {
        Ok(())
    }
}
