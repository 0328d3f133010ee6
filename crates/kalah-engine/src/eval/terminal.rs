//! Bonus for decided positions.

use kalah_core::{Kalah, Outcome, Player};

use super::HUMAN_WEIGHT;

/// Bonus for a machine win at depth 1. Divided by the depth so that faster
/// wins score higher.
pub const WIN_BONUS: f64 = 500.0;

/// Return the terminal bonus of `game` reached at search depth `depth`.
///
/// Zero while the game runs and for a draw.
pub fn terminal_bonus(game: &Kalah, depth: u32) -> f64 {
    debug_assert!(depth >= 1, "search depth starts at 1");
    let scaled = WIN_BONUS / f64::from(depth);
    match game.outcome() {
        Some(Outcome::Winner(Player::Machine)) => scaled,
        Some(Outcome::Winner(Player::Human)) => -HUMAN_WEIGHT * scaled,
        Some(Outcome::Draw) | None => 0.0,
    }
}
