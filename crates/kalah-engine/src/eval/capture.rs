//! Capture-opportunity evaluation.
//!
//! For each of a player's legal moves the read-only capture check tells how
//! many opponent seeds that single move would take. Moves aiming at the same
//! target pit compete: only the best one per target counts.

use kalah_core::{Kalah, PitSet, Player};

/// Sum over target pits of the best capture `player` could make into each.
pub fn capturable_seeds(game: &Kalah, player: Player) -> u32 {
    let mut best_per_target = [0u32; PitSet::CAPACITY];
    let mut sum = 0;

    for source in game.legal_moves(player) {
        let Some(capture) = game.would_capture(source, player) else {
            continue;
        };
        let best = &mut best_per_target[capture.target];
        if capture.seeds > *best {
            sum = sum - *best + capture.seeds;
            *best = capture.seeds;
        }
    }

    sum
}
