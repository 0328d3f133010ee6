//! Static evaluation, always from the machine's point of view.
//!
//! Every term is a differential: the machine's value minus
//! [`HUMAN_WEIGHT`] times the human's, so the machine plays slightly
//! defensively.

pub mod capture;
pub mod terminal;

use kalah_core::{Kalah, Player};

use capture::capturable_seeds;
use terminal::terminal_bonus;

/// Factor applied to the human's side of every differential.
pub const HUMAN_WEIGHT: f64 = 1.5;

/// Factor applied to the store differential.
pub const STORE_WEIGHT: f64 = 3.0;

/// Evaluate `game` as reached at search depth `depth` (at least 1).
///
/// Positive scores favour the machine.
pub fn evaluate(game: &Kalah, depth: u32) -> f64 {
    let stores = differential(|p| f64::from(game.store(p)));
    let captures = differential(|p| f64::from(capturable_seeds(game, p)));
    let lucrative = differential(|p| f64::from(game.lucrative_score(p)));

    STORE_WEIGHT * stores + captures + lucrative + terminal_bonus(game, depth)
}

fn differential(term: impl Fn(Player) -> f64) -> f64 {
    term(Player::Machine) - HUMAN_WEIGHT * term(Player::Human)
}
