//! Machine move selection.

pub mod control;
mod minimax;

use kalah_core::Kalah;
use tracing::debug;

use crate::error::Cancelled;
use control::SearchControl;
use minimax::{SearchContext, best_child};

/// Result of a completed search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Snapshot after the chosen move.
    pub state: Kalah,
    /// Board index of the chosen pit.
    pub pit: usize,
    /// Accumulated score of the chosen line, positive favours the machine.
    pub score: f64,
    /// Nodes expanded.
    pub nodes: u64,
    /// Ply limit searched.
    pub depth: u32,
}

/// Search `max_depth` plies from `game` and return the best move for the
/// player to move.
///
/// # Errors
///
/// [`Cancelled`] once `control` is stopped, however far the search got.
///
/// # Panics
///
/// Panics if the game is already over.
pub fn search(
    game: &Kalah,
    max_depth: u32,
    control: &SearchControl,
) -> Result<SearchResult, Cancelled> {
    let mut ctx = SearchContext {
        nodes: 0,
        max_depth,
        control,
    };

    match best_child(game, 1, &mut ctx) {
        Ok(node) => {
            debug!(
                depth = max_depth,
                nodes = ctx.nodes,
                score = node.score,
                pit = node.pit,
                "search complete"
            );
            Ok(SearchResult {
                state: node.state,
                pit: node.pit,
                score: node.score,
                nodes: ctx.nodes,
                depth: max_depth,
            })
        }
        Err(cancelled) => {
            debug!(depth = max_depth, nodes = ctx.nodes, "search cancelled");
            Err(cancelled)
        }
    }
}
