//! Cumulative minimax without pruning.
//!
//! A node's value is its own static evaluation plus the value of its best
//! child, so scores add up along the chosen line instead of using only the
//! leaf.

use kalah_core::{Kalah, Player};

use crate::error::Cancelled;
use crate::eval::evaluate;
use crate::search::control::SearchControl;

/// Mutable state threaded through the recursion.
pub(super) struct SearchContext<'a> {
    /// Nodes expanded so far.
    pub nodes: u64,
    /// Deepest ply whose children are still expanded.
    pub max_depth: u32,
    pub control: &'a SearchControl,
}

/// A chosen child and its accumulated value.
pub(super) struct Node {
    pub state: Kalah,
    pub pit: usize,
    pub score: f64,
}

/// Pick the best child of the running `game`, whose children sit at
/// `depth`. The human minimises, the machine maximises and ties keep the
/// lowest pit.
pub(super) fn best_child(
    game: &Kalah,
    depth: u32,
    ctx: &mut SearchContext<'_>,
) -> Result<Node, Cancelled> {
    if ctx.control.should_stop() {
        return Err(Cancelled);
    }
    ctx.nodes += 1;

    let mover = game.turn();
    let mut best: Option<Node> = None;

    for pit in game.legal_moves(mover) {
        let child = game.make_move(pit);
        let score = child_value(&child, depth, ctx)?;

        let improves = match &best {
            None => true,
            Some(node) => match mover {
                Player::Human => score < node.score,
                Player::Machine => score > node.score,
            },
        };
        if improves {
            best = Some(Node {
                state: child,
                pit,
                score,
            });
        }
    }

    Ok(best.expect("a running game has a legal move"))
}

fn child_value(child: &Kalah, depth: u32, ctx: &mut SearchContext<'_>) -> Result<f64, Cancelled> {
    let score = evaluate(child, depth);
    if child.is_over() || depth >= ctx.max_depth {
        return Ok(score);
    }
    Ok(score + best_child(child, depth + 1, ctx)?.score)
}

#[cfg(test)]
mod tests {
    use kalah_core::{GameConfig, Kalah, Player};

    use super::*;

    fn run(game: &Kalah, max_depth: u32) -> Node {
        let control = SearchControl::default();
        let mut ctx = SearchContext {
            nodes: 0,
            max_depth,
            control: &control,
        };
        best_child(game, 1, &mut ctx).unwrap()
    }

    #[test]
    fn one_ply_picks_best_static_child() {
        let game = Kalah::new(GameConfig {
            opening_player: Player::Machine,
            ..GameConfig::default()
        })
        .unwrap();
        let node = run(&game, 1);
        let best = game
            .legal_moves(Player::Machine)
            .map(|pit| evaluate(&game.make_move(pit), 1))
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(node.score, best);
        assert_eq!(node.state, game.make_move(node.pit));
    }

    #[test]
    fn human_node_minimises() {
        let game = Kalah::new(GameConfig::default()).unwrap();
        let node = run(&game, 1);
        let worst = game
            .legal_moves(Player::Human)
            .map(|pit| evaluate(&game.make_move(pit), 1))
            .fold(f64::INFINITY, f64::min);
        assert_eq!(node.score, worst);
    }

    #[test]
    fn two_plies_add_best_reply() {
        let game = Kalah::new(GameConfig {
            pits_per_player: 3,
            seeds_per_pit: 2,
            opening_player: Player::Machine,
            ..GameConfig::default()
        })
        .unwrap();
        let node = run(&game, 2);

        let reply = |child: &Kalah| {
            if child.is_over() {
                return 0.0;
            }
            let side = child.turn();
            let values = child.legal_moves(side).map(|pit| evaluate(&child.make_move(pit), 2));
            match side {
                Player::Human => values.fold(f64::INFINITY, f64::min),
                Player::Machine => values.fold(f64::NEG_INFINITY, f64::max),
            }
        };
        let expected = game
            .legal_moves(Player::Machine)
            .map(|pit| {
                let child = game.make_move(pit);
                evaluate(&child, 1) + reply(&child)
            })
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(node.score, expected);
    }

    #[test]
    fn stop_flag_aborts_before_expanding() {
        let game = Kalah::new(GameConfig::default()).unwrap();
        let control = SearchControl::default();
        control.stop();
        let mut ctx = SearchContext {
            nodes: 0,
            max_depth: 3,
            control: &control,
        };
        assert!(best_child(&game, 1, &mut ctx).is_err());
        assert_eq!(ctx.nodes, 0);
    }
}
