//! Perft (performance test) over the Kalah move tree, for move application
//! correctness checks.

use crate::board::Kalah;

/// Count the snapshots reachable in exactly `depth` plies, counting a
/// finished game as a single leaf wherever it occurs.
pub fn perft(game: &Kalah, depth: usize) -> u64 {
    if depth == 0 || game.is_over() {
        return 1;
    }

    let moves = game.legal_moves(game.turn());

    if depth == 1 {
        return u64::from(moves.count());
    }

    moves.map(|pit| perft(&game.make_move(pit), depth - 1)).sum()
}

/// Run perft with a per-pit breakdown for the player to move.
///
/// Returns `(pit, node_count)` pairs in ascending pit order.
pub fn divide(game: &Kalah, depth: usize) -> Vec<(usize, u64)> {
    if game.is_over() {
        return Vec::new();
    }
    game.legal_moves(game.turn())
        .map(|pit| {
            let child = game.make_move(pit);
            let count = if depth <= 1 { 1 } else { perft(&child, depth - 1) };
            (pit, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::player::Player;

    fn game(pits: usize, seeds: u32) -> Kalah {
        Kalah::new(GameConfig {
            pits_per_player: pits,
            seeds_per_pit: seeds,
            ..GameConfig::default()
        })
        .unwrap()
    }

    /// Visit every snapshot reachable within `depth` plies.
    fn walk(game: &Kalah, depth: usize, visit: &mut impl FnMut(&Kalah)) {
        visit(game);
        if depth == 0 || game.is_over() {
            return;
        }
        for pit in game.legal_moves(game.turn()) {
            walk(&game.make_move(pit), depth - 1, visit);
        }
    }

    #[test]
    fn perft_depth_zero_and_one() {
        let start = game(6, 3);
        assert_eq!(perft(&start, 0), 1);
        assert_eq!(perft(&start, 1), 6);
    }

    #[test]
    fn perft_single_pit_game() {
        // The only move fills the store and ends the game.
        let start = game(1, 1);
        assert_eq!(perft(&start, 1), 1);
        assert_eq!(perft(&start, 5), 1);
    }

    #[test]
    fn perft_depth_two_counts_extra_turns() {
        // From the start only pit 3 lands in the store; its follow-ups are
        // the human's 5 remaining pits, every other move hands 6 replies.
        let start = game(6, 3);
        assert_eq!(perft(&start, 2), 5 * 6 + 5);
    }

    #[test]
    fn divide_matches_perft() {
        let start = game(4, 2);
        let split = divide(&start, 3);
        assert_eq!(split.len(), 4);
        assert_eq!(split.iter().map(|&(_, n)| n).sum::<u64>(), perft(&start, 3));
        assert!(split.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn every_reachable_snapshot_is_consistent() {
        for (pits, seeds) in [(1, 1), (2, 1), (3, 2), (4, 3)] {
            walk(&game(pits, seeds), 5, &mut |g: &Kalah| {
                assert!(g.validate(), "inconsistent snapshot {g:?}");
            });
        }
    }

    #[test]
    fn capture_check_agrees_with_real_move() {
        for (pits, seeds) in [(1, 4), (2, 1), (2, 4), (3, 2), (4, 3)] {
            walk(&game(pits, seeds), 5, &mut |g: &Kalah| {
                if g.is_over() {
                    return;
                }
                let mover = g.turn();
                let store_before = g.store(mover);
                let lap = g.total_pits() as u32 - 1;
                for pit in g.legal_moves(mover) {
                    let next = g.make_move(pit);
                    let gained = next.store(mover) - store_before;
                    match g.would_capture(pit, mover) {
                        Some(capture) => {
                            let target = capture.target;
                            // Whole laps back onto the source leave a seed
                            // there from every lap but the last.
                            let left = if target == pit { g.pits()[pit] / lap - 1 } else { 0 };
                            assert_eq!(next.last_move_target(), Some(target));
                            assert_eq!(next.seeds(target), Some(left));
                            assert_eq!(next.seeds(g.opposite(target)), Some(0));
                            if !next.is_over() {
                                assert_eq!(next.turn(), mover.opponent());
                            }
                            // Store gains the captured seeds, the held seed and
                            // one seed per lap passing it.
                            assert!(gained > capture.seeds);
                        }
                        None => {
                            // Without a capture the held seed stays in the
                            // target and the opposite pit never shrinks.
                            let target = next.last_move_target().unwrap();
                            if !g.is_store(target) && g.owner(target) == mover {
                                let opposite = g.opposite(target);
                                assert!(next.pits()[target] > 0, "capture missed at {target} in {g:?}");
                                assert!(
                                    next.pits()[opposite] >= g.pits()[opposite],
                                    "capture missed at {target} in {g:?}"
                                );
                            }
                        }
                    }
                }
            });
        }
    }

    #[test]
    fn human_and_machine_are_symmetric_at_start() {
        let human_first = game(3, 3);
        let machine_first = Kalah::new(GameConfig {
            pits_per_player: 3,
            seeds_per_pit: 3,
            opening_player: Player::Machine,
            ..GameConfig::default()
        })
        .unwrap();
        assert_eq!(perft(&human_first, 4), perft(&machine_first, 4));
    }
}
