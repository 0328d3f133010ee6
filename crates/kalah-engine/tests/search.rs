//! Integration tests for the machine player.
//!
//! Covers move choice against a plain reference minimax, full games
//! played by the search on both sides and cancellation from another
//! thread.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::thread;
use std::time::Duration;

use kalah_core::{GameConfig, Kalah, Outcome, Player};
use kalah_engine::{
    Cancelled, MachineMove, MachineMoveError, SearchControl, evaluate, search,
};

fn config(pits: usize, seeds: u32, opening_player: Player) -> GameConfig {
    GameConfig {
        pits_per_player: pits,
        seeds_per_pit: seeds,
        opening_player,
        ..GameConfig::default()
    }
}

/// Reference value of the best child, recomputed without shortcuts.
fn reference(game: &Kalah, depth: u32, max_depth: u32) -> f64 {
    let mover = game.turn();
    let values = game.legal_moves(mover).map(|pit| {
        let child = game.make_move(pit);
        let own = evaluate(&child, depth);
        if child.is_over() || depth >= max_depth {
            own
        } else {
            own + reference(&child, depth + 1, max_depth)
        }
    });
    match mover {
        Player::Human => values.fold(f64::INFINITY, f64::min),
        Player::Machine => values.fold(f64::NEG_INFINITY, f64::max),
    }
}

// ── Move choice ──────────────────────────────────────────────────────────────

#[test]
fn score_matches_reference_minimax() {
    for (pits, seeds) in [(2, 2), (3, 2), (4, 1)] {
        for opening in Player::ALL {
            let game = Kalah::new(config(pits, seeds, opening)).unwrap();
            for depth in 1..=4 {
                let result = search(&game, depth, &SearchControl::default()).unwrap();
                assert_eq!(
                    result.score,
                    reference(&game, 1, depth),
                    "P={pits} S={seeds} {opening:?} opens, depth {depth}"
                );
                assert_eq!(result.depth, depth);
            }
        }
    }
}

#[test]
fn result_state_is_the_chosen_move() {
    let game = Kalah::new(config(6, 3, Player::Machine)).unwrap();
    let result = search(&game, 3, &SearchControl::default()).unwrap();
    assert!(game.legal_moves(Player::Machine).contains(result.pit));
    assert_eq!(result.state, game.make_move(result.pit));
    assert!(result.nodes > 1);
}

#[test]
fn machine_takes_large_capture() {
    // Machine pit 4 holds one seed for empty pit 5, facing eight human seeds.
    let game = Kalah::from_pits(
        config(3, 2, Player::Machine),
        vec![1, 8, 0, 0, 1, 0, 1, 1],
        Player::Machine,
    )
    .unwrap();
    let result = search(&game, 1, &SearchControl::default()).unwrap();
    assert_eq!(result.pit, 4);
    assert_eq!(result.state.pits(), &[1, 0, 0, 0, 0, 0, 1, 10]);
    assert_eq!(result.state.turn(), Player::Human);
}

#[test]
fn search_leaves_input_untouched() {
    let game = Kalah::new(config(4, 3, Player::Machine)).unwrap();
    let before = game.clone();
    let _ = game.apply_machine_move(3, &SearchControl::default()).unwrap();
    assert_eq!(game, before);
}

// ── Full games ───────────────────────────────────────────────────────────────

/// Let the search play both sides until the game ends.
fn self_play(mut game: Kalah, depth: u32) -> (Kalah, usize) {
    let total = game.total_seeds();
    let mut moves = 0;
    while !game.is_over() {
        game = search(&game, depth, &SearchControl::default()).unwrap().state;
        moves += 1;
        assert!(game.validate(), "inconsistent snapshot after {moves} moves: {game:?}");
        assert_eq!(game.pits().iter().sum::<u32>(), total);
        assert!(moves < 1_000, "game did not terminate");
    }
    (game, moves)
}

#[test]
fn single_seed_game_ends_within_two_moves() {
    for opening in Player::ALL {
        let (end, moves) = self_play(Kalah::new(config(1, 1, opening)).unwrap(), 1);
        assert!(moves <= 2, "{moves} moves");
        let human = end.seeds_of_player(Player::Human);
        let machine = end.seeds_of_player(Player::Machine);
        assert_eq!(end.winner(), Outcome::from_totals(human, machine));
    }
}

#[test]
fn one_ply_self_play_terminates() {
    for (pits, seeds) in [(6, 3), (6, 6), (3, 4), (8, 2)] {
        let (end, _) = self_play(Kalah::new(config(pits, seeds, Player::Human)).unwrap(), 1);
        assert!(end.outcome().is_some());
    }
}

// ── Cancellation ─────────────────────────────────────────────────────────────

#[test]
fn pre_stopped_search_is_cancelled() {
    let game = Kalah::new(config(6, 3, Player::Machine)).unwrap();
    let control = SearchControl::new(Arc::new(AtomicBool::new(true)));
    assert_eq!(search(&game, 1, &control).unwrap_err(), Cancelled);
}

#[test]
fn stop_from_another_thread_cancels_deep_search() {
    let game = Kalah::new(config(6, 3, Player::Machine)).unwrap();
    let control = SearchControl::default();
    let remote = control.clone();

    let worker = thread::spawn(move || game.apply_machine_move(12, &control));
    thread::sleep(Duration::from_millis(50));
    remote.stop();

    let outcome = worker.join().expect("search thread panicked");
    assert_eq!(outcome.unwrap_err(), MachineMoveError::Cancelled(Cancelled));
}
