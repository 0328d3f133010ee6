//! Move execution via copy-make: sowing, captures and the turn rule.

use tracing::debug;

use crate::board::{Kalah, LastMove};
use crate::error::MoveError;
use crate::player::Player;

/// Seeds a single move from `source` would capture, computed without
/// touching the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PotentialCapture {
    /// Own pit the last seed lands in: empty beforehand, or the source
    /// itself after whole laps.
    pub target: usize,
    /// Opponent seeds taken from the opposite pit.
    pub seeds: u32,
}

/// Mutable staging copy of a snapshot while a move is applied.
///
/// Never escapes this module: [`Sowing::freeze`] hands back the finished,
/// immutable snapshot.
struct Sowing {
    next: Kalah,
    mover: Player,
}

impl Sowing {
    fn begin(from: &Kalah) -> Sowing {
        Sowing {
            next: from.clone(),
            mover: from.raw_to_move(),
        }
    }

    /// Empty `source` and drop one seed into each following index, holding
    /// back the last one. Returns the target the held seed is aimed at.
    fn sow_all_but_last(&mut self, source: usize) -> usize {
        let mut remaining = self.next.seeds_at(source);
        self.next.empty(source);
        let mut pit = source;
        while remaining > 1 {
            pit = self.next.next_index(pit, self.mover);
            self.next.fill(pit, 1);
            remaining -= 1;
        }
        self.next.next_index(pit, self.mover)
    }

    /// The held seed captures iff it would land in an own pit facing a
    /// non-empty one, and that pit was empty before the move or is the
    /// source. A source refilled on earlier laps keeps those seeds.
    fn captures(&self, source: usize, target: usize) -> bool {
        !self.next.is_store(target)
            && self.next.owner(target) == self.mover
            && (target == source || self.next.seeds_at(target) == 0)
            && self.next.seeds_at(self.next.opposite(target)) > 0
    }

    fn capture(&mut self, target: usize) {
        let opposite = self.next.opposite(target);
        let captured = self.next.seeds_at(opposite) + 1;
        let store = self.next.store_index(self.mover);
        self.next.fill(store, captured);
        self.next.empty(opposite);
        self.next.set_to_move(self.mover.opponent());
    }

    fn drop_last(&mut self, target: usize) {
        self.next.fill(target, 1);
        if target != self.next.store_index(self.mover) {
            self.next.set_to_move(self.mover.opponent());
        }
    }

    fn freeze(mut self) -> Kalah {
        if self.next.is_over() {
            let outcome = self.next.outcome_from_totals();
            debug!(%outcome, "game over");
            self.next.set_outcome(outcome);
        }
        self.next
    }
}

impl Kalah {
    /// Play the human's pit `pit` (0-based, left to right) and return the
    /// resulting snapshot. `self` is not modified.
    ///
    /// Returns `Ok(None)` if the pit is empty.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidPit`] if `pit` is off the human's row,
    /// [`MoveError::GameOver`] once the game has ended and
    /// [`MoveError::NotYourTurn`] while the machine is to move.
    pub fn apply_human_move(&self, pit: usize) -> Result<Option<Kalah>, MoveError> {
        if pit >= self.pits_per_player() {
            return Err(MoveError::InvalidPit {
                pit,
                pits_per_player: self.pits_per_player(),
            });
        }
        self.check_turn(Player::Human)?;
        if self.seeds_at(pit) == 0 {
            return Ok(None);
        }
        Ok(Some(self.make_move(pit)))
    }

    /// Check that the game is running and `player` is to move.
    pub fn check_turn(&self, player: Player) -> Result<(), MoveError> {
        if self.is_over() {
            Err(MoveError::GameOver)
        } else if self.raw_to_move() != player {
            Err(MoveError::NotYourTurn { player })
        } else {
            Ok(())
        }
    }

    /// Sow board index `pit` for the player to move and return the resulting
    /// snapshot. `self` is not modified.
    ///
    /// `pit` must be in the mover's legal-move set. Debug builds panic on
    /// any other pit; release builds return the snapshot unchanged.
    pub fn make_move(&self, pit: usize) -> Kalah {
        let mover = self.raw_to_move();
        let legal = !self.is_over() && self.legal_moves(mover).contains(pit);
        debug_assert!(legal, "pit {pit} is not a legal move for {mover}");
        if !legal {
            return self.clone();
        }

        let mut sowing = Sowing::begin(self);
        let target = sowing.sow_all_but_last(pit);
        sowing.next.set_last_move(LastMove { source: pit, target });

        if sowing.captures(pit, target) {
            sowing.capture(target);
        } else {
            sowing.drop_last(target);
        }
        sowing.freeze()
    }

    /// Work out, read-only, what sowing `source` would capture for `mover`.
    ///
    /// Agrees with [`Kalah::make_move`]. Within one lap every index is
    /// passed at most once, so a target other than the source must already
    /// be empty. Every whole lap drops one seed into the opposite pit, so a
    /// sowing that ends back on the source adds one seed per lap. Any other
    /// sowing longer than a lap refills the target first and never captures.
    pub fn would_capture(&self, source: usize, mover: Player) -> Option<PotentialCapture> {
        let sown = self.seeds_at(source) as usize;
        if sown == 0 {
            return None;
        }
        let lap = self.total_pits() - 1;
        let target = self.landing_pit(source, mover);
        if self.is_store(target) || self.owner(target) != mover {
            return None;
        }
        let passes = if target == source {
            sown / lap
        } else if sown > lap || self.seeds_at(target) > 0 {
            return None;
        } else {
            usize::from(target < source)
        };
        let seeds = self.seeds_at(self.opposite(target)) + passes as u32;
        (seeds > 0).then_some(PotentialCapture { target, seeds })
    }
}
