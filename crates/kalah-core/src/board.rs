//! The Kalah board: pit contents, turn, legal-move sets and heuristic counters.
//!
//! Numbering: pits `0..P` belong to the human, index `P` is the human's store,
//! pits `P+1..=2P` belong to the machine and `2P+1` is the machine's store.
//! Sowing runs in ascending index order, wrapping at the end.

use std::fmt;

use crate::config::{GameConfig, validate_search_depth};
use crate::error::ConfigError;
use crate::pit_set::PitSet;
use crate::player::{Outcome, Player};

/// Source and target pit of the most recent move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LastMove {
    /// Pit the seeds were taken from.
    pub source: usize,
    /// Pit the final seed was aimed at (a capture leaves it empty).
    pub target: usize,
}

/// One immutable snapshot of a Kalah game.
///
/// Moves never modify a snapshot; they return a new, fully independent one.
#[derive(Clone, PartialEq, Eq)]
pub struct Kalah {
    /// Pits on each row, excluding stores.
    pits_per_player: usize,
    /// Initial seeds per pit.
    seeds_per_pit: u32,
    /// Ply limit for the machine's search.
    search_depth: u32,
    /// Player who made the first move.
    opening_player: Player,
    /// Player whose turn it is (meaningless once the game is over).
    to_move: Player,
    /// Seed count of every pit and store, indexed by board index.
    seeds: Vec<u32>,
    /// Non-empty pits of each player, indexed by [`Player::index()`].
    legal: [PitSet; Player::COUNT],
    /// Per player: own empty pits facing a lucrative opposite pit.
    lucrative: [i32; Player::COUNT],
    /// Endpoints of the move that produced this snapshot.
    last_move: Option<LastMove>,
    /// Fixed once either row runs empty.
    outcome: Option<Outcome>,
}

impl Kalah {
    /// Set up the starting position for `config`.
    pub fn new(config: GameConfig) -> Result<Kalah, ConfigError> {
        config.validate()?;
        let pits = config.pits_per_player;
        let total = 2 * pits + 2;

        let mut seeds = vec![config.seeds_per_pit; total];
        seeds[pits] = 0;
        seeds[total - 1] = 0;

        Ok(Kalah {
            pits_per_player: pits,
            seeds_per_pit: config.seeds_per_pit,
            search_depth: config.search_depth,
            opening_player: config.opening_player,
            to_move: config.opening_player,
            seeds,
            legal: [PitSet::range(0, pits), PitSet::range(pits + 1, total - 1)],
            lucrative: [0; Player::COUNT],
            last_move: None,
            outcome: None,
        })
    }

    /// Set up an arbitrary position: `seeds` lists every pit and store in
    /// board order, and `to_move` is the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Any [`GameConfig::validate`] failure, plus
    /// [`ConfigError::WrongPitCount`] if `seeds` does not cover the board and
    /// [`ConfigError::SeedTotal`] if it does not hold exactly the seeds the
    /// configuration starts with.
    pub fn from_pits(
        config: GameConfig,
        seeds: Vec<u32>,
        to_move: Player,
    ) -> Result<Kalah, ConfigError> {
        let game = Kalah::new(config)?;
        let expected = game.total_pits();
        if seeds.len() != expected {
            return Err(ConfigError::WrongPitCount {
                expected,
                found: seeds.len(),
            });
        }
        let expected = u64::from(game.total_seeds());
        let found = seeds.iter().copied().map(u64::from).sum::<u64>();
        if found != expected {
            return Err(ConfigError::SeedTotal { expected, found });
        }
        Ok(game.with_seeds(seeds, to_move))
    }

    /// Build a position without checking seed conservation.
    #[cfg(test)]
    pub(crate) fn from_raw(config: GameConfig, seeds: Vec<u32>, to_move: Player) -> Kalah {
        let game = Kalah::new(config).unwrap();
        assert_eq!(seeds.len(), game.total_pits());
        game.with_seeds(seeds, to_move)
    }

    /// Replace the seed layout, deriving the cached sets and counters.
    fn with_seeds(mut self, seeds: Vec<u32>, to_move: Player) -> Kalah {
        self.seeds = seeds;
        self.to_move = to_move;
        for player in Player::ALL {
            self.legal[player.index()] = self.legal_from_scratch(player);
            self.lucrative[player.index()] = self.lucrative_from_scratch(player);
        }
        if self.is_over() {
            self.outcome = Some(self.outcome_from_totals());
        }
        self
    }

    /// Return the player who opened the game.
    #[inline]
    pub fn opening_player(&self) -> Player {
        self.opening_player
    }

    /// Return the player to move.
    ///
    /// # Panics
    ///
    /// Panics if the game is over: nobody is to move then.
    pub fn turn(&self) -> Player {
        assert!(!self.is_over(), "the game is already over");
        self.to_move
    }

    /// Return `true` if either player has no seeds left in their pits.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.legal.iter().any(|set| set.is_void())
    }

    /// Return the outcome, or `None` while the game is running.
    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Return the outcome of a finished game.
    ///
    /// # Panics
    ///
    /// Panics if the game is not over yet.
    pub fn winner(&self) -> Outcome {
        self.outcome.expect("the game is not over yet")
    }

    /// Change the ply limit used for the machine's search.
    pub fn set_search_depth(&mut self, level: u32) -> Result<(), ConfigError> {
        validate_search_depth(level)?;
        self.search_depth = level;
        Ok(())
    }

    /// Take over the ply limit of `other`.
    pub fn inherit_search_depth(&mut self, other: &Kalah) {
        self.search_depth = other.search_depth;
    }

    /// Return the ply limit used for the machine's search.
    #[inline]
    pub fn search_depth(&self) -> u32 {
        self.search_depth
    }

    /// Return the number of pits on each row.
    #[inline]
    pub fn pits_per_player(&self) -> usize {
        self.pits_per_player
    }

    /// Return the initial number of seeds per pit.
    #[inline]
    pub fn seeds_per_pit(&self) -> u32 {
        self.seeds_per_pit
    }

    /// Return the number of board indices (pits and stores).
    #[inline]
    pub fn total_pits(&self) -> usize {
        self.seeds.len()
    }

    /// Return the number of seeds in play, constant for the whole game.
    ///
    /// [`GameConfig::validate`] caps the seeds per pit so this fits.
    pub fn total_seeds(&self) -> u32 {
        2 * self.pits_per_player as u32 * self.seeds_per_pit
    }

    /// Return the seed count at board index `pit`, or `None` off the board.
    #[inline]
    pub fn seeds(&self, pit: usize) -> Option<u32> {
        self.seeds.get(pit).copied()
    }

    #[inline]
    pub(crate) fn seeds_at(&self, pit: usize) -> u32 {
        self.seeds[pit]
    }

    /// Return all seed counts in board order.
    #[inline]
    pub fn pits(&self) -> &[u32] {
        &self.seeds
    }

    /// Return the seeds owned by `player`: their row plus their store.
    pub fn seeds_of_player(&self, player: Player) -> u32 {
        self.legal[player.index()]
            .map(|pit| self.seeds[pit])
            .sum::<u32>()
            + self.store(player)
    }

    /// Return the board index of `player`'s store.
    #[inline]
    pub fn store_index(&self, player: Player) -> usize {
        match player {
            Player::Human => self.pits_per_player,
            Player::Machine => 2 * self.pits_per_player + 1,
        }
    }

    /// Return the seeds in `player`'s store.
    #[inline]
    pub fn store(&self, player: Player) -> u32 {
        self.seeds[self.store_index(player)]
    }

    /// Return `true` if `pit` is one of the two stores.
    #[inline]
    pub fn is_store(&self, pit: usize) -> bool {
        pit == self.pits_per_player || pit == 2 * self.pits_per_player + 1
    }

    /// Return the player owning board index `pit` (stores included).
    #[inline]
    pub fn owner(&self, pit: usize) -> Player {
        if pit <= self.pits_per_player {
            Player::Human
        } else {
            Player::Machine
        }
    }

    /// Return the pit facing `pit` across the board.
    #[inline]
    pub fn opposite(&self, pit: usize) -> usize {
        debug_assert!(!self.is_store(pit), "stores have no opposite pit");
        2 * self.pits_per_player - pit
    }

    /// Return the index after `pit` in sowing order for `mover`, skipping the
    /// opponent's store.
    #[inline]
    pub fn next_index(&self, pit: usize, mover: Player) -> usize {
        let next = (pit + 1) % self.total_pits();
        if next == self.store_index(mover.opponent()) {
            (next + 1) % self.total_pits()
        } else {
            next
        }
    }

    /// Return where the last seed of `source` lands when `mover` sows it.
    ///
    /// A lap visits `2P + 1` indices and ends back on `source`, so only the
    /// remainder needs stepping.
    pub fn landing_pit(&self, source: usize, mover: Player) -> usize {
        let lap = self.total_pits() - 1;
        let steps = self.seeds[source] as usize % lap;
        let mut pit = source;
        for _ in 0..steps {
            pit = self.next_index(pit, mover);
        }
        pit
    }

    /// Return the pits of `player` that currently hold seeds.
    #[inline]
    pub fn legal_moves(&self, player: Player) -> PitSet {
        self.legal[player.index()]
    }

    /// Return `player`'s count of own empty pits facing a lucrative pit.
    #[inline]
    pub fn lucrative_score(&self, player: Player) -> i32 {
        self.lucrative[player.index()]
    }

    /// Return the endpoints of the last move, or `None` at the start.
    #[inline]
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// Return the source pit of the last move.
    #[inline]
    pub fn last_move_source(&self) -> Option<usize> {
        self.last_move.map(|mv| mv.source)
    }

    /// Return the target pit of the last move.
    #[inline]
    pub fn last_move_target(&self) -> Option<usize> {
        self.last_move.map(|mv| mv.target)
    }

    /// Return `true` if `pit` holds at least twice the starting seed count.
    #[inline]
    pub fn is_lucrative(&self, pit: usize) -> bool {
        self.seeds[pit] >= 2 * self.seeds_per_pit
    }

    /// Return `true` if `pit` is empty and faces a lucrative pit.
    #[inline]
    pub(crate) fn is_lucrative_capture(&self, pit: usize) -> bool {
        self.seeds[pit] == 0 && self.is_lucrative(self.opposite(pit))
    }

    /// The row of `player`, stores excluded.
    pub(crate) fn row(&self, player: Player) -> PitSet {
        let pits = self.pits_per_player;
        match player {
            Player::Human => PitSet::range(0, pits),
            Player::Machine => PitSet::range(pits + 1, 2 * pits + 1),
        }
    }

    /// Recompute `player`'s legal-move set from the seed counts.
    pub fn legal_from_scratch(&self, player: Player) -> PitSet {
        self.row(player).filter(|&pit| self.seeds[pit] > 0).fold(PitSet::EMPTY, PitSet::with)
    }

    /// Recompute `player`'s lucrative counter from the seed counts.
    pub fn lucrative_from_scratch(&self, player: Player) -> i32 {
        self.row(player).filter(|&pit| self.is_lucrative_capture(pit)).count() as i32
    }

    pub(crate) fn outcome_from_totals(&self) -> Outcome {
        Outcome::from_totals(
            self.seeds_of_player(Player::Human),
            self.seeds_of_player(Player::Machine),
        )
    }

    /// Check the cached sets and counters against the seed counts.
    pub fn validate(&self) -> bool {
        let sum = self.seeds.iter().copied().map(u64::from).sum::<u64>();
        let conserved = sum == u64::from(self.total_seeds());
        conserved
            && Player::ALL.into_iter().all(|player| {
                self.legal_moves(player) == self.legal_from_scratch(player)
                    && self.lucrative_score(player) == self.lucrative_from_scratch(player)
            })
    }

    // --- Mutation helpers, only reachable through the move builder ---

    pub(crate) fn set_to_move(&mut self, player: Player) {
        self.to_move = player;
    }

    pub(crate) fn set_last_move(&mut self, last_move: LastMove) {
        self.last_move = Some(last_move);
    }

    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
    }

    pub(crate) fn raw_to_move(&self) -> Player {
        self.to_move
    }

    /// Add `sum` seeds to `pit`, keeping legal sets and counters in step.
    pub(crate) fn fill(&mut self, pit: usize, sum: u32) {
        debug_assert!(sum > 0 && sum <= self.total_seeds());
        if self.is_store(pit) {
            self.seeds[pit] += sum;
            return;
        }

        let was_empty = self.seeds[pit] == 0;
        let was_lucrative = self.is_lucrative(pit);
        let opposite = self.opposite(pit);
        self.seeds[pit] += sum;

        let owner = self.owner(pit);
        if was_empty {
            self.legal[owner.index()] = self.legal[owner.index()].with(pit);
            if self.is_lucrative(opposite) {
                self.lucrative[owner.index()] -= 1;
            }
        } else if !was_lucrative && self.is_lucrative_capture(opposite) {
            self.lucrative[owner.opponent().index()] += 1;
        }
    }

    /// Remove every seed from the normal pit `pit`, keeping legal sets and
    /// counters in step.
    pub(crate) fn empty(&mut self, pit: usize) {
        debug_assert!(!self.is_store(pit), "stores are never emptied");
        let owner = self.owner(pit);
        let opposite = self.opposite(pit);
        if self.is_lucrative_capture(opposite) {
            self.lucrative[owner.opponent().index()] -= 1;
        }
        self.seeds[pit] = 0;
        self.legal[owner.index()] = self.legal[owner.index()].without(pit);
        if self.is_lucrative(opposite) {
            self.lucrative[owner.index()] += 1;
        }
    }
}

impl fmt::Debug for Kalah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kalah")
            .field("to_move", &self.to_move)
            .field("seeds", &self.seeds)
            .field("last_move", &self.last_move)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

/// Two rows: the machine's store and pits right to left on top, the human's
/// pits and store left to right below, shifted one column to the right.
///
/// Every number is right-aligned in a column one wider than the widest value;
/// the top row drops its very first padding character.
impl fmt::Display for Kalah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max = self.seeds.iter().copied().max().unwrap_or(0);
        let digits = max.to_string().len();
        let width = digits + 1;
        let total = self.total_pits();

        for i in 0..=self.pits_per_player {
            let cell_width = if i == 0 { digits } else { width };
            write!(f, "{:>cell_width$}", self.seeds[total - 1 - i])?;
        }
        write!(f, "\n{:digits$}", "")?;
        for i in 0..=self.pits_per_player {
            write!(f, "{:>width$}", self.seeds[i])?;
        }
        Ok(())
    }
}
