//! The two Kalah players and the outcome of a finished game.

use std::fmt;
use std::ops::Not;

/// A Kalah player: the human (first row) or the machine (second row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    Human = 0,
    Machine = 1,
}

impl Player {
    /// Total number of players.
    pub const COUNT: usize = 2;

    /// All players in index order.
    pub const ALL: [Player; 2] = [Player::Human, Player::Machine];

    /// Return the index (0 for Human, 1 for Machine).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the other player.
    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Machine,
            Player::Machine => Player::Human,
        }
    }

    /// Human-readable name used when announcing turns and results.
    pub const fn display_name(self) -> &'static str {
        match self {
            Player::Human => "You",
            Player::Machine => "Machine",
        }
    }
}

impl Not for Player {
    type Output = Player;

    #[inline]
    fn not(self) -> Player {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Result of a finished game.
///
/// A draw is a result, never a player: move logic only ever deals in
/// [`Player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The given player owns more seeds.
    Winner(Player),
    /// Both players own the same number of seeds.
    Draw,
}

impl Outcome {
    /// Decide the outcome from the seed totals of both players.
    pub fn from_totals(human: u32, machine: u32) -> Outcome {
        match human.cmp(&machine) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::Human),
            std::cmp::Ordering::Less => Outcome::Winner(Player::Machine),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Return the winning player, or `None` on a draw.
    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(player),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{player}"),
            Outcome::Draw => f.write_str("Nobody (draw)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Outcome, Player};

    #[test]
    fn index_values() {
        assert_eq!(Player::Human.index(), 0);
        assert_eq!(Player::Machine.index(), 1);
    }

    #[test]
    fn opponent_roundtrip() {
        assert_eq!(Player::Human.opponent(), Player::Machine);
        assert_eq!(Player::Machine.opponent(), Player::Human);
        assert_eq!(!!Player::Human, Player::Human);
    }

    #[test]
    fn display_names() {
        assert_eq!(format!("{}", Player::Human), "You");
        assert_eq!(format!("{}", Player::Machine), "Machine");
    }

    #[test]
    fn outcome_from_totals() {
        assert_eq!(Outcome::from_totals(20, 16), Outcome::Winner(Player::Human));
        assert_eq!(Outcome::from_totals(1, 35), Outcome::Winner(Player::Machine));
        assert_eq!(Outcome::from_totals(18, 18), Outcome::Draw);
    }

    #[test]
    fn draw_has_no_winner_but_displays() {
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(format!("{}", Outcome::Draw), "Nobody (draw)");
        assert_eq!(format!("{}", Outcome::Winner(Player::Machine)), "Machine");
    }
}
