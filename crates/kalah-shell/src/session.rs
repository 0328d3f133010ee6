//! Game session: the current snapshot, the undo stack and the
//! announcements that follow each move.
//!
//! Holds no threads. The shell decides when to run the machine and feeds
//! its results back through [`Session::machine_moved`].

use std::fmt;

use tracing::info;

use kalah_core::{ConfigError, GameConfig, Kalah, MoveError, Outcome, Player};

use crate::command::BoardSize;

/// Something the shell tells the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Print the board.
    Board(Kalah),
    /// A new game started.
    NewGame {
        /// Player who opens.
        opening: Player,
        /// Pits on each row.
        pits_per_player: usize,
        /// Seeds per pit at the start.
        seeds_per_pit: u32,
    },
    /// The chosen human pit holds no seeds; nothing happened.
    EmptyPit(usize),
    /// The machine sowed this pit, counted from 1 at the right end of the
    /// top row.
    MachinePlayed(usize),
    /// The player cannot move this time because the opponent moves again.
    MissedTurn(Player),
    /// The game ended.
    GameOver {
        /// Result of the game.
        outcome: Outcome,
        /// Seeds owned by the human.
        human: u32,
        /// Seeds owned by the machine.
        machine: u32,
    },
    /// The last human move was taken back.
    Undone,
    /// No human move is left to take back.
    NothingToUndo,
    /// The machine's search depth changed.
    Level(u32),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Board(game) => write!(f, "{game}"),
            Notice::NewGame {
                opening,
                pits_per_player,
                seeds_per_pit,
            } => write!(
                f,
                "New game with {pits_per_player} pits of {seeds_per_pit} seeds, {opening} to open."
            ),
            Notice::EmptyPit(pit) => write!(f, "Pit {} is empty, choose another one.", pit + 1),
            Notice::MachinePlayed(pit) => write!(f, "Machine sows pit {pit}."),
            Notice::MissedTurn(player) => write!(f, "{player} must miss a turn."),
            Notice::GameOver {
                outcome,
                human,
                machine,
            } => match outcome {
                Outcome::Winner(Player::Human) => {
                    write!(f, "Game over: You win with {human} seeds against {machine}.")
                }
                Outcome::Winner(Player::Machine) => {
                    write!(f, "Game over: Machine wins with {machine} seeds against {human}.")
                }
                Outcome::Draw => write!(f, "Game over: {outcome} with {human} seeds each."),
            },
            Notice::Undone => f.write_str("Move taken back."),
            Notice::NothingToUndo => f.write_str("Nothing to undo."),
            Notice::Level(level) => write!(f, "Machine level set to {level}."),
        }
    }
}

/// One game in progress plus the settings for the next one.
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    game: Kalah,
    undo: Vec<Kalah>,
}

impl Session {
    /// Start a session with a first game built from `config`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let game = Kalah::new(config)?;
        Ok(Self {
            config,
            game,
            undo: Vec::new(),
        })
    }

    /// The current snapshot.
    pub fn game(&self) -> &Kalah {
        &self.game
    }

    /// Settings used for the next game.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of human moves that can be taken back.
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Return `true` if the running game waits for the machine.
    pub fn machine_to_move(&self) -> bool {
        !self.game.is_over() && self.game.turn() == Player::Machine
    }

    /// Start a new game with the session settings, resized to `size` if
    /// given. The opening player stays the same.
    pub fn new_game(&mut self, size: Option<BoardSize>) -> Result<Vec<Notice>, ConfigError> {
        let mut config = self.config;
        if let Some(size) = size {
            config.pits_per_player = size.pits_per_player;
            config.seeds_per_pit = size.seeds_per_pit;
        }
        self.start(config)
    }

    /// Start a new game of the current size with the other player opening.
    pub fn switch_opening(&mut self) -> Result<Vec<Notice>, ConfigError> {
        let config = GameConfig {
            pits_per_player: self.game.pits_per_player(),
            seeds_per_pit: self.game.seeds_per_pit(),
            opening_player: self.game.opening_player().opponent(),
            ..self.config
        };
        self.start(config)
    }

    fn start(&mut self, config: GameConfig) -> Result<Vec<Notice>, ConfigError> {
        self.game = Kalah::new(config)?;
        self.config = config;
        self.undo.clear();
        info!(
            pits = config.pits_per_player,
            seeds = config.seeds_per_pit,
            level = config.search_depth,
            opening = %config.opening_player,
            "new game"
        );
        Ok(vec![
            Notice::NewGame {
                opening: config.opening_player,
                pits_per_player: config.pits_per_player,
                seeds_per_pit: config.seeds_per_pit,
            },
            Notice::Board(self.game.clone()),
        ])
    }

    /// Sow the human's 0-based `pit`.
    ///
    /// An empty pit leaves everything unchanged and reports
    /// [`Notice::EmptyPit`]. Otherwise the previous snapshot goes on the
    /// undo stack.
    pub fn human_move(&mut self, pit: usize) -> Result<Vec<Notice>, MoveError> {
        let Some(next) = self.game.apply_human_move(pit)? else {
            return Ok(vec![Notice::EmptyPit(pit)]);
        };
        let before = std::mem::replace(&mut self.game, next);
        self.undo.push(before);

        let mut notices = vec![Notice::Board(self.game.clone())];
        self.after_move(Player::Human, &mut notices);
        Ok(notices)
    }

    /// Install the snapshot the machine's search produced.
    ///
    /// If the machine keeps the turn, the human misses it and
    /// [`machine_to_move`](Self::machine_to_move) stays `true`.
    pub fn machine_moved(&mut self, mut next: Kalah) -> Vec<Notice> {
        next.inherit_search_depth(&self.game);
        self.game = next;

        let mut notices = Vec::new();
        if let Some(source) = self.game.last_move_source() {
            notices.push(Notice::MachinePlayed(source - self.game.pits_per_player()));
        }
        notices.push(Notice::Board(self.game.clone()));
        self.after_move(Player::Machine, &mut notices);
        notices
    }

    /// Announce the end of the game, or the opponent missing a turn.
    fn after_move(&self, mover: Player, notices: &mut Vec<Notice>) {
        if let Some(outcome) = self.game.outcome() {
            let human = self.game.seeds_of_player(Player::Human);
            let machine = self.game.seeds_of_player(Player::Machine);
            info!(%outcome, human, machine, "game over");
            notices.push(Notice::GameOver {
                outcome,
                human,
                machine,
            });
        } else if self.game.turn() == mover {
            notices.push(Notice::MissedTurn(mover.opponent()));
        }
    }

    /// Restore the snapshot before the last human move.
    pub fn undo(&mut self) -> Vec<Notice> {
        match self.undo.pop() {
            Some(mut previous) => {
                previous.inherit_search_depth(&self.game);
                self.game = previous;
                vec![Notice::Undone, Notice::Board(self.game.clone())]
            }
            None => vec![Notice::NothingToUndo],
        }
    }

    /// Set the machine's search depth for this game and the next ones.
    pub fn set_level(&mut self, level: u32) -> Result<Vec<Notice>, ConfigError> {
        self.game.set_search_depth(level)?;
        self.config.search_depth = level;
        Ok(vec![Notice::Level(level)])
    }
}
