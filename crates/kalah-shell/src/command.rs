//! Shell command parsing.

use crate::error::ShellError;

/// Accepted range for pits per player and seeds per pit.
pub const SIZE_RANGE: (u32, u32) = (1, 20);

/// Accepted range for the machine level.
pub const LEVEL_RANGE: (u32, u32) = (1, 12);

/// Board size given to `new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSize {
    /// Pits on each player's row.
    pub pits_per_player: usize,
    /// Seeds in each pit at the start.
    pub seeds_per_pit: u32,
}

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new [pits seeds]` -- start a game, optionally resizing the board.
    New(Option<BoardSize>),
    /// `switch` -- start a game of the same size with the other player opening.
    Switch,
    /// `move <n>` -- sow the human's pit `n`, counted from 1 at the left.
    /// Holds the 0-based pit.
    Move(usize),
    /// `undo` -- take back the last human move.
    Undo,
    /// `level <n>` -- set the machine's search depth.
    Level(u32),
    /// `show` -- print the board.
    Show,
    /// `stop` -- cancel the machine's search.
    Stop,
    /// `help` -- list the commands.
    Help,
    /// `quit` -- leave the shell.
    Quit,
    /// Blank line.
    Empty,
}

/// One line per command, printed by `help`.
pub const HELP: &str = "\
commands:
  new [pits seeds]  start a new game, optionally with another board size
  switch            start a new game with the other player opening
  move <n>          sow your pit n (1 = leftmost)
  undo              take back your last move
  level <n>         set the machine level (search depth)
  show              print the board
  stop              stop the machine's search
  help              print this list
  quit              leave";

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ShellError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Ok(Command::Empty);
    };

    match name {
        "new" | "n" => parse_new(args),
        "switch" | "s" => Ok(Command::Switch),
        "move" | "m" => {
            let pit = ranged(required(args, "move", "a pit number")?, "pit", (1, u32::MAX))?;
            Ok(Command::Move(pit as usize - 1))
        }
        "undo" | "u" => Ok(Command::Undo),
        "level" | "l" => {
            let level = ranged(required(args, "level", "a level")?, "level", LEVEL_RANGE)?;
            Ok(Command::Level(level))
        }
        "show" => Ok(Command::Show),
        "stop" => Ok(Command::Stop),
        "help" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        _ => Err(ShellError::UnknownCommand {
            command: name.to_string(),
        }),
    }
}

/// Parse `new` arguments: nothing, or both the pit and seed counts.
fn parse_new(args: &[&str]) -> Result<Command, ShellError> {
    match args {
        [] => Ok(Command::New(None)),
        [pits, seeds, ..] => Ok(Command::New(Some(BoardSize {
            pits_per_player: ranged(pits, "pits per player", SIZE_RANGE)? as usize,
            seeds_per_pit: ranged(seeds, "seeds per pit", SIZE_RANGE)?,
        }))),
        [_] => Err(ShellError::MissingArgument {
            command: "new",
            argument: "both pits and seeds",
        }),
    }
}

fn required<'a>(
    args: &[&'a str],
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, ShellError> {
    args.first()
        .copied()
        .ok_or(ShellError::MissingArgument { command, argument })
}

fn ranged(token: &str, name: &'static str, (min, max): (u32, u32)) -> Result<u32, ShellError> {
    let value: u32 = token.parse().map_err(|_| ShellError::InvalidNumber {
        value: token.to_string(),
    })?;
    if value < min || value > max {
        return Err(ShellError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(value)
}
