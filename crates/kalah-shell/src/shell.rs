//! Event-driven console shell.
//!
//! Input is read on its own thread and the machine's search runs on a
//! worker thread, so the loop keeps answering commands while the machine
//! thinks. At most one search is in flight: anything that replaces the
//! current snapshot stops it and waits for it to unwind first.

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, info, warn};

use kalah_core::{GameConfig, Kalah};
use kalah_engine::{Cancelled, MachineMove, MachineMoveError, SearchControl};

use crate::command::{Command, HELP, parse_command};
use crate::error::ShellError;
use crate::session::{Notice, Session};

/// Whether a machine search is in flight.
enum ShellState {
    Idle,
    Searching,
}

/// Events processed by the main loop.
enum ShellEvent {
    Input(Result<Command, ShellError>),
    SearchDone(Result<Kalah, MachineMoveError>),
    InputClosed,
}

/// The console front-end: one [`Session`] driven by text commands.
pub struct Shell<W: Write> {
    session: Session,
    state: ShellState,
    control: SearchControl,
    /// Input that arrived while a stopped search was unwinding.
    pending: VecDeque<Result<Command, ShellError>>,
    input_closed: bool,
    out: W,
}

impl<W: Write> Shell<W> {
    /// Create a shell whose first game uses `config`, printing to `out`.
    pub fn new(config: GameConfig, out: W) -> Result<Self, ShellError> {
        Ok(Self {
            session: Session::new(config)?,
            state: ShellState::Idle,
            control: SearchControl::default(),
            pending: VecDeque::new(),
            input_closed: false,
            out,
        })
    }

    /// Run the event loop until `quit` or the end of `input`.
    pub fn run<R>(mut self, input: R) -> Result<(), ShellError>
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<ShellEvent>();

        let input_tx = tx.clone();
        thread::spawn(move || {
            for line in input.lines() {
                let Ok(line) = line else {
                    break;
                };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                debug!(cmd = %line, "received command");
                if input_tx.send(ShellEvent::Input(parse_command(line))).is_err() {
                    break;
                }
            }
            let _ = input_tx.send(ShellEvent::InputClosed);
        });

        let config = *self.session.config();
        self.say(format_args!(
            "Kalah with {} pits of {} seeds, level {}. Type `help` for commands.",
            config.pits_per_player, config.seeds_per_pit, config.search_depth
        ))?;
        self.say(self.session.game().clone())?;
        self.maybe_start_search(&tx)?;

        loop {
            let event = match self.pending.pop_front() {
                Some(input) => ShellEvent::Input(input),
                None if self.input_closed => {
                    self.wait_for_search(&rx);
                    break;
                }
                None => match rx.recv() {
                    Ok(event) => event,
                    Err(_) => break,
                },
            };
            let flow = match event {
                ShellEvent::Input(Ok(cmd)) => self.handle_command(cmd, &tx, &rx),
                ShellEvent::Input(Err(err)) => {
                    warn!(error = %err, "parse error");
                    Err(err)
                }
                ShellEvent::SearchDone(result) => self.finish_search(result, &tx),
                ShellEvent::InputClosed => {
                    self.input_closed = true;
                    Ok(ControlFlow::Continue(()))
                }
            };
            match flow {
                Ok(ControlFlow::Continue(())) => {}
                Ok(ControlFlow::Break(())) => break,
                Err(ShellError::Io { source }) => return Err(source.into()),
                Err(err) => self.say(format_args!("error: {err}"))?,
            }
        }

        info!("kalah shutting down");
        Ok(())
    }

    fn handle_command(
        &mut self,
        cmd: Command,
        tx: &Sender<ShellEvent>,
        rx: &Receiver<ShellEvent>,
    ) -> Result<ControlFlow<()>, ShellError> {
        match cmd {
            Command::New(size) => {
                self.wait_for_search(rx);
                let notices = self.session.new_game(size)?;
                self.announce(&notices)?;
                self.maybe_start_search(tx)?;
            }
            Command::Switch => {
                self.wait_for_search(rx);
                let notices = self.session.switch_opening()?;
                self.announce(&notices)?;
                self.maybe_start_search(tx)?;
            }
            Command::Move(pit) => self.handle_move(pit, tx)?,
            Command::Undo => {
                self.wait_for_search(rx);
                let notices = self.session.undo();
                self.announce(&notices)?;
            }
            Command::Level(level) => {
                let notices = self.session.set_level(level)?;
                self.announce(&notices)?;
                // Resumes a machine turn left waiting by `stop`.
                if matches!(self.state, ShellState::Idle) {
                    self.maybe_start_search(tx)?;
                }
            }
            Command::Show => self.say(self.session.game().clone())?,
            Command::Stop => {
                if matches!(self.state, ShellState::Searching) {
                    self.control.stop();
                } else {
                    self.say("Nothing to stop.")?;
                }
            }
            Command::Help => self.say(HELP)?,
            Command::Quit => {
                self.wait_for_search(rx);
                return Ok(ControlFlow::Break(()));
            }
            Command::Empty => {}
        }
        Ok(ControlFlow::Continue(()))
    }

    fn handle_move(&mut self, pit: usize, tx: &Sender<ShellEvent>) -> Result<(), ShellError> {
        if matches!(self.state, ShellState::Searching) {
            warn!("move received while the machine is searching, ignoring");
            self.say("The machine is thinking, wait or `stop` it.")?;
            return Ok(());
        }
        let pits = self.session.game().pits_per_player();
        if pit >= pits {
            return Err(ShellError::OutOfRange {
                name: "pit",
                value: pit as u32 + 1,
                min: 1,
                max: pits as u32,
            });
        }
        let notices = self.session.human_move(pit)?;
        self.announce(&notices)?;
        self.maybe_start_search(tx)
    }

    /// Start the machine's search if it is to move.
    fn maybe_start_search(&mut self, tx: &Sender<ShellEvent>) -> Result<(), ShellError> {
        if !self.session.machine_to_move() {
            return Ok(());
        }

        // Fresh flag: the previous search may have been stopped
        self.control = SearchControl::default();
        let control = self.control.clone();
        let game = self.session.game().clone();
        let depth = game.search_depth();
        let tx = tx.clone();

        debug!(depth, "search started");
        thread::spawn(move || {
            let result = game.apply_machine_move(depth, &control);
            let _ = tx.send(ShellEvent::SearchDone(result));
        });
        self.state = ShellState::Searching;
        self.say("Machine is thinking...")
    }

    fn finish_search(
        &mut self,
        result: Result<Kalah, MachineMoveError>,
        tx: &Sender<ShellEvent>,
    ) -> Result<ControlFlow<()>, ShellError> {
        self.state = ShellState::Idle;
        match result {
            Ok(next) => {
                let notices = self.session.machine_moved(next);
                self.announce(&notices)?;
                // The machine moves again whenever the human misses a turn
                self.maybe_start_search(tx)?;
            }
            Err(MachineMoveError::Cancelled(Cancelled)) => {
                info!("search stopped by user");
                self.say("Search stopped. Use `level <n>` to let the machine move again.")?;
            }
            Err(err) => {
                warn!(error = %err, "machine move failed");
                return Err(err.into());
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Stop the in-flight search, if any, and drain events until it has
    /// unwound. Its result is discarded; input arriving meanwhile is queued.
    fn wait_for_search(&mut self, rx: &Receiver<ShellEvent>) {
        if !matches!(self.state, ShellState::Searching) {
            return;
        }
        self.control.stop();
        for event in rx {
            match event {
                ShellEvent::SearchDone(_) => break,
                ShellEvent::Input(input) => {
                    debug!("input queued while waiting for search");
                    self.pending.push_back(input);
                }
                ShellEvent::InputClosed => self.input_closed = true,
            }
        }
        self.state = ShellState::Idle;
    }

    fn announce(&mut self, notices: &[Notice]) -> Result<(), ShellError> {
        notices.iter().try_for_each(|notice| self.say(notice))
    }

    fn say(&mut self, message: impl Display) -> Result<(), ShellError> {
        writeln!(self.out, "{message}")?;
        self.out.flush()?;
        Ok(())
    }
}
