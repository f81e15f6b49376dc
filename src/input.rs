//! Keyboard input, decoupled from the game loop.
//!
//! A dedicated thread blocks on the raw key source and pushes decoded
//! commands into a bounded queue.  The game loop drains at most one command
//! per tick without blocking, so a burst of key presses plays out over
//! several frames.

use std::io;
use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError};
use std::thread;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    MoveLeft,
    MoveRight,
    FireBeam,
    Quit,
}

impl Command {
    /// Decode a key event.  Releases and repeats are ignored, as are keys
    /// the game has no use for.
    pub fn from_key(key: KeyEvent) -> Option<Command> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') if ctrl => Some(Command::Quit),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Start),
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),
            KeyCode::Char(' ') => Some(Command::FireBeam),
            _ => None,
        }
    }
}

/// Blocking source of raw key events.  Only ever called from the input
/// thread.
pub trait KeySource: Send + 'static {
    fn next_key(&mut self) -> io::Result<KeyEvent>;
}

/// Reads keys from the terminal via crossterm, skipping mouse, focus and
/// resize events.
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                return Ok(key);
            }
        }
    }
}

/// Consumer end of the command queue.
pub struct InputQueue {
    rx: Receiver<Command>,
}

impl InputQueue {
    /// A queue holding up to `capacity` pending commands.  The sender blocks
    /// when the queue is full.
    pub fn bounded(capacity: usize) -> (SyncSender<Command>, InputQueue) {
        let (tx, rx) = mpsc::sync_channel(capacity);
        (tx, InputQueue { rx })
    }

    /// Take the oldest pending command, if any.  A closed queue reads as
    /// `Quit` so the game winds down once input is gone.
    pub fn poll(&self) -> Option<Command> {
        match self.rx.try_recv() {
            Ok(command) => Some(command),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Command::Quit),
        }
    }

    /// Block until a command arrives.
    pub fn wait(&self) -> Command {
        self.rx.recv().unwrap_or(Command::Quit)
    }
}

/// Spawn the input thread.  The thread is never joined: it exits when the
/// source fails or the queue is dropped, or is abandoned at process exit.
pub fn spawn_input<S: KeySource>(mut source: S, capacity: usize) -> InputQueue {
    let (tx, queue) = InputQueue::bounded(capacity);
    thread::spawn(move || loop {
        let key = match source.next_key() {
            Ok(key) => key,
            Err(e) => {
                warn!(error = %e, "key source failed; input thread exiting");
                return;
            }
        };
        let Some(command) = Command::from_key(key) else {
            continue;
        };
        if tx.send(command).is_err() {
            debug!("input queue dropped; input thread exiting");
            return;
        }
    });
    queue
}
