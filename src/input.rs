//! Input decoding and the reader → game-loop handoff.
//!
//! A dedicated thread blocks on terminal events and sends decoded commands
//! over a channel. The game loop drains that channel once per tick and keeps
//! only the latest command, except that a quit anywhere in the batch wins.

use std::io;
use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::warn;

use crate::entities::Command;

const ESC: u8 = 0x1b;

/// Map a crossterm key press to a command. Releases and unbound keys map to
/// `None`.
pub fn decode_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::Right),
        KeyCode::Up | KeyCode::Down | KeyCode::Char(' ') => Some(Command::Fire),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        _ => None,
    }
}

/// Decode one raw read from a cbreak-mode terminal.
///
/// For hosts that read stdin bytes directly instead of going through
/// crossterm's event stream; the bundled binary uses `decode_key`.
/// A lone ESC byte is quit; the arrow escape sequences map to moves, with
/// both up and down firing.
pub fn decode_bytes(buf: &[u8]) -> Option<Command> {
    match buf {
        [ESC] => Some(Command::Quit),
        [ESC, b'[', b'A', ..] | [ESC, b'[', b'B', ..] => Some(Command::Fire),
        [ESC, b'[', b'C', ..] => Some(Command::Right),
        [ESC, b'[', b'D', ..] => Some(Command::Left),
        _ => None,
    }
}

/// Drain every pending command without blocking and keep the one that
/// should act this tick.
pub fn latest(rx: &Receiver<Command>) -> Option<Command> {
    let mut last = None;
    while let Ok(cmd) = rx.try_recv() {
        if last == Some(Command::Quit) {
            continue;
        }
        last = Some(cmd);
    }
    last
}

/// Spawn the blocking terminal reader over crossterm's event stream.
pub fn spawn_reader(tx: Sender<Command>) -> JoinHandle<()> {
    spawn_reader_with(tx, event::read)
}

/// Spawn a reader thread pulling events from `read`.
///
/// A read error is forwarded as `Quit` so the game loop always ends. The
/// thread stops after a read error or once the receiver is dropped.
pub fn spawn_reader_with<F>(tx: Sender<Command>, mut read: F) -> JoinHandle<()>
where
    F: FnMut() -> io::Result<Event> + Send + 'static,
{
    thread::spawn(move || loop {
        let cmd = match read() {
            Ok(Event::Key(key)) => decode_key(key),
            Ok(_) => None,
            Err(err) => {
                warn!("terminal read failed, quitting: {err}");
                let _ = tx.send(Command::Quit);
                break;
            }
        };
        if let Some(cmd) = cmd {
            if tx.send(cmd).is_err() {
                break;
            }
        }
    })
}
