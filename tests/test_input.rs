use std::collections::VecDeque;
use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use term_invaders::input::*;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Hands out a fixed list of keys, then fails like a closed terminal.
struct ScriptedKeys(VecDeque<KeyEvent>);

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        self.0
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

// ── Key decoding ──────────────────────────────────────────────────────────────

#[test]
fn arrows_and_letters_move() {
    assert_eq!(Command::from_key(press(KeyCode::Left)), Some(Command::MoveLeft));
    assert_eq!(Command::from_key(press(KeyCode::Char('a'))), Some(Command::MoveLeft));
    assert_eq!(Command::from_key(press(KeyCode::Right)), Some(Command::MoveRight));
    assert_eq!(Command::from_key(press(KeyCode::Char('d'))), Some(Command::MoveRight));
}

#[test]
fn space_fires_and_s_starts() {
    assert_eq!(Command::from_key(press(KeyCode::Char(' '))), Some(Command::FireBeam));
    assert_eq!(Command::from_key(press(KeyCode::Char('s'))), Some(Command::Start));
    assert_eq!(Command::from_key(press(KeyCode::Char('S'))), Some(Command::Start));
}

#[test]
fn quit_keys() {
    assert_eq!(Command::from_key(press(KeyCode::Char('q'))), Some(Command::Quit));
    assert_eq!(Command::from_key(press(KeyCode::Esc)), Some(Command::Quit));
    let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
    assert_eq!(Command::from_key(ctrl_q), Some(Command::Quit));
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(Command::from_key(ctrl_c), Some(Command::Quit));
}

#[test]
fn unknown_keys_and_releases_are_ignored() {
    assert_eq!(Command::from_key(press(KeyCode::Char('x'))), None);
    assert_eq!(Command::from_key(press(KeyCode::Char('c'))), None);
    assert_eq!(Command::from_key(press(KeyCode::Up)), None);

    let release =
        KeyEvent::new_with_kind(KeyCode::Char(' '), KeyModifiers::NONE, KeyEventKind::Release);
    assert_eq!(Command::from_key(release), None);
    let repeat =
        KeyEvent::new_with_kind(KeyCode::Left, KeyModifiers::NONE, KeyEventKind::Repeat);
    assert_eq!(Command::from_key(repeat), None);
}

// ── Queue ─────────────────────────────────────────────────────────────────────

#[test]
fn empty_queue_polls_none() {
    let (_tx, queue) = InputQueue::bounded(8);
    assert_eq!(queue.poll(), None);
    assert_eq!(queue.poll(), None);
}

#[test]
fn poll_takes_one_command_at_a_time_in_order() {
    let (tx, queue) = InputQueue::bounded(8);
    tx.send(Command::MoveLeft).unwrap();
    tx.send(Command::FireBeam).unwrap();
    tx.send(Command::MoveRight).unwrap();

    assert_eq!(queue.poll(), Some(Command::MoveLeft));
    assert_eq!(queue.poll(), Some(Command::FireBeam));
    assert_eq!(queue.poll(), Some(Command::MoveRight));
    assert_eq!(queue.poll(), None);
}

#[test]
fn closed_queue_reads_as_quit() {
    let (tx, queue) = InputQueue::bounded(8);
    tx.send(Command::FireBeam).unwrap();
    drop(tx);

    // Pending commands are still delivered first.
    assert_eq!(queue.poll(), Some(Command::FireBeam));
    assert_eq!(queue.poll(), Some(Command::Quit));
    assert_eq!(queue.wait(), Command::Quit);
}

#[test]
fn input_thread_decodes_and_forwards_keys() {
    let script = ScriptedKeys(VecDeque::from(vec![
        press(KeyCode::Char('x')),
        press(KeyCode::Char('s')),
        press(KeyCode::Char(' ')),
        press(KeyCode::Left),
    ]));
    let queue = spawn_input(script, 16);

    assert_eq!(queue.wait(), Command::Start);
    assert_eq!(queue.wait(), Command::FireBeam);
    assert_eq!(queue.wait(), Command::MoveLeft);
    // The script ran dry; the thread exits and the queue closes.
    assert_eq!(queue.wait(), Command::Quit);
}
