//! Keyboard state sampled once per frame.
//!
//! Instead of acting on each key event individually, `KeyState` records the
//! frame of the last press/repeat event for every key. Each frame the host
//! asks which keys are still "fresh" and builds a `TickInput` from them, so
//! Space + arrows can be held together.
//!
//! Works on two classes of terminal:
//! * **Keyboard-enhancement capable** (kitty protocol): real `Release`
//!   events remove the key at once.
//! * **Classic terminals**: only `Press` events, with OS key-repeat showing
//!   up as repeated presses. Keys expire after `HOLD_WINDOW` frames of
//!   silence; OS key-repeat refreshes them well before that.

use std::collections::HashMap;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::TickInput;

/// A key counts as held if it was seen within this many frames.
pub const HOLD_WINDOW: u64 = 8;

/// One-shot actions that are not part of the held-key state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Confirm,
    Quit,
}

#[derive(Clone, Debug, Default)]
pub struct KeyState {
    last_seen: HashMap<KeyCode, u64>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one key event into the state, returning a command if it is one.
    pub fn handle(&mut self, event: &KeyEvent, frame: u64) -> Option<Command> {
        match event.kind {
            KeyEventKind::Press => {
                self.last_seen.insert(normalize(event.code), frame);
                command_for(event)
            }
            KeyEventKind::Repeat => {
                self.last_seen.insert(normalize(event.code), frame);
                None
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&normalize(event.code));
                None
            }
        }
    }

    pub fn is_held(&self, key: KeyCode, frame: u64) -> bool {
        self.last_seen
            .get(&key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn any_held(&self, keys: &[KeyCode], frame: u64) -> bool {
        keys.iter().any(|&k| self.is_held(k, frame))
    }

    pub fn sample(&self, frame: u64, dt: Duration) -> TickInput {
        TickInput {
            up: self.any_held(&[KeyCode::Up, KeyCode::Char('w')], frame),
            down: self.any_held(&[KeyCode::Down, KeyCode::Char('s')], frame),
            left: self.any_held(&[KeyCode::Left, KeyCode::Char('a')], frame),
            right: self.any_held(&[KeyCode::Right, KeyCode::Char('d')], frame),
            shoot: self.is_held(KeyCode::Char(' '), frame),
            dt,
        }
    }
}

/// Letters are tracked lower-case so Shift or Caps Lock does not matter.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

fn command_for(event: &KeyEvent) -> Option<Command> {
    match event.code {
        KeyCode::Enter => Some(Command::Confirm),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        _ => None,
    }
}
