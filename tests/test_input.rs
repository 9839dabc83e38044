use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ink_reef::input::{Command, KeyState, HOLD_WINDOW};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
}

fn repeat(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Repeat)
}

fn release(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
}

#[test]
fn pressed_key_is_held_for_the_hold_window() {
    let mut keys = KeyState::new();
    keys.handle(&press(KeyCode::Left), 10);
    assert!(keys.is_held(KeyCode::Left, 10));
    assert!(keys.is_held(KeyCode::Left, 10 + HOLD_WINDOW));
    assert!(!keys.is_held(KeyCode::Left, 11 + HOLD_WINDOW));
}

#[test]
fn repeat_refreshes_and_release_clears() {
    let mut keys = KeyState::new();
    keys.handle(&press(KeyCode::Char(' ')), 1);
    keys.handle(&repeat(KeyCode::Char(' ')), 1 + HOLD_WINDOW);
    assert!(keys.is_held(KeyCode::Char(' '), 1 + 2 * HOLD_WINDOW));
    keys.handle(&release(KeyCode::Char(' ')), 2 + 2 * HOLD_WINDOW);
    assert!(!keys.is_held(KeyCode::Char(' '), 2 + 2 * HOLD_WINDOW));
}

#[test]
fn sample_maps_arrows_and_wasd() {
    let mut keys = KeyState::new();
    keys.handle(&press(KeyCode::Up), 5);
    keys.handle(&press(KeyCode::Char('D')), 5);
    keys.handle(&press(KeyCode::Char(' ')), 5);
    let input = keys.sample(6, Duration::from_millis(16));
    assert!(input.up);
    assert!(!input.down);
    assert!(!input.left);
    assert!(input.right);
    assert!(input.shoot);
    assert_eq!(input.dt, Duration::from_millis(16));

    let stale = keys.sample(100, Duration::from_millis(16));
    assert!(!stale.up && !stale.right && !stale.shoot);
}

#[test]
fn confirm_and_quit_are_commands() {
    let mut keys = KeyState::new();
    assert_eq!(keys.handle(&press(KeyCode::Enter), 1), Some(Command::Confirm));
    assert_eq!(keys.handle(&press(KeyCode::Esc), 1), Some(Command::Quit));
    assert_eq!(keys.handle(&press(KeyCode::Char('q')), 1), Some(Command::Quit));
    assert_eq!(keys.handle(&press(KeyCode::Char('Q')), 1), Some(Command::Quit));
    let ctrl_c = KeyEvent::new_with_kind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press);
    assert_eq!(keys.handle(&ctrl_c, 1), Some(Command::Quit));
    assert_eq!(keys.handle(&press(KeyCode::Char('a')), 1), None);
}

#[test]
fn repeats_and_releases_are_never_commands() {
    let mut keys = KeyState::new();
    assert_eq!(keys.handle(&repeat(KeyCode::Enter), 1), None);
    assert_eq!(keys.handle(&release(KeyCode::Enter), 1), None);
}
