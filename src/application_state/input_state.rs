//! # Input State
//!
//! Key actions and the fixed keyboard bindings.

use winit::keyboard::KeyCode;

use crate::engine_state::voxels::game::command::{Axis, Command};

/// What a bound key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// A piece command, repeated while the key is held.
    Game(Command),
    /// Start or resume.
    Play,
    /// Toggle pause.
    Pause,
    /// Close the application.
    Exit,
}

impl KeyAction {
    /// Whether holding the key keeps firing the action.
    pub fn repeats(&self) -> bool {
        matches!(self, KeyAction::Game(_))
    }
}

fn rotate(axis: Axis, sign: i32) -> KeyAction {
    KeyAction::Game(Command::Rotate { axis, sign })
}

fn translate(dx: i32, dz: i32) -> KeyAction {
    KeyAction::Game(Command::Translate { dx, dz })
}

/// Looks up the action bound to `key`.
pub fn binding(key: KeyCode) -> Option<KeyAction> {
    let action = match key {
        KeyCode::KeyW => translate(0, -1),
        KeyCode::KeyS => translate(0, 1),
        KeyCode::KeyA => translate(-1, 0),
        KeyCode::KeyD => translate(1, 0),
        KeyCode::ArrowLeft => rotate(Axis::Y, 1),
        KeyCode::ArrowRight => rotate(Axis::Y, -1),
        KeyCode::ArrowUp => rotate(Axis::X, -1),
        KeyCode::ArrowDown => rotate(Axis::X, 1),
        KeyCode::KeyQ => rotate(Axis::Z, -1),
        KeyCode::KeyE => rotate(Axis::Z, 1),
        KeyCode::Space | KeyCode::Enter => KeyAction::Play,
        KeyCode::KeyP => KeyAction::Pause,
        KeyCode::Escape => KeyAction::Exit,
        _ => return None,
    };
    Some(action)
}
