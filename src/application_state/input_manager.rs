//! # Input Manager
//!
//! Turns keyboard events into [`KeyAction`]s, including the fixed-period
//! repeat of held movement and rotation keys. Operating-system key repeat is
//! ignored so the repeat rate does not depend on the platform.

use std::collections::HashMap;

use web_time::{Duration, Instant};
use winit::{
    event::{ElementState, KeyEvent, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use super::input_state::{binding, KeyAction};
use crate::engine_state::voxels::game::command::Command;

/// A bound key that is currently down.
#[derive(Debug, Clone, Copy)]
struct HeldKey {
    action: KeyAction,
    next_repeat: Instant,
}

/// Tracks held keys and schedules their repeats.
pub struct InputManager {
    repeat_period: Duration,
    held: HashMap<KeyCode, HeldKey>,
}

impl InputManager {
    pub fn new(repeat_period: Duration) -> Self {
        Self {
            repeat_period,
            held: HashMap::new(),
        }
    }

    /// Records a key going down. Returns the action to fire now, if any.
    ///
    /// A key that is already down fires nothing.
    pub fn press(&mut self, key: KeyCode, now: Instant) -> Option<KeyAction> {
        if self.held.contains_key(&key) {
            return None;
        }
        let action = binding(key)?;
        self.held.insert(
            key,
            HeldKey {
                action,
                next_repeat: now + self.repeat_period,
            },
        );
        Some(action)
    }

    /// Records a key going up. Returns `true` if it was held.
    pub fn release(&mut self, key: KeyCode) -> bool {
        self.held.remove(&key).is_some()
    }

    /// Processes a window event. Returns the action a key press fires, if any.
    pub fn intake_input(&mut self, event: &WindowEvent, now: Instant) -> Option<KeyAction> {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state,
                        physical_key: PhysicalKey::Code(key),
                        ..
                    },
                ..
            } => match state {
                ElementState::Pressed => self.press(*key, now),
                ElementState::Released => {
                    self.release(*key);
                    None
                }
            },
            _ => None,
        }
    }

    /// Commands whose repeat has come due by `now`, advancing each schedule.
    pub fn due_commands(&mut self, now: Instant) -> Vec<Command> {
        let mut commands = Vec::new();
        for held in self.held.values_mut() {
            let KeyAction::Game(command) = held.action else {
                continue;
            };
            while now >= held.next_repeat {
                commands.push(command);
                if self.repeat_period.is_zero() {
                    held.next_repeat = now + Duration::from_millis(1);
                    break;
                }
                held.next_repeat += self.repeat_period;
            }
        }
        commands
    }

    /// Earliest pending repeat, if any repeating key is held.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.held
            .values()
            .filter(|held| held.action.repeats())
            .map(|held| held.next_repeat)
            .min()
    }

    /// Forgets every held key.
    ///
    /// This is typically called when the window loses focus to prevent
    /// stuck keys.
    pub fn reset_inputs(&mut self) {
        self.held.clear();
    }
}
