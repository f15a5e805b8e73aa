//! Keyboard input
//!
//! Hosts translate physical keys into logical [`Key`]s. The game keeps its
//! own held-key flags from press/release events; last write wins between
//! ticks.

use crate::sim::TickInput;

/// Logical key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    /// Any other key (starts or restarts the game)
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            _ => Key::Other,
        }
    }
}

/// A discrete key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}

/// Held state of the directional keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn apply(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::Pressed(Key::Left) => self.left = true,
            KeyEvent::Pressed(Key::Right) => self.right = true,
            KeyEvent::Released(Key::Left) => self.left = false,
            KeyEvent::Released(Key::Right) => self.right = false,
            KeyEvent::Pressed(Key::Other) | KeyEvent::Released(Key::Other) => {}
        }
    }

    /// Snapshot for the next tick
    pub fn to_tick_input(self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
        }
    }
}
