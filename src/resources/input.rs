//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the game cares about and exposes it
//! to systems via the [`InputState`] resource. The host supplies the raw key
//! state through the [`KeyboardSource`] trait; the arrow keys steer and `S`
//! starts the game from the menu.
use std::str::FromStr;

use bevy_ecs::prelude::*;

/// Keys the game reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    /// Leaves the title screen.
    Start,
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Key::Left),
            "right" => Ok(Key::Right),
            "up" => Ok(Key::Up),
            "down" => Ok(Key::Down),
            "start" | "s" => Ok(Key::Start),
            other => Err(format!("unknown key '{}'", other)),
        }
    }
}

/// Host-side keyboard query.
pub trait KeyboardSource {
    fn is_down(&self, key: Key) -> bool;
}

/// A keyboard whose keys are set by hand. Used by the headless runner and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeldKeys {
    keys: Vec<Key>,
}

impl HeldKeys {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        let mut held = Self::default();
        for key in keys {
            held.press(key);
        }
        held
    }

    pub fn press(&mut self, key: Key) {
        if !self.keys.contains(&key) {
            self.keys.push(key);
        }
    }

    pub fn release(&mut self, key: Key) {
        self.keys.retain(|k| *k != key);
    }
}

impl KeyboardSource for HeldKeys {
    fn is_down(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }
}

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: Key,
}

impl BoolState {
    fn bound_to(key_binding: Key) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding,
        }
    }

    fn update(&mut self, source: &dyn KeyboardSource) {
        let down = source.is_down(self.key_binding);
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub left: BoolState,
    pub right: BoolState,
    pub up: BoolState,
    pub down: BoolState,
    pub start: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            left: BoolState::bound_to(Key::Left),
            right: BoolState::bound_to(Key::Right),
            up: BoolState::bound_to(Key::Up),
            down: BoolState::bound_to(Key::Down),
            start: BoolState::bound_to(Key::Start),
        }
    }
}

impl InputState {
    /// Poll every binding from `source`.
    pub fn refresh(&mut self, source: &dyn KeyboardSource) {
        for state in [
            &mut self.left,
            &mut self.right,
            &mut self.up,
            &mut self.down,
            &mut self.start,
        ] {
            state.update(source);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_edges() {
        let mut input = InputState::default();
        let mut keys = HeldKeys::new([Key::Right]);
        input.refresh(&keys);
        assert!(input.right.active && input.right.just_pressed);
        assert!(!input.left.active);

        input.refresh(&keys);
        assert!(input.right.active && !input.right.just_pressed);

        keys.release(Key::Right);
        input.refresh(&keys);
        assert!(!input.right.active && input.right.just_released);
    }

    #[test]
    fn test_key_parse() {
        assert_eq!("Left".parse(), Ok(Key::Left));
        assert_eq!("s".parse(), Ok(Key::Start));
        assert!("space".parse::<Key>().is_err());
    }

    #[test]
    fn test_held_keys_no_duplicates() {
        let mut keys = HeldKeys::new([Key::Up, Key::Up]);
        keys.release(Key::Up);
        assert!(!keys.is_down(Key::Up));
    }
}
