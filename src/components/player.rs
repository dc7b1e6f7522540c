use bevy_ecs::prelude::Component;

/// The keyboard-driven entity. Only one exists per level.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub alive: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self { alive: true }
    }
}

impl Player {
    /// Mark the player dead. Returns false if it already was.
    pub fn die(&mut self) -> bool {
        std::mem::replace(&mut self.alive, false)
    }
}
