//! High-level game state resources.
//!
//! These resources track the authoritative current scene and any pending
//! transition requested by systems. The transition is applied by
//! [`apply_pending_state`](crate::game::apply_pending_state) at the start of
//! the next frame.

use bevy_ecs::prelude::Resource;

/// Discrete high-level states the game can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    None,
    /// Title screen waiting for the start key.
    Menu,
    /// A level instance. Win and lose are tracked in `LevelState`.
    Level,
}

/// Representation of a requested next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    /// Create a new state initialized to [`GameStates::None`].
    pub fn new() -> Self {
        GameState {
            current: GameStates::None,
        }
    }
    /// Read-only access to the current state.
    pub fn get(&self) -> GameStates {
        self.current
    }
    /// Update the current state immediately.
    ///
    /// Prefer requesting transitions via [`NextGameState`] so that scene
    /// teardown and setup run.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }

    pub fn is(&self, state: GameStates) -> bool {
        self.current == state
    }
}

/// Intent to change to a new game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    /// Create a new value initialized to [`NextGameStates::Unchanged`].
    pub fn new() -> Self {
        NextGameState {
            next: NextGameStates::Unchanged,
        }
    }

    /// Get the current transition request.
    pub fn get(&self) -> NextGameStates {
        self.next
    }

    /// Request a transition to `next` by marking it as pending.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    /// Take the pending request, if any, leaving [`NextGameStates::Unchanged`].
    pub fn take(&mut self) -> Option<GameStates> {
        match std::mem::take(&mut self.next) {
            NextGameStates::Pending(state) => Some(state),
            NextGameStates::Unchanged => None,
        }
    }

    /// Reset to [`NextGameStates::Unchanged`].
    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_clears_request() {
        let mut next = NextGameState::new();
        assert_eq!(next.take(), None);
        next.set(GameStates::Level);
        assert_eq!(next.get(), NextGameStates::Pending(GameStates::Level));
        assert_eq!(next.take(), Some(GameStates::Level));
        assert_eq!(next.get(), NextGameStates::Unchanged);
    }
}
