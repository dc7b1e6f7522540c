//! Run conditions over the game and level state.

use bevy_ecs::prelude::*;

use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::levelstate::LevelState;

pub fn state_is_menu(state: Res<GameState>) -> bool {
    state.is(GameStates::Menu)
}

pub fn state_is_level(state: Res<GameState>) -> bool {
    state.is(GameStates::Level)
}

/// True while a level is running and has not reached an outcome.
pub fn level_is_playing(state: Res<GameState>, level: Res<LevelState>) -> bool {
    state.is(GameStates::Level) && level.play
}
