//! Title screen controller.

use bevy_ecs::prelude::*;
use log::info;

use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::InputState;

/// Request the level when the start key goes down.
pub fn menu_controller(input: Res<InputState>, mut next_state: ResMut<NextGameState>) {
    if input.start.just_pressed {
        info!("Start pressed, entering level");
        next_state.set(GameStates::Level);
    }
}
