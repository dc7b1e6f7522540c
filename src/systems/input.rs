//! Input polling.
//!
//! Copies the host keyboard state into
//! [`InputState`](crate::resources::input::InputState) before the schedule
//! runs, so every system sees the same snapshot for the whole frame.

use bevy_ecs::prelude::*;

use crate::resources::input::{InputState, KeyboardSource};

pub fn refresh_input(world: &mut World, source: &dyn KeyboardSource) {
    world.resource_mut::<InputState>().refresh(source);
}
