//! Keyboard-driven acceleration for the player.
//!
//! Each held arrow key adds one `accelerate_at_angle` push, so holding two
//! perpendicular keys accelerates diagonally (and faster, as the pushes sum).
//! A dead player ignores the keyboard.

use bevy_ecs::prelude::*;

use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::resources::input::InputState;

pub fn player_input(mut query: Query<(&Player, &mut RigidBody)>, input: Res<InputState>) {
    for (player, mut rigidbody) in query.iter_mut() {
        if !player.alive {
            continue;
        }
        if input.left.active {
            rigidbody.accelerate_at_angle(180.0);
        }
        if input.right.active {
            rigidbody.accelerate_at_angle(0.0);
        }
        if input.up.active {
            rigidbody.accelerate_at_angle(90.0);
        }
        if input.down.active {
            rigidbody.accelerate_at_angle(270.0);
        }
    }
}
