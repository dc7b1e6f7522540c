//! Physics integration.
//!
//! Steps every [`RigidBody`] with
//! [`RigidBody::apply_physics`] and moves its [`MapPosition`] by the result.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

pub fn movement(mut query: Query<(&mut MapPosition, &mut RigidBody)>, time: Res<WorldTime>) {
    for (mut position, mut rigidbody) in query.iter_mut() {
        let delta = rigidbody.apply_physics(time.delta);
        position.translate(delta);
    }
}
