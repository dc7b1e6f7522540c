//! Face-motion system.
//!
//! For entities marked [`FaceMotion`]: the animation plays only while the
//! body moves, and a moving body turns to its motion angle. A body at rest
//! keeps its last rotation.

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::facemotion::FaceMotion;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;

pub fn face_motion(
    mut query: Query<(&RigidBody, &mut Rotation, Option<&mut Animation>), With<FaceMotion>>,
) {
    for (rigidbody, mut rotation, animation) in query.iter_mut() {
        let moving = rigidbody.is_moving();
        if let Some(mut animation) = animation {
            animation.set_paused(!moving);
        }
        if moving {
            rotation.degrees = rigidbody.motion_angle();
        }
    }
}
