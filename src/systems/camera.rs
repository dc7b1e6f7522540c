//! Camera follow system.

use bevy_ecs::prelude::*;

use crate::components::cameratarget::CameraTarget;
use crate::components::dimensions::Dimensions;
use crate::components::mapposition::MapPosition;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::worldbounds::WorldBounds;

/// Re-center the camera on the target's center, clamped to the world.
pub fn camera_follow(
    query: Query<(&MapPosition, &Dimensions), With<CameraTarget>>,
    bounds: Res<WorldBounds>,
    mut camera: ResMut<Camera2DRes>,
) {
    if let Some((position, dimensions)) = query.iter().next() {
        let center = position.pos + dimensions.size() * 0.5;
        camera.center_on(center, &bounds);
    }
}
