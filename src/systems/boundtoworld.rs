use bevy_ecs::prelude::*;

use crate::components::boundtoworld::BoundToWorld;
use crate::components::dimensions::Dimensions;
use crate::components::mapposition::MapPosition;
use crate::resources::worldbounds::WorldBounds;

/// Clamp [`BoundToWorld`] entities so their rectangle stays inside the world.
pub fn bound_to_world(
    mut query: Query<(&mut MapPosition, &Dimensions), With<BoundToWorld>>,
    bounds: Res<WorldBounds>,
) {
    for (mut position, dimensions) in query.iter_mut() {
        let clamped = bounds.clamp_position(position.pos, dimensions.size());
        if clamped != position.pos {
            position.pos = clamped;
        }
    }
}
