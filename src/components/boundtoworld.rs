use bevy_ecs::prelude::Component;

/// Keep the entity's rectangle inside [`WorldBounds`](crate::resources::worldbounds::WorldBounds).
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct BoundToWorld;
