use bevy_ecs::prelude::Component;

/// The camera re-centres on this entity every frame.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct CameraTarget;
