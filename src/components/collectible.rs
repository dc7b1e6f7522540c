use bevy_ecs::prelude::Component;

/// Something the player picks up. Once `collected` it only fades away.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Collectible {
    pub collected: bool,
}
