//! Presentation layer of an entity.
//!
//! World-layer entities are drawn through the camera; UI-layer entities are
//! drawn in fixed screen coordinates on top of the world (end-state banners).

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    #[default]
    World,
    Ui,
}
