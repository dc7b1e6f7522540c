//! Z-index component for render ordering.
//!
//! Entities with higher z-index values are drawn on top of those with lower
//! values within the same [`Layer`](crate::components::layer::Layer).

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing. Higher values are drawn later (on top).
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
