//! Screen size resource.
//!
//! Stores the logical viewport dimensions in world units. The camera uses it
//! to keep the visible rectangle inside the world.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

/// Logical viewport size.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ScreenSize {
    pub w: f32,
    pub h: f32,
}

impl ScreenSize {
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }
}
