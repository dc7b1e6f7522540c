//! Size and pivot of an entity.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Width/height in world units plus the pivot used for rotation and scaling.
///
/// The origin is relative to the entity's minimum corner. [`Dimensions::new`]
/// puts it at the center, which is what sprites loaded from an animation get.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
    pub origin: Vec2,
}

impl Dimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            origin: Vec2::new(width * 0.5, height * 0.5),
        }
    }

    /// Resize without moving the pivot.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
