//! World bounds resource.
//!
//! The playable area is the rectangle `(0, 0)..(width, height)`. It is set
//! by the scene's background when the scene is built and read by the world
//! clamp and the camera.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

use crate::components::dimensions::Dimensions;
use crate::geometry::Rect;

#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Take the size of a background entity as the world.
    pub fn from_dimensions(dimensions: &Dimensions) -> Self {
        Self::new(dimensions.width, dimensions.height)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Clamp a corner position so a `size` rectangle lies inside the world.
    ///
    /// An entity larger than the world is pinned to the origin on that axis.
    pub fn clamp_position(&self, position: Vec2, size: Vec2) -> Vec2 {
        let max = Vec2::new(self.width - size.x, self.height - size.y).max(Vec2::ZERO);
        position.clamp(Vec2::ZERO, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_position_keeps_rect_inside() {
        let bounds = WorldBounds::new(1200.0, 900.0);
        let size = Vec2::new(64.0, 64.0);
        assert_eq!(
            bounds.clamp_position(Vec2::new(-10.0, 880.0), size),
            Vec2::new(0.0, 836.0)
        );
        assert_eq!(
            bounds.clamp_position(Vec2::new(1190.0, 50.0), size),
            Vec2::new(1136.0, 50.0)
        );
        assert_eq!(
            bounds.clamp_position(Vec2::new(100.0, 100.0), size),
            Vec2::new(100.0, 100.0)
        );
    }

    #[test]
    fn test_clamp_oversized_entity_pins_to_origin() {
        let bounds = WorldBounds::new(50.0, 50.0);
        assert_eq!(
            bounds.clamp_position(Vec2::new(30.0, -5.0), Vec2::new(64.0, 10.0)),
            Vec2::new(0.0, 0.0)
        );
    }
}
