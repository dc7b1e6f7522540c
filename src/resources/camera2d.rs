//! Shared 2D camera resource.
//!
//! The camera is described by the world point at the center of the screen
//! and the viewport size. [`Camera2DRes::center_on`] follows a target while
//! keeping the visible rectangle inside the world.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

use crate::geometry::Rect;
use crate::resources::worldbounds::WorldBounds;

/// ECS resource that holds the active 2D camera parameters.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct Camera2DRes {
    /// World point shown at the center of the viewport.
    pub position: Vec2,
    /// Visible area in world units.
    pub viewport: Vec2,
}

impl Camera2DRes {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            position: viewport * 0.5,
            viewport,
        }
    }

    /// Move the camera to `target`, clamped so the view stays in `bounds`.
    ///
    /// On an axis where the world is smaller than the viewport the camera
    /// centers on the world instead.
    pub fn center_on(&mut self, target: Vec2, bounds: &WorldBounds) {
        let half = self.viewport * 0.5;
        let world = Vec2::new(bounds.width, bounds.height);
        self.position = Vec2::new(
            clamp_axis(target.x, half.x, world.x),
            clamp_axis(target.y, half.y, world.y),
        );
    }

    /// Rectangle currently visible.
    pub fn view_rect(&self) -> Rect {
        let min = self.position - self.viewport * 0.5;
        Rect::new(min.x, min.y, self.viewport.x, self.viewport.y)
    }
}

fn clamp_axis(target: f32, half_view: f32, world: f32) -> f32 {
    if world <= half_view * 2.0 {
        world * 0.5
    } else {
        target.clamp(half_view, world - half_view)
    }
}
