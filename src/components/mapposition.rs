//! World-space position of an entity.
//!
//! The position is the entity's minimum (bottom-left) corner in world units;
//! the world y axis points up. Use [`MapPosition::center_at`] to place an
//! entity by its geometric center instead.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::components::dimensions::Dimensions;

#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    /// Move so the center of a `dimensions`-sized rect sits at `center`.
    pub fn center_at(&mut self, center: Vec2, dimensions: &Dimensions) {
        self.pos = center - dimensions.size() * 0.5;
    }

    /// Move so this entity's center matches the center of another entity.
    pub fn center_at_actor(
        &mut self,
        dimensions: &Dimensions,
        other: &MapPosition,
        other_dimensions: &Dimensions,
    ) {
        self.center_at(other.pos + other_dimensions.size() * 0.5, dimensions);
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_at() {
        let mut p = MapPosition::new(0.0, 0.0);
        p.center_at(Vec2::new(400.0, 300.0), &Dimensions::new(100.0, 50.0));
        assert_eq!(p.pos, Vec2::new(350.0, 275.0));
    }

    #[test]
    fn test_center_at_actor() {
        let mut small = MapPosition::default();
        let big = MapPosition::new(100.0, 100.0);
        small.center_at_actor(
            &Dimensions::new(10.0, 10.0),
            &big,
            &Dimensions::new(64.0, 32.0),
        );
        assert_eq!(small.pos, Vec2::new(127.0, 111.0));
    }
}
