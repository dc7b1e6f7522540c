//! Collision polygon component.
//!
//! A [`BoundaryPolygon`] stores the hit region of an entity relative to its
//! unrotated, unscaled rectangle (minimum corner at the local origin). Every
//! query re-projects it into world space from the entity's current
//! [`Pose`], so it can never go stale after a move or rotation.
//!
//! The overlap checks run a cheap axis-aligned bounding box rejection first
//! and only then the exact separating-axis test from [`crate::geometry`].

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::components::dimensions::Dimensions;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::geometry::{self, Polygon};

/// Snapshot of the transform pieces needed to place a polygon in the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec2,
    pub origin: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
}

impl Pose {
    pub fn new(
        position: &MapPosition,
        dimensions: &Dimensions,
        rotation: &Rotation,
        scale: &Scale,
    ) -> Self {
        Self {
            position: position.pos,
            origin: dimensions.origin,
            rotation: rotation.degrees,
            scale: scale.scale,
        }
    }

    /// Pose with no rotation and unit scale.
    pub fn at(position: Vec2, origin: Vec2) -> Self {
        Self {
            position,
            origin,
            rotation: 0.0,
            scale: Vec2::ONE,
        }
    }
}

#[derive(Component, Clone, Debug, PartialEq)]
pub struct BoundaryPolygon {
    local: Polygon,
}

impl BoundaryPolygon {
    /// Rectangular hit region covering the whole entity.
    pub fn rectangle(dimensions: &Dimensions) -> Self {
        Self {
            local: Polygon::rectangle(dimensions.width, dimensions.height),
        }
    }

    /// Regular `sides`-gon inscribed in the entity's ellipse.
    ///
    /// Vertex 0 is at angle 0, so `sides = 4` yields a diamond.
    pub fn regular(sides: usize, dimensions: &Dimensions) -> Self {
        Self {
            local: Polygon::inscribed(sides, dimensions.width, dimensions.height),
        }
    }

    pub fn local(&self) -> &Polygon {
        &self.local
    }

    /// Hit region in world space for the given pose. Recomputed on every call.
    pub fn world_polygon(&self, pose: &Pose) -> Polygon {
        self.local
            .transformed(pose.position, pose.origin, pose.rotation, pose.scale)
    }

    /// True if the two hit regions intersect.
    pub fn overlaps(&self, pose: &Pose, other: &BoundaryPolygon, other_pose: &Pose) -> bool {
        let a = self.world_polygon(pose);
        let b = other.world_polygon(other_pose);
        a.bounding_rect().overlaps(&b.bounding_rect()) && geometry::overlap_convex_polygons(&a, &b)
    }

    /// Solid behaviour: if this region overlaps `other`, return the translation
    /// that pushes it out along the minimum translation vector.
    ///
    /// Returns `None` when there is no overlap. Callers apply the returned
    /// vector to the entity position (see [`BoundaryPolygon::prevent_overlap`]).
    pub fn push_out(&self, pose: &Pose, other: &BoundaryPolygon, other_pose: &Pose) -> Option<Vec2> {
        let a = self.world_polygon(pose);
        let b = other.world_polygon(other_pose);
        if !a.bounding_rect().overlaps(&b.bounding_rect()) {
            return None;
        }
        geometry::minimum_translation(&a, &b).map(|mtv| mtv.translation())
    }

    /// Like [`BoundaryPolygon::push_out`], but moves `position` too.
    ///
    /// Returns the unit push direction, or `None` if nothing overlapped.
    pub fn prevent_overlap(
        &self,
        position: &mut MapPosition,
        pose: &Pose,
        other: &BoundaryPolygon,
        other_pose: &Pose,
    ) -> Option<Vec2> {
        let push = self.push_out(pose, other, other_pose)?;
        position.translate(push);
        Some(push.normalize_or_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn pose_at(x: f32, y: f32, dims: &Dimensions) -> Pose {
        Pose::at(Vec2::new(x, y), dims.origin)
    }

    #[test]
    fn test_regular_four_gon_is_diamond_in_world() {
        let dims = Dimensions::new(64.0, 32.0);
        let boundary = BoundaryPolygon::regular(4, &dims);
        let world = boundary.world_polygon(&pose_at(10.0, 20.0, &dims));
        let v = world.vertices();
        // right, top, left, bottom midpoints of the bounding box
        assert!(approx_eq(v[0].x, 74.0) && approx_eq(v[0].y, 36.0));
        assert!(approx_eq(v[1].x, 42.0) && approx_eq(v[1].y, 52.0));
        assert!(approx_eq(v[2].x, 10.0) && approx_eq(v[2].y, 36.0));
        assert!(approx_eq(v[3].x, 42.0) && approx_eq(v[3].y, 20.0));
    }

    #[test]
    fn test_world_polygon_is_idempotent() {
        let dims = Dimensions::new(50.0, 40.0);
        let boundary = BoundaryPolygon::regular(8, &dims);
        let pose = Pose {
            position: Vec2::new(3.0, 4.0),
            origin: dims.origin,
            rotation: 37.0,
            scale: Vec2::new(1.5, 0.5),
        };
        assert_eq!(boundary.world_polygon(&pose), boundary.world_polygon(&pose));
    }

    #[test]
    fn test_world_polygon_follows_pose() {
        let dims = Dimensions::new(10.0, 10.0);
        let boundary = BoundaryPolygon::rectangle(&dims);
        let before = boundary.world_polygon(&pose_at(0.0, 0.0, &dims)).bounding_rect();
        let after = boundary.world_polygon(&pose_at(5.0, 0.0, &dims)).bounding_rect();
        assert!(approx_eq(after.x - before.x, 5.0));
    }

    #[test]
    fn test_overlaps_symmetric() {
        let dims = Dimensions::new(64.0, 64.0);
        let a = BoundaryPolygon::regular(8, &dims);
        let b = BoundaryPolygon::regular(8, &dims);
        for x in [0.0, 30.0, 60.0, 63.0, 70.0] {
            let pa = pose_at(0.0, 0.0, &dims);
            let pb = pose_at(x, 10.0, &dims);
            assert_eq!(a.overlaps(&pa, &b, &pb), b.overlaps(&pb, &a, &pa));
        }
    }

    #[test]
    fn test_prevent_overlap_separates_and_is_idempotent() {
        let dims = Dimensions::new(64.0, 64.0);
        let player = BoundaryPolygon::regular(8, &dims);
        let rock = BoundaryPolygon::regular(8, &dims);
        let rock_pose = pose_at(20.0, 20.0, &dims);

        let mut position = MapPosition::new(20.0, 20.0);
        let pose = pose_at(position.pos.x, position.pos.y, &dims);
        let direction = player.prevent_overlap(&mut position, &pose, &rock, &rock_pose);
        let direction = direction.expect("spawned on top of the rock");
        assert!(approx_eq(direction.length(), 1.0));
        assert!(position.pos != Vec2::new(20.0, 20.0));

        let pose = pose_at(position.pos.x, position.pos.y, &dims);
        assert!(!player.overlaps(&pose, &rock, &rock_pose));
        let mut again = position;
        assert!(player.prevent_overlap(&mut again, &pose, &rock, &rock_pose).is_none());
        assert_eq!(again, position);
    }

    #[test]
    fn test_push_out_none_when_apart() {
        let dims = Dimensions::new(10.0, 10.0);
        let a = BoundaryPolygon::rectangle(&dims);
        assert!(a
            .push_out(&pose_at(0.0, 0.0, &dims), &a, &pose_at(50.0, 0.0, &dims))
            .is_none());
    }
}
