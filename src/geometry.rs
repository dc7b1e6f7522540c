//! Convex polygon geometry.
//!
//! Pure 2D helpers used by the collision layer: polygons stored as inline
//! vertex lists, axis-aligned rectangles, and a separating-axis overlap test
//! that can also report the minimum translation vector (MTV) needed to push
//! one polygon out of another.
//!
//! Nothing in here knows about entities. Callers are expected to hand in
//! polygons that are already expressed in world space (see
//! [`crate::components::boundary::BoundaryPolygon::world_polygon`]).

use glam::Vec2;
use smallvec::SmallVec;

/// Penetration depths at or below this value are treated as touching, not overlapping.
pub const OVERLAP_EPSILON: f32 = 1e-3;

/// Axis-aligned rectangle anchored at its minimum corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Strict AABB overlap; rectangles sharing only an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// Minimum translation vector: unit push direction and penetration depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mtv {
    pub normal: Vec2,
    pub depth: f32,
}

impl Mtv {
    /// The full displacement (`normal * depth`).
    pub fn translation(&self) -> Vec2 {
        self.normal * self.depth
    }
}

/// A polygon given as an ordered vertex loop (either winding).
///
/// Most game polygons have eight vertices or fewer, so they live inline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    vertices: SmallVec<[Vec2; 8]>,
}

impl Polygon {
    pub fn new(vertices: impl IntoIterator<Item = Vec2>) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
        }
    }

    /// Rectangle with its minimum corner at the origin.
    pub fn rectangle(width: f32, height: f32) -> Self {
        Self::new([
            Vec2::new(0.0, 0.0),
            Vec2::new(width, 0.0),
            Vec2::new(width, height),
            Vec2::new(0.0, height),
        ])
    }

    /// Regular `sides`-gon whose vertices lie on the ellipse inscribed in a
    /// `width` x `height` rectangle anchored at the origin.
    ///
    /// Vertex 0 sits at angle 0 (the middle of the right edge), so a 4-gon
    /// comes out as a diamond rather than an axis-aligned square.
    pub fn inscribed(sides: usize, width: f32, height: f32) -> Self {
        let half_w = width * 0.5;
        let half_h = height * 0.5;
        Self::new((0..sides).map(|i| {
            let angle = i as f32 * std::f32::consts::TAU / sides as f32;
            Vec2::new(
                half_w * angle.cos() + half_w,
                half_h * angle.sin() + half_h,
            )
        }))
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Map local vertices into world space.
    ///
    /// Each vertex is taken relative to `origin`, scaled, rotated by
    /// `rotation_degrees` (counter-clockwise) and finally offset by
    /// `position + origin`.
    pub fn transformed(
        &self,
        position: Vec2,
        origin: Vec2,
        rotation_degrees: f32,
        scale: Vec2,
    ) -> Polygon {
        let (sin, cos) = rotation_degrees.to_radians().sin_cos();
        Polygon::new(self.vertices.iter().map(|v| {
            let local = (*v - origin) * scale;
            let rotated = Vec2::new(cos * local.x - sin * local.y, sin * local.x + cos * local.y);
            rotated + position + origin
        }))
    }

    pub fn bounding_rect(&self) -> Rect {
        let Some(first) = self.vertices.first() else {
            return Rect::default();
        };
        let (min, max) = self
            .vertices
            .iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)));
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Average of the vertices.
    pub fn centroid(&self) -> Vec2 {
        if self.vertices.is_empty() {
            return Vec2::ZERO;
        }
        self.vertices.iter().copied().sum::<Vec2>() / self.vertices.len() as f32
    }

    fn project(&self, axis: Vec2) -> (f32, f32) {
        self.vertices
            .iter()
            .map(|v| v.dot(axis))
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p), hi.max(p))
            })
    }

    fn edge_normals(&self) -> impl Iterator<Item = Vec2> + '_ {
        let n = self.vertices.len();
        (0..n).filter_map(move |i| {
            let edge = self.vertices[(i + 1) % n] - self.vertices[i];
            let normal = Vec2::new(-edge.y, edge.x).normalize_or_zero();
            (normal != Vec2::ZERO).then_some(normal)
        })
    }
}

/// Exact overlap test for two convex polygons in the same space.
pub fn overlap_convex_polygons(a: &Polygon, b: &Polygon) -> bool {
    minimum_translation(a, b).is_some()
}

/// Separating-axis test returning the MTV that pushes `a` out of `b`.
///
/// Returns `None` when some edge normal separates the two polygons (or the
/// deepest penetration is within [`OVERLAP_EPSILON`]). The returned normal is
/// oriented from `b` towards `a`, so translating `a` by
/// [`Mtv::translation`] leaves the two polygons touching.
pub fn minimum_translation(a: &Polygon, b: &Polygon) -> Option<Mtv> {
    if a.len() < 3 || b.len() < 3 {
        return None;
    }

    let mut best: Option<Mtv> = None;
    for axis in a.edge_normals().chain(b.edge_normals()) {
        let (min_a, max_a) = a.project(axis);
        let (min_b, max_b) = b.project(axis);

        let mut overlap = max_a.min(max_b) - min_a.max(min_b);
        if overlap <= OVERLAP_EPSILON {
            return None;
        }

        // one projection inside the other: push past the nearer end
        let contained = (min_a <= min_b && max_a >= max_b) || (min_b <= min_a && max_b >= max_a);
        if contained {
            overlap += (min_a - min_b).abs().min((max_a - max_b).abs());
        }

        if best.is_none_or(|m| overlap < m.depth) {
            best = Some(Mtv {
                normal: axis,
                depth: overlap,
            });
        }
    }

    best.map(|mut mtv| {
        if (a.centroid() - b.centroid()).dot(mtv.normal) < 0.0 {
            mtv.normal = -mtv.normal;
        }
        mtv
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn square_at(x: f32, y: f32, size: f32) -> Polygon {
        Polygon::rectangle(size, size).transformed(Vec2::new(x, y), Vec2::ZERO, 0.0, Vec2::ONE)
    }

    // ==================== RECT TESTS ====================

    #[test]
    fn test_rect_overlap_is_strict() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        let c = Rect::new(9.0, 9.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }

    #[test]
    fn test_rect_center() {
        let r = Rect::new(5.0, 5.0, 10.0, 20.0);
        assert_eq!(r.center(), Vec2::new(10.0, 15.0));
    }

    // ==================== POLYGON CONSTRUCTION TESTS ====================

    #[test]
    fn test_inscribed_four_gon_is_diamond() {
        let p = Polygon::inscribed(4, 40.0, 20.0);
        let v = p.vertices();
        assert_eq!(v.len(), 4);
        assert!(approx_eq(v[0].x, 40.0) && approx_eq(v[0].y, 10.0));
        assert!(approx_eq(v[1].x, 20.0) && approx_eq(v[1].y, 20.0));
        assert!(approx_eq(v[2].x, 0.0) && approx_eq(v[2].y, 10.0));
        assert!(approx_eq(v[3].x, 20.0) && approx_eq(v[3].y, 0.0));
    }

    #[test]
    fn test_inscribed_vertices_lie_on_ellipse() {
        let p = Polygon::inscribed(8, 60.0, 30.0);
        for v in p.vertices() {
            let nx = (v.x - 30.0) / 30.0;
            let ny = (v.y - 15.0) / 15.0;
            assert!(approx_eq(nx * nx + ny * ny, 1.0));
        }
    }

    #[test]
    fn test_transformed_rotates_about_origin() {
        let p = Polygon::rectangle(10.0, 10.0);
        let t = p.transformed(Vec2::new(100.0, 0.0), Vec2::new(5.0, 5.0), 90.0, Vec2::ONE);
        // (0,0) -> relative (-5,-5) -> rotated (5,-5) -> + (105, 5)
        let v = t.vertices()[0];
        assert!(approx_eq(v.x, 110.0));
        assert!(approx_eq(v.y, 0.0));
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn test_transformed_scales_about_origin() {
        let p = Polygon::rectangle(10.0, 10.0);
        let t = p.transformed(Vec2::ZERO, Vec2::new(5.0, 5.0), 0.0, Vec2::splat(2.0));
        let r = t.bounding_rect();
        assert!(approx_eq(r.x, -5.0));
        assert!(approx_eq(r.width, 20.0));
    }

    #[test]
    fn test_bounding_rect_of_empty_polygon() {
        assert_eq!(Polygon::default().bounding_rect(), Rect::default());
    }

    // ==================== SAT TESTS ====================

    #[test]
    fn test_separated_squares_do_not_overlap() {
        let a = square_at(0.0, 0.0, 10.0);
        let b = square_at(20.0, 0.0, 10.0);
        assert!(!overlap_convex_polygons(&a, &b));
        assert!(minimum_translation(&a, &b).is_none());
    }

    #[test]
    fn test_touching_squares_do_not_overlap() {
        let a = square_at(0.0, 0.0, 10.0);
        let b = square_at(10.0, 0.0, 10.0);
        assert!(!overlap_convex_polygons(&a, &b));
    }

    #[test]
    fn test_aabb_overlap_but_sat_separated() {
        // two diamonds whose bounding boxes overlap at the corners only
        let a = Polygon::inscribed(4, 10.0, 10.0);
        let b = Polygon::inscribed(4, 10.0, 10.0).transformed(
            Vec2::new(8.0, 8.0),
            Vec2::ZERO,
            0.0,
            Vec2::ONE,
        );
        assert!(a.bounding_rect().overlaps(&b.bounding_rect()));
        assert!(!overlap_convex_polygons(&a, &b));
    }

    #[test]
    fn test_mtv_pushes_a_away_from_b() {
        let a = square_at(8.0, 0.0, 10.0);
        let b = square_at(0.0, 0.0, 10.0);
        let mtv = minimum_translation(&a, &b).unwrap();
        assert!(approx_eq(mtv.depth, 2.0));
        assert!(approx_eq(mtv.normal.x, 1.0));
        assert!(approx_eq(mtv.normal.y, 0.0));

        let moved = a.transformed(mtv.translation(), Vec2::ZERO, 0.0, Vec2::ONE);
        assert!(minimum_translation(&moved, &b).is_none());
    }

    #[test]
    fn test_mtv_for_contained_polygon() {
        let outer = square_at(0.0, 0.0, 20.0);
        let inner = square_at(2.0, 8.0, 4.0);
        let mtv = minimum_translation(&inner, &outer).unwrap();
        // cheapest exit is to the left: 4 (width) + 2 (distance to edge)
        assert!(approx_eq(mtv.depth, 6.0));
        assert!(approx_eq(mtv.normal.x, -1.0));
    }

    #[test]
    fn test_mtv_identical_polygons_is_nonzero() {
        let a = Polygon::inscribed(8, 64.0, 64.0);
        let b = a.clone();
        let mtv = minimum_translation(&a, &b).unwrap();
        assert!(mtv.depth > 0.0);
        let moved = a.transformed(mtv.translation(), Vec2::ZERO, 0.0, Vec2::ONE);
        assert!(!overlap_convex_polygons(&moved, &b));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Polygon::inscribed(8, 30.0, 30.0);
        for dx in [-40.0_f32, -25.0, -10.0, 0.0, 12.0, 29.0, 31.0] {
            let b = Polygon::inscribed(6, 20.0, 40.0).transformed(
                Vec2::new(dx, 5.0),
                Vec2::new(10.0, 20.0),
                33.0,
                Vec2::ONE,
            );
            assert_eq!(overlap_convex_polygons(&a, &b), overlap_convex_polygons(&b, &a));
        }
    }

    #[test]
    fn test_degenerate_polygons_never_overlap() {
        let line = Polygon::new([Vec2::ZERO, Vec2::new(10.0, 10.0)]);
        let square = square_at(0.0, 0.0, 10.0);
        assert!(!overlap_convex_polygons(&line, &square));
        assert!(!overlap_convex_polygons(&square, &Polygon::default()));
    }
}
