//! Distance-bounded overlap tests.
//!
//! A primitive overlaps a query point when the distance from the point to
//! the primitive's closest surface point is at most `dist_max` plus the
//! primitive's radius interpolated at that surface point.

use lumen_kernel_geom::utils::{flip_uv, interpolate_triangle};
use lumen_kernel_geom::{Aabb3, Line, Point, Quad, Triangle};
use lumen_kernel_math::{Point3, Vec2};
use serde::{Deserialize, Serialize};

use crate::closest::{closestuv_line, closestuv_triangle};

/// Result of an overlap test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrimOverlap {
    /// Local coordinates of the closest surface point.
    pub uv: Vec2,
    /// Euclidean distance from the query point to the closest point.
    pub distance: f32,
}

fn within(pos: &Point3, closest: &Point3, dist_max: f32, radius: f32, uv: Vec2) -> Option<PrimOverlap> {
    let dd = (closest - pos).norm_squared();
    let bound = dist_max + radius;
    if dd > bound * bound {
        return None;
    }
    Some(PrimOverlap {
        uv,
        distance: dd.sqrt(),
    })
}

/// Overlap of a query point with a point splat.
pub fn overlap_point(pos: &Point3, dist_max: f32, point: &Point) -> Option<PrimOverlap> {
    within(pos, &point.position, dist_max, point.radius, Vec2::zeros())
}

/// Overlap of a query point with a variable-radius capsule.
///
/// The uv is `(s, 0)` with `s` the segment parameter of the closest point.
pub fn overlap_line(pos: &Point3, dist_max: f32, line: &Line) -> Option<PrimOverlap> {
    let s = closestuv_line(pos, &line.p0, &line.p1);
    within(pos, &line.point_at(s), dist_max, line.radius_at(s), Vec2::new(s, 0.0))
}

/// Overlap of a query point with a triangle with per-vertex radii.
pub fn overlap_triangle(pos: &Point3, dist_max: f32, triangle: &Triangle, radii: &[f32; 3]) -> Option<PrimOverlap> {
    let uv = closestuv_triangle(pos, &triangle.p0, &triangle.p1, &triangle.p2);
    let radius = interpolate_triangle(radii[0], radii[1], radii[2], &uv);
    within(pos, &triangle.point_at(&uv), dist_max, radius, uv)
}

/// Overlap of a query point with a quad with per-vertex radii.
///
/// Tests the half `(p0, p1, p3)`, then the half `(p2, p3, p1)` with the
/// bound narrowed to the first overlap's distance. Overlaps on the second
/// half report flipped uv, as for ray hits.
pub fn overlap_quad(pos: &Point3, dist_max: f32, quad: &Quad, radii: &[f32; 4]) -> Option<PrimOverlap> {
    let first = Triangle::new(quad.p0, quad.p1, quad.p3);
    let first_radii = [radii[0], radii[1], radii[3]];
    if quad.is_triangle() {
        return overlap_triangle(pos, dist_max, &first, &first_radii);
    }

    let hit = overlap_triangle(pos, dist_max, &first, &first_radii);
    let bound = hit.map_or(dist_max, |h| h.distance);
    let second = Triangle::new(quad.p2, quad.p3, quad.p1);
    match overlap_triangle(pos, bound, &second, &[radii[2], radii[3], radii[1]]) {
        Some(h) => Some(PrimOverlap {
            uv: flip_uv(&h.uv),
            distance: h.distance,
        }),
        None => hit,
    }
}

/// True if `pos` is within `dist_max` of `bbox`.
///
/// Points inside the box are at distance zero.
pub fn overlap_bbox_point(pos: &Point3, dist_max: f32, bbox: &Aabb3) -> bool {
    let mut dd = 0.0;
    for k in 0..3 {
        if pos[k] < bbox.min[k] {
            dd += (bbox.min[k] - pos[k]) * (bbox.min[k] - pos[k]);
        }
        if pos[k] > bbox.max[k] {
            dd += (pos[k] - bbox.max[k]) * (pos[k] - bbox.max[k]);
        }
    }
    dd <= dist_max * dist_max
}

/// True if two boxes overlap. Touching boxes overlap.
pub fn overlap_bbox(a: &Aabb3, b: &Aabb3) -> bool {
    (0..3).all(|k| a.max[k] >= b.min[k] && a.min[k] <= b.max[k])
}
