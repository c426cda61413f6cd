//! Ray-quad intersection.

use lumen_kernel_geom::utils::flip_uv;
use lumen_kernel_geom::{Quad, Triangle};

use super::triangle::intersect_triangle;
use super::PrimIntersection;
use crate::Ray;

/// Intersect a ray with a quad split into two triangles.
///
/// The first half `(p0, p1, p3)` is tested, then the second half
/// `(p2, p3, p1)` on a copy of the ray narrowed to the first hit. Hits on
/// the second half report flipped uv so that the coordinates are continuous
/// across the diagonal.
pub fn intersect_quad(ray: &Ray, quad: &Quad) -> Option<PrimIntersection> {
    let first = Triangle::new(quad.p0, quad.p1, quad.p3);
    if quad.is_triangle() {
        return intersect_triangle(ray, &first);
    }

    let hit = intersect_triangle(ray, &first);
    let narrowed = match hit {
        Some(h) => ray.with_tmax(h.distance),
        None => *ray,
    };
    let second = Triangle::new(quad.p2, quad.p3, quad.p1);
    match intersect_triangle(&narrowed, &second) {
        Some(h) => Some(PrimIntersection::new(flip_uv(&h.uv), h.distance)),
        None => hit,
    }
}
