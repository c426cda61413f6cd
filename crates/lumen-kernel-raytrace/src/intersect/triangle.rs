//! Ray-triangle intersection (Moller-Trumbore).

use lumen_kernel_geom::Triangle;
use lumen_kernel_math::{is_near_zero, Vec2};

use super::PrimIntersection;
use crate::Ray;

/// Intersect a ray with a triangle.
///
/// The uv is barycentric: the hit point is `p0 + u (p1 - p0) + v (p2 - p0)`.
/// Rays parallel to the triangle plane and zero-area triangles miss.
pub fn intersect_triangle(ray: &Ray, triangle: &Triangle) -> Option<PrimIntersection> {
    let edge1 = triangle.p1 - triangle.p0;
    let edge2 = triangle.p2 - triangle.p0;

    let pvec = ray.direction.cross(&edge2);
    let det = edge1.dot(&pvec);
    let scale = edge1.norm() * ray.direction.norm() * edge2.norm();
    if is_near_zero(det, scale) {
        return None;
    }
    let inv_det = 1.0 / det;

    let tvec = ray.origin - triangle.p0;
    let u = tvec.dot(&pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(&edge1);
    let v = ray.direction.dot(&qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(&qvec) * inv_det;
    if !ray.contains(t) {
        return None;
    }
    Some(PrimIntersection::new(Vec2::new(u, v), t))
}
