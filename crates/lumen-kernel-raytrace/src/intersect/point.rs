//! Ray-point intersection.

use lumen_kernel_geom::Point;
use lumen_kernel_math::Vec2;

use super::PrimIntersection;
use crate::Ray;

/// Intersect a ray with a point splat of radius `point.radius`.
///
/// The point is treated as the infinite cylinder of that radius around the
/// ray: the hit parameter is the projection of the point onto the ray, and
/// the hit is accepted when the perpendicular distance is within the radius.
/// The uv is always `(0, 0)`.
pub fn intersect_point(ray: &Ray, point: &Point) -> Option<PrimIntersection> {
    let w = point.position - ray.origin;
    let dd = ray.direction.norm_squared();
    if dd == 0.0 {
        return None;
    }
    let t = w.dot(&ray.direction) / dd;
    if !ray.contains(t) {
        return None;
    }

    let rp = ray.at(t);
    if (point.position - rp).norm_squared() > point.radius * point.radius {
        return None;
    }
    Some(PrimIntersection::new(Vec2::zeros(), t))
}
