//! Ray-capsule intersection.
//!
//! A [`Line`] is a segment with linearly varying radius. The hit is the
//! closest approach between the ray and the segment, accepted when it lies
//! within the interpolated radius.

use lumen_kernel_geom::Line;
use lumen_kernel_math::{is_near_zero, Point3, Vec2};

use super::PrimIntersection;
use crate::Ray;

/// Closest approach between a ray and the segment `p0`-`p1`.
///
/// Solves the 2x2 normal equations of `|o + t d - (p0 + s e)|^2`. Returns
/// the ray parameter `t` and the unclamped segment parameter `s`, or `None`
/// when the ray and segment are (numerically) parallel or either is
/// degenerate.
pub(crate) fn ray_segment_closest(ray: &Ray, p0: &Point3, p1: &Point3) -> Option<(f32, f32)> {
    let u = ray.direction;
    let v = p1 - p0;
    let w = ray.origin - p0;

    let a = u.dot(&u);
    let b = u.dot(&v);
    let c = v.dot(&v);
    let d = u.dot(&w);
    let e = v.dot(&w);
    let det = a * c - b * b;

    if is_near_zero(det, a * c) {
        return None;
    }

    let t = (b * e - c * d) / det;
    let s = (a * e - b * d) / det;
    Some((t, s))
}

/// Intersect a ray with a variable-radius capsule.
///
/// The uv is `(s, 0)` with `s` the clamped segment parameter of the closest
/// approach.
pub fn intersect_line(ray: &Ray, line: &Line) -> Option<PrimIntersection> {
    let (t, s) = ray_segment_closest(ray, &line.p0, &line.p1)?;
    if !ray.contains(t) {
        return None;
    }
    let s = s.clamp(0.0, 1.0);

    let pr = ray.at(t);
    let pl = line.point_at(s);
    let r = line.radius_at(s);
    if (pr - pl).norm_squared() > r * r {
        return None;
    }
    Some(PrimIntersection::new(Vec2::new(s, 0.0), t))
}
