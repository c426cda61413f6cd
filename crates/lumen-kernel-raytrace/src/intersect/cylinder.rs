//! Ray-cylinder intersection.
//!
//! Uses the Cychosz formulation: project onto the plane perpendicular to
//! `d x axis` to get the lateral interval, then clip that interval against
//! the two cap planes.

use lumen_kernel_geom::Cylinder;
use lumen_kernel_math::{is_near_zero, Point3, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::line::ray_segment_closest;
use super::PrimIntersection;
use crate::Ray;

/// Which surface of a capped cylinder a hit lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CylinderSide {
    /// Cap at `p1`.
    Top,
    /// Lateral surface.
    Lateral,
    /// Cap at `p0`.
    Base,
}

/// Intersect a ray with the infinite cylinder through `p0` along `axis`.
///
/// Returns the entry and exit parameters. A ray parallel to the axis
/// returns `(-inf, +inf)` if it lies within the radius. The interval is not
/// clipped against the ray's range.
pub fn intersect_infinite_cylinder(
    ray: &Ray,
    p0: &Point3,
    axis: &Vec3,
    radius: f32,
) -> Option<(f32, f32)> {
    let axis_len = axis.norm();
    if axis_len == 0.0 || !axis_len.is_finite() {
        return None;
    }
    let a = axis / axis_len;
    let rc = ray.origin - p0;
    let n = ray.direction.cross(&a);
    let ln = n.norm();

    if is_near_zero(ln, ray.direction.norm()) {
        // parallel: inside for the whole line or never
        let perp = rc - a * rc.dot(&a);
        return if perp.norm() <= radius {
            Some((f32::NEG_INFINITY, f32::INFINITY))
        } else {
            None
        };
    }

    let n = n / ln;
    let dist = rc.dot(&n).abs();
    if dist > radius {
        return None;
    }

    let t = -rc.cross(&a).dot(&n) / ln;
    let s = (radius * radius - dist * dist).sqrt() / ln;
    Some((t - s, t + s))
}

/// Intersect a ray with a capped cylinder, also reporting the surface hit.
///
/// The lateral surface uses `r0`. The entry is reported when it is at least
/// `ray.tmin`, otherwise the exit; either way it must lie in the ray's
/// range. The uv is `(s, 0)` with `s` the clamped segment parameter.
pub fn intersect_capped_cylinder(ray: &Ray, cylinder: &Cylinder) -> Option<(PrimIntersection, CylinderSide)> {
    let axis = cylinder.p1 - cylinder.p0;
    let height = axis.norm();
    let extent = cylinder.p0.coords.norm().max(cylinder.p1.coords.norm());
    if is_near_zero(height, extent) {
        return None;
    }
    let a = axis / height;

    let (mut t_in, mut t_out) = intersect_infinite_cylinder(ray, &cylinder.p0, &a, cylinder.r0)?;
    let mut side_in = CylinderSide::Lateral;
    let mut side_out = CylinderSide::Lateral;

    let dnorm = ray.direction.norm();
    let planes = [
        (-a.dot(&ray.direction), -a.dot(&(ray.origin - cylinder.p0)), CylinderSide::Base),
        (a.dot(&ray.direction), a.dot(&(ray.origin - cylinder.p1)), CylinderSide::Top),
    ];
    for (dc, dw, side) in planes {
        if is_near_zero(dc, dnorm) {
            // parallel to the cap, and outside of it
            if dw >= 0.0 {
                return None;
            }
            continue;
        }
        let t = -dw / dc;
        if dc >= 0.0 {
            if t < t_out {
                t_out = t;
                side_out = side;
            }
            if t < t_in {
                return None;
            }
        } else {
            if t > t_in {
                t_in = t;
                side_in = side;
            }
            if t > t_out {
                return None;
            }
        }
    }

    let (t, side) = if t_in >= ray.tmin {
        (t_in, side_in)
    } else {
        (t_out, side_out)
    };
    if !ray.contains(t) {
        return None;
    }

    let s = match ray_segment_closest(ray, &cylinder.p0, &cylinder.p1) {
        Some((_, s)) => s,
        None => (ray.at(t) - cylinder.p0).dot(&axis) / (height * height),
    };
    let s = s.clamp(0.0, 1.0);

    Some((PrimIntersection::new(Vec2::new(s, 0.0), t), side))
}

/// Intersect a ray with a capped cylinder.
pub fn intersect_cylinder(ray: &Ray, cylinder: &Cylinder) -> Option<PrimIntersection> {
    intersect_capped_cylinder(ray, cylinder).map(|(hit, _)| hit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intersect::intersect_bbox;
    use lumen_kernel_geom::Bounded;

    fn unit_cylinder() -> Cylinder {
        Cylinder::new(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 2.0), 1.0, 1.0)
    }

    #[test]
    fn test_infinite_cylinder_perpendicular() {
        let ray = Ray::new(Point3::new(-5.0, 0.0, 7.0), Vec3::x());
        let (t0, t1) = intersect_infinite_cylinder(&ray, &Point3::origin(), &Vec3::z(), 1.0).unwrap();
        assert!((t0 - 4.0).abs() < 1e-5);
        assert!((t1 - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_infinite_cylinder_unnormalized_direction() {
        let ray = Ray::new(Point3::new(-5.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0));
        let (t0, t1) = intersect_infinite_cylinder(&ray, &Point3::origin(), &Vec3::z(), 1.0).unwrap();
        assert!((t0 - 2.0).abs() < 1e-5);
        assert!((t1 - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_infinite_cylinder_parallel() {
        let inside = Ray::new(Point3::new(0.5, 0.0, 0.0), Vec3::z());
        assert_eq!(
            intersect_infinite_cylinder(&inside, &Point3::origin(), &Vec3::z(), 1.0),
            Some((f32::NEG_INFINITY, f32::INFINITY))
        );
        let outside = Ray::new(Point3::new(1.5, 0.0, 0.0), Vec3::z());
        assert!(intersect_infinite_cylinder(&outside, &Point3::origin(), &Vec3::z(), 1.0).is_none());
    }

    #[test]
    fn test_infinite_cylinder_miss() {
        let ray = Ray::new(Point3::new(-5.0, 2.0, 0.0), Vec3::x());
        assert!(intersect_infinite_cylinder(&ray, &Point3::origin(), &Vec3::z(), 1.0).is_none());
    }

    #[test]
    fn test_lateral_hit() {
        let ray = Ray::new(Point3::new(-5.0, 0.0, 1.0), Vec3::x());
        let (hit, side) = intersect_capped_cylinder(&ray, &unit_cylinder()).unwrap();
        assert_eq!(side, CylinderSide::Lateral);
        assert!((hit.distance - 4.0).abs() < 1e-5);
        assert!((hit.uv.x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_base_cap_hit_along_axis() {
        let ray = Ray::new(Point3::new(0.25, 0.0, -5.0), Vec3::z());
        let (hit, side) = intersect_capped_cylinder(&ray, &unit_cylinder()).unwrap();
        assert_eq!(side, CylinderSide::Base);
        assert!((hit.distance - 5.0).abs() < 1e-5);
        assert!(hit.uv.x.abs() < 1e-6);
    }

    #[test]
    fn test_top_cap_hit_from_above() {
        let ray = Ray::new(Point3::new(0.0, 0.25, 6.0), -Vec3::z());
        let (hit, side) = intersect_capped_cylinder(&ray, &unit_cylinder()).unwrap();
        assert_eq!(side, CylinderSide::Top);
        assert!((hit.distance - 4.0).abs() < 1e-5);
        assert!((hit.uv.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_exit_from_inside() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 1.0), Vec3::x());
        let (hit, side) = intersect_capped_cylinder(&ray, &unit_cylinder()).unwrap();
        assert_eq!(side, CylinderSide::Lateral);
        assert!((hit.distance - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_beyond_caps_misses() {
        let ray = Ray::new(Point3::new(-5.0, 0.0, 3.0), Vec3::x());
        assert!(intersect_cylinder(&ray, &unit_cylinder()).is_none());
        let ray = Ray::new(Point3::new(-5.0, 0.0, -1.0), Vec3::x());
        assert!(intersect_cylinder(&ray, &unit_cylinder()).is_none());
    }

    #[test]
    fn test_range_is_respected() {
        let ray = Ray::new(Point3::new(-5.0, 0.0, 1.0), Vec3::x()).with_tmax(3.0);
        assert!(intersect_cylinder(&ray, &unit_cylinder()).is_none());
    }

    #[test]
    fn test_tilted_tapered_hits_stay_inside_bounds() {
        let cyl = Cylinder::new(Point3::origin(), Point3::new(10.0, 10.0, 0.0), 1.0, 0.0);
        let bounds = cyl.bounds();

        let rim = Ray::new(Point3::new(10.6, 9.35, -5.0), Vec3::z());
        assert!(intersect_cylinder(&rim, &cyl).is_some());
        assert!(intersect_bbox(&rim, &bounds));

        let mut hits = 0;
        for i in 0..48 {
            for j in 0..48 {
                let origin = Point3::new(-2.0 + i as f32 * 0.3, -2.0 + j as f32 * 0.3, -5.0);
                let ray = Ray::new(origin, Vec3::new(0.05, -0.03, 1.0));
                if intersect_cylinder(&ray, &cyl).is_some() {
                    hits += 1;
                    assert!(intersect_bbox(&ray, &bounds), "{origin:?} hit outside bounds");
                }
            }
        }
        assert!(hits > 0);
    }
}
