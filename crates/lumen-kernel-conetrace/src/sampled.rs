//! Approximate cone-primitive intersection by disk sampling.
//!
//! A disk is placed across the cone axis at the depth of the primitive,
//! with the radius of the cone at that depth. Sample rays run from the apex
//! through golden-spiral points on the disk, and the cone hits the
//! primitive when enough of them do.

use lumen_kernel_geom::{Cylinder, Line, Point, Quad, Sphere, Triangle};
use lumen_kernel_math::{Frame3, Point3, Vec2};
use lumen_kernel_raytrace::{RayIntersect, Ray};
use serde::{Deserialize, Serialize};

use crate::config::ConeSampling;
use crate::sampling::golden_spiral_point;
use crate::Cone;

/// Outcome of a successful approximate cone test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConeHit {
    /// Hit distance of the last sample ray that hit.
    pub distance: f32,
    /// Number of sample rays that hit.
    pub hits: usize,
    /// Local coordinates of every sample hit, in sample order.
    pub uvs: Vec<Vec2>,
}

impl ConeHit {
    /// Fraction of `samples` rays that hit.
    pub fn coverage(&self, samples: usize) -> f32 {
        if samples == 0 {
            return 0.0;
        }
        self.hits as f32 / samples as f32
    }
}

/// A primitive that can be sampled by a cone.
pub trait ConeTarget {
    /// Reference point whose distance from the apex sets the sampling depth.
    fn anchor(&self) -> Point3;
}

impl ConeTarget for Point {
    fn anchor(&self) -> Point3 {
        self.position
    }
}

impl ConeTarget for Line {
    fn anchor(&self) -> Point3 {
        self.point_at(0.5)
    }
}

impl ConeTarget for Cylinder {
    fn anchor(&self) -> Point3 {
        Point3::from((self.p0.coords + self.p1.coords) * 0.5)
    }
}

impl ConeTarget for Sphere {
    fn anchor(&self) -> Point3 {
        self.center
    }
}

impl ConeTarget for Triangle {
    fn anchor(&self) -> Point3 {
        self.centroid()
    }
}

impl ConeTarget for Quad {
    fn anchor(&self) -> Point3 {
        self.centroid()
    }
}

/// Test a cone against a primitive by firing `sampling.samples` rays.
///
/// Each sample ray uses the cone's parametric interval. Returns `None` when
/// the hit fraction does not exceed `sampling.threshold`, or when the cone
/// axis is degenerate. The result is deterministic for identical inputs.
pub fn intersect_cone<P>(cone: &Cone, prim: &P, sampling: &ConeSampling) -> Option<ConeHit>
where
    P: RayIntersect + ConeTarget,
{
    let n = sampling.samples;
    if n == 0 {
        return None;
    }
    let Some(frame) = Frame3::from_z(cone.origin, cone.direction) else {
        log::debug!("cone with degenerate axis {:?}", cone.direction);
        return None;
    };

    let depth = (prim.anchor() - cone.origin).norm();
    let radius = depth * cone.spread.tan();

    let mut hits = 0;
    let mut distance = f32::INFINITY;
    let mut uvs = Vec::new();
    for i in 1..=n {
        let s = golden_spiral_point(i, n) * radius;
        let target = frame.transform_point(&Point3::new(s.x, s.y, depth));
        let to_target = target - cone.origin;
        let len = to_target.norm();
        let direction = if len > 0.0 { to_target / len } else { frame.z };

        let ray = Ray::with_range(cone.origin, direction, cone.tmin, cone.tmax);
        if let Some(hit) = prim.intersect_ray(&ray) {
            hits += 1;
            distance = hit.distance;
            uvs.push(hit.uv);
        }
    }

    log::trace!("cone sampling: {hits}/{n} rays hit");
    if hits as f32 / n as f32 <= sampling.threshold {
        return None;
    }
    Some(ConeHit { distance, hits, uvs })
}

/// Approximate cone test against a point splat.
///
/// The disk radius only places the samples. Every sample ray is tested
/// against `point.radius`; reusing the disk radius as the splat radius is
/// an open question recorded in DESIGN.md (decision 2).
pub fn cone_intersect_point(cone: &Cone, point: &Point, sampling: &ConeSampling) -> Option<ConeHit> {
    intersect_cone(cone, point, sampling)
}

/// Approximate cone test against a variable-radius capsule.
pub fn cone_intersect_line(cone: &Cone, line: &Line, sampling: &ConeSampling) -> Option<ConeHit> {
    intersect_cone(cone, line, sampling)
}

/// Approximate cone test against a capped cylinder.
pub fn cone_intersect_cylinder(cone: &Cone, cylinder: &Cylinder, sampling: &ConeSampling) -> Option<ConeHit> {
    intersect_cone(cone, cylinder, sampling)
}

/// Approximate cone test against a triangle.
pub fn cone_intersect_triangle(cone: &Cone, triangle: &Triangle, sampling: &ConeSampling) -> Option<ConeHit> {
    intersect_cone(cone, triangle, sampling)
}

/// Approximate cone test against a quad.
pub fn cone_intersect_quad(cone: &Cone, quad: &Quad, sampling: &ConeSampling) -> Option<ConeHit> {
    intersect_cone(cone, quad, sampling)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lumen_kernel_math::Vec3;

    fn down_z(spread_deg: f32) -> Cone {
        Cone::new(Point3::origin(), Vec3::z(), spread_deg.to_radians())
    }

    fn wide_triangle(z: f32) -> Triangle {
        Triangle::new(
            Point3::new(-10.0, -10.0, z),
            Point3::new(10.0, -10.0, z),
            Point3::new(0.0, 10.0, z),
        )
    }

    #[test]
    fn test_fully_covered_triangle() {
        let sampling = ConeSampling::default();
        let hit = cone_intersect_triangle(&down_z(10.0), &wide_triangle(5.0), &sampling).unwrap();
        assert_eq!(hit.hits, 64);
        assert_eq!(hit.uvs.len(), 64);
        assert_eq!(hit.coverage(sampling.samples), 1.0);
        // the last sample sits on the rim of the cone
        let rim = 5.0 / 10.0f32.to_radians().cos();
        assert_relative_eq!(hit.distance, rim, epsilon = 1e-3);
    }

    #[test]
    fn test_triangle_outside_cone() {
        let mut tri = wide_triangle(5.0);
        for p in [&mut tri.p0, &mut tri.p1, &mut tri.p2] {
            p.x += 30.0;
        }
        assert!(cone_intersect_triangle(&down_z(10.0), &tri, &ConeSampling::default()).is_none());
    }

    #[test]
    fn test_half_covered_quad_uses_threshold() {
        let quad = Quad::new(
            Point3::new(0.0, -10.0, 5.0),
            Point3::new(10.0, -10.0, 5.0),
            Point3::new(10.0, 10.0, 5.0),
            Point3::new(0.0, 10.0, 5.0),
        );
        let hit = cone_intersect_quad(&down_z(10.0), &quad, &ConeSampling::default()).unwrap();
        assert_eq!(hit.hits, 32);

        let strict = ConeSampling::new(64, 0.6).unwrap();
        assert!(cone_intersect_quad(&down_z(10.0), &quad, &strict).is_none());
    }

    #[test]
    fn test_point_uses_its_own_radius() {
        let sampling = ConeSampling::default();
        let fat = Point::new(Point3::new(0.0, 0.0, 5.0), 0.5);
        let hit = cone_intersect_point(&down_z(5.0), &fat, &sampling).unwrap();
        assert_eq!(hit.hits, 64);
        assert!(hit.distance > 4.9 && hit.distance <= 5.0);
        assert!(hit.uvs.iter().all(|uv| *uv == Vec2::zeros()));

        let thin = Point::new(Point3::new(0.0, 0.0, 5.0), 0.01);
        assert!(cone_intersect_point(&down_z(5.0), &thin, &sampling).is_none());
    }

    #[test]
    fn test_line_and_cylinder_across_the_axis() {
        let sampling = ConeSampling::default();
        let line = Line::new(Point3::new(-5.0, 0.0, 5.0), Point3::new(5.0, 0.0, 5.0), 0.6, 0.6);
        let hit = cone_intersect_line(&down_z(5.0), &line, &sampling).unwrap();
        assert_eq!(hit.hits, 64);
        for uv in &hit.uvs {
            assert!(uv.x > 0.4 && uv.x < 0.6);
        }

        let cylinder = Cylinder::new(Point3::new(-5.0, 0.0, 5.0), Point3::new(5.0, 0.0, 5.0), 1.0, 1.0);
        let hit = cone_intersect_cylinder(&down_z(5.0), &cylinder, &sampling).unwrap();
        assert_eq!(hit.hits, 64);
        assert!(hit.distance < 4.5);
    }

    #[test]
    fn test_range_limits_samples() {
        let cone = down_z(10.0).with_range(0.0, 4.0);
        assert!(intersect_cone(&cone, &wide_triangle(5.0), &ConeSampling::default()).is_none());
    }

    #[test]
    fn test_degenerate_axis() {
        let cone = Cone::new(Point3::origin(), Vec3::zeros(), 0.1);
        assert!(intersect_cone(&cone, &wide_triangle(5.0), &ConeSampling::default()).is_none());
    }

    #[test]
    fn test_deterministic() {
        let cone = Cone::new(Point3::new(0.3, -0.2, 0.0), Vec3::new(0.1, 0.2, 1.0), 0.2);
        let sphere = Sphere::new(Point3::new(0.5, 0.5, 6.0), 1.0);
        let sampling = ConeSampling::new(48, 0.1).unwrap();
        let a = intersect_cone(&cone, &sphere, &sampling);
        let b = intersect_cone(&cone, &sphere, &sampling);
        assert!(a.is_some());
        assert_eq!(a, b);
    }

    #[test]
    fn test_cone_along_negative_z() {
        let cone = Cone::new(Point3::origin(), -Vec3::z(), 10.0f32.to_radians());
        let hit = intersect_cone(&cone, &wide_triangle(-5.0), &ConeSampling::default()).unwrap();
        assert_eq!(hit.hits, 64);
    }
}
