//! Ray-sphere intersection (quadratic equation).

use std::f32::consts::PI;

use lumen_kernel_geom::Sphere;
use lumen_kernel_math::{is_near_zero, Point3, Vec2};

use super::PrimIntersection;
use crate::Ray;

/// Intersect a ray with a sphere.
///
/// Reports the nearer root that lies in the ray's range, so a ray starting
/// inside the sphere hits the far side. The uv follows
/// [`lumen_kernel_geom::utils::sphere_point`].
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> Option<PrimIntersection> {
    let oc = ray.origin - sphere.center;
    let d = &ray.direction;

    // |oc + t*d|^2 = r^2, with half b
    let a = d.dot(d);
    let b = oc.dot(d);
    let c = oc.dot(&oc) - sphere.radius * sphere.radius;
    if a == 0.0 {
        return None;
    }

    let discriminant = b * b - a * c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_disc = discriminant.sqrt();
    let t = [(-b - sqrt_disc) / a, (-b + sqrt_disc) / a]
        .into_iter()
        .find(|t| ray.contains(*t))?;

    let uv = sphere_uv(sphere, &ray.at(t));
    Some(PrimIntersection::new(uv, t))
}

/// Spherical coordinates of a point on the sphere: `u` is the longitude in
/// turns in `[0, 1)`, `v` the colatitude in half turns.
fn sphere_uv(sphere: &Sphere, point: &Point3) -> Vec2 {
    let p = point - sphere.center;
    let len = p.norm();
    if is_near_zero(len, sphere.radius.abs()) {
        return Vec2::zeros();
    }
    let p = p / len;
    let mut u = p.y.atan2(p.x) / (2.0 * PI);
    if u < 0.0 {
        u += 1.0;
    }
    let v = p.z.clamp(-1.0, 1.0).acos() / PI;
    Vec2::new(u, v)
}
