//! Ray representation.

use lumen_kernel_math::{Frame3, Point3, Transform, Vec3, RAY_EPSILON};
use serde::{Deserialize, Serialize};

/// A ray with origin, direction and accepted parameter interval.
///
/// The direction does not have to be unit length; hit distances are then in
/// units of `|direction|`. Hits are only reported for `t` in `[tmin, tmax]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Direction of the ray.
    pub direction: Vec3,
    /// Smallest accepted parameter.
    pub tmin: f32,
    /// Largest accepted parameter.
    pub tmax: f32,
}

impl Ray {
    /// Create a ray over `[RAY_EPSILON, +inf]`.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self::with_range(origin, direction, RAY_EPSILON, f32::INFINITY)
    }

    /// Create a ray with an explicit parameter interval.
    pub fn with_range(origin: Point3, direction: Vec3, tmin: f32, tmax: f32) -> Self {
        Self {
            origin,
            direction,
            tmin,
            tmax,
        }
    }

    /// Copy of this ray with the upper bound narrowed to `tmax`.
    ///
    /// Traversal uses this after each accepted hit so later candidates can
    /// only win if they are closer.
    #[inline]
    pub fn with_tmax(&self, tmax: f32) -> Self {
        Self { tmax, ..*self }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f32) -> Point3 {
        self.origin + self.direction * t
    }

    /// Componentwise reciprocal of the direction, for repeated slab tests.
    ///
    /// Zero components map to signed infinities.
    #[inline]
    pub fn inv_direction(&self) -> Vec3 {
        Vec3::new(
            1.0 / self.direction.x,
            1.0 / self.direction.y,
            1.0 / self.direction.z,
        )
    }

    /// True if `t` lies in the accepted interval.
    #[inline]
    pub fn contains(&self, t: f32) -> bool {
        t >= self.tmin && t <= self.tmax
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self::new(Point3::origin(), Vec3::z())
    }
}

/// Apply an affine transform to a ray, keeping its interval.
pub fn transform_ray(xform: &Transform, ray: &Ray) -> Ray {
    Ray::with_range(
        xform.apply_point(&ray.origin),
        xform.apply_vec(&ray.direction),
        ray.tmin,
        ray.tmax,
    )
}

/// Move a ray from frame-local to world coordinates, keeping its interval.
pub fn transform_ray_frame(frame: &Frame3, ray: &Ray) -> Ray {
    Ray::with_range(
        frame.transform_point(&ray.origin),
        frame.transform_vector(&ray.direction),
        ray.tmin,
        ray.tmax,
    )
}
