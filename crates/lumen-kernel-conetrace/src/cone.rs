//! Cone representation.

use lumen_kernel_math::{Point3, Vec3, RAY_EPSILON};
use lumen_kernel_raytrace::Ray;
use serde::{Deserialize, Serialize};

/// A cone of rays: apex, axis direction and half-angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cone {
    /// Apex of the cone.
    pub origin: Point3,
    /// Axis direction. Need not be unit length.
    pub direction: Vec3,
    /// Half-angle in radians.
    pub spread: f32,
    /// Smallest accepted parameter along each cone ray.
    pub tmin: f32,
    /// Largest accepted parameter along each cone ray.
    pub tmax: f32,
}

impl Cone {
    /// Create a cone over `[RAY_EPSILON, +inf]`.
    pub fn new(origin: Point3, direction: Vec3, spread: f32) -> Self {
        Self {
            origin,
            direction,
            spread,
            tmin: RAY_EPSILON,
            tmax: f32::INFINITY,
        }
    }

    /// Copy of this cone with an explicit parametric interval.
    pub fn with_range(&self, tmin: f32, tmax: f32) -> Self {
        Self { tmin, tmax, ..*self }
    }

    /// The central ray of the cone.
    pub fn axis_ray(&self) -> Ray {
        Ray::with_range(self.origin, self.direction, self.tmin, self.tmax)
    }
}
