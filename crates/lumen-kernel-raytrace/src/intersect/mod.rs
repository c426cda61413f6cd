//! Ray-primitive intersection algorithms.
//!
//! Each primitive has a dedicated intersector that returns the hit distance
//! and the local coordinates needed to interpolate vertex data. Every
//! intersector only reports hits with `t` in `[ray.tmin, ray.tmax]` and
//! returns `None` instead of dividing by a (numerically) zero quantity.

mod bbox;
mod cylinder;
mod line;
mod point;
mod quad;
mod sphere;
mod triangle;

pub use bbox::{bbox_range, intersect_bbox, intersect_bbox_inv};
pub use cylinder::{intersect_capped_cylinder, intersect_cylinder, intersect_infinite_cylinder, CylinderSide};
pub use line::intersect_line;
pub use point::intersect_point;
pub use quad::intersect_quad;
pub use sphere::intersect_sphere;
pub use triangle::intersect_triangle;

use lumen_kernel_geom::{Cylinder, Line, Point, Quad, Sphere, Triangle};
use lumen_kernel_math::Vec2;

use crate::Ray;

/// Result of a ray-primitive intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimIntersection {
    /// Local coordinates of the hit: barycentric for triangles and quads,
    /// `(s, 0)` along the segment for lines and cylinders.
    pub uv: Vec2,
    /// Ray parameter of the hit.
    pub distance: f32,
}

impl PrimIntersection {
    /// Create a new intersection record.
    pub fn new(uv: Vec2, distance: f32) -> Self {
        Self { uv, distance }
    }
}

/// A primitive that can be tested against a single ray.
pub trait RayIntersect {
    /// Closest accepted hit of `ray` with this primitive.
    fn intersect_ray(&self, ray: &Ray) -> Option<PrimIntersection>;
}

impl RayIntersect for Point {
    fn intersect_ray(&self, ray: &Ray) -> Option<PrimIntersection> {
        intersect_point(ray, self)
    }
}

impl RayIntersect for Line {
    fn intersect_ray(&self, ray: &Ray) -> Option<PrimIntersection> {
        intersect_line(ray, self)
    }
}

impl RayIntersect for Cylinder {
    fn intersect_ray(&self, ray: &Ray) -> Option<PrimIntersection> {
        intersect_cylinder(ray, self)
    }
}

impl RayIntersect for Sphere {
    fn intersect_ray(&self, ray: &Ray) -> Option<PrimIntersection> {
        intersect_sphere(ray, self)
    }
}

impl RayIntersect for Triangle {
    fn intersect_ray(&self, ray: &Ray) -> Option<PrimIntersection> {
        intersect_triangle(ray, self)
    }
}

impl RayIntersect for Quad {
    fn intersect_ray(&self, ray: &Ray) -> Option<PrimIntersection> {
        intersect_quad(ray, self)
    }
}
