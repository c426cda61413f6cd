#![warn(missing_docs)]

//! Geometric query kernel facade for the lumen renderer.
//!
//! Re-exports the kernel crates and provides [`Primitive`], a tagged union
//! over the primitive types, so that a leaf of an acceleration structure can
//! hold mixed geometry and still run every query uniformly.
//!
//! # Example
//!
//! ```
//! use lumen_kernel::{nearest_hit, Primitive};
//! use lumen_kernel_geom::{Sphere, Triangle};
//! use lumen_kernel_math::{Point3, Vec3};
//! use lumen_kernel_raytrace::Ray;
//!
//! let prims = [
//!     Primitive::Sphere(Sphere::new(Point3::new(0.0, 0.0, 10.0), 1.0)),
//!     Primitive::Triangle(Triangle::new(
//!         Point3::new(-1.0, -1.0, 5.0),
//!         Point3::new(1.0, -1.0, 5.0),
//!         Point3::new(0.0, 1.0, 5.0),
//!     )),
//! ];
//! let ray = Ray::new(Point3::origin(), Vec3::z());
//! let (index, hit) = nearest_hit(&ray, &prims).unwrap();
//! assert_eq!(index, 1);
//! assert!((hit.distance - 5.0).abs() < 1e-5);
//! ```

pub use lumen_kernel_conetrace;
pub use lumen_kernel_geom;
pub use lumen_kernel_math;
pub use lumen_kernel_proximity;
pub use lumen_kernel_raytrace;

use lumen_kernel_conetrace::ConeTarget;
use lumen_kernel_geom::{Aabb3, Bounded, Cylinder, Line, Point, Quad, Sphere, Triangle};
use lumen_kernel_math::Point3;
use lumen_kernel_raytrace::{PrimIntersection, Ray, RayIntersect};
use serde::{Deserialize, Serialize};

/// Any primitive the kernel can query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// Point splat.
    Point(Point),
    /// Variable-radius capsule.
    Line(Line),
    /// Capped cylinder.
    Cylinder(Cylinder),
    /// Sphere.
    Sphere(Sphere),
    /// Triangle.
    Triangle(Triangle),
    /// Quad.
    Quad(Quad),
}

impl RayIntersect for Primitive {
    fn intersect_ray(&self, ray: &Ray) -> Option<PrimIntersection> {
        match self {
            Primitive::Point(p) => p.intersect_ray(ray),
            Primitive::Line(p) => p.intersect_ray(ray),
            Primitive::Cylinder(p) => p.intersect_ray(ray),
            Primitive::Sphere(p) => p.intersect_ray(ray),
            Primitive::Triangle(p) => p.intersect_ray(ray),
            Primitive::Quad(p) => p.intersect_ray(ray),
        }
    }
}

impl Bounded for Primitive {
    fn bounds(&self) -> Aabb3 {
        match self {
            Primitive::Point(p) => p.bounds(),
            Primitive::Line(p) => p.bounds(),
            Primitive::Cylinder(p) => p.bounds(),
            Primitive::Sphere(p) => p.bounds(),
            Primitive::Triangle(p) => p.bounds(),
            Primitive::Quad(p) => p.bounds(),
        }
    }
}

impl ConeTarget for Primitive {
    fn anchor(&self) -> Point3 {
        match self {
            Primitive::Point(p) => p.anchor(),
            Primitive::Line(p) => p.anchor(),
            Primitive::Cylinder(p) => p.anchor(),
            Primitive::Sphere(p) => p.anchor(),
            Primitive::Triangle(p) => p.anchor(),
            Primitive::Quad(p) => p.anchor(),
        }
    }
}

/// Closest hit of a ray over a set of primitives.
///
/// Each accepted hit narrows the ray's `tmax`, so later primitives only win
/// when they are at least as close. Returns the index of the winning primitive
/// and its hit.
pub fn nearest_hit<P: RayIntersect>(ray: &Ray, prims: &[P]) -> Option<(usize, PrimIntersection)> {
    let mut ray = *ray;
    let mut best = None;
    for (i, prim) in prims.iter().enumerate() {
        if let Some(hit) = prim.intersect_ray(&ray) {
            ray = ray.with_tmax(hit.distance);
            best = Some((i, hit));
        }
    }
    best
}

/// Bounds of a set of primitives. Empty for an empty slice.
pub fn bounds_of<P: Bounded>(prims: &[P]) -> Aabb3 {
    prims
        .iter()
        .fold(Aabb3::empty(), |acc, prim| acc.merge(&prim.bounds()))
}
