#![warn(missing_docs)]

//! Exact ray-primitive intersection for the lumen kernel.
//!
//! These are the leaf tests of hierarchy traversal: closed-form hit tests
//! against points, capsules, cylinders, spheres, triangles and quads, and the
//! slab test used to accept or prune hierarchy nodes.
//!
//! # Architecture
//!
//! - [`Ray`] - Origin, direction and the accepted parametric interval
//! - [`camera`] - Rays from normalized image coordinates
//! - [`intersect`] - One intersector per primitive, plus the box slab test
//!
//! # Example
//!
//! ```
//! use lumen_kernel_geom::Triangle;
//! use lumen_kernel_math::{Point3, Vec3};
//! use lumen_kernel_raytrace::{intersect::intersect_triangle, Ray};
//!
//! let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
//! let tri = Triangle::new(
//!     Point3::new(-1.0, -1.0, 0.0),
//!     Point3::new(1.0, -1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! );
//! let hit = intersect_triangle(&ray, &tri).unwrap();
//! assert!((hit.distance - 5.0).abs() < 1e-5);
//! ```

mod ray;
pub mod camera;
pub mod intersect;

pub use intersect::{PrimIntersection, RayIntersect};
pub use ray::{transform_ray, transform_ray_frame, Ray};
