#![warn(missing_docs)]

//! Cone queries for the lumen kernel.
//!
//! A cone is a ray with an angular spread. Two tests are provided: an
//! approximate cone-primitive test that fires a fixed set of rays through a
//! disk across the cone, and an exact closed-form cone-box test used to
//! accept or prune hierarchy nodes.
//!
//! # Architecture
//!
//! - [`Cone`] - Apex, axis, half-angle and parametric interval
//! - [`config`] - Sample count and acceptance threshold for sampled tests
//! - [`sampling`] - Golden-angle spiral over the unit disk
//! - [`sampled`] - Cone-primitive tests by disk sampling
//! - [`bbox`] - Exact cone-box test with silhouette lookup
//!
//! # Example
//!
//! ```
//! use lumen_kernel_conetrace::{intersect_cone_bbox, Cone};
//! use lumen_kernel_geom::Aabb3;
//! use lumen_kernel_math::{Point3, Vec3};
//!
//! let cone = Cone::new(Point3::origin(), Vec3::z(), 0.2);
//! let bbox = Aabb3::new(Point3::new(-1.0, -1.0, 4.0), Point3::new(1.0, 1.0, 6.0));
//! assert!(intersect_cone_bbox(&cone, &bbox));
//! ```

pub mod bbox;
mod cone;
pub mod config;
pub mod sampled;
pub mod sampling;

pub use bbox::intersect_cone_bbox;
pub use cone::Cone;
pub use config::{ConeConfigError, ConeSampling};
pub use sampled::{intersect_cone, ConeHit, ConeTarget};
