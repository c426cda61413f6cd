#![warn(missing_docs)]

//! Point-primitive proximity queries for the lumen kernel.
//!
//! Closest-point queries on segments and triangles, and the overlap tests
//! that decide whether a query point lies within a distance bound of a
//! "fat" primitive whose radius varies over its surface. These are the leaf
//! predicates of nearest-neighbor and radius searches; the box overlap tests
//! prune hierarchy nodes.
//!
//! # Architecture
//!
//! - [`closest`] - Closest local coordinates on segments and triangles
//! - [`overlap`] - Distance-bounded overlap for primitives and boxes
//!
//! # Example
//!
//! ```
//! use lumen_kernel_geom::Line;
//! use lumen_kernel_math::Point3;
//! use lumen_kernel_proximity::overlap_line;
//!
//! let hair = Line::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0), 0.1, 0.1);
//! let hit = overlap_line(&Point3::new(1.0, 0.5, 0.0), 0.5, &hair).unwrap();
//! assert!((hit.uv.x - 0.5).abs() < 1e-6);
//! assert!((hit.distance - 0.5).abs() < 1e-6);
//! ```

pub mod closest;
pub mod overlap;

pub use closest::{closestuv_line, closestuv_triangle};
pub use overlap::{
    overlap_bbox, overlap_bbox_point, overlap_line, overlap_point, overlap_quad, overlap_triangle,
    PrimOverlap,
};
