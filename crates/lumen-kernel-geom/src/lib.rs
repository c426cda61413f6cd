#![warn(missing_docs)]

//! Geometric value types for the lumen kernel.
//!
//! Everything the query crates operate on lives here: the axis-aligned box
//! used by hierarchy nodes, the caller-owned primitives tested at the leaves,
//! their bounds, and the interpolation helpers that turn the local `uv`
//! coordinates returned by a query back into positions and normals.
//!
//! # Architecture
//!
//! - [`Aabb3`] - Axis-aligned box with merge/expand and transform support
//! - [`primitives`] - Point, line, cylinder, sphere, triangle and quad values
//! - [`bounds`] - Minimal enclosing boxes of the primitives
//! - [`utils`] - Normals, areas and interpolation over primitives

mod aabb;
pub mod bounds;
pub mod primitives;
pub mod utils;

pub use aabb::{transform_bbox, transform_bbox_frame, Aabb3};
pub use bounds::Bounded;
pub use primitives::{Cylinder, Line, Point, Quad, Sphere, Triangle};
