//! Primitive value types.
//!
//! Primitives are plain copies of caller-owned positional data; the kernel
//! never keeps them beyond a single query.

use lumen_kernel_math::{Point3, Vec2};
use serde::{Deserialize, Serialize};

use crate::utils;

/// A point splat, queried as a sphere proxy of the given radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Position.
    pub position: Point3,
    /// Radius of the splat.
    pub radius: f32,
}

impl Point {
    /// Create a point with a radius.
    pub fn new(position: Point3, radius: f32) -> Self {
        Self { position, radius }
    }
}

/// A segment with a radius at each end (a variable-radius capsule).
///
/// The radius at parameter `s` is `r0 * (1 - s) + r1 * s`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Start point.
    pub p0: Point3,
    /// End point.
    pub p1: Point3,
    /// Radius at `p0`.
    pub r0: f32,
    /// Radius at `p1`.
    pub r1: f32,
}

impl Line {
    /// Create a line with endpoint radii.
    pub fn new(p0: Point3, p1: Point3, r0: f32, r1: f32) -> Self {
        Self { p0, p1, r0, r1 }
    }

    /// Point at segment parameter `s`.
    pub fn point_at(&self, s: f32) -> Point3 {
        utils::line_point(&self.p0, &self.p1, s)
    }

    /// Radius at segment parameter `s`.
    pub fn radius_at(&self, s: f32) -> f32 {
        utils::interpolate_line(self.r0, self.r1, s)
    }
}

/// A capped cylinder between two endpoints.
///
/// Both caps and the lateral surface use `r0`. `r1` is only carried so
/// that hair and tube data can share one layout with [`Line`]; it does not
/// affect hits or bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cylinder {
    /// Center of the base cap.
    pub p0: Point3,
    /// Center of the top cap.
    pub p1: Point3,
    /// Radius at `p0`.
    pub r0: f32,
    /// Radius at `p1`.
    pub r1: f32,
}

impl Cylinder {
    /// Create a cylinder with endpoint radii.
    pub fn new(p0: Point3, p1: Point3, r0: f32, r1: f32) -> Self {
        Self { p0, p1, r0, r1 }
    }
}

/// A sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Center.
    pub center: Point3,
    /// Radius.
    pub radius: f32,
}

impl Sphere {
    /// Create a sphere.
    pub fn new(center: Point3, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// A triangle. Local coordinates `(u, v)` run along `p1 - p0` and `p2 - p0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// First vertex.
    pub p0: Point3,
    /// Second vertex.
    pub p1: Point3,
    /// Third vertex.
    pub p2: Point3,
}

impl Triangle {
    /// Create a triangle.
    pub fn new(p0: Point3, p1: Point3, p2: Point3) -> Self {
        Self { p0, p1, p2 }
    }

    /// Point at barycentric `uv`.
    pub fn point_at(&self, uv: &Vec2) -> Point3 {
        utils::triangle_point(&self.p0, &self.p1, &self.p2, uv)
    }

    /// Centroid of the three vertices.
    pub fn centroid(&self) -> Point3 {
        Point3::from((self.p0.coords + self.p1.coords + self.p2.coords) / 3.0)
    }
}

/// A quad, split along the `p1`-`p3` diagonal into `(p0, p1, p3)` and
/// `(p2, p3, p1)`.
///
/// When `p2 == p3` the quad is the triangle `(p0, p1, p3)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    /// First corner.
    pub p0: Point3,
    /// Second corner.
    pub p1: Point3,
    /// Third corner.
    pub p2: Point3,
    /// Fourth corner.
    pub p3: Point3,
}

impl Quad {
    /// Create a quad.
    pub fn new(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// True if the quad degenerates to a triangle.
    pub fn is_triangle(&self) -> bool {
        self.p2 == self.p3
    }

    /// Point at quad `uv`.
    pub fn point_at(&self, uv: &Vec2) -> Point3 {
        utils::quad_point(&self.p0, &self.p1, &self.p2, &self.p3, uv)
    }

    /// Average of the corners, counting a collapsed corner once.
    pub fn centroid(&self) -> Point3 {
        if self.is_triangle() {
            Triangle::new(self.p0, self.p1, self.p3).centroid()
        } else {
            Point3::from(
                (self.p0.coords + self.p1.coords + self.p2.coords + self.p3.coords) / 4.0,
            )
        }
    }
}
