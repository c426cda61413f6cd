//! Primitive bounds.
//!
//! Minimal enclosing boxes used by the hierarchy builder to create and refit
//! nodes.

use lumen_kernel_math::{Point3, Vec3};

use crate::primitives::{Cylinder, Line, Point, Quad, Sphere, Triangle};
use crate::Aabb3;

/// A primitive with a minimal enclosing box.
pub trait Bounded {
    /// Axis-aligned bounds of the primitive.
    fn bounds(&self) -> Aabb3;
}

fn splat(r: f32) -> Vec3 {
    Vec3::new(r, r, r)
}

/// Bounds of a single point.
pub fn point_bounds(p: &Point3) -> Aabb3 {
    Aabb3::new(*p, *p)
}

/// Bounds of a point with radius `r`.
///
/// Takes the componentwise min/max so a negative radius still yields a
/// valid box.
pub fn point_bounds_radius(p: &Point3, r: f32) -> Aabb3 {
    let a = p - splat(r);
    let b = p + splat(r);
    Aabb3::new(a.inf(&b), a.sup(&b))
}

/// Bounds of a segment.
pub fn line_bounds(p0: &Point3, p1: &Point3) -> Aabb3 {
    Aabb3::new(p0.inf(p1), p0.sup(p1))
}

/// Bounds of a segment with endpoint radii.
pub fn line_bounds_radius(p0: &Point3, p1: &Point3, r0: f32, r1: f32) -> Aabb3 {
    let min = (p0 - splat(r0)).inf(&(p1 - splat(r1)));
    let max = (p0 + splat(r0)).sup(&(p1 + splat(r1)));
    Aabb3::new(min, max)
}

/// Bounds of a triangle.
pub fn triangle_bounds(p0: &Point3, p1: &Point3, p2: &Point3) -> Aabb3 {
    Aabb3::new(p0.inf(&p1.inf(p2)), p0.sup(&p1.sup(p2)))
}

/// Bounds of a quad.
pub fn quad_bounds(p0: &Point3, p1: &Point3, p2: &Point3, p3: &Point3) -> Aabb3 {
    Aabb3::new(
        p0.inf(&p1.inf(&p2.inf(p3))),
        p0.sup(&p1.sup(&p2.sup(p3))),
    )
}

/// Bounds of a sphere.
pub fn sphere_bounds(p: &Point3, r: f32) -> Aabb3 {
    Aabb3::new(p - splat(r), p + splat(r))
}

/// Bounds of a variable-radius capsule.
pub fn capsule_bounds(p0: &Point3, p1: &Point3, r0: f32, r1: f32) -> Aabb3 {
    line_bounds_radius(p0, p1, r0, r1)
}

impl Bounded for Point {
    fn bounds(&self) -> Aabb3 {
        point_bounds_radius(&self.position, self.radius)
    }
}

impl Bounded for Line {
    fn bounds(&self) -> Aabb3 {
        capsule_bounds(&self.p0, &self.p1, self.r0, self.r1)
    }
}

impl Bounded for Cylinder {
    // both caps and the lateral surface use r0
    fn bounds(&self) -> Aabb3 {
        capsule_bounds(&self.p0, &self.p1, self.r0, self.r0)
    }
}

impl Bounded for Sphere {
    fn bounds(&self) -> Aabb3 {
        sphere_bounds(&self.center, self.radius)
    }
}

impl Bounded for Triangle {
    fn bounds(&self) -> Aabb3 {
        triangle_bounds(&self.p0, &self.p1, &self.p2)
    }
}

impl Bounded for Quad {
    fn bounds(&self) -> Aabb3 {
        quad_bounds(&self.p0, &self.p1, &self.p2, &self.p3)
    }
}

impl Bounded for Aabb3 {
    fn bounds(&self) -> Aabb3 {
        *self
    }
}
