//! Geometry utilities and interpolation over primitives.
//!
//! Quads use the same split as the intersection code: `uv` with
//! `u + v <= 1` lies in triangle `(p0, p1, p3)`, the rest in `(p2, p3, p1)`
//! with flipped coordinates.

use std::f32::consts::PI;
use std::ops::{Add, Mul};

use lumen_kernel_math::{Point3, Vec2, Vec3};

/// Unit tangent of a segment.
pub fn line_tangent(p0: &Point3, p1: &Point3) -> Vec3 {
    (p1 - p0).normalize()
}

/// Length of a segment.
pub fn line_length(p0: &Point3, p1: &Point3) -> f32 {
    (p1 - p0).norm()
}

/// Unit geometric normal of a triangle.
pub fn triangle_normal(p0: &Point3, p1: &Point3, p2: &Point3) -> Vec3 {
    (p1 - p0).cross(&(p2 - p0)).normalize()
}

/// Area of a triangle.
pub fn triangle_area(p0: &Point3, p1: &Point3, p2: &Point3) -> f32 {
    (p1 - p0).cross(&(p2 - p0)).norm() / 2.0
}

/// Unit geometric normal of a quad, averaged over its two triangles.
pub fn quad_normal(p0: &Point3, p1: &Point3, p2: &Point3, p3: &Point3) -> Vec3 {
    (triangle_normal(p0, p1, p3) + triangle_normal(p2, p3, p1)).normalize()
}

/// Area of a quad.
pub fn quad_area(p0: &Point3, p1: &Point3, p2: &Point3, p3: &Point3) -> f32 {
    triangle_area(p0, p1, p3) + triangle_area(p2, p3, p1)
}

/// Linear interpolation from `p0` to `p1`.
pub fn interpolate_line<T>(p0: T, p1: T, u: f32) -> T
where
    T: Mul<f32, Output = T> + Add<Output = T>,
{
    p0 * (1.0 - u) + p1 * u
}

/// Barycentric interpolation with weights `(1 - u - v, u, v)`.
pub fn interpolate_triangle<T>(p0: T, p1: T, p2: T, uv: &Vec2) -> T
where
    T: Mul<f32, Output = T> + Add<Output = T>,
{
    p0 * (1.0 - uv.x - uv.y) + p1 * uv.x + p2 * uv.y
}

/// Interpolation over a quad split into two triangles.
pub fn interpolate_quad<T>(p0: T, p1: T, p2: T, p3: T, uv: &Vec2) -> T
where
    T: Mul<f32, Output = T> + Add<Output = T>,
{
    if uv.x + uv.y <= 1.0 {
        interpolate_triangle(p0, p1, p3, uv)
    } else {
        interpolate_triangle(p2, p3, p1, &flip_uv(uv))
    }
}

/// Cubic Bezier segment at parameter `u`.
pub fn interpolate_bezier<T>(p0: T, p1: T, p2: T, p3: T, u: f32) -> T
where
    T: Mul<f32, Output = T> + Add<Output = T>,
{
    let w = 1.0 - u;
    p0 * (w * w * w) + p1 * (3.0 * u * w * w) + p2 * (3.0 * u * u * w) + p3 * (u * u * u)
}

/// Derivative of a cubic Bezier segment at parameter `u`.
///
/// Takes the control polygon's difference vectors so that it works for
/// point types without an additive structure.
pub fn interpolate_bezier_derivative(p0: &Point3, p1: &Point3, p2: &Point3, p3: &Point3, u: f32) -> Vec3 {
    let w = 1.0 - u;
    (p1 - p0) * (3.0 * w * w) + (p2 - p1) * (6.0 * u * w) + (p3 - p2) * (3.0 * u * u)
}

/// `(1 - u, 1 - v)`, the coordinate change between the two quad halves.
#[inline]
pub fn flip_uv(uv: &Vec2) -> Vec2 {
    Vec2::new(1.0 - uv.x, 1.0 - uv.y)
}

/// Point on a segment at parameter `u`.
pub fn line_point(p0: &Point3, p1: &Point3, u: f32) -> Point3 {
    Point3::from(interpolate_line(p0.coords, p1.coords, u))
}

/// Interpolated unit tangent along a segment with per-vertex tangents.
pub fn line_tangent_at(t0: &Vec3, t1: &Vec3, u: f32) -> Vec3 {
    interpolate_line(*t0, *t1, u).normalize()
}

/// Point on a triangle at barycentric `uv`.
pub fn triangle_point(p0: &Point3, p1: &Point3, p2: &Point3, uv: &Vec2) -> Point3 {
    Point3::from(interpolate_triangle(p0.coords, p1.coords, p2.coords, uv))
}

/// Interpolated unit normal over a triangle with per-vertex normals.
pub fn triangle_normal_at(n0: &Vec3, n1: &Vec3, n2: &Vec3, uv: &Vec2) -> Vec3 {
    interpolate_triangle(*n0, *n1, *n2, uv).normalize()
}

/// Point on a quad at `uv`.
pub fn quad_point(p0: &Point3, p1: &Point3, p2: &Point3, p3: &Point3, uv: &Vec2) -> Point3 {
    Point3::from(interpolate_quad(p0.coords, p1.coords, p2.coords, p3.coords, uv))
}

/// Interpolated unit normal over a quad with per-vertex normals.
pub fn quad_normal_at(n0: &Vec3, n1: &Vec3, n2: &Vec3, n3: &Vec3, uv: &Vec2) -> Vec3 {
    interpolate_quad(*n0, *n1, *n2, *n3, uv).normalize()
}

/// Point on a sphere at `uv`, with `u` the longitude in turns and `v` the
/// colatitude in half turns.
pub fn sphere_point(center: &Point3, radius: f32, uv: &Vec2) -> Point3 {
    center + sphere_normal(uv) * radius
}

/// Unit normal of a sphere at `uv`.
pub fn sphere_normal(uv: &Vec2) -> Vec3 {
    let (sin_phi, cos_phi) = (uv.x * 2.0 * PI).sin_cos();
    let (sin_theta, cos_theta) = (uv.y * PI).sin_cos();
    Vec3::new(cos_phi * sin_theta, sin_phi * sin_theta, cos_theta)
}

/// Tangent and bitangent of a triangle aligned with its texture coordinates.
///
/// Falls back to the world x and y axes when the texture mapping is
/// degenerate.
pub fn triangle_tangents_fromuv(
    p0: &Point3,
    p1: &Point3,
    p2: &Point3,
    uv0: &Vec2,
    uv1: &Vec2,
    uv2: &Vec2,
) -> (Vec3, Vec3) {
    let p = p1 - p0;
    let q = p2 - p0;
    let s = Vec2::new(uv1.x - uv0.x, uv2.x - uv0.x);
    let t = Vec2::new(uv1.y - uv0.y, uv2.y - uv0.y);
    let div = s.x * t.y - s.y * t.x;

    if div == 0.0 {
        return (Vec3::x(), Vec3::y());
    }
    let tu = (p * t.y - q * t.x) / div;
    let tv = (q * s.x - p * s.y) / div;
    (tu, tv)
}

/// Tangent and bitangent of the quad half that contains `current_uv`.
#[allow(clippy::too_many_arguments)]
pub fn quad_tangents_fromuv(
    p0: &Point3,
    p1: &Point3,
    p2: &Point3,
    p3: &Point3,
    uv0: &Vec2,
    uv1: &Vec2,
    uv2: &Vec2,
    uv3: &Vec2,
    current_uv: &Vec2,
) -> (Vec3, Vec3) {
    if current_uv.x + current_uv.y <= 1.0 {
        triangle_tangents_fromuv(p0, p1, p3, uv0, uv1, uv3)
    } else {
        triangle_tangents_fromuv(p2, p3, p1, uv2, uv3, uv1)
    }
}
