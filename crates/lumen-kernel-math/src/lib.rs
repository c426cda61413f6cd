#![warn(missing_docs)]

//! Math types for the lumen geometric query kernel.
//!
//! Thin wrappers around nalgebra providing the single-precision points,
//! vectors, rigid frames and affine transforms used by the ray, cone and
//! proximity queries, together with the kernel's tunable constants.

use nalgebra::{Matrix4, Vector2, Vector3, Vector4};
use serde::{Deserialize, Serialize};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f32>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f32>;

/// A vector in 2D space. Used for local surface coordinates.
pub type Vec2 = Vector2<f32>;

/// Default lower bound of a ray's parametric interval.
///
/// Keeps secondary rays from re-hitting the surface they start on.
pub const RAY_EPSILON: f32 = 1e-4;

/// Factor applied to the slab-test exit parameter.
///
/// Rounding in the per-axis divisions can make a ray that grazes a box corner
/// miss by one ulp; widening the exit bound by two ulps removes those false
/// negatives. The double precision equivalent is `1.0000000000000004`.
pub const SLAB_EPSILON: f32 = 1.000_000_24;

/// Relative threshold below which a determinant, length or denominator is
/// treated as zero.
pub const DEGENERATE_EPSILON: f32 = 1e-7;

/// Returns true if `value` is negligible compared to `scale`.
///
/// `scale` should be the product of the magnitudes that `value` was built
/// from, so the test is independent of the units of the scene.
#[inline]
pub fn is_near_zero(value: f32, scale: f32) -> bool {
    value.abs() <= DEGENERATE_EPSILON * scale
}

/// A rigid coordinate frame: three orthonormal axes and an origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame3 {
    /// X axis.
    pub x: Vec3,
    /// Y axis.
    pub y: Vec3,
    /// Z axis.
    pub z: Vec3,
    /// Origin.
    pub origin: Point3,
}

impl Frame3 {
    /// The world frame.
    pub fn identity() -> Self {
        Self {
            x: Vec3::x(),
            y: Vec3::y(),
            z: Vec3::z(),
            origin: Point3::origin(),
        }
    }

    /// Create a frame from explicit axes and origin.
    ///
    /// The axes are expected to be orthonormal.
    pub fn new(x: Vec3, y: Vec3, z: Vec3, origin: Point3) -> Self {
        Self { x, y, z, origin }
    }

    /// Build an orthonormal frame whose z axis is `z` (normalized).
    ///
    /// Uses the branchless construction of Duff et al., which is continuous
    /// everywhere except across the `z.z = 0` plane and never divides by a
    /// value close to zero. Returns `None` for a zero-length `z`.
    pub fn from_z(origin: Point3, z: Vec3) -> Option<Self> {
        let len = z.norm();
        if len == 0.0 || !len.is_finite() {
            return None;
        }
        let n = z / len;
        let sign = 1.0f32.copysign(n.z);
        let a = -1.0 / (sign + n.z);
        let b = n.x * n.y * a;
        let x = Vec3::new(1.0 + sign * n.x * n.x * a, sign * b, -sign * n.x);
        let y = Vec3::new(b, sign + n.y * n.y * a, -n.y);
        Some(Self { x, y, z: n, origin })
    }

    /// Map a point from frame-local to world coordinates.
    #[inline]
    pub fn transform_point(&self, p: &Point3) -> Point3 {
        self.origin + self.x * p.x + self.y * p.y + self.z * p.z
    }

    /// Map a vector from frame-local to world coordinates.
    #[inline]
    pub fn transform_vector(&self, v: &Vec3) -> Vec3 {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    /// Map a direction from frame-local to world coordinates and normalize it.
    #[inline]
    pub fn transform_direction(&self, v: &Vec3) -> Vec3 {
        self.transform_vector(v).normalize()
    }

    /// Inverse of this rigid frame.
    pub fn inverse(&self) -> Self {
        let x = Vec3::new(self.x.x, self.y.x, self.z.x);
        let y = Vec3::new(self.x.y, self.y.y, self.z.y);
        let z = Vec3::new(self.x.z, self.y.z, self.z.z);
        let o = self.origin.coords;
        let origin = Point3::new(-x.dot(&o), -y.dot(&o), -z.dot(&o));
        Self { x, y, z, origin }
    }
}

impl Default for Frame3 {
    fn default() -> Self {
        Self::identity()
    }
}

/// A 4x4 affine transformation matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f32>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `(dx, dy, dz)`.
    pub fn translation(dx: f32, dy: f32, dz: f32) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = dx;
        m[(1, 3)] = dy;
        m[(2, 3)] = dz;
        Self { matrix: m }
    }

    /// Non-uniform scale by `(sx, sy, sz)`.
    pub fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 0)] = sx;
        m[(1, 1)] = sy;
        m[(2, 2)] = sz;
        Self { matrix: m }
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        Self { matrix: m }
    }

    /// Rotation about an arbitrary axis through the origin by `angle` radians.
    ///
    /// Uses Rodrigues' rotation formula. The axis is normalized first.
    pub fn rotation_about_axis(axis: &Vec3, angle: f32) -> Self {
        let axis = axis.normalize();
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let (x, y, z) = (axis.x, axis.y, axis.z);
        let mut m = Matrix4::identity();
        m[(0, 0)] = t * x * x + c;
        m[(0, 1)] = t * x * y - s * z;
        m[(0, 2)] = t * x * z + s * y;
        m[(1, 0)] = t * x * y + s * z;
        m[(1, 1)] = t * y * y + c;
        m[(1, 2)] = t * y * z - s * x;
        m[(2, 0)] = t * x * z - s * y;
        m[(2, 1)] = t * y * z + s * x;
        m[(2, 2)] = t * z * z + c;
        Self { matrix: m }
    }

    /// Compose as `self * other`: `other` is applied first.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a vector (ignores translation, applies rotation/scale).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        let r = self.matrix * Vector4::new(v.x, v.y, v.z, 0.0);
        Vec3::new(r.x, r.y, r.z)
    }

    /// Transform a direction and normalize the result.
    pub fn apply_direction(&self, v: &Vec3) -> Vec3 {
        self.apply_vec(v).normalize()
    }

    /// Inverse of this transform, if it exists.
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
