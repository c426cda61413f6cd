//! Axis-aligned bounding box.

use std::ops::Index;

use lumen_kernel_math::{Frame3, Point3, Transform, Vec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in 3D.
///
/// A box is valid when `min <= max` on every axis. [`Aabb3::EMPTY`] has
/// `min = +inf` and `max = -inf`, so merging it with anything returns that
/// thing unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Aabb3 {
    /// The empty box, identity element of [`Aabb3::merge`].
    pub const EMPTY: Self = Self {
        min: Point3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
        max: Point3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
    };

    /// Create an AABB from min and max corners.
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Create an empty (inverted) AABB suitable for expansion.
    pub fn empty() -> Self {
        Self::EMPTY
    }

    /// The smallest box enclosing all `points`. Empty if there are none.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point3>,
    {
        points
            .into_iter()
            .fold(Self::EMPTY, |acc, p| acc.merge_point(&p))
    }

    /// True if this box has at least one axis with `min > max`.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Center of the box.
    pub fn center(&self) -> Point3 {
        Point3::from((self.min.coords + self.max.coords) * 0.5)
    }

    /// Extent of the box along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Smallest box containing this box and `p`.
    pub fn merge_point(&self, p: &Point3) -> Self {
        Self {
            min: self.min.inf(p),
            max: self.max.sup(p),
        }
    }

    /// Smallest box containing both boxes.
    pub fn merge(&self, other: &Aabb3) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Grow this box in place to include a point.
    pub fn expand_point(&mut self, p: &Point3) {
        *self = self.merge_point(p);
    }

    /// Grow this box in place to include another box.
    pub fn expand(&mut self, other: &Aabb3) {
        *self = self.merge(other);
    }

    /// Test if a point lies inside or on the boundary of the box.
    pub fn contains_point(&self, p: &Point3) -> bool {
        (0..3).all(|k| p[k] >= self.min[k] && p[k] <= self.max[k])
    }

    /// The eight corners, indexed so that bit 0 selects max x, bit 1 max y
    /// and bit 2 max z.
    pub fn corners(&self) -> [Point3; 8] {
        std::array::from_fn(|j| {
            Point3::new(
                if j & 1 != 0 { self.max.x } else { self.min.x },
                if j & 2 != 0 { self.max.y } else { self.min.y },
                if j & 4 != 0 { self.max.z } else { self.min.z },
            )
        })
    }
}

impl Default for Aabb3 {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// `bbox[0]` is the min corner, `bbox[1]` the max corner.
impl Index<usize> for Aabb3 {
    type Output = Point3;

    fn index(&self, i: usize) -> &Point3 {
        match i {
            0 => &self.min,
            1 => &self.max,
            _ => panic!("Aabb3 corner index out of range: {i}"),
        }
    }
}

/// Bounds of `bbox` after applying an affine transform.
pub fn transform_bbox(xform: &Transform, bbox: &Aabb3) -> Aabb3 {
    Aabb3::from_points(bbox.corners().iter().map(|c| xform.apply_point(c)))
}

/// Bounds of `bbox` after moving it into `frame`.
pub fn transform_bbox_frame(frame: &Frame3, bbox: &Aabb3) -> Aabb3 {
    Aabb3::from_points(bbox.corners().iter().map(|c| frame.transform_point(c)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn boxes() -> Vec<Aabb3> {
        vec![
            Aabb3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0)),
            Aabb3::new(Point3::new(-3.0, 0.5, 2.0), Point3::new(-1.0, 4.0, 2.5)),
            Aabb3::new(Point3::new(0.25, -7.0, -1.0), Point3::new(0.5, -6.0, 9.0)),
            Aabb3::EMPTY,
        ]
    }

    #[test]
    fn test_empty_is_merge_identity() {
        let p = Point3::new(1.0, -2.0, 3.5);
        let merged = Aabb3::EMPTY.merge_point(&p);
        assert_eq!(merged.min, p);
        assert_eq!(merged.max, p);

        for b in boxes() {
            assert_eq!(Aabb3::EMPTY.merge(&b), b);
            assert_eq!(b.merge(&Aabb3::EMPTY), b);
        }
    }

    #[test]
    fn test_from_points_empty() {
        let aabb = Aabb3::from_points(std::iter::empty());
        assert!(aabb.is_empty());
        assert_eq!(aabb, Aabb3::empty());
    }

    #[test]
    fn test_merge_contains_all_corners() {
        for a in boxes() {
            for b in boxes() {
                let m = a.merge(&b);
                for src in [a, b] {
                    if src.is_empty() {
                        continue;
                    }
                    for c in src.corners() {
                        assert!(m.contains_point(&c), "{m:?} should contain {c:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_merge_commutative_and_associative() {
        let all = boxes();
        for a in &all {
            for b in &all {
                assert_eq!(a.merge(b), b.merge(a));
                for c in &all {
                    assert_eq!(a.merge(b).merge(c), a.merge(&b.merge(c)));
                }
            }
        }
    }

    #[test]
    fn test_expand_in_place() {
        let mut aabb = Aabb3::empty();
        aabb.expand_point(&Point3::new(1.0, 2.0, 3.0));
        aabb.expand_point(&Point3::new(-1.0, 5.0, 0.0));
        aabb.expand(&Aabb3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(0.5, 0.5, 7.0)));
        assert_eq!(aabb.min, Point3::new(-1.0, 0.0, 0.0));
        assert_eq!(aabb.max, Point3::new(1.0, 5.0, 7.0));
    }

    #[test]
    fn test_center_size_and_index() {
        let aabb = Aabb3::new(Point3::new(-1.0, 0.0, 2.0), Point3::new(3.0, 2.0, 4.0));
        assert_eq!(aabb.center(), Point3::new(1.0, 1.0, 3.0));
        assert_eq!(aabb.size(), Vec3::new(4.0, 2.0, 2.0));
        assert_eq!(aabb[0], aabb.min);
        assert_eq!(aabb[1], aabb.max);
    }

    #[test]
    fn test_corner_bits() {
        let aabb = Aabb3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 2.0, 3.0));
        let c = aabb.corners();
        assert_eq!(c[0], Point3::new(0.0, 0.0, 0.0));
        assert_eq!(c[1], Point3::new(1.0, 0.0, 0.0));
        assert_eq!(c[2], Point3::new(0.0, 2.0, 0.0));
        assert_eq!(c[4], Point3::new(0.0, 0.0, 3.0));
        assert_eq!(c[7], Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_transform_bbox_rotation() {
        let aabb = Aabb3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 1.0, 1.0));
        let rot = Transform::rotation_z(std::f32::consts::FRAC_PI_2);
        let out = transform_bbox(&rot, &aabb);
        assert_relative_eq!(out.min, Point3::new(-1.0, 0.0, 0.0), epsilon = 1e-5);
        assert_relative_eq!(out.max, Point3::new(0.0, 2.0, 1.0), epsilon = 1e-5);
    }

    #[test]
    fn test_transform_bbox_frame_translation() {
        let aabb = Aabb3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        let mut frame = Frame3::identity();
        frame.origin = Point3::new(10.0, 0.0, -1.0);
        let out = transform_bbox_frame(&frame, &aabb);
        assert_eq!(out.min, Point3::new(10.0, 0.0, -1.0));
        assert_eq!(out.max, Point3::new(11.0, 1.0, 0.0));
    }
}
