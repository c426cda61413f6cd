//! Ray-box slab test.

use lumen_kernel_geom::Aabb3;
use lumen_kernel_math::{Vec3, SLAB_EPSILON};

use crate::Ray;

/// Clip the ray's range against the three slabs of `bbox`.
fn slab_range(ray: &Ray, inv_d: &Vec3, bbox: &Aabb3) -> (f32, f32) {
    let mut t0 = ray.tmin;
    let mut t1 = ray.tmax;
    for k in 0..3 {
        let near = (bbox.min[k] - ray.origin[k]) * inv_d[k];
        let far = (bbox.max[k] - ray.origin[k]) * inv_d[k];
        t0 = t0.max(near.min(far));
        t1 = t1.min(near.max(far));
    }
    (t0, t1)
}

/// Test a ray against a box with a precomputed inverse direction.
///
/// The exit bound is widened by [`SLAB_EPSILON`] so that rays grazing a
/// face are accepted.
#[inline]
pub fn intersect_bbox_inv(ray: &Ray, inv_d: &Vec3, bbox: &Aabb3) -> bool {
    let (t0, t1) = slab_range(ray, inv_d, bbox);
    t0 <= t1 * SLAB_EPSILON
}

/// Test a ray against a box.
#[inline]
pub fn intersect_bbox(ray: &Ray, bbox: &Aabb3) -> bool {
    intersect_bbox_inv(ray, &ray.inv_direction(), bbox)
}

/// Entry and exit parameters of a ray through a box, clipped to the ray's
/// range.
pub fn bbox_range(ray: &Ray, bbox: &Aabb3) -> Option<(f32, f32)> {
    let (t0, t1) = slab_range(ray, &ray.inv_direction(), bbox);
    (t0 <= t1 * SLAB_EPSILON).then_some((t0, t1))
}
