//! Exact cone-box intersection.
//!
//! The box is reduced to its silhouette as seen from the apex, a polygon of
//! four or six corners selected by which side of each slab the apex is on.
//! The cone hits the box if it contains a silhouette corner, or if the
//! maximum of the angular measure along a silhouette edge lies inside the
//! cone, or if the cone axis passes through the silhouette.
//!
//! Corner `j` of the box has `+extent` on axis `k` when bit `k` of `j` is
//! set, matching [`Aabb3::corners`].

use lumen_kernel_geom::Aabb3;
use lumen_kernel_math::Vec3;
use lumen_kernel_raytrace::intersect::intersect_bbox;
use lumen_kernel_raytrace::Ray;

use crate::Cone;

/// Silhouette polygons of a box, indexed by apex region.
///
/// The region code is `cx + 3 cy + 9 cz` where `c` is 0 above the slab
/// (apex past `max`), 1 inside it and 2 below it. Corners are listed in
/// counterclockwise order as seen from the apex. Code 13 has the apex inside
/// the box and no silhouette.
pub static SILHOUETTES: [&[u8]; 27] = [
    &[1, 5, 4, 6, 2, 3],
    &[0, 2, 3, 1, 5, 4],
    &[0, 2, 3, 7, 5, 4],
    &[0, 4, 6, 2, 3, 1],
    &[0, 2, 3, 1],
    &[0, 2, 3, 7, 5, 1],
    &[0, 4, 6, 7, 3, 1],
    &[0, 2, 6, 7, 3, 1],
    &[0, 2, 6, 7, 5, 1],
    &[0, 1, 5, 4, 6, 2],
    &[0, 1, 5, 4],
    &[0, 1, 3, 7, 5, 4],
    &[0, 4, 6, 2],
    &[],
    &[1, 3, 7, 5],
    &[0, 4, 6, 7, 3, 2],
    &[2, 6, 7, 3],
    &[1, 3, 2, 6, 7, 5],
    &[0, 1, 5, 7, 6, 2],
    &[0, 1, 5, 7, 6, 4],
    &[0, 1, 3, 7, 6, 4],
    &[0, 4, 5, 7, 6, 2],
    &[4, 5, 7, 6],
    &[1, 3, 7, 6, 4, 5],
    &[0, 4, 5, 7, 3, 2],
    &[2, 6, 4, 5, 7, 3],
    &[1, 3, 2, 6, 4, 5],
];

/// Region code of the apex relative to a box with half extent `e` whose
/// center is at `offset` from the apex.
fn region_code(offset: &Vec3, e: &Vec3) -> usize {
    let mut code = 0;
    for (k, weight) in [1, 3, 9].into_iter().enumerate() {
        let digit = if offset[k] < -e[k] {
            2
        } else if offset[k] > e[k] {
            0
        } else {
            1
        };
        code += digit * weight;
    }
    code
}

/// Corner `j` of a box with half extent `e`, relative to the box center.
fn corner_offset(j: usize, e: &Vec3) -> Vec3 {
    Vec3::new(
        if j & 1 != 0 { e.x } else { -e.x },
        if j & 2 != 0 { e.y } else { -e.y },
        if j & 4 != 0 { e.z } else { -e.z },
    )
}

/// Data of the silhouette corner with the largest angular measure.
struct MaxCorner {
    index: usize,
    corner: usize,
    dot: f32,
    len_sqr: f32,
    offset: Vec3,
}

/// Test whether a cone intersects a box.
///
/// Ignores the cone's parametric interval; the cone extends to infinity
/// from its apex. A zero-length axis never intersects.
pub fn intersect_cone_bbox(cone: &Cone, bbox: &Aabb3) -> bool {
    let axis_len = cone.direction.norm();
    if axis_len == 0.0 || !axis_len.is_finite() {
        log::debug!("cone-box test with degenerate axis {:?}", cone.direction);
        return false;
    }
    let d = cone.direction / axis_len;

    let e = bbox.size() * 0.5;
    let center_offset = bbox.center() - cone.origin;
    let center_dot = d.dot(&center_offset);

    // box entirely behind the plane through the apex
    if center_dot + e.dot(&d.abs()) <= 0.0 {
        return false;
    }

    if intersect_bbox(&Ray::new(cone.origin, d), bbox) {
        return true;
    }

    let polygon = SILHOUETTES[region_code(&center_offset, &e)];
    if polygon.is_empty() {
        return true;
    }

    let cos_sqr = cone.spread.cos().powi(2);

    let mut best: Option<MaxCorner> = None;
    for (i, &j) in polygon.iter().enumerate() {
        let j = j as usize;
        let x = corner_offset(j, &e);
        let dot = d.dot(&x) + center_dot;
        if dot <= 0.0 {
            continue;
        }
        let offset = x + center_offset;
        let dot_sqr = dot * dot;
        let len_sqr = offset.norm_squared();
        if dot_sqr - cos_sqr * len_sqr > 0.0 {
            return true;
        }

        let better = match &best {
            None => true,
            Some(m) => dot_sqr * m.len_sqr > m.dot * m.dot * len_sqr,
        };
        if better {
            best = Some(MaxCorner {
                index: i,
                corner: j,
                dot,
                len_sqr,
                offset,
            });
        }
    }
    let Some(max) = best else {
        return false;
    };

    let n = polygon.len();
    let next = polygon[(max.index + 1) % n] as usize;
    let prev = polygon[(max.index + n - 1) % n] as usize;
    let edges = [
        (next as isize - max.corner as isize, 1.0),
        (max.corner as isize - prev as isize, -1.0),
    ];
    for (diff, orientation) in edges {
        if let Some(hit) = edge_maximum(&d, cos_sqr, &max, diff, orientation) {
            return hit;
        }
    }
    false
}

/// Gradient ascent along the silhouette edge leaving the best corner.
///
/// `diff` is the corner index difference along the edge, which encodes the
/// axis the edge runs along. Returns `None` when the angular measure does
/// not increase along the edge.
fn edge_maximum(d: &Vec3, cos_sqr: f32, max: &MaxCorner, diff: isize, orientation: f32) -> Option<bool> {
    let s = if diff > 0 { 1.0 } else { -1.0 };
    let k0 = (diff.unsigned_abs() >> 1).min(2);
    let p = &max.offset;

    let derivative = orientation * s * (d[k0] * max.len_sqr - max.dot * p[k0]);
    if derivative <= 0.0 {
        return None;
    }

    let k1 = (k0 + 1) % 3;
    let k2 = (k1 + 1) % 3;
    let numer = p[k1] * p[k1] + p[k2] * p[k2];
    let denom = d[k1] * p[k1] + d[k2] * p[k2];

    let mut m = Vec3::zeros();
    m[k0] = numer * d[k0];
    m[k1] = denom * p[k1];
    m[k2] = denom * p[k2];

    let dm = d.dot(&m);
    if dm * dm - cos_sqr * m.norm_squared() > 0.0 {
        return Some(true);
    }

    // which side of the edge's great arc the axis is on
    let det = s * (d[k1] * p[k2] - d[k2] * p[k1]);
    Some(det <= 0.0)
}
