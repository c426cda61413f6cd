//! Closest points on segments and triangles.

use lumen_kernel_math::{is_near_zero, Point3, Vec2};

/// Parameter of the point on segment `p0`-`p1` closest to `pos`.
///
/// The projection is clamped to `[0, 1]`. A zero-length segment returns 0.
pub fn closestuv_line(pos: &Point3, p0: &Point3, p1: &Point3) -> f32 {
    let ab = p1 - p0;
    let len_sqr = ab.norm_squared();
    if is_near_zero(len_sqr, p0.coords.norm_squared().max(p1.coords.norm_squared())) {
        return 0.0;
    }
    ((pos - p0).dot(&ab) / len_sqr).clamp(0.0, 1.0)
}

/// Barycentric coordinates of the point on triangle `p0 p1 p2` closest to
/// `pos`.
///
/// Classifies `pos` into the vertex, edge or face Voronoi region of the
/// triangle and solves only the projection that region needs. The result
/// evaluates to the closest point as `p0 + u (p1 - p0) + v (p2 - p0)`.
/// Zero-area triangles are treated as their three edges.
///
/// The face-region weights are the signed areas `n . ((a - pos) x (b - pos))`
/// of the sub-triangles, which stay accurate on slivers where the
/// dot-product form cancels.
pub fn closestuv_triangle(pos: &Point3, p0: &Point3, p1: &Point3, p2: &Point3) -> Vec2 {
    let ab = p1 - p0;
    let ac = p2 - p0;
    let n = ab.cross(&ac);
    if is_near_zero(n.norm(), ab.norm() * ac.norm()) {
        return closestuv_degenerate_triangle(pos, p0, p1, p2);
    }

    let ap = pos - p0;
    let d1 = ab.dot(&ap);
    let d2 = ac.dot(&ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        return Vec2::new(0.0, 0.0);
    }

    let bp = pos - p1;
    let d3 = ab.dot(&bp);
    let d4 = ac.dot(&bp);
    if d3 >= 0.0 && d4 <= d3 {
        return Vec2::new(1.0, 0.0);
    }

    let (pa, pb) = (p0 - pos, p1 - pos);
    let pc = p2 - pos;
    let vc = n.dot(&pa.cross(&pb));
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        return Vec2::new(d1 / (d1 - d3), 0.0);
    }

    let cp = pos - p2;
    let d5 = ab.dot(&cp);
    let d6 = ac.dot(&cp);
    if d6 >= 0.0 && d5 <= d6 {
        return Vec2::new(0.0, 1.0);
    }

    let vb = n.dot(&pc.cross(&pa));
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        return Vec2::new(0.0, d2 / (d2 - d6));
    }

    let va = n.dot(&pb.cross(&pc));
    if va <= 0.0 && d4 - d3 >= 0.0 && d5 - d6 >= 0.0 {
        let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return Vec2::new(1.0 - w, w);
    }

    let sum = va + vb + vc;
    if !(sum.is_finite() && sum > 0.0) {
        return closestuv_degenerate_triangle(pos, p0, p1, p2);
    }
    Vec2::new(vb / sum, vc / sum)
}

/// Closest point over the three edges of a collapsed triangle.
fn closestuv_degenerate_triangle(pos: &Point3, p0: &Point3, p1: &Point3, p2: &Point3) -> Vec2 {
    let candidates = [
        (p0, p1, 0usize),
        (p0, p2, 1),
        (p1, p2, 2),
    ];
    let mut best = Vec2::zeros();
    let mut best_dist = f32::INFINITY;
    for (a, b, edge) in candidates {
        let s = closestuv_line(pos, a, b);
        let q = a + (b - a) * s;
        let dist = (pos - q).norm_squared();
        if dist < best_dist {
            best_dist = dist;
            best = match edge {
                0 => Vec2::new(s, 0.0),
                1 => Vec2::new(0.0, s),
                _ => Vec2::new(1.0 - s, s),
            };
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lumen_kernel_geom::utils::triangle_point;

    fn tri() -> [Point3; 3] {
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(0.0, 3.0, 0.0),
        ]
    }

    /// Closest distance found by scanning a barycentric grid.
    fn brute_force_distance(pos: &Point3, [a, b, c]: [Point3; 3]) -> f32 {
        let steps = 200;
        let mut best = f32::INFINITY;
        for i in 0..=steps {
            for j in 0..=(steps - i) {
                let uv = Vec2::new(i as f32 / steps as f32, j as f32 / steps as f32);
                best = best.min((triangle_point(&a, &b, &c, &uv) - pos).norm());
            }
        }
        best
    }

    #[test]
    fn test_closestuv_line() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(2.0, 0.0, 0.0);
        assert_eq!(closestuv_line(&Point3::new(1.0, 5.0, 0.0), &a, &b), 0.5);
        assert_eq!(closestuv_line(&Point3::new(-3.0, 1.0, 0.0), &a, &b), 0.0);
        assert_eq!(closestuv_line(&Point3::new(9.0, 1.0, 0.0), &a, &b), 1.0);
        // zero-length segment
        assert_eq!(closestuv_line(&Point3::new(1.0, 1.0, 1.0), &a, &a), 0.0);
    }

    #[test]
    fn test_voronoi_regions() {
        let fixtures = [
            (Point3::new(-1.0, -1.0, 1.0), Vec2::new(0.0, 0.0)),
            (Point3::new(6.0, -1.0, 1.0), Vec2::new(1.0, 0.0)),
            (Point3::new(-1.0, 5.0, 1.0), Vec2::new(0.0, 1.0)),
            (Point3::new(2.0, -2.0, 1.0), Vec2::new(0.5, 0.0)),
            (Point3::new(-2.0, 1.5, 1.0), Vec2::new(0.0, 0.5)),
            (Point3::new(5.0, 5.5, 1.0), Vec2::new(0.5, 0.5)),
            (Point3::new(1.0, 1.0, 2.0), Vec2::new(0.25, 1.0 / 3.0)),
        ];
        let [a, b, c] = tri();
        for (pos, expected) in fixtures {
            let uv = closestuv_triangle(&pos, &a, &b, &c);
            assert_relative_eq!(uv, expected, epsilon = 1e-5);
            let dist = (triangle_point(&a, &b, &c, &uv) - pos).norm();
            let brute = brute_force_distance(&pos, tri());
            assert!(dist <= brute + 1e-5, "{pos:?}: {dist} > {brute}");
        }
    }

    #[test]
    fn test_sliver_triangle_uses_face_region() {
        // area 50, smallest angle about 2e-4 rad
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1000.0, 0.0, 0.0);
        let c = Point3::new(500.0, 0.1, 0.0);
        let pos = Point3::new(500.0, 0.05, 1.0);
        let uv = closestuv_triangle(&pos, &a, &b, &c);
        assert_relative_eq!(uv, Vec2::new(0.25, 0.5), epsilon = 1e-4);
        let p = triangle_point(&a, &b, &c, &uv);
        assert_relative_eq!((p - pos).norm(), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_tiny_segment_is_not_degenerate() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1e-4, 0.0, 0.0);
        assert_relative_eq!(closestuv_line(&Point3::new(5e-5, 1.0, 0.0), &a, &b), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_uv_stays_in_simplex() {
        let [a, b, c] = tri();
        for i in -4..=8 {
            for j in -4..=8 {
                let pos = Point3::new(i as f32 * 0.75, j as f32 * 0.6, 0.5);
                let uv = closestuv_triangle(&pos, &a, &b, &c);
                assert!(uv.x >= -1e-6 && uv.y >= -1e-6 && uv.x + uv.y <= 1.0 + 1e-6);
                let dist = (triangle_point(&a, &b, &c, &uv) - pos).norm();
                assert!(dist <= brute_force_distance(&pos, tri()) + 1e-4);
            }
        }
    }

    #[test]
    fn test_degenerate_triangle_uses_edges() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(2.0, 0.0, 0.0);
        let c = Point3::new(4.0, 0.0, 0.0);
        let uv = closestuv_triangle(&Point3::new(3.0, 1.0, 0.0), &a, &b, &c);
        let p = triangle_point(&a, &b, &c, &uv);
        assert_relative_eq!(p, Point3::new(3.0, 0.0, 0.0), epsilon = 1e-5);
        assert!(uv.x.is_finite() && uv.y.is_finite());

        let point = closestuv_triangle(&Point3::new(1.0, 1.0, 1.0), &a, &a, &a);
        assert_eq!(point, Vec2::zeros());
    }
}
