//! Golden-angle spiral sampling of the unit disk.
//!
//! Sample `i` of `n` (1-based) sits at radius `sqrt((i - 0.5) / (n - 0.5))`
//! and angle `2 pi i / phi^2`, which spreads the samples with near-uniform
//! density and no clustering at the center.

use std::f32::consts::PI;

use lumen_kernel_math::Vec2;

/// Square of the golden ratio.
const GOLDEN_RATIO_SQR: f32 = 2.618_034;

/// Position of sample `i` (1-based) of an `n`-sample spiral on the unit disk.
#[inline]
pub fn golden_spiral_point(i: usize, n: usize) -> Vec2 {
    let r = ((i as f32 - 0.5) / (n as f32 - 0.5)).sqrt();
    let theta = 2.0 * PI * i as f32 / GOLDEN_RATIO_SQR;
    let (sin, cos) = theta.sin_cos();
    Vec2::new(r * cos, r * sin)
}

/// All `n` sample positions of the spiral, in sample order.
pub fn golden_spiral(n: usize) -> Vec<Vec2> {
    (1..=n).map(|i| golden_spiral_point(i, n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_samples_in_unit_disk() {
        let samples = golden_spiral(64);
        assert_eq!(samples.len(), 64);
        for s in &samples {
            assert!(s.norm() <= 1.0 + 1e-6);
        }
        // last sample lies on the rim
        assert_relative_eq!(samples[63].norm(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_radii_increase() {
        let samples = golden_spiral(32);
        for pair in samples.windows(2) {
            assert!(pair[1].norm() > pair[0].norm());
        }
    }

    #[test]
    fn test_single_sample() {
        let samples = golden_spiral(1);
        assert_eq!(samples.len(), 1);
        assert_relative_eq!(samples[0].norm(), 1.0, epsilon = 1e-6);
        assert!(golden_spiral(0).is_empty());
    }

    #[test]
    fn test_roughly_uniform() {
        // each quadrant gets about a quarter of the samples
        let samples = golden_spiral(256);
        let q = samples.iter().filter(|s| s.x > 0.0 && s.y > 0.0).count();
        assert!((48..=80).contains(&q), "{q}");
        let inner = samples.iter().filter(|s| s.norm() < 0.5).count();
        assert!((54..=74).contains(&inner), "{inner}");
    }
}
