//! Sampling configuration for approximate cone tests.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of rays fired per approximate cone test.
pub const DEFAULT_CONE_SAMPLES: usize = 64;

/// Fraction of sample rays that must hit for a cone test to succeed.
pub const DEFAULT_CONE_HIT_THRESHOLD: f32 = 0.3;

/// Errors from building a [`ConeSampling`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConeConfigError {
    /// The sample count is zero.
    #[error("cone sampling needs at least one sample")]
    NoSamples,

    /// The threshold is not a fraction in `[0, 1)`.
    #[error("cone hit threshold {0} is outside [0, 1)")]
    ThresholdOutOfRange(f32),
}

/// Result type for configuration validation.
pub type Result<T> = std::result::Result<T, ConeConfigError>;

/// How an approximate cone test samples the cone.
///
/// A test succeeds when strictly more than `threshold * samples` sample
/// rays hit the primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConeSampling {
    /// Number of sample rays.
    pub samples: usize,
    /// Hit fraction that must be exceeded.
    pub threshold: f32,
}

impl ConeSampling {
    /// Create a validated sampling configuration.
    pub fn new(samples: usize, threshold: f32) -> Result<Self> {
        let sampling = Self { samples, threshold };
        sampling.validate()?;
        Ok(sampling)
    }

    /// Check a configuration built by hand or deserialized.
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            log::debug!("rejecting cone sampling with zero samples");
            return Err(ConeConfigError::NoSamples);
        }
        if !(0.0..1.0).contains(&self.threshold) {
            log::debug!("rejecting cone hit threshold {}", self.threshold);
            return Err(ConeConfigError::ThresholdOutOfRange(self.threshold));
        }
        Ok(())
    }
}

impl Default for ConeSampling {
    fn default() -> Self {
        Self {
            samples: DEFAULT_CONE_SAMPLES,
            threshold: DEFAULT_CONE_HIT_THRESHOLD,
        }
    }
}
