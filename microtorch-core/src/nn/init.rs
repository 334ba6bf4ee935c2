//! Parameter initialization.
//!
//! Modules never draw random numbers themselves: they ask a [`RandomSource`]
//! for one vector per parameter group at construction time.

use crate::error::MicroTorchError;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Mean of the normal distribution parameters are drawn from.
pub const INIT_MEAN: f64 = 0.0;
/// Standard deviation of the normal distribution parameters are drawn from.
pub const INIT_STD: f64 = 1.0;

/// Source of initial parameter values.
pub trait RandomSource {
    /// Draws `count` samples from a normal distribution.
    ///
    /// # Errors
    /// `InvalidDistribution` if `mean`/`std` do not describe a valid normal.
    fn generate(&mut self, count: usize, mean: f64, std: f64) -> Result<Vec<f64>, MicroTorchError>;
}

/// Normal-distribution initializer over a [`StdRng`].
#[derive(Debug, Clone)]
pub struct NormalInit {
    rng: StdRng,
}

impl NormalInit {
    /// Initializer seeded from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        NormalInit {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible initializer: the same seed yields the same parameters.
    pub fn seeded(seed: u64) -> Self {
        NormalInit {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for NormalInit {
    fn default() -> Self {
        NormalInit::from_entropy()
    }
}

impl RandomSource for NormalInit {
    fn generate(&mut self, count: usize, mean: f64, std: f64) -> Result<Vec<f64>, MicroTorchError> {
        if !mean.is_finite() {
            return Err(MicroTorchError::InvalidDistribution(format!(
                "mean must be finite, got {}",
                mean
            )));
        }
        if !(std.is_finite() && std >= 0.0) {
            return Err(MicroTorchError::InvalidDistribution(format!(
                "std must be finite and non-negative, got {}",
                std
            )));
        }
        let normal = Normal::new(mean, std)
            .map_err(|e| MicroTorchError::InvalidDistribution(format!("std {}: {}", std, e)))?;
        debug!("NormalInit: drawing {} samples from N({}, {})", count, mean, std);
        Ok((0..count).map(|_| normal.sample(&mut self.rng)).collect())
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
