//! Construction of synthetic input vectors.
//!
//! The caller owns the random generator; this module only owns the
//! distribution. Each call draws exactly `S - 1` values, in index order.

use crate::model::Vector;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Draws input vectors `[1.0, u1, …, u(S-1)]` with every `ui` uniform in `[0, 1)`.
#[derive(Debug, Clone, Copy)]
pub struct UniformSampler {
    distribution: Uniform<f64>,
}

impl UniformSampler {
    pub fn new() -> Self {
        Self {
            distribution: Uniform::new(0.0, 1.0),
        }
    }

    /// Builds one sample vector. Index 0 is the bias feature.
    pub fn sample<const S: usize, R>(&self, rng: &mut R) -> Vector<S>
    where
        R: Rng + ?Sized,
    {
        let mut input = [0.0; S];
        input[0] = 1.0;
        for feature in input.iter_mut().skip(1) {
            *feature = self.distribution.sample(rng);
        }
        input
    }
}

impl Default for UniformSampler {
    fn default() -> Self {
        Self::new()
    }
}
