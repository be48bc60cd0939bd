//! Random input generation for list workloads.
//!
//! The generator is an explicit handle: callers construct one (entropy-seeded
//! by default) and thread it through workload setup, one handle per worker
//! thread. Nothing about a generated sequence is promised beyond its length
//! and its distribution; tests must assert distributional properties, never
//! exact values.

use rand::distributions::Standard;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Invalid workload parameterization, raised at generation time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("requested length {requested} is negative")]
    NegativeLength { requested: i64 },
    #[error("bound {bound} is not positive")]
    NonPositiveBound { bound: i32 },
}

/// Source of random `i32` sequences for benchmark input.
#[derive(Debug)]
pub struct DataGenerator {
    rng: StdRng,
}

impl DataGenerator {
    /// Create a generator seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed.
    ///
    /// Reproducible sequences are for tooling and tests; benchmark setup
    /// defaults to [`DataGenerator::new`].
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate exactly `len` integers, each independently uniform over the
    /// full `i32` range.
    pub fn uniform(&mut self, len: i64) -> Result<Vec<i32>, GenerateError> {
        let len = checked_len(len)?;
        Ok((0..len).map(|_| self.rng.sample(Standard)).collect())
    }

    /// Generate exactly `len` integers, each independently uniform over
    /// `[0, bound)`.
    ///
    /// The requested length is authoritative; the bound only constrains
    /// element values.
    pub fn bounded(&mut self, bound: i32, len: i64) -> Result<Vec<i32>, GenerateError> {
        if bound <= 0 {
            return Err(GenerateError::NonPositiveBound { bound });
        }
        let len = checked_len(len)?;
        Ok((0..len).map(|_| self.rng.gen_range(0..bound)).collect())
    }
}

impl Default for DataGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn checked_len(len: i64) -> Result<usize, GenerateError> {
    usize::try_from(len).map_err(|_| GenerateError::NegativeLength { requested: len })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_produces_requested_length() {
        let mut generator = DataGenerator::from_seed(7);
        for len in [0i64, 1, 10, 1000] {
            let values = generator.uniform(len).expect("valid length");
            assert_eq!(values.len(), len as usize);
        }
    }

    #[test]
    fn bounded_stays_in_range_and_honors_length() {
        let mut generator = DataGenerator::from_seed(11);
        let values = generator.bounded(100, 10_000).expect("valid arguments");
        assert_eq!(values.len(), 10_000);
        assert!(values.iter().all(|&v| (0..100).contains(&v)));
    }

    #[test]
    fn bounded_length_is_authoritative() {
        let mut generator = DataGenerator::from_seed(13);
        let values = generator.bounded(10_000, 25).expect("valid arguments");
        assert_eq!(values.len(), 25);
    }

    #[test]
    fn negative_length_is_rejected() {
        let mut generator = DataGenerator::from_seed(3);
        assert_eq!(
            generator.uniform(-1),
            Err(GenerateError::NegativeLength { requested: -1 })
        );
        assert_eq!(
            generator.bounded(5, -1),
            Err(GenerateError::NegativeLength { requested: -1 })
        );
    }

    #[test]
    fn non_positive_bound_is_rejected() {
        let mut generator = DataGenerator::from_seed(3);
        assert_eq!(
            generator.bounded(0, 5),
            Err(GenerateError::NonPositiveBound { bound: 0 })
        );
        assert_eq!(
            generator.bounded(-3, 5),
            Err(GenerateError::NonPositiveBound { bound: -3 })
        );
    }

    #[test]
    fn seeded_generators_reproduce() {
        let mut a = DataGenerator::from_seed(42);
        let mut b = DataGenerator::from_seed(42);
        assert_eq!(a.uniform(16), b.uniform(16));
        assert_eq!(a.bounded(50, 16), b.bounded(50, 16));
    }

    #[test]
    fn uniform_mean_absolute_value_is_plausible() {
        // Uniform over the full i32 range has E[|x|] close to 2^30. Pool
        // several draws and accept a window many standard errors wide.
        let mut generator = DataGenerator::new();
        let mut total = 0f64;
        let mut count = 0usize;
        for _ in 0..8 {
            let values = generator.uniform(1000).expect("valid length");
            total += values.iter().map(|&v| (v as f64).abs()).sum::<f64>();
            count += values.len();
        }
        let mean_abs = total / count as f64;
        assert!(
            (0.95e9..1.20e9).contains(&mean_abs),
            "mean |x| = {mean_abs}, not plausible for a full-range uniform draw"
        );
    }
}
