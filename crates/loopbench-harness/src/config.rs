//! Trial configuration for the throughput runner.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid runner parameterization.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no input sizes configured")]
    NoSizes,
    #[error("input size {size} is negative")]
    InvalidSize { size: i64 },
    #[error("sample count must be positive")]
    ZeroSamples,
    #[error("sample iteration count must be positive")]
    ZeroSampleIters,
    #[error("thread count must be positive")]
    ZeroThreads,
    #[error("fork count must be positive")]
    ZeroForks,
}

/// Parameters for one benchmark campaign.
///
/// The default sweep mirrors the classic list-iteration comparison: sizes
/// 1..10000 in decades, two forks, two worker threads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialConfig {
    /// Input sizes to sweep, one trial set per size.
    pub sizes: Vec<i64>,
    /// Untimed invocations per worker before sampling starts.
    pub warmup_iters: u64,
    /// Timed samples per worker.
    pub sample_count: usize,
    /// Workload invocations per timed sample.
    pub sample_iters: u64,
    /// Independent repetitions, each with fully fresh setup.
    pub forks: u32,
    /// Concurrent workers per fork, each with its own workload instance.
    pub threads: usize,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            sizes: vec![1, 10, 100, 1_000, 10_000],
            warmup_iters: 1_000,
            sample_count: 10,
            sample_iters: 10_000,
            forks: 2,
            threads: 2,
        }
    }
}

impl TrialConfig {
    /// Check the configuration before running.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::NoSizes);
        }
        if let Some(&size) = self.sizes.iter().find(|&&s| s < 0) {
            return Err(ConfigError::InvalidSize { size });
        }
        if self.sample_count == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        if self.sample_iters == 0 {
            return Err(ConfigError::ZeroSampleIters);
        }
        if self.threads == 0 {
            return Err(ConfigError::ZeroThreads);
        }
        if self.forks == 0 {
            return Err(ConfigError::ZeroForks);
        }
        Ok(())
    }
}
