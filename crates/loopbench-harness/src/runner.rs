//! Trial execution engine.
//!
//! For each input size, each registered strategy is measured across `forks`
//! independent repetitions; each fork spawns `threads` workers, and every
//! worker owns its own generator and workload instance. Workers run an
//! untimed warmup loop, then timed samples, and push their throughput
//! samples into a shared collector once per fork.

use std::time::{Duration, Instant};

use loopbench_core::{DataGenerator, GenerateError, ListWorkload, SUM_STRATEGIES, SumStrategy};
use parking_lot::Mutex;
use thiserror::Error;

use crate::config::{ConfigError, TrialConfig};
use crate::report::{BenchReport, ReportRow, ThroughputStats};

/// Runner failure.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Consuming sink for workload results.
///
/// Every sum is folded into a wrapping checksum through `black_box`, and the
/// checksum is surfaced in the report, so the optimizer cannot discard the
/// summation as dead code.
#[derive(Debug, Default)]
pub struct Blackhole {
    acc: u64,
}

impl Blackhole {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one result.
    #[inline]
    pub fn consume(&mut self, value: i32) {
        let folded = std::hint::black_box(value) as u32 as u64;
        self.acc = self.acc.rotate_left(1) ^ folded;
    }

    /// Final checksum of everything consumed.
    #[must_use]
    pub fn finish(self) -> u64 {
        std::hint::black_box(self.acc)
    }
}

struct SampleBatch {
    ops_per_ms: Vec<f64>,
    checksum: u64,
}

/// Drives every registered strategy across the configured size sweep.
#[derive(Debug, Default)]
pub struct TrialRunner {
    seed: Option<u64>,
}

impl TrialRunner {
    /// Runner with entropy-seeded setup (fresh data every run).
    #[must_use]
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Runner with deterministic setup; each worker derives its own seed, so
    /// the same configuration reproduces the same input data.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Run the full sweep and collect a report.
    pub fn run(&self, cfg: &TrialConfig) -> Result<BenchReport, RunError> {
        cfg.validate()?;
        let mut rows = Vec::with_capacity(cfg.sizes.len() * SUM_STRATEGIES.len());
        for &size in &cfg.sizes {
            for strategy in SUM_STRATEGIES {
                rows.push(self.run_trial(strategy, size, cfg)?);
            }
        }
        Ok(BenchReport {
            title: String::from("loopbench Throughput Report"),
            config: cfg.clone(),
            rows,
        })
    }

    fn run_trial(
        &self,
        strategy: SumStrategy,
        size: i64,
        cfg: &TrialConfig,
    ) -> Result<ReportRow, GenerateError> {
        let collector: Mutex<Vec<SampleBatch>> =
            Mutex::new(Vec::with_capacity(cfg.forks as usize * cfg.threads));

        for fork in 0..cfg.forks {
            let workloads = self.setup_fork(fork, size, cfg)?;
            std::thread::scope(|scope| {
                for workload in &workloads {
                    let collector = &collector;
                    scope.spawn(move || {
                        let batch = measure_one(strategy, workload, cfg);
                        collector.lock().push(batch);
                    });
                }
            });
        }

        let mut ops_per_ms = Vec::new();
        let mut checksum = 0u64;
        for batch in collector.into_inner() {
            ops_per_ms.extend(batch.ops_per_ms);
            checksum ^= batch.checksum;
        }
        Ok(ReportRow {
            workload: strategy.name.to_string(),
            size,
            stats: ThroughputStats::from_samples(ops_per_ms),
            checksum,
        })
    }

    fn setup_fork(
        &self,
        fork: u32,
        size: i64,
        cfg: &TrialConfig,
    ) -> Result<Vec<ListWorkload>, GenerateError> {
        let mut workloads = Vec::with_capacity(cfg.threads);
        for worker in 0..cfg.threads {
            let mut generator = match self.seed {
                Some(seed) => DataGenerator::from_seed(worker_seed(seed, fork, cfg.threads, worker)),
                None => DataGenerator::new(),
            };
            workloads.push(ListWorkload::generate(&mut generator, size)?);
        }
        Ok(workloads)
    }
}

// Seed derivation must not depend on the strategy: the same (fork, worker)
// slot sees the same input data for every strategy.
fn worker_seed(base: u64, fork: u32, threads: usize, worker: usize) -> u64 {
    base.wrapping_add((fork as u64).wrapping_mul(threads as u64))
        .wrapping_add(worker as u64)
}

fn measure_one(strategy: SumStrategy, workload: &ListWorkload, cfg: &TrialConfig) -> SampleBatch {
    let mut sink = Blackhole::new();

    for _ in 0..cfg.warmup_iters {
        sink.consume((strategy.run)(workload));
    }

    let mut ops_per_ms = Vec::with_capacity(cfg.sample_count);
    for _ in 0..cfg.sample_count {
        let start = Instant::now();
        for _ in 0..cfg.sample_iters {
            sink.consume((strategy.run)(workload));
        }
        let elapsed = start.elapsed().max(Duration::from_nanos(1));
        ops_per_ms.push(cfg.sample_iters as f64 / (elapsed.as_secs_f64() * 1e3));
    }

    SampleBatch {
        ops_per_ms,
        checksum: sink.finish(),
    }
}
