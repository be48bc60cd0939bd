//! Throughput report document.
//!
//! One row per (workload, size) pair, with percentile throughput scores and
//! the sink checksum that proves the summations were observably consumed.
//! Rendered as a markdown score table or pretty JSON.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::config::TrialConfig;

/// Throughput statistics over all collected samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThroughputStats {
    pub samples: usize,
    pub mean_ops_ms: f64,
    pub p50_ops_ms: f64,
    pub p95_ops_ms: f64,
}

impl ThroughputStats {
    /// Aggregate raw per-sample throughput values.
    #[must_use]
    pub fn from_samples(mut samples: Vec<f64>) -> Self {
        if samples.is_empty() {
            return Self {
                samples: 0,
                mean_ops_ms: 0.0,
                p50_ops_ms: 0.0,
                p95_ops_ms: 0.0,
            };
        }
        samples.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        Self {
            samples: samples.len(),
            mean_ops_ms: mean,
            p50_ops_ms: percentile_f64_sorted(&samples, 0.50),
            p95_ops_ms: percentile_f64_sorted(&samples, 0.95),
        }
    }
}

fn percentile_f64_sorted(sorted: &[f64], p: f64) -> f64 {
    debug_assert!((0.0..=1.0).contains(&p));
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = ((sorted.len() - 1) as f64 * p).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

/// One scored trial: a workload strategy at one input size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    pub workload: String,
    pub size: i64,
    pub stats: ThroughputStats,
    pub checksum: u64,
}

/// Complete report for one benchmark campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchReport {
    pub title: String,
    pub config: TrialConfig,
    pub rows: Vec<ReportRow>,
}

impl BenchReport {
    /// Render the markdown score table.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        writeln!(out, "# {}", self.title).ok();
        writeln!(out).ok();
        writeln!(out, "- Sizes: {:?}", self.config.sizes).ok();
        writeln!(
            out,
            "- Warmup: {} invocations; measurement: {} samples x {} invocations",
            self.config.warmup_iters, self.config.sample_count, self.config.sample_iters
        )
        .ok();
        writeln!(
            out,
            "- Forks: {}; threads per fork: {}",
            self.config.forks, self.config.threads
        )
        .ok();
        writeln!(out).ok();
        writeln!(out, "## Throughput (ops/ms)").ok();
        writeln!(out).ok();
        writeln!(
            out,
            "| Workload | size | samples | p50 | p95 | mean | checksum |"
        )
        .ok();
        writeln!(
            out,
            "|----------|-----:|--------:|----:|----:|-----:|---------:|"
        )
        .ok();
        for row in &self.rows {
            writeln!(
                out,
                "| {} | {} | {} | {:.3} | {:.3} | {:.3} | {:016x} |",
                row.workload,
                row.size,
                row.stats.samples,
                row.stats.p50_ops_ms,
                row.stats.p95_ops_ms,
                row.stats.mean_ops_ms,
                row.checksum
            )
            .ok();
        }
        out
    }

    /// Serialize the report document to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
