//! Throughput harness for loopbench workloads.
//!
//! This crate provides:
//! - Trial configuration: explicit warmup/measurement/fork/thread parameters
//! - Trial runner: repeated invocation of registered workload strategies,
//!   every result consumed through a black-hole sink
//! - Throughput report: markdown + JSON scores per workload and input size
//! - Equivalence verification: all strategies must agree on every input
//! - Structured JSONL run log

#![forbid(unsafe_code)]

pub mod config;
pub mod report;
pub mod run_log;
pub mod runner;
pub mod verify;

pub use config::{ConfigError, TrialConfig};
pub use report::{BenchReport, ReportRow, ThroughputStats};
pub use runner::{Blackhole, RunError, TrialRunner};
pub use verify::{EquivalenceResult, verify_equivalence};
