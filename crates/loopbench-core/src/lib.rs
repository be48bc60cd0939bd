//! # loopbench-core
//!
//! Workload core for the loopbench microbenchmarks: a random-integer data
//! generator and an array-backed list workload exposing three equivalent
//! summation strategies (iterator traversal, index loop with the length
//! re-queried each step, index loop with the length captured once).
//!
//! The throughput runner lives in `loopbench-harness`; criterion benches live
//! in `loopbench-bench`.

#![deny(unsafe_code)]

pub mod datagen;
pub mod workload;

pub use datagen::{DataGenerator, GenerateError};
pub use workload::{ListWorkload, SUM_STRATEGIES, SumStrategy};
