//! List summation workloads.
//!
//! One workload wraps one generated sequence and exposes three traversal
//! strategies that must produce the same wraparound sum:
//! - iterator traversal
//! - index loop, length re-queried every step
//! - index loop, length captured once before the loop
//!
//! The strategies are the benchmark subject; they stay allocation-free and
//! never mutate the sequence.

use crate::datagen::{DataGenerator, GenerateError};

/// An immutable integer sequence with equivalent summation strategies.
#[derive(Debug, Clone)]
pub struct ListWorkload {
    values: Vec<i32>,
}

impl ListWorkload {
    /// Wrap an existing sequence.
    #[must_use]
    pub fn from_values(values: Vec<i32>) -> Self {
        Self { values }
    }

    /// Setup hook: build a workload of `len` uniformly random integers.
    pub fn generate(generator: &mut DataGenerator, len: i64) -> Result<Self, GenerateError> {
        Ok(Self::from_values(generator.uniform(len)?))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum by iterator traversal, 32-bit wraparound.
    #[must_use]
    pub fn sum_via_iteration(&self) -> i32 {
        let mut sum = 0i32;
        for &value in &self.values {
            sum = sum.wrapping_add(value);
        }
        sum
    }

    /// Sum by index, re-querying the length on every step.
    #[must_use]
    pub fn sum_via_indexing(&self) -> i32 {
        let mut sum = 0i32;
        let mut i = 0;
        // The loop condition must consult len() on every pass; a range loop
        // would capture the length up front.
        while i < self.values.len() {
            sum = sum.wrapping_add(self.values[i]);
            i += 1;
        }
        sum
    }

    /// Sum by index over a length captured once before the loop.
    #[must_use]
    pub fn sum_via_cached_len_indexing(&self) -> i32 {
        let mut sum = 0i32;
        let len = self.values.len();
        for i in 0..len {
            sum = sum.wrapping_add(self.values[i]);
        }
        sum
    }
}

/// A named summation strategy the runner can invoke uniformly.
#[derive(Debug, Clone, Copy)]
pub struct SumStrategy {
    pub name: &'static str,
    pub run: fn(&ListWorkload) -> i32,
}

/// Registry of all summation strategies, in report order.
pub const SUM_STRATEGIES: [SumStrategy; 3] = [
    SumStrategy {
        name: "sum_via_iteration",
        run: ListWorkload::sum_via_iteration,
    },
    SumStrategy {
        name: "sum_via_indexing",
        run: ListWorkload::sum_via_indexing,
    },
    SumStrategy {
        name: "sum_via_cached_len_indexing",
        run: ListWorkload::sum_via_cached_len_indexing,
    },
];

impl SumStrategy {
    /// Look up a strategy by its registered name.
    #[must_use]
    pub fn by_name(name: &str) -> Option<SumStrategy> {
        SUM_STRATEGIES.into_iter().find(|s| s.name == name)
    }
}
