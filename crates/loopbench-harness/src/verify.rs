//! Strategy equivalence verification.
//!
//! Runs every registered strategy over one freshly generated sequence per
//! input size and records whether the sums agree. Traversal mechanics differ;
//! the results must not.

use loopbench_core::{DataGenerator, GenerateError, ListWorkload, SUM_STRATEGIES};
use serde::{Deserialize, Serialize};

/// Sum produced by one named strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedSum {
    pub workload: String,
    pub sum: i32,
}

/// Agreement result for one input size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquivalenceResult {
    pub size: i64,
    pub sums: Vec<NamedSum>,
    pub agreed: bool,
}

/// Check all registered strategies for agreement at each size.
pub fn verify_equivalence(
    generator: &mut DataGenerator,
    sizes: &[i64],
) -> Result<Vec<EquivalenceResult>, GenerateError> {
    let mut results = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let workload = ListWorkload::generate(generator, size)?;
        let sums: Vec<NamedSum> = SUM_STRATEGIES
            .iter()
            .map(|strategy| NamedSum {
                workload: strategy.name.to_string(),
                sum: (strategy.run)(&workload),
            })
            .collect();
        let agreed = sums.windows(2).all(|pair| pair[0].sum == pair[1].sum);
        results.push(EquivalenceResult { size, sums, agreed });
    }
    Ok(results)
}

/// True when every size agreed.
#[must_use]
pub fn all_agreed(results: &[EquivalenceResult]) -> bool {
    results.iter().all(|result| result.agreed)
}
