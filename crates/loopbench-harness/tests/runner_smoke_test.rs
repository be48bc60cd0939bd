//! End-to-end smoke test: a seeded sweep produces a coherent report.

use loopbench_core::SUM_STRATEGIES;
use loopbench_harness::{TrialConfig, TrialRunner};

#[test]
fn seeded_sweep_produces_equivalent_scores() {
    let cfg = TrialConfig {
        sizes: vec![0, 5, 100],
        warmup_iters: 8,
        sample_count: 3,
        sample_iters: 40,
        forks: 2,
        threads: 2,
    };
    let report = TrialRunner::seeded(0xC0FFEE).run(&cfg).expect("valid config");

    assert_eq!(report.rows.len(), cfg.sizes.len() * SUM_STRATEGIES.len());
    for row in &report.rows {
        assert_eq!(
            row.stats.samples,
            cfg.forks as usize * cfg.threads * cfg.sample_count
        );
        assert!(row.stats.p50_ops_ms > 0.0);
        assert!(row.stats.p95_ops_ms >= row.stats.p50_ops_ms);
    }

    // Same seed + size means the same input data per worker slot, so the
    // equivalent strategies must fold identical value sequences into the sink.
    for &size in &cfg.sizes {
        let checksums: Vec<u64> = report
            .rows
            .iter()
            .filter(|row| row.size == size)
            .map(|row| row.checksum)
            .collect();
        assert_eq!(checksums.len(), SUM_STRATEGIES.len());
        assert!(
            checksums.windows(2).all(|pair| pair[0] == pair[1]),
            "checksums diverged at size {size}: {checksums:?}"
        );
    }

    let md = report.to_markdown();
    for strategy in SUM_STRATEGIES {
        assert!(md.contains(strategy.name));
    }

    let json = report.to_json().expect("serializable report");
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid report json");
    assert_eq!(
        parsed["rows"].as_array().map(Vec::len),
        Some(report.rows.len())
    );
}
