//! CLI entrypoint for the loopbench throughput harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use loopbench_core::{DataGenerator, SUM_STRATEGIES};
use loopbench_harness::run_log::{LogLevel, RunEvent, RunLogEmitter};
use loopbench_harness::verify::all_agreed;
use loopbench_harness::{TrialConfig, TrialRunner, verify_equivalence};

/// Throughput tooling for loopbench workloads.
#[derive(Debug, Parser)]
#[command(name = "loopbench-harness")]
#[command(about = "Throughput harness for loopbench list workloads")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the configured size sweep for every registered workload.
    Run {
        /// Input sizes to sweep (comma separated).
        #[arg(long, value_delimiter = ',', default_values_t = vec![1i64, 10, 100, 1000, 10000])]
        sizes: Vec<i64>,
        /// Untimed invocations per worker before sampling.
        #[arg(long, default_value_t = 1_000)]
        warmup_iters: u64,
        /// Timed samples per worker.
        #[arg(long, default_value_t = 10)]
        samples: usize,
        /// Workload invocations per timed sample.
        #[arg(long, default_value_t = 10_000)]
        iters: u64,
        /// Independent repetitions with fresh setup.
        #[arg(long, default_value_t = 2)]
        forks: u32,
        /// Concurrent workers per fork.
        #[arg(long, default_value_t = 2)]
        threads: usize,
        /// Fixed setup seed (omit for entropy seeding).
        #[arg(long)]
        seed: Option<u64>,
        /// Output report path (markdown); a .json sibling is written too.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Structured JSONL run log path.
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Check that every strategy produces the same sum per input size.
    Verify {
        /// Input sizes to check (comma separated).
        #[arg(long, value_delimiter = ',', default_values_t = vec![0i64, 1, 10, 100, 1000, 10000])]
        sizes: Vec<i64>,
        /// Fixed seed for reproducible inputs.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List registered workload strategies.
    List,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            sizes,
            warmup_iters,
            samples,
            iters,
            forks,
            threads,
            seed,
            report,
            log,
        } => {
            let cfg = TrialConfig {
                sizes,
                warmup_iters,
                sample_count: samples,
                sample_iters: iters,
                forks,
                threads,
            };
            let runner = match seed {
                Some(seed) => TrialRunner::seeded(seed),
                None => TrialRunner::new(),
            };

            eprintln!(
                "Running {} workload(s) over {} size(s): forks={}, threads={}",
                SUM_STRATEGIES.len(),
                cfg.sizes.len(),
                cfg.forks,
                cfg.threads
            );
            let report_doc = runner.run(&cfg)?;
            eprintln!("Collected {} result row(s)", report_doc.rows.len());

            if let Some(path) = log {
                let mut emitter = RunLogEmitter::to_file(&path)?;
                emitter.emit(RunEvent::new(LogLevel::Info, "run_start"))?;
                for row in &report_doc.rows {
                    emitter.emit(
                        RunEvent::new(LogLevel::Info, "trial_complete")
                            .with_workload(&row.workload)
                            .with_size(row.size)
                            .with_throughput(row.stats.p50_ops_ms)
                            .with_checksum(row.checksum),
                    )?;
                }
                emitter.emit(RunEvent::new(LogLevel::Info, "run_end"))?;
                emitter.flush()?;
                eprintln!("Wrote run log to {}", path.display());
            }

            if let Some(path) = report {
                std::fs::write(&path, report_doc.to_markdown())?;
                let json_path = path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json()?)?;
                eprintln!(
                    "Wrote report to {} and {}",
                    path.display(),
                    json_path.display()
                );
            } else {
                print!("{}", report_doc.to_markdown());
            }
        }
        Command::Verify { sizes, seed } => {
            let mut generator = match seed {
                Some(seed) => DataGenerator::from_seed(seed),
                None => DataGenerator::new(),
            };
            let results = verify_equivalence(&mut generator, &sizes)?;
            for result in &results {
                if result.agreed {
                    eprintln!("size {:>6}: ok", result.size);
                } else {
                    eprintln!("size {:>6}: MISMATCH", result.size);
                    for named in &result.sums {
                        eprintln!("  {} = {}", named.workload, named.sum);
                    }
                }
            }
            if !all_agreed(&results) {
                return Err("strategy sums disagree".into());
            }
            eprintln!("All strategies agree on {} size(s)", results.len());
        }
        Command::List => {
            for strategy in SUM_STRATEGIES {
                println!("{}", strategy.name);
            }
        }
    }

    Ok(())
}
