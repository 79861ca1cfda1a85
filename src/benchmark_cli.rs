// src/benchmark_cli.rs
// Threshold benchmark entry point - kept out of main.rs

use std::error::Error;
use std::path::Path;

use chrono::Utc;
use env_logger::Env;
use log::{error, info};

use crate::benchmark::runner::{compare_benchmarks, BenchmarkRunner};
use crate::config::EulerConfig;

/// `args[1..]` are either `compare <baseline.json> <current.json>` or a list
/// of factorial bounds overriding `benchmark.upper_bounds`.
pub fn run_benchmarks(args: &[String]) -> Result<(), Box<dyn Error>> {
    let mut config = EulerConfig::load()?;

    let env = Env::default().filter_or("EULER_LOG", config.log_level.as_str());
    env_logger::Builder::from_env(env).init();

    if args.get(1).map(String::as_str) == Some("compare") {
        return match (args.get(2), args.get(3)) {
            (Some(baseline), Some(current)) => Ok(compare_benchmarks(baseline, current)?),
            _ => {
                let program = args.first().map(String::as_str).unwrap_or("euler-bench");
                error!("Usage: {} compare <baseline.json> <current.json>", program);
                Err("missing benchmark files to compare".into())
            }
        };
    }

    let bounds = parse_bounds(args.get(1..).unwrap_or_default())?;
    if !bounds.is_empty() {
        config.benchmark.upper_bounds = bounds;
    }

    info!("Factorial bounds: {:?}", config.benchmark.upper_bounds);
    info!("Thresholds: {:?}", config.benchmark.thresholds);
    info!("Worker threads: {}", config.effective_threads());

    let mut runner = BenchmarkRunner::new(&config)?;
    runner.run()?;
    runner.print_summary();

    if !runner.get_suite().all_consistent() {
        error!("Thresholds disagreed on at least one product");
    }

    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    let filename = Path::new(&config.benchmark.output_dir)
        .join(format!("benchmark_results_{}.json", timestamp));
    let filename = filename.to_string_lossy();

    match runner.save_results(&filename) {
        Ok(_) => info!("Results saved to: {}", filename),
        Err(e) => error!("Error saving results: {}", e),
    }

    Ok(())
}

/// Factorial bounds given on the command line; any argument that is not a
/// non-negative integer is an error.
fn parse_bounds(args: &[String]) -> Result<Vec<u64>, String> {
    args.iter()
        .map(|arg| {
            arg.parse::<u64>()
                .map_err(|_| format!("invalid factorial bound '{}': expected a non-negative integer", arg))
        })
        .collect()
}
