// src/benchmark/runner.rs

use std::sync::Arc;
use std::time::Instant;

use log::{info, warn};
use num::BigInt;
use rayon::ThreadPool;

use crate::benchmark::results::{BenchmarkResult, BenchmarkSuite};
use crate::config::{BenchmarkConfig, EulerConfig};
use crate::error::Result;
use crate::integer_math::combinatorics::Combinatorics;
use crate::integer_math::digits::digit_count;
use crate::integer_math::range_product::RangeProduct;

/// Times `n!` under several sequential thresholds and checks that every
/// threshold produces the same product.
pub struct BenchmarkRunner {
    suite: BenchmarkSuite,
    settings: BenchmarkConfig,
    pool: Option<Arc<ThreadPool>>,
}

impl BenchmarkRunner {
    pub fn new(config: &EulerConfig) -> Result<Self> {
        let pool = config.thread_pool()?;
        let worker_threads = match &pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        };
        Ok(BenchmarkRunner {
            suite: BenchmarkSuite::new(worker_threads),
            settings: config.benchmark.clone(),
            pool,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let upper_bounds = self.settings.upper_bounds.clone();
        for upper_bound in upper_bounds {
            self.run_upper_bound(upper_bound)?;
        }
        Ok(())
    }

    /// Benchmarks `upper_bound!` under every configured threshold. The first
    /// threshold's product is the reference the others are compared with.
    pub fn run_upper_bound(&mut self, upper_bound: u64) -> Result<()> {
        info!("Benchmarking {}! across thresholds {:?}", upper_bound, self.settings.thresholds);

        let mut reference: Option<BigInt> = None;
        for &threshold in &self.settings.thresholds {
            let mut engine = RangeProduct::with_threshold(threshold)?;
            if let Some(pool) = &self.pool {
                engine = engine.with_pool(Arc::clone(pool));
            }
            let combinatorics = Combinatorics::new(engine);

            let (product, samples) = Self::time_factorial(&combinatorics, upper_bound, self.settings.iterations);
            let (mean, std_dev) = Self::mean_and_std_dev(&samples);

            let matches_reference = match &reference {
                Some(expected) => expected == &product,
                None => true,
            };
            if !matches_reference {
                warn!("{}! with threshold {} differs from the reference product", upper_bound, threshold);
            }

            info!("  threshold {:>8}: {}", threshold, BenchmarkSuite::format_duration(mean));
            self.suite.add_result(BenchmarkResult {
                upper_bound,
                threshold,
                mean_time_ns: mean,
                std_dev_ns: std_dev,
                iterations: samples.len() as u32,
                digit_count: digit_count(&product),
                matches_reference,
            });

            if reference.is_none() {
                reference = Some(product);
            }
        }
        Ok(())
    }

    fn time_factorial(combinatorics: &Combinatorics, n: u64, iterations: u32) -> (BigInt, Vec<u64>) {
        let mut samples = Vec::with_capacity(iterations.max(1) as usize);

        let start = Instant::now();
        let product = combinatorics.factorial(n);
        samples.push(start.elapsed().as_nanos() as u64);

        for _ in 1..iterations {
            let start = Instant::now();
            std::hint::black_box(combinatorics.factorial(n));
            samples.push(start.elapsed().as_nanos() as u64);
        }

        (product, samples)
    }

    fn mean_and_std_dev(samples: &[u64]) -> (u64, u64) {
        if samples.is_empty() {
            return (0, 0);
        }
        let count = samples.len() as f64;
        let mean = samples.iter().map(|&s| s as f64).sum::<f64>() / count;
        let variance = samples.iter()
            .map(|&s| {
                let delta = s as f64 - mean;
                delta * delta
            })
            .sum::<f64>() / count;
        (mean.round() as u64, variance.sqrt().round() as u64)
    }

    pub fn save_results(&self, path: &str) -> std::io::Result<()> {
        self.suite.save_to_file(path)
    }

    pub fn print_summary(&self) {
        self.suite.print_summary();
    }

    pub fn get_suite(&self) -> &BenchmarkSuite {
        &self.suite
    }
}

/// Compare two saved benchmark suites threshold by threshold.
pub fn compare_benchmarks(baseline_path: &str, current_path: &str) -> std::io::Result<()> {
    let baseline = BenchmarkSuite::load_from_file(baseline_path)?;
    let current = BenchmarkSuite::load_from_file(current_path)?;

    println!("\n{}", "=".repeat(80));
    println!("BENCHMARK COMPARISON");
    println!("{}", "=".repeat(80));
    println!("\nBaseline: {} ({}, {} workers)", baseline.timestamp, baseline.system_info.hostname, baseline.system_info.worker_threads);
    println!("Current:  {} ({}, {} workers)", current.timestamp, current.system_info.hostname, current.system_info.worker_threads);

    println!("\n{}", "-".repeat(80));
    println!("{:<12} {:>12} {:>15} {:>15} {:>15}", "n!", "Threshold", "Baseline", "Current", "Speedup");
    println!("{}", "-".repeat(80));

    for current_result in &current.results {
        if let Some(baseline_result) = baseline.results.iter().find(|b| {
            b.upper_bound == current_result.upper_bound && b.threshold == current_result.threshold
        }) {
            let speedup = baseline_result.mean_time_ns as f64 / current_result.mean_time_ns.max(1) as f64;
            let speedup_str = if speedup > 1.0 {
                format!("{:.2}x faster", speedup)
            } else {
                format!("{:.2}x slower", 1.0 / speedup)
            };

            println!("{:<12} {:>12} {:>15} {:>15} {:>15}",
                current_result.upper_bound,
                current_result.threshold,
                BenchmarkSuite::format_duration(baseline_result.mean_time_ns),
                BenchmarkSuite::format_duration(current_result.mean_time_ns),
                speedup_str
            );
        }
    }

    println!("{}", "=".repeat(80));
    Ok(())
}
