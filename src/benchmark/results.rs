// src/benchmark/results.rs

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::benchmark::system_info::SystemInfo;

/// Timing of `factorial(upper_bound)` under one threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub upper_bound: u64,
    pub threshold: u64,
    pub mean_time_ns: u64,
    pub std_dev_ns: u64,
    pub iterations: u32,
    pub digit_count: usize,
    /// Product equals the one computed with the reference threshold
    pub matches_reference: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkSuite {
    pub timestamp: DateTime<Utc>,
    pub system_info: SystemInfo,
    pub results: Vec<BenchmarkResult>,
}

impl BenchmarkSuite {
    /// `worker_threads` is the size of the pool the runner multiplies in.
    pub fn new(worker_threads: usize) -> Self {
        BenchmarkSuite {
            timestamp: Utc::now(),
            system_info: SystemInfo::collect(worker_threads),
            results: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }

    /// True when every threshold produced the reference product.
    pub fn all_consistent(&self) -> bool {
        self.results.iter().all(|r| r.matches_reference)
    }

    /// Fastest threshold recorded for `upper_bound`, if any.
    pub fn fastest_threshold(&self, upper_bound: u64) -> Option<u64> {
        self.results
            .iter()
            .filter(|r| r.upper_bound == upper_bound)
            .min_by_key(|r| r.mean_time_ns)
            .map(|r| r.threshold)
    }

    pub fn save_to_file(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file(path: &str) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let suite = serde_json::from_str(&json)?;
        Ok(suite)
    }

    pub fn print_summary(&self) {
        println!("\n{}", "=".repeat(80));
        println!("RANGE PRODUCT THRESHOLD BENCHMARK");
        println!("{}", "=".repeat(80));
        println!("\nTimestamp: {}", self.timestamp);
        println!("{}", self.system_info.to_string_pretty());

        println!("{}", "-".repeat(80));
        println!("{:<12} {:>12} {:>15} {:>15} {:>10} {:>8}",
            "n!", "Threshold", "Mean Time", "Std Dev", "Digits", "Match");
        println!("{}", "-".repeat(80));

        for result in &self.results {
            println!("{:<12} {:>12} {:>15} {:>15} {:>10} {:>8}",
                result.upper_bound,
                result.threshold,
                Self::format_duration(result.mean_time_ns),
                Self::format_duration(result.std_dev_ns),
                result.digit_count,
                if result.matches_reference { "yes" } else { "NO" });
        }

        println!("\n{}", "=".repeat(80));
    }

    pub fn format_duration(ns: u64) -> String {
        if ns < 1_000 {
            format!("{} ns", ns)
        } else if ns < 1_000_000 {
            format!("{:.2} µs", ns as f64 / 1_000.0)
        } else if ns < 1_000_000_000 {
            format!("{:.2} ms", ns as f64 / 1_000_000.0)
        } else {
            format!("{:.2} s", ns as f64 / 1_000_000_000.0)
        }
    }
}

impl Default for BenchmarkSuite {
    fn default() -> Self {
        Self::new(rayon::current_num_threads())
    }
}
