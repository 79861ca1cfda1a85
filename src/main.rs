// src/main.rs

use std::process::ExitCode;

use euler_core::benchmark_cli::run_benchmarks;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    match run_benchmarks(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("euler-bench: {}", e);
            ExitCode::FAILURE
        }
    }
}
