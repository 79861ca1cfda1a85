// src/lib.rs

pub mod benchmark;
pub mod benchmark_cli;
pub mod config;
pub mod error;
pub mod integer_math;

pub use error::{EulerError, Result};
