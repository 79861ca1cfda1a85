// src/error.rs

use std::fmt;
use num::BigInt;

/// Contract violations reported by the range multiplier, the sieve and the
/// counting helpers built on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EulerError {
    /// `lower > upper` was passed to a range product.
    InvalidRange { lower: BigInt, upper: BigInt },
    /// A negative (or unaddressable) bound was passed to the sieve.
    InvalidBound(i64),
    /// `r > n` was passed to a combination or permutation count.
    InvalidSelection { n: u64, r: u64 },
    /// The sequential cutoff must be at least one element.
    InvalidThreshold,
    /// A dedicated worker pool could not be started.
    ThreadPool(String),
}

impl fmt::Display for EulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EulerError::InvalidRange { lower, upper } => {
                write!(f, "invalid range [{}, {}): lower bound exceeds upper bound", lower, upper)
            }
            EulerError::InvalidBound(bound) => {
                write!(f, "invalid sieve bound {}: must be a non-negative addressable size", bound)
            }
            EulerError::InvalidSelection { n, r } => {
                write!(f, "invalid selection: cannot choose {} items from {}", r, n)
            }
            EulerError::InvalidThreshold => write!(f, "sequential threshold must be positive"),
            EulerError::ThreadPool(reason) => write!(f, "failed to build worker pool: {}", reason),
        }
    }
}

impl std::error::Error for EulerError {}

pub type Result<T> = std::result::Result<T, EulerError>;
