// src/integer_math/range_product.rs
//
// Exact product of every integer in a half-open range [lower, upper).
//
// Ranges longer than the threshold are halved and the two halves are handed
// to rayon::join, so large factorials spread across the worker pool while
// short ranges stay on a plain multiply loop. The threshold only affects
// wall-clock time; every positive value produces the same product.

use std::sync::Arc;

use log::{debug, trace};
use num::{BigInt, Integer, One, ToPrimitive};
use rayon::ThreadPool;

use crate::error::{EulerError, Result};

/// Ranges of at most this many integers are multiplied sequentially.
pub const DEFAULT_THRESHOLD: u64 = 10_000;

/// Fork/join multiplier over half-open integer ranges.
///
/// # Examples
/// ```
/// use num::BigInt;
/// use euler_core::integer_math::range_product::RangeProduct;
///
/// let engine = RangeProduct::new();
/// let ten_factorial = engine.compute(&BigInt::from(1), &BigInt::from(11)).unwrap();
/// assert_eq!(ten_factorial, BigInt::from(3_628_800));
/// ```
#[derive(Debug, Clone)]
pub struct RangeProduct {
    threshold: u64,
    pool: Option<Arc<ThreadPool>>,
}

impl RangeProduct {
    pub fn new() -> Self {
        RangeProduct {
            threshold: DEFAULT_THRESHOLD,
            pool: None,
        }
    }

    /// Builds an engine with a custom sequential cutoff. Zero is rejected
    /// because a single-element range could never stop splitting.
    pub fn with_threshold(threshold: u64) -> Result<Self> {
        if threshold == 0 {
            return Err(EulerError::InvalidThreshold);
        }
        Ok(RangeProduct {
            threshold,
            pool: None,
        })
    }

    /// Runs every split inside `pool` instead of rayon's global pool.
    pub fn with_pool(mut self, pool: Arc<ThreadPool>) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    /// Returns the exact product of all integers in `[lower, upper)`.
    ///
    /// An empty range (`lower == upper`) yields 1. `lower > upper` fails with
    /// [`EulerError::InvalidRange`] before any multiplication happens.
    pub fn compute(&self, lower: &BigInt, upper: &BigInt) -> Result<BigInt> {
        if lower > upper {
            return Err(EulerError::InvalidRange {
                lower: lower.clone(),
                upper: upper.clone(),
            });
        }
        Ok(self.product_unchecked(lower, upper))
    }

    /// Caller guarantees `lower <= upper`.
    pub(crate) fn product_unchecked(&self, lower: &BigInt, upper: &BigInt) -> BigInt {
        debug!("Range product over [{}, {}) with threshold {}", lower, upper, self.threshold);
        match &self.pool {
            Some(pool) => pool.install(|| self.split(lower, upper)),
            None => self.split(lower, upper),
        }
    }

    fn split(&self, lower: &BigInt, upper: &BigInt) -> BigInt {
        let fits_threshold = (upper - lower)
            .to_u64()
            .map_or(false, |length| length <= self.threshold);
        if fits_threshold {
            return Self::sequential(lower, upper);
        }

        // Length exceeds the threshold (>= 1), so lower < mid < upper.
        let mid = (lower + upper).div_floor(&BigInt::from(2));
        trace!("Splitting [{}, {}) at {}", lower, upper, mid);

        let (left, right) = rayon::join(
            || self.split(lower, &mid),
            || self.split(&mid, upper),
        );
        left * right
    }

    fn sequential(lower: &BigInt, upper: &BigInt) -> BigInt {
        let mut product = BigInt::one();

        // Fast path: both bounds fit a machine word
        if let (Some(lo), Some(hi)) = (lower.to_i64(), upper.to_i64()) {
            for i in lo..hi {
                product *= i;
            }
            return product;
        }

        let mut i = lower.clone();
        while &i < upper {
            product *= &i;
            i += 1u32;
        }
        product
    }
}

impl Default for RangeProduct {
    fn default() -> Self {
        Self::new()
    }
}

/// [`RangeProduct::compute`] on an engine with the default threshold and
/// rayon's global pool.
pub fn range_product(lower: &BigInt, upper: &BigInt) -> Result<BigInt> {
    RangeProduct::new().compute(lower, upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(engine: &RangeProduct, lower: i64, upper: i64) -> BigInt {
        engine.compute(&BigInt::from(lower), &BigInt::from(upper)).unwrap()
    }

    #[test]
    fn test_ten_factorial() {
        assert_eq!(product(&RangeProduct::new(), 1, 11), BigInt::from(3_628_800));
    }

    #[test]
    fn test_empty_range_is_one() {
        let engine = RangeProduct::new();
        assert_eq!(product(&engine, 5, 5), BigInt::one());
        assert_eq!(product(&engine, 0, 0), BigInt::one());
        assert_eq!(product(&engine, -12, -12), BigInt::one());
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let result = RangeProduct::new().compute(&BigInt::from(9), &BigInt::from(3));
        assert_eq!(
            result,
            Err(EulerError::InvalidRange { lower: BigInt::from(9), upper: BigInt::from(3) })
        );
    }

    #[test]
    fn test_zero_threshold_is_rejected() {
        assert_eq!(RangeProduct::with_threshold(0).unwrap_err(), EulerError::InvalidThreshold);
    }

    #[test]
    fn test_small_threshold_forces_splitting() {
        let engine = RangeProduct::with_threshold(1).unwrap();
        assert_eq!(product(&engine, 1, 11), BigInt::from(3_628_800));
        assert_eq!(product(&engine, 7, 8), BigInt::from(7));
    }

    #[test]
    fn test_negative_bounds() {
        let engine = RangeProduct::with_threshold(2).unwrap();
        // -4 * -3 * -2
        assert_eq!(product(&engine, -4, -1), BigInt::from(-24));
        // crosses zero
        assert_eq!(product(&engine, -3, 2), BigInt::from(0));
    }

    #[test]
    fn test_bounds_beyond_machine_words() {
        let lower = BigInt::from(u64::MAX) * 4u32;
        let upper = &lower + 3u32;
        let expected = &lower * (&lower + 1u32) * (&lower + 2u32);
        assert_eq!(RangeProduct::new().compute(&lower, &upper).unwrap(), expected);
    }

    #[test]
    fn test_dedicated_pool() {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(2).build().unwrap();
        let engine = RangeProduct::with_threshold(16).unwrap().with_pool(Arc::new(pool));
        let reference = product(&RangeProduct::new(), 1, 301);
        assert_eq!(product(&engine, 1, 301), reference);
    }
}
