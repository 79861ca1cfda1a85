// tests/range_product_tests.rs
//
// Integration tests for the fork/join range multiplier: factorial agreement,
// split invariance, the empty-range law and threshold independence.

use num::{BigInt, One};
use euler_core::integer_math::digits::digit_sum;
use euler_core::integer_math::range_product::{range_product, RangeProduct};
use euler_core::EulerError;

#[cfg(test)]
mod range_product_tests {
    use super::*;

    fn recursive_factorial(n: u64) -> BigInt {
        if n == 0 {
            BigInt::one()
        } else {
            BigInt::from(n) * recursive_factorial(n - 1)
        }
    }

    fn product(lower: i64, upper: i64) -> BigInt {
        range_product(&BigInt::from(lower), &BigInt::from(upper)).unwrap()
    }

    #[test]
    fn test_matches_recursive_factorial() {
        for n in 0..=60u64 {
            let computed = range_product(&BigInt::from(1), &BigInt::from(n + 1)).unwrap();
            assert_eq!(computed, recursive_factorial(n), "mismatch at {}!", n);
        }
    }

    #[test]
    fn test_concrete_scenarios() {
        assert_eq!(product(1, 11), BigInt::from(3_628_800));
        assert_eq!(product(5, 5), BigInt::one());
    }

    #[test]
    fn test_hundred_factorial_digit_sum() {
        assert_eq!(digit_sum(&product(1, 101)), 648);
    }

    #[test]
    fn test_split_invariance_at_arbitrary_points() {
        let (lower, upper) = (3i64, 140i64);
        let whole = product(lower, upper);
        for mid in [3, 4, 17, 71, 100, 139, 140] {
            assert_eq!(
                whole,
                product(lower, mid) * product(mid, upper),
                "split at {} changed the product",
                mid
            );
        }
    }

    #[test]
    fn test_empty_range_law() {
        for k in [-1_000i64, -1, 0, 1, 42, 1_000_000] {
            assert_eq!(product(k, k), BigInt::one());
        }
    }

    #[test]
    fn test_threshold_does_not_change_result() {
        let lower = BigInt::from(1);
        let upper = BigInt::from(3_001);
        let reference = RangeProduct::new().compute(&lower, &upper).unwrap();

        for threshold in [1u64, 2, 3, 7, 64, 999, 3_000, 3_001, u64::MAX] {
            let engine = RangeProduct::with_threshold(threshold).unwrap();
            assert_eq!(
                engine.compute(&lower, &upper).unwrap(),
                reference,
                "threshold {} changed the product",
                threshold
            );
        }
    }

    #[test]
    fn test_large_range_splits_above_default_threshold() {
        // 25_000 elements forces at least two levels of splitting at the default
        let lower = BigInt::from(1);
        let upper = BigInt::from(25_001);
        let parallel = RangeProduct::new().compute(&lower, &upper).unwrap();
        let sequential = RangeProduct::with_threshold(u64::MAX).unwrap().compute(&lower, &upper).unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_reversed_range_fails_fast() {
        let err = range_product(&BigInt::from(11), &BigInt::from(1)).unwrap_err();
        assert_eq!(err, EulerError::InvalidRange { lower: BigInt::from(11), upper: BigInt::from(1) });
    }
}
