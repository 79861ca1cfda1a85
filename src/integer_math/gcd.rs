// src/integer_math/gcd.rs

use num::{BigInt, Integer, One, Signed, Zero};

pub struct GCD;

impl GCD {
    /// Binary GCD of two machine integers. Signs are ignored and
    /// `of(0, x) == |x|`.
    pub fn of(a: i64, b: i64) -> u64 {
        Self::binary_gcd(a.unsigned_abs(), b.unsigned_abs())
    }

    /// GCD of every value in the slice; 0 for an empty slice.
    pub fn of_all(values: &[i64]) -> u64 {
        values.iter().fold(0, |acc, &v| Self::binary_gcd(acc, v.unsigned_abs()))
    }

    fn binary_gcd(mut a: u64, mut b: u64) -> u64 {
        if a == 0 {
            return b;
        }
        if b == 0 {
            return a;
        }

        let common_power = (a | b).trailing_zeros();
        a >>= a.trailing_zeros();
        b >>= b.trailing_zeros();

        // both odd from here on
        while a != b {
            if a > b {
                a -= b;
                a >>= a.trailing_zeros();
            } else {
                b -= a;
                b >>= b.trailing_zeros();
            }
        }

        a << common_power
    }

    pub fn find_gcd_pair(left: &BigInt, right: &BigInt) -> BigInt {
        left.gcd(right)
    }

    pub fn find_gcd(numbers: &[BigInt]) -> BigInt {
        numbers.iter().fold(BigInt::zero(), |acc, x| Self::find_gcd_pair(&acc, x))
    }

    pub fn find_lcm_pair(left: &BigInt, right: &BigInt) -> BigInt {
        if left.is_zero() || right.is_zero() {
            return BigInt::zero();
        }
        let abs_left = left.abs();
        let abs_right = right.abs();
        &(&abs_left * &abs_right) / Self::find_gcd_pair(&abs_left, &abs_right)
    }

    pub fn find_lcm(numbers: &[BigInt]) -> BigInt {
        numbers.iter().fold(BigInt::one(), |acc, x| Self::find_lcm_pair(&acc, x))
    }

    /// Smallest positive number divisible by every integer in `[lower, upper)`.
    pub fn lcm_of_range(lower: u64, upper: u64) -> BigInt {
        (lower..upper).fold(BigInt::one(), |acc, x| Self::find_lcm_pair(&acc, &BigInt::from(x)))
    }

    pub fn are_coprime(numbers: &[BigInt]) -> bool {
        Self::find_gcd(numbers).is_one()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_gcd() {
        assert_eq!(GCD::of(48, 18), 6);
        assert_eq!(GCD::of(17, 5), 1);
        assert_eq!(GCD::of(0, 9), 9);
        assert_eq!(GCD::of(9, 0), 9);
        assert_eq!(GCD::of(0, 0), 0);
        assert_eq!(GCD::of(-24, 36), 12);
        assert_eq!(GCD::of(1 << 20, 1 << 12), 1 << 12);
    }

    #[test]
    fn test_binary_gcd_extreme_values() {
        assert_eq!(GCD::of(i64::MIN, 0), 1u64 << 63);
        assert_eq!(GCD::of(i64::MIN, 6), 2);
    }

    #[test]
    fn test_variadic_gcd() {
        assert_eq!(GCD::of_all(&[12, 18, 30]), 6);
        assert_eq!(GCD::of_all(&[]), 0);
        assert_eq!(GCD::of_all(&[7]), 7);
    }

    #[test]
    fn test_lcm_of_range() {
        assert_eq!(GCD::lcm_of_range(1, 11), BigInt::from(2520));
        assert_eq!(GCD::lcm_of_range(1, 21), BigInt::from(232_792_560));
        assert_eq!(GCD::lcm_of_range(5, 5), BigInt::one());
    }

    #[test]
    fn test_bigint_helpers() {
        let numbers = [BigInt::from(4), BigInt::from(6)];
        assert_eq!(GCD::find_gcd(&numbers), BigInt::from(2));
        assert_eq!(GCD::find_lcm(&numbers), BigInt::from(12));
        assert_eq!(GCD::find_lcm_pair(&BigInt::from(-4), &BigInt::from(6)), BigInt::from(12));
        assert!(GCD::are_coprime(&[BigInt::from(9), BigInt::from(28)]));
        assert!(!GCD::are_coprime(&numbers));
    }
}
