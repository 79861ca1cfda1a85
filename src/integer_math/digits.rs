// src/integer_math/digits.rs

use num::BigInt;

/// Sum of the decimal digits of `n`; the sign is ignored.
pub fn digit_sum(n: &BigInt) -> u64 {
    n.magnitude()
        .to_radix_le(10)
        .iter()
        .map(|&d| u64::from(d))
        .sum()
}

/// Number of decimal digits in `n` (zero has one digit).
pub fn digit_count(n: &BigInt) -> usize {
    n.magnitude().to_str_radix(10).len()
}
