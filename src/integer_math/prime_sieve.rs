// src/integer_math/prime_sieve.rs
//
// Sieve of Eratosthenes over [0, n] backed by a bit vector.
//
// The sieve moves through three states, each consuming the previous one:
//   PrimeSieve (allocated, every index from 2 up a candidate)
//   -> MarkedSieve (composites cleared, bit i set iff i is prime)
//   -> Vec<u64> (compacted ascending prime list)

use bitvec::prelude::*;
use log::debug;
use num::integer::Roots;

use crate::error::{EulerError, Result};

/// Freshly allocated sieve of `bound + 1` bits. Nothing is known about the
/// candidates until [`PrimeSieve::mark`] runs.
pub struct PrimeSieve {
    bits: BitVec,
    bound: usize,
}

/// A sieve whose marking pass has completed: `bits[i]` is set iff `i` is prime.
pub struct MarkedSieve {
    bits: BitVec,
    bound: usize,
}

impl PrimeSieve {
    /// Allocates the candidate array for `[0, n]`, with 0 and 1 cleared.
    pub fn allocate(n: i64) -> Result<Self> {
        let bound = usize::try_from(n).map_err(|_| EulerError::InvalidBound(n))?;
        let size = bound.checked_add(1).ok_or(EulerError::InvalidBound(n))?;

        let mut bits = bitvec![1; size];
        bits.set(0, false);
        if size > 1 {
            bits.set(1, false);
        }

        Ok(PrimeSieve { bits, bound })
    }

    /// Clears every multiple of each surviving `i <= sqrt(n)`, starting at `i * i`.
    pub fn mark(mut self) -> MarkedSieve {
        let limit = self.bound.sqrt();
        debug!("Marking sieve up to {} with base primes through {}", self.bound, limit);

        for i in 2..=limit {
            if !self.bits[i] {
                continue;
            }
            for multiple in (i * i..=self.bound).step_by(i) {
                self.bits.set(multiple, false);
            }
        }

        MarkedSieve {
            bits: self.bits,
            bound: self.bound,
        }
    }
}

impl MarkedSieve {
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Primality lookup; anything above the bound reports `false`.
    pub fn is_prime(&self, k: usize) -> bool {
        k <= self.bound && self.bits[k]
    }

    pub fn prime_count(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn into_bits(self) -> BitVec {
        self.bits
    }

    /// Counting pass sizes the list exactly, then the set indices are copied
    /// out in ascending order.
    pub fn compact(self) -> Vec<u64> {
        let count = self.prime_count();
        let mut primes = Vec::with_capacity(count);
        primes.extend(self.bits.iter_ones().map(|i| i as u64));
        debug!("Compacted {} primes up to {}", primes.len(), self.bound);
        primes
    }
}

/// Runs the marking pass for `[0, n]` and returns the sieve for lookups.
pub fn sieve(n: i64) -> Result<MarkedSieve> {
    Ok(PrimeSieve::allocate(n)?.mark())
}

/// Bit array indexed `0..=n`, set exactly at the primes.
pub fn is_prime_array(n: i64) -> Result<BitVec> {
    Ok(sieve(n)?.into_bits())
}

/// Every prime `<= n` in ascending order. Negative `n` fails with
/// [`EulerError::InvalidBound`]; `n < 2` yields an empty list.
pub fn primes_up_to(n: i64) -> Result<Vec<u64>> {
    Ok(sieve(n)?.compact())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primes_up_to_ten() {
        assert_eq!(primes_up_to(10).unwrap(), vec![2, 3, 5, 7]);
    }

    #[test]
    fn test_small_bounds() {
        assert!(primes_up_to(0).unwrap().is_empty());
        assert!(primes_up_to(1).unwrap().is_empty());
        assert_eq!(primes_up_to(2).unwrap(), vec![2]);
        assert_eq!(primes_up_to(3).unwrap(), vec![2, 3]);
    }

    #[test]
    fn test_negative_bound_is_rejected() {
        assert_eq!(primes_up_to(-1).unwrap_err(), EulerError::InvalidBound(-1));
        assert!(is_prime_array(-50).is_err());
    }

    #[test]
    fn test_perfect_square_bound_is_marked() {
        // 49 = 7 * 7 sits exactly on the sqrt limit
        let marked = sieve(49).unwrap();
        assert!(!marked.is_prime(49));
        assert!(marked.is_prime(47));
        assert_eq!(marked.prime_count(), 15);
    }

    #[test]
    fn test_is_prime_array_layout() {
        let bits = is_prime_array(12).unwrap();
        assert_eq!(bits.len(), 13);
        let set: Vec<usize> = bits.iter_ones().collect();
        assert_eq!(set, vec![2, 3, 5, 7, 11]);
    }

    #[test]
    fn test_lookup_above_bound() {
        let marked = sieve(10).unwrap();
        assert!(!marked.is_prime(11));
        assert_eq!(marked.bound(), 10);
    }
}
