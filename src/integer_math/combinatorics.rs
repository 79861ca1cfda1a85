// src/integer_math/combinatorics.rs

use log::debug;
use num::BigInt;

use crate::error::{EulerError, Result};
use crate::integer_math::range_product::RangeProduct;

/// Factorials, combinations and permutations expressed as range products.
#[derive(Debug, Clone, Default)]
pub struct Combinatorics {
    product: RangeProduct,
}

impl Combinatorics {
    pub fn new(product: RangeProduct) -> Self {
        Combinatorics { product }
    }

    /// `n!`, i.e. the product over `[1, n + 1)`. `0! = 1`.
    pub fn factorial(&self, n: u64) -> BigInt {
        self.product.product_unchecked(&BigInt::from(1), &(BigInt::from(n) + 1u32))
    }

    /// Factorial of an unbounded integer. Negative input leaves the range
    /// reversed and is reported as [`EulerError::InvalidRange`].
    pub fn factorial_of(&self, n: &BigInt) -> Result<BigInt> {
        self.product.compute(&BigInt::from(1), &(n + 1u32))
    }

    /// `nCr`. Works on the smaller of `r` and `n - r`, dividing the product of
    /// the top `r'` factors of `n!` by `r'!`; the quotient is always exact.
    pub fn combinations(&self, n: u64, r: u64) -> Result<BigInt> {
        if r > n {
            return Err(EulerError::InvalidSelection { n, r });
        }
        let r = r.min(n - r);
        debug!("Computing C({}, {})", n, r);

        let upper = BigInt::from(n) + 1u32;
        let lower = &upper - r;
        let numerator = self.product.product_unchecked(&lower, &upper);
        Ok(numerator / self.factorial(r))
    }

    /// `nPr`, the product over `[n - r + 1, n + 1)`.
    pub fn permutations(&self, n: u64, r: u64) -> Result<BigInt> {
        if r > n {
            return Err(EulerError::InvalidSelection { n, r });
        }
        let upper = BigInt::from(n) + 1u32;
        let lower = &upper - r;
        Ok(self.product.product_unchecked(&lower, &upper))
    }
}

pub fn factorial(n: u64) -> BigInt {
    Combinatorics::default().factorial(n)
}

pub fn combinations(n: u64, r: u64) -> Result<BigInt> {
    Combinatorics::default().combinations(n, r)
}

pub fn permutations(n: u64, r: u64) -> Result<BigInt> {
    Combinatorics::default().permutations(n, r)
}
