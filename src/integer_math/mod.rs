// src/integer_math/mod.rs

pub mod combinatorics;
pub mod digits;
pub mod gcd;
pub mod prime_sieve;
pub mod range_product;

pub use combinatorics::Combinatorics;
pub use gcd::GCD;
pub use prime_sieve::{is_prime_array, primes_up_to, MarkedSieve, PrimeSieve};
pub use range_product::{range_product, RangeProduct, DEFAULT_THRESHOLD};
