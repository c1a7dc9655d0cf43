pub mod bench;
pub mod digits;
pub mod primality;
pub mod report;
pub mod scan;
pub mod selftest;
pub mod sieve;
pub mod strategy;

pub use digits::DigitShape;
pub use primality::PrimeTest;
pub use strategy::{scan, scan_into, scan_lazy, ScanStrategy, StrategySelection};

/// A value under test. The whole `u32` domain is valid.
pub type Candidate = u32;

/// The decimal digits that are themselves prime.
pub const PRIME_DIGITS: [u32; 4] = [2, 3, 5, 7];

/// Bound used to warm caches and one-time initialisers before a timed run.
pub const WARMUP_BOUND: Candidate = 100;

/// Primality of `candidate` under the chosen test.
#[inline]
pub fn is_prime(candidate: Candidate, test: PrimeTest) -> bool {
    test.is_prime(candidate)
}

/// Whether every digit of `candidate` is prime, under the chosen classifier.
///
/// Only meaningful when `candidate` is already known to be prime.
#[inline]
pub fn is_megaprime_shaped(candidate: Candidate, shape: DigitShape) -> bool {
    shape.matches(candidate)
}

/// True when `digit` (0..=9) is one of {2, 3, 5, 7}.
#[inline]
pub fn is_prime_digit(digit: u32) -> bool {
    matches!(digit, 2 | 3 | 5 | 7)
}

/// Exclusive upper limit for trial divisors: ⌊√n⌋ + 1.
///
/// Computed through `f64`, which represents every `u32` exactly, so perfect
/// squares land on their root. The result never exceeds 65536.
#[inline]
pub fn divisor_ceiling(candidate: Candidate) -> u32 {
    (candidate as f64).sqrt() as u32 + 1
}

/// Greatest common divisor (Euclid).
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Estimate the number of primes up to `n`, used to pre-size result buffers.
///
/// Overestimates slightly (1.3 · n / ln n) so a full-prime scan rarely
/// reallocates. Megaprime scans are far sparser and will over-reserve.
pub fn estimate_prime_count(n: Candidate) -> usize {
    if n < 10 {
        return 4;
    }
    let nf = n as f64;
    (1.3 * nf / nf.ln()) as usize
}
