//! # Sieve — Bit-Packed Sieve of Eratosthenes over the u32 Range
//!
//! Self-contained prime discovery: no [`PrimeTest`](crate::PrimeTest) is
//! consulted. The selected [`DigitShape`] still filters what is reported.
//!
//! ## Storage
//!
//! [`CompositeBits`] keeps one "known composite" flag per integer in
//! `[0, bound]`, packed 64 to a `u64` word and addressed by a `u64` position.
//! Covering all of `u32` takes 2^26 words (512 MiB). Word indices stay below
//! 2^26, so a single vector suffices even where `usize` is 32 bits; no
//! lower/upper split of the bit space is needed and the two topmost `u32`
//! values are addressable like any other.
//!
//! ## Algorithm
//!
//! Walk candidates upward from 2. An unset bit at `p` means no prime below
//! `p` divides it, so `p` is prime. Each prime is reported if its digits
//! match, then its multiples from `p²` to the bound are flagged; smaller
//! multiples already carry a smaller factor.
//!
//! `p²` and the running multiple are `u64`. For `p` near 2^32 the square is
//! near 2^64, far beyond `u32`, and the comparison with the bound must see
//! the true value rather than a wrapped one.
//!
//! Complexity: O(n log log n) time, n/8 bytes.

use tracing::debug;

use crate::digits::DigitShape;
use crate::Candidate;

const WORD_BITS: u64 = u64::BITS as u64;

/// Fixed-length bit vector of composite flags.
#[derive(Debug, Clone)]
pub struct CompositeBits {
    words: Vec<u64>,
    len: u64,
}

impl CompositeBits {
    /// All `len` flags start clear.
    pub fn with_len(len: u64) -> Self {
        CompositeBits {
            words: vec![0u64; len.div_ceil(WORD_BITS) as usize],
            len,
        }
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn contains(&self, position: u64) -> bool {
        debug_assert!(position < self.len, "position {} out of range", position);
        self.words[(position / WORD_BITS) as usize] & (1u64 << (position % WORD_BITS)) != 0
    }

    #[inline]
    pub fn insert(&mut self, position: u64) {
        debug_assert!(position < self.len, "position {} out of range", position);
        self.words[(position / WORD_BITS) as usize] |= 1u64 << (position % WORD_BITS);
    }

    /// Number of flags set.
    pub fn count(&self) -> u64 {
        self.words.iter().map(|w| w.count_ones() as u64).sum()
    }

    pub fn heap_bytes(&self) -> usize {
        self.words.len() * std::mem::size_of::<u64>()
    }
}

/// Find every prime in `[2, bound]` whose digits match `shape`, ascending.
pub fn sieve_scan(bound: Candidate, shape: DigitShape) -> Vec<Candidate> {
    let mut results = Vec::new();
    if bound < 2 {
        return results;
    }

    let limit = u64::from(bound);
    let mut composites = CompositeBits::with_len(limit + 1);
    debug!(bound, bytes = composites.heap_bytes(), "sieve allocated");

    for candidate in 2..=bound {
        let step = u64::from(candidate);
        if composites.contains(step) {
            continue;
        }
        if shape.matches(candidate) {
            results.push(candidate);
        }
        let mut multiple = step * step;
        while multiple <= limit {
            composites.insert(multiple);
            multiple += step;
        }
    }

    debug!(bound, found = results.len(), "sieve finished");
    results
}
