//! # Strategy — Explicit Algorithm Selection and Scan Dispatch
//!
//! A [`StrategySelection`] names the primality test, the digit-shape filter
//! and the scan strategy for one invocation. It is a plain `Copy` value built
//! once by the caller and passed down; workers only ever read it.
//!
//! ## Strategies
//!
//! | Strategy | Uses `PrimeTest` | Threads |
//! |---|---|---|
//! | `Sequential` | yes | 1 |
//! | `Parallel` | yes | rayon pool |
//! | `Sieve` | no (finds primes itself) | 1 |
//!
//! Every strategy returns the same ascending, duplicate-free sequence for the
//! same bound and digit filter.

use serde::{Deserialize, Serialize};

use crate::digits::DigitShape;
use crate::primality::PrimeTest;
use crate::scan::{self, LazyScan};
use crate::sieve;
use crate::Candidate;

/// How candidates in `[2, bound]` are enumerated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ScanStrategy {
    /// Single-threaded ascending scan.
    #[value(alias = "scan")]
    Sequential,
    /// Rayon data-parallel scan, sorted after the join.
    #[default]
    #[value(alias = "par")]
    Parallel,
    /// Bit-packed sieve of Eratosthenes.
    Sieve,
}

impl ScanStrategy {
    pub fn name(self) -> &'static str {
        match self {
            ScanStrategy::Sequential => "sequential",
            ScanStrategy::Parallel => "parallel",
            ScanStrategy::Sieve => "sieve",
        }
    }

    /// Whether this strategy consults the selected [`PrimeTest`].
    pub fn uses_prime_test(self) -> bool {
        !matches!(self, ScanStrategy::Sieve)
    }
}

impl std::fmt::Display for ScanStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The active algorithm variants for one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StrategySelection {
    pub prime_test: PrimeTest,
    pub digit_shape: DigitShape,
    pub strategy: ScanStrategy,
}

impl StrategySelection {
    pub fn new(prime_test: PrimeTest, digit_shape: DigitShape, strategy: ScanStrategy) -> Self {
        StrategySelection {
            prime_test,
            digit_shape,
            strategy,
        }
    }

    pub fn with_strategy(self, strategy: ScanStrategy) -> Self {
        StrategySelection { strategy, ..self }
    }

    pub fn with_digit_shape(self, digit_shape: DigitShape) -> Self {
        StrategySelection {
            digit_shape,
            ..self
        }
    }

    /// Digit shape first, then primality: the digit check is O(log n) while
    /// trial division is O(√n), and most candidates fail the cheap check.
    #[inline]
    pub fn matches(&self, candidate: Candidate) -> bool {
        self.digit_shape.matches(candidate) && self.prime_test.is_prime(candidate)
    }

    /// `Mode <strategy> [<prime test>]`, the header printed before a timed scan.
    pub fn mode_line(&self) -> String {
        if self.strategy.uses_prime_test() {
            format!("Mode {} {}", self.strategy, self.prime_test)
        } else {
            format!("Mode {}", self.strategy)
        }
    }
}

/// Scan `[2, bound]` with the selected strategy into a fresh vector.
pub fn scan(bound: Candidate, selection: &StrategySelection) -> Vec<Candidate> {
    let mut results = Vec::new();
    scan_into(bound, selection, &mut results);
    results
}

/// Scan `[2, bound]` into `results`, replacing whatever it held.
///
/// The buffer's capacity is kept, so repeated scans can reuse one allocation.
pub fn scan_into(bound: Candidate, selection: &StrategySelection, results: &mut Vec<Candidate>) {
    match selection.strategy {
        ScanStrategy::Sequential => scan::scan_sequential_into(bound, selection, results),
        ScanStrategy::Parallel => {
            results.clear();
            results.extend(scan::scan_parallel(bound, selection));
        }
        ScanStrategy::Sieve => {
            results.clear();
            results.extend(sieve::sieve_scan(bound, selection.digit_shape));
        }
    }
}

/// Lazily yield matches in ascending order.
///
/// Always sequential: the selected `strategy` is ignored, while the prime test
/// and digit filter apply as usual.
pub fn scan_lazy(bound: Candidate, selection: StrategySelection) -> LazyScan {
    LazyScan::new(bound, selection)
}
