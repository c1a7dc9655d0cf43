//! # Self-Test — Known Answers and Cross-Strategy Diffs
//!
//! Runtime correctness checks exposed through the `check` and `diff`
//! subcommands, so a build can be validated on the machine it runs on.
//!
//! - [`run_known_cases`] scans a fixed set of bounds with the caller's
//!   selection and compares against hard-coded answers. Megaprime answers
//!   are used unless the selection is in plain-prime mode.
//! - [`diff_scan_against_sieve`] runs the parallel wheel scan and the sieve
//!   over the same bound and reports values only one of them found.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::digits::DigitShape;
use crate::primality::PrimeTest;
use crate::sieve::sieve_scan;
use crate::strategy::{scan, ScanStrategy, StrategySelection};
use crate::Candidate;

/// A bound and the exact sequence any strategy must return for it.
#[derive(Debug, Clone, Copy)]
pub struct KnownCase {
    pub bound: Candidate,
    pub expected: &'static [Candidate],
}

const MEGAPRIMES_TO_3000: &[Candidate] = &[
    2, 3, 5, 7, 23, 37, 53, 73, 223, 227, 233, 257, 277, 337, 353, 373, 523, 557, 577, 727, 733,
    757, 773, 2237, 2273, 2333, 2357, 2377, 2557, 2753, 2777,
];

const MEGAPRIMES_TO_9001: &[Candidate] = &[
    2, 3, 5, 7, 23, 37, 53, 73, 223, 227, 233, 257, 277, 337, 353, 373, 523, 557, 577, 727, 733,
    757, 773, 2237, 2273, 2333, 2357, 2377, 2557, 2753, 2777, 3253, 3257, 3323, 3373, 3527, 3533,
    3557, 3727, 3733, 5227, 5233, 5237, 5273, 5323, 5333, 5527, 5557, 5573, 5737, 7237, 7253,
    7333, 7523, 7537, 7573, 7577, 7723, 7727, 7753, 7757,
];

const PRIMES_TO_100: &[Candidate] = &[
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

pub static MEGAPRIME_CASES: [KnownCase; 7] = [
    KnownCase { bound: 10, expected: &[2, 3, 5, 7] },
    KnownCase { bound: 37, expected: &[2, 3, 5, 7, 23, 37] },
    KnownCase { bound: 1, expected: &[] },
    KnownCase { bound: 2, expected: &[2] },
    KnownCase { bound: 3, expected: &[2, 3] },
    KnownCase { bound: 3000, expected: MEGAPRIMES_TO_3000 },
    KnownCase { bound: 9001, expected: MEGAPRIMES_TO_9001 },
];

pub static PRIME_CASES: [KnownCase; 6] = [
    KnownCase { bound: 10, expected: &[2, 3, 5, 7] },
    KnownCase { bound: 37, expected: &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37] },
    KnownCase { bound: 1, expected: &[] },
    KnownCase { bound: 2, expected: &[2] },
    KnownCase { bound: 3, expected: &[2, 3] },
    KnownCase { bound: 100, expected: PRIMES_TO_100 },
];

/// The case table that applies to `shape`.
pub fn known_cases(shape: DigitShape) -> &'static [KnownCase] {
    match shape {
        DigitShape::AnyPrime => &PRIME_CASES,
        _ => &MEGAPRIME_CASES,
    }
}

/// Result of one known-answer case. `index` is 1-based.
#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    pub index: usize,
    pub bound: Candidate,
    pub passed: bool,
    pub expected: Vec<Candidate>,
    pub actual: Vec<Candidate>,
}

pub fn run_known_cases(selection: &StrategySelection) -> Vec<CaseOutcome> {
    known_cases(selection.digit_shape)
        .iter()
        .enumerate()
        .map(|(i, case)| {
            let actual = scan(case.bound, selection);
            CaseOutcome {
                index: i + 1,
                bound: case.bound,
                passed: actual == case.expected,
                expected: case.expected.to_vec(),
                actual,
            }
        })
        .collect()
}

/// Set difference between the wheel scan and the sieve for one bound.
#[derive(Debug, Clone, Serialize)]
pub struct SieveDiff {
    pub bound: Candidate,
    pub scan_count: usize,
    pub sieve_count: usize,
    pub scan_only: Vec<Candidate>,
    pub sieve_only: Vec<Candidate>,
}

impl SieveDiff {
    pub fn is_clean(&self) -> bool {
        self.scan_only.is_empty() && self.sieve_only.is_empty()
    }
}

/// Parallel wheel scan vs sieve, both with the numerical digit filter.
pub fn diff_scan_against_sieve(bound: Candidate) -> SieveDiff {
    let selection = StrategySelection::new(
        PrimeTest::WheelFactorization,
        DigitShape::Numerical,
        ScanStrategy::Parallel,
    );
    let scanned: BTreeSet<Candidate> = scan(bound, &selection).into_iter().collect();
    let sieved: BTreeSet<Candidate> = sieve_scan(bound, DigitShape::Numerical)
        .into_iter()
        .collect();

    SieveDiff {
        bound,
        scan_count: scanned.len(),
        sieve_count: sieved.len(),
        scan_only: scanned.difference(&sieved).copied().collect(),
        sieve_only: sieved.difference(&scanned).copied().collect(),
    }
}
