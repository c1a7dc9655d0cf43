//! # Scan — Sequential, Lazy and Parallel Candidate Scanners
//!
//! All three scanners walk `[2, bound]` and keep candidates for which
//! [`StrategySelection::matches`] holds (digit shape, then primality).
//!
//! - **Sequential**: one ascending pass into a caller-owned buffer.
//! - **Lazy**: [`LazyScan`], a finite single-pass iterator that computes
//!   each match only when asked, for progressive output on large bounds.
//! - **Parallel**: rayon splits the range across the global pool. Each worker
//!   appends matches to its own shard; shards are concatenated after the join
//!   and sorted once, since completion order across workers is unspecified.
//!   Workers share nothing but the read-only selection.

use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use rayon::prelude::*;
use tracing::debug;

use crate::strategy::StrategySelection;
use crate::{estimate_prime_count, Candidate};

/// Ascending single-threaded scan into `results` (cleared first).
pub fn scan_sequential_into(
    bound: Candidate,
    selection: &StrategySelection,
    results: &mut Vec<Candidate>,
) {
    results.clear();
    results.extend((2..=bound).filter(|&candidate| selection.matches(candidate)));
}

pub fn scan_sequential(bound: Candidate, selection: &StrategySelection) -> Vec<Candidate> {
    let mut results = Vec::new();
    scan_sequential_into(bound, selection, &mut results);
    results
}

/// Fork-join scan over the rayon global pool. Blocks until every worker is done.
pub fn scan_parallel(bound: Candidate, selection: &StrategySelection) -> Vec<Candidate> {
    if bound < 2 {
        return Vec::new();
    }
    let selection = *selection;
    debug!(
        bound,
        threads = rayon::current_num_threads(),
        "parallel scan starting"
    );

    let mut results = (2..=bound)
        .into_par_iter()
        .filter(|&candidate| selection.matches(candidate))
        .fold(Vec::new, |mut shard, candidate| {
            shard.push(candidate);
            shard
        })
        .reduce(Vec::new, |mut merged, mut shard| {
            if merged.is_empty() {
                return shard;
            }
            merged.append(&mut shard);
            merged
        });

    results.sort_unstable();
    debug!(bound, found = results.len(), "parallel scan finished");
    results
}

/// Single-pass, finite iterator over the matches in `[2, bound]`.
///
/// Nothing is buffered: each call to `next` resumes the walk where the last
/// match was found.
#[derive(Debug)]
pub struct LazyScan {
    candidates: RangeInclusive<Candidate>,
    selection: StrategySelection,
}

impl LazyScan {
    pub fn new(bound: Candidate, selection: StrategySelection) -> Self {
        LazyScan {
            candidates: 2..=bound,
            selection,
        }
    }
}

impl Iterator for LazyScan {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        let selection = self.selection;
        self.candidates
            .by_ref()
            .find(|&candidate| selection.matches(candidate))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.candidates.size_hint().1)
    }
}

impl FusedIterator for LazyScan {}

/// Capacity hint for a buffer that will hold the results of scanning `bound`.
pub fn result_capacity_hint(bound: Candidate, selection: &StrategySelection) -> usize {
    match selection.digit_shape {
        crate::DigitShape::AnyPrime => estimate_prime_count(bound),
        // There are 53,156 megaprimes below 2^32.
        _ => 53_156.min(estimate_prime_count(bound)),
    }
}
