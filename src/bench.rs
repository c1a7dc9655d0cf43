//! # Bench — Head-to-Head Predicate Timing
//!
//! Times two competing `fn(u32) -> bool` implementations over the candidates
//! `0..runs` and reports which was faster and by how much. Each competitor is
//! warmed up once before timing. This is the quick, in-binary comparison
//! behind the `bench` subcommand; `benches/` holds the criterion suite.

use std::hint::black_box;
use std::time::Instant;

use serde::Serialize;

use crate::digits::DigitShape;
use crate::primality::PrimeTest;
use crate::{Candidate, WARMUP_BOUND};

/// Default iteration count for `bench`.
pub const BENCH_RUNS: u32 = 50_000;

/// Iteration count for `bench --long`.
pub const BENCH_LONG_RUNS: u32 = 1_000_000;

/// A named predicate under test.
#[derive(Debug, Clone, Copy)]
pub struct Competitor {
    pub name: &'static str,
    pub run: fn(Candidate) -> bool,
}

impl Competitor {
    pub fn prime_test(test: PrimeTest) -> Self {
        Competitor {
            name: test.name(),
            run: test.as_fn(),
        }
    }

    pub fn digit_shape(shape: DigitShape) -> Self {
        Competitor {
            name: shape.name(),
            run: shape.as_fn(),
        }
    }

    fn time(&self, runs: u32) -> f64 {
        let start = Instant::now();
        for candidate in 0..runs {
            black_box((self.run)(black_box(candidate)));
        }
        start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Timings for one A-vs-B comparison.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub title: String,
    pub runs: u32,
    pub a: String,
    pub a_ms: f64,
    pub b: String,
    pub b_ms: f64,
}

impl Comparison {
    /// `'A'` or `'B'`; ties go to B.
    pub fn faster(&self) -> char {
        if self.a_ms < self.b_ms {
            'A'
        } else {
            'B'
        }
    }

    /// How much less time the faster competitor took, as a percentage of the
    /// slower one. `None` when the slower one took no measurable time.
    pub fn gain_percent(&self) -> Option<f64> {
        let (fast, slow) = if self.a_ms < self.b_ms {
            (self.a_ms, self.b_ms)
        } else {
            (self.b_ms, self.a_ms)
        };
        (slow > 0.0).then(|| 100.0 * (slow - fast) / slow)
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Benchmark: {}", self.title)?;
        writeln!(
            f,
            "A: {} for {} iterations took {:.4} ms",
            self.a, self.runs, self.a_ms
        )?;
        writeln!(
            f,
            "B: {} for {} iterations took {:.4} ms",
            self.b, self.runs, self.b_ms
        )?;
        match self.gain_percent() {
            Some(gain) => write!(f, "{} was {:.3}% faster", self.faster(), gain),
            None => write!(f, "{} was equal", self.faster()),
        }
    }
}

/// Warm up both competitors, then time A and B over `0..runs`.
///
/// With `flip`, B runs first and is labelled A.
pub fn compare(
    title: &str,
    runs: u32,
    a: Competitor,
    b: Competitor,
    flip: bool,
) -> Comparison {
    black_box((a.run)(WARMUP_BOUND));
    black_box((b.run)(WARMUP_BOUND));

    let (a, b) = if flip { (b, a) } else { (a, b) };
    let a_ms = a.time(runs);
    let b_ms = b.time(runs);

    Comparison {
        title: title.to_string(),
        runs,
        a: a.name.to_string(),
        a_ms,
        b: b.name.to_string(),
        b_ms,
    }
}

/// The comparisons run by `bench`.
pub fn standard_pairs() -> Vec<(&'static str, Competitor, Competitor)> {
    vec![
        (
            "digit shape textual vs numerical",
            Competitor::digit_shape(DigitShape::Textual),
            Competitor::digit_shape(DigitShape::Numerical),
        ),
        (
            "trial division simple vs optimized",
            Competitor::prime_test(PrimeTest::TrialDivisionSimple),
            Competitor::prime_test(PrimeTest::TrialDivisionOptimized),
        ),
        (
            "trial division simple vs wheel factorization",
            Competitor::prime_test(PrimeTest::TrialDivisionSimple),
            Competitor::prime_test(PrimeTest::WheelFactorization),
        ),
    ]
}

/// Run every standard pair.
pub fn run_standard(runs: u32, flip: bool) -> Vec<Comparison> {
    standard_pairs()
        .into_iter()
        .map(|(title, a, b)| compare(title, runs, a, b, flip))
        .collect()
}
