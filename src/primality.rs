//! # Primality — Interchangeable Trial-Division Primality Tests
//!
//! Three deterministic tests for `u32` candidates. All three agree on every
//! input; they differ only in how many divisors they try.
//!
//! ## Algorithms
//!
//! 1. **Simple trial division**: every divisor in `[2, ⌊√n⌋]`.
//! 2. **Optimized trial division**: answers {2, 3, 5, 7} directly, rejects
//!    0, 1 and multiples of 2, 3, 5, then tries every divisor from 7.
//! 3. **Wheel factorization (mod 30)**: same short-circuits, then walks the
//!    divisors coprime to 30 using the increment cycle {4,2,4,2,4,6,2,6}
//!    starting at 7. That is 8 divisors per 30 integers, about 73% fewer
//!    than stepping by 1.
//!
//! Every variant stops before the ceiling returned by
//! [`divisor_ceiling`](crate::divisor_ceiling).
//!
//! ## References
//!
//! - <https://en.wikipedia.org/wiki/Trial_division>
//! - <https://en.wikipedia.org/wiki/Wheel_factorization>

use serde::{Deserialize, Serialize};

use crate::{divisor_ceiling, Candidate};

/// Gaps between consecutive integers coprime to 30, starting from 7.
pub const WHEEL_INCREMENTS: [u32; 8] = [4, 2, 4, 2, 4, 6, 2, 6];

/// Which primality test a scan uses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum PrimeTest {
    /// Every divisor from 2 up to the square root.
    #[value(name = "simple")]
    TrialDivisionSimple,
    /// Small-prime short-circuits, then every divisor from 7.
    #[value(name = "optimized")]
    TrialDivisionOptimized,
    /// Small-prime short-circuits, then a mod-30 wheel.
    #[default]
    #[value(name = "wheel")]
    WheelFactorization,
}

impl PrimeTest {
    pub const ALL: [PrimeTest; 3] = [
        PrimeTest::TrialDivisionSimple,
        PrimeTest::TrialDivisionOptimized,
        PrimeTest::WheelFactorization,
    ];

    #[inline]
    pub fn is_prime(self, candidate: Candidate) -> bool {
        match self {
            PrimeTest::TrialDivisionSimple => is_prime_simple(candidate),
            PrimeTest::TrialDivisionOptimized => is_prime_optimized(candidate),
            PrimeTest::WheelFactorization => is_prime_wheel(candidate),
        }
    }

    /// Function pointer form, used by the head-to-head benchmarks.
    pub fn as_fn(self) -> fn(Candidate) -> bool {
        match self {
            PrimeTest::TrialDivisionSimple => is_prime_simple,
            PrimeTest::TrialDivisionOptimized => is_prime_optimized,
            PrimeTest::WheelFactorization => is_prime_wheel,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PrimeTest::TrialDivisionSimple => "trial-division-simple",
            PrimeTest::TrialDivisionOptimized => "trial-division-optimized",
            PrimeTest::WheelFactorization => "wheel-factorization",
        }
    }
}

impl std::fmt::Display for PrimeTest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Try every divisor from 2 below the ceiling.
pub fn is_prime_simple(candidate: Candidate) -> bool {
    if candidate < 2 {
        return false;
    }
    (2..divisor_ceiling(candidate)).all(|divisor| candidate % divisor != 0)
}

/// Shared prefix of the optimized and wheel tests.
///
/// Returns `Some(answer)` when the candidate is settled by the small primes,
/// `None` when it is coprime to 30 and above 7.
#[inline]
fn small_prime_shortcut(candidate: Candidate) -> Option<bool> {
    match candidate {
        2 | 3 | 5 | 7 => Some(true),
        0 | 1 => Some(false),
        _ if candidate % 2 == 0 || candidate % 3 == 0 || candidate % 5 == 0 => Some(false),
        _ => None,
    }
}

/// Short-circuit the smallest primes, then try every divisor from 7.
pub fn is_prime_optimized(candidate: Candidate) -> bool {
    if let Some(answer) = small_prime_shortcut(candidate) {
        return answer;
    }
    (7..divisor_ceiling(candidate)).all(|divisor| candidate % divisor != 0)
}

/// Short-circuit the smallest primes, then step divisors around the mod-30 wheel.
pub fn is_prime_wheel(candidate: Candidate) -> bool {
    if let Some(answer) = small_prime_shortcut(candidate) {
        return answer;
    }
    let ceiling = divisor_ceiling(candidate);
    let mut divisor = 7;
    let mut spoke = 0;
    loop {
        if candidate % divisor == 0 {
            return false;
        }
        divisor += WHEEL_INCREMENTS[spoke];
        if divisor >= ceiling {
            return true;
        }
        spoke = (spoke + 1) % WHEEL_INCREMENTS.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_PRIMES: &[u32] = &[
        2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 49_999, 65_521, 104_729,
        2_147_483_647, 4_294_967_291,
    ];

    const KNOWN_COMPOSITES: &[u32] = &[
        0, 1, 4, 6, 8, 9, 15, 21, 25, 35, 49, 77, 121, 143, 169, 289, 323, 361, 529, 841, 961,
        4_294_967_295, 4_294_967_293, 4_294_967_294, 4_294_049_777,
    ];

    // ── Known Values ───────────────────────────────────────────────

    #[test]
    fn every_variant_accepts_known_primes() {
        for test in PrimeTest::ALL {
            for &p in KNOWN_PRIMES {
                assert!(test.is_prime(p), "{} rejected prime {}", test, p);
            }
        }
    }

    #[test]
    fn every_variant_rejects_known_composites() {
        for test in PrimeTest::ALL {
            for &c in KNOWN_COMPOSITES {
                assert!(!test.is_prime(c), "{} accepted composite {}", test, c);
            }
        }
    }

    /// 0 and 1 are never prime, including for simple trial division whose
    /// divisor loop is empty for 1.
    #[test]
    fn zero_and_one_are_not_prime() {
        for test in PrimeTest::ALL {
            assert!(!test.is_prime(0));
            assert!(!test.is_prime(1));
        }
    }

    // ── Wheel Edges ────────────────────────────────────────────────

    /// Squares of primes just past the wheel's start are where an off-by-one
    /// in the ceiling comparison would show up first.
    #[test]
    fn wheel_rejects_prime_squares() {
        for p in [7u32, 11, 13, 17, 19, 23, 29, 31, 37, 65_521] {
            assert!(!is_prime_wheel(p * p), "wheel accepted {}²", p);
        }
    }

    #[test]
    fn wheel_increments_cover_one_turn() {
        assert_eq!(WHEEL_INCREMENTS.iter().sum::<u32>(), 30);
        let mut divisor = 7;
        for step in WHEEL_INCREMENTS {
            assert_eq!(crate::gcd(divisor, 30), 1, "{} shares a factor with 30", divisor);
            divisor += step;
        }
        assert_eq!(divisor, 37);
    }

    // ── Agreement ──────────────────────────────────────────────────

    #[test]
    fn variants_agree_below_one_hundred_thousand() {
        for n in 0..100_000u32 {
            let simple = is_prime_simple(n);
            assert_eq!(simple, is_prime_optimized(n), "optimized disagrees at {}", n);
            assert_eq!(simple, is_prime_wheel(n), "wheel disagrees at {}", n);
        }
    }

    #[test]
    fn variants_agree_at_top_of_range() {
        for n in (u32::MAX - 2_000)..=u32::MAX {
            let wheel = is_prime_wheel(n);
            assert_eq!(wheel, is_prime_optimized(n), "optimized disagrees at {}", n);
            assert_eq!(wheel, is_prime_simple(n), "simple disagrees at {}", n);
        }
    }

    #[test]
    fn function_pointer_matches_method() {
        for test in PrimeTest::ALL {
            let f = test.as_fn();
            for n in 0..2_000 {
                assert_eq!(f(n), test.is_prime(n));
            }
        }
    }

    #[test]
    fn default_is_wheel() {
        assert_eq!(PrimeTest::default(), PrimeTest::WheelFactorization);
    }
}
