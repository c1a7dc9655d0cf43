//! # Digits — Megaprime Digit-Shape Classification
//!
//! Decides whether every decimal digit of a candidate is a prime digit
//! (2, 3, 5 or 7). Callers only ask this of values already known to be prime;
//! the answer for composites is meaningless and never consulted.
//!
//! Two equivalent implementations are kept side by side for benchmarking:
//! repeated division by 10 (no allocation) and decimal rendering (allocates a
//! `String`). A third, pass-through variant accepts everything, which turns
//! every scanner into a plain prime finder.

use serde::{Deserialize, Serialize};

use crate::{is_prime_digit, Candidate};

/// Which digit-shape filter a scan applies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum DigitShape {
    /// Peel digits off with `% 10` and `/ 10`.
    #[default]
    Numerical,
    /// Render to decimal text and inspect each character.
    Textual,
    /// Accept every candidate: find primes rather than megaprimes.
    #[value(name = "any")]
    AnyPrime,
}

impl DigitShape {
    #[inline]
    pub fn matches(self, candidate: Candidate) -> bool {
        match self {
            DigitShape::Numerical => is_megaprime_shaped_numerical(candidate),
            DigitShape::Textual => is_megaprime_shaped_textual(candidate),
            DigitShape::AnyPrime => true,
        }
    }

    pub fn as_fn(self) -> fn(Candidate) -> bool {
        match self {
            DigitShape::Numerical => is_megaprime_shaped_numerical,
            DigitShape::Textual => is_megaprime_shaped_textual,
            DigitShape::AnyPrime => accept_any,
        }
    }

    /// Noun for what a scan with this filter finds.
    pub fn noun(self) -> &'static str {
        match self {
            DigitShape::AnyPrime => "primes",
            _ => "Megaprimes",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DigitShape::Numerical => "numerical",
            DigitShape::Textual => "textual",
            DigitShape::AnyPrime => "any",
        }
    }
}

impl std::fmt::Display for DigitShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Pass-through filter for plain prime mode.
pub fn accept_any(_candidate: Candidate) -> bool {
    true
}

/// Check digits least-significant first. 0 has the single digit 0.
pub fn is_megaprime_shaped_numerical(mut candidate: Candidate) -> bool {
    loop {
        if !is_prime_digit(candidate % 10) {
            return false;
        }
        candidate /= 10;
        if candidate == 0 {
            return true;
        }
    }
}

/// Same answer as [`is_megaprime_shaped_numerical`], via the decimal string.
pub fn is_megaprime_shaped_textual(candidate: Candidate) -> bool {
    candidate
        .to_string()
        .bytes()
        .all(|b| matches!(b, b'2' | b'3' | b'5' | b'7'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numerical_accepts_prime_digit_values() {
        for n in [2u32, 3, 5, 7, 23, 37, 2237, 3_777_777_557, 2_222_222_222] {
            assert!(is_megaprime_shaped_numerical(n), "rejected {}", n);
        }
    }

    #[test]
    fn numerical_rejects_any_non_prime_digit() {
        for n in [0u32, 1, 4, 11, 13, 29, 31, 207, 2_000_000_002, u32::MAX] {
            assert!(!is_megaprime_shaped_numerical(n), "accepted {}", n);
        }
    }

    /// A zero anywhere, including a trailing zero, disqualifies the value.
    #[test]
    fn interior_and_trailing_zeros_are_rejected() {
        assert!(!is_megaprime_shaped_numerical(2027));
        assert!(!is_megaprime_shaped_numerical(2370));
        assert!(!is_megaprime_shaped_textual(2027));
        assert!(!is_megaprime_shaped_textual(2370));
    }

    #[test]
    fn textual_and_numerical_agree() {
        for n in 0..200_000u32 {
            assert_eq!(
                is_megaprime_shaped_numerical(n),
                is_megaprime_shaped_textual(n),
                "classifiers disagree at {}",
                n
            );
        }
    }

    #[test]
    fn any_prime_accepts_everything() {
        for n in [0u32, 1, 10, 11, 4_000_000_000] {
            assert!(DigitShape::AnyPrime.matches(n));
            assert!(DigitShape::AnyPrime.as_fn()(n));
        }
    }

    #[test]
    fn noun_distinguishes_plain_prime_mode() {
        assert_eq!(DigitShape::Numerical.noun(), "Megaprimes");
        assert_eq!(DigitShape::Textual.noun(), "Megaprimes");
        assert_eq!(DigitShape::AnyPrime.noun(), "primes");
    }
}
