//! Implementation of finite continued fractions over [RationalNumber]

use super::block::Block;
use crate::error::RationalError;
use crate::rational::RationalNumber;
use core::str::FromStr;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::fmt;

/// This struct represents a finite continued fraction `a0 + 1/(a1 + 1/(a2 + ...))`.
///
/// The first term is the integer part, the following terms are the denominators of the
/// fractional part. Terms are whole numbers, except that the expansion of NaN or an
/// infinity is the single term `[NaN]`.
///
/// `PartialEq` compares terms by value, so two `[NaN]` fractions are never equal.
#[derive(Clone, Debug, PartialEq)]
pub struct FiniteContinuedFraction {
    terms: Vec<RationalNumber>, // never empty
}

impl FiniteContinuedFraction {
    /// Expand a rational number with the euclidean algorithm
    pub fn value_of(x: &RationalNumber) -> Self {
        if !x.is_finite() {
            return Self::nan();
        }

        let mut terms = Vec::new();
        let mut rest = x.clone();
        loop {
            let a = rest.floor();
            let remainder = &rest - &a;
            terms.push(a);
            if remainder.is_zero() {
                break;
            }
            rest = remainder.recip();
        }
        FiniteContinuedFraction { terms }
    }

    /// Create a continued fraction from explicit terms. The terms are stored as they are,
    /// so the result is not necessarily the canonical expansion of its value.
    pub fn new<T, I>(integer_part: T, fractional_terms: I) -> Self
    where
        T: Into<BigInt>,
        I: IntoIterator,
        I::Item: Into<BigInt>,
    {
        let mut terms = vec![RationalNumber::from_integer(integer_part)];
        terms.extend(fractional_terms.into_iter().map(RationalNumber::from_integer));
        FiniteContinuedFraction { terms }
    }

    #[inline]
    fn nan() -> Self {
        FiniteContinuedFraction { terms: vec![RationalNumber::NAN] }
    }

    #[inline]
    pub fn terms(&self) -> &[RationalNumber] {
        &self.terms[..]
    }

    #[inline]
    pub fn integer_part(&self) -> &RationalNumber {
        &self.terms[0]
    }

    #[inline]
    pub fn fractional_terms(&self) -> &[RationalNumber] {
        &self.terms[1..]
    }

    /// False only for the expansion of NaN and the infinities
    #[inline]
    pub fn is_finite(&self) -> bool {
        !(self.terms.len() == 1 && self.terms[0].is_nan())
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.terms.len() == 1 && self.is_finite()
    }

    /// Check that every fractional term has numerator one
    pub fn is_simple(&self) -> bool {
        self.fractional_terms().iter().all(|t| t.numer().is_one())
    }

    /// Return the continued fraction of the reciprocal,
    /// `1/[a0; a1, ..] = [0; a0, a1, ..]` and `1/[0; a1, a2, ..] = [a1; a2, ..]`
    pub fn recip(&self) -> Self {
        if !self.is_finite() {
            return Self::nan();
        }

        if self.integer_part().is_zero() {
            if self.terms.len() == 1 {
                // 1/0
                return Self::nan();
            }
            FiniteContinuedFraction { terms: self.terms[1..].to_vec() }
        } else {
            let mut terms = Vec::with_capacity(self.terms.len() + 1);
            terms.push(RationalNumber::ZERO);
            terms.extend_from_slice(&self.terms);
            FiniteContinuedFraction { terms }
        }
    }

    /// Evaluate the continued fraction. The expansion of an infinity evaluates to NaN.
    pub fn to_rational(&self) -> RationalNumber {
        if !self.is_finite() {
            return RationalNumber::NAN;
        }

        let mut iter = self.terms.iter().rev();
        let mut acc = match iter.next() {
            Some(last) => last.clone(),
            None => return RationalNumber::NAN,
        };
        for a in iter {
            acc = a + &acc.recip();
        }
        acc
    }

    /// Returns an iterator of the convergents `[a0]`, `[a0; a1]`, `[a0; a1, a2]`, ..
    /// The iterator is empty for the expansion of NaN and the infinities.
    pub fn convergents(&self) -> Convergents<'_> {
        let terms: &[RationalNumber] = if self.is_finite() { &self.terms[..] } else { &[] };
        Convergents { terms: terms.iter(), block: Block::identity() }
    }
}

/// Iterator of convergents of a [FiniteContinuedFraction]
#[derive(Debug, Clone)]
pub struct Convergents<'a> {
    terms: std::slice::Iter<'a, RationalNumber>,
    block: Block<BigInt>,
}

impl<'a> Iterator for Convergents<'a> {
    type Item = RationalNumber;

    fn next(&mut self) -> Option<RationalNumber> {
        // terms of a finite expansion are whole numbers
        let a = self.terms.next()?;
        let (p, q) = self.block.advance(&a.numer());
        Some(RationalNumber::new(p, q))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.terms.size_hint()
    }
}

impl<'a> ExactSizeIterator for Convergents<'a> {}

impl From<&RationalNumber> for FiniteContinuedFraction {
    #[inline]
    fn from(x: &RationalNumber) -> Self {
        Self::value_of(x)
    }
}

impl From<&FiniteContinuedFraction> for RationalNumber {
    #[inline]
    fn from(cf: &FiniteContinuedFraction) -> Self {
        cf.to_rational()
    }
}

impl fmt::Display for FiniteContinuedFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{};", self.integer_part())?;
        let mut iter = self.fractional_terms().iter();
        if let Some(v) = iter.next() {
            write!(f, " {}", v)?;
            for v in iter {
                write!(f, ", {}", v)?;
            }
        }
        write!(f, "]")
    }
}

impl FromStr for FiniteContinuedFraction {
    type Err = RationalError;

    /// Parse from the display format (like 355/113 = "[3; 7, 16]", 3 = "[3;]")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || RationalError::Parse { input: s.to_string() };
        let body = s
            .trim()
            .strip_prefix('[')
            .and_then(|t| t.strip_suffix(']'))
            .ok_or_else(parse_err)?;
        let (head, tail) = match body.split_once(';') {
            Some((h, t)) => (h, t),
            None => (body, ""),
        };

        let integer_part: RationalNumber = head.parse().map_err(|_| parse_err())?;
        if integer_part.is_nan() {
            return if tail.trim().is_empty() { Ok(Self::nan()) } else { Err(parse_err()) };
        }

        let mut terms = vec![integer_part];
        if !tail.trim().is_empty() {
            for t in tail.split(',') {
                terms.push(t.parse().map_err(|_| parse_err())?);
            }
        }
        if !terms.iter().all(RationalNumber::is_integer) {
            return Err(parse_err());
        }
        Ok(FiniteContinuedFraction { terms })
    }
}
