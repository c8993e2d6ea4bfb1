//! Ranges of rational numbers advancing by a fixed step

use super::RationalNumber;
use crate::error::RationalError;
use core::cmp::Ordering;
use core::iter::FusedIterator;
use num_traits::Zero;

/// A reusable description of `start..=end` with a step (one by default).
/// Each call of [RationalRange::iter] hands out a fresh [Progression].
#[derive(Clone, Debug)]
pub struct RationalRange {
    start: RationalNumber,
    end: RationalNumber,
    step: RationalNumber,
}

impl RationalRange {
    #[inline]
    pub fn new(start: RationalNumber, end: RationalNumber) -> Self {
        RationalRange {
            start,
            end,
            step: RationalNumber::ONE,
        }
    }

    /// Replace the step of the range
    #[inline]
    pub fn step<S: Into<RationalNumber>>(self, step: S) -> Self {
        RationalRange {
            step: step.into(),
            ..self
        }
    }

    #[inline]
    pub fn start(&self) -> &RationalNumber {
        &self.start
    }

    #[inline]
    pub fn end(&self) -> &RationalNumber {
        &self.end
    }

    #[inline]
    pub fn step_size(&self) -> &RationalNumber {
        &self.step
    }

    /// Start a new pass over the range.
    ///
    /// # Errors
    /// [RationalError::InvalidProgression] if the step is zero or any of
    /// start, end and step is NaN.
    #[inline]
    pub fn iter(&self) -> Result<Progression, RationalError> {
        Progression::new(self.start.clone(), self.end.clone(), self.step.clone())
    }
}

impl RationalNumber {
    /// Create the range `self..=end` stepping by one
    #[inline]
    pub fn range_to(&self, end: &RationalNumber) -> RationalRange {
        RationalRange::new(self.clone(), end.clone())
    }
}

/// Lazy iterator over a [RationalRange].
///
/// The end is included when it is hit exactly. Comparisons use
/// [RationalNumber::total_cmp], so a progression heading towards an infinite
/// end with a finite step never terminates.
#[derive(Clone, Debug)]
pub struct Progression {
    next: Option<RationalNumber>,
    end: RationalNumber,
    step: RationalNumber,
    ascending: bool,
}

impl Progression {
    pub fn new(
        start: RationalNumber,
        end: RationalNumber,
        step: RationalNumber,
    ) -> Result<Self, RationalError> {
        if step.is_zero() {
            return Err(RationalError::InvalidProgression {
                reason: "step must be non-zero",
            });
        }
        if start.is_nan() || end.is_nan() || step.is_nan() {
            return Err(RationalError::InvalidProgression {
                reason: "bounds and step must not be NaN",
            });
        }

        let ascending = step.total_cmp(&RationalNumber::ZERO) == Ordering::Greater;
        Ok(Progression {
            next: Some(start),
            end,
            step,
            ascending,
        })
    }
}

impl Iterator for Progression {
    type Item = RationalNumber;

    fn next(&mut self) -> Option<RationalNumber> {
        let current = self.next.take()?;
        let past_end = if self.ascending {
            Ordering::Greater
        } else {
            Ordering::Less
        };
        if current.total_cmp(&self.end) == past_end {
            return None;
        }

        self.next = Some(&current + &self.step);
        Some(current)
    }
}

impl FusedIterator for Progression {}
