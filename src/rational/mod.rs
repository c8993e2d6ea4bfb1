//! Implementation of exact rational numbers extended with signed infinities and NaN

mod ops;
mod progression;

pub use progression::*;

use crate::error::RationalError;
use core::cmp::Ordering;
use core::convert::TryFrom;
use core::str::FromStr;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{FromPrimitive, One, Signed, ToPrimitive, Zero};
use std::borrow::Cow;
use std::fmt;

/// Tags of the five canonical values of [RationalNumber]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Special {
    Zero,
    One,
    NaN,
    PositiveInfinity,
    NegativeInfinity,
}

impl Special {
    /// Numerator and denominator encoded by the tag
    fn parts(self) -> (i8, i8) {
        match self {
            Special::Zero => (0, 1),
            Special::One => (1, 1),
            Special::NaN => (0, 0),
            Special::PositiveInfinity => (1, 0),
            Special::NegativeInfinity => (-1, 0),
        }
    }

    #[inline]
    fn is_finite(self) -> bool {
        matches!(self, Special::Zero | Special::One)
    }
}

#[derive(Clone, Debug)]
enum Repr {
    Special(Special),
    // denom > 1 or numer not in {0, 1}, always reduced
    Finite { numer: BigInt, denom: BigInt },
}

/// An exact rational number `numer / denom` backed by [BigInt].
///
/// A zero denominator is not an error: it encodes [NAN][RationalNumber::NAN] (`0/0`),
/// [POSITIVE_INFINITY][RationalNumber::POSITIVE_INFINITY] (`1/0`) and
/// [NEGATIVE_INFINITY][RationalNumber::NEGATIVE_INFINITY] (`-1/0`). Together with
/// [ZERO][RationalNumber::ZERO] and [ONE][RationalNumber::ONE] these are the canonical
/// values, and every constructor returns them whenever the value matches.
///
/// Note that [Eq] and [Ord] are not implemented. Value equality (`==`) never holds for
/// NaN and the infinities, not even against themselves. Use [RationalNumber::is_identical]
/// or the `is_*` predicates to detect them, and [RationalNumber::total_cmp] for sorting.
#[derive(Clone, Debug)]
pub struct RationalNumber(Repr);

impl RationalNumber {
    pub const ZERO: RationalNumber = RationalNumber(Repr::Special(Special::Zero));
    pub const ONE: RationalNumber = RationalNumber(Repr::Special(Special::One));
    pub const NAN: RationalNumber = RationalNumber(Repr::Special(Special::NaN));
    pub const POSITIVE_INFINITY: RationalNumber =
        RationalNumber(Repr::Special(Special::PositiveInfinity));
    pub const NEGATIVE_INFINITY: RationalNumber =
        RationalNumber(Repr::Special(Special::NegativeInfinity));

    /// Create a rational number `numer / denom`, reduced to lowest terms.
    ///
    /// A zero denominator produces NaN or a signed infinity instead of failing.
    #[inline]
    pub fn new<N: Into<BigInt>, D: Into<BigInt>>(numer: N, denom: D) -> Self {
        Self::from_parts(numer.into(), denom.into())
    }

    /// Create a whole number
    #[inline]
    pub fn from_integer<T: Into<BigInt>>(t: T) -> Self {
        Self::from_parts(t.into(), BigInt::one())
    }

    // The only place where a RationalNumber is built from raw integers
    pub(crate) fn from_parts(mut numer: BigInt, mut denom: BigInt) -> Self {
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }

        let g = numer.gcd(&denom);
        if !g.is_zero() && !g.is_one() {
            numer = numer / &g;
            denom = denom / g;
        }

        if denom.is_zero() {
            // gcd(n, 0) = |n|, so the numerator is already one of -1, 0, 1 here
            return match numer.sign() {
                Sign::NoSign => Self::NAN,
                Sign::Plus => Self::POSITIVE_INFINITY,
                Sign::Minus => Self::NEGATIVE_INFINITY,
            };
        }
        if numer.is_zero() {
            return Self::ZERO;
        }
        if numer.is_one() && denom.is_one() {
            return Self::ONE;
        }

        RationalNumber(Repr::Finite { numer, denom })
    }

    /// Create a rational number with the exact value of a float.
    /// NaN and infinite floats map to their rational counterparts.
    pub fn from_float(f: f64) -> Self {
        if f.is_nan() {
            Self::NAN
        } else if f.is_infinite() {
            if f > 0. {
                Self::POSITIVE_INFINITY
            } else {
                Self::NEGATIVE_INFINITY
            }
        } else {
            Ratio::<BigInt>::from_float(f).map_or(Self::NAN, Self::from)
        }
    }

    /// Numerator and denominator, borrowed for ordinary values
    pub(crate) fn parts(&self) -> (Cow<'_, BigInt>, Cow<'_, BigInt>) {
        match &self.0 {
            Repr::Special(s) => {
                let (n, d) = s.parts();
                (Cow::Owned(BigInt::from(n)), Cow::Owned(BigInt::from(d)))
            }
            Repr::Finite { numer, denom } => (Cow::Borrowed(numer), Cow::Borrowed(denom)),
        }
    }

    /// Get the numerator. The sign of the number always lives here.
    #[inline]
    pub fn numer(&self) -> Cow<'_, BigInt> {
        self.parts().0
    }

    /// Get the denominator, which is never negative
    #[inline]
    pub fn denom(&self) -> Cow<'_, BigInt> {
        self.parts().1
    }

    /// Consume the number and return `(numer, denom)`
    pub fn into_parts(self) -> (BigInt, BigInt) {
        match self.0 {
            Repr::Special(s) => {
                let (n, d) = s.parts();
                (BigInt::from(n), BigInt::from(d))
            }
            Repr::Finite { numer, denom } => (numer, denom),
        }
    }

    /// Return the tag if the number is one of the five canonical values
    #[inline]
    pub fn special(&self) -> Option<Special> {
        match self.0 {
            Repr::Special(s) => Some(s),
            Repr::Finite { .. } => None,
        }
    }

    /// Identity comparison. Canonical values are identical to themselves, other
    /// numbers only to the very same instance.
    #[inline]
    pub fn is_identical(&self, other: &Self) -> bool {
        core::ptr::eq(self, other)
            || matches!((self.special(), other.special()), (Some(a), Some(b)) if a == b)
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        matches!(self.0, Repr::Special(Special::NaN))
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        matches!(
            self.0,
            Repr::Special(Special::PositiveInfinity) | Repr::Special(Special::NegativeInfinity)
        )
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    /// Determine if the number is a finite whole number
    #[inline]
    pub fn is_integer(&self) -> bool {
        match &self.0 {
            Repr::Special(s) => s.is_finite(),
            Repr::Finite { denom, .. } => denom.is_one(),
        }
    }

    /// Determine if the denominator is a power of two (`1, 2, 4, 8, ..`)
    pub fn is_dyadic(&self) -> bool {
        match &self.0 {
            Repr::Special(s) => s.is_finite(),
            Repr::Finite { denom, .. } => {
                let d = denom.magnitude();
                d.trailing_zeros() == Some(d.bits() - 1)
            }
        }
    }

    /// Test if the number is strictly above zero, including positive infinity
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.is_nan() && self.numer().is_positive()
    }

    /// Test if the number is strictly below zero, including negative infinity
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer().is_negative()
    }

    /// Returns the reciprocal. The reciprocal of zero is positive infinity.
    #[inline]
    pub fn recip(&self) -> Self {
        let (n, d) = self.parts();
        Self::from_parts(d.into_owned(), n.into_owned())
    }

    #[inline]
    pub fn abs(&self) -> Self {
        let (n, d) = self.parts();
        Self::from_parts(n.abs(), d.into_owned())
    }

    /// Returns `-1`, `0` or `1` depending on the sign, and NaN for NaN
    pub fn signum(&self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        Self::from_integer(self.numer().signum())
    }

    /// Add one whole unit
    pub fn inc(&self) -> Self {
        let (n, d) = self.parts();
        Self::from_parts(&*n + &*d, d.into_owned())
    }

    /// Subtract one whole unit
    pub fn dec(&self) -> Self {
        let (n, d) = self.parts();
        Self::from_parts(&*n - &*d, d.into_owned())
    }

    /// Raise to an integer power. Negative exponents invert the number first.
    pub fn pow(&self, exp: i32) -> Self {
        let e = exp.unsigned_abs() as usize;
        let (n, d) = self.parts();
        let n = num_traits::pow(n.into_owned(), e);
        let d = num_traits::pow(d.into_owned(), e);
        if exp < 0 {
            Self::from_parts(d, n)
        } else {
            Self::from_parts(n, d)
        }
    }

    /// Rounds towards minus infinity. Non-finite values are returned as they are.
    pub fn floor(&self) -> Self {
        match &self.0 {
            Repr::Special(_) => self.clone(),
            Repr::Finite { numer, denom } => Self::from_integer(numer.div_floor(denom)),
        }
    }

    /// Rounds towards plus infinity. Non-finite values are returned as they are.
    pub fn ceil(&self) -> Self {
        match &self.0 {
            Repr::Special(_) => self.clone(),
            Repr::Finite { numer, denom } => Self::from_integer(numer.div_ceil(denom)),
        }
    }

    /// Rounds towards zero. Non-finite values are returned as they are.
    pub fn trunc(&self) -> Self {
        match &self.0 {
            Repr::Special(_) => self.clone(),
            Repr::Finite { numer, denom } => Self::from_integer(numer / denom),
        }
    }

    /// Get the fractional part, ensuring `self.trunc() + self.fract() == self`.
    /// NaN for non-finite values.
    #[inline]
    pub fn fract(&self) -> Self {
        self - &self.trunc()
    }

    /// Converts to an integer, rounding towards zero.
    /// Returns None if the number is not finite.
    pub fn to_integer(&self) -> Option<BigInt> {
        match &self.0 {
            Repr::Special(s) if s.is_finite() => Some(BigInt::from(s.parts().0)),
            Repr::Special(_) => None,
            Repr::Finite { numer, denom } => Some(numer / denom),
        }
    }

    /// Converts to a [Ratio]. Returns None if the number is not finite.
    pub fn to_ratio(&self) -> Option<Ratio<BigInt>> {
        if !self.is_finite() {
            return None;
        }
        let (n, d) = self.parts();
        Some(Ratio::new_raw(n.into_owned(), d.into_owned()))
    }

    /// Rationals have no character representation, this always fails
    pub fn to_char(&self) -> Result<char, RationalError> {
        Err(RationalError::TypeMismatch { target: "char" })
    }

    /// A total order over all values: negative infinity sorts lowest, NaN highest
    /// (above positive infinity), and identical values compare equal.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        if self.is_identical(other) {
            return Ordering::Equal;
        }
        match (self.special(), other.special()) {
            (Some(Special::NaN), _) => Ordering::Greater,
            (_, Some(Special::NaN)) => Ordering::Less,
            (Some(Special::NegativeInfinity), _) => Ordering::Less,
            (_, Some(Special::NegativeInfinity)) => Ordering::Greater,
            (Some(Special::PositiveInfinity), _) => Ordering::Greater,
            (_, Some(Special::PositiveInfinity)) => Ordering::Less,
            _ => {
                // both denominators are positive here
                let (a, b) = self.parts();
                let (c, d) = other.parts();
                (&*a * &*d).cmp(&(&*c * &*b))
            }
        }
    }
}

impl PartialEq for RationalNumber {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Repr::Special(a), Repr::Special(b)) => a == b && a.is_finite(),
            (
                Repr::Finite { numer: n1, denom: d1 },
                Repr::Finite { numer: n2, denom: d2 },
            ) => n1 == n2 && d1 == d2,
            _ => false,
        }
    }
}

impl PartialOrd for RationalNumber {
    /// Consistent with `==`: incomparable whenever NaN is involved
    /// or an infinity is compared with itself.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() || (self.is_infinite() && self.is_identical(other)) {
            return None;
        }
        Some(self.total_cmp(other))
    }
}

impl fmt::Display for RationalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Special(Special::Zero) => write!(f, "0"),
            Repr::Special(Special::One) => write!(f, "1"),
            Repr::Special(Special::NaN) => write!(f, "NaN"),
            Repr::Special(Special::PositiveInfinity) => write!(f, "+∞"),
            Repr::Special(Special::NegativeInfinity) => write!(f, "-∞"),
            Repr::Finite { numer, denom } => {
                if denom.is_one() {
                    write!(f, "{}", numer)
                } else {
                    write!(f, "{}/{}", numer, denom)
                }
            }
        }
    }
}

impl FromStr for RationalNumber {
    type Err = RationalError;

    /// Parse from the display format (`"3"`, `"-7/2"`, `"NaN"`, `"+∞"`, `"-∞"`).
    /// `inf`, `+inf`, `-inf` and an unsigned `∞` are also accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || RationalError::Parse { input: s.to_string() };
        let t = s.trim();
        match t {
            "NaN" | "nan" => return Ok(Self::NAN),
            "+∞" | "∞" | "inf" | "+inf" => return Ok(Self::POSITIVE_INFINITY),
            "-∞" | "-inf" => return Ok(Self::NEGATIVE_INFINITY),
            _ => {}
        }

        match t.split_once('/') {
            Some((n, d)) => {
                let n = n.trim().parse::<BigInt>().map_err(|_| parse_err())?;
                let d = d.trim().parse::<BigInt>().map_err(|_| parse_err())?;
                Ok(Self::from_parts(n, d))
            }
            None => t
                .parse::<BigInt>()
                .map(Self::from_integer)
                .map_err(|_| parse_err()),
        }
    }
}

macro_rules! impl_from_primitive_int {
    ($($T:ty),*) => {
        $(
            impl From<$T> for RationalNumber {
                #[inline]
                fn from(t: $T) -> Self {
                    Self::from_integer(t)
                }
            }
        )*
    };
}
impl_from_primitive_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for RationalNumber {
    #[inline]
    fn from(t: BigInt) -> Self {
        Self::from_integer(t)
    }
}

impl From<Ratio<BigInt>> for RationalNumber {
    #[inline]
    fn from(t: Ratio<BigInt>) -> Self {
        let (n, d) = t.into();
        Self::from_parts(n, d)
    }
}

impl<'a> TryFrom<&'a RationalNumber> for char {
    type Error = RationalError;

    #[inline]
    fn try_from(r: &'a RationalNumber) -> Result<Self, Self::Error> {
        r.to_char()
    }
}

impl Zero for RationalNumber {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }
    #[inline]
    fn is_zero(&self) -> bool {
        matches!(self.0, Repr::Special(Special::Zero))
    }
}

impl One for RationalNumber {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }
    #[inline]
    fn is_one(&self) -> bool {
        matches!(self.0, Repr::Special(Special::One))
    }
}

impl FromPrimitive for RationalNumber {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from_integer(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from_integer(n))
    }

    #[inline]
    fn from_f64(f: f64) -> Option<Self> {
        Some(Self::from_float(f))
    }
}

impl ToPrimitive for RationalNumber {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.to_integer()?.to_i64()
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.to_integer()?.to_u64()
    }

    /// NaN and the infinities map to their float counterparts. Finite values are
    /// converted by [Ratio], which stays accurate when numerator and denominator
    /// are both beyond the range of `f64`.
    fn to_f64(&self) -> Option<f64> {
        match &self.0 {
            Repr::Finite { numer, denom } => {
                Ratio::new_raw(numer.clone(), denom.clone()).to_f64()
            }
            Repr::Special(s) => {
                let (n, d) = s.parts();
                Some(f64::from(n) / f64::from(d))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Over;

    fn r(n: i64, d: i64) -> RationalNumber {
        RationalNumber::new(n, d)
    }

    #[test]
    fn normalize_test() {
        assert_eq!(r(6, 4), r(3, 2));
        assert_eq!(r(-6, -4), r(3, 2));
        assert_eq!(r(6, -4), r(-3, 2));
        assert_eq!(*r(6, -4).numer(), BigInt::from(-3));
        assert_eq!(*r(6, -4).denom(), BigInt::from(2));

        for &(n, d) in &[(12i64, 18i64), (-35, 21), (7, 1), (100, -75)] {
            let g = n.gcd(&d);
            assert_eq!(r(n, d), r(n / g, d / g));
            for &k in &[2i64, -3, 17] {
                assert_eq!(r(n, d), r(k * n, k * d));
            }
        }

        assert!(r(0, 5).is_identical(&RationalNumber::ZERO));
        assert!(r(0, -5).is_identical(&RationalNumber::ZERO));
        assert!(r(7, 7).is_identical(&RationalNumber::ONE));
        assert!(r(-7, -7).is_identical(&RationalNumber::ONE));
        assert_eq!(r(0, 5).special(), Some(Special::Zero));
        assert_eq!(r(3, 5).special(), None);
    }

    #[test]
    fn zero_denominator_test() {
        assert!(r(4, 0).is_identical(&RationalNumber::POSITIVE_INFINITY));
        assert!(r(-4, 0).is_identical(&RationalNumber::NEGATIVE_INFINITY));
        assert!(r(0, 0).is_identical(&RationalNumber::NAN));
        assert!(4i32.over(0).is_identical(&RationalNumber::POSITIVE_INFINITY));
        assert!((-4i64).over(0).is_identical(&RationalNumber::NEGATIVE_INFINITY));
        assert!(0u8.over(0u8).is_nan());
    }

    #[test]
    fn equality_test() {
        let specials = [
            RationalNumber::NAN,
            RationalNumber::POSITIVE_INFINITY,
            RationalNumber::NEGATIVE_INFINITY,
        ];
        for s in &specials {
            assert!(s.is_identical(s));
            assert!(s.is_identical(&s.clone()));
            assert!(s != s);
            assert!(s.partial_cmp(s).is_none());
        }
        assert!(RationalNumber::NAN.is_nan());
        assert!(RationalNumber::ZERO == RationalNumber::ZERO);
        assert!(RationalNumber::ONE == r(3, 3));
        assert!(!r(1, 2).is_identical(&r(1, 2)));
        assert!(r(1, 2) == r(1, 2));
        assert!(r(1, 2) != r(1, 3));
    }

    #[test]
    fn ordering_test() {
        let ninf = RationalNumber::NEGATIVE_INFINITY;
        let pinf = RationalNumber::POSITIVE_INFINITY;
        let nan = RationalNumber::NAN;
        for x in &[r(-1000, 3), r(0, 1), r(1, 1), r(7, 3)] {
            assert!(ninf < *x);
            assert!(*x < pinf);
            assert_eq!(ninf.total_cmp(x), Ordering::Less);
            assert_eq!(pinf.total_cmp(x), Ordering::Greater);
            assert_eq!(nan.total_cmp(x), Ordering::Greater);
            assert!(x.partial_cmp(&nan).is_none());
        }
        assert_eq!(pinf.total_cmp(&nan), Ordering::Less);
        assert_eq!(nan.total_cmp(&nan), Ordering::Equal);
        assert!(r(1, 3) < r(1, 2));
        assert!(r(-1, 2) < r(-1, 3));

        let mut v = vec![
            pinf.clone(),
            nan.clone(),
            RationalNumber::ZERO,
            pinf.clone(),
            nan.clone(),
            ninf.clone(),
            RationalNumber::ZERO,
            ninf.clone(),
        ];
        v.sort_by(RationalNumber::total_cmp);
        let rendered: Vec<String> = v.iter().map(|x| x.to_string()).collect();
        assert_eq!(rendered, ["-∞", "-∞", "0", "0", "+∞", "+∞", "NaN", "NaN"]);
    }

    #[test]
    fn unary_test() {
        assert_eq!(r(-3, 4).abs(), r(3, 4));
        assert!(RationalNumber::NEGATIVE_INFINITY.abs().is_identical(&RationalNumber::POSITIVE_INFINITY));
        assert_eq!(r(-3, 4).signum(), r(-1, 1));
        assert!(RationalNumber::ZERO.signum().is_zero());
        assert!(RationalNumber::POSITIVE_INFINITY.signum().is_one());
        assert!(RationalNumber::NAN.signum().is_nan());

        assert_eq!(r(1, 3).inc(), r(4, 3));
        assert_eq!(r(1, 3).dec(), r(-2, 3));
        assert!(RationalNumber::POSITIVE_INFINITY.inc().is_identical(&RationalNumber::POSITIVE_INFINITY));

        assert_eq!(r(2, 3).pow(3), r(8, 27));
        assert_eq!(r(2, 3).pow(-2), r(9, 4));
        assert_eq!(r(-2, 3).pow(-3), r(-27, 8));
        assert!(r(5, 7).pow(0).is_one());
        assert!(RationalNumber::ZERO.pow(-1).is_identical(&RationalNumber::POSITIVE_INFINITY));

        assert!(RationalNumber::ZERO.recip().is_identical(&RationalNumber::POSITIVE_INFINITY));
        assert!(RationalNumber::POSITIVE_INFINITY.recip().is_zero());
        assert!(RationalNumber::NAN.recip().is_nan());
        assert_eq!(r(-2, 5).recip(), r(-5, 2));
    }

    #[test]
    fn predicate_test() {
        assert!(r(3, 4).is_finite());
        assert!(!RationalNumber::NAN.is_finite());
        assert!(!RationalNumber::NEGATIVE_INFINITY.is_finite());
        assert!(RationalNumber::NEGATIVE_INFINITY.is_infinite());
        assert!(r(4, 2).is_integer());
        assert!(!r(4, 3).is_integer());

        assert!(r(3, 1).is_dyadic());
        assert!(r(3, 8).is_dyadic());
        assert!(r(-5, 1024).is_dyadic());
        // an even denominator alone is not enough
        assert!(!r(1, 6).is_dyadic());
        assert!(!r(1, 3).is_dyadic());
        assert!(!RationalNumber::NAN.is_dyadic());

        assert!(RationalNumber::POSITIVE_INFINITY.is_positive());
        assert!(RationalNumber::NEGATIVE_INFINITY.is_negative());
        assert!(!RationalNumber::NAN.is_positive() && !RationalNumber::NAN.is_negative());
    }

    #[test]
    fn rounding_test() {
        assert_eq!(r(7, 3).floor(), r(2, 1));
        assert_eq!(r(-7, 3).floor(), r(-3, 1));
        assert_eq!(r(7, 3).ceil(), r(3, 1));
        assert_eq!(r(-7, 3).trunc(), r(-2, 1));
        assert_eq!(r(-7, 3).fract(), r(-1, 3));
        assert_eq!(r(6, 3).floor(), r(2, 1));
        assert!(RationalNumber::NAN.floor().is_nan());
        assert!(RationalNumber::POSITIVE_INFINITY.fract().is_nan());
    }

    #[test]
    fn conversion_test() {
        assert_eq!(r(-7, 2).to_integer(), Some(BigInt::from(-3)));
        assert_eq!(r(7, 2).to_i64(), Some(3));
        assert_eq!(RationalNumber::ONE.to_integer(), Some(BigInt::from(1)));
        assert_eq!(RationalNumber::NAN.to_integer(), None);
        assert_eq!(RationalNumber::POSITIVE_INFINITY.to_i64(), None);

        assert_eq!(r(1, 4).to_f64(), Some(0.25));
        assert!(RationalNumber::NAN.to_f64().unwrap().is_nan());
        assert_eq!(RationalNumber::POSITIVE_INFINITY.to_f64(), Some(f64::INFINITY));
        assert_eq!(RationalNumber::NEGATIVE_INFINITY.to_f64(), Some(f64::NEG_INFINITY));

        // both parts overflow f64 on their own
        let ten400 = num_traits::pow(BigInt::from(10), 400);
        let huge = RationalNumber::new(&ten400 + BigInt::from(1), ten400.clone());
        assert_eq!(huge.to_f64(), Some(1.0));
        let tiny = RationalNumber::new(BigInt::from(3), &ten400 * BigInt::from(2));
        assert_eq!(tiny.to_f64(), Some(0.0));
        assert_eq!(RationalNumber::new(ten400, 4).to_f64(), Some(f64::INFINITY));

        assert_eq!(RationalNumber::from_float(0.375), r(3, 8));
        assert_eq!(RationalNumber::from_float(-2.0), r(-2, 1));
        assert!(RationalNumber::from_float(f64::NAN).is_nan());
        assert!(RationalNumber::from_float(f64::NEG_INFINITY)
            .is_identical(&RationalNumber::NEGATIVE_INFINITY));

        let ratio = Ratio::new(BigInt::from(10), BigInt::from(-4));
        assert_eq!(RationalNumber::from(ratio.clone()), r(-5, 2));
        assert_eq!(r(-5, 2).to_ratio(), Some(ratio));
        assert_eq!(RationalNumber::NAN.to_ratio(), None);

        assert_eq!(
            r(1, 2).to_char(),
            Err(RationalError::TypeMismatch { target: "char" })
        );
        assert!(char::try_from(&RationalNumber::ONE).is_err());
        assert!(char::try_from(&RationalNumber::NAN).is_err());
    }

    #[test]
    fn fmt_test() {
        assert_eq!(format!("{}", r(3, 1)), "3");
        assert_eq!(format!("{}", r(-6, 4)), "-3/2");
        assert_eq!(format!("{}", RationalNumber::ZERO), "0");
        assert_eq!(format!("{}", RationalNumber::NAN), "NaN");
        assert_eq!(format!("{}", RationalNumber::POSITIVE_INFINITY), "+∞");
        assert_eq!(format!("{}", RationalNumber::NEGATIVE_INFINITY), "-∞");
    }

    #[test]
    fn from_str_test() {
        assert_eq!("3".parse::<RationalNumber>().unwrap(), r(3, 1));
        assert_eq!(" -14/4 ".parse::<RationalNumber>().unwrap(), r(-7, 2));
        assert!("NaN".parse::<RationalNumber>().unwrap().is_nan());
        assert!("+∞".parse::<RationalNumber>().unwrap().is_identical(&RationalNumber::POSITIVE_INFINITY));
        assert!("-inf".parse::<RationalNumber>().unwrap().is_identical(&RationalNumber::NEGATIVE_INFINITY));
        assert!("5/0".parse::<RationalNumber>().unwrap().is_identical(&RationalNumber::POSITIVE_INFINITY));
        assert_eq!(
            "1/x".parse::<RationalNumber>(),
            Err(RationalError::Parse { input: "1/x".to_string() })
        );
        assert!("".parse::<RationalNumber>().is_err());

        for x in &[r(-7, 2), r(0, 1), r(22, 7)] {
            assert_eq!(x.to_string().parse::<RationalNumber>().unwrap(), *x);
        }
    }
}
