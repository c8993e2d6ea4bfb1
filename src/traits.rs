use crate::rational::RationalNumber;
use num_bigint::BigInt;

/// Infix-style construction of a [RationalNumber], e.g. `3.over(4)` for `3/4`.
///
/// A zero denominator produces NaN or an infinity, like [RationalNumber::new].
pub trait Over<Rhs> {
    fn over(self, denom: Rhs) -> RationalNumber;
}

macro_rules! impl_over_integer {
    ($($T:ty),*) => {
        $(
            impl<D: Into<BigInt>> Over<D> for $T {
                #[inline]
                fn over(self, denom: D) -> RationalNumber {
                    RationalNumber::new(self, denom)
                }
            }
        )*
    };
}
impl_over_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigInt);

// floats are converted exactly before dividing
macro_rules! impl_over_float {
    ($($T:ty),*) => {
        $(
            impl Over<$T> for $T {
                #[inline]
                fn over(self, denom: $T) -> RationalNumber {
                    RationalNumber::from_float(self as f64) / RationalNumber::from_float(denom as f64)
                }
            }
        )*
    };
}
impl_over_float!(f32, f64);

impl Over<RationalNumber> for RationalNumber {
    #[inline]
    fn over(self, denom: RationalNumber) -> RationalNumber {
        self / denom
    }
}
