//! Arithmetic operators on [RationalNumber]
//!
//! Every operator works on numerator/denominator pairs and goes through the normalizing
//! constructor, so a zero denominator on either side produces NaN or an infinity.

use super::RationalNumber;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_bigint::BigInt;
use num_traits::{Inv, Pow};

impl<'a, 'b> Add<&'b RationalNumber> for &'a RationalNumber {
    type Output = RationalNumber;

    // a/b + c/d = (ad + cb) / bd
    fn add(self, rhs: &'b RationalNumber) -> RationalNumber {
        let (a, b) = self.parts();
        let (c, d) = rhs.parts();
        RationalNumber::from_parts(&*a * &*d + &*c * &*b, &*b * &*d)
    }
}

impl<'a, 'b> Sub<&'b RationalNumber> for &'a RationalNumber {
    type Output = RationalNumber;

    // a/b - c/d = (ad - cb) / bd
    fn sub(self, rhs: &'b RationalNumber) -> RationalNumber {
        let (a, b) = self.parts();
        let (c, d) = rhs.parts();
        RationalNumber::from_parts(&*a * &*d - &*c * &*b, &*b * &*d)
    }
}

impl<'a, 'b> Mul<&'b RationalNumber> for &'a RationalNumber {
    type Output = RationalNumber;

    fn mul(self, rhs: &'b RationalNumber) -> RationalNumber {
        let (a, b) = self.parts();
        let (c, d) = rhs.parts();
        RationalNumber::from_parts(&*a * &*c, &*b * &*d)
    }
}

impl<'a, 'b> Div<&'b RationalNumber> for &'a RationalNumber {
    type Output = RationalNumber;

    #[inline]
    fn div(self, rhs: &'b RationalNumber) -> RationalNumber {
        self * &rhs.recip()
    }
}

// forward owned and mixed operands to the reference implementation,
// as well as integer right hand sides
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident, $imp_assign:ident, $method_assign:ident) => {
        impl $imp<RationalNumber> for RationalNumber {
            type Output = RationalNumber;
            #[inline]
            fn $method(self, rhs: RationalNumber) -> RationalNumber {
                (&self).$method(&rhs)
            }
        }

        impl<'a> $imp<&'a RationalNumber> for RationalNumber {
            type Output = RationalNumber;
            #[inline]
            fn $method(self, rhs: &'a RationalNumber) -> RationalNumber {
                (&self).$method(rhs)
            }
        }

        impl<'a> $imp<RationalNumber> for &'a RationalNumber {
            type Output = RationalNumber;
            #[inline]
            fn $method(self, rhs: RationalNumber) -> RationalNumber {
                self.$method(&rhs)
            }
        }

        impl $imp<i64> for RationalNumber {
            type Output = RationalNumber;
            #[inline]
            fn $method(self, rhs: i64) -> RationalNumber {
                (&self).$method(&RationalNumber::from_integer(rhs))
            }
        }

        impl $imp<BigInt> for RationalNumber {
            type Output = RationalNumber;
            #[inline]
            fn $method(self, rhs: BigInt) -> RationalNumber {
                (&self).$method(&RationalNumber::from_integer(rhs))
            }
        }

        impl $imp_assign<RationalNumber> for RationalNumber {
            #[inline]
            fn $method_assign(&mut self, rhs: RationalNumber) {
                *self = (&*self).$method(&rhs);
            }
        }

        impl<'a> $imp_assign<&'a RationalNumber> for RationalNumber {
            #[inline]
            fn $method_assign(&mut self, rhs: &'a RationalNumber) {
                *self = (&*self).$method(rhs);
            }
        }
    };
}

forward_binop!(impl Add, add, AddAssign, add_assign);
forward_binop!(impl Sub, sub, SubAssign, sub_assign);
forward_binop!(impl Mul, mul, MulAssign, mul_assign);
forward_binop!(impl Div, div, DivAssign, div_assign);

impl<'a> Neg for &'a RationalNumber {
    type Output = RationalNumber;

    #[inline]
    fn neg(self) -> RationalNumber {
        let (n, d) = self.parts();
        RationalNumber::from_parts(-n.into_owned(), d.into_owned())
    }
}

impl Neg for RationalNumber {
    type Output = RationalNumber;

    #[inline]
    fn neg(self) -> RationalNumber {
        -&self
    }
}

impl Inv for RationalNumber {
    type Output = RationalNumber;

    #[inline]
    fn inv(self) -> RationalNumber {
        self.recip()
    }
}

impl<'a> Inv for &'a RationalNumber {
    type Output = RationalNumber;

    #[inline]
    fn inv(self) -> RationalNumber {
        self.recip()
    }
}

impl Pow<i32> for RationalNumber {
    type Output = RationalNumber;

    #[inline]
    fn pow(self, rhs: i32) -> RationalNumber {
        RationalNumber::pow(&self, rhs)
    }
}

impl<'a> Pow<i32> for &'a RationalNumber {
    type Output = RationalNumber;

    #[inline]
    fn pow(self, rhs: i32) -> RationalNumber {
        RationalNumber::pow(self, rhs)
    }
}

impl Sum for RationalNumber {
    fn sum<I: Iterator<Item = RationalNumber>>(iter: I) -> Self {
        iter.fold(RationalNumber::ZERO, |acc, x| &acc + &x)
    }
}

impl<'a> Sum<&'a RationalNumber> for RationalNumber {
    fn sum<I: Iterator<Item = &'a RationalNumber>>(iter: I) -> Self {
        iter.fold(RationalNumber::ZERO, |acc, x| &acc + x)
    }
}

impl Product for RationalNumber {
    fn product<I: Iterator<Item = RationalNumber>>(iter: I) -> Self {
        iter.fold(RationalNumber::ONE, |acc, x| &acc * &x)
    }
}

impl<'a> Product<&'a RationalNumber> for RationalNumber {
    fn product<I: Iterator<Item = &'a RationalNumber>>(iter: I) -> Self {
        iter.fold(RationalNumber::ONE, |acc, x| &acc * x)
    }
}
