//! Exact rational numbers backed by [BigInt][num_bigint::BigInt], extended with
//! positive and negative infinity and NaN, plus finite continued fractions.
//!
//! Division by zero is part of the algebra rather than an error:
//!
//! ```
//! use num_extended_rational::{Over, RationalNumber};
//!
//! assert!(4i32.over(0).is_identical(&RationalNumber::POSITIVE_INFINITY));
//! assert!((RationalNumber::ZERO / RationalNumber::ZERO).is_nan());
//! assert_eq!(7i32.over(3).to_string(), "7/3");
//! ```

mod cont_frac;
mod error;
mod rational;
pub mod traits;

pub use cont_frac::{Convergents, FiniteContinuedFraction};
pub use error::RationalError;
pub use rational::{Progression, RationalNumber, RationalRange, Special};
pub use traits::Over;
