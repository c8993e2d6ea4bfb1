//! Data structures and algorithms implementations related to
//! continued fractions of rational numbers
//!
//! [FiniteContinuedFraction] stores the terms `[a0; a1, a2, ..]` of a rational number,
//! where `a0` is the integer part. Any finite rational has a finite expansion; NaN and the
//! infinities expand to the single term `[NaN;]`.
//!
//! # References:
//! - <https://pi.math.cornell.edu/~gautam/ContinuedFractions.pdf>
//! - <https://crypto.stanford.edu/pbc/notes/contfrac/>
//!

mod block;
mod finite;

pub use finite::*;
