use thiserror::Error;

/// Errors reported by the fallible operations of this crate.
///
/// Division by zero is not among them, it produces NaN or an infinity.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
    /// A progression was requested with a zero step or a NaN bound or step
    #[error("invalid progression: {reason}")]
    InvalidProgression { reason: &'static str },

    /// The number has no representation in the requested type
    #[error("a rational number cannot be converted to {target}")]
    TypeMismatch { target: &'static str },

    #[error("cannot parse `{input}`")]
    Parse { input: String },
}
