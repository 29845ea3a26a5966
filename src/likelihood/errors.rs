//! Errors for likelihood evaluation.
//!
//! Likelihoods are fail-soft with respect to *values*: a zero or negative
//! scale, or a mixture weight outside `(0, 1)`, propagates as NaN/±inf. The
//! only structural failure is a set of array arguments whose lengths cannot be
//! broadcast together, reported as [`LikelihoodError::ShapeMismatch`].

/// Result alias for likelihood operations that may produce [`LikelihoodError`].
pub type LikelihoodResult<T> = Result<T, LikelihoodError>;

/// Unified error type for likelihood evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum LikelihoodError {
    /// Argument `argument` has length `actual`, incompatible with length
    /// `expected` set by argument `reference`.
    ShapeMismatch { argument: &'static str, reference: &'static str, expected: usize, actual: usize },
}

impl std::error::Error for LikelihoodError {}

impl std::fmt::Display for LikelihoodError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LikelihoodError::ShapeMismatch { argument, reference, expected, actual } => {
                write!(
                    f,
                    "Cannot broadcast `{argument}` (length {actual}) against `{reference}` (length {expected})."
                )
            }
        }
    }
}
