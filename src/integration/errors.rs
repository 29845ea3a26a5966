//! Errors for the quadrature layer (options validation, interval checks,
//! integrand failures, and subdivision budget exhaustion).
//!
//! ## Conventions
//! - Every variant carries the offending value so callers can report it
//!   without re-deriving context.
//! - Option-validation variants carry a static `reason` explaining which
//!   constraint failed.

/// Result alias for quadrature operations that may produce [`QuadError`].
pub type QuadResult<T> = Result<T, QuadError>;

/// Unified error type for numerical integration.
#[derive(Debug, Clone, PartialEq)]
pub enum QuadError {
    // ---- Options validation ----
    /// Absolute tolerance must be finite and >= 0.
    InvalidAbsTol { value: f64, reason: &'static str },

    /// Relative tolerance must be finite and >= 0.
    InvalidRelTol { value: f64, reason: &'static str },

    /// At least one tolerance must be strictly positive.
    ZeroTolerances,

    /// Maximum bisection depth must be in `1..=MAX_DEPTH_LIMIT`.
    InvalidMaxDepth { value: usize, reason: &'static str },

    /// Upper substitution cutoff must be finite and > 0.
    InvalidCutoff { value: f64, reason: &'static str },

    // ---- Integration ----
    /// Integration bounds must be finite.
    InvalidInterval { lower: f64, upper: f64 },

    /// The integrand evaluated to NaN/±inf.
    NonFiniteIntegrand { x: f64, value: f64 },

    /// Bisection reached `max_depth` without meeting the tolerance.
    MaxDepthExceeded { depth: usize, lower: f64, upper: f64, error_estimate: f64 },
}

impl std::error::Error for QuadError {}

impl std::fmt::Display for QuadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Options validation ----
            QuadError::InvalidAbsTol { value, reason } => {
                write!(f, "Absolute tolerance must be finite and >= 0; got: {value}. {reason}")
            }
            QuadError::InvalidRelTol { value, reason } => {
                write!(f, "Relative tolerance must be finite and >= 0; got: {value}. {reason}")
            }
            QuadError::ZeroTolerances => {
                write!(f, "At least one of the absolute or relative tolerances must be > 0.")
            }
            QuadError::InvalidMaxDepth { value, reason } => {
                write!(f, "Invalid maximum bisection depth: {value}. {reason}")
            }
            QuadError::InvalidCutoff { value, reason } => {
                write!(f, "Substitution cutoff must be finite and > 0; got: {value}. {reason}")
            }
            // ---- Integration ----
            QuadError::InvalidInterval { lower, upper } => {
                write!(f, "Integration bounds must be finite; got [{lower}, {upper}].")
            }
            QuadError::NonFiniteIntegrand { x, value } => {
                write!(f, "Integrand is non-finite at x = {x}: {value}")
            }
            QuadError::MaxDepthExceeded { depth, lower, upper, error_estimate } => {
                write!(
                    f,
                    "Adaptive quadrature reached depth {depth} on [{lower}, {upper}] with error estimate {error_estimate}."
                )
            }
        }
    }
}
