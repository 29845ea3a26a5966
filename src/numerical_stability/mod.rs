//! numerical_stability — overflow-safe log-space reductions.
//!
//! Purpose
//! -------
//! Collect the small numerically stable primitives that likelihood code needs
//! when combining log-densities: softplus and log-sum-exp. Centralizing them
//! keeps the shift-by-maximum discipline in one place.
//!
//! Key behaviors
//! -------------
//! - `safe_softplus` computes `ln(1 + e^x)` without overflow.
//! - `logaddexp` combines two log-space terms without
//!   exponentiating large magnitudes.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs may be any `f64`, including `±∞` and `NaN`; special values follow
//!   log-space conventions (see [`transformations`]).
//! - No allocation, no I/O, no logging.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`transformations`] cover agreement with naïve formulas in
//!   safe ranges and the underflow/special-value regimes.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{SOFTPLUS_CUTOFF, logaddexp, safe_softplus};
