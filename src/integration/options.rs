//! Quadrature options — validated tolerances and subdivision budgets.
//!
//! Purpose
//! -------
//! Provide small, validated configuration containers for the adaptive
//! quadrature used by Abel deprojection, so integration code can assume sane
//! tolerances and a bounded recursion depth without rechecking.
//!
//! Key behaviors
//! -------------
//! - [`QuadOptions`] holds absolute/relative tolerances and a maximum bisection
//!   depth; [`QuadOptions::new`] rejects non-finite or negative tolerances,
//!   all-zero tolerances, and depths outside `1..=MAX_DEPTH_LIMIT`.
//! - [`AbelOptions`] pairs [`QuadOptions`] with the upper cutoff of the
//!   `R = r·cosh(t)` substitution used for deprojection integrals.
//! - Both types implement `Default` with values suitable for smooth galaxy
//!   profiles.
//!
//! Invariants & assumptions
//! ------------------------
//! - `abs_tol >= 0`, `rel_tol >= 0`, and at least one is `> 0`.
//! - `1 <= max_depth <= MAX_DEPTH_LIMIT`.
//! - `t_max > 0` and finite.
use crate::integration::errors::{QuadError, QuadResult};

/// Hard ceiling on bisection depth; `2^60` panels is far below `f64` spacing
/// on any practical interval.
pub const MAX_DEPTH_LIMIT: usize = 60;

/// Default absolute tolerance.
pub const DEFAULT_ABS_TOL: f64 = 1e-10;

/// Default relative tolerance.
pub const DEFAULT_REL_TOL: f64 = 1e-8;

/// Default maximum bisection depth.
pub const DEFAULT_MAX_DEPTH: usize = 50;

/// Default upper cutoff in `t` for the `R = r·cosh(t)` substitution.
///
/// `cosh(40) ≈ 1.2e17`, so the truncated tail lies beyond `10^17·r` for any
/// profile whose surface density falls at least as fast as `R^-1`.
pub const DEFAULT_T_MAX: f64 = 40.0;

/// QuadOptions — tolerances and depth budget for adaptive quadrature.
///
/// Fields
/// ------
/// - `abs_tol`: absolute error target.
/// - `rel_tol`: error target relative to the magnitude of the first
///   whole-interval estimate.
/// - `max_depth`: maximum number of bisections along any branch.
///
/// The effective target is `max(abs_tol, rel_tol·|I₀|)` where `I₀` is the
/// initial three-point Simpson estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadOptions {
    pub abs_tol: f64,
    pub rel_tol: f64,
    pub max_depth: usize,
}

impl QuadOptions {
    /// Construct validated quadrature options.
    ///
    /// # Errors
    /// - [`QuadError::InvalidAbsTol`] / [`QuadError::InvalidRelTol`] for
    ///   non-finite or negative tolerances.
    /// - [`QuadError::ZeroTolerances`] if both tolerances are zero.
    /// - [`QuadError::InvalidMaxDepth`] if `max_depth` is zero or above
    ///   [`MAX_DEPTH_LIMIT`].
    ///
    /// # Examples
    /// ```rust
    /// # use galdyn::integration::options::QuadOptions;
    /// # use galdyn::integration::errors::QuadError;
    /// let opts = QuadOptions::new(1e-12, 0.0, 40).unwrap();
    /// assert_eq!(opts.max_depth, 40);
    /// assert_eq!(QuadOptions::new(0.0, 0.0, 40).unwrap_err(), QuadError::ZeroTolerances);
    /// ```
    pub fn new(abs_tol: f64, rel_tol: f64, max_depth: usize) -> QuadResult<Self> {
        if !abs_tol.is_finite() {
            return Err(QuadError::InvalidAbsTol {
                value: abs_tol,
                reason: "Absolute tolerance must be finite.",
            });
        }
        if abs_tol < 0.0 {
            return Err(QuadError::InvalidAbsTol {
                value: abs_tol,
                reason: "Absolute tolerance must be non-negative.",
            });
        }
        if !rel_tol.is_finite() {
            return Err(QuadError::InvalidRelTol {
                value: rel_tol,
                reason: "Relative tolerance must be finite.",
            });
        }
        if rel_tol < 0.0 {
            return Err(QuadError::InvalidRelTol {
                value: rel_tol,
                reason: "Relative tolerance must be non-negative.",
            });
        }
        if abs_tol == 0.0 && rel_tol == 0.0 {
            return Err(QuadError::ZeroTolerances);
        }
        if max_depth == 0 {
            return Err(QuadError::InvalidMaxDepth {
                value: max_depth,
                reason: "Maximum depth must be greater than zero.",
            });
        }
        if max_depth > MAX_DEPTH_LIMIT {
            return Err(QuadError::InvalidMaxDepth {
                value: max_depth,
                reason: "Maximum depth exceeds the supported limit of 60.",
            });
        }
        Ok(QuadOptions { abs_tol, rel_tol, max_depth })
    }
}

impl Default for QuadOptions {
    fn default() -> Self {
        QuadOptions {
            abs_tol: DEFAULT_ABS_TOL,
            rel_tol: DEFAULT_REL_TOL,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// AbelOptions — configuration for numerical Abel deprojection.
///
/// Fields
/// ------
/// - `quad`: tolerances for the `t`-integral.
/// - `t_max`: upper cutoff of the substitution variable; the integral over
///   `[t_max, ∞)` is neglected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbelOptions {
    pub quad: QuadOptions,
    pub t_max: f64,
}

impl AbelOptions {
    /// Construct validated deprojection options.
    ///
    /// # Errors
    /// - [`QuadError::InvalidCutoff`] if `t_max` is non-finite or `<= 0`.
    pub fn new(quad: QuadOptions, t_max: f64) -> QuadResult<Self> {
        if !t_max.is_finite() {
            return Err(QuadError::InvalidCutoff {
                value: t_max,
                reason: "Cutoff must be finite.",
            });
        }
        if t_max <= 0.0 {
            return Err(QuadError::InvalidCutoff {
                value: t_max,
                reason: "Cutoff must be strictly positive.",
            });
        }
        Ok(AbelOptions { quad, t_max })
    }
}

impl Default for AbelOptions {
    fn default() -> Self {
        AbelOptions { quad: QuadOptions::default(), t_max: DEFAULT_T_MAX }
    }
}
