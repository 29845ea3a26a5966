//! Numerical stability utilities.
//!
//! Provides safe implementations of log-space reductions that are prone to
//! overflow/underflow in naïve form. Mixture likelihoods combine per-component
//! log-densities that can differ by hundreds of nats; exponentiating them
//! directly underflows to zero and the logarithm of the sum becomes `-∞`.
//!
//! # Provided items
//! - [`SOFTPLUS_CUTOFF`]: the argument above which softplus returns `x`
//!   unchanged.
//! - [`safe_softplus(x)`]: stable version of `ln(1 + exp(x))`.
//! - [`logaddexp(a, b)`]: stable `ln(exp(a) + exp(b))` using a
//!   shift-by-maximum.
//!
//! # Special values
//! `NaN` in any argument propagates to the result. `-∞` arguments behave as
//! zero-weight terms, so `logaddexp(-∞, x) = x`, and `+∞` dominates.

/// Above this argument softplus returns `x`; `ln(1 + exp(x))` is `x` to within
/// `e^-x` there.
pub const SOFTPLUS_CUTOFF: f64 = 20.0;

/// Numerically stable softplus: `softplus(x) = ln(1 + exp(x))`.
///
/// Computes softplus without overflow for large positive `x` and
/// with good precision for large negative `x`:
///
/// - For `x > 20`, `softplus(x) ≈ x + ln1p(exp(-x)) ≈ x`.
/// - Otherwise, it falls back to `ln1p(exp(x))`.
///
/// # Parameters
/// - `x`: real input
///
/// # Returns
/// - `softplus(x)` as `f64`.
pub fn safe_softplus(x: f64) -> f64 {
    if x > SOFTPLUS_CUTOFF { x } else { x.exp().ln_1p() }
}

/// Stable `ln(exp(a) + exp(b))`.
///
/// Writes the sum as `m + ln(1 + exp(-|a - b|))` with `m = max(a, b)`, i.e.
/// `m + softplus(-|a - b|)`. The exponent is never positive, so nothing
/// overflows; when the arguments are far apart the correction underflows
/// gracefully to zero and the result is the larger argument.
///
/// # Parameters
/// - `a`, `b`: log-space terms (may be `±∞`).
///
/// # Returns
/// - `ln(exp(a) + exp(b))`; `NaN` if either argument is `NaN`.
///
/// # Examples
/// ```rust
/// # use galdyn::numerical_stability::transformations::logaddexp;
/// let v = logaddexp(-1000.0, -1000.0);
/// assert!((v - (-1000.0 + std::f64::consts::LN_2)).abs() < 1e-12);
/// assert_eq!(logaddexp(f64::NEG_INFINITY, 3.0), 3.0);
/// ```
pub fn logaddexp(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        return f64::NAN;
    }
    let m = a.max(b);
    if m.is_infinite() {
        // Both -∞, or at least one +∞; the shifted form would produce ∞ - ∞.
        return m;
    }
    m + safe_softplus(-(a - b).abs())
}
