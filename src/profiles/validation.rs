//! Profile validation helpers — reusable checks for shape and scale parameters.
//!
//! Purpose
//! -------
//! Centralize the finiteness/positivity checks used by the validated profile
//! parameter types, so constructors fail fast with structured errors naming
//! the offending parameter.
//!
//! Conventions
//! -----------
//! - Helpers return the validated value on success so constructors can bind
//!   it directly: `let re = verify_positive("re", re)?;`.
//! - No I/O and no logging.
use crate::profiles::errors::{ProfileError, ProfileResult};

/// Validate that a parameter is finite.
///
/// # Errors
/// - [`ProfileError::NonFiniteParam`] if `value` is NaN/±inf.
pub fn verify_finite(name: &'static str, value: f64) -> ProfileResult<f64> {
    if !value.is_finite() {
        return Err(ProfileError::NonFiniteParam { name, value });
    }
    Ok(value)
}

/// Validate that a parameter is finite and strictly positive.
///
/// # Errors
/// - [`ProfileError::NonFiniteParam`] if `value` is NaN/±inf.
/// - [`ProfileError::NonPositiveParam`] if `value <= 0`.
pub fn verify_positive(name: &'static str, value: f64) -> ProfileResult<f64> {
    let value = verify_finite(name, value)?;
    if value <= 0.0 {
        return Err(ProfileError::NonPositiveParam { name, value });
    }
    Ok(value)
}

/// Validate a de-projected radius for Abel integration (finite and > 0).
///
/// # Errors
/// - [`ProfileError::InvalidDeprojectionRadius`] otherwise.
pub fn verify_deprojection_radius(r: f64) -> ProfileResult<f64> {
    if !r.is_finite() || r <= 0.0 {
        return Err(ProfileError::InvalidDeprojectionRadius { value: r });
    }
    Ok(r)
}
