//! Errors for validated profile parameters and numerical deprojection.
//!
//! The closed-form profile functions (`i_sersic`, `i_nuker`, …) never fail:
//! degenerate inputs propagate as NaN/±inf. [`ProfileError`] is produced only
//! by the validated parameter types ([`SersicParams`](crate::profiles::SersicParams),
//! [`NukerParams`](crate::profiles::NukerParams)) and by Abel deprojection.
use crate::integration::errors::QuadError;

/// Result alias for profile operations that may produce [`ProfileError`].
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Unified error type for profile construction and deprojection.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileError {
    // ---- Parameter validation ----
    /// A parameter is NaN/±inf.
    NonFiniteParam { name: &'static str, value: f64 },

    /// A parameter that must be strictly positive is <= 0.
    NonPositiveParam { name: &'static str, value: f64 },

    // ---- Deprojection ----
    /// De-projected radius must be finite and > 0.
    InvalidDeprojectionRadius { value: f64 },

    /// The Abel integral failed in the quadrature layer.
    Quadrature(QuadError),
}

impl std::error::Error for ProfileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProfileError::Quadrature(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileError::NonFiniteParam { name, value } => {
                write!(f, "Profile parameter `{name}` must be finite; got: {value}")
            }
            ProfileError::NonPositiveParam { name, value } => {
                write!(f, "Profile parameter `{name}` must be strictly positive; got: {value}")
            }
            ProfileError::InvalidDeprojectionRadius { value } => {
                write!(f, "De-projected radius must be finite and > 0; got: {value}")
            }
            ProfileError::Quadrature(err) => {
                write!(f, "Abel deprojection failed: {err}")
            }
        }
    }
}

impl From<QuadError> for ProfileError {
    fn from(err: QuadError) -> ProfileError {
        ProfileError::Quadrature(err)
    }
}
