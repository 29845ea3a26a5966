//! integration — adaptive quadrature for profile deprojection.
//!
//! Purpose
//! -------
//! Supply the numerical integration used by the Abel deprojection of
//! surface-density profiles, with validated configuration and a typed error
//! surface.
//!
//! Key behaviors
//! -------------
//! - [`quadrature::adaptive_simpson`] integrates a scalar closure over a finite
//!   interval to a requested tolerance.
//! - [`options::QuadOptions`] and [`options::AbelOptions`] hold validated
//!   tolerances, depth budgets, and the substitution cutoff.
//! - [`errors::QuadError`] reports invalid options, invalid intervals,
//!   non-finite integrands, and budget exhaustion.
//!
//! Conventions
//! -----------
//! - Outcomes are logged at `debug` level through the `log` facade; the crate
//!   never installs a logger.

pub mod errors;
pub mod options;
pub mod quadrature;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{QuadError, QuadResult};
pub use self::options::{AbelOptions, QuadOptions};
pub use self::quadrature::{QuadEstimate, adaptive_simpson};
