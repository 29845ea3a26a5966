//! likelihood — Gaussian-family log-likelihoods for dynamical-model fitting.
//!
//! Purpose
//! -------
//! Score model predictions (Jeans dispersions, surface densities, tracer
//! populations) against observations under Gaussian noise. Each function
//! reduces per-observation log-densities to one scalar that a sampler or
//! optimizer can consume.
//!
//! Key behaviors
//! -------------
//! - [`pdf`]: the Gaussian log-density primitives `lngauss` and
//!   `lngauss_discrete`.
//! - [`gaussian`]: continuous (integrated-light), surface-density, and
//!   discrete-tracer likelihoods.
//! - [`gmm`]: the blue/red color-velocity mixture likelihood and per-tracer
//!   membership probabilities.
//! - [`sample`]: scalar-or-array inputs with element-wise broadcasting.
//!
//! Invariants & assumptions
//! ------------------------
//! - Numeric degeneracy (zero or negative scales, weights outside `[0, 1]`) is
//!   never an error; it propagates as NaN/±inf.
//! - Only incompatible array lengths are reported, as
//!   [`LikelihoodError::ShapeMismatch`].
//!
//! Conventions
//! -----------
//! - Velocities are line-of-sight values relative to the systemic velocity.
//! - All logarithms are natural.

pub mod errors;
pub mod gaussian;
pub mod gmm;
pub mod pdf;
pub mod sample;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{LikelihoodError, LikelihoodResult};
pub use self::gaussian::{lnlike_continuous, lnlike_density, lnlike_discrete};
pub use self::gmm::{ColorVelocityTracers, GmmComponent, gmm_membership, lnlike_gmm};
pub use self::pdf::{lngauss, lngauss_discrete};
pub use self::sample::Sample;
