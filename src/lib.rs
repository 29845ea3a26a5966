//! galdyn — surface-brightness profiles and Gaussian-family likelihoods for
//! dynamical models of elliptical galaxies.
//!
//! Purpose
//! -------
//! Serve as the crate root for the numerical building blocks a Jeans-model
//! fitting code needs: projected light profiles of tracer populations, their
//! de-projected 3D densities, and the log-likelihoods that compare model
//! predictions with velocity-dispersion, surface-density, and discrete-tracer
//! data.
//!
//! Key behaviors
//! -------------
//! - [`profiles`]: Sersic and Nuker surface-density laws, Sersic magnitude and
//!   luminosity relations, Prugniel–Simien and numerical Abel deprojection.
//! - [`likelihood`]: Gaussian log-densities, continuous/discrete/density
//!   likelihoods, and the blue/red color-velocity mixture.
//! - [`integration`]: validated adaptive Simpson quadrature backing the Abel
//!   deprojection.
//! - [`numerical_stability`]: softplus and log-sum-exp primitives.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every operation is a pure function of its inputs: no shared state, no
//!   I/O, no threads. All public types are plain data and `Send + Sync`.
//! - Closed-form evaluations are fail-soft: non-physical inputs produce
//!   NaN/±inf rather than errors. Typed errors are reserved for validated
//!   parameter types, quadrature configuration/convergence, and incompatible
//!   array shapes.
//!
//! Conventions
//! -----------
//! - `R`/`radius` denotes projected radius, `r` de-projected radius.
//! - Magnitudes use `μ = −2.5·log10(I) + const`; log-likelihoods use natural
//!   logarithms.
//! - Diagnostics go through the `log` facade; the crate never installs a
//!   logger.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each module; `tests/` exercises profile
//!   evaluation, deprojection, and likelihood scoring end to end.

pub mod integration;
pub mod likelihood;
pub mod numerical_stability;
pub mod profiles;
