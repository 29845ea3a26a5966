//! profiles — projected surface-brightness laws and their deprojections.
//!
//! Purpose
//! -------
//! Evaluate the radial light profiles used to describe tracer populations in
//! dynamical models of elliptical galaxies: the Sersic law (with its
//! magnitude-space forms and luminosity integrals) and the Nuker double power
//! law, plus the de-projected 3D luminosity densities that Jeans models need.
//!
//! Key behaviors
//! -------------
//! - Closed-form free functions (`sersic::*`, `nuker::*`) are pure and
//!   fail-soft: no validation, degenerate inputs become NaN/±inf.
//! - Validated parameter types ([`SersicParams`], [`NukerParams`],
//!   [`SurfaceProfile`]) reject non-physical parameters up front.
//! - Deprojection is either closed-form (Prugniel–Simien for Sersic) or
//!   numerical ([`deprojection::abel_deproject`]).
//!
//! Conventions
//! -----------
//! - `R`/`radius` is projected radius on the sky; `r` is de-projected
//!   distance from the galaxy centre. All lengths are physical.
//! - Magnitudes use `μ = −2.5·log10(I) + const`.

pub mod deprojection;
pub mod errors;
pub mod nuker;
pub mod profile;
pub mod sersic;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{ProfileError, ProfileResult};
pub use self::nuker::{NukerParams, di_nuker_dr, i_nuker, i_nuker_array};
pub use self::profile::SurfaceProfile;
pub use self::sersic::{
    SersicParams, b_cb, di_sersic_dr, i_sersic, i_sersic_array, l_sersic, l_sersic_tot,
    mu_eff_sersic, mu_sersic, mu_sersic_array, mu0_sersic, mu0_sersic_from_total, nu_sersic,
    p_ln,
};
