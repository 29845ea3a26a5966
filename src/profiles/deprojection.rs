//! Abel deprojection — 3D luminosity density from a projected profile.
//!
//! For a spherically symmetric system the luminosity density `ν(r)` follows
//! from the projected surface density `I(R)` by the inverse Abel transform
//!
//! ```text
//! ν(r) = −(1/π) ∫_r^∞ (dI/dR) / √(R² − r²) dR.
//! ```
//!
//! The substitution `R = r·cosh(t)` gives `dR/√(R² − r²) = dt`, removing the
//! endpoint singularity:
//!
//! ```text
//! ν(r) = −(1/π) ∫_0^∞ I′(r·cosh t) dt,
//! ```
//!
//! which is integrated on `[0, t_max]` with adaptive Simpson quadrature. The
//! integrand decays like `exp(−(β + 1)·t)` for a surface density falling as
//! `R^−β`, so the truncated tail is negligible for the default cutoff.
use crate::{
    integration::{options::AbelOptions, quadrature::adaptive_simpson},
    profiles::{errors::ProfileResult, validation::verify_deprojection_radius},
};
use log::warn;
use std::f64::consts::PI;

/// Deproject a surface-density profile given its radial derivative.
///
/// Parameters
/// ----------
/// - `r`: de-projected radius; finite and `> 0`.
/// - `slope`: `dI/dR` as a function of projected radius `R`.
/// - `opts`: quadrature tolerances and the substitution cutoff.
///
/// Returns
/// -------
/// `ProfileResult<f64>`
///   - `Ok(ν(r))` on success.
///
/// Errors
/// ------
/// - [`ProfileError::InvalidDeprojectionRadius`](crate::profiles::ProfileError::InvalidDeprojectionRadius)
///   if `r` is not finite and positive.
/// - [`ProfileError::Quadrature`](crate::profiles::ProfileError::Quadrature) if
///   the integral cannot be evaluated (non-finite slope, depth exhausted).
///
/// Examples
/// --------
/// ```rust
/// # use galdyn::integration::AbelOptions;
/// # use galdyn::profiles::deprojection::abel_deproject;
/// // I(R) = exp(−R²/2) is the projection of ν(r) = exp(−r²/2)/√(2π).
/// let nu = abel_deproject(1.0, |big_r: f64| -big_r * (-0.5 * big_r * big_r).exp(), &AbelOptions::default())
///     .unwrap();
/// let exact = (-0.5f64).exp() / (2.0 * std::f64::consts::PI).sqrt();
/// assert!((nu - exact).abs() < 1e-6);
/// ```
pub fn abel_deproject<F>(r: f64, slope: F, opts: &AbelOptions) -> ProfileResult<f64>
where
    F: Fn(f64) -> f64,
{
    let r = verify_deprojection_radius(r)?;
    let integrand = |t: f64| slope(r * t.cosh());
    let estimate = adaptive_simpson(integrand, 0.0, opts.t_max, &opts.quad).inspect_err(|err| {
        warn!("Abel deprojection at r = {r} failed: {err}");
    })?;
    Ok(-estimate.value / PI)
}
