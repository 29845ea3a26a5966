//! Gaussian likelihoods for dispersion profiles, surface densities, and
//! discrete tracer velocities.
//!
//! Purpose
//! -------
//! Compare model predictions with measurements under Gaussian noise and
//! reduce the per-observation log-densities to a single scalar.
//!
//! Key behaviors
//! -------------
//! - [`lnlike_continuous`]: measured dispersions `σ` about Jeans-model
//!   predictions `σ_J` with uncertainty `dσ` (unresolved stellar light).
//! - [`lnlike_density`]: the same form for surface-density measurements.
//! - [`lnlike_discrete`]: individual velocities `v` drawn from a zero-mean
//!   Gaussian whose variance is `σ_J² + dv²` (globular clusters, planetary
//!   nebulae).
//!
//! Invariants & assumptions
//! ------------------------
//! - Every argument may be a scalar or a 1-D array; see
//!   [`Sample`](crate::likelihood::sample::Sample) for broadcasting.
//! - The return value is always a scalar sum, `0.0` for empty arrays.
//! - Non-positive scales are not rejected: they make the sum NaN/±inf.
use crate::likelihood::{
    errors::LikelihoodResult,
    pdf::{lngauss, lngauss_discrete},
    sample::{Sample, broadcast_len, broadcast_to},
};
use ndarray::Zip;

/// Log-likelihood of measured velocity dispersions given Jeans predictions.
///
/// `Σ lngauss(sigma, sigma_jeans, dsigma)`.
///
/// # Errors
/// - [`LikelihoodError::ShapeMismatch`](crate::likelihood::LikelihoodError::ShapeMismatch)
///   if array lengths cannot be broadcast together.
///
/// # Examples
/// ```rust
/// # use galdyn::likelihood::lnlike_continuous;
/// let sigma = [210.0, 195.0, 188.0];
/// let ll = lnlike_continuous(200.0, &sigma[..], 10.0).unwrap();
/// assert!(ll.is_finite() && ll < 0.0);
/// ```
pub fn lnlike_continuous<'a>(
    sigma_jeans: impl Into<Sample<'a>>, sigma: impl Into<Sample<'a>>,
    dsigma: impl Into<Sample<'a>>,
) -> LikelihoodResult<f64> {
    let (model, data, err) = (sigma_jeans.into(), sigma.into(), dsigma.into());
    sum_terms(
        [("sigma", &data), ("sigma_jeans", &model), ("dsigma", &err)],
        lngauss,
    )
}

/// Log-likelihood of surface-density measurements given a model profile.
///
/// `Σ lngauss(i_obs, i_model, di)`.
///
/// # Errors
/// - [`LikelihoodError::ShapeMismatch`](crate::likelihood::LikelihoodError::ShapeMismatch)
///   if array lengths cannot be broadcast together.
pub fn lnlike_density<'a>(
    i_model: impl Into<Sample<'a>>, i_obs: impl Into<Sample<'a>>, di: impl Into<Sample<'a>>,
) -> LikelihoodResult<f64> {
    let (model, data, err) = (i_model.into(), i_obs.into(), di.into());
    sum_terms([("i_obs", &data), ("i_model", &model), ("di", &err)], lngauss)
}

/// Log-likelihood of discrete tracer velocities given the model dispersion.
///
/// `Σ lngauss_discrete(v, dv, sigma_jeans)`; velocities are relative to the
/// systemic velocity.
///
/// # Errors
/// - [`LikelihoodError::ShapeMismatch`](crate::likelihood::LikelihoodError::ShapeMismatch)
///   if array lengths cannot be broadcast together.
pub fn lnlike_discrete<'a>(
    sigma_jeans: impl Into<Sample<'a>>, v: impl Into<Sample<'a>>, dv: impl Into<Sample<'a>>,
) -> LikelihoodResult<f64> {
    let (model, data, err) = (sigma_jeans.into(), v.into(), dv.into());
    sum_terms([("v", &data), ("dv", &err), ("sigma_jeans", &model)], lngauss_discrete)
}

// Broadcast three named samples and sum `term` over the aligned elements,
// passing them in argument order.
fn sum_terms<F>(args: [(&'static str, &Sample<'_>); 3], term: F) -> LikelihoodResult<f64>
where
    F: Fn(f64, f64, f64) -> f64,
{
    let len = broadcast_len(&args)?;
    let [(na, a), (nb, b), (nc, c)] = args;
    let (a, b, c) = (a.view(), b.view(), c.view());
    let total = Zip::from(broadcast_to(na, &a, len)?)
        .and(broadcast_to(nb, &b, len)?)
        .and(broadcast_to(nc, &c, len)?)
        .fold(0.0, |acc, &x, &y, &z| acc + term(x, y, z));
    Ok(total)
}
