//! Two-population color-velocity mixture likelihood.
//!
//! Purpose
//! -------
//! Model discrete tracers (typically globular clusters) as a mixture of a
//! blue and a red population. Each population has its own Jeans dispersion
//! and its own Gaussian color distribution; a tracer's velocity and color are
//! scored jointly under each population and the two are combined in log-space.
//!
//! Key behaviors
//! -------------
//! - [`lnlike_gmm`]: `Σ logaddexp(ll_b, ll_r)` with
//!   `ll_b = ln φ_b + lngauss_discrete(v, dv, σ_J,b) + lngauss(c, μ_b, √(σ_c,b² + dc²))`
//!   and `ll_r` mirrored with weight `1 − φ_b`.
//! - [`gmm_membership`]: posterior blue-membership probability per tracer,
//!   `exp(ll_b − logaddexp(ll_b, ll_r))`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `φ_b` is not validated. `φ_b = 1` removes the red population
//!   (`ln 0 = −inf` is absorbed by `logaddexp`); values outside `[0, 1]` give
//!   NaN.
//! - Tracer samples and both components' dispersions broadcast together.
use crate::{
    likelihood::{
        errors::LikelihoodResult,
        pdf::{lngauss, lngauss_discrete},
        sample::{Sample, broadcast_len, broadcast_to},
    },
    numerical_stability::transformations::logaddexp,
};
use ndarray::{Array1, Zip};

/// One population of the mixture: its Jeans dispersion (per tracer or
/// shared) and its intrinsic color distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GmmComponent<'a> {
    pub sigma_jeans: Sample<'a>,
    pub mu_color: f64,
    pub sigma_color: f64,
}

impl<'a> GmmComponent<'a> {
    pub fn new(sigma_jeans: impl Into<Sample<'a>>, mu_color: f64, sigma_color: f64) -> Self {
        GmmComponent { sigma_jeans: sigma_jeans.into(), mu_color, sigma_color }
    }
}

/// Measured line-of-sight velocities and colors of the discrete tracers,
/// with their uncertainties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorVelocityTracers<'a> {
    pub v: Sample<'a>,
    pub dv: Sample<'a>,
    pub c: Sample<'a>,
    pub dc: Sample<'a>,
}

impl<'a> ColorVelocityTracers<'a> {
    pub fn new(
        v: impl Into<Sample<'a>>, dv: impl Into<Sample<'a>>, c: impl Into<Sample<'a>>,
        dc: impl Into<Sample<'a>>,
    ) -> Self {
        ColorVelocityTracers { v: v.into(), dv: dv.into(), c: c.into(), dc: dc.into() }
    }
}

/// Log-likelihood of the tracers under the blue/red mixture.
///
/// # Errors
/// - [`LikelihoodError::ShapeMismatch`](crate::likelihood::LikelihoodError::ShapeMismatch)
///   if tracer arrays and component dispersions cannot be broadcast together.
///
/// # Examples
/// ```rust
/// # use galdyn::likelihood::{ColorVelocityTracers, GmmComponent, lnlike_gmm};
/// let v = [-120.0, 35.0, 210.0];
/// let c = [0.85, 1.15, 0.9];
/// let tracers = ColorVelocityTracers::new(&v[..], 20.0, &c[..], 0.05);
/// let blue = GmmComponent::new(190.0, 0.9, 0.1);
/// let red = GmmComponent::new(160.0, 1.2, 0.1);
/// let ll = lnlike_gmm(&blue, &red, &tracers, 0.6).unwrap();
/// assert!(ll.is_finite());
/// ```
pub fn lnlike_gmm<'a>(
    blue: &GmmComponent<'a>, red: &GmmComponent<'a>, tracers: &ColorVelocityTracers<'a>,
    phi_b: f64,
) -> LikelihoodResult<f64> {
    let (ll_b, ll_r) = component_terms(blue, red, tracers, phi_b)?;
    Ok(Zip::from(&ll_b).and(&ll_r).fold(0.0, |acc, &b, &r| acc + logaddexp(b, r)))
}

/// Posterior probability that each tracer belongs to the blue population.
///
/// The output has the broadcast length of the inputs; every finite entry lies
/// in `[0, 1]`.
///
/// # Errors
/// - As [`lnlike_gmm`].
pub fn gmm_membership<'a>(
    blue: &GmmComponent<'a>, red: &GmmComponent<'a>, tracers: &ColorVelocityTracers<'a>,
    phi_b: f64,
) -> LikelihoodResult<Array1<f64>> {
    let (ll_b, ll_r) = component_terms(blue, red, tracers, phi_b)?;
    Ok(Zip::from(&ll_b).and(&ll_r).map_collect(|&b, &r| (b - logaddexp(b, r)).exp()))
}

// Per-tracer weighted log-likelihood under each population.
fn component_terms<'a>(
    blue: &GmmComponent<'a>, red: &GmmComponent<'a>, tracers: &ColorVelocityTracers<'a>,
    phi_b: f64,
) -> LikelihoodResult<(Array1<f64>, Array1<f64>)> {
    let len = broadcast_len(&[
        ("v", &tracers.v),
        ("dv", &tracers.dv),
        ("c", &tracers.c),
        ("dc", &tracers.dc),
        ("blue.sigma_jeans", &blue.sigma_jeans),
        ("red.sigma_jeans", &red.sigma_jeans),
    ])?;
    let (v, dv, c, dc) = (tracers.v.view(), tracers.dv.view(), tracers.c.view(), tracers.dc.view());
    let (v, dv) = (broadcast_to("v", &v, len)?, broadcast_to("dv", &dv, len)?);
    let (c, dc) = (broadcast_to("c", &c, len)?, broadcast_to("dc", &dc, len)?);

    let score = |component: &GmmComponent<'_>,
                 name: &'static str,
                 weight: f64|
     -> LikelihoodResult<Array1<f64>> {
        let sigma_jeans = component.sigma_jeans.view();
        let sigma_jeans = broadcast_to(name, &sigma_jeans, len)?;
        let ln_weight = weight.ln();
        let (mu, sigma_color) = (component.mu_color, component.sigma_color);
        Ok(Zip::from(&v).and(&dv).and(&c).and(&dc).and(&sigma_jeans).map_collect(
            |&v, &dv, &c, &dc, &sj| {
                ln_weight + lngauss_discrete(v, dv, sj) + lngauss(c, mu, sigma_color.hypot(dc))
            },
        ))
    };
    Ok((score(blue, "blue.sigma_jeans", phi_b)?, score(red, "red.sigma_jeans", 1.0 - phi_b)?))
}
