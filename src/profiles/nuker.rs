//! Nuker (double power-law) surface-brightness profile.
//!
//! ```text
//! I(R) = Ib · 2^((β−γ)/α) · (R/Rb)^(−γ) · (1 + (R/Rb)^α)^((γ−β)/α)
//! ```
//!
//! Inner slope `γ`, outer slope `β`, transition sharpness `α`, normalized so
//! that `I(Rb) = Ib` for any slopes. The closed form is not special-cased at
//! `R = 0`: for `γ > 0` it diverges there like any power law.
use crate::{
    integration::options::AbelOptions,
    profiles::{
        deprojection::abel_deproject,
        errors::ProfileResult,
        validation::{verify_finite, verify_positive},
    },
};
use ndarray::{Array, ArrayView, AsArray, Dimension};

/// Nuker surface brightness at projected radius `radius`.
///
/// # Parameters
/// - `ib`: surface brightness at the break radius.
/// - `rb`: break radius.
/// - `alpha`: transition sharpness (larger is sharper).
/// - `beta`: outer power-law index.
/// - `gamma`: inner power-law index.
///
/// # Examples
/// ```rust
/// # use galdyn::profiles::nuker::i_nuker;
/// assert_eq!(i_nuker(1.0, 5.0, 1.0, 2.0, 1.0, 0.5), 5.0);
/// ```
pub fn i_nuker(radius: f64, ib: f64, rb: f64, alpha: f64, beta: f64, gamma: f64) -> f64 {
    let x = radius / rb;
    // 2^((β−γ)/α) folded into the transition term so that I(Rb) == Ib exactly.
    ib * x.powf(-gamma) * (0.5 * (1.0 + x.powf(alpha))).powf((gamma - beta) / alpha)
}

/// Radial derivative `dI/dR` of [`i_nuker`].
///
/// `dI/dR = I(R)/R · (−γ + (γ − β)·x^α/(1 + x^α))` with `x = R/Rb`. The
/// transition weight is evaluated as `1/(1 + x^−α)` so it stays finite when
/// `x^α` overflows.
pub fn di_nuker_dr(radius: f64, ib: f64, rb: f64, alpha: f64, beta: f64, gamma: f64) -> f64 {
    let x = radius / rb;
    let weight = 1.0 / (1.0 + x.powf(-alpha));
    i_nuker(radius, ib, rb, alpha, beta, gamma) / radius * (-gamma + (gamma - beta) * weight)
}

/// Element-wise [`i_nuker`] over an array of projected radii.
pub fn i_nuker_array<'a, V, D>(
    radius: V, ib: f64, rb: f64, alpha: f64, beta: f64, gamma: f64,
) -> Array<f64, D>
where
    V: AsArray<'a, f64, D>,
    D: Dimension,
{
    let radius: ArrayView<'a, f64, D> = radius.into();
    radius.mapv(|x| i_nuker(x, ib, rb, alpha, beta, gamma))
}

/// NukerParams — validated Nuker profile parameters.
///
/// Fields
/// ------
/// - `ib`: surface brightness at the break radius (finite).
/// - `rb`: break radius (finite, > 0).
/// - `alpha`: transition sharpness (finite, > 0).
/// - `beta`, `gamma`: outer and inner slopes (finite).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NukerParams {
    pub ib: f64,
    pub rb: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl NukerParams {
    /// Construct validated Nuker parameters.
    ///
    /// # Errors
    /// - [`ProfileError::NonFiniteParam`](crate::profiles::ProfileError::NonFiniteParam)
    ///   if any parameter is NaN/±inf.
    /// - [`ProfileError::NonPositiveParam`](crate::profiles::ProfileError::NonPositiveParam)
    ///   if `rb <= 0` or `alpha <= 0`.
    pub fn new(ib: f64, rb: f64, alpha: f64, beta: f64, gamma: f64) -> ProfileResult<Self> {
        let ib = verify_finite("ib", ib)?;
        let rb = verify_positive("rb", rb)?;
        let alpha = verify_positive("alpha", alpha)?;
        let beta = verify_finite("beta", beta)?;
        let gamma = verify_finite("gamma", gamma)?;
        Ok(NukerParams { ib, rb, alpha, beta, gamma })
    }

    pub fn surface_density(&self, radius: f64) -> f64 {
        i_nuker(radius, self.ib, self.rb, self.alpha, self.beta, self.gamma)
    }

    pub fn surface_density_slope(&self, radius: f64) -> f64 {
        di_nuker_dr(radius, self.ib, self.rb, self.alpha, self.beta, self.gamma)
    }

    /// Abel-deprojected luminosity density at radius `r`.
    ///
    /// # Errors
    /// - [`ProfileError::InvalidDeprojectionRadius`](crate::profiles::ProfileError::InvalidDeprojectionRadius)
    ///   if `r` is not finite and positive.
    /// - [`ProfileError::Quadrature`](crate::profiles::ProfileError::Quadrature)
    ///   if the integral fails.
    pub fn density(&self, r: f64, opts: &AbelOptions) -> ProfileResult<f64> {
        abel_deproject(r, |radius| self.surface_density_slope(radius), opts)
    }
}
