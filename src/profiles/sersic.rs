//! Sersic profiles — surface brightness, magnitudes, luminosity, and density.
//!
//! Purpose
//! -------
//! Evaluate the Sersic law `I(R) = I0 · exp(−b(n)·(R/Re)^(1/n))` and the
//! quantities derived from it: the magnitude-space profile `μ(R)`, the
//! effective and central surface brightness implied by a total magnitude,
//! total and enclosed luminosity, and the de-projected luminosity density.
//!
//! Key behaviors
//! -------------
//! - Free functions (`b_cb`, `i_sersic`, `mu_sersic`, `mu_eff_sersic`,
//!   `mu0_sersic`, …) are closed-form and never fail: invalid inputs propagate
//!   as NaN/±inf through the floating-point formulas.
//! - `*_array` variants evaluate element-wise over any `ndarray` view (or
//!   slice) of projected radii and preserve its shape.
//! - [`SersicParams`] bundles validated `(I0, Re, n)` and exposes the same
//!   quantities as methods, plus numerical Abel deprojection.
//!
//! Invariants & assumptions
//! ------------------------
//! - `b(n)` uses the Ciotti & Bertin (1999) asymptotic expansion, accurate to
//!   better than 1e-4 relative for `n ≥ 0.5`.
//! - Magnitudes follow the astronomical convention `μ = −2.5·log10(I) + const`.
//! - Luminosities assume circular symmetry (`dL = 2πR·I(R)·dR`).
//!
//! Conventions
//! -----------
//! - `radius` is projected radius `R`; `r` is de-projected radius.
//! - `Γ(2n)` enters through `ln Γ` so large indices do not overflow.
use crate::{
    integration::options::AbelOptions,
    profiles::{
        deprojection::abel_deproject,
        errors::ProfileResult,
        validation::{verify_finite, verify_positive},
    },
};
use ndarray::{Array, ArrayView, AsArray, Dimension};
use statrs::function::gamma::{checked_gamma_lr, ln_gamma};
use std::f64::consts::{LN_10, PI};

/// Magnitudes per natural-log unit of intensity: `2.5 / ln 10`.
const MAG_PER_NEPER: f64 = 2.5 / LN_10;

/// Ciotti & Bertin (1999) approximation to the Sersic `b(n)`.
///
/// `b(n) = −1/3 + 2n + 4/(405n) + 46/(25515n²)`, chosen so that `Re` encloses
/// half the total light. No validation: `n = 0` yields ±inf/NaN.
///
/// # Examples
/// ```rust
/// # use galdyn::profiles::sersic::b_cb;
/// assert!((b_cb(4.0) - 7.669).abs() < 1e-3);
/// ```
pub fn b_cb(n: f64) -> f64 {
    -1.0 / 3.0 + 2.0 * n + 4.0 / (405.0 * n) + 46.0 / (25515.0 * n * n)
}

/// Sersic surface brightness `I0 · exp(−b(n)·(R/Re)^(1/n))`.
///
/// # Parameters
/// - `radius`: projected radius `R`.
/// - `i0`: central surface brightness.
/// - `re`: effective radius.
/// - `n`: Sersic index.
pub fn i_sersic(radius: f64, i0: f64, re: f64, n: f64) -> f64 {
    i0 * (-b_cb(n) * (radius / re).powf(1.0 / n)).exp()
}

/// Radial derivative `dI/dR` of [`i_sersic`].
///
/// `dI/dR = −I(R) · b/(n·Re) · (R/Re)^(1/n − 1)`.
pub fn di_sersic_dr(radius: f64, i0: f64, re: f64, n: f64) -> f64 {
    let b = b_cb(n);
    let x = radius / re;
    -i_sersic(radius, i0, re, n) * b / (n * re) * x.powf(1.0 / n - 1.0)
}

/// Sersic profile in magnitudes per unit area:
/// `μ(R) = μ_eff + (2.5·b/ln 10)·((R/Re)^(1/n) − 1)`.
pub fn mu_sersic(radius: f64, mu_eff: f64, re: f64, n: f64) -> f64 {
    mu_eff + MAG_PER_NEPER * b_cb(n) * ((radius / re).powf(1.0 / n) - 1.0)
}

/// Surface brightness at the effective radius implied by a total magnitude.
///
/// ```text
/// μ_eff = mtot + 5·log10(Re) + 2.5·log10(2π·n·e^b·Γ(2n) / b^(2n))
/// ```
///
/// This inverts the total-luminosity integral of the Sersic profile
/// (see [`l_sersic_tot`]): a profile with `I(Re) = 10^(−0.4·μ_eff)` has total
/// magnitude `mtot`.
///
/// Both logarithms are base 10, as magnitudes require; a natural-log variant
/// of this formula does not round-trip through [`l_sersic_tot`].
pub fn mu_eff_sersic(mtot: f64, re: f64, n: f64) -> f64 {
    let b = b_cb(n);
    let ln_shape = (2.0 * PI * n).ln() + b + ln_gamma(2.0 * n) - 2.0 * n * b.ln();
    mtot + 5.0 * re.log10() + MAG_PER_NEPER * ln_shape
}

/// Central surface brightness from the effective surface brightness:
/// [`mu_sersic`] evaluated at `R = 0`, i.e. `μ0 = μ_eff − 2.5·b/ln 10`.
pub fn mu0_sersic(mu_eff: f64, re: f64, n: f64) -> f64 {
    mu_sersic(0.0, mu_eff, re, n)
}

/// Central surface brightness directly from total magnitude.
///
/// Composition of [`mu_eff_sersic`] and [`mu0_sersic`].
pub fn mu0_sersic_from_total(mtot: f64, re: f64, n: f64) -> f64 {
    mu0_sersic(mu_eff_sersic(mtot, re, n), re, n)
}

/// Total luminosity `2π·n·I0·Re²·Γ(2n) / b^(2n)`.
pub fn l_sersic_tot(i0: f64, re: f64, n: f64) -> f64 {
    let b = b_cb(n);
    2.0 * PI * n * i0 * re * re * (ln_gamma(2.0 * n) - 2.0 * n * b.ln()).exp()
}

/// Luminosity enclosed within projected radius `R`.
///
/// `L(<R) = L_tot · P(2n, b·(R/Re)^(1/n))` with `P` the regularized lower
/// incomplete gamma function. `L(<0) = 0` and `L(<∞) = L_tot`; arguments
/// outside the domain (negative radius, non-positive index) yield NaN.
pub fn l_sersic(radius: f64, i0: f64, re: f64, n: f64) -> f64 {
    let x = b_cb(n) * (radius / re).powf(1.0 / n);
    // statrs rejects both endpoints of the gamma argument.
    let fraction = if x == 0.0 {
        0.0
    } else if x == f64::INFINITY {
        1.0
    } else {
        checked_gamma_lr(2.0 * n, x).unwrap_or(f64::NAN)
    };
    l_sersic_tot(i0, re, n) * fraction
}

/// Prugniel–Simien exponent `p(n) = 1 − 0.6097/n + 0.05463/n²`
/// (Lima Neto, Gerbal & Márquez 1999).
pub fn p_ln(n: f64) -> f64 {
    1.0 - 0.6097 / n + 0.05463 / (n * n)
}

/// Prugniel–Simien approximation to the de-projected Sersic density.
///
/// ```text
/// ν(r) = ν0 · (r/Re)^(−p) · exp(−b·(r/Re)^(1/n))
/// ν0   = I0 · b^(n(1−p)) · Γ(2n) / (2·Re·Γ(n(3−p)))
/// ```
///
/// The normalization makes the volume integral of `ν` equal
/// [`l_sersic_tot`]. Accurate to a few per cent for `0.6 ≤ n ≤ 10` and
/// `10⁻² ≤ r/Re ≤ 10³`.
pub fn nu_sersic(r: f64, i0: f64, re: f64, n: f64) -> f64 {
    let b = b_cb(n);
    let p = p_ln(n);
    let ln_norm = n * (1.0 - p) * b.ln() + ln_gamma(2.0 * n) - ln_gamma(n * (3.0 - p));
    let nu0 = i0 * ln_norm.exp() / (2.0 * re);
    let x = r / re;
    nu0 * x.powf(-p) * (-b * x.powf(1.0 / n)).exp()
}

/// Element-wise [`i_sersic`] over an array of projected radii.
///
/// # Examples
/// ```rust
/// # use galdyn::profiles::sersic::{i_sersic, i_sersic_array};
/// let radii = [0.5, 1.0, 2.0];
/// let out = i_sersic_array(&radii[..], 10.0, 1.0, 4.0);
/// assert_eq!(out[1], i_sersic(1.0, 10.0, 1.0, 4.0));
/// ```
pub fn i_sersic_array<'a, V, D>(radius: V, i0: f64, re: f64, n: f64) -> Array<f64, D>
where
    V: AsArray<'a, f64, D>,
    D: Dimension,
{
    let radius: ArrayView<'a, f64, D> = radius.into();
    radius.mapv(|x| i_sersic(x, i0, re, n))
}

/// Element-wise [`mu_sersic`] over an array of projected radii.
pub fn mu_sersic_array<'a, V, D>(radius: V, mu_eff: f64, re: f64, n: f64) -> Array<f64, D>
where
    V: AsArray<'a, f64, D>,
    D: Dimension,
{
    let radius: ArrayView<'a, f64, D> = radius.into();
    radius.mapv(|x| mu_sersic(x, mu_eff, re, n))
}

/// SersicParams — validated Sersic profile parameters.
///
/// Purpose
/// -------
/// Carry `(I0, Re, n)` after checking they describe a physical profile, so
/// methods can be called without re-validating and without NaN surprises
/// from a non-positive radius or index.
///
/// Fields
/// ------
/// - `i0`: central surface brightness (finite).
/// - `re`: effective radius (finite, > 0).
/// - `n`: Sersic index (finite, > 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SersicParams {
    pub i0: f64,
    pub re: f64,
    pub n: f64,
}

impl SersicParams {
    /// Construct validated Sersic parameters.
    ///
    /// # Errors
    /// - [`ProfileError::NonFiniteParam`](crate::profiles::ProfileError::NonFiniteParam)
    ///   if any parameter is NaN/±inf.
    /// - [`ProfileError::NonPositiveParam`](crate::profiles::ProfileError::NonPositiveParam)
    ///   if `re <= 0` or `n <= 0`.
    pub fn new(i0: f64, re: f64, n: f64) -> ProfileResult<Self> {
        let i0 = verify_finite("i0", i0)?;
        let re = verify_positive("re", re)?;
        let n = verify_positive("n", n)?;
        Ok(SersicParams { i0, re, n })
    }

    /// Construct parameters from a total magnitude, setting
    /// `I0 = 10^(−0.4·μ0)` with `μ0` from [`mu0_sersic_from_total`].
    ///
    /// # Errors
    /// - As [`SersicParams::new`]; also if `mtot` is not finite.
    pub fn from_total_magnitude(mtot: f64, re: f64, n: f64) -> ProfileResult<Self> {
        let mtot = verify_finite("mtot", mtot)?;
        let re = verify_positive("re", re)?;
        let n = verify_positive("n", n)?;
        let mu0 = mu0_sersic_from_total(mtot, re, n);
        SersicParams::new(10f64.powf(-0.4 * mu0), re, n)
    }

    /// `b(n)` for this profile.
    pub fn b(&self) -> f64 {
        b_cb(self.n)
    }

    /// Surface brightness at projected radius `radius`.
    pub fn surface_density(&self, radius: f64) -> f64 {
        i_sersic(radius, self.i0, self.re, self.n)
    }

    /// `dI/dR` at projected radius `radius`.
    pub fn surface_density_slope(&self, radius: f64) -> f64 {
        di_sersic_dr(radius, self.i0, self.re, self.n)
    }

    /// Surface brightness in magnitudes, `−2.5·log10(I(R))`.
    pub fn surface_brightness(&self, radius: f64) -> f64 {
        -2.5 * self.surface_density(radius).log10()
    }

    /// Total luminosity.
    pub fn luminosity_total(&self) -> f64 {
        l_sersic_tot(self.i0, self.re, self.n)
    }

    /// Luminosity enclosed within projected radius `radius`.
    pub fn luminosity_enclosed(&self, radius: f64) -> f64 {
        l_sersic(radius, self.i0, self.re, self.n)
    }

    /// Prugniel–Simien de-projected density at radius `r`.
    pub fn density(&self, r: f64) -> f64 {
        nu_sersic(r, self.i0, self.re, self.n)
    }

    /// Numerical Abel deprojection of the exact Sersic profile at radius `r`.
    ///
    /// # Errors
    /// - [`ProfileError::InvalidDeprojectionRadius`](crate::profiles::ProfileError::InvalidDeprojectionRadius)
    ///   if `r` is not finite and positive.
    /// - [`ProfileError::Quadrature`](crate::profiles::ProfileError::Quadrature)
    ///   if the integral fails.
    pub fn density_abel(&self, r: f64, opts: &AbelOptions) -> ProfileResult<f64> {
        abel_deproject(r, |radius| self.surface_density_slope(radius), opts)
    }
}
