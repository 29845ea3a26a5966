//! Gaussian log-densities used by the likelihoods.
//!
//! Both functions are closed-form and fail-soft: `scale = 0` gives ±inf/NaN
//! and a negative scale gives NaN (through `ln(scale)`), which propagates to
//! the summed likelihood.

/// `½·ln(2π)`.
pub const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_8;

/// Log-density of `N(mean, scale²)` at `x`:
/// `−½·ln(2π) − ln(scale) − ½·((x − mean)/scale)²`.
///
/// # Examples
/// ```rust
/// # use galdyn::likelihood::pdf::lngauss;
/// let at_mean = lngauss(100.0, 100.0, 10.0);
/// let expected = -0.5 * (2.0 * std::f64::consts::PI * 100.0).ln();
/// assert!((at_mean - expected).abs() < 1e-12);
/// ```
pub fn lngauss(x: f64, mean: f64, scale: f64) -> f64 {
    let z = (x - mean) / scale;
    -LN_SQRT_2PI - scale.ln() - 0.5 * z * z
}

/// Log-density of a discrete tracer's velocity `x` about a zero mean, with
/// measurement `uncertainty` added in quadrature to the `intrinsic_scale`
/// (the model dispersion): `N(0, intrinsic_scale² + uncertainty²)`.
pub fn lngauss_discrete(x: f64, uncertainty: f64, intrinsic_scale: f64) -> f64 {
    lngauss(x, 0.0, intrinsic_scale.hypot(uncertainty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use statrs::distribution::{Continuous, Normal};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Agreement of `lngauss` with `statrs`' normal log-pdf.
    // - The quadrature combination in `lngauss_discrete`.
    // - Fail-soft propagation for zero/negative scales.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Cross-check against an independent implementation.
    //
    // Given
    // -----
    // - A grid of `(x, mean, scale)` with positive scales.
    //
    // Expect
    // ------
    // - `lngauss` equals `Normal::new(mean, scale).ln_pdf(x)` to 1e-12.
    fn lngauss_matches_statrs_normal() {
        for &(x, mean, scale) in &[(0.0, 0.0, 1.0), (3.2, -1.0, 0.5), (250.0, 180.0, 35.0)] {
            let reference = Normal::new(mean, scale).unwrap().ln_pdf(x);
            assert_relative_eq!(lngauss(x, mean, scale), reference, epsilon = 1e-12);
        }
        assert_relative_eq!(LN_SQRT_2PI, 0.5 * (2.0 * std::f64::consts::PI).ln(), epsilon = 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // The discrete form adds the uncertainty to the dispersion in quadrature.
    fn lngauss_discrete_adds_uncertainty_in_quadrature() {
        let (v, dv, sigma) = (-140.0, 30.0, 40.0);
        assert_relative_eq!(lngauss_discrete(v, dv, sigma), lngauss(v, 0.0, 50.0), epsilon = 1e-12);
        // Symmetric in its two scales.
        assert_relative_eq!(
            lngauss_discrete(v, dv, sigma),
            lngauss_discrete(v, sigma, dv),
            epsilon = 1e-14
        );
    }

    #[test]
    // Purpose
    // -------
    // Degenerate scales propagate instead of panicking.
    fn degenerate_scales_propagate() {
        assert!(lngauss(1.0, 0.0, -2.0).is_nan());
        assert!(!lngauss(1.0, 0.0, 0.0).is_finite());
        assert!(lngauss(0.0, 0.0, 0.0).is_nan());
        assert!(lngauss_discrete(0.0, 0.0, 0.0).is_nan());
    }
}
