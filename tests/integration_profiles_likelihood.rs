//! Integration tests for tracer profiles, deprojection, and likelihood scoring.
//!
//! Purpose
//! -------
//! - Validate the end-to-end path a dynamical-model fit takes through the
//!   crate: build a tracer profile from photometry, evaluate and deproject it,
//!   and score model predictions against data with the Gaussian-family
//!   likelihoods.
//! - Exercise realistic galaxy-scale parameter regimes (magnitudes, effective
//!   radii in kpc, dispersions in km/s) rather than toy edge cases only.
//!
//! Coverage
//! --------
//! - `profiles`:
//!   - `SersicParams::from_total_magnitude` and the luminosity integrals.
//!   - `SurfaceProfile` array evaluation and numerical Abel deprojection
//!     against the Prugniel–Simien closed form.
//! - `likelihood`:
//!   - `lnlike_density` on a profile-generated model.
//!   - `lnlike_continuous` / `lnlike_discrete` with mixed scalar and array
//!     inputs.
//!   - `lnlike_gmm` and `gmm_membership` on a two-population tracer sample.
//!
//! Exclusions
//! ----------
//! - Fine-grained checks of the building blocks (quadrature, softplus,
//!   validation, broadcasting rules); those are covered by unit tests.
//! - Jeans-equation solving and parameter fitting, which live outside this
//!   crate.
use approx::assert_relative_eq;
use galdyn::{
    integration::{AbelOptions, QuadOptions},
    likelihood::{
        ColorVelocityTracers, GmmComponent, LikelihoodError, gmm_membership, lngauss,
        lnlike_continuous, lnlike_density, lnlike_discrete, lnlike_gmm,
    },
    profiles::{SersicParams, SurfaceProfile},
};
use ndarray::{Array1, array};

/// Purpose
/// -------
/// Projected radii (kpc) spanning the inner core to several effective radii.
fn radial_grid() -> Array1<f64> {
    array![0.2, 0.5, 1.0, 2.0, 3.5, 5.0, 8.0, 12.0]
}

/// Purpose
/// -------
/// A two-population globular-cluster sample: three blue-colored tracers
/// followed by three red-colored ones.
///
/// Returns
/// -------
/// - `(v, dv, c, dc)`: velocities relative to systemic (km/s), their
///   uncertainties, `g − i` colors, and color uncertainties.
fn cluster_sample() -> (Array1<f64>, Array1<f64>, Array1<f64>, Array1<f64>) {
    (
        array![-260.0, 45.0, 190.0, -80.0, 20.0, 110.0],
        array![25.0, 15.0, 30.0, 20.0, 10.0, 25.0],
        array![0.78, 0.84, 0.80, 1.12, 1.18, 1.15],
        array![0.03, 0.04, 0.03, 0.03, 0.05, 0.04],
    )
}

#[test]
// Purpose
// -------
// Photometric parameters survive the magnitude → profile → luminosity path.
//
// Given
// -----
// - `m_tot = 10.8`, `Re = 4.2 kpc`, `n = 4` (a de Vaucouleurs elliptical).
//
// Expect
// ------
// - `−2.5·log10(L_tot)` recovers `m_tot`.
// - Half the light is enclosed within `Re`.
// - The surface brightness at `Re` is `μ_eff`.
fn sersic_from_total_magnitude_round_trips_photometry() {
    let (mtot, re, n) = (10.8, 4.2, 4.0);
    let params = SersicParams::from_total_magnitude(mtot, re, n).unwrap();

    assert_relative_eq!(-2.5 * params.luminosity_total().log10(), mtot, epsilon = 1e-8);
    assert_relative_eq!(
        params.luminosity_enclosed(re) / params.luminosity_total(),
        0.5,
        epsilon = 1e-3
    );
    assert_relative_eq!(
        params.surface_brightness(re),
        galdyn::profiles::mu_eff_sersic(mtot, re, n),
        epsilon = 1e-8
    );
}

#[test]
// Purpose
// -------
// Numerical Abel deprojection of the exact Sersic profile agrees with the
// Prugniel–Simien closed form, and the Nuker density is a decreasing cusp.
//
// Given
// -----
// - Sersic `n = 4`, `Re = 2`; Nuker with inner slope `γ = 0.5`.
// - Default Abel options and a tighter custom configuration.
//
// Expect
// ------
// - Abel and Prugniel–Simien agree within 5% at `r = Re`.
// - Both option sets give the same Abel density to 1e-5 relative.
// - Nuker densities are positive and strictly decreasing in `r`.
fn deprojected_densities_are_consistent() {
    let params = SersicParams::new(1.0, 2.0, 4.0).unwrap();
    let sersic = SurfaceProfile::Sersic(params);
    let default_opts = AbelOptions::default();
    let tight_opts = AbelOptions::new(QuadOptions::new(1e-13, 1e-10, 55).unwrap(), 45.0).unwrap();

    let abel = sersic.density(2.0, &default_opts).unwrap();
    assert_relative_eq!(abel, params.density(2.0), max_relative = 0.05);
    assert_relative_eq!(abel, sersic.density(2.0, &tight_opts).unwrap(), max_relative = 1e-5);

    let nuker = SurfaceProfile::nuker(80.0, 0.3, 2.0, 1.6, 0.5).unwrap();
    let densities: Vec<f64> = [0.05, 0.2, 0.5, 1.5, 4.0]
        .iter()
        .map(|&r| nuker.density(r, &default_opts).unwrap())
        .collect();
    assert!(densities.iter().all(|&nu| nu > 0.0));
    assert!(densities.windows(2).all(|w| w[0] > w[1]), "got {densities:?}");
}

#[test]
// Purpose
// -------
// A surface-density fit prefers the generating profile.
//
// Given
// -----
// - "Observed" densities equal to an `n = 4` model scaled by 1.03, with 5%
//   uncertainties.
// - The generating profile and an `n = 1` alternative with the same `I0, Re`.
//
// Expect
// ------
// - `lnlike_density` equals the explicit per-radius sum.
// - The generating profile scores higher than the alternative.
fn density_likelihood_prefers_generating_profile() {
    let radii = radial_grid();
    let truth = SurfaceProfile::sersic(5.0e3, 3.0, 4.0).unwrap();
    let other = SurfaceProfile::sersic(5.0e3, 3.0, 1.0).unwrap();

    let model = truth.surface_density_array(&radii);
    let observed = model.mapv(|i| 1.03 * i);
    let errors = observed.mapv(|i| 0.05 * i);

    let ll_truth = lnlike_density(&model, &observed, &errors).unwrap();
    let manual: f64 =
        (0..radii.len()).map(|k| lngauss(observed[k], model[k], errors[k])).sum();
    assert_relative_eq!(ll_truth, manual, epsilon = 1e-9);

    let ll_other =
        lnlike_density(&other.surface_density_array(&radii), &observed, &errors).unwrap();
    assert!(ll_truth > ll_other, "truth {ll_truth} vs alternative {ll_other}");
}

#[test]
// Purpose
// -------
// Dispersion likelihoods reduce arrays to scalars and report shape errors.
//
// Given
// -----
// - A five-bin dispersion profile scored against a flat 200 km/s model.
// - Discrete velocities with per-tracer uncertainties.
//
// Expect
// ------
// - Array inputs with scalar model/uncertainty sum one term per bin.
// - A continuous likelihood at the data beats one offset by 50 km/s.
// - Mismatched lengths surface as `ShapeMismatch`.
fn dispersion_likelihoods_reduce_and_validate_shapes() {
    let sigma = array![205.0, 198.0, 192.0, 185.0, 176.0];
    let ll = lnlike_continuous(200.0, &sigma, 8.0).unwrap();
    let manual: f64 = sigma.iter().map(|&s| lngauss(s, 200.0, 8.0)).sum();
    assert_relative_eq!(ll, manual, epsilon = 1e-10);
    assert!(ll > lnlike_continuous(250.0, &sigma, 8.0).unwrap());

    let (v, dv, _, _) = cluster_sample();
    let ll_discrete = lnlike_discrete(160.0, &v, &dv).unwrap();
    assert!(ll_discrete.is_finite());

    let short = array![10.0, 12.0];
    let err = lnlike_discrete(160.0, &v, &short).unwrap_err();
    assert_eq!(
        err,
        LikelihoodError::ShapeMismatch { argument: "dv", reference: "v", expected: 6, actual: 2 }
    );
    assert!(err.to_string().contains("`dv`"));
}

#[test]
// Purpose
// -------
// The two-population mixture behaves as a proper mixture.
//
// Given
// -----
// - Six clusters; blue component at color 0.8, red at 1.15, each with its own
//   dispersion.
//
// Expect
// ------
// - By concavity of `ln`, `lnlike_gmm(φ) ≥ φ·lnlike_gmm(1) + (1 − φ)·lnlike_gmm(0)`.
// - With `φ_b = 1` every tracer is blue with probability 1.
// - At `φ_b = 0.5` the blue-colored clusters have membership above 0.9 and the
//   red-colored ones below 0.1.
fn color_velocity_mixture_scores_and_classifies() {
    let (v, dv, c, dc) = cluster_sample();
    let tracers = ColorVelocityTracers::new(&v, &dv, &c, &dc);
    let blue = GmmComponent::new(190.0, 0.80, 0.05);
    let red = GmmComponent::new(150.0, 1.15, 0.05);

    let phi = 0.4;
    let mixed = lnlike_gmm(&blue, &red, &tracers, phi).unwrap();
    let all_blue = lnlike_gmm(&blue, &red, &tracers, 1.0).unwrap();
    let all_red = lnlike_gmm(&blue, &red, &tracers, 0.0).unwrap();
    assert!(mixed.is_finite() && all_blue.is_finite() && all_red.is_finite());
    assert!(mixed >= phi * all_blue + (1.0 - phi) * all_red);

    let certain = gmm_membership(&blue, &red, &tracers, 1.0).unwrap();
    assert!(certain.iter().all(|&p| p == 1.0), "got {certain}");

    let p = gmm_membership(&blue, &red, &tracers, 0.5).unwrap();
    assert_eq!(p.len(), 6);
    assert!(p.iter().take(3).all(|&x| x > 0.9), "got {p}");
    assert!(p.iter().skip(3).all(|&x| x < 0.1), "got {p}");
}
