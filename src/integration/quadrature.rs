//! Adaptive Simpson quadrature on finite intervals.
//!
//! Purpose
//! -------
//! Integrate smooth scalar functions to a requested tolerance. Used by the
//! Abel deprojection of surface-density profiles, where the integrand is
//! smooth after the `R = r·cosh(t)` substitution but varies over several
//! decades in `t`.
//!
//! Key behaviors
//! -------------
//! - Recursive bisection with the classical `|S₂ − S₁| ≤ 15·tol` acceptance
//!   test and Richardson correction `S₂ + (S₂ − S₁)/15`.
//! - Every branch is bisected at least `MIN_DEPTH` times before it may be
//!   accepted, so a peak that falls between the first few samples is not
//!   missed.
//! - The tolerance is halved at each bisection, so the per-panel targets sum
//!   to the global target.
//!
//! Invariants & assumptions
//! ------------------------
//! - Bounds must be finite; `lower > upper` integrates with a sign flip.
//! - Any non-finite integrand value aborts with
//!   [`QuadError::NonFiniteIntegrand`].
//! - A branch that reaches `max_depth` without meeting its target aborts with
//!   [`QuadError::MaxDepthExceeded`]; partial sums are not returned.
use crate::integration::{
    errors::{QuadError, QuadResult},
    options::QuadOptions,
};
use log::debug;

// Bisections required on every branch before the acceptance test applies.
const MIN_DEPTH: usize = 5;

/// Result of a successful adaptive integration.
///
/// - `value`: Richardson-corrected integral estimate.
/// - `error_estimate`: sum of the per-panel error estimates `|S₂ − S₁|/15`.
/// - `evaluations`: number of integrand evaluations performed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadEstimate {
    pub value: f64,
    pub error_estimate: f64,
    pub evaluations: usize,
}

/// Integrate `f` over `[lower, upper]` with adaptive Simpson's rule.
///
/// Parameters
/// ----------
/// - `f`: integrand; must be finite everywhere it is sampled.
/// - `lower`, `upper`: finite integration bounds.
/// - `opts`: validated tolerances and depth budget.
///
/// Returns
/// -------
/// `QuadResult<QuadEstimate>`
///   - `Ok` with the integral, an error estimate, and the evaluation count.
///
/// Errors
/// ------
/// - [`QuadError::InvalidInterval`] if a bound is NaN/±∞.
/// - [`QuadError::NonFiniteIntegrand`] if `f` returns NaN/±∞ at a sample.
/// - [`QuadError::MaxDepthExceeded`] if a panel cannot meet its target.
///
/// Examples
/// --------
/// ```rust
/// # use galdyn::integration::{options::QuadOptions, quadrature::adaptive_simpson};
/// let est = adaptive_simpson(|x: f64| x.sin(), 0.0, std::f64::consts::PI, &QuadOptions::default())
///     .unwrap();
/// assert!((est.value - 2.0).abs() < 1e-8);
/// ```
pub fn adaptive_simpson<F>(f: F, lower: f64, upper: f64, opts: &QuadOptions) -> QuadResult<QuadEstimate>
where
    F: Fn(f64) -> f64,
{
    if !lower.is_finite() || !upper.is_finite() {
        return Err(QuadError::InvalidInterval { lower, upper });
    }
    if lower == upper {
        return Ok(QuadEstimate { value: 0.0, error_estimate: 0.0, evaluations: 0 });
    }

    let mut integrator = Integrator {
        f: &f,
        min_depth: MIN_DEPTH.min(opts.max_depth),
        max_depth: opts.max_depth,
        evaluations: 0,
        error_estimate: 0.0,
    };

    let fa = integrator.eval(lower)?;
    let fb = integrator.eval(upper)?;
    let mid = 0.5 * (lower + upper);
    let fm = integrator.eval(mid)?;
    let whole = simpson(lower, upper, fa, fm, fb);
    let tol = opts.abs_tol.max(opts.rel_tol * whole.abs());

    let value = integrator.refine(Panel { a: lower, fa, m: mid, fm, b: upper, fb, whole }, tol, 0)?;
    debug!(
        "adaptive Simpson on [{lower}, {upper}]: value = {value}, error estimate = {}, {} evaluations",
        integrator.error_estimate, integrator.evaluations
    );
    Ok(QuadEstimate {
        value,
        error_estimate: integrator.error_estimate,
        evaluations: integrator.evaluations,
    })
}

fn simpson(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

// Endpoints, midpoint, and the three-point estimate over [a, b].
#[derive(Clone, Copy)]
struct Panel {
    a: f64,
    fa: f64,
    m: f64,
    fm: f64,
    b: f64,
    fb: f64,
    whole: f64,
}

struct Integrator<'f, F> {
    f: &'f F,
    min_depth: usize,
    max_depth: usize,
    evaluations: usize,
    error_estimate: f64,
}

impl<F: Fn(f64) -> f64> Integrator<'_, F> {
    fn eval(&mut self, x: f64) -> QuadResult<f64> {
        self.evaluations += 1;
        let value = (self.f)(x);
        if !value.is_finite() {
            return Err(QuadError::NonFiniteIntegrand { x, value });
        }
        Ok(value)
    }

    fn refine(&mut self, p: Panel, tol: f64, depth: usize) -> QuadResult<f64> {
        let lm = 0.5 * (p.a + p.m);
        let rm = 0.5 * (p.m + p.b);
        let flm = self.eval(lm)?;
        let frm = self.eval(rm)?;
        let left = simpson(p.a, p.m, p.fa, flm, p.fm);
        let right = simpson(p.m, p.b, p.fm, frm, p.fb);
        let delta = left + right - p.whole;

        if depth >= self.min_depth && delta.abs() <= 15.0 * tol {
            self.error_estimate += delta.abs() / 15.0;
            return Ok(left + right + delta / 15.0);
        }
        if depth >= self.max_depth {
            return Err(QuadError::MaxDepthExceeded {
                depth,
                lower: p.a,
                upper: p.b,
                error_estimate: delta.abs() / 15.0,
            });
        }

        let left_panel = Panel { a: p.a, fa: p.fa, m: lm, fm: flm, b: p.m, fb: p.fm, whole: left };
        let right_panel = Panel { a: p.m, fa: p.fm, m: rm, fm: frm, b: p.b, fb: p.fb, whole: right };
        Ok(self.refine(left_panel, 0.5 * tol, depth + 1)?
            + self.refine(right_panel, 0.5 * tol, depth + 1)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{E, PI};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Accuracy on integrals with closed forms (polynomial, trigonometric,
    //   exponential, and a sharply peaked Gaussian).
    // - Degenerate and reversed intervals.
    // - Every error branch: non-finite bounds, non-finite integrand, and depth
    //   exhaustion.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify accuracy on smooth integrands with known values.
    //
    // Given
    // -----
    // - ∫₀¹ x² dx = 1/3, ∫₀^π sin x dx = 2, ∫₀¹ eˣ dx = e − 1.
    //
    // Expect
    // ------
    // - Each estimate within 1e-9 of the exact value.
    fn adaptive_simpson_matches_closed_forms() {
        let opts = QuadOptions::default();
        let cases: [(fn(f64) -> f64, f64, f64, f64); 3] = [
            (|x| x * x, 0.0, 1.0, 1.0 / 3.0),
            (f64::sin, 0.0, PI, 2.0),
            (f64::exp, 0.0, 1.0, E - 1.0),
        ];
        for (f, a, b, exact) in cases {
            let est = adaptive_simpson(f, a, b, &opts).expect("smooth integrand should converge");
            assert_relative_eq!(est.value, exact, epsilon = 1e-9);
            assert!(est.evaluations >= 3);
        }
    }

    #[test]
    // Purpose
    // -------
    // A narrow peak far from the initial sample points must still be found.
    //
    // Given
    // -----
    // - A unit-normalized Gaussian of width 0.05 centred at 3.7 on [0, 40].
    //
    // Expect
    // ------
    // - The integral is 1 to within 1e-8.
    fn adaptive_simpson_resolves_narrow_peak() {
        let s = 0.05;
        let f = |x: f64| (-0.5 * ((x - 3.7) / s).powi(2)).exp() / (s * (2.0 * PI).sqrt());
        let est = adaptive_simpson(f, 0.0, 40.0, &QuadOptions::default()).unwrap();
        assert_relative_eq!(est.value, 1.0, epsilon = 1e-8);
    }

    #[test]
    // Purpose
    // -------
    // Degenerate intervals integrate to zero and reversed intervals flip sign.
    fn adaptive_simpson_degenerate_and_reversed_intervals() {
        let opts = QuadOptions::default();
        let zero = adaptive_simpson(|x: f64| x.exp(), 2.0, 2.0, &opts).unwrap();
        assert_eq!(zero.value, 0.0);
        assert_eq!(zero.evaluations, 0);

        let forward = adaptive_simpson(|x: f64| x.cos(), 0.0, 1.0, &opts).unwrap();
        let backward = adaptive_simpson(|x: f64| x.cos(), 1.0, 0.0, &opts).unwrap();
        assert_relative_eq!(forward.value, -backward.value, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Ensure input and integrand failures surface as typed errors.
    fn adaptive_simpson_reports_invalid_bounds_and_integrand() {
        let opts = QuadOptions::default();
        assert!(matches!(
            adaptive_simpson(|x: f64| x, 0.0, f64::INFINITY, &opts),
            Err(QuadError::InvalidInterval { .. })
        ));
        // 1/x is sampled at x = 0 on the first evaluation.
        assert!(matches!(
            adaptive_simpson(|x: f64| 1.0 / x, 0.0, 1.0, &opts),
            Err(QuadError::NonFiniteIntegrand { x, .. }) if x == 0.0
        ));
    }

    #[test]
    // Purpose
    // -------
    // Ensure a too-small depth budget is reported rather than silently
    // returning an inaccurate value.
    //
    // Given
    // -----
    // - A rapidly oscillating integrand, tight tolerance, `max_depth = 3`.
    //
    // Expect
    // ------
    // - `QuadError::MaxDepthExceeded` with `depth == 3`.
    fn adaptive_simpson_reports_depth_exhaustion() {
        let opts = QuadOptions::new(1e-14, 0.0, 3).unwrap();
        let err = adaptive_simpson(|x: f64| (40.0 * x).sin(), 0.0, 10.0, &opts).unwrap_err();
        assert!(matches!(err, QuadError::MaxDepthExceeded { depth: 3, .. }), "got {err:?}");
    }
}
