//! Surface-density profile families behind a single type.
//!
//! [`SurfaceProfile`] lets model code hold "some tracer profile" without
//! generics: it dispatches surface density, its slope, array evaluation, and
//! deprojection to the Sersic or Nuker implementation.
use crate::{
    integration::options::AbelOptions,
    profiles::{errors::ProfileResult, nuker::NukerParams, sersic::SersicParams},
};
use ndarray::{Array, ArrayView, AsArray, Dimension};

/// Supported surface-density profile families.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceProfile {
    /// Sersic law with validated `(I0, Re, n)`.
    Sersic(SersicParams),
    /// Nuker double power law with validated `(Ib, Rb, α, β, γ)`.
    Nuker(NukerParams),
}

impl SurfaceProfile {
    /// Validated Sersic profile.
    ///
    /// # Errors
    /// - As [`SersicParams::new`].
    pub fn sersic(i0: f64, re: f64, n: f64) -> ProfileResult<Self> {
        Ok(SurfaceProfile::Sersic(SersicParams::new(i0, re, n)?))
    }

    /// Validated Nuker profile.
    ///
    /// # Errors
    /// - As [`NukerParams::new`].
    pub fn nuker(ib: f64, rb: f64, alpha: f64, beta: f64, gamma: f64) -> ProfileResult<Self> {
        Ok(SurfaceProfile::Nuker(NukerParams::new(ib, rb, alpha, beta, gamma)?))
    }

    /// Surface density at projected radius `radius`.
    pub fn surface_density(&self, radius: f64) -> f64 {
        match self {
            SurfaceProfile::Sersic(p) => p.surface_density(radius),
            SurfaceProfile::Nuker(p) => p.surface_density(radius),
        }
    }

    /// `dI/dR` at projected radius `radius`.
    pub fn surface_density_slope(&self, radius: f64) -> f64 {
        match self {
            SurfaceProfile::Sersic(p) => p.surface_density_slope(radius),
            SurfaceProfile::Nuker(p) => p.surface_density_slope(radius),
        }
    }

    /// Element-wise surface density over an array of projected radii.
    pub fn surface_density_array<'a, V, D>(&self, radius: V) -> Array<f64, D>
    where
        V: AsArray<'a, f64, D>,
        D: Dimension,
    {
        let radius: ArrayView<'a, f64, D> = radius.into();
        radius.mapv(|x| self.surface_density(x))
    }

    /// De-projected luminosity density at radius `r`.
    ///
    /// Both families use numerical Abel deprojection of the exact profile so
    /// they are directly comparable; the closed-form Prugniel–Simien
    /// approximation remains available as [`SersicParams::density`].
    ///
    /// # Errors
    /// - As [`abel_deproject`](crate::profiles::deprojection::abel_deproject).
    pub fn density(&self, r: f64, opts: &AbelOptions) -> ProfileResult<f64> {
        match self {
            SurfaceProfile::Sersic(p) => p.density_abel(r, opts),
            SurfaceProfile::Nuker(p) => p.density(r, opts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::{errors::ProfileError, nuker::i_nuker, sersic::i_sersic};

    #[test]
    // Purpose
    // -------
    // Dispatch reaches the matching family implementation.
    fn surface_profile_dispatches_to_family() {
        let sersic = SurfaceProfile::sersic(2.0, 1.5, 3.0).unwrap();
        let nuker = SurfaceProfile::nuker(4.0, 0.5, 2.0, 1.7, 0.2).unwrap();
        assert_eq!(sersic.surface_density(0.7), i_sersic(0.7, 2.0, 1.5, 3.0));
        assert_eq!(nuker.surface_density(0.7), i_nuker(0.7, 4.0, 0.5, 2.0, 1.7, 0.2));

        let radii = [0.2, 0.5, 2.0];
        let out = nuker.surface_density_array(&radii[..]);
        assert_eq!(out[1], 4.0);
    }

    #[test]
    // Purpose
    // -------
    // Deprojection goes through the family's exact profile.
    fn surface_profile_density_matches_family_method() {
        let opts = AbelOptions::default();
        let params = SersicParams::new(1.0, 1.0, 2.0).unwrap();
        let profile = SurfaceProfile::Sersic(params);
        assert_eq!(profile.density(0.8, &opts), params.density_abel(0.8, &opts));
        assert!(profile.density(0.8, &opts).unwrap() > 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Constructors forward validation errors.
    fn surface_profile_constructors_validate() {
        assert!(matches!(
            SurfaceProfile::sersic(1.0, 1.0, 0.0),
            Err(ProfileError::NonPositiveParam { name: "n", .. })
        ));
        assert!(matches!(
            SurfaceProfile::nuker(1.0, 0.0, 1.0, 1.0, 1.0),
            Err(ProfileError::NonPositiveParam { name: "rb", .. })
        ));
    }
}
