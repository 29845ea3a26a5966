//! Scalar-or-array likelihood inputs and their broadcasting rules.
//!
//! Purpose
//! -------
//! Let likelihood functions accept a plain `f64` wherever a per-observation
//! array is accepted, mirroring element-wise numeric array semantics: scalars
//! and length-1 arrays stretch to the common length; two longer arrays must
//! agree.
//!
//! Key behaviors
//! -------------
//! - [`Sample`] wraps either a scalar or a borrowed 1-D view; `From` impls
//!   cover `f64`, slices, `Vec`, `Array1`, and `ArrayView1`.
//! - [`broadcast_len`] computes the common length of a set of named samples or
//!   reports which argument is incompatible.
//! - [`broadcast_to`] stretches one sample's view to that length without
//!   copying.
use crate::likelihood::errors::{LikelihoodError, LikelihoodResult};
use ndarray::{Array1, ArrayView1};

/// A likelihood argument: one value shared by all observations, or one value
/// per observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample<'a> {
    Scalar(f64),
    Array(ArrayView1<'a, f64>),
}

impl Sample<'_> {
    /// Number of values carried (1 for a scalar).
    pub fn len(&self) -> usize {
        match self {
            Sample::Scalar(_) => 1,
            Sample::Array(view) => view.len(),
        }
    }

    /// `true` for an empty array.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 1-D view over the values; a scalar becomes a length-1 view.
    pub fn view(&self) -> ArrayView1<'_, f64> {
        match self {
            Sample::Scalar(value) => ArrayView1::from(std::slice::from_ref(value)),
            Sample::Array(view) => view.view(),
        }
    }
}

impl From<f64> for Sample<'_> {
    fn from(value: f64) -> Self {
        Sample::Scalar(value)
    }
}

impl<'a> From<&'a [f64]> for Sample<'a> {
    fn from(values: &'a [f64]) -> Self {
        Sample::Array(ArrayView1::from(values))
    }
}

impl<'a> From<&'a Vec<f64>> for Sample<'a> {
    fn from(values: &'a Vec<f64>) -> Self {
        Sample::Array(ArrayView1::from(values.as_slice()))
    }
}

impl<'a> From<&'a Array1<f64>> for Sample<'a> {
    fn from(values: &'a Array1<f64>) -> Self {
        Sample::Array(values.view())
    }
}

impl<'a> From<ArrayView1<'a, f64>> for Sample<'a> {
    fn from(values: ArrayView1<'a, f64>) -> Self {
        Sample::Array(values)
    }
}

/// Common broadcast length of a set of named samples.
///
/// Scalars and length-1 arrays are compatible with any length. The first
/// array of another length sets the target; every later array must match it.
/// With no such array the result is 1. An empty array sets a target of 0.
///
/// # Errors
/// - [`LikelihoodError::ShapeMismatch`] naming the first incompatible
///   argument and the argument that set the target.
pub fn broadcast_len(args: &[(&'static str, &Sample<'_>)]) -> LikelihoodResult<usize> {
    let mut target: Option<(&'static str, usize)> = None;
    for &(name, sample) in args {
        let len = match sample {
            Sample::Scalar(_) => continue,
            Sample::Array(view) => view.len(),
        };
        if len == 1 {
            continue;
        }
        match target {
            None => target = Some((name, len)),
            Some((reference, expected)) if expected != len => {
                return Err(LikelihoodError::ShapeMismatch {
                    argument: name,
                    reference,
                    expected,
                    actual: len,
                });
            }
            Some(_) => {}
        }
    }
    Ok(target.map_or(1, |(_, len)| len))
}

/// Stretch `view` to length `len` (zero-stride for length-1 inputs).
///
/// # Errors
/// - [`LikelihoodError::ShapeMismatch`] if `view` is neither length 1 nor
///   `len`; cannot happen when `len` came from [`broadcast_len`] over the same
///   arguments.
pub fn broadcast_to<'v>(
    name: &'static str, view: &'v ArrayView1<'_, f64>, len: usize,
) -> LikelihoodResult<ArrayView1<'v, f64>> {
    view.broadcast(len).ok_or(LikelihoodError::ShapeMismatch {
        argument: name,
        reference: name,
        expected: len,
        actual: view.len(),
    })
}
