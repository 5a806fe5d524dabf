//! Scalar and sequence heliocentric distances.
use crate::errors::{Error, LpcResult};

/// Heliocentric distances in au, either a single value or a sequence of values.
///
/// Evaluation is element-wise, the output has the same shape as the input: a scalar
/// maps to a scalar, an array to an array of the same length, and slices or vectors
/// to a vector of the same length and order.
///
/// Distances must be finite and strictly positive. The first element which is not
/// fails the whole call, no partial results are returned.
pub trait HelioDistance {
    /// Shape of the evaluated output.
    type Output;

    /// Apply `func` to every distance after checking that it is inside the domain.
    fn try_eval<F: Fn(f64) -> f64>(self, func: F) -> LpcResult<Self::Output>;
}

/// Check that a heliocentric distance is finite and positive.
pub(crate) fn check_distance(r: f64) -> LpcResult<f64> {
    if r.is_finite() && r > 0.0 {
        Ok(r)
    } else {
        Err(Error::DomainError(format!(
            "Heliocentric distance must be finite and positive, found {}",
            r
        )))
    }
}

/// Same as [`check_distance`] but reports the position of the element in a sequence.
pub(crate) fn check_element(idx: usize, r: f64) -> LpcResult<f64> {
    if r.is_finite() && r > 0.0 {
        Ok(r)
    } else {
        Err(Error::DomainError(format!(
            "Heliocentric distance must be finite and positive, found {} at index {}",
            r, idx
        )))
    }
}

impl HelioDistance for f64 {
    type Output = f64;

    fn try_eval<F: Fn(f64) -> f64>(self, func: F) -> LpcResult<f64> {
        Ok(func(check_distance(self)?))
    }
}

impl HelioDistance for &[f64] {
    type Output = Vec<f64>;

    fn try_eval<F: Fn(f64) -> f64>(self, func: F) -> LpcResult<Vec<f64>> {
        self.iter()
            .enumerate()
            .map(|(idx, r)| check_element(idx, *r).map(&func))
            .collect()
    }
}

impl HelioDistance for Vec<f64> {
    type Output = Vec<f64>;

    fn try_eval<F: Fn(f64) -> f64>(self, func: F) -> LpcResult<Vec<f64>> {
        self.as_slice().try_eval(func)
    }
}

impl HelioDistance for &Vec<f64> {
    type Output = Vec<f64>;

    fn try_eval<F: Fn(f64) -> f64>(self, func: F) -> LpcResult<Vec<f64>> {
        self.as_slice().try_eval(func)
    }
}

impl<const N: usize> HelioDistance for [f64; N] {
    type Output = [f64; N];

    fn try_eval<F: Fn(f64) -> f64>(mut self, func: F) -> LpcResult<[f64; N]> {
        for (idx, r) in self.iter_mut().enumerate() {
            *r = func(check_element(idx, *r)?);
        }
        Ok(self)
    }
}

impl<const N: usize> HelioDistance for &[f64; N] {
    type Output = [f64; N];

    fn try_eval<F: Fn(f64) -> f64>(self, func: F) -> LpcResult<[f64; N]> {
        (*self).try_eval(func)
    }
}
