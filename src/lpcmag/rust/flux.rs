//! Python support for total heliocentric magnitudes.
use std::str::FromStr;

use lpcmag_core::prelude::*;
use pyo3::prelude::*;

/// Polymorphic support for heliocentric distances.
#[derive(Debug, FromPyObject)]
pub enum DistanceLike {
    /// A single distance in au.
    Single(f64),

    /// A list of distances in au.
    Many(Vec<f64>),
}

/// Magnitudes, shaped like the distances they were computed from.
#[derive(Debug, IntoPyObject)]
pub enum MagLike {
    /// A single magnitude.
    Single(f64),

    /// A list of magnitudes.
    Many(Vec<f64>),
}

/// Calculate total heliocentric magnitude as function of heliocentric distance.
///
/// Separates calculation by orbital arc and Oort group using median brightening
/// parameters from a sample of 200+ comets, Lacerda et al. 2025, A&A, 697, A210.
///
/// Pre-perihelion brightening is a broken power law, with the slope changing at
/// :py:data:`TRANSITION_R` (3.16 au). Post-perihelion fading uses a single slope.
///
/// Parameters
/// ----------
/// distance :
///     Heliocentric distance in au, either a single float or a sequence of floats,
///     such as a list or 1D numpy array. All distances must be finite and positive.
/// orbital_arc :
///     Orbital phase, one of 'inbound' (pre-perihelion) or 'outbound'
///     (post-perihelion), defaults to 'inbound'.
/// oort_group :
///     Oort dynamical group, one of 'new', 'int', or 'old', defaults to 'new'.
///
/// Returns
/// -------
/// float or list
///     Median total heliocentric magnitude. A float distance returns a float, a
///     sequence of distances returns a Python list of floats in the same order, not a
///     numpy array, wrap it with `numpy.asarray` if array operations are needed.
///     Convert to apparent magnitude by adding `5 * log10(observer distance)`.
#[pyfunction]
#[pyo3(name = "total_heliocentric_mag", signature = (distance, orbital_arc="inbound", oort_group="new"))]
pub fn total_heliocentric_mag_py(
    distance: DistanceLike,
    orbital_arc: &str,
    oort_group: &str,
) -> PyResult<MagLike> {
    let group = OortGroup::from_str(oort_group)?;
    let arc = OrbitalArc::from_str(orbital_arc)?;
    Ok(match distance {
        DistanceLike::Single(r) => MagLike::Single(total_heliocentric_mag(r, arc, group)?),
        DistanceLike::Many(r) => MagLike::Many(DEFAULT_MODEL.total_mag_par(&r, arc, group)?),
    })
}

/// Median brightening parameters of an Oort group on an orbital arc.
///
/// Parameters
/// ----------
/// orbital_arc :
///     Orbital phase, one of 'inbound' or 'outbound', defaults to 'inbound'.
/// oort_group :
///     Oort dynamical group, one of 'new', 'int', or 'old', defaults to 'new'.
///
/// Returns
/// -------
/// tuple
///     (k_near, k_far, k1, m1), the slopes inside and outside of the transition
///     distance, the post-perihelion fading slope, and the magnitude at 1 au.
#[pyfunction]
#[pyo3(name = "brightening_params", signature = (orbital_arc="inbound", oort_group="new"))]
pub fn brightening_params_py(
    orbital_arc: &str,
    oort_group: &str,
) -> PyResult<(f64, f64, f64, f64)> {
    let group = OortGroup::from_str(oort_group)?;
    let arc = OrbitalArc::from_str(orbital_arc)?;
    let params = brightening_params(arc, group);
    Ok((params.k_near, params.k_far, params.k1, params.m1))
}
