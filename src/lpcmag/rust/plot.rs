//! Python support for light curve plots.
use lpcmag_core::plot::{render_svg, LightCurvePlot};
use lpcmag_core::prelude::DEFAULT_MODEL;
use pyo3::prelude::*;

/// Plot median pre and post-perihelion light curves of new, int, and old comets.
///
/// Brightening slopes are annotated on the curves in mag / log10(au).
///
/// Parameters
/// ----------
/// r_min :
///     Closest heliocentric distance in au, defaults to 1.
/// r_max :
///     Furthest heliocentric distance in au, defaults to 10.
/// n_samples :
///     Number of distances sampled for each curve, defaults to 100.
/// width :
///     Width of the image in pixels.
/// height :
///     Height of the image in pixels.
///
/// Returns
/// -------
/// str
///     The plot as an SVG document.
#[pyfunction]
#[pyo3(name = "brightening_curves_svg", signature = (r_min=1.0, r_max=10.0, n_samples=100, width=1000, height=500))]
pub fn brightening_curves_svg_py(
    r_min: f64,
    r_max: f64,
    n_samples: usize,
    width: u32,
    height: u32,
) -> PyResult<String> {
    let plot = LightCurvePlot {
        r_min,
        r_max,
        n_samples,
        size: (width, height),
        ..Default::default()
    };
    Ok(render_svg(&DEFAULT_MODEL, &plot)?)
}
