//! Core lpcmag library code, which are wrappers over the lpcmag_core rust package.
//! Primarily enables python interfaces

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]

use lpcmag_core::constants::TRANSITION_R;
use pyo3::prelude::*;

pub mod flux;
pub mod plot;

/// Python module which exposes all of the compiled rust functions.
#[pymodule]
fn _core(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("TRANSITION_R", TRANSITION_R)?;

    m.add_function(wrap_pyfunction!(flux::total_heliocentric_mag_py, m)?)?;
    m.add_function(wrap_pyfunction!(flux::brightening_params_py, m)?)?;

    m.add_function(wrap_pyfunction!(plot::brightening_curves_svg_py, m)?)?;

    Ok(())
}
