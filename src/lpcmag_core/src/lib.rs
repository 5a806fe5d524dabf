//! # lpcmag Core
//! Median heliocentric brightening curves of long-period comets.
//!
//! Total heliocentric magnitudes are computed from a broken power law in distance,
//! with parameters that depend on the orbital arc (pre or post perihelion) and on
//! the dynamical Oort group of the comet. The parameters are the median values fit
//! to a sample of over 200 comets:
//!
//! Lacerda et al. 2025, A&A, 697, A210
//! <https://doi.org/10.1051/0004-6361/202453565>
//!
//! This crate is left as a stand alone Rust crate, completely independent of the
//! Python wrappers, so that the model may be used from Rust directly.
//!
//! Magnitudes returned here are heliocentric. Apparent magnitudes are obtained by
//! adding `5 * log10(observer distance)`, which is left to the caller.
//!

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

pub mod constants;
pub mod errors;
pub mod flux;
#[cfg(feature = "plot")]
pub mod plot;

/// Common useful imports
pub mod prelude {
    pub use crate::constants::TRANSITION_R;
    pub use crate::errors::{Error, LpcResult};
    pub use crate::flux::{
        brightening_params, total_heliocentric_mag, total_heliocentric_mag_str,
        BrighteningModel, BrighteningParams, BrighteningTable, HelioDistance, OortGroup,
        OrbitalArc, DEFAULT_MODEL,
    };
}
