//! # Flux
//! Brightening of long-period comets as a function of heliocentric distance.
//!
//! There are a few pieces contained here:
//! [`BrighteningParams`] - Slopes and 1 au magnitude of a single brightening curve.
//! [`BrighteningTable`] - One set of parameters per Oort group and orbital arc.
//! [`BrighteningModel`] - Evaluates total heliocentric magnitudes from the table.
//! [`HelioDistance`] - Scalar or sequence inputs to the model.
//!
mod comets;
mod distance;
mod params;

pub use comets::*;
pub use distance::*;
pub use params::*;
