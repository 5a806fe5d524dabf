//! # Constants
//! Median brightening parameters of long-period comets.
//!
mod lacerda;

pub use lacerda::*;
