//! Median brightening parameters from Lacerda et al. 2025, A&A, 697, A210.
//!
//! Arrays are ordered by Oort group: [new, int, old].

/// Heliocentric distance at which the pre-perihelion brightening slope changes, in au.
pub const TRANSITION_R: f64 = 3.16;

/// Pre-perihelion brightening slopes inside of [`TRANSITION_R`], in mag / log10(au).
pub const INBOUND_K_NEAR: [f64; 3] = [6.7285, 7.83575, 13.40275];

/// Pre-perihelion brightening slopes outside of [`TRANSITION_R`], in mag / log10(au).
pub const INBOUND_K_FAR: [f64; 3] = [12.847, 12.524, 14.632];

/// Pre-perihelion total magnitude at 1 au.
pub const INBOUND_M1: [f64; 3] = [8.28, 8.96, 11.58];

/// Post-perihelion global fading slopes, in mag / log10(au).
pub const OUTBOUND_K1: [f64; 3] = [11.54, 12.66, 13.21];

/// Post-perihelion total magnitude at 1 au.
pub const OUTBOUND_M1: [f64; 3] = [8.75, 9.71, 11.57];
