use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{INBOUND_K_FAR, INBOUND_K_NEAR, INBOUND_M1, OUTBOUND_K1, OUTBOUND_M1};
use crate::errors::{Error, LpcResult};

/// Dynamical classification of a long-period comet by its orbital history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum OortGroup {
    /// Dynamically new comets, on their first passage into the inner solar system.
    #[default]
    #[serde(rename = "new")]
    New,

    /// Intermediate comets.
    #[serde(rename = "int")]
    Intermediate,

    /// Dynamically old comets, which have made many passages.
    #[serde(rename = "old")]
    Old,
}

impl OortGroup {
    /// All Oort groups, in table order.
    pub const ALL: [OortGroup; 3] = [OortGroup::New, OortGroup::Intermediate, OortGroup::Old];

    /// Short name of the group, as accepted by [`OortGroup::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            OortGroup::New => "new",
            OortGroup::Intermediate => "int",
            OortGroup::Old => "old",
        }
    }

    fn index(self) -> usize {
        match self {
            OortGroup::New => 0,
            OortGroup::Intermediate => 1,
            OortGroup::Old => 2,
        }
    }
}

impl FromStr for OortGroup {
    type Err = Error;

    fn from_str(s: &str) -> LpcResult<Self> {
        match s {
            "new" => Ok(OortGroup::New),
            "int" => Ok(OortGroup::Intermediate),
            "old" => Ok(OortGroup::Old),
            _ => Err(Error::InvalidArgument(format!("Invalid oort group: {}", s))),
        }
    }
}

impl fmt::Display for OortGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Orbital phase of the comet relative to perihelion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrbitalArc {
    /// Pre-perihelion, approaching the sun.
    #[default]
    Inbound,

    /// Post-perihelion, receding from the sun.
    Outbound,
}

impl OrbitalArc {
    /// Both orbital arcs, in table order.
    pub const ALL: [OrbitalArc; 2] = [OrbitalArc::Inbound, OrbitalArc::Outbound];

    /// Name of the arc, as accepted by [`OrbitalArc::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            OrbitalArc::Inbound => "inbound",
            OrbitalArc::Outbound => "outbound",
        }
    }

    fn index(self) -> usize {
        match self {
            OrbitalArc::Inbound => 0,
            OrbitalArc::Outbound => 1,
        }
    }
}

impl FromStr for OrbitalArc {
    type Err = Error;

    fn from_str(s: &str) -> LpcResult<Self> {
        match s {
            "inbound" => Ok(OrbitalArc::Inbound),
            "outbound" => Ok(OrbitalArc::Outbound),
            _ => Err(Error::InvalidArgument(format!("Invalid arc: {}", s))),
        }
    }
}

impl fmt::Display for OrbitalArc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Brightening parameters of a single total magnitude curve.
///
/// The curve is a broken power law in heliocentric distance `r`, linear in
/// `log10(r)` on either side of the transition distance `R`:
///
/// m1 + k_near * log10(r)                                     for r < R
/// m1 + log10(R) * (k_near - k_far) + k_far * log10(r)        for r >= R
///
/// The far branch is offset so the two branches meet at `R`. Post-perihelion curves
/// additionally fade with `k1 * log10(r)` at all distances, their `k_near` and `k_far`
/// are zero so the outbound curve is the single law `m1 + k1 * log10(r)`.
///
/// Slopes do not include the 2.5x factor of the classical cometary magnitude system,
/// matching the M1/K1 definitions used by JPL Horizons.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct BrighteningParams {
    /// Brightening slope inside of the transition distance, mag / log10(au).
    pub k_near: f64,

    /// Brightening slope outside of the transition distance, mag / log10(au).
    pub k_far: f64,

    /// Post-perihelion fading slope, mag / log10(au).
    pub k1: f64,

    /// Total magnitude at 1 au.
    pub m1: f64,
}

impl BrighteningParams {
    /// Create a new set of brightening parameters.
    pub fn new(k_near: f64, k_far: f64, k1: f64, m1: f64) -> Self {
        Self {
            k_near,
            k_far,
            k1,
            m1,
        }
    }

    /// Pre-perihelion parameters, a broken power law with no fading term.
    pub fn inbound(k_near: f64, k_far: f64, m1: f64) -> Self {
        Self::new(k_near, k_far, 0.0, m1)
    }

    /// Post-perihelion parameters, a single fading law.
    pub fn outbound(k1: f64, m1: f64) -> Self {
        Self::new(0.0, 0.0, k1, m1)
    }

    /// Total heliocentric magnitude at `log_r = log10(r)`.
    ///
    /// `log_transition` is `log10` of the transition distance. The branch is selected
    /// in log space, distances at the transition use the far slope.
    #[inline(always)]
    pub fn mag_at_log(&self, log_r: f64, log_transition: f64, arc: OrbitalArc) -> f64 {
        let mag = if log_r < log_transition {
            self.m1 + self.k_near * log_r
        } else {
            let m_far = self.m1 + log_transition * (self.k_near - self.k_far);
            m_far + self.k_far * log_r
        };
        match arc {
            OrbitalArc::Inbound => mag,
            OrbitalArc::Outbound => mag + self.k1 * log_r,
        }
    }

    /// Local slope of the magnitude curve at `log_r = log10(r)`, in mag / log10(au).
    pub fn slope_at_log(&self, log_r: f64, log_transition: f64, arc: OrbitalArc) -> f64 {
        let slope = if log_r < log_transition {
            self.k_near
        } else {
            self.k_far
        };
        match arc {
            OrbitalArc::Inbound => slope,
            OrbitalArc::Outbound => slope + self.k1,
        }
    }
}

/// Brightening parameters for every combination of Oort group and orbital arc.
///
/// The table is complete by construction, there is exactly one entry for each of the
/// six combinations and entries are never modified after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrighteningTable {
    entries: [[BrighteningParams; 2]; 3],
}

impl BrighteningTable {
    /// Construct a table, rows are indexed by [`OortGroup::ALL`] and columns by
    /// [`OrbitalArc::ALL`].
    pub(crate) fn new(entries: [[BrighteningParams; 2]; 3]) -> Self {
        Self { entries }
    }

    /// Parameters for the specified orbital arc and Oort group.
    pub fn get(&self, arc: OrbitalArc, group: OortGroup) -> BrighteningParams {
        self.entries[group.index()][arc.index()]
    }

    /// Iterate over all entries of the table.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (OrbitalArc, OortGroup, BrighteningParams)> + '_ {
        OrbitalArc::ALL
            .into_iter()
            .cartesian_product(OortGroup::ALL)
            .map(|(arc, group)| (arc, group, self.get(arc, group)))
    }
}

impl Default for BrighteningTable {
    /// Median parameters of Lacerda et al. 2025.
    fn default() -> Self {
        let entries = OortGroup::ALL.map(|group| {
            let idx = group.index();
            [
                BrighteningParams::inbound(
                    INBOUND_K_NEAR[idx],
                    INBOUND_K_FAR[idx],
                    INBOUND_M1[idx],
                ),
                BrighteningParams::outbound(OUTBOUND_K1[idx], OUTBOUND_M1[idx]),
            ]
        });
        Self::new(entries)
    }
}
