use lazy_static::lazy_static;
use rayon::prelude::*;
use std::str::FromStr;

use super::distance::{check_distance, check_element, HelioDistance};
use super::params::{BrighteningParams, BrighteningTable, OortGroup, OrbitalArc};
use crate::constants::TRANSITION_R;
use crate::errors::LpcResult;

lazy_static! {
    /// Median brightening model of long-period comets, Lacerda et al. 2025.
    pub static ref DEFAULT_MODEL: BrighteningModel = BrighteningModel::default();
}

/// Total heliocentric magnitude model of long-period comets.
///
/// <https://doi.org/10.1051/0004-6361/202453565>
///
/// Holds the brightening parameters of every Oort group and orbital arc, along with
/// the heliocentric distance at which the pre-perihelion slope changes.
///
/// Pre-perihelion (inbound) magnitudes follow a broken power law:
///
/// m1 + k_near * log10(r)                                     for r < R
/// m1 + log10(R) * (k_near - k_far) + k_far * log10(r)        for r >= R
///
/// Post-perihelion (outbound) magnitudes fade with a single slope at all distances:
///
/// m1 + k1 * log10(r)
///
/// These are heliocentric magnitudes, the apparent magnitude of the comet is found by
/// adding `5 * log10(obj2obs.r)`, which is not done here.
///
#[derive(Debug, Clone, PartialEq)]
pub struct BrighteningModel {
    table: BrighteningTable,
    transition_r: f64,
    log_transition: f64,
}

impl Default for BrighteningModel {
    fn default() -> Self {
        Self::new(BrighteningTable::default(), TRANSITION_R)
    }
}

impl BrighteningModel {
    fn new(table: BrighteningTable, transition_r: f64) -> Self {
        Self {
            table,
            transition_r,
            log_transition: transition_r.log10(),
        }
    }

    /// Construct a model from a parameter table and a transition distance in au.
    #[cfg(test)]
    pub(crate) fn try_new(table: BrighteningTable, transition_r: f64) -> LpcResult<Self> {
        if !transition_r.is_finite() || transition_r <= 0.0 {
            Err(crate::errors::Error::ValueError(format!(
                "Transition distance must be finite and positive, found {}",
                transition_r
            )))?;
        }
        Ok(Self::new(table, transition_r))
    }

    /// Brightening parameters of every Oort group and orbital arc.
    pub fn table(&self) -> &BrighteningTable {
        &self.table
    }

    /// Heliocentric distance in au where the pre-perihelion slope changes.
    pub fn transition_r(&self) -> f64 {
        self.transition_r
    }

    /// Brightening parameters of the specified orbital arc and Oort group.
    pub fn params(&self, arc: OrbitalArc, group: OortGroup) -> BrighteningParams {
        self.table.get(arc, group)
    }

    /// Compute the total heliocentric magnitude of a comet.
    ///
    /// `distance` is the heliocentric distance in au, either a single value or a
    /// sequence, the result has the same shape. Every distance must be finite and
    /// positive, otherwise the whole evaluation fails with
    /// [`crate::errors::Error::DomainError`].
    ///
    /// Convert to apparent magnitude by adding `5 * log10(observer distance)`.
    pub fn total_mag<D: HelioDistance>(
        &self,
        distance: D,
        arc: OrbitalArc,
        group: OortGroup,
    ) -> LpcResult<D::Output> {
        let params = self.params(arc, group);
        let log_transition = self.log_transition;
        distance.try_eval(|r| params.mag_at_log(r.log10(), log_transition, arc))
    }

    /// Compute the total heliocentric magnitudes of many distances in parallel.
    ///
    /// Results are identical to [`BrighteningModel::total_mag`]. All distances are
    /// checked before any are evaluated, the first invalid one is reported.
    pub fn total_mag_par(
        &self,
        distances: &[f64],
        arc: OrbitalArc,
        group: OortGroup,
    ) -> LpcResult<Vec<f64>> {
        distances
            .iter()
            .enumerate()
            .try_for_each(|(idx, r)| check_element(idx, *r).map(|_| ()))?;

        let params = self.params(arc, group);
        let log_transition = self.log_transition;
        Ok(distances
            .par_iter()
            .map(|r| params.mag_at_log(r.log10(), log_transition, arc))
            .collect())
    }

    /// Local brightening slope in mag / log10(au) at the heliocentric distance `r`.
    ///
    /// Pre-perihelion this is `k_near` or `k_far` depending on the side of the
    /// transition distance, post-perihelion it is the fading slope `k1`.
    pub fn slope_at(&self, r: f64, arc: OrbitalArc, group: OortGroup) -> LpcResult<f64> {
        let r = check_distance(r)?;
        Ok(self
            .params(arc, group)
            .slope_at_log(r.log10(), self.log_transition, arc))
    }
}

/// Compute the total heliocentric magnitude of a long-period comet using the median
/// brightening parameters of its Oort group and orbital arc.
///
/// See [`BrighteningModel::total_mag`].
pub fn total_heliocentric_mag<D: HelioDistance>(
    distance: D,
    arc: OrbitalArc,
    group: OortGroup,
) -> LpcResult<D::Output> {
    DEFAULT_MODEL.total_mag(distance, arc, group)
}

/// Compute the total heliocentric magnitude from the names of the orbital arc
/// (`"inbound"`, `"outbound"`) and the Oort group (`"new"`, `"int"`, `"old"`).
///
/// The Oort group is validated before the orbital arc, and both are validated before
/// any distance is evaluated.
pub fn total_heliocentric_mag_str<D: HelioDistance>(
    distance: D,
    orbital_arc: &str,
    oort_group: &str,
) -> LpcResult<D::Output> {
    let group = OortGroup::from_str(oort_group)?;
    let arc = OrbitalArc::from_str(orbital_arc)?;
    total_heliocentric_mag(distance, arc, group)
}

/// Median brightening parameters of the specified orbital arc and Oort group.
///
/// Selectors are in the same order as [`total_heliocentric_mag`].
pub fn brightening_params(arc: OrbitalArc, group: OortGroup) -> BrighteningParams {
    DEFAULT_MODEL.params(arc, group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    fn assert_close(value: f64, expected: f64) {
        assert!(
            ((value - expected) / expected).abs() < 1e-6,
            "{} != {}",
            value,
            expected
        );
    }

    #[test]
    fn test_worked_examples() {
        let mag = total_heliocentric_mag(5.0, OrbitalArc::Inbound, OortGroup::New).unwrap();
        assert_close(mag, 14.20233223070413);

        let mags = total_heliocentric_mag([1.0, 3.0, 10.0], OrbitalArc::Inbound, OortGroup::New)
            .unwrap();
        for (mag, expected) in mags.into_iter().zip([8.28, 11.49031036, 18.06966458]) {
            assert_close(mag, expected);
        }

        let mags = total_heliocentric_mag(vec![2.3, 3.7], OrbitalArc::Outbound, OortGroup::Old)
            .unwrap();
        assert_eq!(mags.len(), 2);
        for (mag, expected) in mags.into_iter().zip([16.34842471, 19.07594477]) {
            assert_close(mag, expected);
        }
    }

    #[test]
    fn test_all_combinations() {
        // Values at [0.5, 1.0, 3.16, 7.0, 10.0] au.
        let distances = [0.5, 1.0, 3.16, 7.0, 10.0];
        let expected = [
            (
                OortGroup::New,
                OrbitalArc::Inbound,
                [
                    6.254519674174902,
                    8.28,
                    11.642144535397929,
                    16.07963910506245,
                    18.069664584999295,
                ],
            ),
            (
                OortGroup::New,
                OrbitalArc::Outbound,
                [
                    5.276113850037657,
                    8.75,
                    14.51638893341638,
                    18.502431381764524,
                    20.29,
                ],
            ),
            (
                OortGroup::Intermediate,
                OrbitalArc::Inbound,
                [
                    6.60120421147596,
                    8.96,
                    12.87542305762716,
                    17.20134988805282,
                    19.141342034914267,
                ],
            ),
            (
                OortGroup::Intermediate,
                OrbitalArc::Outbound,
                [
                    5.898960254893999,
                    9.71,
                    16.036038465948995,
                    20.408941186580492,
                    22.37,
                ],
            ),
            (
                OortGroup::Old,
                OrbitalArc::Inbound,
                [
                    7.545370225614576,
                    11.58,
                    18.27718104656381,
                    23.331234175179933,
                    25.597759653691327,
                ],
            ),
            (
                OortGroup::Old,
                OrbitalArc::Outbound,
                [
                    7.593393757278808,
                    11.57,
                    18.170866361389116,
                    22.733745108588334,
                    24.78,
                ],
            ),
        ];
        for (group, arc, values) in expected {
            let mags = DEFAULT_MODEL.total_mag(distances, arc, group).unwrap();
            for (mag, value) in mags.into_iter().zip(values) {
                assert_close(mag, value);
            }
        }
    }

    #[test]
    fn test_anchored_at_1_au() {
        for (arc, group, params) in DEFAULT_MODEL.table().iter() {
            let mag = DEFAULT_MODEL.total_mag(1.0, arc, group).unwrap();
            assert_eq!(mag, params.m1);
        }
    }

    #[test]
    fn test_continuity() {
        let r = DEFAULT_MODEL.transition_r();
        for (arc, group, _) in DEFAULT_MODEL.table().iter() {
            let mut last_gap = f64::INFINITY;
            for eps in [1e-3, 1e-6, 1e-9] {
                let below = DEFAULT_MODEL.total_mag(r - eps, arc, group).unwrap();
                let above = DEFAULT_MODEL.total_mag(r + eps, arc, group).unwrap();
                let gap = (above - below).abs();
                assert!(gap < 10.0 * eps);
                assert!(gap <= last_gap);
                last_gap = gap;
            }
            let at = DEFAULT_MODEL.total_mag(r, arc, group).unwrap();
            let below = DEFAULT_MODEL.total_mag(r - 1e-12, arc, group).unwrap();
            assert!((at - below).abs() < 1e-9);
        }
    }

    #[test]
    fn test_inbound_monotonic() {
        let distances: Vec<f64> = (1..=200).map(|i| 0.05 * i as f64).collect();
        for group in OortGroup::ALL {
            let mags = DEFAULT_MODEL
                .total_mag(&distances, OrbitalArc::Inbound, group)
                .unwrap();
            assert_eq!(mags.len(), distances.len());
            for pair in mags.windows(2) {
                assert!(pair[1] > pair[0]);
            }
        }
    }

    #[test]
    fn test_shape_and_determinism() {
        let distances = vec![0.3, 1.0, 2.5, 3.16, 4.0, 12.0];
        for (arc, group, _) in DEFAULT_MODEL.table().iter() {
            let mags = DEFAULT_MODEL.total_mag(&distances, arc, group).unwrap();
            assert_eq!(mags.len(), distances.len());
            for (r, mag) in distances.iter().zip(&mags) {
                let single = DEFAULT_MODEL.total_mag([*r], arc, group).unwrap();
                assert_eq!(single[0].to_bits(), mag.to_bits());
                let scalar = DEFAULT_MODEL.total_mag(*r, arc, group).unwrap();
                assert_eq!(scalar.to_bits(), mag.to_bits());
            }
            let again = DEFAULT_MODEL.total_mag(&distances, arc, group).unwrap();
            assert_eq!(mags, again);
        }
    }

    #[test]
    fn test_parallel_matches() {
        let distances: Vec<f64> = (1..=5000).map(|i| 0.002 * i as f64).collect();
        for (arc, group, _) in DEFAULT_MODEL.table().iter() {
            let serial = DEFAULT_MODEL.total_mag(&distances, arc, group).unwrap();
            let parallel = DEFAULT_MODEL.total_mag_par(&distances, arc, group).unwrap();
            assert_eq!(serial, parallel);
        }

        let res =
            DEFAULT_MODEL.total_mag_par(&[1.0, 0.0, -1.0], OrbitalArc::Inbound, OortGroup::New);
        assert_eq!(
            res,
            Err(Error::DomainError(
                "Heliocentric distance must be finite and positive, found 0 at index 1".into()
            ))
        );
    }

    #[test]
    fn test_domain_errors() {
        for r in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let res = total_heliocentric_mag(r, OrbitalArc::Inbound, OortGroup::New);
            assert!(matches!(res, Err(Error::DomainError(_))));
            let res =
                total_heliocentric_mag(vec![1.0, r, 2.0], OrbitalArc::Outbound, OortGroup::Old);
            assert!(matches!(res, Err(Error::DomainError(_))));
        }
        assert!(matches!(
            DEFAULT_MODEL.slope_at(-1.0, OrbitalArc::Inbound, OortGroup::New),
            Err(Error::DomainError(_))
        ));
    }

    #[test]
    fn test_string_selectors() {
        let mag = total_heliocentric_mag_str(5.0, "inbound", "new").unwrap();
        assert_close(mag, 14.20233223070413);

        let mags = total_heliocentric_mag_str([2.3, 3.7], "outbound", "old").unwrap();
        assert_close(mags[0], 16.34842471);
        assert_close(mags[1], 19.07594477);

        for arc in ["", "in", "Inbound", "pre-perihelion"] {
            assert_eq!(
                total_heliocentric_mag_str(5.0, arc, "new"),
                Err(Error::InvalidArgument(format!("Invalid arc: {}", arc)))
            );
        }
        for group in ["", "intermediate", "Old", "young"] {
            assert_eq!(
                total_heliocentric_mag_str(5.0, "inbound", group),
                Err(Error::InvalidArgument(format!("Invalid oort group: {}", group)))
            );
        }

        // Selectors are checked before the distances, the group before the arc.
        assert_eq!(
            total_heliocentric_mag_str(-1.0, "sideways", "young"),
            Err(Error::InvalidArgument("Invalid oort group: young".into()))
        );
        assert_eq!(
            total_heliocentric_mag_str(-1.0, "sideways", "new"),
            Err(Error::InvalidArgument("Invalid arc: sideways".into()))
        );
    }

    #[test]
    fn test_slopes() {
        let r_t = TRANSITION_R;
        for group in OortGroup::ALL {
            let inbound = brightening_params(OrbitalArc::Inbound, group);
            let outbound = brightening_params(OrbitalArc::Outbound, group);
            let model = &*DEFAULT_MODEL;
            assert_eq!(
                model.slope_at(r_t / 2.0, OrbitalArc::Inbound, group),
                Ok(inbound.k_near)
            );
            assert_eq!(
                model.slope_at(r_t * 2.0, OrbitalArc::Inbound, group),
                Ok(inbound.k_far)
            );
            assert_eq!(
                model.slope_at(r_t / 2.0, OrbitalArc::Outbound, group),
                Ok(outbound.k1)
            );
            assert_eq!(
                model.slope_at(r_t * 2.0, OrbitalArc::Outbound, group),
                Ok(outbound.k1)
            );
        }
    }

    #[test]
    fn test_selector_order() {
        // Lookup and evaluation share the (arc, group) order.
        for (arc, group, _) in DEFAULT_MODEL.table().iter() {
            let params = brightening_params(arc, group);
            assert_eq!(params, DEFAULT_MODEL.params(arc, group));
            let mag = total_heliocentric_mag(2.0, arc, group).unwrap();
            let expected = params.mag_at_log(2_f64.log10(), TRANSITION_R.log10(), arc);
            assert_eq!(mag.to_bits(), expected.to_bits());
        }
        let params = brightening_params(OrbitalArc::Outbound, OortGroup::Intermediate);
        assert_eq!(params, BrighteningParams::outbound(12.66, 9.71));

        let mag =
            total_heliocentric_mag(5.0, OrbitalArc::default(), OortGroup::default()).unwrap();
        assert_close(mag, 14.20233223070413);
    }

    #[test]
    fn test_injected_model() {
        let entries = OortGroup::ALL.map(|_| {
            [
                BrighteningParams::inbound(2.0, 4.0, 10.0),
                BrighteningParams::outbound(3.0, 11.0),
            ]
        });
        let model = BrighteningModel::try_new(BrighteningTable::new(entries), 10.0).unwrap();
        assert_eq!(model.transition_r(), 10.0);

        let mag = model.total_mag(100.0, OrbitalArc::Inbound, OortGroup::Old).unwrap();
        assert!((mag - 16.0).abs() < 1e-12);
        let mag = model.total_mag(10.0, OrbitalArc::Inbound, OortGroup::Old).unwrap();
        assert!((mag - 12.0).abs() < 1e-12);
        let mag = model.total_mag(100.0, OrbitalArc::Outbound, OortGroup::New).unwrap();
        assert!((mag - 17.0).abs() < 1e-12);

        // The default singleton is untouched.
        assert_eq!(DEFAULT_MODEL.transition_r(), TRANSITION_R);

        for r in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let res = BrighteningModel::try_new(BrighteningTable::default(), r);
            assert!(matches!(res, Err(Error::ValueError(_))));
        }
    }
}
