//! Multiplier computation, RWL, lift index, and risk classification.

use ergo_core::entities::{AssessmentInput, AssessmentResult, MultiplierSet};
use ergo_core::enums::{GripQuality, LiftDuration, RiskLevel};

use crate::tables;

/// NIOSH load constant (kg). Fixed, not configurable.
pub const LOAD_CONSTANT: f64 = 23.0;

/// Lift-index sentinel when RWL is 0: "undefined / maximal risk" rather
/// than a division fault. Kept at 999.0 for compatibility with stored
/// records.
pub const LI_UNDEFINED: f64 = 999.0;

/// Horizontal multiplier. 0 when the distance is not positive.
#[must_use]
pub fn horizontal_multiplier(distance: f64) -> f64 {
    if distance <= 0.0 {
        return 0.0;
    }
    tables::HORIZONTAL.lookup(distance)
}

/// Vertical multiplier. 0 when the height is outside [0, 175] cm.
#[must_use]
pub fn vertical_multiplier(height: f64) -> f64 {
    if !(0.0..=175.0).contains(&height) {
        return 0.0;
    }
    tables::VERTICAL.lookup(height)
}

/// Distance multiplier. 0 when the travel distance is not positive.
#[must_use]
pub fn distance_multiplier(travel: f64) -> f64 {
    if travel <= 0.0 {
        return 0.0;
    }
    tables::DISTANCE.lookup(travel)
}

/// Asymmetry multiplier. 0 when the angle is outside [0, 135] degrees.
#[must_use]
pub fn asymmetry_multiplier(angle: f64) -> f64 {
    if !(0.0..=135.0).contains(&angle) {
        return 0.0;
    }
    tables::ASYMMETRY.lookup(angle)
}

/// Frequency multiplier for the duration-selected table row.
#[must_use]
pub fn frequency_multiplier(frequency: f64, duration: LiftDuration) -> f64 {
    tables::frequency(duration).lookup(frequency)
}

/// Coupling multiplier: only a good grip earns 1.0.
#[must_use]
pub const fn coupling_multiplier(grip: GripQuality) -> f64 {
    match grip {
        GripQuality::Good => 1.0,
        GripQuality::Fair | GripQuality::Poor => 0.90,
    }
}

/// The six multipliers for an input, unrounded.
#[must_use]
pub fn multipliers(input: &AssessmentInput) -> MultiplierSet {
    MultiplierSet {
        hm: horizontal_multiplier(input.horizontal_distance),
        vm: vertical_multiplier(input.vertical_height),
        dm: distance_multiplier(input.distance_moved),
        am: asymmetry_multiplier(input.asymmetric_angle),
        fm: frequency_multiplier(input.frequency, input.duration),
        cm: coupling_multiplier(input.grip_quality),
    }
}

/// Run the full assessment.
///
/// RWL and LI are computed from the unrounded multipliers, and the risk
/// level from the unrounded LI. Rounding (multipliers to 4 decimal places,
/// RWL and LI to 2) happens only on the returned value, for display and
/// persistence — rounded intermediates never feed back into the
/// computation.
#[must_use]
pub fn compute(input: &AssessmentInput) -> AssessmentResult {
    let m = multipliers(input);
    let rwl = LOAD_CONSTANT * m.product();
    let li = if rwl > 0.0 {
        input.weight / rwl
    } else {
        LI_UNDEFINED
    };
    let risk_level = RiskLevel::from_lift_index(li);

    AssessmentResult {
        input: input.clone(),
        multipliers: MultiplierSet {
            hm: round_to(m.hm, 4),
            vm: round_to(m.vm, 4),
            dm: round_to(m.dm, 4),
            am: round_to(m.am, 4),
            fm: round_to(m.fm, 4),
            cm: round_to(m.cm, 4),
        },
        rwl: round_to(rwl, 2),
        li: round_to(li, 2),
        risk_level,
        risk_description: risk_level.description().to_string(),
    }
}

fn round_to(value: f64, places: u32) -> f64 {
    let scale = f64::from(10_u32.pow(places));
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn zero_horizontal_distance_zeroes_the_multiplier() {
        assert_eq!(horizontal_multiplier(0.0), 0.0);
        assert_eq!(horizontal_multiplier(-5.0), 0.0);
        assert_eq!(horizontal_multiplier(0.1), 1.0);
    }

    #[test]
    fn out_of_band_height_and_angle_zero_their_multipliers() {
        assert_eq!(vertical_multiplier(-0.1), 0.0);
        assert_eq!(vertical_multiplier(175.1), 0.0);
        assert_eq!(asymmetry_multiplier(-1.0), 0.0);
        assert_eq!(asymmetry_multiplier(135.1), 0.0);
    }

    #[test]
    fn coupling_fair_and_poor_share_a_factor() {
        assert_eq!(coupling_multiplier(GripQuality::Good), 1.0);
        assert_eq!(coupling_multiplier(GripQuality::Fair), 0.90);
        assert_eq!(coupling_multiplier(GripQuality::Poor), 0.90);
    }

    #[test]
    fn round_to_places() {
        assert_eq!(round_to(0.457_66, 2), 0.46);
        assert_eq!(round_to(0.88, 4), 0.88);
        assert_eq!(round_to(999.0, 2), 999.0);
    }
}
