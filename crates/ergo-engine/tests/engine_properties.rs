//! End-to-end properties of the risk computation engine.

use pretty_assertions::assert_eq;
use rstest::rstest;

use ergo_core::entities::AssessmentInput;
use ergo_core::enums::{GripQuality, LiftDuration, RiskLevel};
use ergo_engine::{LI_UNDEFINED, LOAD_CONSTANT, compute, multipliers};

fn baseline() -> AssessmentInput {
    AssessmentInput {
        weight: 10.0,
        horizontal_distance: 25.0,
        vertical_height: 75.0,
        distance_moved: 25.0,
        asymmetric_angle: 0.0,
        frequency: 1.0,
        duration: LiftDuration::Moderate,
        grip_quality: GripQuality::Good,
    }
}

#[test]
fn ideal_lift_worked_scenario() {
    let result = compute(&baseline());

    assert_eq!(result.multipliers.hm, 1.0);
    assert_eq!(result.multipliers.vm, 1.0);
    assert_eq!(result.multipliers.dm, 1.0);
    assert_eq!(result.multipliers.am, 1.0);
    assert_eq!(result.multipliers.fm, 0.95);
    assert_eq!(result.multipliers.cm, 1.0);
    assert_eq!(result.rwl, 21.85);
    assert_eq!(result.li, 0.46);
    assert_eq!(result.risk_level, RiskLevel::Basso);
    assert_eq!(result.risk_description, RiskLevel::Basso.description());
}

#[test]
fn compute_is_pure() {
    let input = AssessmentInput {
        weight: 17.3,
        horizontal_distance: 43.0,
        vertical_height: 120.0,
        distance_moved: 52.0,
        asymmetric_angle: 61.0,
        frequency: 5.5,
        duration: LiftDuration::Long,
        grip_quality: GripQuality::Fair,
    };
    assert_eq!(compute(&input), compute(&input));
}

#[test]
fn rwl_is_the_exact_product_before_rounding() {
    let input = AssessmentInput {
        weight: 12.0,
        horizontal_distance: 35.0,
        vertical_height: 110.0,
        distance_moved: 45.0,
        asymmetric_angle: 45.0,
        frequency: 2.0,
        duration: LiftDuration::Short,
        grip_quality: GripQuality::Poor,
    };
    let m = multipliers(&input);
    let rwl = LOAD_CONSTANT * m.product();
    let li = input.weight / rwl;

    let result = compute(&input);
    assert_eq!(result.rwl, (rwl * 100.0).round() / 100.0);
    assert_eq!(result.li, (li * 100.0).round() / 100.0);
    // Classification comes from the unrounded LI.
    assert_eq!(result.risk_level, RiskLevel::from_lift_index(li));
}

#[test]
fn zero_rwl_yields_the_li_sentinel() {
    let result = compute(&AssessmentInput {
        horizontal_distance: 0.0,
        ..baseline()
    });

    assert_eq!(result.multipliers.hm, 0.0);
    assert_eq!(result.rwl, 0.0);
    assert_eq!(result.li, LI_UNDEFINED);
    assert_eq!(result.risk_level, RiskLevel::MoltoElevato);
}

// Exact-boundary behavior (li = 1.0 vs 1.0001, …) is pinned on
// `RiskLevel::from_lift_index`; here the weights sit safely inside each band.
#[rstest]
#[case(10.925, RiskLevel::Basso)] // li ≈ 0.5
#[case(32.775, RiskLevel::Moderato)] // li ≈ 1.5
#[case(54.625, RiskLevel::Elevato)] // li ≈ 2.5
#[case(76.475, RiskLevel::MoltoElevato)] // li ≈ 3.5
fn classification_bands(#[case] weight: f64, #[case] expected: RiskLevel) {
    let result = compute(&AssessmentInput {
        weight,
        ..baseline()
    });
    assert_eq!(result.risk_level, expected);
}

#[test]
fn unknown_grip_string_behaves_like_poor() {
    let poor = compute(&AssessmentInput {
        grip_quality: GripQuality::Poor,
        ..baseline()
    });
    let unknown = compute(&AssessmentInput {
        grip_quality: GripQuality::from_input("unknown-value"),
        ..baseline()
    });

    assert_eq!(unknown.multipliers.cm, 0.90);
    assert_eq!(unknown, poor);
}

#[test]
fn unknown_duration_string_selects_the_moderate_row() {
    let moderate = compute(&baseline());
    let unknown = compute(&AssessmentInput {
        duration: LiftDuration::from_input("overnight"),
        ..baseline()
    });
    assert_eq!(unknown, moderate);
}
