//! JSON shape checks for the entities that cross the storage boundary.

use chrono::Utc;
use pretty_assertions::assert_eq;

use ergo_core::entities::{
    AccessLogEntry, AssessmentInput, AssessmentResult, Evaluation, MultiplierSet, UserPresence,
};
use ergo_core::enums::{AccessAction, GripQuality, LiftDuration, RiskLevel};

fn sample_result() -> AssessmentResult {
    AssessmentResult {
        input: AssessmentInput {
            weight: 10.0,
            horizontal_distance: 25.0,
            vertical_height: 75.0,
            distance_moved: 25.0,
            asymmetric_angle: 0.0,
            frequency: 1.0,
            duration: LiftDuration::Moderate,
            grip_quality: GripQuality::Good,
        },
        multipliers: MultiplierSet {
            hm: 1.0,
            vm: 1.0,
            dm: 1.0,
            am: 1.0,
            fm: 0.95,
            cm: 1.0,
        },
        rwl: 21.85,
        li: 0.46,
        risk_level: RiskLevel::Basso,
        risk_description: RiskLevel::Basso.description().to_string(),
    }
}

#[test]
fn evaluation_roundtrips_through_json() {
    let eval = Evaluation {
        id: "eva-a3f8b2c1".into(),
        uid: 5,
        name: Some("scaffale alto".into()),
        result: sample_result(),
        created_at: Utc::now(),
    };

    let json = serde_json::to_string_pretty(&eval).unwrap();
    let recovered: Evaluation = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, eval);
}

#[test]
fn enum_fields_serialize_as_storage_strings() {
    let value = serde_json::to_value(sample_result()).unwrap();
    assert_eq!(value["input"]["duration"], "moderate");
    assert_eq!(value["input"]["grip_quality"], "good");
    assert_eq!(value["risk_level"], "basso");
}

#[test]
fn presence_and_log_entries_roundtrip() {
    let presence = UserPresence {
        uid: 5,
        username: "mrossi".into(),
        online: true,
        last_heartbeat: Some(Utc::now()),
    };
    let entry = AccessLogEntry {
        id: "acc-00000001".into(),
        uid: 5,
        action: AccessAction::Logout,
        is_kiosk: true,
        created_at: Utc::now(),
    };

    let p: UserPresence =
        serde_json::from_str(&serde_json::to_string(&presence).unwrap()).unwrap();
    let e: AccessLogEntry = serde_json::from_str(&serde_json::to_string(&entry).unwrap()).unwrap();
    assert_eq!(p, presence);
    assert_eq!(e, entry);
}
