use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{GripQuality, LiftDuration, RiskLevel};

/// One validated set of lifting-task measurements.
///
/// Constructed once per evaluation request and never mutated. Range
/// validation (weight > 0, vertical height 0–175 cm, asymmetric angle
/// 0–135°, …) is the caller's responsibility: the engine does not
/// re-validate, it degrades out-of-range values to a 0 multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AssessmentInput {
    /// Load actually lifted (kg).
    pub weight: f64,
    /// Horizontal distance of the hands from the ankles (cm).
    pub horizontal_distance: f64,
    /// Vertical height of the hands above the floor at lift origin (cm).
    pub vertical_height: f64,
    /// Vertical travel distance of the load (cm).
    pub distance_moved: f64,
    /// Angular displacement of the load from the sagittal plane (degrees).
    pub asymmetric_angle: f64,
    /// Lifting frequency (lifts/min).
    pub frequency: f64,
    pub duration: LiftDuration,
    pub grip_quality: GripQuality,
}

/// The six NIOSH multipliers, each in [0, 1].
///
/// A multiplier of 0 means the corresponding measurement fell outside the
/// modeled range; it propagates to RWL = 0 and the LI sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MultiplierSet {
    pub hm: f64,
    pub vm: f64,
    pub dm: f64,
    pub am: f64,
    pub fm: f64,
    pub cm: f64,
}

impl MultiplierSet {
    /// Product of all six multipliers.
    #[must_use]
    pub fn product(&self) -> f64 {
        self.hm * self.vm * self.dm * self.am * self.fm * self.cm
    }
}

/// Outcome of one risk computation.
///
/// Echoes the input, carries the multiplier set (rounded to 4 decimal
/// places), the recommended weight limit and lift index (rounded to 2),
/// and the risk classification. Immutable once produced; this is the only
/// value the caller persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AssessmentResult {
    pub input: AssessmentInput,
    pub multipliers: MultiplierSet,
    /// Recommended weight limit (kg).
    pub rwl: f64,
    /// Lift index: weight / rwl, or the 999.0 sentinel when rwl = 0.
    pub li: f64,
    pub risk_level: RiskLevel,
    pub risk_description: String,
}
