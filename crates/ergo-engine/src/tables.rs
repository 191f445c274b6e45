//! The NIOSH factor tables and the shared threshold-scan lookup.
//!
//! Each table is an ascending list of thresholds paired with factors. The
//! last factor of every shipped table is 0: "value exceeds all normal
//! bounds". The vertical table encodes a bell centered on 75 cm through the
//! ordering of its factors alone — the scan itself stays monotonic, so the
//! pairs must be kept verbatim.

use ergo_core::enums::LiftDuration;

/// An ordered piecewise lookup from a bounded numeric domain to a factor.
#[derive(Debug, Clone, Copy)]
pub struct FactorTable {
    thresholds: &'static [f64],
    factors: &'static [f64],
}

impl FactorTable {
    #[must_use]
    pub const fn new(thresholds: &'static [f64], factors: &'static [f64]) -> Self {
        Self {
            thresholds,
            factors,
        }
    }

    /// Return the factor at the first threshold satisfying `value <= threshold`
    /// (boundary inclusive). A value above the largest threshold returns the
    /// last factor. Unequal list lengths truncate to the overlapping prefix;
    /// an empty table yields 0.
    #[must_use]
    pub fn lookup(&self, value: f64) -> f64 {
        // zip truncates to the overlapping prefix when the lists disagree
        for (&threshold, &factor) in self.thresholds.iter().zip(self.factors) {
            if value <= threshold {
                return factor;
            }
        }
        let count = self.thresholds.len().min(self.factors.len());
        match count {
            0 => 0.0,
            n => self.factors[n - 1],
        }
    }
}

/// HM: horizontal distance of the hands from the ankles (cm).
pub const HORIZONTAL: FactorTable = FactorTable::new(
    &[25.0, 30.0, 40.0, 50.0, 70.0, 100.0, 170.0, f64::INFINITY],
    &[1.0, 0.97, 0.93, 0.91, 0.88, 0.87, 0.86, 0.0],
);

/// VM: vertical height of the hands above the floor (cm). Bell centered on
/// 75 cm, encoded by factor ordering.
pub const VERTICAL: FactorTable = FactorTable::new(
    &[0.0, 25.0, 50.0, 75.0, 100.0, 125.0, 150.0, 175.0],
    &[0.78, 0.85, 0.93, 1.0, 0.93, 0.85, 0.78, 0.0],
);

/// DM: vertical travel distance of the load (cm).
pub const DISTANCE: FactorTable = FactorTable::new(
    &[25.0, 30.0, 40.0, 50.0, 55.0, 60.0, f64::INFINITY],
    &[1.0, 0.83, 0.63, 0.50, 0.45, 0.42, 0.0],
);

/// AM: angular displacement of the load from the sagittal plane (degrees).
pub const ASYMMETRY: FactorTable = FactorTable::new(
    &[0.0, 30.0, 60.0, 90.0, 120.0, 135.0, f64::INFINITY],
    &[1.0, 0.90, 0.81, 0.71, 0.62, 0.57, 0.0],
);

/// FM thresholds (lifts/min), shared by the three duration rows.
const FREQUENCY_THRESHOLDS: &[f64] = &[0.2, 1.0, 4.0, 6.0, 9.0, 12.0, 15.0];

// Under 1 hour.
const FREQUENCY_SHORT: &[f64] = &[1.0, 0.94, 0.81, 0.75, 0.52, 0.37, 0.0];
// 1–2 hours.
const FREQUENCY_MODERATE: &[f64] = &[0.95, 0.88, 0.72, 0.5, 0.3, 0.21, 0.0];
// 2–8 hours.
const FREQUENCY_LONG: &[f64] = &[0.85, 0.75, 0.45, 0.27, 0.15, 0.0, 0.0];

/// FM: frequency table row for the given activity duration.
#[must_use]
pub const fn frequency(duration: LiftDuration) -> FactorTable {
    let factors = match duration {
        LiftDuration::Short => FREQUENCY_SHORT,
        LiftDuration::Moderate => FREQUENCY_MODERATE,
        LiftDuration::Long => FREQUENCY_LONG,
    };
    FactorTable::new(FREQUENCY_THRESHOLDS, factors)
}
