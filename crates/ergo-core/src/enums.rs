//! Category enums for Ergo: lift duration, grip quality, risk level, and
//! access-log actions.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `LiftDuration` and `GripQuality` additionally provide `from_input` for the
//! lenient parsing the UI boundary uses: unrecognized strings resolve to a
//! defined fallback instead of failing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// LiftDuration
// ---------------------------------------------------------------------------

/// Duration class of the lifting activity, selecting the frequency-multiplier
/// row: under 1 hour, 1–2 hours, or 2–8 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LiftDuration {
    Short,
    Moderate,
    Long,
}

impl LiftDuration {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Moderate => "moderate",
            Self::Long => "long",
        }
    }

    /// Lenient parse for raw user input. Unrecognized strings fall back to
    /// `Moderate` rather than failing.
    #[must_use]
    pub fn from_input(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Self::Short,
            "long" => Self::Long,
            _ => Self::Moderate,
        }
    }
}

impl fmt::Display for LiftDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// GripQuality
// ---------------------------------------------------------------------------

/// Quality of the hand-to-load coupling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GripQuality {
    Good,
    Fair,
    Poor,
}

impl GripQuality {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }

    /// Lenient parse for raw user input. Unrecognized strings fall back to
    /// `Poor`, which carries the same multiplier as `Fair`.
    #[must_use]
    pub fn from_input(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "good" => Self::Good,
            "fair" => Self::Fair,
            _ => Self::Poor,
        }
    }
}

impl fmt::Display for GripQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Risk classification derived from the lift index.
///
/// ```text
/// li <= 1.0 → basso
/// li <= 2.0 → moderato
/// li <= 3.0 → elevato
/// otherwise → molto_elevato
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Basso,
    Moderato,
    Elevato,
    MoltoElevato,
}

impl RiskLevel {
    /// Classify an (unrounded) lift index. Boundaries are inclusive on the
    /// lower class: `li = 1.0` is still `Basso`.
    #[must_use]
    pub fn from_lift_index(li: f64) -> Self {
        if li <= 1.0 {
            Self::Basso
        } else if li <= 2.0 {
            Self::Moderato
        } else if li <= 3.0 {
            Self::Elevato
        } else {
            Self::MoltoElevato
        }
    }

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basso => "basso",
            Self::Moderato => "moderato",
            Self::Elevato => "elevato",
            Self::MoltoElevato => "molto_elevato",
        }
    }

    /// Human description, bound one-to-one to the level.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Basso => {
                "Il carico è entro i limiti sicuri. La probabilità di lesioni è molto bassa."
            }
            Self::Moderato => {
                "Il carico presenta un rischio moderato. Alcuni lavoratori potrebbero essere a rischio di lesioni."
            }
            Self::Elevato => {
                "Il carico presenta un rischio elevato. Molti lavoratori potrebbero essere a rischio di lesioni lombari."
            }
            Self::MoltoElevato => {
                "Il carico presenta un rischio molto elevato. È fortemente consigliato implementare misure di controllo del rischio."
            }
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AccessAction
// ---------------------------------------------------------------------------

/// Action recorded in the append-only access log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccessAction {
    Login,
    Logout,
}

impl AccessAction {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Logout => "logout",
        }
    }
}

impl fmt::Display for AccessAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
