//! Entity structs for the Ergo domain objects.
//!
//! `Evaluation`, `AccessLogEntry`, and `UserPresence` each map to a table in
//! the libSQL database. `AssessmentInput`, `MultiplierSet`, and
//! `AssessmentResult` are in-memory values exchanged with the risk engine.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema export.

mod access_log;
mod assessment;
mod evaluation;
mod presence;

pub use access_log::AccessLogEntry;
pub use assessment::{AssessmentInput, AssessmentResult, MultiplierSet};
pub use evaluation::Evaluation;
pub use presence::UserPresence;
