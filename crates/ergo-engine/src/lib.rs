//! # ergo-engine
//!
//! The NIOSH risk computation engine: six factor tables, the recommended
//! weight limit, and the lift index with its risk classification.
//!
//! The whole crate is pure. `compute` has no I/O, no shared state, and no
//! error paths — out-of-range measurements degrade to a 0 multiplier
//! instead of failing, so it is total over its input domain and safe to
//! call concurrently from any number of callers.
//!
//! ```
//! use ergo_core::enums::{GripQuality, LiftDuration};
//! use ergo_core::AssessmentInput;
//!
//! let result = ergo_engine::compute(&AssessmentInput {
//!     weight: 10.0,
//!     horizontal_distance: 25.0,
//!     vertical_height: 75.0,
//!     distance_moved: 25.0,
//!     asymmetric_angle: 0.0,
//!     frequency: 1.0,
//!     duration: LiftDuration::Moderate,
//!     grip_quality: GripQuality::Good,
//! });
//! assert_eq!(result.rwl, 21.85);
//! ```

pub mod engine;
pub mod tables;

pub use engine::{LI_UNDEFINED, LOAD_CONSTANT, compute, multipliers};
pub use tables::FactorTable;
