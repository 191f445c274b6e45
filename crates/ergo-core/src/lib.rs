//! # ergo-core
//!
//! Core types, ID prefixes, and error types for Ergo.
//!
//! This crate provides the foundational types shared across all Ergo crates:
//! - Entity structs for the domain objects (assessment inputs and results,
//!   persisted evaluations, access-log entries, user presence)
//! - Category enums with lenient input parsing and risk classification
//! - ID prefix constants
//! - Cross-cutting error types
//!
//! No I/O happens here — this is the shared vocabulary of the Ergo system.

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;

pub use entities::{
    AccessLogEntry, AssessmentInput, AssessmentResult, Evaluation, MultiplierSet, UserPresence,
};
pub use enums::{AccessAction, GripQuality, LiftDuration, RiskLevel};
pub use errors::CoreError;
