//! # ergo-kiosk
//!
//! Presence arbitration for the shared kiosk terminal: at most one user may
//! be logically online at any moment.
//!
//! The arbitrator owns no storage. It drives a narrow [`PresenceGateway`]
//! contract (read one row, flip one flag, append one log entry) and wraps
//! every read-decide-write sequence in a per-kiosk async mutex so that two
//! racing login attempts can never both observe "no online user" and skip
//! the forced logout.
//!
//! ```text
//! Idle ──────────── login(uid) ───────────▶ Active(uid)
//! Active(uid) ───── heartbeat(uid) ───────▶ Active(uid)     (no log entry)
//! Active(uid) ───── logout(uid) ──────────▶ Idle
//! Active(a) ── resolve_pre_login(b≠a) ────▶ Idle            (forced logout of a)
//! ```
//!
//! Heartbeat expiry is a policy hook ([`StalePolicy`]) evaluated by callers;
//! the arbitrator never polls and schedules nothing.

pub mod arbitrator;
pub mod error;
pub mod gateway;
pub mod policy;

pub use arbitrator::{KioskArbitrator, PreLoginOutcome};
pub use error::KioskError;
pub use gateway::PresenceGateway;
pub use policy::StalePolicy;
