//! Repository methods, grouped per table, all implemented on
//! [`crate::service::ErgoService`].

pub mod access_log;
pub mod evaluation;
pub mod presence;

pub use access_log::AccessLogFilter;
