//! Audit logging for store mutations
//!
//! Every mutation on the budget store appends an entry here, giving the
//! consuming layer a change history for the session. The log is held in
//! memory only.

pub mod entry;
pub mod log;

pub use entry::{AuditEntry, EntityKind, Operation};
pub use log::AuditLog;
