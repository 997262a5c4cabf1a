//! Per-user/per-year leave balance reconciliation.
//!
//! The balance record never trusts incremental counters: `taken` and
//! `remaining` are recomputed from the authoritative set of validated
//! requests on every reconciliation. This is a deliberate consistency
//! strategy, not an optimization target.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::BalanceError;
pub use service::{BalanceComponent, BalanceService, ReconcileOutcome};
pub use types::LeaveBalanceRecord;
