//! Time-savings (CET) account and transfer protocol.
//!
//! The CET is a bounded pool of banked leave days. Direct
//! administrative adjustments and approved transfer requests both go
//! through `CetService`, which enforces the account's capacity bounds
//! and appends one history entry per committed movement.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::CetError;
pub use service::{CetService, TransferExecution};
pub use types::{CetAccount, CetEntryKind, CetHistoryEntry, CetTransferRequest, CetTransferStatus};
