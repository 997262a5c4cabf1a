//! Outbound decision notifications.
//!
//! The engine emits a notification after every decided leave request
//! or CET transfer. Delivery is best effort: a failing notifier is
//! logged and never rolls back the ledger write it follows.

use chrono::NaiveDate;
use solde_shared::types::{Days, UserId};
use thiserror::Error;

use crate::cet::{CetEntryKind, CetTransferStatus};
use crate::request::LeaveStatus;

/// A decision event worth telling the affected employee about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A leave request reached a terminal or validated state.
    LeaveDecided {
        /// The requesting employee.
        user: UserId,
        /// The status the request moved to.
        status: LeaveStatus,
        /// First day of the leave.
        start_date: NaiveDate,
        /// Last day of the leave.
        end_date: NaiveDate,
    },
    /// A CET transfer was validated or refused.
    CetDecided {
        /// The requesting employee.
        user: UserId,
        /// Transfer direction.
        kind: CetEntryKind,
        /// The status the transfer moved to.
        status: CetTransferStatus,
        /// Days the transfer asked to move.
        days: Days,
    },
}

/// Delivery failure reported by a notifier backend.
#[derive(Debug, Error)]
#[error("Notification delivery failed: {reason}")]
pub struct NotifyError {
    /// Backend-specific failure description.
    pub reason: String,
}

impl NotifyError {
    /// Creates a delivery error with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Delivery backend for decision notifications.
pub trait Notifier: Send + Sync {
    /// Delivers a single notification.
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError>;
}

/// Discards every notification. Used in tests and headless setups.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _notification: &Notification) -> Result<(), NotifyError> {
        Ok(())
    }
}
