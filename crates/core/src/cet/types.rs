//! CET domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use solde_shared::types::{CetEntryId, CetTransferId, Days, UserId};

/// A time-savings account, one per user, created lazily at balance 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CetAccount {
    /// The account owner.
    pub user: UserId,
    /// Banked days. Bounded to `[0, cap]` after every committed write.
    pub balance: Days,
}

impl CetAccount {
    /// Creates an empty account for a user.
    #[must_use]
    pub fn new(user: UserId) -> Self {
        Self {
            user,
            balance: Days::ZERO,
        }
    }
}

/// Direction of a CET movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CetEntryKind {
    /// Days flowing into the CET (leave → CET).
    Credit,
    /// Days flowing out of the CET (CET → leave).
    Debit,
}

impl CetEntryKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }

    /// Parses a kind from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "credit" => Some(Self::Credit),
            "debit" => Some(Self::Debit),
            _ => None,
        }
    }
}

impl std::fmt::Display for CetEntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An append-only CET movement log row. Never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CetHistoryEntry {
    /// Unique identifier.
    pub id: CetEntryId,
    /// The account owner.
    pub user: UserId,
    /// Movement direction.
    pub kind: CetEntryKind,
    /// Moved days, always positive.
    pub days: Days,
    /// Why the movement happened.
    pub reason: String,
    /// When the movement was committed.
    pub timestamp: DateTime<Utc>,
}

/// Status of a CET transfer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CetTransferStatus {
    /// Awaiting an RH decision.
    Pending,
    /// Approved and executed.
    Validated,
    /// Rejected; no ledger mutation happened.
    Refused,
}

impl CetTransferStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Validated => "validated",
            Self::Refused => "refused",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "validated" => Some(Self::Validated),
            "refused" => Some(Self::Refused),
            _ => None,
        }
    }
}

impl std::fmt::Display for CetTransferStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A request to move days between the annual balance and the CET.
///
/// `credit` moves days leave → CET; `debit` moves CET → leave. The
/// transfer only executes on RH approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CetTransferRequest {
    /// Unique identifier.
    pub id: CetTransferId,
    /// The requesting employee.
    pub user: UserId,
    /// Transfer direction.
    pub kind: CetEntryKind,
    /// Days to move, always positive.
    pub days: Days,
    /// Why the employee requests the transfer.
    pub reason: String,
    /// Current lifecycle status.
    pub status: CetTransferStatus,
    /// Who decided the request, once decided.
    pub decided_by: Option<UserId>,
    /// When the request was decided.
    pub decided_at: Option<DateTime<Utc>>,
    /// Optional decision comment.
    pub comment: Option<String>,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
}
