//! Leave request domain types.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use solde_shared::types::{Days, LeaveRequestId, UserId};

/// Status of a leave request.
///
/// The valid transitions are:
/// - Pending → Validated (RH)
/// - Pending → Refused (RH)
/// - Pending → Cancelled (RH)
/// - Validated → Cancelled (RH)
///
/// A pending, future-dated request may also be withdrawn (physically
/// removed) by its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    /// Awaiting an RH decision.
    Pending,
    /// Approved; counts towards `taken`.
    Validated,
    /// Rejected; never counted.
    Refused,
    /// Cancelled after the fact; no longer counted.
    Cancelled,
}

impl LeaveStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Validated => "validated",
            Self::Refused => "refused",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "validated" => Some(Self::Validated),
            "refused" => Some(Self::Refused),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Returns true if the request still awaits a decision.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns true if the request counts towards consumed leave.
    #[must_use]
    pub fn is_counted(&self) -> bool {
        matches!(self, Self::Validated)
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A leave request.
///
/// The date range and the priced `business_days` are immutable after
/// creation; cancellation is a status change, never a deletion, once
/// the request has been validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier.
    pub id: LeaveRequestId,
    /// The requesting employee.
    pub user: UserId,
    /// First day of leave.
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// True when only the afternoon of `start_date` is taken.
    pub start_half_day: bool,
    /// True when only the morning of `end_date` is taken.
    pub end_half_day: bool,
    /// Business-day price, computed at creation and frozen.
    pub business_days: Days,
    /// Current lifecycle status.
    pub status: LeaveStatus,
    /// Who decided the request, once decided.
    pub decided_by: Option<UserId>,
    /// When the request was decided.
    pub decided_at: Option<DateTime<Utc>>,
    /// Optional decision comment.
    pub comment: Option<String>,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
}

impl LeaveRequest {
    /// The ledger year this request belongs to (year of the start date).
    #[must_use]
    pub fn year(&self) -> i32 {
        self.start_date.year()
    }
}

#[cfg(test)]
impl LeaveRequest {
    /// Builds a pending request with a fixed price, bypassing pricing.
    pub(crate) fn test_fixture(
        user: UserId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        business_days: Days,
    ) -> Self {
        Self {
            id: LeaveRequestId::new(),
            user,
            start_date,
            end_date,
            start_half_day: false,
            end_half_day: false,
            business_days,
            status: LeaveStatus::Pending,
            decided_by: None,
            decided_at: None,
            comment: None,
            created_at: Utc::now(),
        }
    }
}
