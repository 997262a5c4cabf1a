//! Leave request state transitions.
//!
//! Mirrors the transition table: validate and refuse act on pending
//! requests, cancel acts on pending or validated requests, withdraw
//! physically removes a pending, future-dated request. Validation and
//! cancellation of a validated request require the caller to reconcile
//! the owning (user, year) balance afterwards; the service reports that
//! through `needs_reconcile`.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use solde_shared::types::UserId;

use super::error::RequestError;
use super::types::{LeaveRequest, LeaveStatus};
use crate::calendar;

/// A validated state transition with audit data.
#[derive(Debug, Clone)]
pub enum RequestAction {
    /// Approve a pending request.
    Validate {
        /// The new status after validation.
        new_status: LeaveStatus,
        /// The deciding RH user.
        decided_by: UserId,
        /// When the decision was made.
        decided_at: DateTime<Utc>,
        /// Optional decision comment.
        comment: Option<String>,
    },
    /// Refuse a pending request.
    Refuse {
        /// The new status after refusal.
        new_status: LeaveStatus,
        /// The deciding RH user.
        decided_by: UserId,
        /// When the decision was made.
        decided_at: DateTime<Utc>,
        /// Optional decision comment.
        comment: Option<String>,
    },
    /// Cancel a pending or validated request.
    Cancel {
        /// The new status after cancellation.
        new_status: LeaveStatus,
        /// The deciding RH user.
        decided_by: UserId,
        /// When the decision was made.
        decided_at: DateTime<Utc>,
        /// Optional decision comment.
        comment: Option<String>,
        /// True when the prior status counted towards `taken`.
        needs_reconcile: bool,
    },
    /// Physically remove a pending, future-dated request.
    Withdraw,
}

impl RequestAction {
    /// Returns the new status resulting from this action, if any.
    #[must_use]
    pub fn new_status(&self) -> Option<LeaveStatus> {
        match self {
            Self::Validate { new_status, .. }
            | Self::Refuse { new_status, .. }
            | Self::Cancel { new_status, .. } => Some(*new_status),
            Self::Withdraw => None,
        }
    }

    /// Applies the action's status and audit stamps to a request.
    pub fn apply(&self, request: &mut LeaveRequest) {
        match self {
            Self::Validate {
                new_status,
                decided_by,
                decided_at,
                comment,
            }
            | Self::Refuse {
                new_status,
                decided_by,
                decided_at,
                comment,
            }
            | Self::Cancel {
                new_status,
                decided_by,
                decided_at,
                comment,
                ..
            } => {
                request.status = *new_status;
                request.decided_by = Some(*decided_by);
                request.decided_at = Some(*decided_at);
                request.comment.clone_from(comment);
            }
            Self::Withdraw => {}
        }
    }
}

/// Stateless service for leave request lifecycle transitions.
pub struct RequestService;

impl RequestService {
    /// Creates a pending request, pricing its business-day count from
    /// the holiday calendar. The price is frozen: later calendar
    /// changes never reprice an existing request.
    pub fn create(
        user: UserId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        start_half_day: bool,
        end_half_day: bool,
        holidays: &HashSet<NaiveDate>,
    ) -> Result<LeaveRequest, RequestError> {
        if start_date > end_date {
            return Err(RequestError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }

        let business_days =
            calendar::price(start_date, end_date, start_half_day, end_half_day, holidays);

        Ok(LeaveRequest {
            id: solde_shared::types::LeaveRequestId::new(),
            user,
            start_date,
            end_date,
            start_half_day,
            end_half_day,
            business_days,
            status: LeaveStatus::Pending,
            decided_by: None,
            decided_at: None,
            comment: None,
            created_at: Utc::now(),
        })
    }

    /// Approve a pending request.
    ///
    /// No balance write happens here; the caller must reconcile the
    /// owning (user, year) afterwards.
    pub fn validate(
        current_status: LeaveStatus,
        decided_by: UserId,
        comment: Option<String>,
    ) -> Result<RequestAction, RequestError> {
        match current_status {
            LeaveStatus::Pending => Ok(RequestAction::Validate {
                new_status: LeaveStatus::Validated,
                decided_by,
                decided_at: Utc::now(),
                comment,
            }),
            _ => Err(RequestError::InvalidTransition {
                from: current_status,
                to: LeaveStatus::Validated,
            }),
        }
    }

    /// Refuse a pending request.
    pub fn refuse(
        current_status: LeaveStatus,
        decided_by: UserId,
        comment: Option<String>,
    ) -> Result<RequestAction, RequestError> {
        match current_status {
            LeaveStatus::Pending => Ok(RequestAction::Refuse {
                new_status: LeaveStatus::Refused,
                decided_by,
                decided_at: Utc::now(),
                comment,
            }),
            _ => Err(RequestError::InvalidTransition {
                from: current_status,
                to: LeaveStatus::Refused,
            }),
        }
    }

    /// Cancel a pending or validated request.
    ///
    /// Cancelling a validated request shrinks `taken`, so the action
    /// flags that a reconciliation must follow; a pending request was
    /// never counted and needs none.
    pub fn cancel(
        current_status: LeaveStatus,
        decided_by: UserId,
        comment: Option<String>,
    ) -> Result<RequestAction, RequestError> {
        match current_status {
            LeaveStatus::Pending | LeaveStatus::Validated => Ok(RequestAction::Cancel {
                new_status: LeaveStatus::Cancelled,
                decided_by,
                decided_at: Utc::now(),
                comment,
                needs_reconcile: current_status == LeaveStatus::Validated,
            }),
            _ => Err(RequestError::InvalidTransition {
                from: current_status,
                to: LeaveStatus::Cancelled,
            }),
        }
    }

    /// Withdraw a pending, future-dated request (owner only).
    ///
    /// Withdrawal is the one physical removal in the lifecycle; it
    /// never needs a reconciliation because a pending request was never
    /// counted.
    pub fn withdraw(
        request: &LeaveRequest,
        owner: UserId,
        today: NaiveDate,
    ) -> Result<RequestAction, RequestError> {
        if request.user != owner {
            return Err(RequestError::NotOwner);
        }
        if request.status != LeaveStatus::Pending {
            return Err(RequestError::WithdrawNotPending {
                status: request.status,
            });
        }
        if request.start_date < today {
            return Err(RequestError::PastDatedWithdrawal {
                start: request.start_date,
            });
        }
        Ok(RequestAction::Withdraw)
    }

    /// Check if a status transition is valid.
    ///
    /// Valid transitions:
    /// - Pending → Validated (validate)
    /// - Pending → Refused (refuse)
    /// - Pending → Cancelled (cancel)
    /// - Validated → Cancelled (cancel)
    #[must_use]
    pub fn is_valid_transition(from: LeaveStatus, to: LeaveStatus) -> bool {
        matches!(
            (from, to),
            (
                LeaveStatus::Pending,
                LeaveStatus::Validated | LeaveStatus::Refused | LeaveStatus::Cancelled
            ) | (LeaveStatus::Validated, LeaveStatus::Cancelled)
        )
    }
}
