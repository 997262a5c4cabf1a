//! Leave request error types.

use chrono::NaiveDate;
use thiserror::Error;

use super::types::LeaveStatus;

/// Errors that can occur during leave request operations.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The start date is after the end date.
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange {
        /// Requested start date.
        start: NaiveDate,
        /// Requested end date.
        end: NaiveDate,
    },

    /// Attempted an invalid status transition.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: LeaveStatus,
        /// The attempted target status.
        to: LeaveStatus,
    },

    /// Only the requesting employee may withdraw their request.
    #[error("Only the request owner may withdraw it")]
    NotOwner,

    /// A withdrawal was attempted on a request that already started.
    #[error("Cannot withdraw a request starting in the past ({start})")]
    PastDatedWithdrawal {
        /// The request's start date.
        start: NaiveDate,
    },

    /// A withdrawal was attempted on a non-pending request.
    #[error("Only pending requests can be withdrawn (status is {status})")]
    WithdrawNotPending {
        /// The request's current status.
        status: LeaveStatus,
    },
}

impl RequestError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidDateRange { .. } => 400,
            Self::NotOwner => 403,
            Self::InvalidTransition { .. }
            | Self::PastDatedWithdrawal { .. }
            | Self::WithdrawNotPending { .. } => 409,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::NotOwner => "NOT_OWNER",
            Self::PastDatedWithdrawal { .. } => "PAST_DATED_WITHDRAWAL",
            Self::WithdrawNotPending { .. } => "WITHDRAW_NOT_PENDING",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_error() {
        let err = RequestError::InvalidTransition {
            from: LeaveStatus::Cancelled,
            to: LeaveStatus::Cancelled,
        };
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.error_code(), "INVALID_TRANSITION");
        assert!(err.to_string().contains("cancelled"));
    }

    #[test]
    fn test_invalid_date_range_error() {
        let err = RequestError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        };
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "INVALID_DATE_RANGE");
    }

    #[test]
    fn test_withdrawal_errors() {
        let past = RequestError::PastDatedWithdrawal {
            start: NaiveDate::from_ymd_opt(2020, 1, 6).unwrap(),
        };
        assert_eq!(past.status_code(), 409);
        assert_eq!(past.error_code(), "PAST_DATED_WITHDRAWAL");

        let not_pending = RequestError::WithdrawNotPending {
            status: LeaveStatus::Validated,
        };
        assert_eq!(not_pending.status_code(), 409);
        assert_eq!(not_pending.error_code(), "WITHDRAW_NOT_PENDING");

        assert_eq!(RequestError::NotOwner.status_code(), 403);
    }
}
