//! CET error types.

use solde_shared::types::Days;
use thiserror::Error;

use super::types::CetTransferStatus;

/// Errors that can occur during CET operations.
#[derive(Debug, Error)]
pub enum CetError {
    /// A transfer or adjustment was requested for zero or negative days.
    #[error("Transfer amount must be positive (got {days})")]
    NonPositiveDays {
        /// The rejected amount.
        days: Days,
    },

    /// Crediting the account would push its balance over the cap.
    #[error("CET capacity exceeded: balance {balance} + {requested} > cap {cap}")]
    CapacityExceeded {
        /// The account balance at decision time.
        balance: Days,
        /// Days the movement tried to add.
        requested: Days,
        /// The configured account cap.
        cap: Days,
    },

    /// Debiting the account would push its balance below zero.
    #[error("Insufficient CET balance: {balance} available, {requested} requested")]
    InsufficientBalance {
        /// The account balance at decision time.
        balance: Days,
        /// Days the movement tried to remove.
        requested: Days,
    },

    /// Crediting the CET needs that many days left on the annual balance.
    #[error("Insufficient leave balance: {remaining} remaining, {requested} requested")]
    InsufficientLeaveBalance {
        /// Days remaining on the annual leave balance.
        remaining: Days,
        /// Days the transfer tried to bank.
        requested: Days,
    },

    /// Attempted to decide a transfer that is no longer pending.
    #[error("Invalid transfer transition from {from} to {to}")]
    InvalidTransition {
        /// The transfer's current status.
        from: CetTransferStatus,
        /// The attempted target status.
        to: CetTransferStatus,
    },
}

impl CetError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NonPositiveDays { .. } => 400,
            Self::InvalidTransition { .. } => 409,
            Self::CapacityExceeded { .. }
            | Self::InsufficientBalance { .. }
            | Self::InsufficientLeaveBalance { .. } => 422,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveDays { .. } => "NON_POSITIVE_DAYS",
            Self::CapacityExceeded { .. } => "CET_CAPACITY_EXCEEDED",
            Self::InsufficientBalance { .. } => "CET_INSUFFICIENT_BALANCE",
            Self::InsufficientLeaveBalance { .. } => "INSUFFICIENT_LEAVE_BALANCE",
            Self::InvalidTransition { .. } => "INVALID_TRANSFER_TRANSITION",
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_capacity_errors_are_unprocessable() {
        let err = CetError::CapacityExceeded {
            balance: Days::new(dec!(58)),
            requested: Days::new(dec!(5)),
            cap: Days::new(dec!(60)),
        };
        assert_eq!(err.status_code(), 422);
        assert_eq!(err.error_code(), "CET_CAPACITY_EXCEEDED");
        assert!(err.to_string().contains("58"));

        let err = CetError::InsufficientBalance {
            balance: Days::new(dec!(1)),
            requested: Days::new(dec!(2)),
        };
        assert_eq!(err.status_code(), 422);

        let err = CetError::InsufficientLeaveBalance {
            remaining: Days::new(dec!(0.5)),
            requested: Days::new(dec!(3)),
        };
        assert_eq!(err.status_code(), 422);
        assert_eq!(err.error_code(), "INSUFFICIENT_LEAVE_BALANCE");
    }

    #[test]
    fn test_validation_and_conflict_codes() {
        let err = CetError::NonPositiveDays { days: Days::ZERO };
        assert_eq!(err.status_code(), 400);

        let err = CetError::InvalidTransition {
            from: CetTransferStatus::Refused,
            to: CetTransferStatus::Validated,
        };
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.error_code(), "INVALID_TRANSFER_TRANSITION");
    }
}
