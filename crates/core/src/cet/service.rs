//! CET movement rules.
//!
//! The service is stateless: callers pass the account and, for
//! transfers, the remaining annual leave balance, and get back the
//! committed movement. Capacity is checked at execution time, so a
//! transfer filed while room existed is still refused if the account
//! filled up before the decision.

use chrono::Utc;
use solde_shared::types::{CetEntryId, CetTransferId, Days, UserId};

use super::error::CetError;
use super::types::{
    CetAccount, CetEntryKind, CetHistoryEntry, CetTransferRequest, CetTransferStatus,
};

/// The outcome of an approved transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferExecution {
    /// The account balance after the movement.
    pub new_cet_balance: Days,
    /// Signed change to apply to the annual leave balance.
    pub leave_delta: Days,
    /// The history row to append.
    pub entry: CetHistoryEntry,
}

/// Applies CET movements under the account capacity bounds.
#[derive(Debug, Clone)]
pub struct CetService {
    cap: Days,
}

impl CetService {
    /// Creates a service enforcing the given account cap.
    #[must_use]
    pub fn new(cap: Days) -> Self {
        Self { cap }
    }

    /// Returns the configured account cap.
    #[must_use]
    pub fn cap(&self) -> Days {
        self.cap
    }

    /// Applies a direct administrative movement to an account.
    ///
    /// Credits are bounded by the cap and debits by the current
    /// balance. Returns the history row to append on success; the
    /// account is untouched on error.
    pub fn adjust(
        &self,
        account: &mut CetAccount,
        kind: CetEntryKind,
        days: Days,
        reason: &str,
    ) -> Result<CetHistoryEntry, CetError> {
        if !days.is_positive() {
            return Err(CetError::NonPositiveDays { days });
        }
        match kind {
            CetEntryKind::Credit => {
                if account.balance + days > self.cap {
                    return Err(CetError::CapacityExceeded {
                        balance: account.balance,
                        requested: days,
                        cap: self.cap,
                    });
                }
                account.balance += days;
            }
            CetEntryKind::Debit => {
                if days > account.balance {
                    return Err(CetError::InsufficientBalance {
                        balance: account.balance,
                        requested: days,
                    });
                }
                account.balance -= days;
            }
        }
        Ok(Self::entry(account.user, kind, days, reason))
    }

    /// Builds a new pending transfer request.
    pub fn new_transfer(
        user: UserId,
        kind: CetEntryKind,
        days: Days,
        reason: String,
    ) -> Result<CetTransferRequest, CetError> {
        if !days.is_positive() {
            return Err(CetError::NonPositiveDays { days });
        }
        Ok(CetTransferRequest {
            id: CetTransferId::new(),
            user,
            kind,
            days,
            reason,
            status: CetTransferStatus::Pending,
            decided_by: None,
            decided_at: None,
            comment: None,
            created_at: Utc::now(),
        })
    }

    /// Executes an approved transfer against the account.
    ///
    /// `leave_remaining` is the requester's annual balance at decision
    /// time; credits need that much room on the leave side. On any
    /// error the account is untouched and the transfer stays pending.
    pub fn execute(
        &self,
        transfer: &CetTransferRequest,
        account: &mut CetAccount,
        leave_remaining: Days,
    ) -> Result<TransferExecution, CetError> {
        Self::ensure_pending(transfer, CetTransferStatus::Validated)?;

        let leave_delta = match transfer.kind {
            CetEntryKind::Credit => {
                if transfer.days > leave_remaining {
                    return Err(CetError::InsufficientLeaveBalance {
                        remaining: leave_remaining,
                        requested: transfer.days,
                    });
                }
                if account.balance + transfer.days > self.cap {
                    return Err(CetError::CapacityExceeded {
                        balance: account.balance,
                        requested: transfer.days,
                        cap: self.cap,
                    });
                }
                account.balance += transfer.days;
                -transfer.days
            }
            CetEntryKind::Debit => {
                if transfer.days > account.balance {
                    return Err(CetError::InsufficientBalance {
                        balance: account.balance,
                        requested: transfer.days,
                    });
                }
                account.balance -= transfer.days;
                transfer.days
            }
        };

        Ok(TransferExecution {
            new_cet_balance: account.balance,
            leave_delta,
            entry: Self::entry(transfer.user, transfer.kind, transfer.days, &transfer.reason),
        })
    }

    /// Checks that a transfer can still be refused.
    pub fn ensure_refusable(transfer: &CetTransferRequest) -> Result<(), CetError> {
        Self::ensure_pending(transfer, CetTransferStatus::Refused)
    }

    fn ensure_pending(
        transfer: &CetTransferRequest,
        target: CetTransferStatus,
    ) -> Result<(), CetError> {
        if transfer.status == CetTransferStatus::Pending {
            Ok(())
        } else {
            Err(CetError::InvalidTransition {
                from: transfer.status,
                to: target,
            })
        }
    }

    fn entry(user: UserId, kind: CetEntryKind, days: Days, reason: &str) -> CetHistoryEntry {
        CetHistoryEntry {
            id: CetEntryId::new(),
            user,
            kind,
            days,
            reason: reason.to_string(),
            timestamp: Utc::now(),
        }
    }
}
