//! Leave balance domain types.

use serde::{Deserialize, Serialize};
use solde_shared::types::{Days, UserId};

/// Per-user, per-year aggregate of earned and consumed leave days.
///
/// Exactly one record exists per (user, year); records are created
/// lazily on first access and never deleted. `taken` and `remaining`
/// are derived fields owned by the reconciliation algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalanceRecord {
    /// The employee this record belongs to.
    pub user: UserId,
    /// The calendar year this record covers.
    pub year: i32,
    /// Days accrued from the employment contract.
    pub accrued: Days,
    /// Days carried over from the previous year.
    pub carried_over: Days,
    /// Fractionnement bonus days, computed by an external collaborator.
    pub fractionnement_bonus: Days,
    /// Compensatory days granted administratively.
    pub compensatory: Days,
    /// Days consumed by validated leave requests (derived).
    pub taken: Days,
    /// Days still available (derived).
    pub remaining: Days,
}

impl LeaveBalanceRecord {
    /// Creates an empty record for a (user, year) pair.
    #[must_use]
    pub fn new(user: UserId, year: i32) -> Self {
        Self {
            user,
            year,
            accrued: Days::ZERO,
            carried_over: Days::ZERO,
            fractionnement_bonus: Days::ZERO,
            compensatory: Days::ZERO,
            taken: Days::ZERO,
            remaining: Days::ZERO,
        }
    }

    /// Total earned entitlement: every component except consumption.
    #[must_use]
    pub fn entitlement(&self) -> Days {
        self.accrued + self.carried_over + self.fractionnement_bonus + self.compensatory
    }

    /// Returns true if `remaining` matches the ledger invariant
    /// `entitlement − taken`.
    #[must_use]
    pub fn invariant_holds(&self) -> bool {
        self.remaining == self.entitlement() - self.taken
    }
}
