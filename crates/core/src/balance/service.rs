//! Balance reconciliation.
//!
//! `reconcile` is the only sanctioned writer of the derived `taken` and
//! `remaining` fields. It is a pure reducer over the request log: no
//! code path may increment or decrement the derived fields directly.

use chrono::Datelike;

use solde_shared::types::Days;

use super::error::BalanceError;
use super::types::LeaveBalanceRecord;
use crate::request::types::{LeaveRequest, LeaveStatus};

/// Result of reconciling one (user, year) record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// Recomputed consumption.
    pub taken: Days,
    /// Recomputed availability.
    pub remaining: Days,
    /// True when the stored values changed.
    pub changed: bool,
}

/// Stateless reconciliation service.
pub struct BalanceService;

impl BalanceService {
    /// Recomputes `taken` and `remaining` for a record from the request
    /// log and writes them back into the record.
    ///
    /// `taken` is the sum of frozen business-day prices over the
    /// record's validated requests; `remaining` follows from the ledger
    /// invariant. Idempotent: re-running with an unchanged request set
    /// yields identical stored values.
    pub fn reconcile(record: &mut LeaveBalanceRecord, requests: &[LeaveRequest]) -> ReconcileOutcome {
        let taken: Days = requests
            .iter()
            .filter(|r| {
                r.user == record.user
                    && r.start_date.year() == record.year
                    && r.status == LeaveStatus::Validated
            })
            .map(|r| r.business_days)
            .sum();

        let remaining = record.entitlement() - taken;
        let changed = record.taken != taken || record.remaining != remaining;
        record.taken = taken;
        record.remaining = remaining;

        ReconcileOutcome {
            taken,
            remaining,
            changed,
        }
    }

    /// Writes an earned-day component, rejecting negative values.
    ///
    /// The caller must reconcile afterwards so `remaining` reflects the
    /// new entitlement.
    pub fn set_component(
        record: &mut LeaveBalanceRecord,
        component: BalanceComponent,
        value: Days,
    ) -> Result<(), BalanceError> {
        if value.is_negative() {
            return Err(BalanceError::NegativeComponent {
                component: component.as_str(),
                value,
            });
        }
        match component {
            BalanceComponent::Accrued => record.accrued = value,
            BalanceComponent::CarriedOver => record.carried_over = value,
            BalanceComponent::FractionnementBonus => record.fractionnement_bonus = value,
            BalanceComponent::Compensatory => record.compensatory = value,
        }
        Ok(())
    }
}

/// The earned-day components of a balance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceComponent {
    /// Contractual accrual.
    Accrued,
    /// Carry-over from the previous year.
    CarriedOver,
    /// Fractionnement bonus (externally computed).
    FractionnementBonus,
    /// Administrative compensatory days.
    Compensatory,
}

impl BalanceComponent {
    /// Returns the string representation of the component.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accrued => "accrued",
            Self::CarriedOver => "carried_over",
            Self::FractionnementBonus => "fractionnement_bonus",
            Self::Compensatory => "compensatory",
        }
    }
}
