//! Leave entitlement calculations.
//!
//! Permanent staff accrue a fixed number of days per full month worked,
//! capped at the annual entitlement. Fixed-term (CDD) contracts earn a
//! prorated entitlement from the contract span using an average month
//! length of 30.44 days. The proration is intentionally approximate and
//! must stay bit-for-bit stable: existing balance records were produced
//! by exactly this formula.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use solde_shared::config::PolicyConfig;
use solde_shared::types::Days;

/// Average number of days in a month, used for contract proration.
const AVG_DAYS_PER_MONTH: Decimal = Decimal::from_parts(3044, 0, 0, false, 2);

/// Span length from which a contract counts as a full year.
const FULL_YEAR_DAYS: i64 = 365;

/// Months in a full accrual year.
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Computes leave entitlements from the configured accrual policy.
#[derive(Debug, Clone)]
pub struct AccrualCalculator {
    policy: PolicyConfig,
}

impl AccrualCalculator {
    /// Creates a calculator with the given policy.
    #[must_use]
    pub fn new(policy: PolicyConfig) -> Self {
        Self { policy }
    }

    /// Linear accrual for permanent staff: `months` full months worked
    /// this year, capped at the annual entitlement.
    #[must_use]
    pub fn monthly(&self, months: u32) -> Days {
        let earned = Days::new(Decimal::from(months) * self.policy.monthly_accrual_days);
        earned.min(Days::new(self.policy.annual_cap_days)).round2()
    }

    /// Entitlement earned over a fixed-term contract span.
    ///
    /// The span is inclusive of both endpoints. A span of a year or
    /// more short-circuits to twelve months worked; the result is
    /// clamped to the annual cap when it exceeds it or when a full year
    /// was worked, then rounded to two decimals (half-up).
    ///
    /// Returns zero when either boundary is absent.
    #[must_use]
    pub fn contract_entitlement(
        &self,
        contract_start: Option<NaiveDate>,
        contract_end: Option<NaiveDate>,
    ) -> Days {
        let (Some(start), Some(end)) = (contract_start, contract_end) else {
            return Days::ZERO;
        };

        let span_days = (end - start).num_days() + 1;
        if span_days <= 0 {
            return Days::ZERO;
        }

        let months_worked = if span_days >= FULL_YEAR_DAYS {
            MONTHS_PER_YEAR
        } else {
            Decimal::from(span_days) / AVG_DAYS_PER_MONTH
        };

        let earned = months_worked * self.policy.monthly_accrual_days;
        let capped = if earned > self.policy.annual_cap_days || months_worked >= MONTHS_PER_YEAR {
            self.policy.annual_cap_days
        } else {
            earned
        };

        Days::new(capped).round2()
    }
}
