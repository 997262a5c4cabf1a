//! Property-based tests for balance reconciliation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use solde_shared::types::{Days, UserId};

use super::service::BalanceService;
use super::types::LeaveBalanceRecord;
use crate::request::types::{LeaveRequest, LeaveStatus};

/// Day quantities in half-day steps, 0 to 15 days.
fn days_strategy() -> impl Strategy<Value = Days> {
    (0i64..=30).prop_map(|halves| Days::new(Decimal::new(halves * 5, 1)))
}

fn status_strategy() -> impl Strategy<Value = LeaveStatus> {
    prop_oneof![
        Just(LeaveStatus::Pending),
        Just(LeaveStatus::Validated),
        Just(LeaveStatus::Refused),
        Just(LeaveStatus::Cancelled),
    ]
}

fn build_requests(user: UserId, year: i32, entries: Vec<(Days, LeaveStatus)>) -> Vec<LeaveRequest> {
    let start = NaiveDate::from_ymd_opt(year, 6, 2).unwrap();
    entries
        .into_iter()
        .map(|(days, status)| {
            let mut req = LeaveRequest::test_fixture(user, start, start, days);
            req.status = status;
            req
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Reconciling twice with an unchanged request log stores identical
    /// values and reports no change the second time.
    #[test]
    fn prop_reconcile_idempotent(
        accrued in days_strategy(),
        carried in days_strategy(),
        entries in prop::collection::vec((days_strategy(), status_strategy()), 0..12),
    ) {
        let user = UserId::new();
        let requests = build_requests(user, 2025, entries);

        let mut record = LeaveBalanceRecord::new(user, 2025);
        record.accrued = accrued;
        record.carried_over = carried;

        BalanceService::reconcile(&mut record, &requests);
        let snapshot = record.clone();
        let second = BalanceService::reconcile(&mut record, &requests);

        prop_assert!(!second.changed);
        prop_assert_eq!(record, snapshot);
    }

    /// After any reconciliation the ledger invariant holds.
    #[test]
    fn prop_invariant_after_reconcile(
        accrued in days_strategy(),
        carried in days_strategy(),
        bonus in days_strategy(),
        compensatory in days_strategy(),
        halves in prop::collection::vec((0i64..=20, 0usize..4), 0..12),
    ) {
        let user = UserId::new();
        let mut record = LeaveBalanceRecord::new(user, 2025);
        record.accrued = accrued;
        record.carried_over = carried;
        record.fractionnement_bonus = bonus;
        record.compensatory = compensatory;

        let statuses = [
            LeaveStatus::Pending,
            LeaveStatus::Validated,
            LeaveStatus::Refused,
            LeaveStatus::Cancelled,
        ];
        let requests: Vec<LeaveRequest> = halves
            .into_iter()
            .map(|(h, s)| {
                let start = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
                let mut req =
                    LeaveRequest::test_fixture(user, start, start, Days::new(Decimal::new(h * 5, 1)));
                req.status = statuses[s];
                req
            })
            .collect();

        BalanceService::reconcile(&mut record, &requests);
        prop_assert!(record.invariant_holds());

        // taken equals the validated subset, independent of ordering.
        let expected: Days = requests
            .iter()
            .filter(|r| r.status == LeaveStatus::Validated)
            .map(|r| r.business_days)
            .sum();
        prop_assert_eq!(record.taken, expected);
    }

    /// Reconciliation is a pure function of the request set: shuffling
    /// the log never changes the outcome.
    #[test]
    fn prop_reconcile_order_independent(
        halves in prop::collection::vec((0i64..=20, 0usize..4), 1..10),
    ) {
        let user = UserId::new();
        let statuses = [
            LeaveStatus::Pending,
            LeaveStatus::Validated,
            LeaveStatus::Refused,
            LeaveStatus::Cancelled,
        ];
        let requests: Vec<LeaveRequest> = halves
            .into_iter()
            .map(|(h, s)| {
                let start = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
                let mut req =
                    LeaveRequest::test_fixture(user, start, start, Days::new(Decimal::new(h * 5, 1)));
                req.status = statuses[s];
                req
            })
            .collect();

        let mut forward = LeaveBalanceRecord::new(user, 2025);
        forward.accrued = Days::whole(25);
        BalanceService::reconcile(&mut forward, &requests);

        let mut reversed: Vec<LeaveRequest> = requests.clone();
        reversed.reverse();
        let mut backward = LeaveBalanceRecord::new(user, 2025);
        backward.accrued = Days::whole(25);
        BalanceService::reconcile(&mut backward, &reversed);

        prop_assert_eq!(forward.taken, backward.taken);
        prop_assert_eq!(forward.remaining, backward.remaining);
    }
}
