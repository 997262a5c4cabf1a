//! Property-based tests for CET movements.

use proptest::prelude::*;
use rust_decimal::Decimal;
use solde_shared::types::{Days, UserId};

use super::service::CetService;
use super::types::{CetAccount, CetEntryKind};

/// Day quantities in half-day steps, 0 to 35 days.
fn days_strategy() -> impl Strategy<Value = Days> {
    (0i64..=70).prop_map(|halves| Days::new(Decimal::new(halves * 5, 1)))
}

fn kind_strategy() -> impl Strategy<Value = CetEntryKind> {
    prop_oneof![Just(CetEntryKind::Credit), Just(CetEntryKind::Debit)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// No sequence of adjustments can push the balance outside [0, cap].
    #[test]
    fn prop_balance_stays_within_bounds(
        moves in prop::collection::vec((kind_strategy(), days_strategy()), 0..20),
    ) {
        let cap = Days::whole(60);
        let svc = CetService::new(cap);
        let mut account = CetAccount::new(UserId::new());

        for (kind, days) in moves {
            let _ = svc.adjust(&mut account, kind, days, "prop move");
            prop_assert!(account.balance >= Days::ZERO);
            prop_assert!(account.balance <= cap);
        }
    }

    /// A rejected adjustment never mutates the account.
    #[test]
    fn prop_failed_adjust_leaves_account_untouched(
        start in days_strategy(),
        kind in kind_strategy(),
        days in days_strategy(),
    ) {
        let svc = CetService::new(Days::whole(60));
        let mut account = CetAccount::new(UserId::new());
        account.balance = start.min(Days::whole(60));
        let before = account.balance;

        if svc.adjust(&mut account, kind, days, "prop move").is_err() {
            prop_assert_eq!(account.balance, before);
        }
    }

    /// An executed transfer conserves days: the CET gains exactly what
    /// the leave balance loses, and vice versa.
    #[test]
    fn prop_transfer_conserves_days(
        start in days_strategy(),
        kind in kind_strategy(),
        days in days_strategy(),
        remaining in days_strategy(),
    ) {
        let svc = CetService::new(Days::whole(60));
        let mut account = CetAccount::new(UserId::new());
        account.balance = start.min(Days::whole(60));
        let before = account.balance;

        let Ok(transfer) =
            CetService::new_transfer(account.user, kind, days, "prop transfer".to_string())
        else {
            return Ok(());
        };

        if let Ok(exec) = svc.execute(&transfer, &mut account, remaining) {
            let cet_delta = account.balance - before;
            prop_assert_eq!(cet_delta + exec.leave_delta, Days::ZERO);
            prop_assert_eq!(exec.new_cet_balance, account.balance);
            prop_assert!(account.balance >= Days::ZERO);
            prop_assert!(account.balance <= Days::whole(60));
        } else {
            prop_assert_eq!(account.balance, before);
        }
    }
}
