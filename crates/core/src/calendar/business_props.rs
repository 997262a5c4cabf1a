//! Property-based tests for business-day counting.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;
use solde_shared::types::Days;

use super::business::{count, is_business_day, price};
use super::holiday::holiday_set;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2020i32..2032, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A single-day range counts 1 for a plain weekday, 0 otherwise.
    #[test]
    fn prop_single_day_count(date in date_strategy()) {
        let empty = HashSet::new();
        let expected = u32::from(!matches!(date.weekday(), Weekday::Sat | Weekday::Sun));
        prop_assert_eq!(count(date, date, &empty), expected);
    }

    /// Extending the end date never decreases the count.
    #[test]
    fn prop_count_monotone_in_end(start in date_strategy(), len in 0i64..120) {
        let holidays = holiday_set(start.year(), start.year() + 1);
        let end = start + Duration::days(len);
        let wider = end + Duration::days(1);
        prop_assert!(count(start, end, &holidays) <= count(start, wider, &holidays));
    }

    /// The count never exceeds the calendar length of the range.
    #[test]
    fn prop_count_bounded_by_span(start in date_strategy(), len in 0i64..120) {
        let holidays = holiday_set(start.year(), start.year() + 1);
        let end = start + Duration::days(len);
        prop_assert!(i64::from(count(start, end, &holidays)) <= len + 1);
    }

    /// Adding holidays can only reduce the count.
    #[test]
    fn prop_holidays_only_reduce(start in date_strategy(), len in 0i64..120) {
        let empty = HashSet::new();
        let holidays = holiday_set(start.year(), start.year() + 1);
        let end = start + Duration::days(len);
        prop_assert!(count(start, end, &holidays) <= count(start, end, &empty));
    }

    /// Half-day pricing stays within one day of the whole-day count and
    /// is never negative.
    #[test]
    fn prop_price_within_bounds(
        start in date_strategy(),
        len in 0i64..60,
        start_half in any::<bool>(),
        end_half in any::<bool>(),
    ) {
        let holidays = holiday_set(start.year(), start.year() + 1);
        let end = start + Duration::days(len);
        let whole = Days::whole(count(start, end, &holidays));
        let priced = price(start, end, start_half, end_half, &holidays);
        prop_assert!(priced <= whole);
        prop_assert!(whole - priced <= Days::ONE);
        prop_assert!(!priced.is_negative());
    }

    /// A boundary flag costs exactly 0.5 when the boundary is a
    /// business day, nothing otherwise.
    #[test]
    fn prop_start_flag_costs_half_on_business_day(start in date_strategy(), len in 0i64..60) {
        let holidays = holiday_set(start.year(), start.year() + 1);
        let end = start + Duration::days(len);
        let plain = price(start, end, false, false, &holidays);
        let flagged = price(start, end, true, false, &holidays);
        if is_business_day(start, &holidays) {
            prop_assert_eq!(plain - flagged, Days::half());
        } else {
            prop_assert_eq!(plain, flagged);
        }
    }
}
