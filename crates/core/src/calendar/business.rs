//! Business-day counting over an inclusive date range.
//!
//! A day counts when it is neither a Saturday/Sunday nor a public
//! holiday. Membership is tested on the normalized `NaiveDate`; callers
//! holding datetime instants must strip the time of day first so
//! timezone drift cannot shift the comparison.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use solde_shared::types::Days;

/// Returns true if `date` is a weekday that is not a public holiday.
#[must_use]
pub fn is_business_day(date: NaiveDate, holidays: &HashSet<NaiveDate>) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !holidays.contains(&date)
}

/// Counts the business days in the inclusive range `[start, end]`.
///
/// Returns 0 when `start > end`.
#[must_use]
pub fn count(start: NaiveDate, end: NaiveDate, holidays: &HashSet<NaiveDate>) -> u32 {
    if start > end {
        return 0;
    }
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| is_business_day(*d, holidays))
        .count() as u32
}

/// Prices a leave request in days, honoring half-day boundaries.
///
/// Each flagged half-day boundary subtracts 0.5 from the whole-day
/// count, but only when that boundary day is itself a business day; a
/// half-day flag on a weekend or holiday boundary is a no-op.
#[must_use]
pub fn price(
    start: NaiveDate,
    end: NaiveDate,
    start_half_day: bool,
    end_half_day: bool,
    holidays: &HashSet<NaiveDate>,
) -> Days {
    if start > end {
        return Days::ZERO;
    }
    let mut total = Days::whole(count(start, end, holidays));
    if start_half_day && is_business_day(start, holidays) {
        total -= Days::half();
    }
    if end_half_day && is_business_day(end, holidays) {
        total -= Days::half();
    }
    total
}
