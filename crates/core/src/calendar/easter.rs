//! Easter Sunday computation.

use chrono::NaiveDate;

/// Computes Easter Sunday for a given year using the Meeus/Computus
/// algorithm (integer arithmetic only, valid for any Gregorian year
/// from 1583 onwards).
#[must_use]
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    // The algorithm only ever yields a day in March or April.
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .expect("computus yields a valid calendar date")
}
