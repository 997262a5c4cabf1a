//! French public holiday calendar.

use std::collections::HashSet;

use chrono::{Days as ChronoDays, NaiveDate};
use serde::{Deserialize, Serialize};

use super::easter::easter_sunday;

/// A public holiday, derived on demand and immutable per year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// The holiday date.
    pub date: NaiveDate,
    /// Human-readable holiday name.
    pub name: String,
    /// The year the holiday belongs to.
    pub year: i32,
}

/// The eight fixed-date French public holidays, as (month, day, name).
const FIXED_HOLIDAYS: [(u32, u32, &str); 8] = [
    (1, 1, "Jour de l'an"),
    (5, 1, "Fête du travail"),
    (5, 8, "Victoire 1945"),
    (7, 14, "Fête nationale"),
    (8, 15, "Assomption"),
    (11, 1, "Toussaint"),
    (11, 11, "Armistice 1918"),
    (12, 25, "Noël"),
];

/// Offsets from Easter Sunday for the moveable feasts, in days.
const EASTER_OFFSETS: [(u64, &str); 3] = [
    (1, "Lundi de Pâques"),
    (39, "Ascension"),
    (50, "Lundi de Pentecôte"),
];

/// Returns the public holidays of a year, sorted ascending by date.
///
/// Always yields exactly 11 entries: the 8 fixed dates plus Easter
/// Monday, Ascension and Whit Monday.
#[must_use]
pub fn holidays_for_year(year: i32) -> Vec<HolidayEntry> {
    let mut holidays: Vec<HolidayEntry> = FIXED_HOLIDAYS
        .iter()
        .filter_map(|&(month, day, name)| {
            NaiveDate::from_ymd_opt(year, month, day).map(|date| HolidayEntry {
                date,
                name: name.to_string(),
                year,
            })
        })
        .collect();

    let easter = easter_sunday(year);
    for &(offset, name) in &EASTER_OFFSETS {
        if let Some(date) = easter.checked_add_days(ChronoDays::new(offset)) {
            holidays.push(HolidayEntry {
                date,
                name: name.to_string(),
                year,
            });
        }
    }

    holidays.sort_by_key(|h| h.date);
    holidays
}

/// Returns the public holidays of an inclusive year range, sorted
/// ascending by date.
#[must_use]
pub fn holidays_for_range(start_year: i32, end_year: i32) -> Vec<HolidayEntry> {
    let mut holidays: Vec<HolidayEntry> = (start_year..=end_year)
        .flat_map(holidays_for_year)
        .collect();
    holidays.sort_by_key(|h| h.date);
    holidays
}

/// Returns the holiday dates of an inclusive year range as a set,
/// for business-day membership tests.
#[must_use]
pub fn holiday_set(start_year: i32, end_year: i32) -> HashSet<NaiveDate> {
    holidays_for_range(start_year, end_year)
        .into_iter()
        .map(|h| h.date)
        .collect()
}
