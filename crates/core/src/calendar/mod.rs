//! French public holidays and business-day counting.
//!
//! This module implements the working-day calendar:
//! - Easter Sunday computation (Meeus/Computus)
//! - Fixed and Easter-relative public holidays
//! - Business-day counting with half-day boundaries
//!
//! All functions are pure and side-effect-free; callers may cache
//! per-year results indefinitely.

pub mod business;
pub mod easter;
pub mod holiday;

#[cfg(test)]
mod business_props;

pub use business::{count, is_business_day, price};
pub use easter::easter_sunday;
pub use holiday::{HolidayEntry, holiday_set, holidays_for_range, holidays_for_year};
