//! Gregorian month arithmetic.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;
use crate::week::WeekStart;

/// Number of days in each month of a common year (1-indexed; index 0 is unused).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Full English month names, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn check_month(month: u32) -> Result<(), CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(())
}

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `month` (1..=12) of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    check_month(month)?;
    let base = u32::from(DAYS_PER_MONTH[month as usize]);
    if month == 2 && is_leap_year(year) {
        Ok(base + 1)
    } else {
        Ok(base)
    }
}

/// Returns the first day of `month` in `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] for a bad month and
/// [`CalendarError::YearOutOfRange`] when the date backend cannot hold `year`.
pub fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, CalendarError> {
    check_month(month)?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::YearOutOfRange { year })
}

/// Returns the last day of `month` in `year`.
///
/// # Errors
///
/// Same as [`first_of_month`].
pub fn last_of_month(year: i32, month: u32) -> Result<NaiveDate, CalendarError> {
    let days = days_in_month(year, month)?;
    NaiveDate::from_ymd_opt(year, month, days).ok_or(CalendarError::YearOutOfRange { year })
}

/// Returns the column of the first day of `month` in a weekday-aligned grid.
///
/// With a Sunday week start, a month beginning on a Wednesday has offset 3.
///
/// # Errors
///
/// Same as [`first_of_month`].
pub fn weekday_offset(year: i32, month: u32, week_start: WeekStart) -> Result<u32, CalendarError> {
    let first = first_of_month(year, month)?;
    Ok(u32::from(week_start.offset_of(first.weekday())))
}

/// Returns the number of columns needed so that every month of `year` fits
/// in one weekday-aligned grid starting on `week_start`.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] when `year` cannot be represented.
pub fn fixed_week_columns(year: i32, week_start: WeekStart) -> Result<u32, CalendarError> {
    let mut columns = 0;
    for month in 1..=12 {
        let width = weekday_offset(year, month, week_start)? + days_in_month(year, month)?;
        columns = columns.max(width);
    }
    Ok(columns)
}

/// Returns the full English name of `month` (1..=12).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn month_label(month: u32) -> Result<&'static str, CalendarError> {
    check_month(month)?;
    Ok(MONTH_LABELS[(month - 1) as usize])
}
