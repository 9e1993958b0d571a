//! ISO 8601 week-year boundaries.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::CalendarError;

/// Returns the first day (a Monday) of ISO week-year `year`.
///
/// ISO week 1 is the week containing January 4th, so the week-year starts on
/// the Monday of that week. This can fall as early as December 29th of the
/// previous calendar year or as late as January 4th.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] when `year` cannot be represented.
pub fn iso_year_start(year: i32) -> Result<NaiveDate, CalendarError> {
    let jan4 = NaiveDate::from_ymd_opt(year, 1, 4).ok_or(CalendarError::YearOutOfRange { year })?;
    let back = u64::from(jan4.weekday().num_days_from_monday());
    jan4.checked_sub_days(Days::new(back))
        .ok_or(CalendarError::YearOutOfRange { year })
}

/// Returns the number of days in ISO week-year `year` (364 or 371).
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] when `year` or `year + 1` cannot
/// be represented.
pub fn iso_year_days(year: i32) -> Result<i64, CalendarError> {
    let start = iso_year_start(year)?;
    let next = iso_year_start(year + 1)?;
    Ok((next - start).num_days())
}
