//! Year structures: calendar months and the cyclical ISO-year partition.

use chrono::{Datelike, Days, NaiveDate};
use tracing::warn;

use crate::error::CalendarError;
use crate::iso::iso_year_start;
use crate::month::{MONTH_LABELS, first_of_month, last_of_month};
use crate::range::DateRange;
use crate::row::{Row, RowKind};

/// Length of one cycle row in days.
pub const CYCLE_DAYS: u32 = 28;

/// Length of a regular reset row in days, and the fallback for the final one.
pub const RESET_DAYS: u32 = 7;

const CYCLES_PER_QUARTER: u32 = 3;
const QUARTERS: u32 = 4;

fn advance(date: NaiveDate, days: u32) -> Result<NaiveDate, CalendarError> {
    date.checked_add_days(Days::new(u64::from(days)))
        .ok_or(CalendarError::YearOutOfRange { year: date.year() })
}

fn span(start: NaiveDate, days: u32) -> Result<DateRange, CalendarError> {
    let end = advance(start, days.saturating_sub(1))?;
    DateRange::new(start, end)
}

/// Returns one row per calendar month of `year`.
///
/// Each row runs from the first to the last day of its month and is labeled
/// with the full month name.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] when `year` cannot be represented.
pub fn month_rows(year: i32) -> Result<Vec<Row>, CalendarError> {
    let mut rows = Vec::with_capacity(12);
    for (idx, label) in MONTH_LABELS.iter().enumerate() {
        let month = idx as u32 + 1;
        let range = DateRange::new(first_of_month(year, month)?, last_of_month(year, month)?)?;
        rows.push(Row::new(RowKind::Month, *label, range));
    }
    Ok(rows)
}

/// Returns the sixteen rows of the cyclical calendar for ISO week-year `year`.
///
/// The year is split into four quarters of three 28-day cycles followed by a
/// reset week. The first three reset weeks last 7 days; the last one absorbs
/// whatever remains before the next ISO week-year begins (7 days in a 52-week
/// year, 14 in a 53-week year).
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] when `year` or `year + 1` cannot
/// be represented.
///
/// # Example
///
/// ```
/// use panorama_calendar::{cyclical_rows, RowKind};
///
/// let rows = cyclical_rows(2024).unwrap();
/// assert_eq!(rows.len(), 16);
/// assert_eq!(rows[0].label(), "Cycle 1");
/// assert_eq!(rows[3].kind(), RowKind::Reset);
/// assert_eq!(rows[15].label(), "Reset / End");
/// ```
pub fn cyclical_rows(year: i32) -> Result<Vec<Row>, CalendarError> {
    let start = iso_year_start(year)?;
    let next_start = iso_year_start(year + 1)?;
    partition_cycles(start, next_start)
}

/// Lays the cycle/reset pattern from `start`, ending the final reset week at
/// the day before `next_start`.
pub(crate) fn partition_cycles(
    start: NaiveDate,
    next_start: NaiveDate,
) -> Result<Vec<Row>, CalendarError> {
    let mut rows = Vec::with_capacity((QUARTERS * (CYCLES_PER_QUARTER + 1)) as usize);
    let mut cursor = start;

    for quarter in 1..=QUARTERS {
        for c in 1..=CYCLES_PER_QUARTER {
            let n = (quarter - 1) * CYCLES_PER_QUARTER + c;
            rows.push(Row::new(
                RowKind::Cycle,
                format!("Cycle {n}"),
                span(cursor, CYCLE_DAYS)?,
            ));
            cursor = advance(cursor, CYCLE_DAYS)?;
        }

        let is_last = quarter == QUARTERS;
        let days = if is_last {
            final_reset_days(cursor, next_start)
        } else {
            RESET_DAYS
        };
        let label = if is_last { "Reset / End" } else { "Reset Week" };
        rows.push(Row::new(RowKind::Reset, label, span(cursor, days)?));
        cursor = advance(cursor, days)?;
    }

    Ok(rows)
}

/// Days between `cursor` and `next_start`, or [`RESET_DAYS`] when that
/// remainder is less than one day.
pub(crate) fn final_reset_days(cursor: NaiveDate, next_start: NaiveDate) -> u32 {
    let remaining = (next_start - cursor).num_days();
    if remaining < 1 {
        warn!(
            %cursor,
            %next_start,
            remaining,
            "final reset week has no remaining days, using {RESET_DAYS}"
        );
        return RESET_DAYS;
    }
    remaining as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_rows_2024() {
        let rows = month_rows(2024).unwrap();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[1].label(), "February");
        assert_eq!(rows[1].days(), 29);
        assert_eq!(rows[1].start_date(), ymd(2024, 2, 1));
        assert_eq!(rows[1].end_date(), ymd(2024, 2, 29));
        assert!(rows.iter().all(|r| r.kind() == RowKind::Month));
    }

    #[test]
    fn cyclical_2024_layout() {
        let rows = cyclical_rows(2024).unwrap();
        assert_eq!(rows[0].start_date(), ymd(2024, 1, 1));
        assert_eq!(rows[0].end_date(), ymd(2024, 1, 28));
        assert_eq!(rows[3].start_date(), ymd(2024, 3, 25));
        assert_eq!(rows[3].days(), 7);
        // 2024 has 52 ISO weeks, so the last reset week is a normal 7 days
        // ending the day before ISO 2025 starts (Monday 2024-12-30).
        assert_eq!(rows[15].days(), 7);
        assert_eq!(rows[15].end_date(), ymd(2024, 12, 29));
    }

    #[test]
    fn cyclical_53_week_year_absorbs_extra_week() {
        let rows = cyclical_rows(2020).unwrap();
        assert_eq!(rows[15].days(), 14);
        assert_eq!(rows[15].end_date(), ymd(2021, 1, 3));
    }

    #[test]
    fn cycle_labels_run_one_to_twelve() {
        let rows = cyclical_rows(2025).unwrap();
        let labels: Vec<&str> = rows
            .iter()
            .filter(|r| r.kind() == RowKind::Cycle)
            .map(|r| r.label())
            .collect();
        let expected: Vec<String> = (1..=12).map(|n| format!("Cycle {n}")).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn reset_labels() {
        let rows = cyclical_rows(2025).unwrap();
        let resets: Vec<&str> = rows
            .iter()
            .filter(|r| r.kind() == RowKind::Reset)
            .map(|r| r.label())
            .collect();
        assert_eq!(
            resets,
            vec!["Reset Week", "Reset Week", "Reset Week", "Reset / End"]
        );
    }

    #[test]
    fn final_reset_fallback_on_zero_remainder() {
        let d = ymd(2024, 12, 30);
        assert_eq!(final_reset_days(d, d), RESET_DAYS);
    }

    #[test]
    fn final_reset_fallback_on_negative_remainder() {
        assert_eq!(
            final_reset_days(ymd(2024, 12, 30), ymd(2024, 12, 20)),
            RESET_DAYS
        );
    }

    #[test]
    fn partition_with_short_span_uses_fallback() {
        // The next start falls inside the last cycle, so the naive remainder
        // would be negative; the final row must still be a 7-day reset week.
        let start = ymd(2024, 1, 1);
        let rows = partition_cycles(start, ymd(2024, 12, 1)).unwrap();
        assert_eq!(rows.len(), 16);
        assert_eq!(rows[15].days(), 7);
        assert_eq!(rows[15].label(), "Reset / End");
    }

    #[test]
    fn partition_exact_remainder() {
        let start = ymd(2024, 1, 1);
        let rows = partition_cycles(start, ymd(2024, 12, 26)).unwrap();
        assert_eq!(rows[15].days(), 3);
    }
}
