//! Date sequence generation.

use chrono::NaiveDate;

/// Generates a contiguous sequence of Gregorian dates.
///
/// Starting from `start`, produces up to `n_days` consecutive dates. Month and
/// year boundaries (including February 29th) are handled by the date backend.
/// The sequence stops early only if the backend's maximum date is reached.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use panorama_calendar::date_sequence;
///
/// let start = NaiveDate::from_ymd_opt(2023, 12, 30).unwrap();
/// let dates = date_sequence(start, 4);
/// assert_eq!(dates.len(), 4);
/// assert_eq!(dates[3], NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
/// ```
pub fn date_sequence(start: NaiveDate, n_days: usize) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(n_days);
    if n_days == 0 {
        return dates;
    }
    dates.push(start);
    let mut current = start;
    for _ in 1..n_days {
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
        dates.push(current);
    }
    dates
}
