//! Error types for the panorama-calendar crate.

/// Error type for all fallible operations in the panorama-calendar crate.
///
/// These are structural errors: a month, week start, or year that a caller
/// passed in does not describe a real calendar position.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a week-start day is outside 0..=6 (0 = Sunday).
    #[error("invalid week start: {value} (must be 0..=6, 0 = Sunday)")]
    InvalidWeekStart {
        /// The invalid week-start value that was provided.
        value: u8,
    },

    /// Returned when a year cannot be represented by the date backend.
    #[error("year {year} is outside the supported date range")]
    YearOutOfRange {
        /// The year that could not be represented.
        year: i32,
    },

    /// Returned when a date range would end before it starts.
    #[error("invalid date range: {start} is after {end}")]
    InvalidRange {
        /// First day of the requested range.
        start: chrono::NaiveDate,
        /// Last day of the requested range.
        end: chrono::NaiveDate,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_week_start() {
        let err = CalendarError::InvalidWeekStart { value: 7 };
        assert_eq!(
            err.to_string(),
            "invalid week start: 7 (must be 0..=6, 0 = Sunday)"
        );
    }

    #[test]
    fn error_year_out_of_range() {
        let err = CalendarError::YearOutOfRange { year: 300_000 };
        assert_eq!(
            err.to_string(),
            "year 300000 is outside the supported date range"
        );
    }

    #[test]
    fn error_invalid_range() {
        let err = CalendarError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date range: 2024-03-02 is after 2024-03-01"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
