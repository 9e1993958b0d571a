//! Inclusive date ranges.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::CalendarError;

/// An inclusive `[start, end]` span of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a new range covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidRange`] if `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CalendarError> {
        if end < start {
            return Err(CalendarError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the first day of the range.
    pub fn start(self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the range (inclusive).
    pub fn end(self) -> NaiveDate {
        self.end
    }

    /// Returns the inclusive number of days covered.
    pub fn days(self) -> u32 {
        (self.end - self.start).num_days() as u32 + 1
    }

    /// Returns `true` if `date` lies within the range.
    pub fn contains(self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Intersects the closed interval `[start, end]` with this range.
    ///
    /// Returns `None` when the interval lies entirely outside. An interval
    /// whose `end` precedes its `start` is still clamped as long as it touches
    /// the range, so the result may itself be inverted.
    pub fn clamp(self, start: NaiveDate, end: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        if end < self.start || start > self.end {
            return None;
        }
        Some((start.max(self.start), end.min(self.end)))
    }
}
