//! Week-start convention newtype.

use chrono::Weekday;

use crate::error::CalendarError;

/// Three-letter weekday labels indexed by `num_days_from_sunday()`.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// First day of the week for weekday-aligned grids (0 = Sunday ..= 6 = Saturday).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekStart(u8);

impl WeekStart {
    /// Sunday-first weeks.
    pub const SUNDAY: Self = Self(0);
    /// Monday-first weeks (ISO 8601).
    pub const MONDAY: Self = Self(1);

    /// Creates a new `WeekStart`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWeekStart`] if `value` is greater than 6.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        if value > 6 {
            return Err(CalendarError::InvalidWeekStart { value });
        }
        Ok(Self(value))
    }

    /// Returns the raw value (0 = Sunday).
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the week-start day as a [`Weekday`].
    pub fn weekday(self) -> Weekday {
        match self.0 {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    /// Returns how many columns `day` sits after the first column of a week.
    pub fn offset_of(self, day: Weekday) -> u8 {
        let d = day.num_days_from_sunday() as u8;
        (d + 7 - self.0) % 7
    }

    /// Returns the weekday shown in the given 0-based column.
    pub fn weekday_at(self, column: usize) -> Weekday {
        let idx = (usize::from(self.0) + column) % 7;
        Self(idx as u8).weekday()
    }
}

impl TryFrom<u8> for WeekStart {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Returns the three-letter label of a weekday.
pub fn weekday_label(day: Weekday) -> &'static str {
    WEEKDAY_LABELS[day.num_days_from_sunday() as usize]
}
