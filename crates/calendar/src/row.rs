//! Labeled calendar rows.

use chrono::NaiveDate;
use serde::Serialize;

use crate::range::DateRange;
use crate::sequence::date_sequence;

/// What a row represents within the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    /// One calendar month.
    Month,
    /// A fixed 28-day cycle.
    Cycle,
    /// A reset week between cycle groups (7 days, or the year-end remainder).
    Reset,
}

/// A labeled, inclusive span of days rendered as one grid row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    kind: RowKind,
    label: String,
    #[serde(flatten)]
    range: DateRange,
    days: u32,
}

impl Row {
    pub(crate) fn new(kind: RowKind, label: impl Into<String>, range: DateRange) -> Self {
        Self {
            kind,
            label: label.into(),
            range,
            days: range.days(),
        }
    }

    /// Returns the row kind.
    pub fn kind(&self) -> RowKind {
        self.kind
    }

    /// Returns the display label ("March", "Cycle 4", "Reset Week", ...).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the first day of the row.
    pub fn start_date(&self) -> NaiveDate {
        self.range.start()
    }

    /// Returns the last day of the row (inclusive).
    pub fn end_date(&self) -> NaiveDate {
        self.range.end()
    }

    /// Returns the inclusive number of days in the row.
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Returns the row's date range.
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Returns every date in the row, in order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        date_sequence(self.range.start(), self.days as usize)
    }
}
