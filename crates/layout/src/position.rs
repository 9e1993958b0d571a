//! Horizontal placement of a clamped day span, one function per geometry.

use chrono::{Datelike, NaiveDate};
use panorama_calendar::{DateRange, WeekStart};
use serde::Serialize;

use crate::geometry::Geometry;

/// Column start and width of one segment within its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Placement {
    /// 0-based first column.
    pub x_start: u32,
    /// Number of columns spanned (at least 1).
    pub width: u32,
}

impl Placement {
    fn from_columns(first: i64, last: i64) -> Self {
        let x_start = first.max(0);
        let width = (last - x_start + 1).max(1);
        Self {
            x_start: x_start as u32,
            width: width as u32,
        }
    }

    /// Returns the last column covered.
    pub fn x_end(self) -> u32 {
        self.x_start + self.width - 1
    }
}

/// Places `first..=last` (already clamped to `row`) according to `geometry`.
pub fn place(geometry: Geometry, row: DateRange, first: NaiveDate, last: NaiveDate) -> Placement {
    match geometry {
        Geometry::DateGrid => place_date_grid(first, last),
        Geometry::FixedWeek { week_start } => place_fixed_week(row, week_start, first, last),
        Geometry::Cyclical => place_cyclical(row, first, last),
    }
}

fn place_date_grid(first: NaiveDate, last: NaiveDate) -> Placement {
    Placement::from_columns(i64::from(first.day0()), i64::from(last.day0()))
}

fn place_fixed_week(
    row: DateRange,
    week_start: WeekStart,
    first: NaiveDate,
    last: NaiveDate,
) -> Placement {
    let month_start = row.start().with_day(1).unwrap_or(row.start());
    let offset = i64::from(week_start.offset_of(month_start.weekday()));
    Placement::from_columns(
        offset + i64::from(first.day0()),
        offset + i64::from(last.day0()),
    )
}

fn place_cyclical(row: DateRange, first: NaiveDate, last: NaiveDate) -> Placement {
    let x_start = (first - row.start()).num_days();
    let span = (last - first).num_days();
    Placement::from_columns(x_start, x_start + span)
}
