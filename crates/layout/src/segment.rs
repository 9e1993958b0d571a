//! Mapping events onto one row as positioned, lane-packed segments.

use std::cmp::Reverse;

use chrono::{FixedOffset, NaiveDate, Offset, Utc};
use panorama_calendar::DateRange;
use panorama_events::Event;
use serde::Serialize;
use tracing::debug;

use crate::geometry::Geometry;
use crate::lanes::assign_lanes;
use crate::position::{Placement, place};
use crate::span::event_days;

/// One event's bar within one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment<'a> {
    /// The event this bar draws.
    pub event: &'a Event,
    /// First day shown, clamped to the row.
    pub start: NaiveDate,
    /// Last day shown (inclusive), clamped to the row.
    pub end: NaiveDate,
    /// 0-based first column.
    pub x_start: u32,
    /// Columns spanned, at least 1.
    pub width: u32,
    /// 0-based vertical slot.
    pub lane: u32,
}

impl Segment<'_> {
    /// Returns the last column covered.
    pub fn x_end(&self) -> u32 {
        self.x_start + self.width - 1
    }
}

/// Builds the segments of `events` that fall within `row`, reading event
/// instants in UTC.
///
/// See [`build_segments_with_offset`].
pub fn build_segments<'a>(
    events: &'a [Event],
    row: DateRange,
    geometry: Geometry,
) -> Vec<Segment<'a>> {
    build_segments_with_offset(events, row, geometry, Utc.fix())
}

/// Builds the segments of `events` that fall within `row`, reading event
/// instants at `offset`.
///
/// Events with a missing or unparseable bound, or entirely outside the row,
/// produce no segment. Output is ordered by clamped start, then longer
/// duration first, then clamped end; ties keep input order. Lanes follow
/// that order.
pub fn build_segments_with_offset<'a>(
    events: &'a [Event],
    row: DateRange,
    geometry: Geometry,
    offset: FixedOffset,
) -> Vec<Segment<'a>> {
    let mut clamped: Vec<(&Event, NaiveDate, NaiveDate)> = events
        .iter()
        .filter_map(|event| {
            let Some((first, last)) = event_days(event, offset) else {
                debug!(id = %event.id, "skipping event without parseable start and end");
                return None;
            };
            let (start, end) = row.clamp(first, last)?;
            Some((event, start, end))
        })
        .collect();

    clamped.sort_by_key(|&(_, start, end)| (start, Reverse(end - start), end));

    let placements: Vec<Placement> = clamped
        .iter()
        .map(|&(_, start, end)| place(geometry, row, start, end))
        .collect();
    let lanes = assign_lanes(&placements);

    clamped
        .into_iter()
        .zip(placements)
        .zip(lanes)
        .map(|(((event, start, end), placement), lane)| Segment {
            event,
            start,
            end,
            x_start: placement.x_start,
            width: placement.width,
            lane,
        })
        .collect()
}
