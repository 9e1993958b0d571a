//! Whole-year layout: every row with its segments.

use chrono::FixedOffset;
use panorama_calendar::Row;
use panorama_events::Event;
use serde::Serialize;
use tracing::{debug, info};

use crate::geometry::Geometry;
use crate::lanes::lane_count;
use crate::segment::{Segment, build_segments_with_offset};

/// One row of the year with the segments drawn in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowLayout<'a> {
    /// The row being drawn.
    pub row: &'a Row,
    /// Segments in lane-assignment order.
    pub segments: Vec<Segment<'a>>,
    /// Lanes the row needs; 0 when it has no segments.
    pub lane_count: u32,
}

/// Lays out `events` over each of `rows`.
///
/// Rows are independent; an event spanning several rows yields one segment
/// per row it touches.
#[tracing::instrument(skip(events, rows), fields(n_events = events.len(), n_rows = rows.len()))]
pub fn layout_rows<'a>(
    events: &'a [Event],
    rows: &'a [Row],
    geometry: Geometry,
    offset: FixedOffset,
) -> Vec<RowLayout<'a>> {
    let layouts: Vec<RowLayout<'a>> = rows
        .iter()
        .map(|row| {
            let segments = build_segments_with_offset(events, row.range(), geometry, offset);
            let lane_count = lane_count(segments.iter().map(|s| s.lane));
            debug!(
                row = row.label(),
                segments = segments.len(),
                lane_count,
                "row laid out"
            );
            RowLayout {
                row,
                segments,
                lane_count,
            }
        })
        .collect();

    info!(
        mode = %geometry.mode(),
        segments = layouts.iter().map(|l| l.segments.len()).sum::<usize>(),
        "layout complete"
    );
    layouts
}
