//! Year and source-selection filters over fetched events.

use chrono::{Datelike, FixedOffset};

use crate::event::Event;

/// Keeps events that start or end in `year`, read at `offset`.
///
/// Events with a missing or malformed bound are dropped.
pub fn events_in_year(events: &[Event], year: i32, offset: FixedOffset) -> Vec<Event> {
    events
        .iter()
        .filter(|e| match e.bounds_at(offset) {
            Some((start, end)) => start.year() == year || end.year() == year,
            None => false,
        })
        .cloned()
        .collect()
}

/// Keeps events whose source id is in `selected`.
///
/// An empty selection yields no events.
pub fn select_sources<S: AsRef<str>>(events: &[Event], selected: &[S]) -> Vec<Event> {
    events
        .iter()
        .filter(|e| selected.iter().any(|s| s.as_ref() == e.calendar_source_id))
        .cloned()
        .collect()
}
