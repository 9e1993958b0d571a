//! Conversion of event instants to inclusive day spans.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use panorama_events::Event;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Returns `true` when both instants sit on midnight a whole number of days
/// apart.
///
/// Feeds that drop the all-day flag still encode all-day events this way. A
/// timed event running exactly midnight to midnight is indistinguishable
/// and is treated the same.
pub fn is_all_day_like(start: NaiveDateTime, end: NaiveDateTime) -> bool {
    let midnight = |t: NaiveDateTime| t.time() == NaiveTime::MIN;
    midnight(start)
        && midnight(end)
        && (end - start).num_seconds().abs() % SECONDS_PER_DAY == 0
}

/// Returns the inclusive `(first, last)` days an event covers, read at
/// `offset`.
///
/// All-day ends are exclusive in feeds, so the last day is the day before the
/// end date. Returns `None` when either bound is missing or malformed. The
/// result is inverted (`last < first`) for zero-length all-day events and
/// for events that end before they start.
pub fn event_days(event: &Event, offset: FixedOffset) -> Option<(NaiveDate, NaiveDate)> {
    let (start, end) = event.bounds_at(offset)?;
    let all_day = event.all_day || is_all_day_like(start, end);
    let first = start.date();
    let last = if all_day {
        end.date().pred_opt().unwrap_or(end.date())
    } else {
        end.date()
    };
    Some((first, last))
}
