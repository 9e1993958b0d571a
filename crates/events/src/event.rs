//! Calendar event data model.

use chrono::{FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::EventsError;
use crate::time::parse_instant;

/// Colour used for events whose source did not supply one.
pub const DEFAULT_EVENT_COLOR: &str = "#0ea5e9";

/// Title shown for events without a summary.
pub const UNTITLED: &str = "(No title)";

/// One event from a calendar feed, already parsed.
///
/// `start` and `end` hold the feed's serialized instants. They are kept as
/// strings so that a malformed value only affects its own event; use
/// [`Event::start_at`] and [`Event::end_at`] to interpret them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Feed UID, stable across refetches of the same source.
    pub id: String,
    /// Identifier of the calendar source this event came from.
    #[serde(alias = "calendarId")]
    pub calendar_source_id: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Start instant.
    #[serde(default)]
    pub start: Option<String>,
    /// End instant (exclusive for all-day events).
    #[serde(default)]
    pub end: Option<String>,
    /// Whether `start`/`end` are whole-day boundaries.
    #[serde(default)]
    pub all_day: bool,
    /// Display colour, if the source assigned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Title of the source calendar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_title: Option<String>,
    /// Free-text description from the feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Where the event takes place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Link to the event in the source calendar's web UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_link: Option<String>,
}

impl Event {
    /// Creates a timed event with only the fields the layout needs.
    pub fn new(
        id: impl Into<String>,
        calendar_source_id: impl Into<String>,
        title: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            calendar_source_id: calendar_source_id.into(),
            title: title.into(),
            start: Some(start.into()),
            end: Some(end.into()),
            all_day: false,
            color: None,
            calendar_title: None,
            description: None,
            location: None,
            html_link: None,
        }
    }

    /// Marks the event as all-day.
    pub fn with_all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Sets the display colour.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Returns the colour to draw the event with.
    pub fn display_color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_EVENT_COLOR)
    }

    /// Returns the title, or a placeholder when it is blank.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    /// Returns the start as wall-clock time at `offset`.
    ///
    /// Returns `None` when the start is missing and an error when it is
    /// malformed.
    pub fn start_at(&self, offset: FixedOffset) -> Option<Result<NaiveDateTime, EventsError>> {
        self.start.as_deref().map(|s| parse_instant(s, offset))
    }

    /// Returns the end as wall-clock time at `offset`.
    ///
    /// Same contract as [`Event::start_at`].
    pub fn end_at(&self, offset: FixedOffset) -> Option<Result<NaiveDateTime, EventsError>> {
        self.end.as_deref().map(|s| parse_instant(s, offset))
    }

    /// Returns both bounds, or `None` when either is missing or malformed.
    pub fn bounds_at(&self, offset: FixedOffset) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let start = self.start_at(offset)?.ok()?;
        let end = self.end_at(offset)?.ok()?;
        Some((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn deserializes_feed_shape() {
        let json = r##"{
            "id": "uid-1",
            "calendarId": "https://example.com/a.ics",
            "title": "Standup",
            "start": "2024-03-01T09:00:00.000Z",
            "end": "2024-03-01T09:15:00.000Z",
            "allDay": false,
            "color": "#F43F5E",
            "calendarTitle": "Work",
            "description": null
        }"##;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.calendar_source_id, "https://example.com/a.ics");
        assert_eq!(event.display_color(), "#F43F5E");
        assert_eq!(event.calendar_title.as_deref(), Some("Work"));
        assert!(event.description.is_none());
        assert!(!event.all_day);
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{"id": "x", "calendarSourceId": "cal"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(event.start.is_none());
        assert!(event.end.is_none());
        assert!(!event.all_day);
        assert_eq!(event.display_color(), DEFAULT_EVENT_COLOR);
        assert_eq!(event.display_title(), UNTITLED);
    }

    #[test]
    fn serializes_camel_case() {
        let event = Event::new("a", "cal", "T", "2024-01-01", "2024-01-02").with_all_day(true);
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["calendarSourceId"], "cal");
        assert_eq!(value["allDay"], true);
        assert!(value.get("color").is_none());
    }

    #[test]
    fn bounds_missing_end() {
        let mut event = Event::new("a", "cal", "T", "2024-01-01", "2024-01-02");
        event.end = None;
        assert!(event.end_at(utc()).is_none());
        assert!(event.bounds_at(utc()).is_none());
    }

    #[test]
    fn bounds_malformed_start() {
        let event = Event::new("a", "cal", "T", "garbage", "2024-01-02");
        assert!(matches!(event.start_at(utc()), Some(Err(_))));
        assert!(event.bounds_at(utc()).is_none());
    }

    #[test]
    fn bounds_ok() {
        let event = Event::new("a", "cal", "T", "2024-01-01T10:00:00Z", "2024-01-01T11:00:00Z");
        let (s, e) = event.bounds_at(utc()).unwrap();
        assert!(s < e);
    }
}
