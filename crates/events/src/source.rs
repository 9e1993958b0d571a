//! Calendar feed sources.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::EventsError;

/// Default palette used when a new source is registered.
pub const CALENDAR_COLORS: [&str; 6] = [
    "#0EA5E9", // sky
    "#F43F5E", // rose
    "#8B5CF6", // violet
    "#10B981", // emerald
    "#F59E0B", // amber
    "#EC4899", // pink
];

/// Title used when none is given.
pub const DEFAULT_SOURCE_TITLE: &str = "New Calendar";

/// A subscribed iCalendar feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarSource {
    /// Identifier; the feed URL.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Feed URL.
    pub url: String,
    /// Colour applied to this source's events.
    pub color: String,
    /// Whether this was the first source registered.
    #[serde(default)]
    pub primary: bool,
}

/// Builds a new source for `url`.
///
/// The id is the URL itself, the colour is drawn from [`CALENDAR_COLORS`],
/// and the source is primary when `existing` is empty.
///
/// # Errors
///
/// Returns [`EventsError::DuplicateSource`] if a source with the same URL is
/// already registered.
pub fn create_source<R: Rng + ?Sized>(
    url: &str,
    existing: &[CalendarSource],
    title: Option<&str>,
    rng: &mut R,
) -> Result<CalendarSource, EventsError> {
    if existing.iter().any(|c| c.url == url) {
        return Err(EventsError::DuplicateSource {
            url: url.to_string(),
        });
    }
    let title = title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_SOURCE_TITLE);
    let color = CALENDAR_COLORS[rng.random_range(0..CALENDAR_COLORS.len())];

    Ok(CalendarSource {
        id: url.to_string(),
        title: title.to_string(),
        url: url.to_string(),
        color: color.to_string(),
        primary: existing.is_empty(),
    })
}
