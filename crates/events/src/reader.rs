//! Reading pre-parsed events from JSON files.

use std::path::Path;

use tracing::info;

use crate::error::EventsError;
use crate::event::Event;

/// Reads a JSON array of events from `path`.
///
/// # Errors
///
/// Returns [`EventsError::Io`] if the file cannot be read and
/// [`EventsError::Json`] if it is not an array of events.
pub fn read_events(path: &Path) -> Result<Vec<Event>, EventsError> {
    let raw = std::fs::read_to_string(path).map_err(|e| EventsError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let events: Vec<Event> = serde_json::from_str(&raw)?;
    info!(path = %path.display(), n_events = events.len(), "events loaded");
    Ok(events)
}
