//! Error types for panorama-events.

use std::path::PathBuf;

/// Error type for all fallible operations in the panorama-events crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EventsError {
    /// Returned when a file cannot be read or written.
    #[error("i/o error on {}: {reason}", path.display())]
    Io {
        /// Path that was being accessed.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when event or cache JSON cannot be parsed or produced.
    #[error("json error: {reason}")]
    Json {
        /// Description of the underlying serde failure.
        reason: String,
    },

    /// Returned when an instant string cannot be interpreted as a date or time.
    #[error("invalid time: {value:?}")]
    InvalidTime {
        /// The raw value that failed to parse.
        value: String,
    },

    /// Returned when adding a calendar source whose URL is already registered.
    #[error("calendar already exists: {url}")]
    DuplicateSource {
        /// The duplicated feed URL.
        url: String,
    },

    /// Returned when a cache key cannot be mapped to storage.
    #[error("invalid cache key: {key:?}")]
    InvalidCacheKey {
        /// The rejected key.
        key: String,
    },
}

impl From<serde_json::Error> for EventsError {
    fn from(e: serde_json::Error) -> Self {
        EventsError::Json {
            reason: e.to_string(),
        }
    }
}
