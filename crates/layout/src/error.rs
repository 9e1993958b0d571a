//! Error types for panorama-layout.

use panorama_calendar::CalendarError;

/// Error type for all fallible operations in the panorama-layout crate.
///
/// Bad event data never produces an error; only structural misuse does.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// Returned when a view-mode name is not one of the three layouts.
    #[error("unknown view mode: {name:?} (expected date-grid, fixed-week or cyclical)")]
    UnknownViewMode {
        /// The rejected name.
        name: String,
    },

    /// Wraps an error from the panorama-calendar crate.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_unknown_view_mode() {
        let err = LayoutError::UnknownViewMode {
            name: "weekly".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown view mode: \"weekly\" (expected date-grid, fixed-week or cyclical)"
        );
    }

    #[test]
    fn error_from_calendar() {
        let err: LayoutError = CalendarError::InvalidWeekStart { value: 9 }.into();
        assert_eq!(
            err.to_string(),
            "invalid week start: 9 (must be 0..=6, 0 = Sunday)"
        );
    }
}
