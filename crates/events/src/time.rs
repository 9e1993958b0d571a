//! Interpretation of serialized event instants.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::EventsError;

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y%m%dT%H%M%S"];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];

/// Parses an event instant and returns its wall-clock reading at `offset`.
///
/// Accepted forms:
/// - RFC 3339 with a zone (`2024-03-01T09:30:00Z`, `...+02:00`), converted to
///   `offset`;
/// - iCalendar UTC basic form (`20240301T093000Z`), converted to `offset`;
/// - floating date-times without a zone, taken as already local;
/// - bare dates (`2024-03-01`, `20240301`), read as local midnight.
///
/// # Errors
///
/// Returns [`EventsError::InvalidTime`] if none of the forms match.
pub fn parse_instant(value: &str, offset: FixedOffset) -> Result<NaiveDateTime, EventsError> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&offset).naive_local());
    }

    if let Some(basic) = value.strip_suffix('Z') {
        if let Ok(utc) = NaiveDateTime::parse_from_str(basic, "%Y%m%dT%H%M%S") {
            return Ok(utc.and_utc().with_timezone(&offset).naive_local());
        }
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(dt);
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(value, fmt) {
            return Ok(d.and_time(NaiveTime::MIN));
        }
    }

    Err(EventsError::InvalidTime {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn rfc3339_utc() {
        assert_eq!(
            parse_instant("2024-03-01T09:30:00Z", utc()).unwrap(),
            at(2024, 3, 1, 9, 30)
        );
    }

    #[test]
    fn rfc3339_with_millis() {
        assert_eq!(
            parse_instant("2024-03-01T00:00:00.000Z", utc()).unwrap(),
            at(2024, 3, 1, 0, 0)
        );
    }

    #[test]
    fn rfc3339_shifted_to_display_offset() {
        let cet = FixedOffset::east_opt(3600).unwrap();
        // 23:30 UTC is already the next day at UTC+1.
        assert_eq!(
            parse_instant("2024-03-01T23:30:00Z", cet).unwrap(),
            at(2024, 3, 2, 0, 30)
        );
    }

    #[test]
    fn ical_basic_utc() {
        assert_eq!(
            parse_instant("20240301T093000Z", utc()).unwrap(),
            at(2024, 3, 1, 9, 30)
        );
    }

    #[test]
    fn floating_datetime() {
        let cet = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(
            parse_instant("2024-03-01T09:30:00", cet).unwrap(),
            at(2024, 3, 1, 9, 30)
        );
    }

    #[test]
    fn bare_dates_are_midnight() {
        assert_eq!(parse_instant("2024-03-01", utc()).unwrap(), at(2024, 3, 1, 0, 0));
        assert_eq!(parse_instant("20240301", utc()).unwrap(), at(2024, 3, 1, 0, 0));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(
            parse_instant("next tuesday", utc()).unwrap_err(),
            EventsError::InvalidTime {
                value: "next tuesday".to_string()
            }
        );
        assert!(parse_instant("", utc()).is_err());
    }
}
