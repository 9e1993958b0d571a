//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};
use chrono::{FixedOffset, TimeDelta};
use tracing::warn;

use panorama_calendar::WeekStart;
use panorama_layout::{Geometry, ViewMode};

use crate::config::{CacheToml, PanoramaConfig, ViewToml};

/// Years the row generators are checked against.
pub const SUPPORTED_YEARS: std::ops::RangeInclusive<i32> = 1970..=2100;

/// Parses a view-mode name.
pub fn parse_view_mode(s: &str) -> Result<ViewMode> {
    s.parse::<ViewMode>()
        .with_context(|| format!("invalid [view].mode {s:?}"))
}

/// Parses a UTC offset such as `+02:00` or `-05:30`.
pub fn parse_utc_offset(s: &str) -> Result<FixedOffset> {
    match s.trim().parse::<FixedOffset>() {
        Ok(offset) => Ok(offset),
        Err(_) => bail!("invalid UTC offset: {s:?} (expected e.g. +02:00)"),
    }
}

/// Builds the [`Geometry`] from the view table and CLI overrides.
pub fn build_geometry(
    view: &ViewToml,
    mode: Option<&str>,
    week_start: Option<u8>,
) -> Result<Geometry> {
    let mode = parse_view_mode(mode.unwrap_or(&view.mode))?;
    let week_start = WeekStart::new(week_start.unwrap_or(view.week_start))?;
    Ok(Geometry::new(mode, week_start))
}

/// Converts the configured TTL to a [`TimeDelta`].
pub fn build_ttl(cache: &CacheToml) -> Result<TimeDelta> {
    if cache.ttl_hours <= 0 {
        bail!(
            "[cache].ttl_hours must be positive, got {}",
            cache.ttl_hours
        );
    }
    TimeDelta::try_hours(cache.ttl_hours)
        .with_context(|| format!("[cache].ttl_hours too large: {}", cache.ttl_hours))
}

/// Returns the source ids to show.
///
/// An explicit selection wins; otherwise every configured calendar is
/// shown. Empty means no source filter.
pub fn selected_sources(config: &PanoramaConfig) -> Vec<String> {
    let mut ids = if config.events.selected.is_empty() {
        config.calendars.iter().map(|c| c.id.clone()).collect()
    } else {
        config.events.selected.clone()
    };
    ids.sort();
    ids.dedup();
    ids
}

/// Resolves the year to use, warning when it lies outside
/// [`SUPPORTED_YEARS`].
pub fn resolve_year(cli: Option<i32>, config: Option<i32>, current: i32) -> i32 {
    let year = cli.or(config).unwrap_or(current);
    if !SUPPORTED_YEARS.contains(&year) {
        warn!(
            year,
            "year is outside 1970..=2100; row structure has not been checked there"
        );
    }
    year
}

#[cfg(test)]
mod tests {
    use super::*;
    use panorama_events::CalendarSource;

    fn source(id: &str) -> CalendarSource {
        CalendarSource {
            id: id.to_string(),
            title: "t".to_string(),
            url: id.to_string(),
            color: "#0EA5E9".to_string(),
            primary: false,
        }
    }

    #[test]
    fn parse_view_mode_valid() {
        assert_eq!(parse_view_mode("fixed-week").unwrap(), ViewMode::FixedWeek);
    }

    #[test]
    fn parse_view_mode_invalid() {
        let err = parse_view_mode("agenda").unwrap_err();
        assert!(format!("{err:#}").contains("unknown view mode"));
    }

    #[test]
    fn parse_utc_offsets() {
        assert_eq!(parse_utc_offset("+02:00").unwrap().local_minus_utc(), 7200);
        assert_eq!(parse_utc_offset("-05:30").unwrap().local_minus_utc(), -19800);
        assert!(parse_utc_offset("CET").is_err());
    }

    #[test]
    fn geometry_overrides() {
        let view = ViewToml::default();
        assert_eq!(build_geometry(&view, None, None).unwrap(), Geometry::DateGrid);
        assert_eq!(
            build_geometry(&view, Some("fixed-week"), Some(1)).unwrap(),
            Geometry::FixedWeek {
                week_start: WeekStart::MONDAY
            }
        );
        assert!(build_geometry(&view, None, Some(7)).is_err());
    }

    #[test]
    fn ttl_must_be_positive() {
        let mut cache = CacheToml::default();
        assert_eq!(build_ttl(&cache).unwrap(), TimeDelta::hours(6));
        cache.ttl_hours = 0;
        assert!(build_ttl(&cache).is_err());
    }

    #[test]
    fn selection_prefers_explicit_list() {
        let mut config = PanoramaConfig::default();
        assert!(selected_sources(&config).is_empty());

        config.calendars = vec![source("b"), source("a")];
        assert_eq!(selected_sources(&config), vec!["a", "b"]);

        config.events.selected = vec!["z".to_string(), "z".to_string()];
        assert_eq!(selected_sources(&config), vec!["z"]);
    }

    #[test]
    fn year_precedence() {
        assert_eq!(resolve_year(Some(2020), Some(2021), 2026), 2020);
        assert_eq!(resolve_year(None, Some(2021), 2026), 2021);
        assert_eq!(resolve_year(None, None, 2026), 2026);
        assert_eq!(resolve_year(Some(1900), None, 2026), 1900);
    }
}
