use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use panorama_events::{CalendarSource, DEFAULT_TTL_HOURS};
use serde::Deserialize;
use tracing::debug;

/// Config file read when no `--config` is given.
pub const DEFAULT_CONFIG_PATH: &str = "panorama.toml";

/// Top-level Panorama configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PanoramaConfig {
    /// Year to lay out; the current year when unset.
    #[serde(default)]
    pub year: Option<i32>,

    /// View settings.
    #[serde(default)]
    pub view: ViewToml,

    /// Event input settings.
    #[serde(default)]
    pub events: EventsToml,

    /// Cache settings.
    #[serde(default)]
    pub cache: CacheToml,

    /// Subscribed calendars.
    #[serde(default)]
    pub calendars: Vec<CalendarSource>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewToml {
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default)]
    pub week_start: u8,
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
}

impl Default for ViewToml {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            week_start: 0,
            utc_offset: default_utc_offset(),
        }
    }
}

fn default_mode() -> String {
    "date-grid".to_string()
}
fn default_utc_offset() -> String {
    "+00:00".to_string()
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventsToml {
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub selected: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheToml {
    #[serde(default = "default_cache_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: i64,
}

impl Default for CacheToml {
    fn default() -> Self {
        Self {
            dir: default_cache_dir(),
            ttl_hours: default_ttl_hours(),
        }
    }
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from(".panorama-cache")
}
fn default_ttl_hours() -> i64 {
    DEFAULT_TTL_HOURS
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
/// read if present and defaults are used otherwise.
pub fn load(path: Option<&Path>) -> Result<PanoramaConfig> {
    let path = match path {
        Some(p) => p,
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_PATH);
            if !fallback.exists() {
                debug!("no config file, using defaults");
                return Ok(PanoramaConfig::default());
            }
            fallback
        }
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: PanoramaConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    debug!(path = %path.display(), n_calendars = config.calendars.len(), "config loaded");
    Ok(config)
}
