//! Layout command: load events, lay them out over a year and write the result.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, FixedOffset, Local, Utc};
use tracing::{info, info_span, warn};

use panorama_events::{Event, FileCache, YearCache, events_in_year, read_events, select_sources};
use panorama_layout::layout_rows;

use crate::cli::{Format, LayoutArgs};
use crate::config::{self, PanoramaConfig};
use crate::convert;
use crate::render::{self, LayoutReport};

/// Run the layout pipeline.
pub fn run(args: LayoutArgs) -> Result<()> {
    let _cmd = info_span!("layout").entered();

    // 1. Load project TOML and apply overrides
    let config = config::load(args.config.as_deref())?;
    let year = convert::resolve_year(args.year, config.year, Local::now().year());
    let geometry =
        convert::build_geometry(&config.view, args.mode.as_deref(), args.week_start)?;
    let offset = convert::parse_utc_offset(&config.view.utc_offset)?;
    let selected = convert::selected_sources(&config);
    info!(year, mode = %geometry.mode(), n_selected = selected.len(), "layout settings");

    // 2. Events, from the cache when fresh
    let input = args.input.as_deref().or(config.events.input.as_deref());
    let events = year_events(
        &config,
        input,
        year,
        &selected,
        offset,
        Utc::now(),
        !args.no_cache,
    )?;
    info!(n_events = events.len(), "events ready");

    // 3. Rows and segments
    let rows = geometry.rows(year)?;
    let columns = geometry.columns(year)?;
    let layouts = layout_rows(&events, &rows, geometry, offset);

    // 4. Render
    let report = LayoutReport::new(year, geometry, columns, &layouts);
    let out = match args.format {
        Format::Text => render::layout_text(&report, geometry)?,
        Format::Json => {
            let mut json =
                serde_json::to_string_pretty(&report).context("failed to serialize layout")?;
            json.push('\n');
            json
        }
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, out)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "layout written");
        }
        None => print!("{out}"),
    }
    Ok(())
}

/// Seconds behind UTC of the westmost civil offset.
const WESTMOST_SECS: i32 = 12 * 3600;
/// Seconds ahead of UTC of the eastmost civil offset.
const EASTMOST_SECS: i32 = 14 * 3600;

/// Returns `true` when the event starts or ends in `year` at some civil
/// UTC offset.
fn touches_year(event: &Event, year: i32) -> bool {
    [
        FixedOffset::west_opt(WESTMOST_SECS),
        FixedOffset::east_opt(EASTMOST_SECS),
    ]
    .into_iter()
    .flatten()
    .any(|offset| {
        event
            .bounds_at(offset)
            .is_some_and(|(start, end)| start.year() == year || end.year() == year)
    })
}

/// Returns the events of `year` at `offset`, through the cache when
/// `use_cache` is set.
fn year_events(
    config: &PanoramaConfig,
    input: Option<&Path>,
    year: i32,
    selected: &[String],
    offset: FixedOffset,
    now: DateTime<Utc>,
    use_cache: bool,
) -> Result<Vec<Event>> {
    let events = if use_cache {
        cached_events(config, input, year, selected, now)?
    } else {
        load_events(input, year, selected)?
    };
    Ok(events_in_year(&events, year, offset))
}

/// Reads and source-filters events from `input`, keeping those that touch
/// `year` at any UTC offset.
fn load_events(input: Option<&Path>, year: i32, selected: &[String]) -> Result<Vec<Event>> {
    let Some(input) = input else {
        warn!("no events input: set [events].input in config or use --input");
        return Ok(Vec::new());
    };
    let events = read_events(input)
        .with_context(|| format!("failed to read events: {}", input.display()))?;
    let events = if selected.is_empty() {
        events
    } else {
        select_sources(&events, selected)
    };
    Ok(events.into_iter().filter(|e| touches_year(e, year)).collect())
}

/// Returns cached events for `year` if fresh, otherwise loads and caches them.
///
/// Cache failures are logged and never fail the run.
fn cached_events(
    config: &PanoramaConfig,
    input: Option<&Path>,
    year: i32,
    selected: &[String],
    now: DateTime<Utc>,
) -> Result<Vec<Event>> {
    let dir = &config.cache.dir;
    let backend = match FileCache::open(dir) {
        Ok(backend) => backend,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "event cache unavailable");
            return load_events(input, year, selected);
        }
    };
    let mut cache = YearCache::new(backend).with_ttl(convert::build_ttl(&config.cache)?);

    if let Some(events) = cache.load(year, selected, now) {
        info!(year, "using cached events");
        return Ok(events);
    }

    let events = load_events(input, year, selected)?;
    if input.is_some() {
        if let Err(e) = cache.store(year, selected, &events, now) {
            warn!(year, error = %e, "failed to write event cache");
        }
    }
    Ok(events)
}
