//! Calendar command: create source entries for the config file.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

use panorama_events::{CalendarSource, create_source};

use crate::cli::CalendarAddArgs;
use crate::config;

#[derive(Serialize)]
struct CalendarsTable<'a> {
    calendars: Vec<&'a CalendarSource>,
}

/// Build a new source and print it as a `[[calendars]]` TOML entry.
pub fn add(args: CalendarAddArgs) -> Result<()> {
    let config = config::load(args.config.as_deref())?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let source = create_source(
        args.url.trim(),
        &config.calendars,
        args.title.as_deref(),
        &mut rng,
    )?;
    info!(id = %source.id, color = %source.color, "calendar created");

    print!("{}", to_toml(&source)?);
    Ok(())
}

fn to_toml(source: &CalendarSource) -> Result<String> {
    toml::to_string(&CalendarsTable {
        calendars: vec![source],
    })
    .context("failed to serialize calendar entry")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_is_array_of_tables() {
        let source = CalendarSource {
            id: "https://example.com/a.ics".to_string(),
            title: "Work".to_string(),
            url: "https://example.com/a.ics".to_string(),
            color: "#10B981".to_string(),
            primary: true,
        };
        let text = to_toml(&source).unwrap();
        assert!(text.starts_with("[[calendars]]"), "got:\n{text}");
        assert!(text.contains("title = \"Work\""));
        assert!(text.contains("primary = true"));

        let parsed: config::PanoramaConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.calendars, vec![source]);
    }
}
