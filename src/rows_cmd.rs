//! Rows command: print the row structure of a year.

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use tracing::info;

use panorama_calendar::{cyclical_rows, month_rows};

use crate::cli::{RowsArgs, RowsMode};
use crate::convert;
use crate::render;

/// Print month or cyclical rows for one year.
pub fn run(args: RowsArgs) -> Result<()> {
    let year = convert::resolve_year(args.year, None, Local::now().year());
    let rows = match args.mode {
        RowsMode::Month => month_rows(year),
        RowsMode::Cyclical => cyclical_rows(year),
    }
    .with_context(|| format!("failed to build rows for {year}"))?;
    info!(year, mode = ?args.mode, n_rows = rows.len(), "rows built");

    let out = if args.json {
        serde_json::to_string_pretty(&rows).context("failed to serialize rows")?
    } else {
        render::rows_text(&rows)?
    };
    print!("{out}");
    if args.json {
        println!();
    }
    Ok(())
}
