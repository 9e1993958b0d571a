//! Cache command: remove cached events.

use anyhow::{Context, Result};
use tracing::info;

use panorama_events::{FileCache, YearCache};

use crate::cli::CacheClearArgs;
use crate::config;
use crate::convert;

/// Clear one year for the selected sources, or every cached year.
pub fn clear(args: CacheClearArgs) -> Result<()> {
    let config = config::load(args.config.as_deref())?;
    let dir = &config.cache.dir;
    let backend = FileCache::open(dir)
        .with_context(|| format!("failed to open cache directory: {}", dir.display()))?;
    let mut cache = YearCache::new(backend);

    match args.year {
        Some(year) => {
            let selected = convert::selected_sources(&config);
            cache
                .clear_year(year, &selected)
                .with_context(|| format!("failed to clear cached year {year}"))?;
            info!(year, "cleared cached year");
            println!("cleared cached events for {year}");
        }
        None => {
            let removed = cache.clear_all().context("failed to clear cache")?;
            info!(removed, "cleared cache");
            println!("cleared {removed} cached year(s)");
        }
    }
    Ok(())
}
