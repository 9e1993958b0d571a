use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Panorama year-long calendar layout.
#[derive(Parser)]
#[command(
    name = "panorama",
    version,
    about = "Lay out a year of calendar events on linear grids"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the row structure of a year.
    Rows(RowsArgs),
    /// Lay out events over a year.
    Layout(LayoutArgs),
    /// Manage the event cache.
    Cache {
        #[command(subcommand)]
        action: CacheCommand,
    },
    /// Manage calendar sources.
    Calendar {
        #[command(subcommand)]
        action: CalendarCommand,
    },
}

/// Row structure families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RowsMode {
    /// Twelve calendar months.
    Month,
    /// Cycles and reset weeks over the ISO week-year.
    Cyclical,
}

/// Output formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable text with lane bars.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Arguments for the `rows` subcommand.
#[derive(clap::Args)]
pub struct RowsArgs {
    /// Year to print; defaults to the current year.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Row structure.
    #[arg(short, long, value_enum, default_value_t = RowsMode::Month)]
    pub mode: RowsMode,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `layout` subcommand.
#[derive(clap::Args)]
pub struct LayoutArgs {
    /// Path to TOML configuration file (default: panorama.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the year from config.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Override the view mode (date-grid, fixed-week, cyclical).
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Override the week start (0 = Sunday .. 6 = Saturday).
    #[arg(long = "week-start")]
    pub week_start: Option<u8>,

    /// Override the events JSON path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write output here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Skip the event cache for both reading and writing.
    #[arg(long = "no-cache")]
    pub no_cache: bool,
}

/// `cache` actions.
#[derive(Subcommand)]
pub enum CacheCommand {
    /// Remove cached events.
    Clear(CacheClearArgs),
}

/// Arguments for `cache clear`.
#[derive(clap::Args)]
pub struct CacheClearArgs {
    /// Path to TOML configuration file (default: panorama.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only clear this year for the selected sources.
    #[arg(short, long)]
    pub year: Option<i32>,
}

/// `calendar` actions.
#[derive(Subcommand)]
pub enum CalendarCommand {
    /// Create a source entry and print it as TOML.
    Add(CalendarAddArgs),
}

/// Arguments for `calendar add`.
#[derive(clap::Args)]
pub struct CalendarAddArgs {
    /// Feed URL.
    #[arg(short, long)]
    pub url: String,

    /// Display title.
    #[arg(short, long)]
    pub title: Option<String>,

    /// Path to TOML configuration file (default: panorama.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// RNG seed for the colour pick.
    #[arg(short, long)]
    pub seed: Option<u64>,
}
