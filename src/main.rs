mod cache_cmd;
mod calendar_cmd;
mod cli;
mod config;
mod convert;
mod layout_cmd;
mod logging;
mod render;
mod rows_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{CacheCommand, CalendarCommand, Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Rows(args) => rows_cmd::run(args),
        Command::Layout(args) => layout_cmd::run(args),
        Command::Cache {
            action: CacheCommand::Clear(args),
        } => cache_cmd::clear(args),
        Command::Calendar {
            action: CalendarCommand::Add(args),
        } => calendar_cmd::add(args),
    }
}
