//! dirmirror CLI
//!
//! Mirrors a source directory into a destination directory on a fixed
//! interval, logging every change.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::Cli;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    if cli.verbose {
        tracing::debug!("Verbose mode enabled");
    }
    commands::run_mirror(&cli)
}
