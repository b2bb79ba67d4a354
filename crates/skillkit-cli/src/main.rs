mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use crate::cli::{Cli, Commands};
use crate::config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    // Load configuration
    let config = Config::load(cli.config.as_deref(), cli.root.as_deref())?;

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    skillkit_logging::init_logging(level)?;

    let layout = config.layout();
    tracing::debug!("Repository layout: {:?}", layout);

    match cli.command {
        Commands::Generate { check } => commands::generate(&layout, check),
        Commands::Validate { dirs } => commands::validate(&layout, &dirs),
        Commands::CursorPlugin { check } => commands::cursor_plugin(&layout, check),
    }
}
