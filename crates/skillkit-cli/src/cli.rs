//! Command-line arguments
//!
//! All `clap` structures live here so that `main.rs` stays focused on
//! dispatching subcommands.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Keeps skill manifests, AGENTS.md, the README table and plugin manifests in sync.
#[derive(Debug, Parser)]
#[command(name = "skillkit", version, about)]
pub struct Cli {
    /// Repository root (overrides `repository.root` from configuration).
    #[arg(long, global = true)]
    pub root: Option<String>,

    /// Configuration file to load instead of `./skillkit.toml`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level for diagnostics on stderr (overrides `logging.level`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render AGENTS.md and the README skills table.
    Generate {
        /// Compare renders with the files on disk instead of writing them.
        #[arg(long)]
        check: bool,
    },

    /// Validate skill folders.
    Validate {
        /// Skill folders to validate; defaults to every skill under the skills directory.
        dirs: Vec<PathBuf>,
    },

    /// Derive .cursor-plugin/plugin.json from .claude-plugin/plugin.json.
    CursorPlugin {
        /// Compare the render with the file on disk instead of writing it.
        #[arg(long)]
        check: bool,
    },
}
