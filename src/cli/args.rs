//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. Linting is the default
//! action; `completions` is the only subcommand.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// tyklint - check Tyk config files for errors and gotchas.
#[derive(Debug, Parser)]
#[command(name = "tyklint")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Gateway config file ("tyk.conf")
    #[arg(short, long, value_name = "FILE")]
    pub gateway: Option<PathBuf>,

    /// Dashboard config file ("tyk_analytics.conf")
    #[arg(short, long, value_name = "FILE")]
    pub dashboard: Option<PathBuf>,

    /// Pump config file ("pump.conf")
    #[arg(short, long, value_name = "FILE")]
    pub pump: Option<PathBuf>,

    /// Check level: fatal, warn, info, or perf (single letters accepted)
    #[arg(short, long, default_value = "warn")]
    pub level: String,

    /// Output format: human or json
    #[arg(long, default_value = "human")]
    pub format: String,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
