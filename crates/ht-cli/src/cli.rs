//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::consolidate::ConsolidateArgs;
use crate::commands::summary::SummaryArgs;

/// Hackatime coding-activity client.
///
/// Fetches WakaTime-compatible summaries, consolidates multi-day responses
/// into one report and shows the breakdown by language, category, editor
/// and project.
#[derive(Debug, Parser)]
#[command(name = "ht", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch and display consolidated coding activity.
    Summary(SummaryArgs),

    /// Consolidate a saved summaries response.
    Consolidate(ConsolidateArgs),

    /// Interactive dashboard reading filter commands from stdin.
    Dashboard,

    /// Show configuration and credential status.
    Status,
}
