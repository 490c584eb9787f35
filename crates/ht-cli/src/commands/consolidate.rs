//! `ht consolidate`: offline consolidation of a saved summaries response.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use ht_core::SummaryResponse;

use crate::Config;
use crate::commands::report::{PresentOptions, present};

/// Arguments for `ht consolidate`.
#[derive(Debug, Args)]
pub struct ConsolidateArgs {
    /// Saved response from `users/current/summaries`, or `-` for stdin.
    pub input: PathBuf,

    /// Output the consolidated response as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run<W: Write>(writer: &mut W, args: &ConsolidateArgs, config: &Config) -> Result<()> {
    let content = read_input(&args.input)?;
    let raw: SummaryResponse =
        serde_json::from_str(&content).context("failed to parse summaries response")?;
    tracing::debug!(
        records = raw.data.as_ref().map_or(0, Vec::len),
        "loaded saved summaries"
    );

    present(writer, &raw, &PresentOptions::from_config(config, args.json))
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read summaries from stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
