//! `ht summary`: fetch, consolidate and display.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use ht_api::SummaryFilters;
use ht_core::RangePreset;

use crate::Config;
use crate::commands::report::{PresentOptions, present};

/// Query filters shared by commands that fetch summaries.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Range preset (today, yesterday, week, month, last_7_days, all_time, ...).
    #[arg(long)]
    pub range: Option<RangePreset>,

    /// First day to include (YYYY-MM-DD).
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last day to include (YYYY-MM-DD).
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Only count activity in this project.
    #[arg(long)]
    pub project: Option<String>,

    /// Only count activity in this language.
    #[arg(long)]
    pub language: Option<String>,
}

impl FilterArgs {
    /// Converts to API filters, selecting `default_range` when no time selection was given.
    pub fn to_filters(&self, default_range: &RangePreset) -> SummaryFilters {
        let mut filters = SummaryFilters {
            range: self.range.clone(),
            start: self.start,
            end: self.end,
            project: self.project.clone(),
            language: self.language.clone(),
        };
        if !filters.has_time_selection() {
            filters.range = Some(default_range.clone());
        }
        filters
    }
}

/// Arguments for `ht summary`.
#[derive(Debug, Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Output the consolidated response as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run<W: Write>(writer: &mut W, args: &SummaryArgs, config: &Config) -> Result<()> {
    let filters = args.filters.to_filters(&config.default_range);
    let client = config.client()?;

    let runtime = tokio::runtime::Runtime::new().context("failed to initialize tokio runtime")?;
    let raw = runtime
        .block_on(client.summaries(&filters))
        .context("Error fetching data from the API")?;

    present(writer, &raw, &PresentOptions::from_config(config, args.json))
}
