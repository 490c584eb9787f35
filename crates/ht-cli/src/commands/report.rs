//! Text and JSON rendering of consolidated summaries.
//!
//! Every command that shows activity goes through [`present`]: the raw response
//! is consolidated first, then written either as a breakdown report or as the
//! consolidated JSON document.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use ht_core::duration::DurationParts;
use ht_core::{
    AggregateError, AggregateOptions, BreakdownEntry, Dimension, SummaryRange, SummaryRecord,
    SummaryResponse, aggregate_with,
};

use crate::Config;

const NAME_WIDTH: usize = 28;

/// How a response is rendered.
#[derive(Debug, Clone)]
pub struct PresentOptions {
    /// Emit the consolidated response as pretty JSON.
    pub json: bool,
    /// Maximum entries shown per breakdown.
    pub max_items: usize,
    pub aggregate: AggregateOptions,
}

impl PresentOptions {
    pub const fn from_config(config: &Config, json: bool) -> Self {
        Self {
            json,
            max_items: config.max_items,
            aggregate: config.aggregate_options(),
        }
    }
}

/// Consolidates `raw`, falling back to the unmerged response when a record is malformed.
pub fn consolidate(raw: &SummaryResponse, options: &AggregateOptions) -> SummaryResponse {
    match aggregate_with(raw, options) {
        Ok(consolidated) => consolidated,
        Err(AggregateError::MalformedRecord { index, field }) => {
            tracing::warn!(
                index,
                field,
                "cannot consolidate summaries, showing the first record only"
            );
            raw.clone()
        }
    }
}

/// Consolidates and writes a raw response.
pub fn present<W: Write>(
    writer: &mut W,
    raw: &SummaryResponse,
    options: &PresentOptions,
) -> Result<()> {
    let consolidated = consolidate(raw, &options.aggregate);
    write_response(writer, &consolidated, options)
}

/// Writes an already consolidated response.
pub fn write_response<W: Write>(
    writer: &mut W,
    response: &SummaryResponse,
    options: &PresentOptions,
) -> Result<()> {
    if options.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(response)?)?;
        return Ok(());
    }

    match response.primary_record() {
        Some(record) => write!(writer, "{}", format_report(record, options.max_items))?,
        None => writeln!(writer, "No coding activity found.")?,
    }
    Ok(())
}

// ========== Progress Bar ==========

/// Generates a 10-character bar for a percentage.
/// Non-zero shares under 5% get a single block for visibility.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn progress_bar(percent: f64) -> String {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let filled = if ratio < 0.05 && percent > 0.0 {
        1
    } else {
        (ratio * 10.0).round() as usize
    };

    let empty = 10 - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

// ========== Report Generation ==========

/// Formats one consolidated record as a human-readable report.
pub fn format_report(record: &SummaryRecord, max_items: usize) -> String {
    let mut output = String::new();

    writeln!(output, "{}", format_header(record.range.as_ref())).unwrap();
    writeln!(output).unwrap();

    let total_text = record.grand_total.as_ref().map_or_else(
        || DurationParts::from_seconds(0.0).text(),
        |total| {
            total
                .text
                .clone()
                .unwrap_or_else(|| DurationParts::from_seconds(total.total_seconds).text())
        },
    );
    writeln!(output, "Total coding time: {total_text}").unwrap();

    for dimension in Dimension::PRIMARY {
        writeln!(output).unwrap();
        format_breakdown(&mut output, dimension, record.dimension(dimension), max_items);
    }

    output
}

fn format_header(range: Option<&SummaryRange>) -> String {
    let mut header = "CODING ACTIVITY".to_string();
    let Some(range) = range else {
        return header;
    };

    let start = range.start.map(|dt| dt.date_naive());
    let end = range.end.map(|dt| dt.date_naive());
    match (start, end) {
        (Some(start), Some(end)) if start == end => write!(header, ": {start}").unwrap(),
        (Some(start), Some(end)) => write!(header, ": {start} to {end}").unwrap(),
        (Some(date), None) | (None, Some(date)) => write!(header, ": {date}").unwrap(),
        (None, None) => {}
    }
    if let Some(timezone) = range.timezone.as_deref().filter(|tz| !tz.is_empty()) {
        write!(header, " ({timezone})").unwrap();
    }
    header
}

fn format_breakdown(
    output: &mut String,
    dimension: Dimension,
    entries: &[BreakdownEntry],
    max_items: usize,
) {
    let heading = dimension.label().to_uppercase();
    writeln!(output, "{heading}").unwrap();
    writeln!(output, "{}", "─".repeat(heading.chars().count())).unwrap();

    if entries.is_empty() {
        writeln!(output, "(none)").unwrap();
        return;
    }

    for entry in entries.iter().take(max_items) {
        let name = truncate_name(&entry.name);
        let hours = format!("{:.2}h", entry.total_seconds / 3600.0);
        let percent = entry
            .percent
            .map_or_else(|| "-".to_string(), |p| format!("{p:.2}%"));
        let bar = progress_bar(entry.percent.unwrap_or(0.0));
        writeln!(output, "{name:<NAME_WIDTH$} {hours:>9} {percent:>8}  {bar}").unwrap();
    }

    let remaining = entries.len().saturating_sub(max_items);
    if remaining > 0 {
        writeln!(output, "... and {remaining} more").unwrap();
    }
}

fn truncate_name(name: &str) -> String {
    if name.chars().count() <= NAME_WIDTH {
        return name.to_string();
    }
    let mut short: String = name.chars().take(NAME_WIDTH - 1).collect();
    short.push('…');
    short
}
