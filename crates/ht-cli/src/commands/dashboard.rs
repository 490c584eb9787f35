//! `ht dashboard`: interactive view driven by line commands on stdin.
//!
//! The dashboard fetches with the default range as soon as it opens. Each
//! `apply` starts a new fetch in the background; the input loop keeps
//! accepting commands while requests are in flight, and a response is only
//! rendered if no newer request was started after it.

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use ht_api::{ApiError, SummaryFilters, SummarySource};
use ht_core::{RangePreset, SummaryResponse};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::Config;
use crate::commands::report::{PresentOptions, consolidate, write_response};
use crate::dashboard::{DASHBOARD_VIEW, DashboardRegistry, DashboardSession, RequestTicket};

const HELP: &str = "\
Commands:
  apply [range=R] [start=YYYY-MM-DD] [end=YYYY-MM-DD] [project=P] [language=L]
                 fetch with new filters; quote values with spaces: project=\"My App\"
  show           print the current summary again
  help           show this message
  close          close the dashboard";

/// A line of dashboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardCommand {
    Apply(SummaryFilters),
    Show,
    Help,
    Close,
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<DashboardCommand>> {
    let words = split_words(line)?;
    let Some((verb, rest)) = words.split_first() else {
        return Ok(None);
    };

    let command = match verb.as_str() {
        "apply" => DashboardCommand::Apply(parse_filters(rest.iter().map(String::as_str))?),
        "show" => DashboardCommand::Show,
        "help" => DashboardCommand::Help,
        "close" | "quit" | "exit" => DashboardCommand::Close,
        other => bail!("unknown command `{other}` (try `help`)"),
    };
    Ok(Some(command))
}

/// Splits on whitespace; double quotes group a run containing spaces and are removed.
fn split_words(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current: Option<String> = None;
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                current.get_or_insert_with(String::new);
            }
            ch if ch.is_whitespace() && !quoted => words.extend(current.take()),
            ch => current.get_or_insert_with(String::new).push(ch),
        }
    }
    if quoted {
        bail!("unterminated quote in `{line}`");
    }
    words.extend(current);
    Ok(words)
}

fn parse_filters<'a>(pairs: impl Iterator<Item = &'a str>) -> Result<SummaryFilters> {
    let mut filters = SummaryFilters::default();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("expected key=value, got `{pair}`");
        };
        match key {
            "range" => filters.range = Some(RangePreset::from(value.to_string())),
            "start" => filters.start = Some(parse_date(value)?),
            "end" => filters.end = Some(parse_date(value)?),
            "project" => filters.project = Some(value.to_string()),
            "language" => filters.language = Some(value.to_string()),
            other => bail!("unknown filter `{other}`"),
        }
    }
    Ok(filters)
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("invalid date `{value}`, expected YYYY-MM-DD"))
}

pub fn run<W: Write>(writer: &mut W, config: &Config) -> Result<()> {
    let client = Arc::new(config.client()?);
    let options = PresentOptions::from_config(config, false);

    let runtime = tokio::runtime::Runtime::new().context("failed to initialize tokio runtime")?;
    runtime.block_on(drive(
        writer,
        client,
        BufReader::new(tokio::io::stdin()),
        &options,
        &config.default_range,
    ))
}

struct FetchOutcome {
    ticket: RequestTicket,
    result: Result<SummaryResponse, ApiError>,
}

/// Runs the dashboard until `close` or end of input.
///
/// After input ends, responses still in flight are awaited so the last
/// requested summary is shown.
pub async fn drive<S, R, W>(
    writer: &mut W,
    source: Arc<S>,
    input: R,
    options: &PresentOptions,
    default_range: &RangePreset,
) -> Result<()>
where
    S: SummarySource + Send + Sync + 'static,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut registry = DashboardRegistry::default();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut lines = input.lines();
    let mut input_done = false;
    let mut in_flight = 0_usize;

    writeln!(writer, "Hackatime dashboard. Type `help` for commands.")?;
    let (session, _) = registry.open_or_reveal(DASHBOARD_VIEW);
    start_fetch(session, SummaryFilters::for_range(default_range.clone()), &source, &tx);
    in_flight += 1;

    loop {
        if input_done && in_flight == 0 {
            break;
        }

        tokio::select! {
            line = lines.next_line(), if !input_done => {
                let Some(line) = line.context("failed to read dashboard input")? else {
                    input_done = true;
                    continue;
                };
                let command = match parse_command(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(err) => {
                        writeln!(writer, "{err}")?;
                        continue;
                    }
                };

                match command {
                    DashboardCommand::Apply(mut filters) => {
                        if !filters.has_time_selection() {
                            filters.range = Some(default_range.clone());
                        }
                        let (session, _) = registry.open_or_reveal(DASHBOARD_VIEW);
                        start_fetch(session, filters, &source, &tx);
                        in_flight += 1;
                    }
                    DashboardCommand::Show => {
                        let (session, presence) = registry.open_or_reveal(DASHBOARD_VIEW);
                        tracing::debug!(?presence, "showing dashboard");
                        match session.content() {
                            Some(content) => write_response(writer, content, options)?,
                            None => writeln!(writer, "No data loaded yet.")?,
                        }
                    }
                    DashboardCommand::Help => writeln!(writer, "{HELP}")?,
                    DashboardCommand::Close => {
                        registry.close(DASHBOARD_VIEW);
                        writeln!(writer, "Dashboard closed.")?;
                        break;
                    }
                }
            }
            Some(outcome) = rx.recv(), if in_flight > 0 => {
                in_flight -= 1;
                let Some(session) = registry.get_mut(DASHBOARD_VIEW) else {
                    continue;
                };
                if !session.is_current(outcome.ticket) {
                    tracing::debug!("discarding superseded summaries");
                    continue;
                }
                match outcome.result {
                    Ok(raw) => {
                        let consolidated = consolidate(&raw, &options.aggregate);
                        if let Some(content) = session.complete(outcome.ticket, consolidated) {
                            write_response(writer, content, options)?;
                        }
                    }
                    Err(err) => {
                        tracing::warn!(%err, "dashboard fetch failed");
                        writeln!(writer, "Error fetching data from the API: {err}")?;
                    }
                }
            }
        }
    }

    Ok(())
}

fn start_fetch<S>(
    session: &mut DashboardSession,
    filters: SummaryFilters,
    source: &Arc<S>,
    tx: &mpsc::UnboundedSender<FetchOutcome>,
) where
    S: SummarySource + Send + Sync + 'static,
{
    tracing::debug!(?filters, session = %session.id(), "starting fetch");
    let ticket = session.begin_request(filters.clone());
    let source = Arc::clone(source);
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = source.fetch(&filters).await;
        // The receiver is gone once the dashboard has closed.
        let _ = tx.send(FetchOutcome { ticket, result });
    });
}
