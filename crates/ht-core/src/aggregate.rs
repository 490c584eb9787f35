//! Consolidation of multi-record summary responses.
//!
//! A `summaries` response holds one record per time bucket (usually per day).
//! Dashboards want a single record covering the whole span, so this module
//! merges the buckets.
//!
//! # Algorithm Summary
//!
//! 1. Responses with at most one record are returned unchanged
//! 2. The global total is the sum of every record's `grand_total.total_seconds`
//! 3. Each dimension is flattened in record order and folded by exact `name`;
//!    repeated names sum their durations and get a percent against the global total
//! 4. Grand total, range, cumulative total and daily average are rebuilt from the
//!    global total and the first/last records

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Map;
use thiserror::Error;

use crate::duration::{DurationParts, decimal_hours, share_percent, whole_seconds};
use crate::summary::{
    BreakdownEntry, CumulativeTotal, DailyAverage, Dimension, GrandTotal, SummaryRange,
    SummaryRecord, SummaryResponse,
};

/// Aggregation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AggregateError {
    /// A record lacks a structure needed to build the consolidated record.
    #[error("summary record {index} is missing `{field}`")]
    MalformedRecord { index: usize, field: &'static str },
}

/// Which entries get their percent recomputed against the global total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PercentBasis {
    /// Every entry, after the merge pass.
    #[default]
    Global,
    /// Only entries that were merged from several records. Entries seen once keep
    /// the percent of the record they came from.
    MergedOnly,
}

impl PercentBasis {
    /// Configuration name of the basis.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::MergedOnly => "merged-only",
        }
    }
}

impl fmt::Display for PercentBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for consolidation.
#[derive(Debug, Clone, Default)]
pub struct AggregateOptions {
    pub percent_basis: PercentBasis,
}

/// Consolidates a response with the default options.
pub fn aggregate(response: &SummaryResponse) -> Result<SummaryResponse, AggregateError> {
    aggregate_with(response, &AggregateOptions::default())
}

/// Consolidates all records of `response` into a single record.
///
/// The input is never modified. Responses whose `data` is absent or holds at
/// most one record are already consolidated and come back as an identical copy.
pub fn aggregate_with(
    response: &SummaryResponse,
    options: &AggregateOptions,
) -> Result<SummaryResponse, AggregateError> {
    let Some(records @ [first, .., last]) = response.data.as_deref() else {
        return Ok(response.clone());
    };

    for (index, record) in records.iter().enumerate() {
        if record.grand_total.is_none() {
            return Err(AggregateError::MalformedRecord {
                index,
                field: "grand_total",
            });
        }
    }
    let range = merged_range(first, last, records.len() - 1)?;

    let total_seconds: f64 = records
        .iter()
        .filter_map(|record| record.grand_total.as_ref())
        .map(|grand_total| grand_total.total_seconds)
        .sum();

    let mut merged = SummaryRecord {
        grand_total: Some(grand_total(total_seconds)),
        dependencies: Some(Some(Vec::new())),
        range: Some(range),
        ..SummaryRecord::default()
    };
    for dimension in Dimension::ALL {
        *merged.dimension_mut(dimension) =
            merge_dimension(records, dimension, total_seconds, options.percent_basis);
    }

    tracing::debug!(
        records = records.len(),
        total_seconds,
        "consolidated summary records"
    );

    Ok(SummaryResponse {
        data: Some(vec![merged]),
        cumulative_total: Some(cumulative_total(total_seconds)),
        daily_average: Some(daily_average(
            response.daily_average.as_ref(),
            total_seconds,
            records.len(),
        )),
        extra: response.extra.clone(),
    })
}

/// Folds one dimension of every record into a list of uniquely named entries.
///
/// First-seen order is kept. Names match exactly (case-sensitive, no trimming).
fn merge_dimension(
    records: &[SummaryRecord],
    dimension: Dimension,
    total_seconds: f64,
    basis: PercentBasis,
) -> Vec<BreakdownEntry> {
    let mut merged: Vec<BreakdownEntry> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for entry in records.iter().flat_map(|record| record.dimension(dimension)) {
        if let Some(&index) = positions.get(entry.name.as_str()) {
            let existing = &mut merged[index];
            absorb(existing, entry);
            existing.percent = Some(share_percent(existing.total_seconds, total_seconds));
        } else {
            positions.insert(entry.name.as_str(), merged.len());
            merged.push(entry.clone());
        }
    }

    if basis == PercentBasis::Global {
        for entry in &mut merged {
            entry.percent = Some(share_percent(entry.total_seconds, total_seconds));
        }
    }

    merged
}

/// Adds `other`'s duration into `target` and re-derives the redundant encodings.
fn absorb(target: &mut BreakdownEntry, other: &BreakdownEntry) {
    target.total_seconds += other.total_seconds;

    let parts = DurationParts::from_seconds(target.total_seconds);
    target.hours = Some(parts.hours);
    target.minutes = Some(parts.minutes);
    target.seconds = Some(parts.seconds);

    // Only refresh string forms the server actually sent.
    if target.digital.is_some() {
        target.digital = Some(parts.digital());
    }
    if target.text.is_some() {
        target.text = Some(parts.text());
    }
    if target.decimal.is_some() {
        target.decimal = Some(decimal_hours(target.total_seconds));
    }
}

fn merged_range(
    first: &SummaryRecord,
    last: &SummaryRecord,
    last_index: usize,
) -> Result<SummaryRange, AggregateError> {
    let malformed = |index, field| AggregateError::MalformedRecord { index, field };

    let first_range = first.range.as_ref().ok_or_else(|| malformed(0, "range"))?;
    let start = first_range
        .start
        .ok_or_else(|| malformed(0, "range.start"))?;
    let end = last
        .range
        .as_ref()
        .ok_or_else(|| malformed(last_index, "range"))?
        .end
        .ok_or_else(|| malformed(last_index, "range.end"))?;

    Ok(SummaryRange {
        start: Some(start),
        end: Some(end),
        timezone: first_range.timezone.clone(),
        extra: Map::new(),
    })
}

fn grand_total(total_seconds: f64) -> GrandTotal {
    let parts = DurationParts::from_seconds(total_seconds);
    GrandTotal {
        total_seconds,
        hours: Some(parts.hours),
        minutes: Some(parts.minutes),
        digital: Some(parts.digital()),
        text: Some(parts.text()),
        decimal: None,
        extra: Map::new(),
    }
}

fn cumulative_total(total_seconds: f64) -> CumulativeTotal {
    let parts = DurationParts::from_seconds(total_seconds);
    CumulativeTotal {
        decimal: decimal_hours(total_seconds),
        digital: parts.digital(),
        seconds: total_seconds,
        text: parts.text(),
        extra: Map::new(),
    }
}

/// Per-record average. `record_count` is at least 2 here.
#[allow(clippy::cast_precision_loss)]
fn daily_average(
    previous: Option<&DailyAverage>,
    total_seconds: f64,
    record_count: usize,
) -> DailyAverage {
    let seconds = whole_seconds(total_seconds / record_count as f64);
    let text = DurationParts::from_seconds(seconds as f64).text();
    DailyAverage {
        seconds: seconds as f64,
        text: text.clone(),
        text_including_other_language: text,
        extra: previous.map(|average| average.extra.clone()).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::DateTime;
    use serde_json::json;

    fn entry(name: &str, total_seconds: f64, percent: f64) -> BreakdownEntry {
        let parts = DurationParts::from_seconds(total_seconds);
        BreakdownEntry {
            name: name.to_string(),
            total_seconds,
            hours: Some(parts.hours),
            minutes: Some(parts.minutes),
            seconds: Some(parts.seconds),
            percent: Some(percent),
            ..BreakdownEntry::default()
        }
    }

    fn record(day: u32, total_seconds: f64, languages: Vec<BreakdownEntry>) -> SummaryRecord {
        SummaryRecord {
            grand_total: Some(GrandTotal {
                total_seconds,
                ..GrandTotal::default()
            }),
            languages: Some(Some(languages)),
            range: Some(SummaryRange {
                start: Some(
                    DateTime::parse_from_rfc3339(&format!("2025-01-{day:02}T00:00:00Z")).unwrap(),
                ),
                end: Some(
                    DateTime::parse_from_rfc3339(&format!("2025-01-{day:02}T23:59:59Z")).unwrap(),
                ),
                timezone: Some("UTC".to_string()),
                extra: Map::new(),
            }),
            ..SummaryRecord::default()
        }
    }

    fn response(records: Vec<SummaryRecord>) -> SummaryResponse {
        SummaryResponse {
            data: Some(records),
            ..SummaryResponse::default()
        }
    }

    fn only_record(response: &SummaryResponse) -> &SummaryRecord {
        let data = response.data.as_ref().unwrap();
        assert_eq!(data.len(), 1);
        &data[0]
    }

    /// Two days of Go plus a zero-time Rust bucket on the second day.
    fn go_and_rust() -> SummaryResponse {
        response(vec![
            record(27, 3600.0, vec![entry("Go", 3600.0, 100.0)]),
            record(
                28,
                7200.0,
                vec![entry("Go", 7200.0, 100.0), entry("Rust", 0.0, 0.0)],
            ),
        ])
    }

    // ========== Guard Clause ==========

    #[test]
    fn single_record_passes_through_unchanged() {
        let input = response(vec![record(27, 3600.0, vec![entry("Go", 3600.0, 42.0)])]);
        let output = aggregate(&input).unwrap();
        assert_eq!(output, input);
        assert!(output.cumulative_total.is_none());
    }

    #[test]
    fn single_record_json_is_written_back_verbatim() {
        let input = json!({
            "data": [{
                "grand_total": {"total_seconds": 42.5, "text": "42 secs"},
                "languages": [{"name": "Go", "total_seconds": 42.5, "percent": 100.0}],
                "projects": null,
                "range": {"start": "2025-01-27T00:00:00Z", "timezone": "UTC"}
            }],
            "start": "2025-01-27T00:00:00Z"
        });
        let response: SummaryResponse = serde_json::from_value(input.clone()).unwrap();
        let output = serde_json::to_value(aggregate(&response).unwrap()).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn missing_or_empty_data_passes_through() {
        let absent = SummaryResponse::default();
        assert_eq!(aggregate(&absent).unwrap(), absent);

        let empty = response(vec![]);
        assert_eq!(aggregate(&empty).unwrap(), empty);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let once = aggregate(&go_and_rust()).unwrap();
        let twice = aggregate(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn single_malformed_record_passes_through() {
        // The guard runs before validation.
        let input = response(vec![SummaryRecord::default()]);
        assert_eq!(aggregate(&input).unwrap(), input);
    }

    // ========== Merge Semantics ==========

    #[test]
    #[expect(clippy::float_cmp, reason = "sums of whole seconds are exact")]
    fn merges_two_records() {
        let output = aggregate(&go_and_rust()).unwrap();
        let merged = only_record(&output);

        let grand_total = merged.grand_total.as_ref().unwrap();
        assert_eq!(grand_total.total_seconds, 10_800.0);
        assert_eq!(grand_total.hours, Some(3));
        assert_eq!(grand_total.minutes, Some(0));
        assert_eq!(grand_total.text.as_deref(), Some("3 hrs 0 mins"));
        assert_eq!(grand_total.digital.as_deref(), Some("3:00"));

        let languages = merged.dimension(Dimension::Languages);
        assert_eq!(languages.len(), 2);
        assert_eq!(languages[0].name, "Go");
        assert_eq!(languages[0].total_seconds, 10_800.0);
        assert_eq!(languages[0].hours, Some(3));
        assert_eq!(languages[0].percent, Some(100.0));
        assert_eq!(languages[1].name, "Rust");
        assert_eq!(languages[1].total_seconds, 0.0);
        assert_eq!(languages[1].percent, Some(0.0));
        assert_eq!(merged.dependencies, Some(Some(vec![])));
    }

    #[test]
    fn names_are_unique_and_keep_first_seen_order() {
        let input = response(vec![
            record(
                27,
                300.0,
                vec![entry("Rust", 100.0, 33.3), entry("Go", 200.0, 66.7)],
            ),
            record(
                28,
                300.0,
                vec![
                    entry("Python", 50.0, 16.7),
                    entry("Go", 50.0, 16.7),
                    entry("Rust", 200.0, 66.6),
                ],
            ),
        ]);
        let output = aggregate(&input).unwrap();
        let names: Vec<_> = only_record(&output)
            .dimension(Dimension::Languages)
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Rust", "Go", "Python"]);
    }

    #[test]
    fn names_match_case_sensitively() {
        let input = response(vec![
            record(27, 100.0, vec![entry("rust", 100.0, 100.0)]),
            record(28, 100.0, vec![entry("Rust", 100.0, 100.0)]),
        ]);
        let output = aggregate(&input).unwrap();
        assert_eq!(only_record(&output).dimension(Dimension::Languages).len(), 2);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "sums of whole seconds are exact")]
    fn merged_durations_are_sums_of_sources() {
        let input = response(vec![
            record(27, 3000.0, vec![entry("Rust", 3000.0, 100.0)]),
            record(28, 1200.0, vec![entry("Rust", 1200.0, 100.0)]),
            record(29, 500.0, vec![entry("Rust", 500.0, 100.0)]),
        ]);
        let output = aggregate(&input).unwrap();
        let rust = &only_record(&output).dimension(Dimension::Languages)[0];
        assert_eq!(rust.total_seconds, 4700.0);
        // 4700s = 1h 18m 20s; summing the parts naively would give 0h 78m.
        assert_eq!(
            (rust.hours, rust.minutes, rust.seconds),
            (Some(1), Some(18), Some(20))
        );
    }

    #[test]
    fn merged_entries_refresh_string_forms_they_carry() {
        let mut first = entry("Rust", 3000.0, 100.0);
        first.digital = Some("0:50".to_string());
        first.text = Some("50 mins".to_string());
        let mut second = entry("Rust", 1200.0, 100.0);
        second.decimal = Some("0.33".to_string());

        let input = response(vec![
            record(27, 3000.0, vec![first]),
            record(28, 1200.0, vec![second]),
        ]);
        let output = aggregate(&input).unwrap();
        let rust = &only_record(&output).dimension(Dimension::Languages)[0];
        assert_eq!(rust.digital.as_deref(), Some("1:10"));
        assert_eq!(rust.text.as_deref(), Some("1 hrs 10 mins"));
        // first-seen entry had no decimal, so none is invented
        assert_eq!(rust.decimal, None);
    }

    #[test]
    fn first_seen_unknown_fields_are_kept() {
        let mut first = entry("VS Code", 60.0, 100.0);
        first.extra.insert("color".to_string(), json!("#007acc"));
        let input = SummaryResponse {
            data: Some(vec![
                SummaryRecord {
                    editors: Some(Some(vec![first])),
                    ..record(27, 60.0, vec![])
                },
                SummaryRecord {
                    editors: Some(Some(vec![entry("VS Code", 60.0, 100.0)])),
                    ..record(28, 60.0, vec![])
                },
            ]),
            ..SummaryResponse::default()
        };
        let output = aggregate(&input).unwrap();
        assert_eq!(
            only_record(&output).dimension(Dimension::Editors)[0].extra["color"],
            "#007acc"
        );
    }

    #[test]
    fn every_dimension_is_merged() {
        let mut day_one = record(27, 60.0, vec![]);
        let mut day_two = record(28, 60.0, vec![]);
        for dimension in Dimension::ALL {
            day_one
                .dimension_mut(dimension)
                .push(entry("shared", 60.0, 100.0));
            day_two
                .dimension_mut(dimension)
                .push(entry("shared", 60.0, 100.0));
        }
        let output = aggregate(&response(vec![day_one, day_two])).unwrap();
        let merged = only_record(&output);
        for dimension in Dimension::ALL {
            let entries = merged.dimension(dimension);
            assert_eq!(entries.len(), 1, "{}", dimension.as_str());
            assert!((entries[0].total_seconds - 120.0).abs() < f64::EPSILON);
        }
    }

    // ========== Percent Basis ==========

    #[test]
    fn global_basis_recomputes_single_occurrence_entries() {
        let input = response(vec![
            record(27, 100.0, vec![entry("Go", 100.0, 100.0)]),
            record(28, 300.0, vec![entry("Rust", 300.0, 100.0)]),
        ]);
        let output = aggregate(&input).unwrap();
        let languages = only_record(&output).dimension(Dimension::Languages);
        assert_eq!(languages[0].percent, Some(25.0));
        assert_eq!(languages[1].percent, Some(75.0));
    }

    #[test]
    fn merged_only_basis_keeps_record_percent_for_single_entries() {
        let input = response(vec![
            record(
                27,
                200.0,
                vec![entry("Go", 100.0, 50.0), entry("Rust", 100.0, 50.0)],
            ),
            record(28, 200.0, vec![entry("Go", 200.0, 100.0)]),
        ]);
        let options = AggregateOptions {
            percent_basis: PercentBasis::MergedOnly,
        };
        let output = aggregate_with(&input, &options).unwrap();
        let languages = only_record(&output).dimension(Dimension::Languages);
        assert_eq!(languages[0].name, "Go");
        assert_eq!(languages[0].percent, Some(75.0));
        assert_eq!(languages[1].name, "Rust");
        assert_eq!(languages[1].percent, Some(50.0));
    }

    #[test]
    fn percents_round_to_two_decimals() {
        let input = response(vec![
            record(27, 150.0, vec![entry("Go", 100.0, 66.67)]),
            record(28, 150.0, vec![entry("Go", 0.0, 0.0)]),
        ]);
        let output = aggregate(&input).unwrap();
        assert_eq!(
            only_record(&output).dimension(Dimension::Languages)[0].percent,
            Some(33.33)
        );
    }

    #[test]
    fn zero_total_yields_zero_percents() {
        for basis in [PercentBasis::Global, PercentBasis::MergedOnly] {
            let input = response(vec![
                record(27, 0.0, vec![entry("Go", 0.0, 0.0)]),
                record(28, 0.0, vec![entry("Go", 0.0, 0.0), entry("Rust", 0.0, 0.0)]),
            ]);
            let options = AggregateOptions {
                percent_basis: basis,
            };
            let output = aggregate_with(&input, &options).unwrap();
            let merged = only_record(&output);
            for language in merged.dimension(Dimension::Languages) {
                assert_eq!(language.percent, Some(0.0));
            }
            assert_eq!(
                merged.grand_total.as_ref().unwrap().text.as_deref(),
                Some("0 hrs 0 mins")
            );
        }
    }

    // ========== Totals and Range ==========

    #[test]
    #[expect(clippy::float_cmp, reason = "sums of whole seconds are exact")]
    fn grand_total_is_sum_of_records() {
        let input = response(vec![
            record(27, 1234.0, vec![]),
            record(28, 0.0, vec![]),
            record(29, 4321.0, vec![]),
        ]);
        let output = aggregate(&input).unwrap();
        let grand_total = only_record(&output).grand_total.clone().unwrap();
        assert_eq!(grand_total.total_seconds, 5555.0);
        assert_eq!(grand_total.digital.as_deref(), Some("1:32"));
        assert_eq!(grand_total.text.as_deref(), Some("1 hrs 32 mins"));
    }

    #[test]
    fn range_spans_first_start_to_last_end() {
        let mut last = record(29, 0.0, vec![]);
        last.range.as_mut().unwrap().timezone = Some("Europe/Berlin".to_string());
        let input = response(vec![record(27, 0.0, vec![]), record(28, 0.0, vec![]), last]);

        let output = aggregate(&input).unwrap();
        let range = only_record(&output).range.clone().unwrap();
        let records = input.data.as_ref().unwrap();
        assert_eq!(range.start, records[0].range.as_ref().unwrap().start);
        assert_eq!(range.end, records[2].range.as_ref().unwrap().end);
        assert_eq!(range.timezone.as_deref(), Some("UTC"));
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "floored averages are exact")]
    fn cumulative_total_and_daily_average_are_populated() {
        let mut input = response(vec![
            record(27, 3600.0, vec![]),
            record(28, 3600.0, vec![]),
            record(29, 3601.0, vec![]),
        ]);
        input.daily_average = Some(DailyAverage {
            seconds: 1.0,
            text: "stale".to_string(),
            text_including_other_language: "stale".to_string(),
            extra: Map::from_iter([("days_minus_holidays".to_string(), json!(3))]),
        });
        input
            .extra
            .insert("start".to_string(), json!("2025-01-27T00:00:00Z"));

        let output = aggregate(&input).unwrap();

        let cumulative = output.cumulative_total.unwrap();
        assert_eq!(cumulative.seconds, 10_801.0);
        assert_eq!(cumulative.decimal, "3.00");
        assert_eq!(cumulative.digital, "3:00");
        assert_eq!(cumulative.text, "3 hrs 0 mins");

        let average = output.daily_average.unwrap();
        assert_eq!(average.seconds, 3600.0);
        assert_eq!(average.text, "1 hrs 0 mins");
        assert_eq!(average.text_including_other_language, "1 hrs 0 mins");
        assert_eq!(average.extra["days_minus_holidays"], 3);

        assert_eq!(output.extra["start"], "2025-01-27T00:00:00Z");
    }

    #[test]
    fn input_is_not_modified() {
        let input = go_and_rust();
        let snapshot = input.clone();
        let _ = aggregate(&input).unwrap();
        assert_eq!(input, snapshot);
    }

    // ========== Malformed Input ==========

    #[test]
    fn missing_grand_total_is_rejected() {
        let mut second = record(28, 0.0, vec![]);
        second.grand_total = None;
        let input = response(vec![record(27, 0.0, vec![]), second]);
        assert_eq!(
            aggregate(&input),
            Err(AggregateError::MalformedRecord {
                index: 1,
                field: "grand_total"
            })
        );
    }

    #[test]
    fn missing_first_range_is_rejected() {
        let mut first = record(27, 0.0, vec![]);
        first.range = None;
        let input = response(vec![first, record(28, 0.0, vec![])]);
        assert_eq!(
            aggregate(&input),
            Err(AggregateError::MalformedRecord {
                index: 0,
                field: "range"
            })
        );
    }

    #[test]
    fn missing_last_end_is_rejected() {
        let mut last = record(29, 0.0, vec![]);
        last.range.as_mut().unwrap().end = None;
        let input = response(vec![record(27, 0.0, vec![]), record(28, 0.0, vec![]), last]);
        let err = aggregate(&input).unwrap_err();
        assert_eq!(
            err,
            AggregateError::MalformedRecord {
                index: 2,
                field: "range.end"
            }
        );
        assert_eq!(err.to_string(), "summary record 2 is missing `range.end`");
    }

    #[test]
    fn middle_records_need_no_range() {
        let mut middle = record(28, 60.0, vec![]);
        middle.range = None;
        let input = response(vec![record(27, 60.0, vec![]), middle, record(29, 60.0, vec![])]);
        assert!(aggregate(&input).is_ok());
    }

    #[test]
    fn aggregates_deserialized_payload() {
        let payload = json!({
            "data": [
                {
                    "grand_total": {"total_seconds": 3600, "text": "1 hr"},
                    "languages": [{"name": "Go", "total_seconds": 3600, "percent": 100}],
                    "range": {"start": "2025-01-27T00:00:00Z", "end": "2025-01-27T23:59:59Z", "timezone": "UTC"}
                },
                {
                    "grand_total": {"total_seconds": 7200},
                    "languages": [
                        {"name": "Go", "total_seconds": 7200, "percent": 100},
                        {"name": "Rust", "total_seconds": 0, "percent": 0}
                    ],
                    "projects": null,
                    "range": {"start": "2025-01-28T00:00:00Z", "end": "2025-01-28T23:59:59Z", "timezone": "UTC"}
                }
            ],
            "daily_average": {"seconds": 5400, "text": "1 hr 30 mins", "text_including_other_language": "1 hr 30 mins"}
        });
        let input: SummaryResponse = serde_json::from_value(payload).unwrap();
        let output = serde_json::to_value(aggregate(&input).unwrap()).unwrap();

        assert_eq!(output["data"][0]["grand_total"]["text"], "3 hrs 0 mins");
        assert_eq!(output["data"][0]["languages"][0]["percent"], 100.0);
        assert_eq!(output["data"][0]["languages"][1]["name"], "Rust");
        assert_eq!(output["data"][0]["dependencies"], json!([]));
        assert_eq!(output["cumulative_total"]["decimal"], "3.00");
        assert_eq!(output["daily_average"]["seconds"], 5400.0);
    }
}
