//! Query filters for the summaries endpoint.

use chrono::NaiveDate;
use ht_core::RangePreset;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Filters forwarded to the summaries endpoint as query parameters.
///
/// Values are sent verbatim; unset and empty values are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryFilters {
    pub range: Option<RangePreset>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub project: Option<String>,
    pub language: Option<String>,
}

impl SummaryFilters {
    /// Filters selecting a single range preset.
    #[must_use]
    pub fn for_range(range: RangePreset) -> Self {
        Self {
            range: Some(range),
            ..Self::default()
        }
    }

    /// Whether any time selection (range or explicit dates) is set.
    #[must_use]
    pub const fn has_time_selection(&self) -> bool {
        self.range.is_some() || self.start.is_some() || self.end.is_some()
    }

    /// Query parameters in a stable order: range, start, end, project, language.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let candidates = [
            ("range", self.range.as_ref().map(ToString::to_string)),
            ("start", self.start.map(|d| d.format(DATE_FORMAT).to_string())),
            ("end", self.end.map(|d| d.format(DATE_FORMAT).to_string())),
            ("project", self.project.clone()),
            ("language", self.language.clone()),
        ];
        candidates
            .into_iter()
            .filter_map(|(key, value)| value.filter(|v| !v.is_empty()).map(|v| (key, v)))
            .collect()
    }
}
