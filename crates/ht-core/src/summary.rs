//! Wire model of the `summaries` endpoint.
//!
//! Every struct keeps fields it does not know about in an `extra` map, so a
//! response can be read, consolidated and written back out without dropping
//! server-specific data.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A `summaries` response: one record per time bucket.
///
/// After consolidation the same type holds a single merged record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<SummaryRecord>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cumulative_total: Option<CumulativeTotal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_average: Option<DailyAverage>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SummaryResponse {
    /// The record a dashboard renders: the first (after consolidation, only) one.
    #[must_use]
    pub fn primary_record(&self) -> Option<&SummaryRecord> {
        self.data.as_deref().and_then(<[SummaryRecord]>::first)
    }
}

/// A JSON array field that remembers how it arrived: absent (`None`),
/// explicit `null` (`Some(None)`) or present.
#[allow(clippy::option_option)]
pub type WireList<T> = Option<Option<Vec<T>>>;

/// One time-bucketed snapshot of coding activity.
///
/// Dimension arrays are [`WireList`]s so a record that is never merged
/// serializes back exactly as it was read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grand_total: Option<GrandTotal>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub categories: WireList<BreakdownEntry>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub dependencies: WireList<Value>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub editors: WireList<BreakdownEntry>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub languages: WireList<BreakdownEntry>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub machines: WireList<BreakdownEntry>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub operating_systems: WireList<BreakdownEntry>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub projects: WireList<BreakdownEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<SummaryRange>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SummaryRecord {
    /// Entries of one dimension, in server order. Absent and `null` read as empty.
    #[must_use]
    pub fn dimension(&self, dimension: Dimension) -> &[BreakdownEntry] {
        let list = match dimension {
            Dimension::Categories => &self.categories,
            Dimension::Editors => &self.editors,
            Dimension::Languages => &self.languages,
            Dimension::Machines => &self.machines,
            Dimension::OperatingSystems => &self.operating_systems,
            Dimension::Projects => &self.projects,
        };
        list.as_ref().and_then(Option::as_deref).unwrap_or_default()
    }

    /// Mutable entries of one dimension; an absent or `null` field becomes `[]`.
    pub fn dimension_mut(&mut self, dimension: Dimension) -> &mut Vec<BreakdownEntry> {
        let list = match dimension {
            Dimension::Categories => &mut self.categories,
            Dimension::Editors => &mut self.editors,
            Dimension::Languages => &mut self.languages,
            Dimension::Machines => &mut self.machines,
            Dimension::OperatingSystems => &mut self.operating_systems,
            Dimension::Projects => &mut self.projects,
        };
        list.get_or_insert_with(|| Some(Vec::new()))
            .get_or_insert_with(Vec::new)
    }
}

/// One named bucket within a dimension (a language, an editor, ...).
///
/// `total_seconds` is authoritative; `hours`/`minutes`/`seconds` and the
/// string forms are redundant encodings of it, kept only when sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub name: String,

    #[serde(default)]
    pub total_seconds: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<u64>,

    /// Share of the owning record's time, in \[0, 100\].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digital: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Total coding time of a record across all dimensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrandTotal {
    #[serde(default)]
    pub total_seconds: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digital: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The time span a record covers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<FixedOffset>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<FixedOffset>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Total over every record of a response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CumulativeTotal {
    /// Hours with two decimals, as a string (e.g. `"3.00"`).
    #[serde(default)]
    pub decimal: String,

    #[serde(default)]
    pub digital: String,

    #[serde(default)]
    pub seconds: f64,

    #[serde(default)]
    pub text: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Average coding time per record of a response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyAverage {
    #[serde(default)]
    pub seconds: f64,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub text_including_other_language: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A categorical breakdown axis of a summary record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Categories,
    Editors,
    Languages,
    Machines,
    OperatingSystems,
    Projects,
}

impl Dimension {
    /// All dimensions, in wire order.
    pub const ALL: [Self; 6] = [
        Self::Categories,
        Self::Editors,
        Self::Languages,
        Self::Machines,
        Self::OperatingSystems,
        Self::Projects,
    ];

    /// Dimensions a dashboard renders, in display order.
    pub const PRIMARY: [Self; 4] = [
        Self::Languages,
        Self::Categories,
        Self::Editors,
        Self::Projects,
    ];

    /// JSON field name of the dimension.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::Editors => "editors",
            Self::Languages => "languages",
            Self::Machines => "machines",
            Self::OperatingSystems => "operating_systems",
            Self::Projects => "projects",
        }
    }

    /// Human-readable heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Categories => "Categories",
            Self::Editors => "Editors",
            Self::Languages => "Languages",
            Self::Machines => "Machines",
            Self::OperatingSystems => "Operating Systems",
            Self::Projects => "Projects",
        }
    }
}

/// Marks a field as present, so an explicit `null` is told apart from absence.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAKATIME_RECORD: &str = r##"{
        "grand_total": {
            "digital": "1:30",
            "hours": 1,
            "minutes": 30,
            "text": "1 hr 30 mins",
            "total_seconds": 5400.5
        },
        "categories": [{"name": "Coding", "total_seconds": 5400.5, "percent": 100, "hours": 1, "minutes": 30, "seconds": 0}],
        "dependencies": null,
        "editors": [{"name": "VS Code", "total_seconds": 5400.5, "percent": 100, "color": "#007acc"}],
        "languages": [
            {"name": "Rust", "total_seconds": 3600, "percent": 66.66, "hours": 1, "minutes": 0, "seconds": 0, "digital": "1:00", "text": "1 hr"},
            {"name": "TOML", "total_seconds": 1800.5, "percent": 33.34, "hours": 0, "minutes": 30, "seconds": 0}
        ],
        "machines": [],
        "operating_systems": [{"name": "Linux", "total_seconds": 5400.5}],
        "range": {
            "date": "2025-01-27",
            "start": "2025-01-27T00:00:00Z",
            "end": "2025-01-27T23:59:59Z",
            "text": "Mon Jan 27th 2025",
            "timezone": "UTC"
        }
    }"##;

    #[test]
    fn record_deserializes_wakatime_payload() {
        let record: SummaryRecord = serde_json::from_str(WAKATIME_RECORD).unwrap();

        let grand_total = record.grand_total.as_ref().unwrap();
        assert!((grand_total.total_seconds - 5400.5).abs() < f64::EPSILON);
        assert_eq!(grand_total.text.as_deref(), Some("1 hr 30 mins"));

        let languages = record.dimension(Dimension::Languages);
        assert_eq!(languages.len(), 2);
        assert_eq!(languages[0].name, "Rust");
        assert_eq!(languages[0].hours, Some(1));
        assert_eq!(record.dependencies, Some(None));
        assert_eq!(record.machines, Some(Some(vec![])));
        // projects is absent entirely
        assert_eq!(record.projects, None);
        assert!(record.dimension(Dimension::Projects).is_empty());

        let range = record.range.as_ref().unwrap();
        assert_eq!(range.timezone.as_deref(), Some("UTC"));
        assert_eq!(
            range.start.unwrap().to_rfc3339(),
            "2025-01-27T00:00:00+00:00"
        );
        assert_eq!(range.extra["date"], "2025-01-27");
    }

    #[test]
    fn entry_missing_numbers_stay_missing() {
        let record: SummaryRecord = serde_json::from_str(WAKATIME_RECORD).unwrap();
        let linux = &record.dimension(Dimension::OperatingSystems)[0];
        assert_eq!(linux.hours, None);
        assert_eq!(linux.minutes, None);
        assert_eq!(linux.seconds, None);
        assert_eq!(linux.percent, None);

        let json = serde_json::to_value(linux).unwrap();
        assert!(json.get("hours").is_none());
        assert!(json.get("percent").is_none());
    }

    #[test]
    fn unknown_fields_survive_roundtrip() {
        let record: SummaryRecord = serde_json::from_str(WAKATIME_RECORD).unwrap();
        assert_eq!(
            record.dimension(Dimension::Editors)[0].extra["color"],
            "#007acc"
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["editors"][0]["color"], "#007acc");
        assert_eq!(json["range"]["text"], "Mon Jan 27th 2025");
    }

    #[test]
    fn null_and_absent_arrays_serialize_as_read() {
        let record: SummaryRecord = serde_json::from_str(
            r#"{"grand_total": {"total_seconds": 60}, "projects": null, "languages": []}"#,
        )
        .unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["projects"], Value::Null);
        assert!(json.as_object().unwrap().contains_key("projects"));
        assert_eq!(json["languages"], serde_json::json!([]));
        assert!(json.get("editors").is_none());
        assert!(json["grand_total"].get("hours").is_none());
    }

    #[test]
    fn response_keeps_top_level_fields() {
        let json = format!(
            r#"{{"data": [{WAKATIME_RECORD}], "start": "2025-01-27T00:00:00Z", "daily_average": {{"seconds": 5400, "text": "1 hr 30 mins", "days_including_holidays": 1}}}}"#
        );
        let response: SummaryResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response.data.as_ref().unwrap().len(), 1);
        assert_eq!(response.extra["start"], "2025-01-27T00:00:00Z");

        let average = response.daily_average.as_ref().unwrap();
        assert_eq!(average.text, "1 hr 30 mins");
        assert_eq!(average.extra["days_including_holidays"], 1);
        assert!(response.cumulative_total.is_none());
    }

    #[test]
    fn response_without_data_is_accepted() {
        let response: SummaryResponse = serde_json::from_str(r#"{"error": "nope"}"#).unwrap();
        assert!(response.data.is_none());
        assert!(response.primary_record().is_none());
    }

    #[test]
    fn dimension_accessors_match_fields() {
        let mut record: SummaryRecord = serde_json::from_str(WAKATIME_RECORD).unwrap();
        assert_eq!(record.dimension(Dimension::Languages).len(), 2);
        assert_eq!(record.dimension(Dimension::OperatingSystems)[0].name, "Linux");

        record.dimension_mut(Dimension::Projects).push(BreakdownEntry {
            name: "ht".to_string(),
            ..BreakdownEntry::default()
        });
        assert_eq!(record.dimension(Dimension::Projects)[0].name, "ht");
        assert_eq!(record.projects.as_ref().unwrap().as_ref().unwrap().len(), 1);
    }

    #[test]
    fn dimension_names_match_wire_fields() {
        let mut record = SummaryRecord::default();
        for dimension in Dimension::ALL {
            record.dimension_mut(dimension);
        }
        let json = serde_json::to_value(&record).unwrap();
        for dimension in Dimension::ALL {
            assert_eq!(
                json.get(dimension.as_str()),
                Some(&serde_json::json!([])),
                "missing field {}",
                dimension.as_str()
            );
        }
        assert_eq!(Dimension::OperatingSystems.label(), "Operating Systems");
    }
}
