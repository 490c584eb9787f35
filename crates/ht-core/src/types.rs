//! Query parameter types shared by the fetcher and the CLI.

use std::convert::Infallible;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A `range` query value understood by the summaries endpoint.
///
/// Values outside the documented set are carried through as [`RangePreset::Other`]
/// and forwarded unchanged; the server decides what to do with them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RangePreset {
    #[default]
    Today,
    Yesterday,
    Week,
    Month,
    Year,
    SevenDays,
    LastSevenDays,
    ThirtyDays,
    LastThirtyDays,
    SixMonths,
    LastSixMonths,
    TwelveMonths,
    LastTwelveMonths,
    LastYear,
    Any,
    AllTime,
    /// An unrecognized value, forwarded verbatim.
    Other(String),
}

impl RangePreset {
    /// Every documented preset, in the order the dashboard lists them.
    pub const KNOWN: [Self; 16] = [
        Self::Today,
        Self::Yesterday,
        Self::Week,
        Self::Month,
        Self::Year,
        Self::SevenDays,
        Self::LastSevenDays,
        Self::ThirtyDays,
        Self::LastThirtyDays,
        Self::SixMonths,
        Self::LastSixMonths,
        Self::TwelveMonths,
        Self::LastTwelveMonths,
        Self::LastYear,
        Self::Any,
        Self::AllTime,
    ];

    /// Query-string form of the preset.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::SevenDays => "7_days",
            Self::LastSevenDays => "last_7_days",
            Self::ThirtyDays => "30_days",
            Self::LastThirtyDays => "last_30_days",
            Self::SixMonths => "6_months",
            Self::LastSixMonths => "last_6_months",
            Self::TwelveMonths => "12_months",
            Self::LastTwelveMonths => "last_12_months",
            Self::LastYear => "last_year",
            Self::Any => "any",
            Self::AllTime => "all_time",
            Self::Other(value) => value,
        }
    }

    /// Whether this is one of the documented presets.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for RangePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RangePreset {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::KNOWN
            .into_iter()
            .find(|preset| preset.as_str() == s)
            .unwrap_or_else(|| Self::Other(s.to_string())))
    }
}

impl From<String> for RangePreset {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(preset) => preset,
            Err(never) => match never {},
        }
    }
}

impl From<RangePreset> for String {
    fn from(preset: RangePreset) -> Self {
        match preset {
            RangePreset::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}
