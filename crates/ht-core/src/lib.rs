//! Core domain logic for the Hackatime client.
//!
//! This crate contains the fundamental types and logic for:
//! - Summaries: the wire model of WakaTime-compatible `summaries` responses
//! - Aggregation: consolidating many time-bucketed records into one
//! - Durations: the `H:MM` / `H hrs M mins` display encodings

mod aggregate;
pub mod duration;
pub mod summary;
pub mod types;

pub use aggregate::{AggregateError, AggregateOptions, PercentBasis, aggregate, aggregate_with};
pub use duration::DurationParts;
pub use summary::{
    BreakdownEntry, CumulativeTotal, DailyAverage, Dimension, GrandTotal, SummaryRange,
    SummaryRecord, SummaryResponse,
};
pub use types::RangePreset;
