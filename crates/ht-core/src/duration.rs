//! Duration display encodings.
//!
//! Summary payloads carry every duration twice: as raw `total_seconds` and as
//! derived strings (`digital`, `text`, `decimal`). These helpers produce the
//! derived forms from the raw seconds.

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Whole hours, minutes and seconds of a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationParts {
    /// Splits a duration given in (possibly fractional) seconds.
    ///
    /// Fractional seconds are floored. Negative, NaN and infinite inputs
    /// yield zero.
    #[must_use]
    pub fn from_seconds(total_seconds: f64) -> Self {
        let whole = whole_seconds(total_seconds);
        Self {
            hours: whole / SECONDS_PER_HOUR,
            minutes: (whole % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: whole % SECONDS_PER_MINUTE,
        }
    }

    /// Clock-style rendering, e.g. `"3:05"`.
    #[must_use]
    pub fn digital(&self) -> String {
        format!("{}:{:02}", self.hours, self.minutes)
    }

    /// Prose rendering, e.g. `"3 hrs 5 mins"`.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{} hrs {} mins", self.hours, self.minutes)
    }
}

/// Floors a seconds value to a whole, non-negative count.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn whole_seconds(total_seconds: f64) -> u64 {
    if total_seconds.is_finite() && total_seconds > 0.0 {
        total_seconds.floor() as u64
    } else {
        0
    }
}

/// Hours as a two-decimal string, e.g. `"1.50"`.
#[must_use]
pub fn decimal_hours(total_seconds: f64) -> String {
    let seconds = if total_seconds.is_finite() {
        total_seconds.max(0.0)
    } else {
        0.0
    };
    format!("{:.2}", seconds / 3600.0)
}

/// Share of `part` in `total` as a percentage rounded to two decimals.
///
/// A zero (or negative) total yields 0 rather than NaN.
#[must_use]
pub fn share_percent(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        round_hundredths(part / total * 100.0)
    } else {
        0.0
    }
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
