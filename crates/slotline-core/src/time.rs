//! Date/time field combination and lenient instant parsing.
//!
//! Forms hand us dates and times as separate fields, and the data layer hands
//! us instants as text in more than one shape (`2024-01-01 10:00:00`,
//! `2024-01-01T10:00`, RFC 3339 with an offset). Everything here is total:
//! incomplete input yields an empty string, unparsable input yields `None`,
//! and formatting falls back to a placeholder.
//!
//! Naive instants (no offset) are read as UTC so that the same text always
//! maps to the same millisecond value regardless of the host timezone.

use std::fmt::{self, Write as _};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Text shown wherever an instant cannot be displayed.
pub const PLACEHOLDER: &str = "-";

/// Month/day/hour/minute, two digits each.
pub const SHORT_FORMAT: &str = "%m/%d %H:%M";

/// An instant as handed over by the data layer.
///
/// Well-formed ISO text deserializes straight into [`Moment::At`]; anything
/// else is kept verbatim in [`Moment::Text`] and parsed leniently on use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Moment {
    At(NaiveDateTime),
    Text(String),
}

impl Moment {
    /// Milliseconds since the epoch, or `None` if the text is unparsable.
    pub fn millis(&self) -> Option<f64> {
        match self {
            Self::At(dt) => Some(naive_millis(dt)),
            Self::Text(text) => parse_instant(text),
        }
    }
}

impl From<NaiveDateTime> for Moment {
    fn from(dt: NaiveDateTime) -> Self {
        Self::At(dt)
    }
}

impl From<DateTime<Utc>> for Moment {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::At(dt.naive_utc())
    }
}

impl From<&str> for Moment {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Moment {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Date and time form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeParts {
    pub date: String,
    pub time: String,
}

impl DateTimeParts {
    pub fn is_empty(&self) -> bool {
        self.date.is_empty() && self.time.is_empty()
    }
}

/// Start and end form fields of a range editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeParts {
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
}

/// Join a date field and a time field into `{date}T{time}`.
///
/// Returns an empty string when either field is blank. A time without a
/// seconds field gets `:00` appended.
pub fn combine(date: &str, time: &str) -> String {
    let (date, time) = (date.trim(), time.trim());
    if date.is_empty() || time.is_empty() {
        return String::new();
    }
    if time.matches(':').count() == 1 {
        format!("{date}T{time}:00")
    } else {
        format!("{date}T{time}")
    }
}

/// Split instant text back into form fields, truncating to minute precision.
pub fn split(text: &str) -> DateTimeParts {
    let normalized = normalize_separator(text);
    let mut parts = normalized.splitn(2, 'T');
    let (Some(date), Some(rest)) = (parts.next(), parts.next()) else {
        return DateTimeParts::default();
    };

    let whole = rest.split('.').next().unwrap_or_default();
    let time: String = whole.chars().take(5).collect();
    if date.is_empty() || time.is_empty() {
        return DateTimeParts::default();
    }

    DateTimeParts {
        date: date.to_string(),
        time,
    }
}

/// Split both ends of a range at once.
pub fn split_range(start: &str, end: &str) -> RangeParts {
    let start = split(start);
    let end = split(end);
    RangeParts {
        start_date: start.date,
        start_time: start.time,
        end_date: end.date,
        end_time: end.time,
    }
}

/// Parse instant text into milliseconds since the epoch.
///
/// Accepts `date T time` and `date space time`, with or without seconds and
/// fractional seconds, an optional `Z` or `±HH:MM` offset (also at minute
/// precision), and a bare date (midnight). Returns `None` for anything else.
pub fn parse_instant(text: &str) -> Option<f64> {
    let normalized = normalize_separator(text);
    if normalized.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(micros_to_millis(dt.timestamp_micros()));
    }
    // RFC 3339 requires seconds; minute-precision text may still carry an offset.
    if let Ok(dt) = DateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M%#z") {
        return Some(micros_to_millis(dt.timestamp_micros()));
    }
    parse_naive(&normalized).map(|dt| naive_millis(&dt))
}

fn parse_naive(normalized: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = normalized.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(normalized, "%Y-%m-%dT%H:%M") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(normalized, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Replace the first space with `T`.
fn normalize_separator(text: &str) -> String {
    text.trim().replacen(' ', "T", 1)
}

fn naive_millis(dt: &NaiveDateTime) -> f64 {
    micros_to_millis(dt.and_utc().timestamp_micros())
}

fn micros_to_millis(micros: i64) -> f64 {
    micros as f64 / 1000.0
}

/// Convert milliseconds back to a UTC datetime.
pub fn millis_to_datetime(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() {
        return None;
    }
    let micros = (ms * 1000.0).round();
    if micros < i64::MIN as f64 || micros > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_micros(micros as i64)
}

/// Whether a strftime pattern is usable for display.
pub fn is_valid_pattern(pattern: &str) -> bool {
    !pattern.is_empty() && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// How instants are rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFormat {
    #[serde(default = "default_short_format")]
    pub short_format: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_short_format() -> String {
    SHORT_FORMAT.into()
}

fn default_placeholder() -> String {
    PLACEHOLDER.into()
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            short_format: default_short_format(),
            placeholder: default_placeholder(),
        }
    }
}

impl DisplayFormat {
    /// Format milliseconds; the placeholder for non-finite or out-of-range values.
    pub fn format_millis(&self, ms: f64) -> String {
        let Some(dt) = millis_to_datetime(ms) else {
            return self.placeholder.clone();
        };
        let mut out = String::new();
        // Writing a DelayedFormat reports bad patterns as fmt::Error rather than panicking.
        if write!(out, "{}", dt.format(&self.short_format)).is_err() {
            return self.placeholder.clone();
        }
        out
    }

    pub fn format_moment(&self, moment: &Moment) -> String {
        match moment.millis() {
            Some(ms) => self.format_millis(ms),
            None => self.placeholder.clone(),
        }
    }

    pub fn format_text(&self, text: &str) -> String {
        match parse_instant(text) {
            Some(ms) => self.format_millis(ms),
            None => self.placeholder.clone(),
        }
    }
}

/// Format milliseconds with [`SHORT_FORMAT`].
pub fn format_short(ms: f64) -> String {
    DisplayFormat::default().format_millis(ms)
}
