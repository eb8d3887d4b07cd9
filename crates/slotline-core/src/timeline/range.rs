//! Query window resolution.
//!
//! A window that is incomplete, unparsable, empty or inverted resolves to
//! `None`. That is the normal state of a half-filled query form, so nothing
//! here returns an error.

use serde::{Deserialize, Serialize};

use crate::time::{combine, parse_instant};

/// A visible window in milliseconds since the epoch. `end_ms > start_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    start_ms: f64,
    end_ms: f64,
}

impl TimeRange {
    /// Returns `None` unless both bounds are finite and `end_ms > start_ms`.
    pub fn new(start_ms: f64, end_ms: f64) -> Option<Self> {
        if !start_ms.is_finite() || !end_ms.is_finite() || end_ms <= start_ms {
            return None;
        }
        Some(Self { start_ms, end_ms })
    }

    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    pub fn end_ms(&self) -> f64 {
        self.end_ms
    }

    pub fn duration_ms(&self) -> f64 {
        self.end_ms - self.start_ms
    }

    pub fn midpoint_ms(&self) -> f64 {
        (self.start_ms + self.end_ms) / 2.0
    }

    /// Whether `[start_ms, end_ms)` intersects this window.
    pub fn intersects(&self, start_ms: f64, end_ms: f64) -> bool {
        start_ms < self.end_ms && self.start_ms < end_ms
    }
}

/// Resolve two instant texts into a window.
pub fn resolve_range(start: &str, end: &str) -> Option<TimeRange> {
    let start_ms = parse_instant(start)?;
    let end_ms = parse_instant(end)?;
    let range = TimeRange::new(start_ms, end_ms);
    if range.is_none() {
        tracing::debug!(start, end, "query window does not resolve: end is not after start");
    }
    range
}

/// The schedule query form: a resource and a window given as separate
/// date and time fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleQuery {
    #[serde(default)]
    pub resource_id: Option<i64>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub end_time: String,
}

impl ScheduleQuery {
    pub fn start_text(&self) -> String {
        combine(&self.start_date, &self.start_time)
    }

    pub fn end_text(&self) -> String {
        combine(&self.end_date, &self.end_time)
    }

    /// A resource is chosen and all four time fields are filled in.
    pub fn is_complete(&self) -> bool {
        self.resource_id.is_some() && !self.start_text().is_empty() && !self.end_text().is_empty()
    }

    pub fn resolve(&self) -> Option<TimeRange> {
        resolve_range(&self.start_text(), &self.end_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_ordered_window() {
        let range = resolve_range("2024-01-01T00:00:00", "2024-01-02 00:00:00").unwrap();
        assert_eq!(range.duration_ms(), 86_400_000.0);
        assert_eq!(
            range.midpoint_ms(),
            parse_instant("2024-01-01T12:00:00").unwrap()
        );
    }

    #[test]
    fn empty_or_inverted_window_is_none() {
        assert!(resolve_range("2024-01-01T10:00:00", "2024-01-01T10:00:00").is_none());
        assert!(resolve_range("2024-01-02T00:00:00", "2024-01-01T00:00:00").is_none());
    }

    #[test]
    fn unparsable_or_missing_bound_is_none() {
        assert!(resolve_range("", "2024-01-01T10:00:00").is_none());
        assert!(resolve_range("2024-01-01T10:00:00", "someday").is_none());
    }

    #[test]
    fn time_range_rejects_non_finite() {
        assert!(TimeRange::new(f64::NAN, 10.0).is_none());
        assert!(TimeRange::new(0.0, f64::INFINITY).is_none());
        assert!(TimeRange::new(0.0, 10.0).is_some());
    }

    #[test]
    fn intersects_is_half_open() {
        let range = TimeRange::new(0.0, 100.0).unwrap();
        assert!(range.intersects(-10.0, 1.0));
        assert!(!range.intersects(-10.0, 0.0));
        assert!(!range.intersects(100.0, 120.0));
    }

    #[test]
    fn query_form_resolution() {
        let mut query = ScheduleQuery {
            resource_id: Some(4),
            start_date: "2024-05-01".into(),
            start_time: "08:00".into(),
            end_date: "2024-05-01".into(),
            end_time: String::new(),
        };
        assert!(!query.is_complete());
        assert!(query.resolve().is_none());

        query.end_time = "18:00".into();
        assert!(query.is_complete());
        assert_eq!(query.end_text(), "2024-05-01T18:00:00");
        let range = query.resolve().unwrap();
        assert_eq!(range.duration_ms(), 10.0 * 3_600_000.0);
    }
}
