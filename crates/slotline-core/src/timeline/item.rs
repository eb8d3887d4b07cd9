//! Interval types: allocations and maintenance windows on a resource.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::time::Moment;

/// What occupies the interval.
///
/// Tags the server adds later survive as [`IntervalKind::Other`] instead of
/// failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IntervalKind {
    Allocation,
    Maintenance,
    Other(String),
}

impl IntervalKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Allocation => "ALLOCATION",
            Self::Maintenance => "MAINTENANCE",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for IntervalKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "ALLOCATION" => Self::Allocation,
            "MAINTENANCE" => Self::Maintenance,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for IntervalKind {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<IntervalKind> for String {
    fn from(kind: IntervalKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Severity of a maintenance window: HARD blocks, SOFT advises.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Level {
    Hard,
    Soft,
    Other(String),
}

impl Level {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Hard => "HARD",
            Self::Soft => "SOFT",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Level {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "HARD" => Self::Hard,
            "SOFT" => Self::Soft,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for Level {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.as_str().to_string()
    }
}

/// A time-bounded entry on a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    pub id: i64,
    pub resource_id: i64,
    #[serde(rename = "type")]
    pub kind: IntervalKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    #[serde(alias = "startTime")]
    pub start: Moment,
    #[serde(alias = "endTime")]
    pub end: Moment,
    /// Project reference for allocations, reason text for maintenance.
    #[serde(default)]
    pub owner_ref: String,
}

impl Interval {
    /// Build an interval without checking its bounds.
    ///
    /// Snapshots from the data layer are taken as they come; use
    /// [`is_valid`](Self::is_valid) before rendering or conflict-checking.
    pub fn new(
        id: i64,
        resource_id: i64,
        kind: IntervalKind,
        start: impl Into<Moment>,
        end: impl Into<Moment>,
    ) -> Self {
        Self {
            id,
            resource_id,
            kind,
            level: None,
            start: start.into(),
            end: end.into(),
            owner_ref: String::new(),
        }
    }

    /// Build an interval, rejecting unparsable or non-positive bounds.
    ///
    /// # Errors
    /// Returns an error if either bound is unparsable or `end <= start`.
    pub fn try_new(
        id: i64,
        resource_id: i64,
        kind: IntervalKind,
        start: impl Into<Moment>,
        end: impl Into<Moment>,
    ) -> Result<Self, ValidationError> {
        let interval = Self::new(id, resource_id, kind, start, end);
        let start_ms = interval
            .start
            .millis()
            .ok_or_else(|| ValidationError::UnparsableInstant(interval.start.to_string()))?;
        let end_ms = interval
            .end
            .millis()
            .ok_or_else(|| ValidationError::UnparsableInstant(interval.end.to_string()))?;
        if end_ms <= start_ms {
            return Err(ValidationError::InvalidTimeRange {
                start: interval.start.to_string(),
                end: interval.end.to_string(),
            });
        }
        Ok(interval)
    }

    /// Allocation on a resource, always hard occupancy.
    pub fn allocation(
        id: i64,
        resource_id: i64,
        start: impl Into<Moment>,
        end: impl Into<Moment>,
    ) -> Self {
        Self::new(id, resource_id, IntervalKind::Allocation, start, end)
    }

    /// Maintenance window with the given level.
    pub fn maintenance(
        id: i64,
        resource_id: i64,
        level: Level,
        start: impl Into<Moment>,
        end: impl Into<Moment>,
    ) -> Self {
        Self::new(id, resource_id, IntervalKind::Maintenance, start, end).with_level(level)
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_owner_ref(mut self, owner_ref: impl Into<String>) -> Self {
        self.owner_ref = owner_ref.into();
        self
    }

    /// `end > start`, with both bounds parsable.
    pub fn is_valid(&self) -> bool {
        self.bounds_ms().is_some()
    }

    /// Bounds in milliseconds, if valid.
    pub fn bounds_ms(&self) -> Option<(f64, f64)> {
        let start = self.start.millis()?;
        let end = self.end.millis()?;
        (end > start).then_some((start, end))
    }

    pub fn duration_ms(&self) -> Option<f64> {
        self.bounds_ms().map(|(start, end)| end - start)
    }

    /// Level the interval occupies its resource at.
    ///
    /// Allocations are unconditionally hard. Maintenance without a level is
    /// treated as hard.
    pub fn effective_level(&self) -> Level {
        match (&self.kind, &self.level) {
            (IntervalKind::Allocation, _) => Level::Hard,
            (_, Some(level)) => level.clone(),
            (_, None) => Level::Hard,
        }
    }

    /// Check if this interval overlaps another. Touching endpoints do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        match (self.bounds_ms(), other.bounds_ms()) {
            (Some((a_start, a_end)), Some((b_start, b_end))) => a_start < b_end && b_start < a_end,
            _ => false,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}#{} [{} ~ {}]",
            self.kind.as_str(),
            self.id,
            self.start,
            self.end
        )
    }
}
