//! Per-resource schedule view.
//!
//! Rebuilds, from allocation and maintenance snapshots, the list of intervals
//! a resource's timeline shows for one window. This is a read model only: it
//! orders and tags entries but makes no conflict decisions.

use serde::{Deserialize, Serialize};

use crate::time::{DisplayFormat, Moment};
use crate::timeline::{Interval, IntervalKind, Level, TimeRange, Timeline};

/// Owner text for maintenance windows without a reason.
pub const DEFAULT_MAINTENANCE_LABEL: &str = "Maintenance window";

/// Lifecycle of an allocation record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllocationStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
}

/// Allocation snapshot as delivered by the data layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationRecord {
    pub id: i64,
    pub resource_id: i64,
    pub project_id: i64,
    pub start_time: Moment,
    pub end_time: Moment,
    #[serde(default)]
    pub status: AllocationStatus,
}

/// Maintenance window snapshot as delivered by the data layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: i64,
    pub resource_id: i64,
    pub start_time: Moment,
    pub end_time: Moment,
    #[serde(rename = "type", default)]
    pub level: Option<Level>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl From<&AllocationRecord> for Interval {
    fn from(record: &AllocationRecord) -> Self {
        Interval::allocation(
            record.id,
            record.resource_id,
            record.start_time.clone(),
            record.end_time.clone(),
        )
        .with_level(Level::Hard)
        .with_owner_ref(format!("Project #{}", record.project_id))
    }
}

impl From<&MaintenanceRecord> for Interval {
    fn from(record: &MaintenanceRecord) -> Self {
        let label = match record.reason.as_deref().map(str::trim) {
            Some(reason) if !reason.is_empty() => reason.to_string(),
            _ => DEFAULT_MAINTENANCE_LABEL.to_string(),
        };
        Interval::new(
            record.id,
            record.resource_id,
            IntervalKind::Maintenance,
            record.start_time.clone(),
            record.end_time.clone(),
        )
        .with_level(record.level.clone().unwrap_or(Level::Hard))
        .with_owner_ref(label)
    }
}

/// Everything on one resource within one window, ordered by start.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleView {
    pub resource_id: i64,
    pub range: TimeRange,
    pub items: Vec<Interval>,
}

impl ScheduleView {
    /// Collect the resource's active allocations and maintenance windows that
    /// intersect `range`.
    ///
    /// Records for other resources, cancelled allocations and records with
    /// invalid bounds are skipped.
    pub fn assemble(
        resource_id: i64,
        range: TimeRange,
        allocations: &[AllocationRecord],
        windows: &[MaintenanceRecord],
    ) -> Self {
        let booked = allocations
            .iter()
            .filter(|a| a.resource_id == resource_id && a.status != AllocationStatus::Cancelled)
            .map(Interval::from);
        let blocked = windows
            .iter()
            .filter(|w| w.resource_id == resource_id)
            .map(Interval::from);

        let mut items: Vec<(f64, Interval)> = booked
            .chain(blocked)
            .filter_map(|item| match item.bounds_ms() {
                Some((start, end)) if range.intersects(start, end) => Some((start, item)),
                Some(_) => None,
                None => {
                    tracing::debug!(%item, "skipping schedule entry with invalid bounds");
                    None
                }
            })
            .collect();
        items.sort_by(|a, b| a.0.total_cmp(&b.0));

        Self {
            resource_id,
            range,
            items: items.into_iter().map(|(_, item)| item).collect(),
        }
    }

    pub fn timeline(&self, display: &DisplayFormat) -> Timeline {
        Timeline::build(&self.items, Some(self.range), display)
    }
}
