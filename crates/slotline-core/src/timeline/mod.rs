//! Resource timeline: interval model, query windows and bar projection.
//!
//! This module provides:
//! - The interval model for allocations and maintenance windows
//! - Query window resolution from instant text or form fields
//! - Projection of intervals onto percentage coordinates, plus axis labels

mod item;
mod projector;
mod range;

pub use item::{Interval, IntervalKind, Level};
pub use projector::{
    axis_labels, axis_labels_with, project, project_bounds, project_or_hide, AxisLabels,
    ProjectedBar, Timeline, TimelineRow, MIN_BAR_WIDTH_PCT,
};
pub use range::{resolve_range, ScheduleQuery, TimeRange};
