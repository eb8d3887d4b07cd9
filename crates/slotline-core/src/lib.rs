//! # Slotline Core Library
//!
//! This library provides the scheduling conflict model and timeline
//! projection engine behind Slotline, a tool for booking shared resources to
//! projects around planned maintenance. All operations are available via the
//! standalone `slotline` CLI binary, which is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Time**: Date/time field combination and lenient instant parsing
//! - **Timeline**: Interval model, query window resolution, and projection of
//!   intervals onto percentage coordinates with axis labels
//! - **Conflict**: Presentation of remote conflict verdicts and label mappings
//! - **Schedule**: Per-resource schedule view assembled from snapshots
//! - **Storage**: TOML-based configuration
//!
//! Nothing here performs network I/O or holds state between calls; every
//! function is a pure mapping of its inputs, except configuration loading.
//!
//! ## Key Components
//!
//! - [`Interval`]: An allocation or maintenance window on a resource
//! - [`resolve_range`]: Query window resolution
//! - [`project`]: Interval-to-bar projection
//! - [`presentation`]: Verdict-to-notification mapping
//! - [`Config`]: Application configuration management

pub mod conflict;
pub mod error;
pub mod schedule;
pub mod storage;
pub mod time;
pub mod timeline;

pub use conflict::{
    presentation, CandidateCheck, ConflictType, ConflictVerdict, Presentation, Severity,
};
pub use error::{ConfigError, CoreError, ValidationError};
pub use schedule::{AllocationRecord, AllocationStatus, MaintenanceRecord, ScheduleView};
pub use storage::Config;
pub use time::{combine, format_short, parse_instant, split, DisplayFormat, Moment};
pub use timeline::{
    axis_labels, project, resolve_range, AxisLabels, Interval, IntervalKind, Level, ProjectedBar,
    ScheduleQuery, TimeRange, Timeline,
};
