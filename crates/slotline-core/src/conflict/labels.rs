//! Tag-to-text and tag-to-style mappings for list views and timeline bars.
//!
//! Every mapping is total. Tags this build does not know come back as the
//! raw tag (or `-` when absent) so that values added on the server side still
//! render.

use crate::time::PLACEHOLDER;
use crate::timeline::{Interval, IntervalKind, Level};

pub fn level_text(level: Option<&Level>) -> &str {
    match level {
        Some(Level::Hard) => "Hard conflict",
        Some(Level::Soft) => "Soft conflict",
        Some(Level::Other(raw)) => or_placeholder(raw),
        None => PLACEHOLDER,
    }
}

pub fn level_class(level: Option<&Level>) -> &'static str {
    match level {
        Some(Level::Hard) => "danger",
        Some(Level::Soft) => "warning",
        Some(Level::Other(_)) | None => "info",
    }
}

pub fn type_text(kind: Option<&IntervalKind>) -> &str {
    match kind {
        Some(IntervalKind::Allocation) => "Allocation",
        Some(IntervalKind::Maintenance) => "Maintenance window",
        Some(IntervalKind::Other(raw)) => or_placeholder(raw),
        None => PLACEHOLDER,
    }
}

/// Style class of a timeline bar.
///
/// Maintenance without a recognized level, and unknown kinds, draw like an
/// allocation.
pub fn bar_class(item: &Interval) -> &'static str {
    match (&item.kind, &item.level) {
        (IntervalKind::Maintenance, Some(Level::Hard)) => "maintenance-hard",
        (IntervalKind::Maintenance, Some(Level::Soft)) => "maintenance-soft",
        _ => "allocation",
    }
}

/// Short caption drawn on a timeline bar.
pub fn bar_label(item: &Interval) -> &'static str {
    match &item.kind {
        IntervalKind::Allocation => "Allocation",
        IntervalKind::Maintenance => match item.level {
            Some(Level::Soft) => "Maintenance (soft)",
            _ => "Maintenance (hard)",
        },
        IntervalKind::Other(_) => "",
    }
}

/// Resource, project and allocation lifecycle statuses.
pub fn status_text(status: &str) -> &str {
    match status {
        "ACTIVE" => "In progress",
        "AVAILABLE" => "Available",
        "COMPLETED" => "Completed",
        "CANCELLED" => "Cancelled",
        "MAINTENANCE" => "Under maintenance",
        "RETIRED" => "Retired",
        other => other,
    }
}

pub fn status_class(status: &str) -> &'static str {
    match status {
        "ACTIVE" | "AVAILABLE" => "success",
        "MAINTENANCE" => "warning",
        "CANCELLED" | "RETIRED" => "danger",
        _ => "info",
    }
}

pub fn role_text(role: Option<&str>) -> &str {
    match role {
        Some("ADMIN") => "Administrator",
        Some("USER") => "Regular user",
        Some(other) => or_placeholder(other),
        None => PLACEHOLDER,
    }
}

pub fn user_status_text(status: Option<&str>) -> &str {
    match status {
        Some("ACTIVE") => "Enabled",
        Some("DISABLED") => "Disabled",
        Some(other) => or_placeholder(other),
        None => PLACEHOLDER,
    }
}

fn or_placeholder(raw: &str) -> &str {
    if raw.is_empty() {
        PLACEHOLDER
    } else {
        raw
    }
}
