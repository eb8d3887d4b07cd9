//! Projection of intervals onto a percentage-based horizontal timeline.
//!
//! Intervals partly inside the window are clipped at its edges, intervals
//! entirely outside are hidden, and anything visible is at least
//! [`MIN_BAR_WIDTH_PCT`] wide. All functions are pure: the rendering layer
//! calls them on every state change and relies on identical output for
//! identical input.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::item::Interval;
use super::range::TimeRange;
use crate::conflict::labels::{bar_class, bar_label};
use crate::time::DisplayFormat;

/// Narrowest bar drawn, in percent of the window.
pub const MIN_BAR_WIDTH_PCT: f64 = 1.0;

/// Horizontal placement of one interval within a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectedBar {
    Visible { left_pct: f64, width_pct: f64 },
    Hidden,
}

impl ProjectedBar {
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Serialize for ProjectedBar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Visible {
                left_pct,
                width_pct,
            } => {
                let mut s = serializer.serialize_struct("ProjectedBar", 2)?;
                s.serialize_field("leftPct", left_pct)?;
                s.serialize_field("widthPct", width_pct)?;
                s.end()
            }
            Self::Hidden => {
                let mut s = serializer.serialize_struct("ProjectedBar", 1)?;
                s.serialize_field("hidden", &true)?;
                s.end()
            }
        }
    }
}

/// Place `[start_ms, end_ms]` within `[range_start_ms, range_end_ms]`.
///
/// Does not assume the window is well-formed: a non-positive or non-finite
/// window hides the bar.
pub fn project_bounds(
    start_ms: f64,
    end_ms: f64,
    range_start_ms: f64,
    range_end_ms: f64,
) -> ProjectedBar {
    let total = range_end_ms - range_start_ms;
    if !total.is_finite() || total <= 0.0 {
        return ProjectedBar::Hidden;
    }

    let mut left = (start_ms - range_start_ms) / total * 100.0;
    let mut right = (end_ms - range_start_ms) / total * 100.0;
    if !left.is_finite() || !right.is_finite() {
        return ProjectedBar::Hidden;
    }
    if right < 0.0 || left > 100.0 {
        return ProjectedBar::Hidden;
    }

    left = left.max(0.0);
    right = right.min(100.0);
    let width = (right - left).max(MIN_BAR_WIDTH_PCT);

    ProjectedBar::Visible {
        left_pct: left,
        width_pct: width,
    }
}

/// Place an interval within a window. Unparsable bounds hide the bar.
pub fn project(interval: &Interval, range: &TimeRange) -> ProjectedBar {
    let (Some(start), Some(end)) = (interval.start.millis(), interval.end.millis()) else {
        return ProjectedBar::Hidden;
    };
    project_bounds(start, end, range.start_ms(), range.end_ms())
}

/// As [`project`], hiding everything when no window resolved.
pub fn project_or_hide(interval: &Interval, range: Option<&TimeRange>) -> ProjectedBar {
    match range {
        Some(range) => project(interval, range),
        None => ProjectedBar::Hidden,
    }
}

/// Start, midpoint and end labels under the timeline.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AxisLabels {
    pub start: String,
    pub mid: String,
    pub end: String,
}

pub fn axis_labels(range: Option<&TimeRange>) -> AxisLabels {
    axis_labels_with(range, &DisplayFormat::default())
}

pub fn axis_labels_with(range: Option<&TimeRange>, display: &DisplayFormat) -> AxisLabels {
    match range {
        Some(range) => AxisLabels {
            start: display.format_millis(range.start_ms()),
            mid: display.format_millis(range.midpoint_ms()),
            end: display.format_millis(range.end_ms()),
        },
        None => AxisLabels {
            start: display.placeholder.clone(),
            mid: display.placeholder.clone(),
            end: display.placeholder.clone(),
        },
    }
}

/// One drawable row of the timeline.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TimelineRow {
    pub interval: Interval,
    pub bar: ProjectedBar,
    pub class: &'static str,
    pub label: &'static str,
}

/// Render model for a resource timeline over one window.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Timeline {
    pub range: Option<TimeRange>,
    pub axis: AxisLabels,
    pub rows: Vec<TimelineRow>,
}

impl Timeline {
    /// Project every valid interval; invalid ones are dropped.
    pub fn build(
        intervals: &[Interval],
        range: Option<TimeRange>,
        display: &DisplayFormat,
    ) -> Self {
        let rows = intervals
            .iter()
            .filter(|interval| {
                let valid = interval.is_valid();
                if !valid {
                    tracing::debug!(%interval, "dropping invalid interval from timeline");
                }
                valid
            })
            .map(|interval| TimelineRow {
                bar: project_or_hide(interval, range.as_ref()),
                class: bar_class(interval),
                label: bar_label(interval),
                interval: interval.clone(),
            })
            .collect();

        Self {
            range,
            axis: axis_labels_with(range.as_ref(), display),
            rows,
        }
    }

    /// Rows with a visible bar.
    pub fn visible(&self) -> impl Iterator<Item = &TimelineRow> {
        self.rows.iter().filter(|row| !row.bar.is_hidden())
    }
}
