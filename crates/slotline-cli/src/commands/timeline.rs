//! Timeline projection commands for CLI.

use std::path::PathBuf;

use clap::Subcommand;
use serde::Deserialize;
use slotline_core::{
    parse_instant, resolve_range, AllocationRecord, Config, Interval, MaintenanceRecord,
    ScheduleView, TimeRange, Timeline,
};

use super::read_input;

const MS_PER_HOUR: f64 = 3_600_000.0;

#[derive(Subcommand)]
pub enum TimelineAction {
    /// Project a JSON array of intervals onto a window
    Project {
        /// Window start
        #[arg(long)]
        start: String,
        /// Window end; defaults to start plus query.default_window_hours
        #[arg(long)]
        end: Option<String>,
        /// JSON file with the intervals (stdin if omitted)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Assemble and project one resource's schedule from allocation and
    /// maintenance snapshots
    Schedule {
        /// Resource ID
        #[arg(long)]
        resource: i64,
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: Option<String>,
        /// JSON file with `allocations` and `maintenanceWindows` (stdin if omitted)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    #[serde(default)]
    allocations: Vec<AllocationRecord>,
    #[serde(default)]
    maintenance_windows: Vec<MaintenanceRecord>,
}

fn window(config: &Config, start: &str, end: Option<&str>) -> Option<TimeRange> {
    match end {
        Some(end) => resolve_range(start, end),
        None => {
            let start_ms = parse_instant(start)?;
            let hours = f64::from(config.query.default_window_hours);
            TimeRange::new(start_ms, start_ms + hours * MS_PER_HOUR)
        }
    }
}

pub fn run(action: TimelineAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    match action {
        TimelineAction::Project { start, end, file } => {
            let intervals: Vec<Interval> = serde_json::from_str(&read_input(file.as_deref())?)?;
            let range = window(&config, &start, end.as_deref());
            if range.is_none() {
                tracing::warn!(%start, ?end, "window does not resolve; every bar is hidden");
            }
            let timeline = Timeline::build(&intervals, range, &config.display);
            println!("{}", serde_json::to_string_pretty(&timeline)?);
        }
        TimelineAction::Schedule {
            resource,
            start,
            end,
            file,
        } => {
            let snapshot: Snapshot = serde_json::from_str(&read_input(file.as_deref())?)?;
            let range = window(&config, &start, end.as_deref())
                .ok_or("the schedule window must end after it starts")?;
            let view = ScheduleView::assemble(
                resource,
                range,
                &snapshot.allocations,
                &snapshot.maintenance_windows,
            );
            println!("{}", serde_json::to_string_pretty(&view.timeline(&config.display))?);
        }
    }
    Ok(())
}
