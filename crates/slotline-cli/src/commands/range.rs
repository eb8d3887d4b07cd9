use clap::Subcommand;
use slotline_core::timeline::axis_labels_with;
use slotline_core::{resolve_range, Config};

#[derive(Subcommand)]
pub enum RangeAction {
    /// Resolve a window; prints null when it does not resolve
    Resolve {
        start: String,
        end: String,
    },
    /// Print start/mid/end axis labels for a window
    Axis {
        start: String,
        end: String,
    },
}

pub fn run(action: RangeAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RangeAction::Resolve { start, end } => {
            let range = resolve_range(&start, &end);
            println!("{}", serde_json::to_string_pretty(&range)?);
        }
        RangeAction::Axis { start, end } => {
            let config = Config::load_or_default();
            let range = resolve_range(&start, &end);
            let axis = axis_labels_with(range.as_ref(), &config.display);
            println!("{}", serde_json::to_string_pretty(&axis)?);
        }
    }
    Ok(())
}
