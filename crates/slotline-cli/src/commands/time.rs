use clap::Subcommand;
use slotline_core::time::{combine, parse_instant, split};
use slotline_core::Config;

#[derive(Subcommand)]
pub enum TimeAction {
    /// Join a date and a time field into an instant
    Combine {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Time (HH:MM or HH:MM:SS)
        time: String,
    },
    /// Split an instant into date and time fields
    Split {
        instant: String,
    },
    /// Parse an instant into milliseconds since the epoch
    Parse {
        instant: String,
    },
    /// Format an instant for display
    Format {
        instant: String,
    },
}

pub fn run(action: TimeAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimeAction::Combine { date, time } => {
            let combined = combine(&date, &time);
            if combined.is_empty() {
                return Err("both a date and a time are required".into());
            }
            println!("{combined}");
        }
        TimeAction::Split { instant } => {
            println!("{}", serde_json::to_string_pretty(&split(&instant))?);
        }
        TimeAction::Parse { instant } => match parse_instant(&instant) {
            Some(ms) => println!("{ms}"),
            None => return Err(format!("cannot parse instant: {instant}").into()),
        },
        TimeAction::Format { instant } => {
            let config = Config::load_or_default();
            println!("{}", config.display.format_text(&instant));
        }
    }
    Ok(())
}
