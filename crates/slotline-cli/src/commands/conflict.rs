//! Conflict verdict commands for CLI.

use std::path::PathBuf;

use clap::Subcommand;
use slotline_core::{presentation, CandidateCheck, ConflictVerdict};

use super::read_input;

#[derive(Subcommand)]
pub enum ConflictAction {
    /// Build the request body for a remote conflict check
    Check {
        /// Resource ID
        #[arg(long)]
        resource: Option<i64>,
        #[arg(long)]
        start_date: String,
        #[arg(long)]
        start_time: String,
        #[arg(long)]
        end_date: String,
        #[arg(long)]
        end_time: String,
    },
    /// Map a verdict from the conflict service to a notification
    Present {
        /// JSON file with the verdict (stdin if omitted)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

pub fn run(action: ConflictAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConflictAction::Check {
            resource,
            start_date,
            start_time,
            end_date,
            end_time,
        } => {
            let check = CandidateCheck::from_fields(
                resource,
                &start_date,
                &start_time,
                &end_date,
                &end_time,
            )
            .ok_or("select a resource and fill in the time range first")?;
            println!("{}", serde_json::to_string_pretty(&check)?);
        }
        ConflictAction::Present { file } => {
            let verdict: ConflictVerdict = serde_json::from_str(&read_input(file.as_deref())?)?;
            let shown = presentation(&verdict);
            tracing::debug!(
                kind = verdict.kind.as_str(),
                severity = shown.severity.as_str(),
                "verdict presented"
            );
            println!("{}", serde_json::to_string_pretty(&shown)?);
        }
    }
    Ok(())
}
