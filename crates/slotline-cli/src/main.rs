use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "slotline", version, about = "Slotline CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Date/time field helpers
    Time {
        #[command(subcommand)]
        action: commands::time::TimeAction,
    },
    /// Query window resolution
    Range {
        #[command(subcommand)]
        action: commands::range::RangeAction,
    },
    /// Timeline projection
    Timeline {
        #[command(subcommand)]
        action: commands::timeline::TimelineAction,
    },
    /// Conflict checks and verdict presentation
    Conflict {
        #[command(subcommand)]
        action: commands::conflict::ConflictAction,
    },
    /// Tag-to-label lookups
    Label {
        #[command(subcommand)]
        action: commands::label::LabelAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SLOTLINE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Time { action } => commands::time::run(action),
        Commands::Range { action } => commands::range::run(action),
        Commands::Timeline { action } => commands::timeline::run(action),
        Commands::Conflict { action } => commands::conflict::run(action),
        Commands::Label { action } => commands::label::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "slotline", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
