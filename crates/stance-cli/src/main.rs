//! stance CLI: political sentiment timeline in the terminal

use clap::{Parser, Subcommand};
use stance_engine::{layout, Config, Dataset};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "STANCE_LOG";

/// Interactive timeline of a persona's political sentiment
#[derive(Parser)]
#[command(name = "stance")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the timeline (default when no command specified)
    Tui {
        /// Event file to show instead of the configured dataset
        #[arg(long)]
        data: Option<PathBuf>,

        /// Config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write logs to this file (the TUI never logs to the terminal)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Print the computed coordinates of every event
    Layout {
        /// Event file (defaults to the sample)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check an event file
    Validate {
        /// Event file to check
        path: PathBuf,
    },

    /// Print the sample dataset as JSON
    Sample,
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None => cmd_tui(None, None, None),
        Some(Commands::Tui {
            data,
            config,
            log_file,
        }) => cmd_tui(data, config.as_deref(), log_file.as_deref()),
        Some(Commands::Layout { data, json }) => {
            init_stderr_logging();
            cmd_layout(data.as_deref(), json)
        }
        Some(Commands::Validate { path }) => {
            init_stderr_logging();
            cmd_validate(&path)
        }
        Some(Commands::Sample) => {
            init_stderr_logging();
            cmd_sample()
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

fn init_file_logging(path: &Path) -> CliResult {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_dataset(data: Option<&Path>) -> Result<Dataset, stance_engine::DatasetError> {
    match data {
        Some(path) => Dataset::load(path),
        None => Ok(Dataset::sample()),
    }
}

fn cmd_tui(data: Option<PathBuf>, config: Option<&Path>, log_file: Option<&Path>) -> CliResult {
    if let Some(path) = log_file {
        init_file_logging(path)?;
    }

    let mut config = match config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if data.is_some() {
        config.dataset = data;
    }
    let dataset = config.load_dataset()?;
    info!(events = dataset.len(), "dataset loaded");

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(stance_tui::run_tui(&config, dataset))
}

fn cmd_layout(data: Option<&Path>, json: bool) -> CliResult {
    let dataset = load_dataset(data)?;

    if json {
        let positions = layout(dataset.events());
        println!("{}", serde_json::to_string_pretty(&positions)?);
    } else {
        print!("{}", format_layout(&dataset));
    }
    Ok(())
}

/// Fixed-width table of events and their coordinates.
fn format_layout(dataset: &Dataset) -> String {
    let mut out = format!(
        "{:<4}{:<12}{:>6}  {:<8}{:>7}{:>7}\n",
        "id", "date", "sent", "weight", "x", "y"
    );
    for (event, pos) in dataset.events().iter().zip(layout(dataset.events())) {
        out.push_str(&format!(
            "{:<4}{:<12}{:>+6.2}  {:<8}{:>7.1}{:>7.1}\n",
            event.id.to_string(),
            event.date_str(),
            event.sentiment,
            event.importance.label(),
            pos.x,
            pos.y,
        ));
    }
    out
}

fn cmd_validate(path: &Path) -> CliResult {
    let dataset = Dataset::load(path)?;
    let flagged = dataset
        .events()
        .iter()
        .filter(|e| e.consistency.is_inconsistent())
        .count();

    println!(
        "{}: {} event(s), {flagged} flagged inconsistent",
        path.display(),
        dataset.len()
    );
    Ok(())
}

fn cmd_sample() -> CliResult {
    println!("{}", Dataset::sample().to_json()?);
    Ok(())
}
