//! Resume Tracker CLI - fetch, review and export hh.ru candidates

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use resume_tracker::config::{self, TrackerConfig};
use resume_tracker::ui::{self, Icons};
use resume_tracker::{CandidateStatus, Tracker};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "resume-tracker")]
#[command(version)]
#[command(about = "Pull resumes from hh.ru into SQLite, review them, export to a spreadsheet")]
#[command(long_about = r#"
Resume Tracker keeps a small hiring pipeline in a local SQLite file:
  • Fetch resume summaries from the hh.ru search API
  • Move candidates between New, Shortlisted, Rejected and Interview
  • Export the whole list to a CSV spreadsheet
  • Review everything in a browser form

Example usage:
  resume-tracker fetch --query "Python Developer"
  resume-tracker status --id 2 --status Interview
  resume-tracker serve --port 8501
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the database file (overrides config)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter config file
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Search hh.ru and save every result as a New candidate
    Fetch {
        /// Free-text search, e.g. a job title
        #[arg(short, long)]
        query: String,
    },

    /// List stored candidates
    List,

    /// Change the status of one candidate
    Status {
        /// Candidate id
        #[arg(short, long)]
        id: i64,

        /// New, Shortlisted, Rejected or Interview
        #[arg(short, long, value_parser = parse_status)]
        status: CandidateStatus,
    },

    /// Export all candidates to a spreadsheet
    Export {
        /// Destination file (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Start the web UI
    Serve {
        /// Override the configured host
        #[arg(long)]
        host: Option<String>,

        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn parse_status(raw: &str) -> Result<CandidateStatus, String> {
    raw.parse().map_err(|e: resume_tracker::Error| e.to_string())
}

fn resolve_config(cli: &Cli) -> anyhow::Result<TrackerConfig> {
    let mut config = config::load_config(cli.config.as_deref())?.unwrap_or_default();
    config.apply_env(|key| std::env::var(key).ok());
    if let Some(database) = &cli.database {
        config.database = database.clone();
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = resolve_config(&cli)?;

    match cli.command {
        Commands::Init { force } => {
            let path = cli.config.clone().unwrap_or_else(config::default_config_path);
            config::write_config(&path, &TrackerConfig::default(), force)?;
            ui::success(&format!("Config written to {}", path.display()));
            ui::summary_row("Set", "HH_API_TOKEN or [api].token before fetching");
        }

        Commands::Fetch { query } => {
            let tracker = Tracker::from_config(&config)?;
            ui::header(&format!("Fetching resumes for '{}'", query));
            ui::info("Database", &config.database.display().to_string());

            let report = tracker.fetch_and_store(&query)?;
            if let Some(failure) = &report.failure {
                ui::warn(&format!("Resume search failed: {}", failure));
            }
            ui::success(&format!("{} resumes saved!", report.saved()));
        }

        Commands::List => {
            let tracker = Tracker::from_config(&config)?;
            let candidates = tracker.candidates()?;

            ui::section(&format!("{} Candidates", Icons::LIST));
            if candidates.is_empty() {
                println!("∅ No candidates stored yet.");
            } else {
                let colored = console::Term::stdout().is_term();
                println!("{}", ui::candidates_table(&candidates, colored));
                ui::summary_row("Total:", &candidates.len().to_string());
            }
        }

        Commands::Status { id, status } => {
            let tracker = Tracker::from_config(&config)?;
            if tracker.set_status(id, status)? {
                ui::success(&format!("Candidate {} is now {}", id, status));
            } else {
                ui::warn(&format!("No candidate with id {}; nothing changed", id));
            }
        }

        Commands::Export { output } => {
            let tracker = Tracker::from_config(&config)?;
            let report = match output {
                Some(path) => tracker.export_to(&path)?,
                None => tracker.export()?,
            };
            ui::success(&format!(
                "{} Exported {} candidates to {}",
                Icons::EXPORT,
                report.rows,
                report.path.display()
            ));
        }

        Commands::Serve { host, port } => {
            let tracker = Tracker::from_config(&config)?;
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(resume_tracker::server::start_server(&host, port, tracker))?;
        }
    }

    Ok(())
}
