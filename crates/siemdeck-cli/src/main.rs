//! siemdeck: terminal dashboard for a simulated SIEM and incident-response pipeline

mod commands;
mod logging;
mod tui;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use siemdeck_core::{AnalysisClient, Config};

#[derive(Parser)]
#[command(
    name = "siemdeck",
    about = "Terminal dashboard for a simulated cloud-native SIEM & incident-response pipeline",
    version,
    long_about = None
)]
struct Cli {
    /// Config file (defaults to <config dir>/siemdeck/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard (default)
    Tui,

    /// Run the markup formatter over a file, or stdin when no file is given
    Format {
        file: Option<PathBuf>,

        /// Print blocks as JSON
        #[arg(long)]
        json: bool,
    },

    /// One-shot AI analysis of a mock alert
    Analyze {
        /// Alert id, e.g. alert-004
        alert_id: String,
    },

    /// List mock alerts, newest first
    Alerts,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            let log_file = config.log_file();
            logging::init_file(&log_file, &config.logging.level)?;
            tracing::info!(log = %log_file.display(), "Starting dashboard");

            let client = AnalysisClient::from_config(&config).context("failed to set up AI client")?;
            tui::run(&config, client).await?;
        }
        Commands::Format { file, json } => {
            logging::init_stderr(&config.logging.level);
            commands::format_file(file.as_deref(), json)?;
        }
        Commands::Analyze { alert_id } => {
            logging::init_stderr(&config.logging.level);
            if !commands::analyze(&config, &alert_id).await? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Alerts => {
            logging::init_stderr(&config.logging.level);
            commands::list_alerts();
        }
    }

    Ok(ExitCode::SUCCESS)
}
