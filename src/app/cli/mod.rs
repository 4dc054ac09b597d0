//! CLI Adapter.

use std::io::ErrorKind;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dialoguer::{Error as DialoguerError, Input};

use crate::app::api::{self, AnalyzeOptions, DEFAULT_CHANNEL_ID};
use crate::app::commands::analyze;
use crate::app::render::render_report;
use crate::domain::configuration::{DEFAULT_CONFIG_PATH, DEFAULT_SECRETS_PATH};
use crate::domain::{AnalysisOutcome, AppError};

/// Exit code when the channel lookup finds nothing.
pub const EXIT_CHANNEL_NOT_FOUND: i32 = 2;

#[derive(Parser)]
#[command(name = "tubemind")]
#[command(version)]
#[command(
    about = "Summarize a YouTube channel's recent uploads with an AI content consultant",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the latest uploads of a channel and generate a consultant report
    #[clap(visible_alias = "a")]
    Analyze {
        /// YouTube channel ID
        #[arg(default_value = DEFAULT_CHANNEL_ID)]
        channel_id: String,
        /// Ask for the channel ID interactively (positional value becomes the default)
        #[arg(short, long)]
        interactive: bool,
        /// Show the assembled prompt without calling the model
        #[arg(long)]
        prompt_preview: bool,
        /// Configuration file (optional; defaults apply when absent)
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
        /// Secrets file holding YOUTUBE_API_KEY and GEMINI_API_KEY
        #[arg(long, default_value = DEFAULT_SECRETS_PATH)]
        secrets: PathBuf,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Analyze { channel_id, interactive, prompt_preview, config, secrets } => {
            run_analyze(channel_id, interactive, prompt_preview, config, secrets)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_analyze(
    channel_id: String,
    interactive: bool,
    prompt_preview: bool,
    config: PathBuf,
    secrets: PathBuf,
) -> Result<i32, AppError> {
    // Credentials are checked before asking for input or issuing requests.
    let ctx = api::create_context(&config, &secrets)?;

    let channel_id = if interactive {
        match prompt_channel_id(channel_id)? {
            Some(value) => value,
            None => return Ok(0),
        }
    } else {
        channel_id
    };

    eprintln!("Fetching channel data for {}...", channel_id.trim());
    let options = AnalyzeOptions { channel_id, prompt_preview };

    match analyze::execute(&ctx, &options)? {
        AnalysisOutcome::ChannelNotFound { channel_id } => {
            tracing::warn!(%channel_id, "channel lookup returned no items");
            eprintln!("Channel not found! Check the ID.");
            Ok(EXIT_CHANNEL_NOT_FOUND)
        }
        AnalysisOutcome::Completed(report) => {
            print!("{}", render_report(&report));
            Ok(0)
        }
    }
}

fn prompt_channel_id(default: String) -> Result<Option<String>, AppError> {
    match Input::new().with_prompt("YouTube Channel ID").default(default).interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::InvalidInput(format!("Failed to read channel ID: {}", err))),
    }
}
