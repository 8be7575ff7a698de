//! cshare - submit code for an energy-efficiency rewrite
//!
//! CLI binary for optimizing code and sharing the result on the board.

use anyhow::Result;
use carbon_share::Config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "cshare")]
#[command(about = "Submit code for an energy-efficiency rewrite and share it")]
#[command(version)]
struct Cli {
    /// Backend base URL (overrides the config file and CSHARE_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit code for optimization and optionally publish the result
    Submit {
        /// File to read code from (stdin when omitted or "-")
        file: Option<PathBuf>,

        /// Country reported with the submission
        #[arg(long)]
        country: Option<String>,
    },

    /// Check that a GitHub ID exists
    Verify {
        /// GitHub ID to look up
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api_url = Some(url);
    }

    match cli.command {
        Commands::Submit { file, country } => {
            cli::run_submit(
                &config,
                cli::SubmitOptions {
                    file: file.as_deref(),
                    country: country.as_deref(),
                },
            )
            .await?;
        }
        Commands::Verify { name } => {
            cli::run_verify(&config, &name).await?;
        }
    }

    Ok(())
}
