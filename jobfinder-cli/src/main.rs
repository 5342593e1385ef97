//! Job Finder CLI
//!
//! Terminal front end for the Job Finder bridge: search for jobs at a
//! company, pick one and let the apply agent submit an application.

mod commands;
mod config;
mod scheduler;
mod view;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jobfinder")]
#[command(about = "Search and apply for jobs through the agent bridge", long_about = None)]
struct Cli {
    /// Bridge URL
    #[arg(
        long,
        env = "JOBFINDER_BRIDGE_URL",
        default_value = jobfinder_client::DEFAULT_BRIDGE_URL
    )]
    bridge_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "JOBFINDER_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never mix into the rendered view.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobfinder=warn,jobfinder_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::new(cli.bridge_url, Duration::from_secs(cli.timeout_secs));
    config.validate()?;

    handle_command(cli.command.unwrap_or(Commands::Watch), &config).await
}
