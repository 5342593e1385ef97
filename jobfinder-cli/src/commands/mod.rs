//! Commands module
//!
//! Defines the CLI subcommands and their handlers.

mod once;
mod watch;

use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive view (the default)
    Watch,
    /// List the jobs the bridge currently knows about
    Jobs,
    /// Search for jobs at a company
    Search {
        /// Company name, sent as given
        company: String,
    },
    /// Apply for a listed job
    Apply {
        /// ID of the job, as shown by `jobs`
        job_id: String,

        /// Resume file to apply with; only its file name is sent
        #[arg(short, long)]
        resume: Option<PathBuf>,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        Commands::Watch => watch::run_watch(client).await,
        Commands::Jobs => once::list_jobs(&client).await,
        Commands::Search { company } => {
            once::search(Arc::new(client), company).await?;
            Ok(())
        }
        Commands::Apply { job_id, resume } => {
            once::apply(Arc::new(client), &job_id, resume).await?;
            Ok(())
        }
    }
}
