//! One-shot command handlers
//!
//! Each handler drives the same controller the interactive view uses, then
//! prints the relevant sections once.

use anyhow::{Context, Result, anyhow};
use colored::*;
use jobfinder_client::{BridgeClient, JobBoard};
use jobfinder_core::domain::status::Status;
use std::path::PathBuf;
use std::sync::Arc;

use crate::view::render::{results_section, status_section};
use crate::view::{JobFinder, ViewState};

/// Print the job list once
pub async fn list_jobs(client: &BridgeClient) -> Result<()> {
    let jobs = client
        .list_jobs()
        .await
        .context("Failed to fetch jobs from the bridge")?;

    let mut state = ViewState::default();
    state.replace_jobs(jobs);
    print_lines(results_section(&state));

    Ok(())
}

/// Run a search and print the outcome and the refreshed list
pub async fn search(board: Arc<dyn JobBoard>, company: String) -> Result<ViewState> {
    if company.is_empty() {
        anyhow::bail!("company name cannot be empty");
    }

    let finder = JobFinder::new(board);
    finder.set_company(company);
    finder.search().await;

    let state = finder.snapshot();
    finish(state.status())?;
    println!();
    print_lines(results_section(&state));

    Ok(state)
}

/// Select a listed job and apply for it
pub async fn apply(
    board: Arc<dyn JobBoard>,
    job_id: &str,
    resume: Option<PathBuf>,
) -> Result<ViewState> {
    let finder = JobFinder::new(board);
    finder.refresh_jobs().await;

    let ready = finder.select_job(job_id) && finder.choose_resume(resume.as_deref()).await;
    if ready {
        println!("{}", format!("Applying for {}...", job_id).dimmed());
        finder.apply().await;
    }

    let state = finder.snapshot();
    finish(state.status())?;
    Ok(state)
}

/// Prints a final status, turning an error status into a failed command
fn finish(status: &Status) -> Result<()> {
    if status.is_error() {
        return Err(anyhow!("{}", status.message));
    }
    print_lines(status_section(status));
    Ok(())
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}
