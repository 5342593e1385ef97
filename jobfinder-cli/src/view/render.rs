//! Terminal rendering of the view
//!
//! Rendering is a pure function of [`ViewState`]. Nothing here talks to the
//! bridge or changes state.

use colored::*;
use jobfinder_core::domain::job::Job;
use jobfinder_core::domain::status::{Status, StatusKind};

use super::state::ViewState;

/// Discovery document of the agents, shown as a fixed label
pub const DISCOVERY_PATH: &str = "/.well-known/agent-card.json";

/// Named agent channels shown in the protocol panel
const AGENTS: [&str; 2] = ["Search Agent", "Apply Agent"];

/// Renders the whole view
pub fn render(state: &ViewState) -> String {
    let mut lines = Vec::new();

    lines.push(format!("{}", "Agentic Job Finder".bold().cyan()));
    lines.push(format!("{}", "Search and Apply with A2A Protocol".dimmed()));
    lines.push(String::new());

    lines.extend(search_section(state));
    lines.push(String::new());
    lines.extend(results_section(state));
    lines.push(String::new());
    lines.extend(apply_section(state));
    lines.push(String::new());
    lines.extend(status_section(state.status()));
    lines.push(String::new());
    lines.extend(protocol_section());
    lines.push(String::new());
    lines.push(format!("{}", "Powered by Google ADK & A2A Protocol".dimmed()));

    lines.join("\n")
}

fn heading(icon: &str, title: &str) -> String {
    format!("{} {}", icon, title.bold())
}

fn button(label: &str, disabled: bool) -> String {
    let label = format!("[ {} ]", label);
    if disabled {
        format!("{}", label.dimmed())
    } else {
        format!("{}", label.bold())
    }
}

fn search_section(state: &ViewState) -> Vec<String> {
    let company = if state.company().is_empty() {
        format!("{}", "Enter company name...".dimmed())
    } else {
        state.company().to_string()
    };
    let label = if state.search_loading() {
        "Searching..."
    } else {
        "Search"
    };

    vec![
        heading("🔍", "Job Search"),
        format!("  Company: {}", company),
        format!("  {}", button(label, state.search_loading())),
    ]
}

/// Renders the job list section on its own
pub fn results_section(state: &ViewState) -> Vec<String> {
    let mut lines = vec![heading("📋", "Search Results")];

    if state.jobs().is_empty() {
        lines.push(format!(
            "  {}",
            "No jobs found yet. Start a search!".dimmed().italic()
        ));
        return lines;
    }

    for job in state.jobs() {
        lines.extend(job_row(job, state.is_selected(job)));
    }
    lines
}

fn job_row(job: &Job, selected: bool) -> Vec<String> {
    let marker = if selected {
        format!("{}", "▶".green().bold())
    } else {
        " ".to_string()
    };
    let title = if selected {
        job.title.green().bold()
    } else {
        job.title.cyan().bold()
    };

    vec![
        format!(" {} {}", marker, title),
        format!("    {}", job.description.dimmed()),
        format!(
            "    {}  {}",
            format!("ID: {}", job.id).dimmed(),
            job.display_company().blue()
        ),
    ]
}

fn apply_section(state: &ViewState) -> Vec<String> {
    let mut lines = vec![heading("🚀", "Apply for Job")];

    let Some(job) = state.selected() else {
        lines.push(format!(
            "  ☝️  {}",
            "Select a job from the list to apply".dimmed()
        ));
        return lines;
    };

    let resume = match state.resume() {
        Some(resume) => resume.name.clone(),
        None => format!("{}", "Select resume file".dimmed()),
    };
    let label = if state.apply_loading() {
        "Processing..."
    } else {
        "Submit Agent Application"
    };

    lines.push(format!("  {} {}", "Applying for:".dimmed(), job.title.bold()));
    lines.push(format!("  📄 {}", resume));
    lines.push(format!("  {}", button(label, state.apply_loading())));
    lines
}

/// Renders the status banner on its own
pub fn status_section(status: &Status) -> Vec<String> {
    let (icon, kind, message) = match status.kind {
        StatusKind::Error => ("❌", "ERROR".red().bold(), status.message.red()),
        StatusKind::Success => ("✅", "SUCCESS".green().bold(), status.message.green()),
        StatusKind::Info => ("💡", "INFO".blue().bold(), status.message.blue()),
    };

    vec![
        heading("🔔", "Agent Logs & Status"),
        format!("  {} {}", icon, kind),
        format!("     {}", message),
    ]
}

fn protocol_section() -> Vec<String> {
    let mut lines = vec![format!("  {}", "A2A PROTOCOL STATUS".dimmed().bold())];
    for agent in AGENTS {
        lines.push(format!("  {:<16}{}", agent, "● Online".green()));
    }
    lines.push(format!(
        "  {}",
        format!("{:<16}{}", "Discovery Path", DISCOVERY_PATH).dimmed()
    ));
    lines
}
