//! Interactive view
//!
//! Draws the view, keeps the job list fresh through the poller and turns
//! input lines into view actions until the user quits or stdin closes.

use anyhow::Result;
use colored::*;
use jobfinder_client::BridgeClient;
use std::io::{BufRead, IsTerminal, Write};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::scheduler::{JobPoller, POLL_INTERVAL};
use crate::view::JobFinder;
use crate::view::input::{Command, HELP};
use crate::view::render::render;

/// Run the interactive view until it is closed
pub async fn run_watch(client: BridgeClient) -> Result<()> {
    info!("Opening job finder view on {}", client.base_url());

    let finder = JobFinder::new(Arc::new(client));
    let poller = JobPoller::new(finder.clone(), POLL_INTERVAL).start();
    let mut input = spawn_input_reader();

    draw(&finder);
    println!("{}", "Type 'help' for commands.".dimmed());

    loop {
        tokio::select! {
            _ = finder.wait_for_change() => draw(&finder),
            line = input.recv() => {
                // stdin closed
                let Some(line) = line else { break };

                match line.parse::<Command>() {
                    Ok(Command::Quit) => break,
                    Ok(command) => dispatch(&finder, command).await,
                    Err(e) => eprintln!("{}", e.to_string().red()),
                }
            }
        }
    }

    poller.stop();
    info!("Job finder view closed");
    Ok(())
}

async fn dispatch(finder: &JobFinder, command: Command) {
    debug!(?command, "input");

    match command {
        Command::Company(company) => finder.set_company(company),
        Command::Search(company) => {
            if let Some(company) = company {
                finder.set_company(company);
            }
            if finder.read(|s| s.search_loading()) {
                hint("A search is already running.");
            } else if let Some(company) = finder.begin_search() {
                let finder = finder.clone();
                tokio::spawn(async move { finder.complete_search(company).await });
            } else {
                hint("Enter a company name first: company <text>");
            }
        }
        Command::Select(id) => {
            finder.select_job(&id);
        }
        Command::Resume(path) => {
            finder.choose_resume(path.as_deref()).await;
        }
        Command::Apply => {
            if finder.read(|s| s.apply_loading()) {
                hint("An application is already being submitted.");
            } else if let Some(req) = finder.begin_apply() {
                let finder = finder.clone();
                tokio::spawn(async move { finder.complete_apply(req).await });
            }
        }
        Command::Refresh => {
            let finder = finder.clone();
            tokio::spawn(async move { finder.refresh_jobs().await });
        }
        Command::Show => draw(finder),
        Command::Help => println!("{}", HELP),
        Command::Quit => {}
    }
}

fn draw(finder: &JobFinder) {
    let view = render(&finder.snapshot());
    let mut stdout = std::io::stdout().lock();
    if stdout.is_terminal() {
        // Clear the screen and move the cursor home.
        let _ = write!(stdout, "\x1B[2J\x1B[H");
    }
    let _ = writeln!(stdout, "{}\n", view);
    let _ = stdout.flush();
}

fn hint(message: &str) {
    println!("{}", message.yellow());
}

/// Forwards stdin lines from a dedicated thread
fn spawn_input_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);

    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });

    rx
}
