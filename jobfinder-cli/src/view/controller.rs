//! View controller
//!
//! Owns the view state and runs the three bridge calls against it: the job
//! list refresh, the search trigger and the apply trigger. Every state change
//! wakes whoever is waiting in [`JobFinder::wait_for_change`] so the view can
//! be redrawn.
//!
//! The search and apply triggers are split in two halves. `begin_*` does the
//! synchronous part (validation, loading flag, first status) and returns the
//! request to send; `complete_*` awaits the bridge and writes the outcome.
//! The interactive view runs the first half inline and spawns the second,
//! which keeps the poller and the input loop responsive during slow calls.

use jobfinder_client::{ClientError, JobBoard};
use jobfinder_core::domain::resume::{ResumeFile, resume_name};
use jobfinder_core::domain::status::Status;
use jobfinder_core::dto::apply::ApplyRequest;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;
use tracing::{debug, info, warn};

use super::state::ViewState;

pub const SEARCH_FAILED: &str = "Search failed";
pub const APPLY_FAILED: &str = "Application failed";
pub const NO_JOB_SELECTED: &str = "Please select a job first";

/// Handle to one job finder view
///
/// Cloning is cheap and every clone works on the same state.
#[derive(Clone)]
pub struct JobFinder {
    board: Arc<dyn JobBoard>,
    state: Arc<Mutex<ViewState>>,
    changed: Arc<Notify>,
}

impl JobFinder {
    pub fn new(board: Arc<dyn JobBoard>) -> Self {
        Self {
            board,
            state: Arc::new(Mutex::new(ViewState::default())),
            changed: Arc::new(Notify::new()),
        }
    }

    /// Copy of the current state, for rendering
    pub fn snapshot(&self) -> ViewState {
        self.lock().clone()
    }

    /// Reads one value out of the current state
    pub fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.lock())
    }

    /// Resolves after the next state change
    ///
    /// Changes made while nobody waits are remembered, so a change between
    /// two waits is never lost. Several changes may be reported by one wake-up.
    pub async fn wait_for_change(&self) {
        self.changed.notified().await;
    }

    fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        let result = f(&mut self.lock());
        self.changed.notify_one();
        result
    }

    // =============================================================================
    // Form fields
    // =============================================================================

    /// Replaces the company search text
    pub fn set_company(&self, company: impl Into<String>) {
        let company = company.into();
        self.update(|state| state.set_company(company));
    }

    /// Selects a job from the current list by id
    ///
    /// Returns `false` and reports an error status when the id is not listed.
    pub fn select_job(&self, id: &str) -> bool {
        self.update(|state| {
            if state.select_by_id(id) {
                true
            } else {
                state.set_status(Status::error(format!("No job with ID {} in the list", id)));
                false
            }
        })
    }

    /// Chooses the resume file to apply with, or clears the choice
    ///
    /// Returns `false` and reports an error status when the path is not an
    /// existing file.
    pub async fn choose_resume(&self, path: Option<&Path>) -> bool {
        let Some(path) = path else {
            self.update(|state| state.set_resume(None));
            return true;
        };

        let is_file = tokio::fs::metadata(path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false);

        match ResumeFile::from_path(path).filter(|_| is_file) {
            Some(resume) => {
                debug!(name = %resume.name, "resume file chosen");
                self.update(|state| state.set_resume(Some(resume)));
                true
            }
            None => {
                let message = format!("Resume file not found: {}", path.display());
                self.update(|state| state.set_status(Status::error(message)));
                false
            }
        }
    }

    // =============================================================================
    // Job list
    // =============================================================================

    /// Fetches the job list and replaces the current one
    ///
    /// Failures are logged and leave both the list and the status untouched.
    pub async fn refresh_jobs(&self) {
        match self.board.list_jobs().await {
            Ok(jobs) => {
                let count = jobs.len();
                let changed = self.lock().replace_jobs(jobs);
                if changed {
                    debug!(count, "job list changed");
                    self.changed.notify_one();
                }
            }
            Err(e) => log_failure("list jobs", &e),
        }
    }

    // =============================================================================
    // Search
    // =============================================================================

    /// Runs the whole search trigger
    pub async fn search(&self) {
        if let Some(company) = self.begin_search() {
            self.complete_search(company).await;
        }
    }

    /// Starts a search for the current company text
    ///
    /// Returns `None` without touching anything when the text is empty.
    pub fn begin_search(&self) -> Option<String> {
        self.update(|state| {
            if state.company().is_empty() {
                return None;
            }
            let company = state.company().to_string();
            state.set_search_loading(true);
            state.set_status(Status::info(format!(
                "Searching for jobs at {}...",
                company
            )));
            Some(company)
        })
    }

    /// Sends the search and records its outcome
    ///
    /// The job list is refreshed only when the search succeeded.
    pub async fn complete_search(&self, company: String) {
        info!(company = %company, "searching for jobs");

        let succeeded = match self.board.search(&company).await {
            Ok(reply) => {
                self.update(|state| {
                    state.set_status(Status::success(reply.result));
                    state.set_search_loading(false);
                });
                true
            }
            Err(e) => {
                log_failure("search", &e);
                self.update(|state| {
                    state.set_status(Status::error(SEARCH_FAILED));
                    state.set_search_loading(false);
                });
                false
            }
        };

        if succeeded {
            self.refresh_jobs().await;
        }
    }

    // =============================================================================
    // Apply
    // =============================================================================

    /// Runs the whole apply trigger
    pub async fn apply(&self) {
        if let Some(req) = self.begin_apply() {
            self.complete_apply(req).await;
        }
    }

    /// Starts an application for the selected job
    ///
    /// Returns `None` and reports an error status when nothing is selected.
    pub fn begin_apply(&self) -> Option<ApplyRequest> {
        self.update(|state| {
            let Some(job) = state.selected() else {
                state.set_status(Status::error(NO_JOB_SELECTED));
                return None;
            };
            let req = ApplyRequest {
                job_id: job.id.clone(),
                resume_name: resume_name(state.resume()).to_string(),
            };
            state.set_apply_loading(true);
            state.set_status(Status::info(format!("Applying for {}...", req.job_id)));
            Some(req)
        })
    }

    /// Sends the application and records its outcome
    pub async fn complete_apply(&self, req: ApplyRequest) {
        info!(job_id = %req.job_id, resume = %req.resume_name, "submitting application");

        let status = match self.board.apply(&req.job_id, &req.resume_name).await {
            Ok(reply) => Status::success(reply.result),
            Err(e) => {
                log_failure("apply", &e);
                Status::error(APPLY_FAILED)
            }
        };

        self.update(|state| {
            state.set_status(status);
            state.set_apply_loading(false);
        });
    }
}

fn log_failure(operation: &str, err: &ClientError) {
    let kind = err.kind();
    match err {
        ClientError::RequestFailed(e) => {
            warn!(operation, kind, "bridge unreachable: {}", e);
        }
        ClientError::ApiError { status, message } => {
            warn!(operation, kind, status, "bridge rejected request: {}", message);
        }
        ClientError::ParseError(msg) => {
            warn!(operation, kind, "malformed bridge response: {}", msg);
        }
    }
}
