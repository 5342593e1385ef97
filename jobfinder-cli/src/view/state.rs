//! View state container
//!
//! Everything the view shows lives here. Fields are only changed through
//! the setters below so every mutation is visible at a call site.

use jobfinder_core::domain::job::Job;
use jobfinder_core::domain::resume::ResumeFile;
use jobfinder_core::domain::status::Status;

/// State of one job finder view, from activation to teardown
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    company: String,
    jobs: Vec<Job>,
    selected: Option<Job>,
    resume: Option<ResumeFile>,
    status: Status,
    search_loading: bool,
    apply_loading: bool,
}

impl ViewState {
    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn selected(&self) -> Option<&Job> {
        self.selected.as_ref()
    }

    pub fn resume(&self) -> Option<&ResumeFile> {
        self.resume.as_ref()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn search_loading(&self) -> bool {
        self.search_loading
    }

    pub fn apply_loading(&self) -> bool {
        self.apply_loading
    }

    /// Whether `job` is the selected one; jobs are compared by id
    pub fn is_selected(&self, job: &Job) -> bool {
        self.selected.as_ref().is_some_and(|s| s.id == job.id)
    }

    /// Replaces the company search text
    pub fn set_company(&mut self, company: impl Into<String>) {
        self.company = company.into();
    }

    /// Replaces the whole job list
    ///
    /// No merging happens. The selection is left alone even when the new
    /// list no longer contains it.
    ///
    /// Returns whether the list actually changed.
    pub fn replace_jobs(&mut self, jobs: Vec<Job>) -> bool {
        if self.jobs == jobs {
            return false;
        }
        self.jobs = jobs;
        true
    }

    /// Selects the job with `id` from the current list
    ///
    /// Returns `false` and keeps the previous selection if no job matches.
    pub fn select_by_id(&mut self, id: &str) -> bool {
        match self.jobs.iter().find(|job| job.id == id) {
            Some(job) => {
                self.selected = Some(job.clone());
                true
            }
            None => false,
        }
    }

    /// Sets or clears the chosen resume file
    pub fn set_resume(&mut self, resume: Option<ResumeFile>) {
        self.resume = resume;
    }

    /// Replaces the status banner
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub fn set_search_loading(&mut self, loading: bool) {
        self.search_loading = loading;
    }

    pub fn set_apply_loading(&mut self, loading: bool) {
        self.apply_loading = loading;
    }
}
