//! In-memory job board for view tests

use async_trait::async_trait;
use jobfinder_client::{ClientError, JobBoard, Result};
use jobfinder_core::domain::job::Job;
use jobfinder_core::dto::reply::BridgeReply;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub fn job(id: &str) -> Job {
    Job {
        id: id.to_string(),
        title: format!("Job {id}"),
        description: format!("Description of {id}"),
        company: None,
    }
}

/// A call the view made against the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListJobs,
    Search(String),
    Apply { job_id: String, resume_name: String },
}

/// Canned answer for one endpoint
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    Status(u16),
    Malformed,
}

impl<T: Clone> Reply<T> {
    fn get(&self) -> Result<T> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Status(status) => Err(ClientError::api_error(*status, "fake failure")),
            Reply::Malformed => Err(ClientError::ParseError("fake garbage".to_string())),
        }
    }
}

pub struct FakeBoard {
    calls: Mutex<Vec<Call>>,
    jobs: Mutex<Reply<Vec<Job>>>,
    search: Mutex<Reply<BridgeReply>>,
    apply: Mutex<Reply<BridgeReply>>,
    /// When set, `search` and `apply` wait for a permit before answering
    gate: Option<Arc<Notify>>,
}

impl Default for FakeBoard {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            jobs: Mutex::new(Reply::Ok(Vec::new())),
            search: Mutex::new(Reply::Ok(reply("search done"))),
            apply: Mutex::new(Reply::Ok(reply("application sent"))),
            gate: None,
        }
    }
}

pub fn reply(result: &str) -> BridgeReply {
    BridgeReply {
        result: result.to_string(),
        status: Some("success".to_string()),
    }
}

impl FakeBoard {
    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn set_jobs(&self, jobs: Reply<Vec<Job>>) {
        *self.jobs.lock().unwrap() = jobs;
    }

    pub fn set_search(&self, search: Reply<BridgeReply>) {
        *self.search.lock().unwrap() = search;
    }

    pub fn set_apply(&self, apply: Reply<BridgeReply>) {
        *self.apply.lock().unwrap() = apply;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::ListJobs))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    async fn wait_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }
}

#[async_trait]
impl JobBoard for FakeBoard {
    async fn list_jobs(&self) -> Result<Vec<Job>> {
        self.record(Call::ListJobs);
        self.jobs.lock().unwrap().get()
    }

    async fn search(&self, company: &str) -> Result<BridgeReply> {
        self.record(Call::Search(company.to_string()));
        self.wait_gate().await;
        let answer = self.search.lock().unwrap().get();
        answer
    }

    async fn apply(&self, job_id: &str, resume_name: &str) -> Result<BridgeReply> {
        self.record(Call::Apply {
            job_id: job_id.to_string(),
            resume_name: resume_name.to_string(),
        });
        self.wait_gate().await;
        let answer = self.apply.lock().unwrap().get();
        answer
    }
}
