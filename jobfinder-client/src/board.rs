//! The seam between the view and the bridge
//!
//! The view only needs three calls. Putting them behind a trait lets the
//! view run against the real HTTP client or an in-memory board in tests.

use async_trait::async_trait;
use jobfinder_core::domain::job::Job;
use jobfinder_core::dto::reply::BridgeReply;

use crate::BridgeClient;
use crate::error::Result;

/// Backend operations the job finder view depends on
#[async_trait]
pub trait JobBoard: Send + Sync {
    /// Fetches the current job list
    async fn list_jobs(&self) -> Result<Vec<Job>>;

    /// Triggers a search for jobs at `company`
    async fn search(&self, company: &str) -> Result<BridgeReply>;

    /// Submits an application for `job_id` using `resume_name`
    async fn apply(&self, job_id: &str, resume_name: &str) -> Result<BridgeReply>;
}

#[async_trait]
impl JobBoard for BridgeClient {
    async fn list_jobs(&self) -> Result<Vec<Job>> {
        BridgeClient::list_jobs(self).await
    }

    async fn search(&self, company: &str) -> Result<BridgeReply> {
        BridgeClient::search(self, company).await
    }

    async fn apply(&self, job_id: &str, resume_name: &str) -> Result<BridgeReply> {
        BridgeClient::apply(self, job_id, resume_name).await
    }
}
