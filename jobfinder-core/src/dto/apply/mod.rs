//! Apply DTOs

use serde::{Deserialize, Serialize};

/// Body of `POST /apply`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyRequest {
    pub job_id: String,
    pub resume_name: String,
}
