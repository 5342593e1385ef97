//! Search DTOs

use serde::{Deserialize, Serialize};

/// Body of `POST /search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Company name, sent exactly as typed
    pub company: String,
}
