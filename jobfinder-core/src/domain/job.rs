//! Job domain types

use serde::{Deserialize, Deserializer, Serialize};

/// Company shown for a job whose listing does not name one
pub const DEFAULT_COMPANY: &str = "Google";

/// A job listing as returned by the bridge
///
/// Received verbatim and never mutated locally. Extra fields the bridge
/// stores alongside a listing (such as `url`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl Job {
    /// Company name to display, falling back to [`DEFAULT_COMPANY`]
    pub fn display_company(&self) -> &str {
        match self.company.as_deref() {
            Some(company) if !company.is_empty() => company,
            _ => DEFAULT_COMPANY,
        }
    }
}

// Search results scraped by the backend may carry `null` titles or bodies.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
