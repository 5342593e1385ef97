//! Search endpoint

use crate::BridgeClient;
use crate::error::Result;
use jobfinder_core::dto::reply::BridgeReply;
use jobfinder_core::dto::search::SearchRequest;

impl BridgeClient {
    /// Ask the search agent to look for jobs at a company
    ///
    /// The bridge stores whatever the agent finds; call
    /// [`BridgeClient::list_jobs`] afterwards to see the new listings.
    ///
    /// # Arguments
    /// * `company` - Company name, sent verbatim
    ///
    /// # Returns
    /// The bridge's human-readable outcome
    pub async fn search(&self, company: &str) -> Result<BridgeReply> {
        let url = self.url("/search");
        let response = self
            .client
            .post(&url)
            .json(&SearchRequest {
                company: company.to_string(),
            })
            .send()
            .await?;

        self.handle_response(response).await
    }
}
