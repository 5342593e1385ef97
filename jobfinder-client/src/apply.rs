//! Apply endpoint

use crate::BridgeClient;
use crate::error::Result;
use jobfinder_core::dto::apply::ApplyRequest;
use jobfinder_core::dto::reply::BridgeReply;

impl BridgeClient {
    /// Ask the apply agent to submit an application
    ///
    /// # Arguments
    /// * `job_id` - ID of the job to apply for
    /// * `resume_name` - File name of the resume the agent should use
    ///
    /// # Returns
    /// The bridge's human-readable outcome
    pub async fn apply(&self, job_id: &str, resume_name: &str) -> Result<BridgeReply> {
        let url = self.url("/apply");
        let response = self
            .client
            .post(&url)
            .json(&ApplyRequest {
                job_id: job_id.to_string(),
                resume_name: resume_name.to_string(),
            })
            .send()
            .await?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{BridgeClient, ClientError};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn apply_posts_job_and_resume() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/apply"))
            .and(body_json(serde_json::json!({
                "job_id": "42",
                "resume_name": "cv_final.pdf"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "success",
                "result": "Application submitted for 42"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = BridgeClient::new(server.uri());
        let reply = client.apply("42", "cv_final.pdf").await.unwrap();

        assert_eq!(reply.result, "Application submitted for 42");
    }

    #[tokio::test]
    async fn apply_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/apply"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = BridgeClient::new(server.uri());
        let err = client.apply("42", "default_resume.txt").await.unwrap_err();

        assert_eq!(err.kind(), "status");
        assert!(matches!(err, ClientError::ApiError { status: 404, .. }));
    }
}
