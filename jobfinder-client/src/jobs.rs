//! Job listing endpoint

use crate::BridgeClient;
use crate::error::Result;
use jobfinder_core::domain::job::Job;
use tracing::debug;

impl BridgeClient {
    /// List all jobs the bridge currently knows about
    ///
    /// # Returns
    /// The full job list, in the order the bridge returned it
    pub async fn list_jobs(&self) -> Result<Vec<Job>> {
        let url = self.url("/jobs");
        let response = self.client.get(&url).send().await?;

        let jobs: Vec<Job> = self.handle_response(response).await?;
        debug!(count = jobs.len(), "fetched job list");
        Ok(jobs)
    }
}

#[cfg(test)]
mod tests {
    use crate::{BridgeClient, ClientError};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn list_jobs_parses_array() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/jobs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": "acme_0",
                    "title": "Acme Software Engineer",
                    "company": "Acme",
                    "description": "Build things",
                    "url": "http://example.com/job1"
                },
                { "id": "acme_1", "title": "Acme Data Scientist", "description": null }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = BridgeClient::new(server.uri());
        let jobs = client.list_jobs().await.unwrap();

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].id, "acme_0");
        assert_eq!(jobs[1].description, "");
        assert_eq!(jobs[1].display_company(), "Google");
    }

    #[tokio::test]
    async fn list_jobs_empty() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/jobs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let client = BridgeClient::new(server.uri());
        assert!(client.list_jobs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_jobs_invalid_json_is_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/jobs"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = BridgeClient::new(server.uri());
        let err = client.list_jobs().await.unwrap_err();

        assert!(matches!(err, ClientError::ParseError(_)));
    }

    #[tokio::test]
    async fn list_jobs_server_error_is_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/jobs"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = BridgeClient::new(server.uri());
        let err = client.list_jobs().await.unwrap_err();

        match err {
            ClientError::ApiError { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn list_jobs_unreachable_is_request_failed() {
        // Nothing listens on the discard port.
        let client = BridgeClient::new("http://127.0.0.1:9");
        let err = client.list_jobs().await.unwrap_err();

        assert!(matches!(err, ClientError::RequestFailed(_)));
        assert_eq!(err.kind(), "network");
    }
}
