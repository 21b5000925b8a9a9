//! HTTP client for the one-shot onboarding submission.

use secrecy::{ExposeSecret, SecretString};

use crate::aggregate::OnboardingAggregate;
use crate::error::SubmitError;

/// Route the backend accepts submissions on.
pub const SUBMIT_PATH: &str = "/api/onboarding";

/// Client for the backend's onboarding endpoint.
///
/// One request per submission, no retries, transport-default timeouts.
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    base_url: String,
    client: reqwest::Client,
}

impl SubmissionClient {
    /// Build a client for the backend at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// The full submission URL.
    pub fn endpoint(&self) -> String {
        format!("{}{SUBMIT_PATH}", self.base_url)
    }

    /// POST the aggregate to the backend.
    ///
    /// Attaches a bearer credential only when one is supplied. A 2xx
    /// response has its body parsed as JSON and returned; any other
    /// status is an error carrying that status.
    pub async fn submit(
        &self,
        aggregate: &OnboardingAggregate,
        credential: Option<&SecretString>,
    ) -> Result<serde_json::Value, SubmitError> {
        let mut request = self.client.post(self.endpoint()).json(aggregate);
        if let Some(token) = credential {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status { status });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::collect;
    use crate::session::MemoryStore;

    #[test]
    fn endpoint_joins_base_and_route() {
        let client = SubmissionClient::new("http://localhost:8000");
        assert_eq!(client.endpoint(), "http://localhost:8000/api/onboarding");
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let client = SubmissionClient::new("http://localhost:8000/");
        assert_eq!(client.endpoint(), "http://localhost:8000/api/onboarding");
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        // Bind then drop a listener so the port is free but closed.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = SubmissionClient::new(format!("http://{addr}"));
        let aggregate = collect(&MemoryStore::new()).await;
        let err = client.submit(&aggregate, None).await.unwrap_err();
        assert!(matches!(err, SubmitError::Http(_)));
    }
}
