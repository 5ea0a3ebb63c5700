//! Submission client.
//!
//! One POST per call, no retry. The response is normalized into
//! `SubmissionResponse` or a `TransportError`.

use async_trait::async_trait;
use log::{debug, error, info, warn};

use super::types::{
    ErrorBody, GENERIC_SERVICE_ERROR, SubmissionRequest, SubmissionResponse, TransportError,
};

#[async_trait]
pub trait SubmissionClient: Send + Sync {
    /// Where requests go, for display.
    fn endpoint(&self) -> &str;

    /// Submits a repository name. Exactly one network call per invocation.
    async fn submit(
        &self,
        request: &SubmissionRequest,
    ) -> Result<SubmissionResponse, TransportError>;
}

/// reqwest-backed client posting JSON to a fixed endpoint.
pub struct HttpSubmissionClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpSubmissionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SubmissionClient for HttpSubmissionClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn submit(
        &self,
        request: &SubmissionRequest,
    ) -> Result<SubmissionResponse, TransportError> {
        info!(
            "Submitting repository '{}' to {}",
            request.repository_name, self.endpoint
        );

        // `.json()` sets Content-Type: application/json
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to submit repository: {}", e);
                TransportError::Network(e.to_string())
            })?;

        let status = response.status();
        debug!("Submission response status: {}", status);

        if status.is_success() {
            return response.json::<SubmissionResponse>().await.map_err(|e| {
                error!("Failed to decode submission response: {}", e);
                TransportError::Network(e.to_string())
            });
        }

        // A body cut off mid-read is a transport failure; only a complete
        // body that fails to parse gets the generic fallback
        let body = response.text().await.map_err(|e| {
            error!("Failed to read error response body: {}", e);
            TransportError::Network(e.to_string())
        })?;
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.detail_text().map(str::to_string))
            .unwrap_or_else(|| GENERIC_SERVICE_ERROR.to_string());
        warn!("Service rejected submission: {} - {}", status.as_u16(), body);

        Err(TransportError::Service {
            status: status.as_u16(),
            detail,
        })
    }
}
