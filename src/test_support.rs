//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};
use async_trait::async_trait;

use crate::core::state::App;
use crate::service::{SubmissionClient, SubmissionRequest, SubmissionResponse, TransportError};

/// A client that records every request and replays a canned outcome.
pub struct RecordingClient {
    outcome: Result<SubmissionResponse, TransportError>,
    pub requests: Mutex<Vec<SubmissionRequest>>,
}

impl RecordingClient {
    pub fn new(outcome: Result<SubmissionResponse, TransportError>) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl SubmissionClient for RecordingClient {
    fn endpoint(&self) -> &str {
        "http://test.invalid/"
    }

    async fn submit(
        &self,
        request: &SubmissionRequest,
    ) -> Result<SubmissionResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcome.clone()
    }
}

pub fn sample_response(repository_name: &str, status: &str) -> SubmissionResponse {
    SubmissionResponse {
        repository_name: repository_name.to_string(),
        message: "Processing started".to_string(),
        status: status.to_string(),
    }
}

/// Creates a test App whose client always succeeds with status "Pending".
pub fn test_app() -> App {
    App::new(Arc::new(RecordingClient::new(Ok(sample_response(
        "test/repo", "Pending",
    )))))
}
