//! Wire types for the submission service.
//!
//! Field names are part of the wire contract and use camelCase on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown when a failure response carries no usable `detail`.
pub const GENERIC_SERVICE_ERROR: &str = "Failed to submit repository";

/// Shown for every transport-level failure.
pub const NETWORK_ERROR_MESSAGE: &str = "An unexpected network error occurred. Please try again.";

/// Outbound payload: `{"repositoryName": "..."}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub repository_name: String,
}

impl SubmissionRequest {
    pub fn new(repository_name: impl Into<String>) -> Self {
        Self {
            repository_name: repository_name.into(),
        }
    }
}

/// Body of a 2xx response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    /// Name as confirmed by the service
    pub repository_name: String,
    pub message: String,
    /// Free-form job status, e.g. "Pending" or "Failed"
    pub status: String,
}

/// Body of a non-2xx response. `detail` is optional and only used when it
/// is a string.
#[derive(Deserialize, Debug, Default)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn detail_text(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(|d| d.as_str())
            .filter(|d| !d.is_empty())
    }
}

/// Errors produced by a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The service answered with a non-2xx status.
    Service { status: u16, detail: String },
    /// Connection, timeout or body decoding failure. Carries the cause for logging.
    Network(String),
}

impl TransportError {
    /// Text surfaced to the user in the error line.
    pub fn user_message(&self) -> String {
        match self {
            TransportError::Service { detail, .. } => detail.clone(),
            TransportError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Service { status, detail } => {
                write!(f, "service error (HTTP {status}): {detail}")
            }
            TransportError::Network(cause) => write!(f, "network error: {cause}"),
        }
    }
}

impl std::error::Error for TransportError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_wire_field_name() {
        let body = serde_json::to_string(&SubmissionRequest::new("octocat/Hello-World")).unwrap();
        assert_eq!(body, r#"{"repositoryName":"octocat/Hello-World"}"#);
    }

    #[test]
    fn test_response_ignores_unknown_fields() {
        let json = r#"{"repositoryName":"a/b","message":"ok","status":"Pending","extra":1}"#;
        let response: SubmissionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.repository_name, "a/b");
        assert_eq!(response.status, "Pending");
    }

    #[test]
    fn test_response_requires_all_fields() {
        let json = r#"{"repositoryName":"a/b","message":"ok"}"#;
        assert!(serde_json::from_str::<SubmissionResponse>(json).is_err());
    }

    #[test]
    fn test_error_body_detail_must_be_text() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"Repository not found"}"#).unwrap();
        assert_eq!(body.detail_text(), Some("Repository not found"));

        let body: ErrorBody = serde_json::from_str(r#"{"detail":[{"loc":["body"]}]}"#).unwrap();
        assert_eq!(body.detail_text(), None);

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.detail_text(), None);

        let body: ErrorBody = serde_json::from_str(r#"{"detail":""}"#).unwrap();
        assert_eq!(body.detail_text(), None);
    }

    #[test]
    fn test_user_message() {
        let service = TransportError::Service {
            status: 404,
            detail: "Repository not found".to_string(),
        };
        assert_eq!(service.user_message(), "Repository not found");

        let network = TransportError::Network("connection refused".to_string());
        assert_eq!(network.user_message(), NETWORK_ERROR_MESSAGE);
        assert_eq!(network.to_string(), "network error: connection refused");
    }
}
