//! # Application State
//!
//! Core submission state. Domain logic only, no TUI types. Presentation
//! state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── client: Arc<dyn SubmissionClient>  // submission service
//! ├── input: String                      // repository name being edited
//! └── state: SubmissionState             // Idle | Submitting | Failed | Completed
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::service::{SubmissionClient, SubmissionResponse};
use std::sync::Arc;

/// Where the current submission cycle stands. Exactly one variant at a time,
/// so "loading with an error" or "error and result" cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// Request in flight; further submits are ignored.
    Submitting,
    /// Local validation or the request failed. Holds the text shown to the user.
    Failed(String),
    /// The service answered with 2xx. The job itself may still have failed,
    /// see `response.status`.
    Completed(SubmissionResponse),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn response(&self) -> Option<&SubmissionResponse> {
        match self {
            SubmissionState::Completed(response) => Some(response),
            _ => None,
        }
    }
}

pub struct App {
    pub client: Arc<dyn SubmissionClient>,
    /// Text currently in the repository input
    pub input: String,
    pub state: SubmissionState,
}

impl App {
    pub fn new(client: Arc<dyn SubmissionClient>) -> Self {
        Self {
            client,
            input: String::new(),
            state: SubmissionState::Idle,
        }
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }
}
