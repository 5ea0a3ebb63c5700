//! # Actions
//!
//! Everything that can happen in the client becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! Service responds? That's `Action::SubmissionFinished(result)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state and returns an `Effect` for the caller to perform. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Lifecycle driven by `update()`:
//!
//! ```text
//! Idle ──Submit──▶ Submitting ──Ok──▶ Completed
//!  ▲  │               │
//!  │  └─(blank)─▶ Failed ◀──Err──┘
//!  └──── any terminal state accepts a new Submit ────
//! ```

use log::{debug, info, warn};

use crate::core::state::{App, SubmissionState};
use crate::core::validate::validate;
use crate::service::{SubmissionRequest, SubmissionResponse, TransportError};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The input text changed. Does not clear a visible error or result.
    EditInput(String),
    /// User asked to submit the current input.
    Submit,
    /// The in-flight request resolved.
    SubmissionFinished(Result<SubmissionResponse, TransportError>),
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Perform exactly one network call with this payload.
    Submit(SubmissionRequest),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::EditInput(text) => {
            app.input = text;
            Effect::None
        }
        Action::Submit => {
            if app.state.is_submitting() {
                debug!("Submit ignored: a request is already in flight");
                return Effect::None;
            }

            match validate(&app.input) {
                Ok(repository_name) => {
                    info!("Submitting repository '{}'", repository_name);
                    app.state = SubmissionState::Submitting;
                    Effect::Submit(SubmissionRequest::new(repository_name))
                }
                Err(e) => {
                    info!("Rejected input {:?}: {}", app.input, e);
                    app.state = SubmissionState::Failed(e.to_string());
                    Effect::None
                }
            }
        }
        Action::SubmissionFinished(result) => {
            if !app.state.is_submitting() {
                warn!("Dropping submission result received outside Submitting: {:?}", result);
                return Effect::None;
            }

            match result {
                Ok(response) => {
                    info!(
                        "Submission completed for '{}' with status '{}'",
                        response.repository_name, response.status
                    );
                    app.input.clear();
                    app.state = SubmissionState::Completed(response);
                }
                Err(e) => {
                    info!("Submission failed: {}", e);
                    app.state = SubmissionState::Failed(e.user_message());
                }
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
