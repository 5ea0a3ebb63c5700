//! # Submission Service
//!
//! The network side of the client: wire types, transport errors and the
//! `SubmissionClient` seam with its reqwest implementation.

pub mod client;
pub mod types;

pub use client::{HttpSubmissionClient, SubmissionClient};
pub use types::{
    GENERIC_SERVICE_ERROR, NETWORK_ERROR_MESSAGE, SubmissionRequest, SubmissionResponse,
    TransportError,
};
