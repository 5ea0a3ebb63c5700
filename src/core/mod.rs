//! # Core Application Logic
//!
//! The submission lifecycle. It knows nothing about any specific UI
//! technology or about HTTP.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │  Service   │
//!             │  Adapter   │          │ (reqwest)  │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `App` and `SubmissionState`
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`validate`]: Repository name validation
//! - [`status`]: Service status classification
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod state;
pub mod status;
pub mod validate;
