//! Input validation for the repository name field.
//!
//! The only rule is "something other than whitespace". Length and character
//! set are left to the submission service.

use std::fmt;

/// Reasons a raw input is rejected before any request is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input was empty or whitespace only.
    EmptyInput,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyInput => write!(f, "Please enter a valid repository name."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trims the raw input and rejects it if nothing is left.
pub fn validate(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    Ok(trimmed.to_string())
}
