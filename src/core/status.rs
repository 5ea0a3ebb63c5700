//! Maps the free-form `status` label of a service response to a display
//! category. Only presentation depends on this; the submission state does not.

/// Display category derived from a service status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Failure,
    Other,
}

/// The one token treated as a failed job, compared case-insensitively.
const FAILED_TOKEN: &str = "failed";

/// Classifies a status label. Anything that is not literally "failed"
/// (in any casing) is `Other`.
pub fn classify(status: &str) -> StatusCategory {
    if status.eq_ignore_ascii_case(FAILED_TOKEN) {
        StatusCategory::Failure
    } else {
        StatusCategory::Other
    }
}
