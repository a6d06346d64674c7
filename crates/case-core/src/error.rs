//! Error types for case operations.

use thiserror::Error;

/// Errors that can occur while building cases or handling deductions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    /// No case templates are configured. This is a configuration error.
    #[error("no case templates available")]
    GenerationFailure,

    /// A case template breaks one of the case invariants.
    #[error("invalid case template '{title}': {reason}")]
    InvalidTemplate { title: String, reason: String },

    /// Templates could not be read or parsed.
    #[error("failed to load case templates: {0}")]
    TemplateLoad(String),

    /// One or more deduction fields were left blank.
    #[error("deduction incomplete, missing: {}", .0.join(", "))]
    EmptySubmission(Vec<&'static str>),
}
