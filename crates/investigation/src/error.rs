//! Error types for investigation operations.

use case_core::CaseError;
use thiserror::Error;

/// Errors that can occur while running an investigation.
#[derive(Debug, Error)]
pub enum InvestigationError {
    /// An operation needed a case but none has been started.
    #[error("no active case; start one first")]
    NoActiveCase,

    /// No suspect with that id or name in the active case.
    #[error("unknown suspect: {0}")]
    UnknownSuspect(String),

    /// The message was empty or whitespace.
    #[error("message is empty")]
    EmptyMessage,

    /// A deduction label is not among the case's options.
    #[error("'{value}' is not a valid {field}")]
    UnknownOption { field: &'static str, value: String },

    /// Reading or writing detective notes failed.
    #[error("notes storage failed: {0}")]
    Notes(String),

    /// Case-level error.
    #[error(transparent)]
    Case(#[from] CaseError),
}
