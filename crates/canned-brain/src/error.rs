//! Error types for building reply tables.

use thiserror::Error;

/// Errors that can occur when assembling a [`ReplyTable`](crate::ReplyTable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A pool has no usable replies.
    #[error("reply pool '{0}' is empty")]
    EmptyPool(String),

    /// The fallback pool has no usable replies.
    #[error("fallback reply pool is empty")]
    EmptyFallback,
}
