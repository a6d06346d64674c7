//! The Responder trait definition.

use async_trait::async_trait;

use crate::model::{Case, Suspect};

/// What a responder may look at when producing a reply.
#[derive(Debug, Clone, Copy)]
pub struct ReplyContext<'a> {
    /// The case under investigation.
    pub case: &'a Case,
    /// The suspect being questioned, if any.
    pub suspect: Option<&'a Suspect>,
}

impl<'a> ReplyContext<'a> {
    /// Context for the case-level assistant chat.
    pub fn for_case(case: &'a Case) -> Self {
        Self {
            case,
            suspect: None,
        }
    }

    /// Context for questioning one suspect.
    pub fn for_suspect(case: &'a Case, suspect: &'a Suspect) -> Self {
        Self {
            case,
            suspect: Some(suspect),
        }
    }
}

/// A trait for turning free-text input into a reply.
///
/// Implementations range from keyword-routed canned tables to wrappers that
/// add simulated latency. The trait is object-safe and can be used with
/// `Box<dyn Responder>`.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Produce a reply to `input`.
    ///
    /// Responders never fail and never return an empty string.
    async fn respond(&self, input: &str, context: &ReplyContext<'_>) -> String;

    /// Get a human-readable name for this responder.
    fn name(&self) -> &str;
}
