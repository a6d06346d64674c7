//! Canned brain implementation - answers from a keyword-routed reply table.

use async_trait::async_trait;
use case_core::{RandomSource, ReplyContext, Responder};
use tracing::debug;

use crate::table::ReplyTable;

/// A responder that routes input through a [`ReplyTable`] and picks a reply
/// at random from the chosen pool.
///
/// No generation happens: replies come straight from the table with their
/// placeholders filled from the case or suspect.
#[derive(Debug, Clone)]
pub struct CannedBrain {
    name: String,
    table: ReplyTable,
    rng: RandomSource,
}

impl CannedBrain {
    /// Create a brain over an arbitrary table.
    pub fn new(name: impl Into<String>, table: ReplyTable, rng: RandomSource) -> Self {
        Self {
            name: name.into(),
            table,
            rng,
        }
    }

    /// The case-level investigation assistant.
    ///
    /// # Example
    ///
    /// ```rust
    /// use canned_brain::CannedBrain;
    /// use case_core::RandomSource;
    ///
    /// let assistant = CannedBrain::assistant(RandomSource::seeded(1));
    /// assert_eq!(assistant.table().pools()[0].category, "suspects");
    /// ```
    pub fn assistant(rng: RandomSource) -> Self {
        Self::new("AssistantBrain", ReplyTable::assistant(), rng)
    }

    /// A suspect under interrogation.
    pub fn suspect(rng: RandomSource) -> Self {
        Self::new("SuspectBrain", ReplyTable::suspect(), rng)
    }

    /// Set the probability that a suspect's mood colours an otherwise
    /// unmatched reply.
    pub fn with_mood_bias(mut self, mood_bias: f64) -> Self {
        self.table = self.table.with_mood_bias(mood_bias);
        self
    }

    pub fn table(&self) -> &ReplyTable {
        &self.table
    }

    /// Name of the pool an input would be answered from.
    pub fn category_for(&self, input: &str, context: &ReplyContext<'_>) -> String {
        self.table.route(input, context, &self.rng).category.to_string()
    }
}

#[async_trait]
impl Responder for CannedBrain {
    async fn respond(&self, input: &str, context: &ReplyContext<'_>) -> String {
        let reply = self.table.reply(input, context, &self.rng);
        debug!("{} replied with {} chars", self.name, reply.len());
        reply
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_repository::builtin_templates;

    #[tokio::test]
    async fn test_assistant_reply_is_non_empty() {
        let case = builtin_templates().remove(0).stamp("CASE-TEST");
        let brain = CannedBrain::assistant(RandomSource::seeded(1));
        let context = ReplyContext::for_case(&case);

        for input in ["who?", "clue", "when", "how", "hmm", "!", " "] {
            let reply = brain.respond(input, &context).await;
            assert!(!reply.trim().is_empty(), "empty reply for {:?}", input);
        }
    }

    #[tokio::test]
    async fn test_same_seed_same_replies() {
        let case = builtin_templates().remove(1).stamp("CASE-TEST");
        let suspect = &case.suspects()[2];
        let context = ReplyContext::for_suspect(&case, suspect);

        let a = CannedBrain::suspect(RandomSource::seeded(77));
        let b = CannedBrain::suspect(RandomSource::seeded(77));

        for input in ["hello", "where were you?", "the victim", "anything else"] {
            assert_eq!(a.respond(input, &context).await, b.respond(input, &context).await);
        }
    }

    #[tokio::test]
    async fn test_no_state_between_calls() {
        let case = builtin_templates().remove(0).stamp("CASE-TEST");
        let suspect = &case.suspects()[0];
        let context = ReplyContext::for_suspect(&case, suspect);
        let brain = CannedBrain::suspect(RandomSource::seeded(5)).with_mood_bias(1.0);

        let question = "Where were you at the time of the incident?";
        assert_eq!(brain.category_for(question, &context), "alibi");

        // Whatever pool answered in between, the alibi question routes the same way
        for other in ["hello", "the victim", "what now"] {
            let _ = brain.respond(other, &context).await;
            assert_eq!(brain.category_for(question, &context), "alibi");
        }
    }

    #[tokio::test]
    async fn test_brain_names() {
        assert_eq!(CannedBrain::assistant(RandomSource::seeded(1)).name(), "AssistantBrain");
        assert_eq!(CannedBrain::suspect(RandomSource::seeded(1)).name(), "SuspectBrain");
    }
}
