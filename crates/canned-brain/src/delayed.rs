//! Delayed brain implementation - wraps another responder with artificial delay.

use std::time::Duration;

use async_trait::async_trait;
use case_core::{RandomSource, ReplyContext, Responder};
use tokio::time::sleep;
use tracing::debug;

/// A responder that wraps another and adds simulated latency.
///
/// The delay is a fixed base plus an optional uniform jitter. Once started the
/// delay always runs to completion and the inner reply is always delivered.
pub struct DelayedBrain<R: Responder> {
    inner: R,
    base: Duration,
    jitter: Duration,
    rng: RandomSource,
}

impl<R: Responder> DelayedBrain<R> {
    /// Create a new DelayedBrain wrapping the given responder with a fixed delay.
    pub fn new(inner: R, delay: Duration) -> Self {
        Self {
            inner,
            base: delay,
            jitter: Duration::ZERO,
            rng: RandomSource::from_entropy(),
        }
    }

    /// Create a responder with a delay in milliseconds.
    pub fn with_millis(inner: R, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// Add up to `jitter` of extra delay, drawn from `rng`.
    pub fn with_jitter(mut self, jitter: Duration, rng: RandomSource) -> Self {
        self.jitter = jitter;
        self.rng = rng;
        self
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    fn next_delay(&self) -> Duration {
        self.base + self.rng.jitter(self.jitter)
    }
}

#[async_trait]
impl<R: Responder> Responder for DelayedBrain<R> {
    async fn respond(&self, input: &str, context: &ReplyContext<'_>) -> String {
        let delay = self.next_delay();
        if !delay.is_zero() {
            debug!("{} waiting {:?} before replying", self.inner.name(), delay);
            sleep(delay).await;
        }
        self.inner.respond(input, context).await
    }

    fn name(&self) -> &str {
        "DelayedBrain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CannedBrain;
    use case_repository::builtin_templates;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_delayed_brain_waits() {
        let case = builtin_templates().remove(0).stamp("CASE-TEST");
        let context = ReplyContext::for_case(&case);
        let brain = DelayedBrain::with_millis(CannedBrain::assistant(RandomSource::seeded(1)), 1000);

        let start = Instant::now();
        let reply = brain.respond("who did it?", &context).await;

        assert!(!reply.is_empty());
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_jitter_stays_in_range() {
        let case = builtin_templates().remove(0).stamp("CASE-TEST");
        let context = ReplyContext::for_case(&case);
        let brain = DelayedBrain::with_millis(CannedBrain::assistant(RandomSource::seeded(1)), 1000)
            .with_jitter(Duration::from_millis(2000), RandomSource::seeded(2));

        for _ in 0..5 {
            let start = Instant::now();
            brain.respond("hmm", &context).await;
            let elapsed = start.elapsed();
            assert!(elapsed >= Duration::from_millis(1000));
            assert!(elapsed <= Duration::from_millis(3100));
        }
    }

    #[tokio::test]
    async fn test_zero_delay_passes_through() {
        let case = builtin_templates().remove(0).stamp("CASE-TEST");
        let context = ReplyContext::for_case(&case);
        let inner = CannedBrain::assistant(RandomSource::seeded(4));
        let expected = CannedBrain::assistant(RandomSource::seeded(4))
            .respond("clue", &context)
            .await;

        let brain = DelayedBrain::with_millis(inner, 0);
        assert_eq!(brain.respond("clue", &context).await, expected);
        assert_eq!(brain.name(), "DelayedBrain");
        assert_eq!(brain.inner().name(), "AssistantBrain");
    }
}
