//! Canned reply brains for the detective investigation engine.
//!
//! This crate provides implementations of the [`Responder`] trait:
//! - `CannedBrain` - Keyword-routed replies from a fixed [`ReplyTable`]
//! - `DelayedBrain` - Wraps another responder with simulated latency
//!
//! Two tables ship with the crate: [`ReplyTable::assistant`] for the
//! case-level assistant chat and [`ReplyTable::suspect`] for interrogations.
//!
//! # Example
//!
//! ```rust
//! use canned_brain::{CannedBrain, Responder};
//! use case_core::{RandomSource, ReplyContext};
//! use case_repository::CaseRepository;
//!
//! #[tokio::main]
//! async fn main() {
//!     let rng = RandomSource::seeded(42);
//!     let case = CaseRepository::builtin(rng.clone()).generate();
//!     let assistant = CannedBrain::assistant(rng);
//!
//!     let reply = assistant
//!         .respond("Who are the suspects?", &ReplyContext::for_case(&case))
//!         .await;
//!     println!("Assistant: {}", reply);
//! }
//! ```

mod canned;
mod delayed;
mod error;
mod render;
mod table;

// Re-export case-core types for convenience
pub use case_core::{async_trait, ReplyContext, Responder};

pub use canned::CannedBrain;
pub use delayed::DelayedBrain;
pub use error::TableError;
pub use render::render;
pub use table::{ReplyPool, ReplyTable, Route, Trigger, DEFAULT_MOOD_BIAS, FALLBACK_CATEGORY};
