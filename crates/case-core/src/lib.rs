//! Core types for the detective investigation engine.
//!
//! This crate provides the shared model that every other crate in the
//! workspace builds on. It defines:
//!
//! - [`Case`] / [`CaseTemplate`] - A mystery scenario and the template it is stamped from
//! - [`Suspect`], [`Evidence`], [`Location`], [`Solution`] - The parts of a case
//! - [`ConversationLog`] / [`ConversationMessage`] - Append-only chat history
//! - [`evaluate`] - Weighted scoring of a [`DeductionSubmission`] against a [`Solution`]
//! - [`Responder`] - The trait implemented by canned reply engines
//! - [`RandomSource`] - Injectable, seedable pseudo-random source
//! - [`CaseError`] - Error types shared across the workspace
//!
//! # Example
//!
//! ```rust
//! use case_core::{evaluate, DeductionSubmission, Solution};
//!
//! let solution = Solution::new("Elena Vasquez", "Financial Gain", "Inside Job");
//! let guess = DeductionSubmission::new("Elena Vasquez", "Revenge", "Poisoning");
//!
//! let verdict = evaluate(&guess, &solution);
//! assert_eq!(verdict.score, 40);
//! assert!(!verdict.fully_correct);
//! ```

mod conversation;
mod deduction;
mod error;
mod model;
mod options;
mod random;
mod trait_def;

pub use conversation::{ConversationLog, ConversationMessage, Sender};
pub use deduction::{
    evaluate, DeductionOutcome, DeductionSubmission, DeductionVerdict, METHOD_WEIGHT,
    MOTIVE_WEIGHT, SUSPECT_WEIGHT,
};
pub use error::CaseError;
pub use model::{Case, CaseTemplate, Evidence, Location, Mood, Solution, Suspect};
pub use options::{options_including, METHOD_OPTIONS, MOTIVE_OPTIONS};
pub use random::RandomSource;
pub use trait_def::{ReplyContext, Responder};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
