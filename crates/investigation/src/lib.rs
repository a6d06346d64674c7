//! Investigation sessions for the detective engine.
//!
//! An [`InvestigationSession`] owns one active case at a time and routes
//! every user action through it: starting a case, chatting with the
//! assistant, interrogating suspects and submitting a deduction.
//!
//! Detective notes live beside the session in a [`NotesStore`], and the
//! `format_*` functions render cases and results as plain text.
//!
//! # Example
//!
//! ```rust,no_run
//! use case_core::DeductionSubmission;
//! use investigation::{InvestigationConfig, InvestigationSession};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), investigation::InvestigationError> {
//!     let config = InvestigationConfig::builder().seed(7).no_delays().build();
//!     let mut session = InvestigationSession::from_config(&config);
//!
//!     let case = session.start_case().await;
//!     println!("{}", investigation::format_briefing(case));
//!
//!     let reply = session.ask_assistant("What evidence do we have?").await?;
//!     println!("Assistant: {}", reply.text());
//!
//!     let report = session
//!         .submit_deduction(&DeductionSubmission::new("Elena Vasquez", "Financial Gain", "Inside Job"))
//!         .await?;
//!     println!("{}", investigation::format_report(&report));
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod formatting;
mod notes;
mod session;

pub use config::{InvestigationConfig, InvestigationConfigBuilder};
pub use error::InvestigationError;
pub use formatting::{
    format_briefing, format_dossier, format_evidence_log, format_locations, format_options,
    format_report, format_suspects, format_transcript,
};
pub use notes::{export_notes, FileNotesStore, MemoryNotesStore, NotesStore};
pub use session::{DeductionReport, InvestigationSession};
