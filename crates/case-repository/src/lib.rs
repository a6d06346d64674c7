//! Case templates and random case generation.
//!
//! A [`CaseRepository`] holds a fixed, non-empty set of [`CaseTemplate`]s and
//! hands out fresh [`Case`]s: a uniformly random template stamped with a
//! unique, time-derived identifier.
//!
//! Templates come from the two built-in mysteries or, when
//! `DETECTIVE_TEMPLATES_FILE` is set, from a JSON file. A broken file never
//! stops generation; the built-ins are used instead.
//!
//! # Example
//!
//! ```rust
//! use case_core::RandomSource;
//! use case_repository::CaseRepository;
//!
//! let repository = CaseRepository::builtin(RandomSource::seeded(7));
//! let case = repository.generate();
//!
//! assert!(case.id().starts_with("CASE-"));
//! assert!(case.suspect_names().contains(&case.solution().suspect.as_str()));
//! ```

mod builtin;
mod clock;
mod loader;
mod repository;

pub use builtin::builtin_templates;
pub use clock::{Clock, SystemClock};
pub use loader::{
    load_templates, load_templates_file, templates_path_from_env, TEMPLATES_FILE_ENV,
};
pub use repository::{format_case_id, CaseRepository};

// Re-export case-core types used in this crate's API
pub use case_core::{Case, CaseError, CaseTemplate, RandomSource};
