//! The case repository: pick a template, stamp it with an id.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use case_core::{Case, CaseError, CaseTemplate, RandomSource};
use tracing::{debug, info};

use crate::builtin::builtin_templates;
use crate::clock::{Clock, SystemClock};
use crate::loader::{load_templates, load_templates_file, templates_path_from_env};

/// Format a case identifier from a millisecond timestamp.
///
/// Produces `CASE-` followed by the timestamp in uppercase base 36.
pub fn format_case_id(millis: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    if millis == 0 {
        return "CASE-0".to_string();
    }

    let mut value = millis;
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }

    let encoded: String = digits.into_iter().rev().collect();
    format!("CASE-{}", encoded)
}

/// A fixed set of case templates and the machinery to stamp cases from them.
///
/// The template set is never empty, so [`CaseRepository::generate`] cannot
/// fail. Identifiers are derived from the clock and strictly increase: when
/// two cases are generated within the same millisecond the second one is
/// stamped one millisecond later.
pub struct CaseRepository {
    templates: Vec<CaseTemplate>,
    rng: RandomSource,
    clock: Box<dyn Clock>,
    last_stamp: AtomicU64,
}

impl CaseRepository {
    /// Create a repository over the given templates.
    ///
    /// Fails with [`CaseError::GenerationFailure`] when `templates` is empty,
    /// or [`CaseError::InvalidTemplate`] for the first template that breaks
    /// a case invariant.
    pub fn new(templates: Vec<CaseTemplate>, rng: RandomSource) -> Result<Self, CaseError> {
        if templates.is_empty() {
            return Err(CaseError::GenerationFailure);
        }
        for template in &templates {
            template.validate()?;
        }
        Ok(Self::from_parts(templates, rng))
    }

    /// Create a repository over the built-in templates.
    pub fn builtin(rng: RandomSource) -> Self {
        Self::from_parts(builtin_templates(), rng)
    }

    /// Create a repository from a template file, rejecting any invalid template.
    pub fn from_file(path: impl AsRef<Path>, rng: RandomSource) -> Result<Self, CaseError> {
        Self::new(load_templates_file(path)?, rng)
    }

    /// Create a repository from an optional template file.
    ///
    /// Invalid templates are dropped; when no file is given or none of its
    /// templates survive, the built-in templates are used.
    pub fn load(path: Option<&Path>, rng: RandomSource) -> Self {
        Self::from_parts(load_templates(path), rng)
    }

    /// Create a repository from `DETECTIVE_TEMPLATES_FILE`, falling back to
    /// the built-in templates.
    pub fn from_env(rng: RandomSource) -> Self {
        Self::load(templates_path_from_env().as_deref(), rng)
    }

    fn from_parts(templates: Vec<CaseTemplate>, rng: RandomSource) -> Self {
        Self {
            templates,
            rng,
            clock: Box::new(SystemClock),
            last_stamp: AtomicU64::new(0),
        }
    }

    /// Replace the clock used for identifiers.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn templates(&self) -> &[CaseTemplate] {
        &self.templates
    }

    /// Next identifier timestamp: the clock, or one past the last stamp if
    /// the clock has not moved on.
    fn next_stamp(&self) -> u64 {
        let now = self.clock.now_millis();
        let advance = |last: u64| if now > last { now } else { last + 1 };

        let previous = match self
            .last_stamp
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(advance(last)))
        {
            Ok(prev) | Err(prev) => prev,
        };
        advance(previous)
    }

    /// Generate a fresh case.
    ///
    /// Picks a template uniformly at random and stamps it with a new id.
    pub fn generate(&self) -> Case {
        let index = self.rng.index(self.templates.len()).unwrap_or(0);
        let template = self.templates[index].clone();
        let id = format_case_id(self.next_stamp());

        debug!("Picked template {} of {}", index + 1, self.templates.len());
        info!("Generated case {} ({})", id, template.title);

        template.stamp(id)
    }
}
