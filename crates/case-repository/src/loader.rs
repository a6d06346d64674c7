//! Loading case templates from disk.

use std::env;
use std::path::{Path, PathBuf};

use case_core::{CaseError, CaseTemplate};
use serde::Deserialize;
use tracing::{info, warn};

use crate::builtin::builtin_templates;

/// Environment variable naming a JSON template file.
pub const TEMPLATES_FILE_ENV: &str = "DETECTIVE_TEMPLATES_FILE";

/// Accepted top-level shapes of a template file.
#[derive(Deserialize)]
#[serde(untagged)]
enum TemplateFile {
    List(Vec<CaseTemplate>),
    Wrapped { cases: Vec<CaseTemplate> },
}

/// Read and parse a template file.
///
/// The file holds either a JSON array of templates or an object with a
/// `cases` array. Templates are parsed but not validated.
pub fn load_templates_file(path: impl AsRef<Path>) -> Result<Vec<CaseTemplate>, CaseError> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path)
        .map_err(|e| CaseError::TemplateLoad(format!("{}: {}", path.display(), e)))?;

    let parsed: TemplateFile = serde_json::from_str(&content)
        .map_err(|e| CaseError::TemplateLoad(format!("{}: {}", path.display(), e)))?;

    Ok(match parsed {
        TemplateFile::List(templates) => templates,
        TemplateFile::Wrapped { cases } => cases,
    })
}

/// Keep only the templates that satisfy the case invariants.
fn valid_only(templates: Vec<CaseTemplate>) -> Vec<CaseTemplate> {
    templates
        .into_iter()
        .filter(|template| match template.validate() {
            Ok(()) => true,
            Err(e) => {
                warn!("Dropping case template: {}", e);
                false
            }
        })
        .collect()
}

/// Load the template set to generate cases from.
///
/// Priority:
/// 1. Valid templates from `path` (if given and at least one is valid)
/// 2. Built-in templates
pub fn load_templates(path: Option<&Path>) -> Vec<CaseTemplate> {
    if let Some(path) = path {
        match load_templates_file(path) {
            Ok(templates) => {
                let templates = valid_only(templates);
                if !templates.is_empty() {
                    info!("Loaded {} case templates from {}", templates.len(), path.display());
                    return templates;
                }
                warn!("No valid case templates in {}", path.display());
            }
            Err(e) => warn!("{}", e),
        }
    }

    info!("Using built-in case templates");
    builtin_templates()
}

/// The template file named by `DETECTIVE_TEMPLATES_FILE`, if set and non-blank.
pub fn templates_path_from_env() -> Option<PathBuf> {
    env::var(TEMPLATES_FILE_ENV)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}
