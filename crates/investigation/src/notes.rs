//! Detective notes storage.
//!
//! Notes are free text kept per case. They sit outside the case model: the
//! session never reads or writes them, the front end does.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use case_core::Case;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::InvestigationError;

/// Per-case notes persistence.
#[async_trait]
pub trait NotesStore: Send + Sync {
    /// Load the notes for a case. Missing notes are an empty string.
    async fn load(&self, case_id: &str) -> Result<String, InvestigationError>;

    /// Replace the notes for a case.
    async fn save(&self, case_id: &str, notes: &str) -> Result<(), InvestigationError>;

    /// Append a line to the notes for a case and return the updated notes.
    async fn append(&self, case_id: &str, line: &str) -> Result<String, InvestigationError> {
        let existing = self.load(case_id).await?;
        let updated = append_line(&existing, line);
        self.save(case_id, &updated).await?;
        Ok(updated)
    }
}

fn append_line(existing: &str, line: &str) -> String {
    if existing.is_empty() {
        line.to_string()
    } else if existing.ends_with('\n') {
        format!("{}{}", existing, line)
    } else {
        format!("{}\n{}", existing, line)
    }
}

/// Render notes as a downloadable text document.
pub fn export_notes(case: &Case, notes: &str) -> String {
    format!(
        "Detective Notes - {}\nCase ID: {}\n\n{}",
        case.title(),
        case.id(),
        notes
    )
}

/// Notes kept in memory for the life of the process.
#[derive(Debug, Default)]
pub struct MemoryNotesStore {
    notes: RwLock<HashMap<String, String>>,
}

impl MemoryNotesStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotesStore for MemoryNotesStore {
    async fn load(&self, case_id: &str) -> Result<String, InvestigationError> {
        Ok(self
            .notes
            .read()
            .await
            .get(case_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn save(&self, case_id: &str, notes: &str) -> Result<(), InvestigationError> {
        self.notes
            .write()
            .await
            .insert(case_id.to_string(), notes.to_string());
        Ok(())
    }
}

/// Notes stored as one text file per case under a directory.
///
/// Files are named `notes-<case id>.txt`; characters outside
/// `[A-Za-z0-9_-]` in the case id are replaced with `_`.
#[derive(Debug, Clone)]
pub struct FileNotesStore {
    dir: PathBuf,
}

impl FileNotesStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the notes file for a case.
    pub fn path_for(&self, case_id: &str) -> PathBuf {
        let safe: String = case_id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("notes-{}.txt", safe))
    }
}

#[async_trait]
impl NotesStore for FileNotesStore {
    async fn load(&self, case_id: &str) -> Result<String, InvestigationError> {
        let path = self.path_for(case_id);
        match tokio::fs::read_to_string(&path).await {
            Ok(notes) => Ok(notes),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(InvestigationError::Notes(format!("{}: {}", path.display(), e))),
        }
    }

    async fn save(&self, case_id: &str, notes: &str) -> Result<(), InvestigationError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| InvestigationError::Notes(format!("{}: {}", self.dir.display(), e)))?;

        let path = self.path_for(case_id);
        tokio::fs::write(&path, notes)
            .await
            .map_err(|e| InvestigationError::Notes(format!("{}: {}", path.display(), e)))?;

        debug!("Saved {} bytes of notes to {}", notes.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_core::RandomSource;
    use case_repository::CaseRepository;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryNotesStore::new();
        assert_eq!(store.load("CASE-1").await.unwrap(), "");

        store.save("CASE-1", "The guard lied.").await.unwrap();
        assert_eq!(store.load("CASE-1").await.unwrap(), "The guard lied.");
        assert_eq!(store.load("CASE-2").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_append_adds_lines() {
        let store = MemoryNotesStore::new();
        store.append("CASE-1", "first").await.unwrap();
        let notes = store.append("CASE-1", "second").await.unwrap();
        assert_eq!(notes, "first\nsecond");
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileNotesStore::new(dir.path().join("notes"));

        assert_eq!(store.load("CASE-ABC").await.unwrap(), "");
        store.save("CASE-ABC", "Check the coffee cup.").await.unwrap();

        assert!(dir.path().join("notes").join("notes-CASE-ABC.txt").exists());
        assert_eq!(store.load("CASE-ABC").await.unwrap(), "Check the coffee cup.");
    }

    #[test]
    fn test_file_names_are_sanitized() {
        let store = FileNotesStore::new("/tmp/notes");
        assert_eq!(
            store.path_for("../etc/passwd"),
            PathBuf::from("/tmp/notes/notes-___etc_passwd.txt")
        );
    }

    #[test]
    fn test_export_format() {
        let case = CaseRepository::builtin(RandomSource::seeded(1)).generate();
        let exported = export_notes(&case, "Suspect the guard.");

        assert_eq!(
            exported,
            format!(
                "Detective Notes - {}\nCase ID: {}\n\nSuspect the guard.",
                case.title(),
                case.id()
            )
        );
    }
}
