//! Template file loading tests.

use std::io::Write;

use case_repository::{
    builtin_templates, load_templates, CaseError, CaseRepository, RandomSource,
};
use tempfile::NamedTempFile;

const LIGHTHOUSE: &str = r#"{
    "title": "The Lighthouse Keeper",
    "victim": "Agnes Moore (Lighthouse Keeper)",
    "time": "4:10 AM, March 2nd",
    "location": "Gull Point Lighthouse",
    "description": "The keeper was found at the foot of the stairs.",
    "suspects": [
        {"id": "a", "name": "Ned Hale", "role": "Fisherman", "bio": "Owes money.",
         "alibi": "Says he was at sea", "mood": "Calm"},
        {"id": "b", "name": "Ruth Hale", "role": "Innkeeper", "bio": "Ned's sister.",
         "alibi": "Says she was closing the inn", "mood": "Angry"}
    ],
    "evidence": [
        {"id": "e1", "title": "Wet Boots", "description": "Salt-stained boots",
         "location": "Stairwell", "significance": "Someone came from the sea"}
    ],
    "locations": [
        {"id": "l1", "name": "Stairwell", "description": "Spiral stairs", "evidence": ["e1"]}
    ],
    "solution": {"suspect": "Ned Hale", "motive": "Financial Gain", "method": "Blunt Force"}
}"#;

fn write_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn loads_template_array() {
    let file = write_file(&format!("[{}]", LIGHTHOUSE));

    let repository = CaseRepository::from_file(file.path(), RandomSource::seeded(1)).unwrap();
    let case = repository.generate();

    assert_eq!(case.title(), "The Lighthouse Keeper");
    assert_eq!(case.evidence_at("l1")[0].title, "Wet Boots");
    assert_eq!(case.victim_name(), "Agnes Moore");
}

#[test]
fn loads_wrapped_template_object() {
    let file = write_file(&format!(r#"{{"cases": [{}]}}"#, LIGHTHOUSE));
    let templates = load_templates(Some(file.path()));
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].title, "The Lighthouse Keeper");
}

#[test]
fn invalid_templates_are_dropped() {
    let broken = LIGHTHOUSE.replace(r#""suspect": "Ned Hale""#, r#""suspect": "Nobody""#);
    let file = write_file(&format!("[{}, {}]", LIGHTHOUSE, broken));

    let templates = load_templates(Some(file.path()));
    assert_eq!(templates.len(), 1);

    let strict = CaseRepository::from_file(file.path(), RandomSource::seeded(1));
    assert!(matches!(strict, Err(CaseError::InvalidTemplate { .. })));

    let lenient = CaseRepository::load(Some(file.path()), RandomSource::seeded(1));
    assert_eq!(lenient.generate().title(), "The Lighthouse Keeper");
}

#[test]
fn malformed_file_falls_back_to_builtins() {
    let file = write_file("{ not json");
    assert_eq!(load_templates(Some(file.path())), builtin_templates());

    let strict = CaseRepository::from_file(file.path(), RandomSource::seeded(1));
    assert!(matches!(strict, Err(CaseError::TemplateLoad(_))));
}

#[test]
fn empty_file_list_falls_back_to_builtins() {
    let file = write_file("[]");
    assert_eq!(load_templates(Some(file.path())), builtin_templates());

    let strict = CaseRepository::from_file(file.path(), RandomSource::seeded(1));
    assert!(matches!(strict, Err(CaseError::GenerationFailure)));

    let lenient = CaseRepository::load(Some(file.path()), RandomSource::seeded(1));
    assert_eq!(lenient.templates(), builtin_templates().as_slice());
}
