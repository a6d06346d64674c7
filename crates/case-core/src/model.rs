//! Case, suspect, evidence and location types.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::conversation::ConversationLog;
use crate::error::CaseError;
use crate::options::{options_including, METHOD_OPTIONS, MOTIVE_OPTIONS};

/// Demeanour a suspect shows under questioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Nervous,
    Angry,
    Defensive,
    Calm,
    Suspicious,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Nervous => "Nervous",
            Mood::Angry => "Angry",
            Mood::Defensive => "Defensive",
            Mood::Calm => "Calm",
            Mood::Suspicious => "Suspicious",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person of interest in a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suspect {
    pub id: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub alibi: String,
    pub mood: Mood,
    #[serde(default)]
    pub image: String,
    /// Interrogation history. Always starts empty, even when loaded from a template.
    #[serde(skip_deserializing, rename = "chatHistory")]
    conversation: ConversationLog,
}

impl Suspect {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        bio: impl Into<String>,
        alibi: impl Into<String>,
        mood: Mood,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            bio: bio.into(),
            alibi: alibi.into(),
            mood,
            image: String::new(),
            conversation: ConversationLog::new(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// This suspect's interrogation log.
    pub fn conversation(&self) -> &ConversationLog {
        &self.conversation
    }

    /// Mutable access to the log. The log itself only supports appending.
    pub fn conversation_mut(&mut self) -> &mut ConversationLog {
        &mut self.conversation
    }
}

/// A piece of physical or documentary evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    /// Name of the place where the item was found.
    pub location: String,
    pub significance: String,
}

impl Evidence {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        significance: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            image: String::new(),
            location: location.into(),
            significance: significance.into(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

/// A place relevant to the investigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Ids of the evidence items found here.
    #[serde(default)]
    pub evidence: Vec<String>,
    /// Ids of the witnesses questioned here.
    #[serde(default)]
    pub witnesses: Vec<String>,
}

impl Location {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            evidence: Vec::new(),
            witnesses: Vec::new(),
        }
    }

    pub fn with_evidence<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.evidence.extend(ids.into_iter().map(Into::into));
        self
    }
}

/// Ground truth for a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Name of the culprit. Must match a suspect's name.
    pub suspect: String,
    pub motive: String,
    pub method: String,
}

impl Solution {
    pub fn new(
        suspect: impl Into<String>,
        motive: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self {
            suspect: suspect.into(),
            motive: motive.into(),
            method: method.into(),
        }
    }
}

/// The shape of a case before it is stamped with an identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseTemplate {
    pub title: String,
    pub victim: String,
    pub time: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub crime_scene_image: String,
    pub suspects: Vec<Suspect>,
    #[serde(default)]
    pub evidence: Vec<Evidence>,
    #[serde(default)]
    pub locations: Vec<Location>,
    pub solution: Solution,
}

impl CaseTemplate {
    /// Check the template against the case invariants.
    ///
    /// The solution's suspect must name one of the suspects, suspect and
    /// evidence ids must be unique, solution labels must be non-empty and
    /// every evidence id referenced by a location must exist.
    pub fn validate(&self) -> Result<(), CaseError> {
        let invalid = |reason: String| CaseError::InvalidTemplate {
            title: self.title.clone(),
            reason,
        };

        if self.title.trim().is_empty() {
            return Err(invalid("title is empty".to_string()));
        }
        if self.suspects.is_empty() {
            return Err(invalid("no suspects".to_string()));
        }

        let mut suspect_ids = HashSet::new();
        for suspect in &self.suspects {
            if !suspect_ids.insert(suspect.id.as_str()) {
                return Err(invalid(format!("duplicate suspect id '{}'", suspect.id)));
            }
        }

        if !self.suspects.iter().any(|s| s.name == self.solution.suspect) {
            return Err(invalid(format!(
                "solution suspect '{}' is not among the suspects",
                self.solution.suspect
            )));
        }
        if self.solution.motive.trim().is_empty() {
            return Err(invalid("solution motive is empty".to_string()));
        }
        if self.solution.method.trim().is_empty() {
            return Err(invalid("solution method is empty".to_string()));
        }

        let mut evidence_ids = HashSet::new();
        for item in &self.evidence {
            if !evidence_ids.insert(item.id.as_str()) {
                return Err(invalid(format!("duplicate evidence id '{}'", item.id)));
            }
        }
        for location in &self.locations {
            if let Some(missing) = location
                .evidence
                .iter()
                .find(|id| !evidence_ids.contains(id.as_str()))
            {
                return Err(invalid(format!(
                    "location '{}' references unknown evidence '{}'",
                    location.name, missing
                )));
            }
        }

        Ok(())
    }

    /// Turn the template into a live case with the given identifier.
    ///
    /// Suspect logs start empty regardless of how the template was built.
    pub fn stamp(self, id: impl Into<String>) -> Case {
        let suspects = self
            .suspects
            .into_iter()
            .map(|mut suspect| {
                suspect.conversation = ConversationLog::new();
                suspect
            })
            .collect();

        Case {
            id: id.into(),
            title: self.title,
            victim: self.victim,
            time: self.time,
            location: self.location,
            description: self.description,
            crime_scene_image: self.crime_scene_image,
            suspects,
            evidence: self.evidence,
            locations: self.locations,
            solution: self.solution,
        }
    }
}

/// One mystery scenario, owned by the investigation session that created it.
///
/// Fields are read-only from outside the crate; the only mutation a case
/// allows is appending to a suspect's conversation log.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    id: String,
    title: String,
    victim: String,
    time: String,
    location: String,
    description: String,
    crime_scene_image: String,
    suspects: Vec<Suspect>,
    evidence: Vec<Evidence>,
    locations: Vec<Location>,
    solution: Solution,
}

impl Case {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Victim descriptor, e.g. "Marcus Rothwell (Gallery Owner)".
    pub fn victim(&self) -> &str {
        &self.victim
    }

    /// The victim's name without the trailing parenthesised role.
    pub fn victim_name(&self) -> &str {
        match self.victim.find(" (") {
            Some(idx) => self.victim[..idx].trim(),
            None => self.victim.trim(),
        }
    }

    /// When the incident happened.
    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn crime_scene_image(&self) -> &str {
        &self.crime_scene_image
    }

    pub fn suspects(&self) -> &[Suspect] {
        &self.suspects
    }

    pub fn evidence(&self) -> &[Evidence] {
        &self.evidence
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn suspect(&self, id: &str) -> Option<&Suspect> {
        self.suspects.iter().find(|s| s.id == id)
    }

    pub fn suspect_mut(&mut self, id: &str) -> Option<&mut Suspect> {
        self.suspects.iter_mut().find(|s| s.id == id)
    }

    /// Look a suspect up by name, ignoring case.
    pub fn suspect_by_name(&self, name: &str) -> Option<&Suspect> {
        self.suspects
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn suspect_names(&self) -> Vec<&str> {
        self.suspects.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn evidence_item(&self, id: &str) -> Option<&Evidence> {
        self.evidence.iter().find(|e| e.id == id)
    }

    pub fn location_by_id(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    /// Evidence found at a location, in the order the location lists it.
    pub fn evidence_at(&self, location_id: &str) -> Vec<&Evidence> {
        self.location_by_id(location_id)
            .map(|location| {
                location
                    .evidence
                    .iter()
                    .filter_map(|id| self.evidence_item(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Motive labels a deduction may choose from for this case.
    pub fn motive_options(&self) -> Vec<String> {
        options_including(MOTIVE_OPTIONS, &self.solution.motive)
    }

    /// Method labels a deduction may choose from for this case.
    pub fn method_options(&self) -> Vec<String> {
        options_including(METHOD_OPTIONS, &self.solution.method)
    }
}
