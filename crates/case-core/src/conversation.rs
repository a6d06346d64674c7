//! Append-only conversation logs.
//!
//! Each case keeps one log for the assistant chat and each suspect keeps its
//! own interrogation log. Messages can only be appended; once in a log they
//! are never edited, reordered or removed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who wrote a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The detective at the keyboard.
    User,
    /// The investigation assistant.
    Assistant,
    /// A suspect under questioning.
    Suspect,
}

impl Sender {
    /// Lowercase label used in transcripts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Assistant => "assistant",
            Sender::Suspect => "suspect",
        }
    }
}

/// A single message in a conversation log.
///
/// Fields are private so a message cannot change after it is created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationMessage {
    id: Uuid,
    sender: Sender,
    text: String,
    timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    audio: Option<String>,
}

impl ConversationMessage {
    /// Create a message stamped with a fresh id and the current time.
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            timestamp: Utc::now(),
            audio: None,
        }
    }

    /// Create a message from the detective.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    /// Create a message from the assistant.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, text)
    }

    /// Create a message from a suspect.
    pub fn suspect(text: impl Into<String>) -> Self {
        Self::new(Sender::Suspect, text)
    }

    /// Attach an audio reference before the message is appended.
    pub fn with_audio(mut self, audio: impl Into<String>) -> Self {
        self.audio = Some(audio.into());
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn audio(&self) -> Option<&str> {
        self.audio.as_deref()
    }
}

/// Append-only sequence of conversation messages.
///
/// The only mutating operation is [`ConversationLog::append`]; readers get
/// shared slices, so insertion order is the only order ever observed.
///
/// # Example
///
/// ```rust
/// use case_core::{ConversationLog, ConversationMessage};
///
/// let mut log = ConversationLog::new();
/// log.append(ConversationMessage::user("Where were you at midnight?"));
/// log.append(ConversationMessage::suspect("At home, asleep."));
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.messages()[0].text(), "Where were you at midnight?");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConversationLog {
    messages: Vec<ConversationMessage>,
}

impl ConversationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return a reference to the stored copy.
    pub fn append(&mut self, message: ConversationMessage) -> &ConversationMessage {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    /// All messages in the order they were appended.
    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConversationMessage> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&ConversationMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<'a> IntoIterator for &'a ConversationLog {
    type Item = &'a ConversationMessage;
    type IntoIter = std::slice::Iter<'a, ConversationMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut log = ConversationLog::new();

        log.append(ConversationMessage::user("First"));
        log.append(ConversationMessage::assistant("Second"));
        log.append(ConversationMessage::user("Third"));

        let texts: Vec<&str> = log.iter().map(|m| m.text()).collect();
        assert_eq!(texts, vec!["First", "Second", "Third"]);
        assert_eq!(log.messages()[1].sender(), Sender::Assistant);
    }

    #[test]
    fn test_append_returns_stored_message() {
        let mut log = ConversationLog::new();
        let message = ConversationMessage::suspect("I was at the cafe.");
        let id = message.id();

        let stored = log.append(message);
        assert_eq!(stored.id(), id);
        assert_eq!(log.last().map(|m| m.id()), Some(id));
    }

    #[test]
    fn test_new_log_is_empty() {
        let log = ConversationLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.last().is_none());
    }

    #[test]
    fn test_messages_get_unique_ids() {
        let a = ConversationMessage::user("same text");
        let b = ConversationMessage::user("same text");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_audio_reference() {
        let message = ConversationMessage::assistant("Listen to this").with_audio("clip-01.mp3");
        assert_eq!(message.audio(), Some("clip-01.mp3"));
        assert!(ConversationMessage::assistant("plain").audio().is_none());
    }

    #[test]
    fn test_serializes_as_array() {
        let mut log = ConversationLog::new();
        log.append(ConversationMessage::user("Hello"));

        let json = serde_json::to_value(&log).unwrap();
        let array = json.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["sender"], "user");
        assert_eq!(array[0]["text"], "Hello");
        assert!(array[0].get("audio").is_none());
    }
}
