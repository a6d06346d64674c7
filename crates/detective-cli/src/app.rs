//! Executes parsed commands against an investigation session.

use case_core::Case;
use investigation::{
    export_notes, format_briefing, format_dossier, format_evidence_log, format_locations,
    format_options, format_report, format_suspects, format_transcript, InvestigationError,
    InvestigationSession, NotesStore,
};
use tracing::debug;

use crate::command::{Command, HELP};

/// The REPL's state: one session plus the detective's notes.
pub struct Detective {
    session: InvestigationSession,
    notes: Box<dyn NotesStore>,
}

impl Detective {
    pub fn new(session: InvestigationSession, notes: impl NotesStore + 'static) -> Self {
        Self {
            session,
            notes: Box::new(notes),
        }
    }

    /// Run one command and return the text to show.
    pub async fn execute(&mut self, command: Command) -> Result<String, InvestigationError> {
        debug!("Executing {:?}", command);

        match command {
            Command::New => {
                let case = self.session.start_case().await;
                Ok(format!("New case opened.\n\n{}", format_briefing(case)))
            }
            Command::Brief => Ok(format_briefing(self.case()?)),
            Command::Suspects => Ok(format_suspects(self.case()?)),
            Command::Suspect(key) => {
                let id = self.session.resolve_suspect(&key)?;
                let suspect = self
                    .case()?
                    .suspect(&id)
                    .ok_or(InvestigationError::UnknownSuspect(key))?;
                Ok(format!(
                    "{}\n\n{}",
                    format_dossier(suspect),
                    format_transcript(suspect.conversation(), Some(&suspect.name))
                ))
            }
            Command::Evidence => Ok(format_evidence_log(self.case()?)),
            Command::Locations => Ok(format_locations(self.case()?)),
            Command::Ask(text) => {
                let reply = self.session.ask_assistant(&text).await?;
                Ok(format!("Assistant: {}", reply.text()))
            }
            Command::Question { suspect, text } => {
                let id = self.session.resolve_suspect(&suspect)?;
                let reply = self.session.interrogate(&id, &text).await?;
                let name = self
                    .case()?
                    .suspect(&id)
                    .map(|s| s.name.clone())
                    .unwrap_or(suspect);
                Ok(format!("{}: {}", name, reply.text()))
            }
            Command::Log => {
                let log = self
                    .session
                    .assistant_log()
                    .ok_or(InvestigationError::NoActiveCase)?;
                Ok(format_transcript(log, None))
            }
            Command::Options => Ok(format_options(self.case()?)),
            Command::Accuse(submission) => {
                let report = self.session.submit_deduction(&submission).await?;
                Ok(format_report(&report))
            }
            Command::Note(line) => {
                let id = self.case()?.id().to_string();
                self.notes.append(&id, &line).await?;
                Ok("Noted.".to_string())
            }
            Command::Notes => {
                let id = self.case()?.id().to_string();
                let notes = self.notes.load(&id).await?;
                if notes.is_empty() {
                    Ok("(no notes yet)".to_string())
                } else {
                    Ok(notes)
                }
            }
            Command::Export => {
                let case = self.case()?;
                let notes = self.notes.load(case.id()).await?;
                Ok(export_notes(case, &notes))
            }
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => Ok("Goodbye.".to_string()),
        }
    }

    fn case(&self) -> Result<&Case, InvestigationError> {
        self.session.case().ok_or(InvestigationError::NoActiveCase)
    }
}
