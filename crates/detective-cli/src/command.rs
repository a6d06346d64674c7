//! REPL command parsing.

use case_core::DeductionSubmission;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  new                              Start a new case (discards the current one)
  brief                            Show the case briefing
  suspects                         List the suspects
  suspect <id|name>                Show a suspect's profile and interrogation
  evidence                         Show the evidence log
  locations                        Show the locations and what was found there
  ask <text>                       Ask the assistant
  question <id> <text>             Question a suspect
  log                              Show the assistant conversation
  options                          Show the deduction choices
  accuse <suspect> | <motive> | <method>
                                   Submit a deduction
  note <text>                      Add a line to your notes
  notes                            Show your notes
  export                           Print your notes for saving
  help                             Show this help
  quit                             Leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New,
    Brief,
    Suspects,
    Suspect(String),
    Evidence,
    Locations,
    Ask(String),
    Question { suspect: String, text: String },
    Log,
    Options,
    Accuse(DeductionSubmission),
    Note(String),
    Notes,
    Export,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}'; type 'help' for a list")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "new" => Command::New,
            "brief" => Command::Brief,
            "suspects" => Command::Suspects,
            "suspect" => Command::Suspect(required(rest, "suspect <id|name>")?),
            "evidence" => Command::Evidence,
            "locations" => Command::Locations,
            "ask" => Command::Ask(required(rest, "ask <text>")?),
            "question" => {
                let usage = "question <id> <text>";
                let (suspect, text) = rest
                    .split_once(char::is_whitespace)
                    .ok_or(CommandError::Usage(usage))?;
                Command::Question {
                    suspect: suspect.to_string(),
                    text: required(text, usage)?,
                }
            }
            "log" => Command::Log,
            "options" => Command::Options,
            "accuse" => Command::Accuse(parse_accusation(rest)?),
            "note" => Command::Note(required(rest, "note <text>")?),
            "notes" => Command::Notes,
            "export" => Command::Export,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn required(rest: &str, usage: &'static str) -> Result<String, CommandError> {
    let rest = rest.trim();
    if rest.is_empty() {
        Err(CommandError::Usage(usage))
    } else {
        Ok(rest.to_string())
    }
}

// Blank parts are passed through so the session reports which fields are missing.
fn parse_accusation(rest: &str) -> Result<DeductionSubmission, CommandError> {
    let parts: Vec<&str> = rest.split('|').map(str::trim).collect();
    match parts.as_slice() {
        [suspect, motive, method] => Ok(DeductionSubmission::new(*suspect, *motive, *method)),
        _ => Err(CommandError::Usage("accuse <suspect> | <motive> | <method>")),
    }
}
