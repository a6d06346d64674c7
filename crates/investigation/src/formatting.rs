//! Plain-text rendering of cases, conversations and deduction results.

use std::time::Duration;

use case_core::{Case, ConversationLog, Sender, Suspect};

use crate::session::DeductionReport;

/// Case briefing: the incident, the victim and who is under suspicion.
pub fn format_briefing(case: &Case) -> String {
    format!(
        "{} [{}]\nVictim:   {}\nTime:     {}\nLocation: {}\n\n{}\n\n{} suspects, {} pieces of evidence, {} locations.",
        case.title(),
        case.id(),
        case.victim(),
        case.time(),
        case.location(),
        case.description(),
        case.suspects().len(),
        case.evidence().len(),
        case.locations().len()
    )
}

/// One line per suspect: id, name, role and mood.
pub fn format_suspects(case: &Case) -> String {
    case.suspects()
        .iter()
        .map(|s| format!("[{}] {} - {} ({})", s.id, s.name, s.role, s.mood))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full profile of one suspect.
pub fn format_dossier(suspect: &Suspect) -> String {
    let mut out = format!(
        "{} - {}\nMood:  {}\nAlibi: {}\n{}",
        suspect.name, suspect.role, suspect.mood, suspect.alibi, suspect.bio
    );
    let exchanged = suspect.conversation().len();
    if exchanged > 0 {
        out.push_str(&format!("\n({} messages exchanged)", exchanged));
    }
    out
}

pub fn format_evidence_log(case: &Case) -> String {
    case.evidence()
        .iter()
        .map(|e| {
            format!(
                "[{}] {} @ {}\n    {}\n    Significance: {}",
                e.id, e.title, e.location, e.description, e.significance
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Each location with the evidence found there.
pub fn format_locations(case: &Case) -> String {
    case.locations()
        .iter()
        .map(|location| {
            let found: Vec<&str> = case
                .evidence_at(&location.id)
                .into_iter()
                .map(|e| e.title.as_str())
                .collect();
            let found = if found.is_empty() {
                "nothing yet".to_string()
            } else {
                found.join(", ")
            };
            format!(
                "[{}] {}\n    {}\n    Evidence: {}",
                location.id, location.name, location.description, found
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a conversation, labelling suspect lines with `suspect_name`.
pub fn format_transcript(log: &ConversationLog, suspect_name: Option<&str>) -> String {
    if log.is_empty() {
        return "(no messages yet)".to_string();
    }

    log.iter()
        .map(|message| {
            let speaker = match message.sender() {
                Sender::User => "You",
                Sender::Assistant => "Assistant",
                Sender::Suspect => suspect_name.unwrap_or("Suspect"),
            };
            format!(
                "{} {}: {}",
                message.timestamp().format("%H:%M:%S"),
                speaker,
                message.text()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The suspect, motive and method choices for a case.
pub fn format_options(case: &Case) -> String {
    format!(
        "Suspects: {}\nMotives:  {}\nMethods:  {}",
        case.suspect_names().join(", "),
        case.motive_options().join(", "),
        case.method_options().join(", ")
    )
}

fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    match (secs / 3600, (secs % 3600) / 60, secs % 60) {
        (0, 0, s) => format!("{}s", s),
        (0, m, s) => format!("{}m {}s", m, s),
        (h, m, _) => format!("{}h {}m", h, m),
    }
}

fn mark(matched: bool) -> &'static str {
    if matched {
        "correct"
    } else {
        "wrong"
    }
}

pub fn format_report(report: &DeductionReport) -> String {
    let verdict = &report.verdict;
    format!(
        "{}\nScore: {}/100\nSuspect: {}  Motive: {}  Method: {}\nTime spent: {}",
        report.message,
        verdict.score,
        mark(verdict.matched_suspect),
        mark(verdict.matched_motive),
        mark(verdict.matched_method),
        format_duration(report.time_spent)
    )
}
