//! Investigation session: owns the active case and drives every user action.

use std::time::Duration;

use canned_brain::{CannedBrain, DelayedBrain};
use case_core::{
    evaluate, Case, ConversationLog, ConversationMessage, DeductionSubmission, DeductionVerdict,
    RandomSource, ReplyContext, Responder,
};
use case_repository::CaseRepository;
use serde::Serialize;
use tokio::time::{sleep, Instant};
use tracing::{debug, info};

use crate::config::InvestigationConfig;
use crate::error::InvestigationError;

/// The result of scoring a deduction. Shown once, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionReport {
    pub case_id: String,
    pub verdict: DeductionVerdict,
    pub message: &'static str,
    /// Time since the case was started.
    pub time_spent: Duration,
}

struct ActiveCase {
    case: Case,
    assistant_log: ConversationLog,
    started: Instant,
}

/// One detective's investigation.
///
/// The session holds at most one case at a time. Each action runs to
/// completion before the next begins; `&mut self` on the mutating
/// operations makes that explicit.
///
/// Flow:
/// 1. [`start_case`](Self::start_case) picks a case (discarding any previous one)
/// 2. [`ask_assistant`](Self::ask_assistant) and [`interrogate`](Self::interrogate)
///    append exchanges to the case's logs
/// 3. [`submit_deduction`](Self::submit_deduction) validates and scores an answer
pub struct InvestigationSession {
    repository: CaseRepository,
    assistant: Box<dyn Responder>,
    interrogator: Box<dyn Responder>,
    deduction_delay: Duration,
    generation_delay: Duration,
    active: Option<ActiveCase>,
}

impl InvestigationSession {
    /// Create a session from its parts, with no simulated scoring or generation delay.
    pub fn new(
        repository: CaseRepository,
        assistant: impl Responder + 'static,
        interrogator: impl Responder + 'static,
    ) -> Self {
        Self {
            repository,
            assistant: Box::new(assistant),
            interrogator: Box::new(interrogator),
            deduction_delay: Duration::ZERO,
            generation_delay: Duration::ZERO,
            active: None,
        }
    }

    /// Create a session from configuration.
    ///
    /// Every random choice in the session draws from one source seeded by
    /// `config.seed`. A template file that cannot be used is logged and the
    /// built-in templates are used instead.
    pub fn from_config(config: &InvestigationConfig) -> Self {
        let rng = RandomSource::from_seed(config.seed);
        if let Some(seed) = rng.seed() {
            info!("Using random seed {}", seed);
        }

        let repository = CaseRepository::load(config.templates_file.as_deref(), rng.clone());

        let assistant = DelayedBrain::new(CannedBrain::assistant(rng.clone()), config.assistant_delay)
            .with_jitter(config.assistant_jitter, rng.clone());
        let interrogator = DelayedBrain::new(
            CannedBrain::suspect(rng.clone()).with_mood_bias(config.mood_bias),
            config.suspect_delay,
        )
        .with_jitter(config.suspect_jitter, rng);

        Self::new(repository, assistant, interrogator)
            .with_deduction_delay(config.deduction_delay)
            .with_generation_delay(config.generation_delay)
    }

    /// Create a session from environment variables.
    pub fn from_env() -> Self {
        Self::from_config(&InvestigationConfig::from_env())
    }

    pub fn with_deduction_delay(mut self, delay: Duration) -> Self {
        self.deduction_delay = delay;
        self
    }

    pub fn with_generation_delay(mut self, delay: Duration) -> Self {
        self.generation_delay = delay;
        self
    }

    /// Start a new case, discarding the current one and all its conversations.
    pub async fn start_case(&mut self) -> &Case {
        if !self.generation_delay.is_zero() {
            sleep(self.generation_delay).await;
        }

        let case = self.repository.generate();
        if let Some(previous) = self.active.take() {
            info!("Closing case {}", previous.case.id());
        }
        info!("Opened case {}: {}", case.id(), case.title());

        let active = self.active.insert(ActiveCase {
            case,
            assistant_log: ConversationLog::new(),
            started: Instant::now(),
        });
        &active.case
    }

    /// Close the active case, returning it.
    pub fn end_case(&mut self) -> Option<Case> {
        self.active.take().map(|active| active.case)
    }

    pub fn case(&self) -> Option<&Case> {
        self.active.as_ref().map(|a| &a.case)
    }

    /// The case-level assistant chat.
    pub fn assistant_log(&self) -> Option<&ConversationLog> {
        self.active.as_ref().map(|a| &a.assistant_log)
    }

    /// Time since the active case was started.
    pub fn elapsed(&self) -> Option<Duration> {
        self.active.as_ref().map(|a| a.started.elapsed())
    }

    /// Find a suspect id by id or by name (case-insensitive).
    pub fn resolve_suspect(&self, key: &str) -> Result<String, InvestigationError> {
        let case = self.case().ok_or(InvestigationError::NoActiveCase)?;
        let key = key.trim();

        case.suspect(key)
            .or_else(|| case.suspect_by_name(key))
            .map(|s| s.id.clone())
            .ok_or_else(|| InvestigationError::UnknownSuspect(key.to_string()))
    }

    /// Send a message to the assistant and return its reply.
    ///
    /// Both the question and the reply are appended to the assistant log.
    pub async fn ask_assistant(
        &mut self,
        text: &str,
    ) -> Result<ConversationMessage, InvestigationError> {
        let text = non_empty(text)?;
        let active = self.active.as_mut().ok_or(InvestigationError::NoActiveCase)?;

        active.assistant_log.append(ConversationMessage::user(text));

        let reply = self
            .assistant
            .respond(text, &ReplyContext::for_case(&active.case))
            .await;
        debug!("Assistant replied in case {}", active.case.id());

        Ok(active
            .assistant_log
            .append(ConversationMessage::assistant(reply))
            .clone())
    }

    /// Question a suspect and return their answer.
    ///
    /// Both the question and the answer are appended to that suspect's log.
    pub async fn interrogate(
        &mut self,
        suspect_id: &str,
        text: &str,
    ) -> Result<ConversationMessage, InvestigationError> {
        let text = non_empty(text)?;
        let active = self.active.as_mut().ok_or(InvestigationError::NoActiveCase)?;
        let unknown = || InvestigationError::UnknownSuspect(suspect_id.to_string());

        active
            .case
            .suspect_mut(suspect_id)
            .ok_or_else(unknown)?
            .conversation_mut()
            .append(ConversationMessage::user(text));

        let reply = {
            let suspect = active.case.suspect(suspect_id).ok_or_else(unknown)?;
            debug!("Questioning {} ({})", suspect.name, suspect.mood);
            self.interrogator
                .respond(text, &ReplyContext::for_suspect(&active.case, suspect))
                .await
        };

        let suspect = active.case.suspect_mut(suspect_id).ok_or_else(unknown)?;
        Ok(suspect
            .conversation_mut()
            .append(ConversationMessage::suspect(reply))
            .clone())
    }

    /// Check a submission before scoring.
    ///
    /// All three fields must be filled in, the suspect must be one of the
    /// case's suspects and motive and method must be among the case's options.
    pub fn validate_submission(
        &self,
        submission: &DeductionSubmission,
    ) -> Result<(), InvestigationError> {
        let case = self.case().ok_or(InvestigationError::NoActiveCase)?;
        submission.require_complete()?;

        if !case.suspect_names().contains(&submission.suspect.as_str()) {
            return Err(InvestigationError::UnknownOption {
                field: "suspect",
                value: submission.suspect.clone(),
            });
        }
        if !case.motive_options().contains(&submission.motive) {
            return Err(InvestigationError::UnknownOption {
                field: "motive",
                value: submission.motive.clone(),
            });
        }
        if !case.method_options().contains(&submission.method) {
            return Err(InvestigationError::UnknownOption {
                field: "method",
                value: submission.method.clone(),
            });
        }

        Ok(())
    }

    /// Validate and score a deduction against the active case's solution.
    pub async fn submit_deduction(
        &self,
        submission: &DeductionSubmission,
    ) -> Result<DeductionReport, InvestigationError> {
        self.validate_submission(submission)?;

        if !self.deduction_delay.is_zero() {
            sleep(self.deduction_delay).await;
        }

        let active = self.active.as_ref().ok_or(InvestigationError::NoActiveCase)?;
        let verdict = evaluate(submission, active.case.solution());
        info!(
            "Deduction for case {} scored {} (solved: {})",
            active.case.id(),
            verdict.score,
            verdict.fully_correct
        );

        Ok(DeductionReport {
            case_id: active.case.id().to_string(),
            verdict,
            message: verdict.message(),
            time_spent: active.started.elapsed(),
        })
    }
}

fn non_empty(text: &str) -> Result<&str, InvestigationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(InvestigationError::EmptyMessage)
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_core::{CaseError, Sender};

    fn session() -> InvestigationSession {
        InvestigationSession::from_config(&InvestigationConfig::builder().seed(11).no_delays().build())
    }

    #[tokio::test]
    async fn test_actions_need_a_case() {
        let mut session = session();

        assert!(matches!(
            session.ask_assistant("hello").await,
            Err(InvestigationError::NoActiveCase)
        ));
        assert!(matches!(
            session.interrogate("1", "hello").await,
            Err(InvestigationError::NoActiveCase)
        ));
        assert!(matches!(
            session.submit_deduction(&DeductionSubmission::new("a", "b", "c")).await,
            Err(InvestigationError::NoActiveCase)
        ));
        assert!(session.case().is_none());
    }

    #[tokio::test]
    async fn test_assistant_exchange_is_logged() {
        let mut session = session();
        session.start_case().await;

        let reply = session.ask_assistant("  Who are the suspects?  ").await.unwrap();
        assert_eq!(reply.sender(), Sender::Assistant);
        assert!(!reply.text().is_empty());

        let log = session.assistant_log().unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.messages()[0].sender(), Sender::User);
        assert_eq!(log.messages()[0].text(), "Who are the suspects?");
        assert_eq!(log.messages()[1].id(), reply.id());
    }

    #[tokio::test]
    async fn test_empty_message_rejected() {
        let mut session = session();
        session.start_case().await;

        assert!(matches!(
            session.ask_assistant("   ").await,
            Err(InvestigationError::EmptyMessage)
        ));
        assert!(session.assistant_log().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_interrogation_is_logged_per_suspect() {
        let mut session = session();
        session.start_case().await;

        session.interrogate("1", "Where were you?").await.unwrap();
        session.interrogate("1", "Anything else?").await.unwrap();

        let case = session.case().unwrap();
        assert_eq!(case.suspect("1").unwrap().conversation().len(), 4);
        assert!(case.suspect("2").unwrap().conversation().is_empty());
        assert!(session.assistant_log().unwrap().is_empty());

        let senders: Vec<Sender> = case
            .suspect("1")
            .unwrap()
            .conversation()
            .iter()
            .map(|m| m.sender())
            .collect();
        assert_eq!(
            senders,
            vec![Sender::User, Sender::Suspect, Sender::User, Sender::Suspect]
        );
    }

    #[tokio::test]
    async fn test_unknown_suspect() {
        let mut session = session();
        session.start_case().await;

        assert!(matches!(
            session.interrogate("99", "hello").await,
            Err(InvestigationError::UnknownSuspect(id)) if id == "99"
        ));
    }

    #[tokio::test]
    async fn test_resolve_suspect_by_name() {
        let mut session = session();
        let name = session.start_case().await.suspects()[1].name.to_uppercase();

        assert_eq!(session.resolve_suspect(&name).unwrap(), "2");
        assert_eq!(session.resolve_suspect("3").unwrap(), "3");
        assert!(session.resolve_suspect("nobody").is_err());
    }

    #[tokio::test]
    async fn test_new_case_discards_old_logs() {
        let mut session = session();
        let first_id = session.start_case().await.id().to_string();
        session.ask_assistant("clue?").await.unwrap();

        let second_id = session.start_case().await.id().to_string();
        assert_ne!(first_id, second_id);
        assert!(session.assistant_log().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_incomplete_submission_rejected() {
        let mut session = session();
        session.start_case().await;

        let result = session
            .submit_deduction(&DeductionSubmission::new("", "Revenge", ""))
            .await;
        assert!(matches!(
            result,
            Err(InvestigationError::Case(CaseError::EmptySubmission(ref fields)))
                if fields == &vec!["suspect", "method"]
        ));
    }

    #[tokio::test]
    async fn test_unknown_option_rejected() {
        let mut session = session();
        let suspect = session.start_case().await.suspects()[0].name.clone();

        let result = session
            .submit_deduction(&DeductionSubmission::new(suspect, "Boredom", "Poisoning"))
            .await;
        assert!(matches!(
            result,
            Err(InvestigationError::UnknownOption { field: "motive", .. })
        ));
    }

    #[tokio::test]
    async fn test_correct_deduction_solves_case() {
        let mut session = session();
        let solution = session.start_case().await.solution().clone();

        let submission =
            DeductionSubmission::new(solution.suspect, solution.motive, solution.method);
        let report = session.submit_deduction(&submission).await.unwrap();

        assert_eq!(report.verdict.score, 100);
        assert!(report.verdict.fully_correct);
        assert_eq!(
            report.message,
            "Excellent detective work! You've solved the case with precision and skill."
        );
        assert_eq!(Some(report.case_id.as_str()), session.case().map(|c| c.id()));
    }

    #[tokio::test]
    async fn test_end_case() {
        let mut session = session();
        session.start_case().await;

        assert!(session.end_case().is_some());
        assert!(session.case().is_none());
        assert!(session.end_case().is_none());
    }
}
