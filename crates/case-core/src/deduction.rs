//! Deduction submissions and weighted scoring.

use serde::{Deserialize, Serialize};

use crate::error::CaseError;
use crate::model::Solution;

/// Points for naming the right culprit.
pub const SUSPECT_WEIGHT: u8 = 40;
/// Points for naming the right motive.
pub const MOTIVE_WEIGHT: u8 = 30;
/// Points for naming the right method.
pub const METHOD_WEIGHT: u8 = 30;

/// A detective's final answer: who, why and how.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionSubmission {
    pub suspect: String,
    pub motive: String,
    pub method: String,
}

impl DeductionSubmission {
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

    /// Names of the fields left blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("suspect", &self.suspect),
            ("motive", &self.motive),
            ("method", &self.method),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Fail with [`CaseError::EmptySubmission`] when any field is blank.
    ///
    /// This is for callers; [`evaluate`] itself accepts incomplete submissions.
    pub fn require_complete(&self) -> Result<(), CaseError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CaseError::EmptySubmission(missing))
        }
    }
}

/// Which parts of a deduction matched, and the resulting score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionVerdict {
    pub matched_suspect: bool,
    pub matched_motive: bool,
    pub matched_method: bool,
    /// One of 0, 30, 40, 60, 70 or 100.
    pub score: u8,
    pub fully_correct: bool,
}

impl DeductionVerdict {
    /// At least one of the three fields matched.
    pub fn partially_correct(&self) -> bool {
        self.matched_suspect || self.matched_motive || self.matched_method
    }

    pub fn outcome(&self) -> DeductionOutcome {
        if self.fully_correct {
            DeductionOutcome::Solved
        } else if self.partially_correct() {
            DeductionOutcome::OnTrack
        } else {
            DeductionOutcome::Mismatch
        }
    }

    pub fn message(&self) -> &'static str {
        self.outcome().message()
    }
}

/// Coarse outcome used to pick the feedback message.
///
/// Partial correctness only changes the message; the score is always the
/// plain weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionOutcome {
    Solved,
    OnTrack,
    Mismatch,
}

impl DeductionOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            DeductionOutcome::Solved => {
                "Excellent detective work! You've solved the case with precision and skill."
            }
            DeductionOutcome::OnTrack => {
                "You're on the right track, but some details don't match the evidence. Keep investigating!"
            }
            DeductionOutcome::Mismatch => {
                "Your deduction doesn't align with the evidence. Review the case and try again."
            }
        }
    }
}

/// Exact, case-sensitive match. A blank submitted field never matches.
fn matches(submitted: &str, expected: &str) -> bool {
    !submitted.trim().is_empty() && submitted == expected
}

/// Score a submission against the ground truth.
///
/// Comparison is exact string equality on the stored labels; no label is
/// checked against an option list here. Never fails.
pub fn evaluate(submission: &DeductionSubmission, solution: &Solution) -> DeductionVerdict {
    let matched_suspect = matches(&submission.suspect, &solution.suspect);
    let matched_motive = matches(&submission.motive, &solution.motive);
    let matched_method = matches(&submission.method, &solution.method);

    let mut score = 0;
    if matched_suspect {
        score += SUSPECT_WEIGHT;
    }
    if matched_motive {
        score += MOTIVE_WEIGHT;
    }
    if matched_method {
        score += METHOD_WEIGHT;
    }

    DeductionVerdict {
        matched_suspect,
        matched_motive,
        matched_method,
        score,
        fully_correct: matched_suspect && matched_motive && matched_method,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution() -> Solution {
        Solution::new("Elena Vasquez", "Financial Gain", "Inside Job")
    }

    #[test]
    fn test_fully_correct() {
        let submission = DeductionSubmission::new("Elena Vasquez", "Financial Gain", "Inside Job");
        let verdict = evaluate(&submission, &solution());

        assert_eq!(verdict.score, 100);
        assert!(verdict.fully_correct);
        assert_eq!(verdict.outcome(), DeductionOutcome::Solved);
    }

    #[test]
    fn test_suspect_only() {
        let submission = DeductionSubmission::new("Elena Vasquez", "Revenge", "Poisoning");
        let verdict = evaluate(&submission, &solution());

        assert_eq!(verdict.score, 40);
        assert!(!verdict.fully_correct);
        assert!(verdict.matched_suspect);
        assert!(!verdict.matched_motive);
        assert!(!verdict.matched_method);
        assert_eq!(verdict.outcome(), DeductionOutcome::OnTrack);
    }

    #[test]
    fn test_motive_and_method_without_suspect() {
        let submission = DeductionSubmission::new("Sarah Chen", "Financial Gain", "Inside Job");
        let verdict = evaluate(&submission, &solution());
        assert_eq!(verdict.score, 60);
        assert!(verdict.partially_correct());
    }

    #[test]
    fn test_nothing_matches() {
        let submission = DeductionSubmission::new("Sarah Chen", "Revenge", "Poisoning");
        let verdict = evaluate(&submission, &solution());

        assert_eq!(verdict.score, 0);
        assert!(!verdict.partially_correct());
        assert_eq!(
            verdict.message(),
            "Your deduction doesn't align with the evidence. Review the case and try again."
        );
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let submission = DeductionSubmission::new("elena vasquez", "financial gain", "inside job");
        assert_eq!(evaluate(&submission, &solution()).score, 0);
    }

    #[test]
    fn test_empty_submission_scores_zero() {
        let verdict = evaluate(&DeductionSubmission::default(), &solution());
        assert_eq!(verdict.score, 0);
        assert!(!verdict.fully_correct);
    }

    #[test]
    fn test_blank_never_matches_blank_solution() {
        let blank = Solution::new("", "", "");
        let verdict = evaluate(&DeductionSubmission::default(), &blank);
        assert_eq!(verdict.score, 0);
    }

    #[test]
    fn test_whitespace_never_matches_whitespace_solution() {
        let solution = Solution::new("Elena Vasquez", "  ", "Inside Job");
        let submission = DeductionSubmission::new("Elena Vasquez", "  ", "Inside Job");

        let verdict = evaluate(&submission, &solution);
        assert!(!verdict.matched_motive);
        assert_eq!(verdict.score, 70);
        assert!(!verdict.fully_correct);
        assert_eq!(submission.missing_fields(), vec!["motive"]);
    }

    #[test]
    fn test_missing_fields() {
        let submission = DeductionSubmission::new("Elena Vasquez", " ", "");
        assert_eq!(submission.missing_fields(), vec!["motive", "method"]);
        assert!(!submission.is_complete());

        let err = submission.require_complete().unwrap_err();
        assert_eq!(err, CaseError::EmptySubmission(vec!["motive", "method"]));
        assert_eq!(err.to_string(), "deduction incomplete, missing: motive, method");
    }

    #[test]
    fn test_complete_submission() {
        let submission = DeductionSubmission::new("A", "B", "C");
        assert!(submission.require_complete().is_ok());
    }
}
