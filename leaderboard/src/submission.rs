//! Score submission state machine
//!
//! Tracks one final score through the external "submit score" call. The score
//! is kept across failures so the host can retry without replaying the game.

use crate::LeaderboardError;
use serde::{Deserialize, Serialize};

/// Submission states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionState {
    /// No final score yet
    Idle,
    /// Score known, not sent
    Ready,
    /// Transaction sent, waiting for confirmation
    Pending,
    Confirmed,
    Failed,
}

impl SubmissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Ready => "Ready",
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Failed => "Failed",
        }
    }
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionAction {
    ScoreReady,
    Submit,
    Confirm,
    Fail,
    Retry,
    Reset,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: SubmissionState,
    pub to_state: SubmissionState,
    pub action: SubmissionAction,
}

#[derive(Debug, Clone)]
pub struct Submission {
    state: SubmissionState,
    score: Option<u64>,
    attempts: u32,
    last_error: Option<String>,
    tx_hash: Option<String>,
}

impl Submission {
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
            score: None,
            attempts: 0,
            last_error: None,
            tx_hash: None,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn score(&self) -> Option<u64> {
        self.score
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn tx_hash(&self) -> Option<&str> {
        self.tx_hash.as_deref()
    }

    /// Attempt a bare transition
    pub fn transition(&mut self, action: SubmissionAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            log::debug!("submission: {action:?} ignored in {from_state:?}");
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    fn get_next_state(&self, action: SubmissionAction) -> Option<SubmissionState> {
        use SubmissionAction as A;
        use SubmissionState as S;

        match (self.state, action) {
            // A new final score replaces anything not in flight
            (S::Idle | S::Ready | S::Confirmed | S::Failed, A::ScoreReady) => Some(S::Ready),

            (S::Ready, A::Submit) => Some(S::Pending),
            (S::Failed, A::Retry) => Some(S::Pending),

            (S::Pending, A::Confirm) => Some(S::Confirmed),
            (S::Pending, A::Fail) => Some(S::Failed),

            (S::Idle | S::Ready | S::Confirmed | S::Failed, A::Reset) => Some(S::Idle),

            _ => None,
        }
    }

    /// Record the final score reported by the engine
    pub fn record_score(&mut self, score: u64) -> TransitionResult {
        let result = self.transition(SubmissionAction::ScoreReady);
        if result.success {
            self.score = Some(score);
            self.attempts = 0;
            self.last_error = None;
            self.tx_hash = None;
            log::info!("submission: final score {score} ready");
        }
        result
    }

    /// Start (or retry) sending the score; returns the score to submit
    pub fn begin(&mut self) -> Result<u64, LeaderboardError> {
        let action = match self.state {
            SubmissionState::Failed => SubmissionAction::Retry,
            _ => SubmissionAction::Submit,
        };
        let score = self
            .score
            .ok_or(LeaderboardError::NothingToSubmit(self.state.as_str()))?;

        if !self.transition(action).success {
            return Err(LeaderboardError::NothingToSubmit(self.state.as_str()));
        }
        self.attempts += 1;
        log::info!("submission: sending {score} (attempt {})", self.attempts);
        Ok(score)
    }

    /// The external call went through
    pub fn confirm(&mut self, tx_hash: impl Into<String>) -> TransitionResult {
        let result = self.transition(SubmissionAction::Confirm);
        if result.success {
            self.tx_hash = Some(tx_hash.into());
            self.last_error = None;
        }
        result
    }

    /// The external call failed; the score is kept for a retry
    pub fn fail(&mut self, reason: impl Into<String>) -> TransitionResult {
        let result = self.transition(SubmissionAction::Fail);
        if result.success {
            let reason = reason.into();
            log::warn!("submission: attempt {} failed: {reason}", self.attempts);
            self.last_error = Some(reason);
        }
        result
    }

    /// Forget the score (new session started without submitting)
    pub fn reset(&mut self) -> TransitionResult {
        let result = self.transition(SubmissionAction::Reset);
        if result.success {
            *self = Self::new();
        }
        result
    }

    pub fn is_pending(&self) -> bool {
        self.state == SubmissionState::Pending
    }

    pub fn is_retryable(&self) -> bool {
        self.state == SubmissionState::Failed
    }
}

impl Default for Submission {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let submission = Submission::new();
        assert_eq!(submission.state(), SubmissionState::Idle);
        assert_eq!(submission.score(), None);
    }

    #[test]
    fn test_cannot_submit_without_score() {
        let mut submission = Submission::new();
        assert!(matches!(
            submission.begin(),
            Err(LeaderboardError::NothingToSubmit("Idle"))
        ));
        assert_eq!(submission.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_happy_path() {
        let mut submission = Submission::new();
        submission.record_score(88);
        assert_eq!(submission.state(), SubmissionState::Ready);

        assert_eq!(submission.begin().unwrap(), 88);
        assert!(submission.is_pending());

        let result = submission.confirm("0xabc");
        assert!(result.success);
        assert_eq!(result.from_state, SubmissionState::Pending);
        assert_eq!(result.to_state, SubmissionState::Confirmed);
        assert_eq!(submission.tx_hash(), Some("0xabc"));
        assert_eq!(submission.attempts(), 1);
    }

    #[test]
    fn test_failure_keeps_score_for_retry() {
        let mut submission = Submission::new();
        submission.record_score(42);
        submission.begin().unwrap();
        submission.fail("user rejected");

        assert!(submission.is_retryable());
        assert_eq!(submission.score(), Some(42));
        assert_eq!(submission.last_error(), Some("user rejected"));

        assert_eq!(submission.begin().unwrap(), 42, "Retry resends the same score");
        assert_eq!(submission.attempts(), 2);
        submission.confirm("0xdef");
        assert_eq!(submission.state(), SubmissionState::Confirmed);
        assert_eq!(submission.last_error(), None);
    }

    #[test]
    fn test_no_double_submit_while_pending() {
        let mut submission = Submission::new();
        submission.record_score(5);
        submission.begin().unwrap();
        assert!(submission.begin().is_err());
        assert!(!submission.record_score(6).success, "In-flight score is not replaced");
        assert_eq!(submission.score(), Some(5));
        assert_eq!(submission.attempts(), 1);
    }

    #[test]
    fn test_confirm_without_pending_is_rejected() {
        let mut submission = Submission::new();
        let result = submission.confirm("0x1");
        assert!(!result.success);
        assert_eq!(result.to_state, SubmissionState::Idle);
        assert_eq!(submission.tx_hash(), None);
    }

    #[test]
    fn test_new_score_after_confirmation() {
        let mut submission = Submission::new();
        submission.record_score(10);
        submission.begin().unwrap();
        submission.confirm("0x1");

        submission.record_score(20);
        assert_eq!(submission.state(), SubmissionState::Ready);
        assert_eq!(submission.score(), Some(20));
        assert_eq!(submission.attempts(), 0);
        assert_eq!(submission.tx_hash(), None);
    }

    #[test]
    fn test_reset() {
        let mut submission = Submission::new();
        submission.record_score(10);
        assert!(submission.reset().success);
        assert_eq!(submission.state(), SubmissionState::Idle);
        assert_eq!(submission.score(), None);

        submission.record_score(11);
        submission.begin().unwrap();
        assert!(!submission.reset().success, "Cannot drop an in-flight submission");
    }
}
