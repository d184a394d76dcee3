//! Caller-owned form state.
//!
//! The view layer owns a [`FormState`] and threads it through each
//! submission: [`FormState::begin`] before the request, [`FormState::finish`]
//! (or [`FormState::abort`]) after. The submission core never sees it.

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::types::{Credentials, SubmissionOutcome};
use crate::validation::{ValidationResult, validate};

/// How long a notice stays visible before the view should dismiss it.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Errors returned when a submission can't start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    /// A previous submission is still in flight.
    #[error("a submission is already in progress")]
    AlreadySubmitting,
    /// Local validation failed.
    #[error("invalid input: {0:?}")]
    Invalid(ValidationResult),
}

/// Whether a request is outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// Inputs enabled.
    #[default]
    Idle,
    /// Inputs disabled until the outcome arrives.
    Submitting,
}

/// Style of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Message currently shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub shown_at: Instant,
}

impl Notice {
    /// Whether the notice has outlived [`NOTICE_TTL`].
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= NOTICE_TTL
    }
}

/// View state for one signup form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    phase: FormPhase,
    notice: Option<Notice>,
}

impl FormState {
    /// Create an idle form with no notice.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Whether inputs should be disabled.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Start a submission.
    ///
    /// Validates the raw input and, on success, moves to
    /// [`FormPhase::Submitting`] and returns the credentials to submit.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::AlreadySubmitting`] while a submission is
    /// outstanding, or [`FormError::Invalid`] (with an error notice set) when
    /// validation fails.
    pub fn begin(
        &mut self,
        email: &str,
        password: &str,
        now: Instant,
    ) -> Result<Credentials, FormError> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }

        let result = validate(email, password);
        if let Some(message) = result.message() {
            self.notice = Some(Notice {
                kind: NoticeKind::Error,
                text: message.to_owned(),
                shown_at: now,
            });
            return Err(FormError::Invalid(result));
        }

        self.phase = FormPhase::Submitting;
        self.notice = None;
        Ok(Credentials::new(email, password))
    }

    /// Record the outcome of the outstanding submission.
    ///
    /// Returns `true` when the caller should reset the form inputs.
    pub fn finish(&mut self, outcome: &SubmissionOutcome, now: Instant) -> bool {
        self.phase = FormPhase::Idle;
        self.notice = Some(Notice {
            kind: if outcome.success {
                NoticeKind::Success
            } else {
                NoticeKind::Error
            },
            text: outcome.message.clone(),
            shown_at: now,
        });
        outcome.success
    }

    /// Re-enable the form without recording an outcome.
    pub fn abort(&mut self) {
        self.phase = FormPhase::Idle;
    }

    /// Notice to display at `now`, if it hasn't expired.
    #[must_use]
    pub fn visible_notice(&self, now: Instant) -> Option<&Notice> {
        self.notice.as_ref().filter(|notice| !notice.is_expired(now))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_moves_to_submitting() {
        let mut form = FormState::new();
        let now = Instant::now();
        let credentials = form.begin(" user@example.com ", "password123", now).unwrap();
        assert_eq!(credentials.email(), "user@example.com");
        assert!(form.is_submitting());
        assert!(form.visible_notice(now).is_none());
    }

    #[test]
    fn test_begin_rejects_concurrent_submission() {
        let mut form = FormState::new();
        let now = Instant::now();
        form.begin("user@example.com", "password123", now).unwrap();
        assert_eq!(
            form.begin("user@example.com", "password123", now).unwrap_err(),
            FormError::AlreadySubmitting
        );
    }

    #[test]
    fn test_begin_invalid_sets_error_notice() {
        let mut form = FormState::new();
        let now = Instant::now();
        let err = form.begin("user@example.com", "short", now).unwrap_err();
        assert_eq!(err, FormError::Invalid(ValidationResult::WeakPassword));
        assert_eq!(form.phase(), FormPhase::Idle);

        let notice = form.visible_notice(now).unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Password must be at least 8 characters long.");
    }

    #[test]
    fn test_finish_success_requests_reset() {
        let mut form = FormState::new();
        let now = Instant::now();
        form.begin("user@example.com", "password123", now).unwrap();

        let reset = form.finish(&SubmissionOutcome::subscribed(), now);
        assert!(reset);
        assert!(!form.is_submitting());
        assert_eq!(form.visible_notice(now).unwrap().kind, NoticeKind::Success);
    }

    #[test]
    fn test_finish_failure_keeps_inputs() {
        let mut form = FormState::new();
        let now = Instant::now();
        form.begin("user@example.com", "password123", now).unwrap();

        let reset = form.finish(&SubmissionOutcome::failure("Invalid password"), now);
        assert!(!reset);
        assert_eq!(form.visible_notice(now).unwrap().text, "Invalid password");
    }

    #[test]
    fn test_notice_expires() {
        let mut form = FormState::new();
        let now = Instant::now();
        form.begin("user@example.com", "password123", now).unwrap();
        form.finish(&SubmissionOutcome::subscribed(), now);

        assert!(form.visible_notice(now + Duration::from_secs(4)).is_some());
        assert!(form.visible_notice(now + NOTICE_TTL).is_none());
    }

    #[test]
    fn test_abort_reenables_form() {
        let mut form = FormState::new();
        let now = Instant::now();
        form.begin("user@example.com", "password123", now).unwrap();
        form.abort();
        assert!(form.begin("user@example.com", "password123", now).is_ok());
    }
}
