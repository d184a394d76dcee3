//! Local input validation.
//!
//! Runs before any network call. Only non-emptiness and password length are
//! checked; the email format is left to the storefront.

use serde::{Deserialize, Serialize};

/// Minimum password length, in characters, after trimming.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Result of validating raw form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationResult {
    /// Input may be submitted.
    Valid,
    /// The trimmed email is empty.
    InvalidEmail,
    /// The trimmed password is empty or shorter than [`MIN_PASSWORD_LENGTH`].
    WeakPassword,
}

impl ValidationResult {
    /// Returns `true` for [`ValidationResult::Valid`].
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Inline message to show next to the form, if any.
    #[must_use]
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::InvalidEmail => Some("Please enter your email address."),
            Self::WeakPassword => Some("Password must be at least 8 characters long."),
        }
    }
}

/// Validate raw email and password input.
///
/// The email is checked first, so input failing both checks reports
/// [`ValidationResult::InvalidEmail`].
#[must_use]
pub fn validate(email: &str, password: &str) -> ValidationResult {
    if email.trim().is_empty() {
        return ValidationResult::InvalidEmail;
    }

    if password.trim().chars().count() < MIN_PASSWORD_LENGTH {
        return ValidationResult::WeakPassword;
    }

    ValidationResult::Valid
}
