//! Signup credentials.

use core::fmt;

use secrecy::{ExposeSecret, SecretString};

/// Email/password pair for a single signup submission.
///
/// Exists only for the duration of one submission and is never persisted.
/// `Debug` redacts the password.
#[derive(Clone)]
pub struct Credentials {
    email: String,
    password: SecretString,
}

impl Credentials {
    /// Create credentials from raw form input.
    ///
    /// The email is trimmed; the password is kept exactly as entered.
    #[must_use]
    pub fn new(email: &str, password: impl Into<String>) -> Self {
        Self {
            email: email.trim().to_owned(),
            password: SecretString::from(password.into()),
        }
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password as a secret.
    #[must_use]
    pub const fn password(&self) -> &SecretString {
        &self.password
    }

    /// Exposes the password as a string slice.
    #[must_use]
    pub fn expose_password(&self) -> &str {
        self.password.expose_secret()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
