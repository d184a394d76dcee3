//! Submission outcome shown to the subscriber.

use serde::{Deserialize, Serialize};

/// Result of one newsletter submission.
///
/// Every path through a submission resolves to one of these. The core never
/// stores it; the view layer renders `message` with a success or error style
/// depending on `success`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    /// Whether the subscriber should see a success-styled message.
    pub success: bool,
    /// User-facing message.
    pub message: String,
}

impl SubmissionOutcome {
    /// Message for a newly created subscriber.
    pub const SUBSCRIBED: &'static str =
        "Successfully subscribed! Check your email for confirmation.";

    /// Message for an email that is already on the list.
    pub const ALREADY_SUBSCRIBED: &'static str = "You are already subscribed to our newsletter!";

    /// Fallback when the top-level `errors` entry carries no message.
    pub const GRAPHQL_ERROR: &'static str = "GraphQL error occurred";

    /// Message when the payload matches none of the known shapes.
    pub const UNEXPECTED_RESPONSE: &'static str = "Unexpected response from server.";

    /// Generic message for transport failures. The cause is only logged.
    pub const TRY_AGAIN_LATER: &'static str = "An error occurred. Please try again later.";

    /// Create a success outcome.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Create a failure outcome.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// A new subscription was created.
    #[must_use]
    pub fn subscribed() -> Self {
        Self::success(Self::SUBSCRIBED)
    }

    /// The email was already subscribed; reported as success.
    #[must_use]
    pub fn already_subscribed() -> Self {
        Self::success(Self::ALREADY_SUBSCRIBED)
    }

    /// The server answered with something we can't interpret.
    #[must_use]
    pub fn unexpected_response() -> Self {
        Self::failure(Self::UNEXPECTED_RESPONSE)
    }

    /// The request never produced a usable response.
    #[must_use]
    pub fn transport_failure() -> Self {
        Self::failure(Self::TRY_AGAIN_LATER)
    }
}
