//! Newsletter subscription service.
//!
//! Turns an email/password pair into a [`SubmissionOutcome`]. Creates a
//! Shopify customer with marketing consent; an email that is already
//! registered is reported as a successful subscription.

use newsletter_signup_core::SubmissionOutcome;
use thiserror::Error;
use tracing::instrument;

use crate::config::ShopifyStorefrontConfig;
use crate::shopify::{
    CustomerCreateData, CustomerCreateInput, GraphQLResponse, ShopifyError, StorefrontClient,
};

/// Fatal configuration problems. Aborts the call before any network attempt.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// No Storefront access token is configured.
    #[error("Storefront access token is not configured")]
    MissingAccessToken,

    /// The configured token can't be sent as a header.
    #[error("Storefront access token is not a valid header value")]
    InvalidAccessToken,

    /// The store domain can't form an endpoint URL.
    #[error("Invalid Storefront endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Submits newsletter signups to the Storefront API.
///
/// Holds no state between calls; the caller is responsible for not starting
/// a second submission while one is in flight.
#[derive(Clone)]
pub struct SubscriptionClient {
    storefront: StorefrontClient,
}

impl SubscriptionClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidEndpoint`] if the store domain is
    /// unusable.
    pub fn new(config: &ShopifyStorefrontConfig) -> Result<Self, ConfigurationError> {
        let storefront = StorefrontClient::new(config).map_err(|e| match e {
            ShopifyError::InvalidEndpoint(reason) => ConfigurationError::InvalidEndpoint(reason),
            other => ConfigurationError::InvalidEndpoint(other.to_string()),
        })?;
        Ok(Self::from_storefront(storefront))
    }

    /// Wrap an existing Storefront client.
    #[must_use]
    pub const fn from_storefront(storefront: StorefrontClient) -> Self {
        Self { storefront }
    }

    /// Subscribe `email` to the newsletter.
    ///
    /// Sends exactly one `customerCreate` request. Every remote or transport
    /// failure resolves to a failed [`SubmissionOutcome`]; transport causes are
    /// logged, never returned.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when no usable access token is
    /// configured. No request is sent in that case.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn submit(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SubmissionOutcome, ConfigurationError> {
        if !self.storefront.has_access_token() {
            tracing::error!("Newsletter signup attempted without a Storefront access token");
            return Err(ConfigurationError::MissingAccessToken);
        }

        let input = CustomerCreateInput::newsletter(email, password);

        let outcome = match self.storefront.customer_create(&input).await {
            Ok(response) => classify(&response),
            Err(ShopifyError::MissingAccessToken) => {
                return Err(ConfigurationError::MissingAccessToken);
            }
            Err(ShopifyError::InvalidAccessToken) => {
                tracing::error!("Storefront access token is not a valid header value");
                return Err(ConfigurationError::InvalidAccessToken);
            }
            Err(e) => {
                tracing::error!(error = %e, "Newsletter signup request failed");
                SubmissionOutcome::transport_failure()
            }
        };

        if outcome.success {
            tracing::info!(message = %outcome.message, "Newsletter subscription successful");
        } else {
            tracing::warn!(message = %outcome.message, "Newsletter subscription rejected");
        }

        Ok(outcome)
    }
}

/// Classify a `customerCreate` response. First match wins:
///
/// 1. top-level `errors` → failure with the first message
/// 2. `customerUserErrors` → duplicate signups become success, others fail
/// 3. `customer` present → success
/// 4. anything else → unexpected response
#[must_use]
pub fn classify(response: &GraphQLResponse<CustomerCreateData>) -> SubmissionOutcome {
    if let Some(errors) = response.errors() {
        return SubmissionOutcome::failure(
            errors
                .first_message()
                .unwrap_or(SubmissionOutcome::GRAPHQL_ERROR),
        );
    }

    let Some(payload) = response
        .data
        .as_ref()
        .and_then(|data| data.customer_create.as_ref())
    else {
        return SubmissionOutcome::unexpected_response();
    };

    if let Some(user_error) = payload.customer_user_errors.first() {
        if is_already_subscribed(&user_error.message) {
            tracing::info!(
                code = ?user_error.code,
                "Email already registered - treating as success"
            );
            return SubmissionOutcome::already_subscribed();
        }
        return SubmissionOutcome::failure(user_error.message.clone());
    }

    if payload.customer.is_some() {
        return SubmissionOutcome::subscribed();
    }

    SubmissionOutcome::unexpected_response()
}

/// Whether a `customerUserErrors` message means the email is already on file.
///
/// Matches Shopify's English text ("Email has already been taken"),
/// case-sensitively. Swap for the `TAKEN` error code if the message ever
/// changes.
#[must_use]
pub fn is_already_subscribed(message: &str) -> bool {
    message.contains("taken") || message.contains("already")
}
