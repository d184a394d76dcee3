//! Shopify Storefront API client implementation.
//!
//! Uses `reqwest` for HTTP with hand-written GraphQL documents. Nothing is
//! cached and nothing is retried.

pub mod queries;

use std::sync::Arc;

use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};
use url::Url;

use crate::config::ShopifyStorefrontConfig;
use crate::shopify::types::{CustomerCreateData, CustomerCreateInput, CustomerCreateVariables};
use crate::shopify::{GraphQLRequest, GraphQLResponse, ShopifyError};

/// Header carrying the Storefront API access token.
const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// Maximum number of body characters copied into log events.
const LOG_BODY_LIMIT: usize = 500;

// =============================================================================
// StorefrontClient
// =============================================================================

/// Client for the Shopify Storefront API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct StorefrontClient {
    inner: Arc<StorefrontClientInner>,
}

struct StorefrontClientInner {
    client: reqwest::Client,
    endpoint: Url,
    access_token: Option<SecretString>,
}

impl StorefrontClient {
    /// Create a new Storefront API client.
    ///
    /// # Errors
    ///
    /// Returns [`ShopifyError::InvalidEndpoint`] if the store domain can't
    /// form a valid endpoint URL.
    pub fn new(config: &ShopifyStorefrontConfig) -> Result<Self, ShopifyError> {
        let endpoint = storefront_endpoint(&config.store, &config.api_version)?;
        Ok(Self::with_endpoint(endpoint, config.access_token.clone()))
    }

    /// Create a client that posts to an explicit endpoint.
    ///
    /// Used for proxies and local test servers.
    #[must_use]
    pub fn with_endpoint(endpoint: Url, access_token: Option<SecretString>) -> Self {
        let access_token = access_token.filter(|token| !token.expose_secret().trim().is_empty());

        Self {
            inner: Arc::new(StorefrontClientInner {
                client: reqwest::Client::new(),
                endpoint,
                access_token,
            }),
        }
    }

    /// GraphQL endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// Whether a non-empty access token is configured.
    #[must_use]
    pub fn has_access_token(&self) -> bool {
        self.inner.access_token.is_some()
    }

    /// Execute a GraphQL document and decode the response envelope.
    ///
    /// The body is decoded regardless of HTTP status: Shopify reports auth
    /// and throttling failures as JSON `errors` with a 4xx status.
    async fn execute<V, T>(
        &self,
        query: &str,
        variables: V,
    ) -> Result<GraphQLResponse<T>, ShopifyError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let token = self
            .inner
            .access_token
            .as_ref()
            .ok_or(ShopifyError::MissingAccessToken)?;
        let mut token_header = HeaderValue::from_str(token.expose_secret())
            .map_err(|_| ShopifyError::InvalidAccessToken)?;
        token_header.set_sensitive(true);

        let response = self
            .inner
            .client
            .post(self.inner.endpoint.clone())
            .header(ACCESS_TOKEN_HEADER, token_header)
            .header("Content-Type", "application/json")
            .json(&GraphQLRequest { query, variables })
            .send()
            .await?;

        let status = response.status();

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                status = %status,
                body = %truncate(&response_text),
                "Shopify API returned non-success status"
            );
        }

        let response: GraphQLResponse<T> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    status = %status,
                    body = %truncate(&response_text),
                    "Failed to parse Shopify GraphQL response"
                );
                return Err(ShopifyError::Parse(e));
            }
        };

        if let Some(errors) = response.errors() {
            debug!(errors = %errors, "GraphQL errors in response");
        }

        Ok(response)
    }

    // =========================================================================
    // Customer Methods
    // =========================================================================

    /// Run the `customerCreate` mutation.
    ///
    /// Returns the raw response envelope; top-level `errors` and
    /// `customerUserErrors` are not turned into `Err`.
    ///
    /// # Errors
    ///
    /// Returns an error if no access token is configured, the request fails,
    /// or the body is not a GraphQL JSON response.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn customer_create(
        &self,
        input: &CustomerCreateInput,
    ) -> Result<GraphQLResponse<CustomerCreateData>, ShopifyError> {
        self.execute(queries::CUSTOMER_CREATE, CustomerCreateVariables { input })
            .await
    }
}

/// Build `https://{store}/api/{api_version}/graphql.json`.
fn storefront_endpoint(store: &str, api_version: &str) -> Result<Url, ShopifyError> {
    let store = store.trim();
    if store.is_empty() || store.contains(['/', '?', '#', '@', ' ']) {
        return Err(ShopifyError::InvalidEndpoint(format!(
            "store must be a bare domain (got '{store}')"
        )));
    }

    Url::parse(&format!("https://{store}/api/{api_version}/graphql.json"))
        .map_err(|e| ShopifyError::InvalidEndpoint(format!("{store}: {e}")))
}

fn truncate(body: &str) -> String {
    body.chars().take(LOG_BODY_LIMIT).collect()
}
