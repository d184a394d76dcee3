//! Integration tests for the newsletter signup client.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p newsletter-signup-integration-tests
//! ```
//!
//! Every test runs against a local `wiremock` server standing in for the
//! Shopify Storefront API; no credentials or network access are needed.

use newsletter_signup::SubscriptionClient;
use newsletter_signup::shopify::StorefrontClient;
use secrecy::SecretString;
use serde_json::{Value, json};
use wiremock::MockServer;

/// Token the mock storefront expects.
pub const TEST_TOKEN: &str = "3f9a7c1e5b2d4f6a8c0e2b4d6f8a0c2e";

/// Path the client posts to.
pub const GRAPHQL_PATH: &str = "/api/2024-01/graphql.json";

/// Build a subscription client pointed at `server`.
///
/// # Panics
///
/// Panics if the mock server URI is not a valid URL.
#[must_use]
pub fn client_for(server: &MockServer, token: Option<&str>) -> SubscriptionClient {
    let endpoint = url::Url::parse(&format!("{}{GRAPHQL_PATH}", server.uri()))
        .unwrap_or_else(|e| panic!("invalid mock endpoint: {e}"));
    let storefront = StorefrontClient::with_endpoint(endpoint, token.map(SecretString::from));
    SubscriptionClient::from_storefront(storefront)
}

/// `customerCreate` response for a newly created customer.
#[must_use]
pub fn customer_created(email: &str) -> Value {
    json!({
        "data": {
            "customerCreate": {
                "customer": { "id": "gid://shopify/Customer/7001", "email": email },
                "customerUserErrors": []
            }
        }
    })
}

/// `customerCreate` response carrying one user error.
#[must_use]
pub fn customer_user_error(code: &str, message: &str) -> Value {
    json!({
        "data": {
            "customerCreate": {
                "customer": null,
                "customerUserErrors": [
                    { "code": code, "field": ["input", "email"], "message": message }
                ]
            }
        }
    })
}
