//! Shopify Storefront API client for newsletter signups.
//!
//! # Architecture
//!
//! - Hand-written GraphQL documents, request/response types via `serde`
//! - One POST per call, no caching, no retries
//! - The client only moves bytes; interpreting `customerUserErrors` and
//!   top-level `errors` is left to [`crate::subscription`]
//!
//! # Example
//!
//! ```rust,ignore
//! use newsletter_signup::shopify::{CustomerCreateInput, StorefrontClient};
//!
//! let client = StorefrontClient::new(&config.shopify)?;
//! let response = client
//!     .customer_create(&CustomerCreateInput::newsletter("user@example.com", "hunter2hunter2"))
//!     .await?;
//! ```

mod storefront;
pub mod types;

pub use storefront::StorefrontClient;
pub use types::*;

use core::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when talking to the Storefront API.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// HTTP request failed (DNS, connect, timeout, reset, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Store domain or endpoint could not be turned into a URL.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// No access token configured for the client.
    #[error("Storefront access token is not configured")]
    MissingAccessToken,

    /// Access token can't be sent as an HTTP header value.
    #[error("Storefront access token is not a valid header value")]
    InvalidAccessToken,
}

/// GraphQL request body.
#[derive(Debug, serde::Serialize)]
pub(crate) struct GraphQLRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

/// GraphQL response envelope.
///
/// Both members are optional; Shopify may send `data`, `errors`, or both.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct GraphQLResponse<T> {
    /// Operation result.
    #[serde(default)]
    pub data: Option<T>,
    /// Top-level protocol errors.
    #[serde(default)]
    pub errors: Option<GraphQLErrors>,
}

impl<T> GraphQLResponse<T> {
    /// Top-level errors, if any were reported.
    #[must_use]
    pub fn errors(&self) -> Option<&GraphQLErrors> {
        self.errors.as_ref().filter(|errors| !errors.is_empty())
    }
}

/// Top-level `errors` member.
///
/// GraphQL defines this as a list, but Shopify answers authentication
/// failures with a bare string (`{"errors": "[API] Invalid API key ..."}`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GraphQLErrors {
    List(Vec<GraphQLError>),
    Message(String),
}

impl GraphQLErrors {
    /// Whether no error was actually reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::List(errors) => errors.is_empty(),
            Self::Message(message) => message.is_empty(),
        }
    }

    /// Message of the first error, when it has a non-empty one.
    ///
    /// The string form has no per-error objects, so it yields `None`.
    #[must_use]
    pub fn first_message(&self) -> Option<&str> {
        match self {
            Self::List(errors) => errors
                .first()
                .and_then(|e| e.message.as_deref())
                .filter(|m| !m.is_empty()),
            Self::Message(_) => None,
        }
    }
}

impl fmt::Display for GraphQLErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(errors) => f.write_str(&format_graphql_errors(errors)),
            Self::Message(message) => f.write_str(message),
        }
    }
}

/// A GraphQL error returned by the Shopify API.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLError {
    /// Error message.
    #[serde(default)]
    pub message: Option<String>,
    /// Source locations in the query.
    #[serde(default)]
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    if errors.is_empty() {
        return "(no error details provided)".to_string();
    }

    errors
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let mut parts = Vec::new();

            if let Some(message) = e.message.as_deref().filter(|m| !m.is_empty()) {
                parts.push(message.to_string());
            }

            if !e.path.is_empty() {
                let path_str = e
                    .path
                    .iter()
                    .map(|p| match p {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(".");
                parts.push(format!("path: {path_str}"));
            }

            if let Some(loc) = e.locations.first() {
                parts.push(format!("at line {}:{}", loc.line, loc.column));
            }

            if parts.is_empty() {
                format!("[error {}]: (no details)", i + 1)
            } else {
                parts.join(" ")
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(value: serde_json::Value) -> GraphQLResponse<serde_json::Value> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_errors_list() {
        let response = parse(json!({ "errors": [{ "message": "Syntax Error" }] }));
        let errors = response.errors().unwrap();
        assert_eq!(errors.first_message(), Some("Syntax Error"));
        assert!(response.data.is_none());
    }

    #[test]
    fn test_errors_string() {
        let response = parse(json!({ "errors": "[API] Invalid API key or access token" }));
        let errors = response.errors().unwrap();
        assert_eq!(errors.first_message(), None);
        assert_eq!(errors.to_string(), "[API] Invalid API key or access token");
    }

    #[test]
    fn test_empty_errors_ignored() {
        assert!(parse(json!({ "errors": [], "data": {} })).errors().is_none());
        assert!(parse(json!({ "errors": "" })).errors().is_none());
        assert!(parse(json!({ "errors": null })).errors().is_none());
    }

    #[test]
    fn test_error_without_message() {
        let response = parse(json!({ "errors": [{ "extensions": { "code": "THROTTLED" } }] }));
        assert_eq!(response.errors().unwrap().first_message(), None);
    }

    #[test]
    fn test_error_with_empty_message() {
        let response = parse(json!({ "errors": [{ "message": "" }] }));
        assert_eq!(response.errors().unwrap().first_message(), None);
    }

    #[test]
    fn test_graphql_error_formatting() {
        let errors = GraphQLErrors::List(vec![
            GraphQLError {
                message: Some("Field not found".to_string()),
                locations: vec![],
                path: vec![],
            },
            GraphQLError {
                message: Some("Invalid ID".to_string()),
                locations: vec![],
                path: vec![],
            },
        ]);
        assert_eq!(errors.to_string(), "Field not found; Invalid ID");
    }

    #[test]
    fn test_graphql_error_path_and_location() {
        let errors = GraphQLErrors::List(vec![GraphQLError {
            message: None,
            locations: vec![GraphQLErrorLocation { line: 2, column: 5 }],
            path: vec![json!("customerCreate"), json!(0)],
        }]);
        assert_eq!(errors.to_string(), "path: customerCreate.0 at line 2:5");
    }

    #[test]
    fn test_graphql_error_no_details() {
        let errors = GraphQLErrors::List(vec![GraphQLError {
            message: None,
            locations: vec![],
            path: vec![],
        }]);
        assert_eq!(errors.to_string(), "[error 1]: (no details)");
    }

    #[test]
    fn test_missing_access_token_display() {
        assert_eq!(
            ShopifyError::MissingAccessToken.to_string(),
            "Storefront access token is not configured"
        );
    }
}
