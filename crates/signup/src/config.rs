//! Signup configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPIFY_STORE` - Shopify store domain (e.g., your-store.myshopify.com)
//!
//! ## Optional
//! - `SHOPIFY_STOREFRONT_ACCESS_TOKEN` - Storefront API access token. May be
//!   absent at load time, but every submission fails without it.
//! - `SHOPIFY_API_VERSION` - API version (default: 2024-01)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Storefront API version the signup mutation targets.
pub const DEFAULT_API_VERSION: &str = "2024-01";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Top-level configuration for the signup tools.
#[derive(Debug, Clone)]
pub struct SignupConfig {
    /// Shopify Storefront API configuration
    pub shopify: ShopifyStorefrontConfig,
    /// Error tracking configuration
    pub sentry: SentryConfig,
}

/// Sentry error tracking configuration.
#[derive(Debug, Clone, Default)]
pub struct SentryConfig {
    /// Sentry DSN; tracking is disabled when unset
    pub dsn: Option<String>,
    /// Sentry environment (e.g., production, staging)
    pub environment: Option<String>,
}

impl SentryConfig {
    /// Load Sentry settings from the environment. Never fails.
    #[must_use]
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            dsn: get_optional(lookup, "SENTRY_DSN"),
            environment: get_optional(lookup, "SENTRY_ENVIRONMENT"),
        }
    }
}

/// Shopify Storefront API configuration.
///
/// Immutable once a client has been built from it. Implements `Debug`
/// manually to redact the access token.
#[derive(Clone)]
pub struct ShopifyStorefrontConfig {
    /// Shopify store domain without scheme or path (e.g., your-store.myshopify.com)
    pub store: String,
    /// Shopify API version (e.g., 2024-01)
    pub api_version: String,
    /// Storefront API access token
    pub access_token: Option<SecretString>,
}

impl std::fmt::Debug for ShopifyStorefrontConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyStorefrontConfig")
            .field("store", &self.store)
            .field("api_version", &self.api_version)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl SignupConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid, or
    /// if the access token looks like a placeholder.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`SignupConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            shopify: ShopifyStorefrontConfig::from_lookup(&lookup)?,
            sentry: SentryConfig::from_lookup(&lookup),
        })
    }
}

impl ShopifyStorefrontConfig {
    /// Create a config for `store` with the default API version.
    #[must_use]
    pub fn new(store: impl Into<String>, access_token: Option<SecretString>) -> Self {
        Self {
            store: store.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            access_token,
        }
    }

    /// Whether a non-empty access token is configured.
    #[must_use]
    pub fn has_access_token(&self) -> bool {
        self.access_token
            .as_ref()
            .is_some_and(|token| !token.expose_secret().trim().is_empty())
    }

    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = get_required(lookup, "SHOPIFY_STORE")?;
        validate_store_domain(&store, "SHOPIFY_STORE")?;

        let access_token = get_optional(lookup, "SHOPIFY_STOREFRONT_ACCESS_TOKEN")
            .map(|token| {
                validate_token(&token, "SHOPIFY_STOREFRONT_ACCESS_TOKEN")?;
                Ok(SecretString::from(token))
            })
            .transpose()?;

        Ok(Self {
            store,
            api_version: get_optional(lookup, "SHOPIFY_API_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            access_token,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required variable.
fn get_required<F>(lookup: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    get_optional(lookup, key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional variable. Empty values count as unset.
fn get_optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// The store must be a bare host name: no scheme, no path.
fn validate_store_domain(store: &str, var_name: &str) -> Result<(), ConfigError> {
    if store.contains("://") || store.contains('/') || store.contains(char::is_whitespace) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("expected a bare domain like your-store.myshopify.com (got '{store}')"),
        ));
    }
    Ok(())
}

/// Reject tokens that are obviously copied from a template.
fn validate_token(token: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = token.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<SignupConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        SignupConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_minimal_config() {
        let config = load(&[("SHOPIFY_STORE", "test.myshopify.com")]).unwrap();
        assert_eq!(config.shopify.store, "test.myshopify.com");
        assert_eq!(config.shopify.api_version, "2024-01");
        assert!(!config.shopify.has_access_token());
        assert!(config.sentry.dsn.is_none());
    }

    #[test]
    fn test_missing_store() {
        let err = load(&[]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref key) if key == "SHOPIFY_STORE"));
    }

    #[test]
    fn test_store_with_scheme_rejected() {
        let err = load(&[("SHOPIFY_STORE", "https://test.myshopify.com")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_store_with_path_rejected() {
        let err = load(&[("SHOPIFY_STORE", "test.myshopify.com/api")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_access_token_loaded() {
        let config = load(&[
            ("SHOPIFY_STORE", "test.myshopify.com"),
            ("SHOPIFY_STOREFRONT_ACCESS_TOKEN", "9f1c2b7e4a6d8c0e3b5f7a9d1c3e5b7f"),
            ("SHOPIFY_API_VERSION", "2024-04"),
        ])
        .unwrap();
        assert!(config.shopify.has_access_token());
        assert_eq!(config.shopify.api_version, "2024-04");
    }

    #[test]
    fn test_empty_access_token_is_unset() {
        let config = load(&[
            ("SHOPIFY_STORE", "test.myshopify.com"),
            ("SHOPIFY_STOREFRONT_ACCESS_TOKEN", "   "),
        ])
        .unwrap();
        assert!(config.shopify.access_token.is_none());
    }

    #[test]
    fn test_placeholder_token_rejected() {
        let err = load(&[
            ("SHOPIFY_STORE", "test.myshopify.com"),
            ("SHOPIFY_STOREFRONT_ACCESS_TOKEN", "your-storefront-token"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_sentry_settings() {
        let config = load(&[
            ("SHOPIFY_STORE", "test.myshopify.com"),
            ("SENTRY_DSN", "https://key@o0.ingest.sentry.io/0"),
            ("SENTRY_ENVIRONMENT", "staging"),
        ])
        .unwrap();
        assert_eq!(
            config.sentry.dsn.as_deref(),
            Some("https://key@o0.ingest.sentry.io/0")
        );
        assert_eq!(config.sentry.environment.as_deref(), Some("staging"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ShopifyStorefrontConfig::new(
            "test.myshopify.com",
            Some(SecretString::from("shpat_abcdef0123456789")),
        );
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("shpat_abcdef0123456789"));
    }

    #[test]
    fn test_has_access_token_ignores_blank() {
        let config =
            ShopifyStorefrontConfig::new("test.myshopify.com", Some(SecretString::from("")));
        assert!(!config.has_access_token());
    }
}
