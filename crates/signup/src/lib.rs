//! Newsletter Signup - Storefront client for the newsletter form.
//!
//! Validated credentials go in, a [`SubmissionOutcome`] comes out.
//!
//! # Architecture
//!
//! - [`config`] - Environment configuration (`dotenvy`, `secrecy`)
//! - [`shopify`] - Storefront API transport and GraphQL types
//! - [`subscription`] - `customerCreate` submission and response classification
//!
//! Form state, input disabling and message display belong to the caller; see
//! [`newsletter_signup_core::FormState`].
//!
//! # Example
//!
//! ```rust,ignore
//! use newsletter_signup::{SignupConfig, SubscriptionClient};
//! use newsletter_signup_core::{ValidationResult, validate};
//!
//! let config = SignupConfig::from_env()?;
//! let client = SubscriptionClient::new(&config.shopify)?;
//!
//! if validate(email, password) == ValidationResult::Valid {
//!     let outcome = client.submit(email, password).await?;
//!     println!("{}", outcome.message);
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod shopify;
pub mod subscription;

pub use config::{ConfigError, SentryConfig, ShopifyStorefrontConfig, SignupConfig};
pub use newsletter_signup_core::SubmissionOutcome;
pub use subscription::{ConfigurationError, SubscriptionClient, classify, is_already_subscribed};
