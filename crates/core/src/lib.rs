//! Newsletter Signup Core - Shared types library.
//!
//! This crate provides shared types used across the signup components:
//! - `signup` - Storefront client that submits credentials to Shopify
//! - `cli` - Command-line front end standing in for the form/view layer
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. UI state such as the in-flight flag and the displayed notice is
//! owned by the caller and passed in and out explicitly.
//!
//! # Modules
//!
//! - [`types`] - Credentials and submission outcomes
//! - [`validation`] - Local input checks run before any network call
//! - [`form`] - Caller-owned form state (in-flight guard, notices)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod form;
pub mod types;
pub mod validation;

pub use form::{FormError, FormPhase, FormState, NOTICE_TTL, Notice, NoticeKind};
pub use types::*;
pub use validation::{MIN_PASSWORD_LENGTH, ValidationResult, validate};
