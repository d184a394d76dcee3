//! Core types for the signup form.
//!
//! Nothing here outlives a single request/response cycle.

pub mod credentials;
pub mod outcome;

pub use credentials::Credentials;
pub use outcome::SubmissionOutcome;
