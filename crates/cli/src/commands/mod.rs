//! CLI subcommands.

pub mod config;
pub mod subscribe;
pub mod validate;

use std::process::ExitCode;

use newsletter_signup::{ConfigError, ConfigurationError};
use thiserror::Error;

/// Exit code for configuration problems.
const CONFIG_EXIT_CODE: u8 = 2;

/// Errors that abort a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Environment configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The signup client refused to run.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Outcome could not be rendered as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Config(_) | Self::Configuration(_) => ExitCode::from(CONFIG_EXIT_CODE),
            Self::Json(_) => ExitCode::FAILURE,
        }
    }
}
