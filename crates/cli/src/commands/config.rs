//! Configuration check.
//!
//! Loads the same environment the `subscribe` command uses and prints it with
//! the access token redacted.
//!
//! ```bash
//! signup check-config
//! ```

use std::process::ExitCode;

use newsletter_signup::{ConfigurationError, SignupConfig, SubscriptionClient};

use super::CliError;

/// Load configuration and report whether a submission could run.
///
/// # Errors
///
/// Returns an error if the configuration can't be loaded, the endpoint is
/// invalid, or no access token is set.
#[allow(clippy::print_stdout)]
pub fn run() -> Result<ExitCode, CliError> {
    let config = SignupConfig::from_env()?;

    // Builds the endpoint URL, which validates the store domain
    SubscriptionClient::new(&config.shopify)?;

    println!("{:#?}", config.shopify);
    println!(
        "sentry: {}",
        if config.sentry.dsn.is_some() {
            "enabled"
        } else {
            "disabled"
        }
    );

    if !config.shopify.has_access_token() {
        return Err(ConfigurationError::MissingAccessToken.into());
    }

    Ok(ExitCode::SUCCESS)
}
