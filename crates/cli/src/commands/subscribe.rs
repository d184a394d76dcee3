//! Newsletter subscription command.
//!
//! Plays the part of the signup form: validates input, keeps the form state
//! across the request, and renders the outcome.
//!
//! ```bash
//! signup subscribe -e user@example.com -p "correct horse battery"
//! ```
//!
//! # Environment Variables
//!
//! - `SHOPIFY_STORE` - Shopify store domain
//! - `SHOPIFY_STOREFRONT_ACCESS_TOKEN` - Storefront API access token
//! - `SHOPIFY_API_VERSION` - API version (default: 2024-01)

use std::process::ExitCode;
use std::time::Instant;

use newsletter_signup::{SignupConfig, SubmissionOutcome, SubscriptionClient};
use newsletter_signup_core::{FormError, FormState, NoticeKind};

use super::CliError;

/// Validate, submit, and print the outcome.
///
/// # Errors
///
/// Returns an error on configuration problems. Remote and transport failures
/// are reported as a failed outcome, not an error.
pub async fn run(email: &str, password: &str, json: bool) -> Result<ExitCode, CliError> {
    let mut form = FormState::new();

    let credentials = match form.begin(email, password, Instant::now()) {
        Ok(credentials) => credentials,
        Err(FormError::Invalid(_)) => {
            render_notice(&form);
            return Ok(ExitCode::FAILURE);
        }
        Err(FormError::AlreadySubmitting) => {
            // A fresh form is always idle
            return Ok(ExitCode::FAILURE);
        }
    };

    let config = SignupConfig::from_env()?;
    let client = SubscriptionClient::new(&config.shopify)?;

    let outcome = match client
        .submit(credentials.email(), credentials.expose_password())
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            form.abort();
            return Err(e.into());
        }
    };

    let reset = form.finish(&outcome, Instant::now());
    tracing::debug!(reset, "Submission finished");

    if json {
        render_json(&outcome)?;
    } else {
        render_notice(&form);
    }

    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[allow(clippy::print_stdout, clippy::print_stderr)]
fn render_notice(form: &FormState) {
    if let Some(notice) = form.visible_notice(Instant::now()) {
        match notice.kind {
            NoticeKind::Success => println!("{}", notice.text),
            NoticeKind::Error => eprintln!("{}", notice.text),
        }
    }
}

#[allow(clippy::print_stdout)]
fn render_json(outcome: &SubmissionOutcome) -> Result<(), CliError> {
    println!("{}", serde_json::to_string(outcome)?);
    Ok(())
}
