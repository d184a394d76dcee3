//! Newsletter Signup CLI - submit and check newsletter signups from a shell.
//!
//! # Usage
//!
//! ```bash
//! # Check input locally without touching the network
//! signup validate -e user@example.com -p "correct horse battery"
//!
//! # Subscribe (reads SHOPIFY_STORE / SHOPIFY_STOREFRONT_ACCESS_TOKEN)
//! signup subscribe -e user@example.com -p "correct horse battery"
//!
//! # Same, printing the outcome as JSON
//! signup subscribe -e user@example.com -p "correct horse battery" --json
//!
//! # Show the resolved configuration (token redacted)
//! signup check-config
//! ```
//!
//! # Exit Codes
//!
//! - `0` - success outcome
//! - `1` - failed outcome, invalid input, or runtime error
//! - `2` - configuration error

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use newsletter_signup::SentryConfig;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "signup")]
#[command(author, version, about = "Newsletter signup tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate email and password without submitting
    Validate {
        /// Subscriber email address
        #[arg(short, long)]
        email: String,

        /// Account password (at least 8 characters)
        #[arg(short, long, env = "SIGNUP_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Subscribe an email address to the newsletter
    Subscribe {
        /// Subscriber email address
        #[arg(short, long)]
        email: String,

        /// Account password (at least 8 characters)
        #[arg(short, long, env = "SIGNUP_PASSWORD", hide_env_values = true)]
        password: String,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load and print the configuration
    CheckConfig,
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &SentryConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

fn main() -> ExitCode {
    // Sentry must be initialized before the tokio runtime and the tracing subscriber
    let _sentry_guard = init_sentry(&SentryConfig::from_env());

    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "newsletter_signup=info,signup=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let cli = Cli::parse();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("Command failed: {e}");
            e.exit_code()
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, CliError> {
    match cli.command {
        Commands::Validate { email, password } => Ok(commands::validate::run(&email, &password)),
        Commands::Subscribe {
            email,
            password,
            json,
        } => commands::subscribe::run(&email, &password, json).await,
        Commands::CheckConfig => commands::config::run(),
    }
}
