//! Local input validation.
//!
//! ```bash
//! signup validate -e user@example.com -p "correct horse battery"
//! ```

use std::process::ExitCode;

use newsletter_signup_core::validate;

/// Run the validator and report the result.
#[allow(clippy::print_stdout)]
pub fn run(email: &str, password: &str) -> ExitCode {
    let result = validate(email, password);

    match result.message() {
        None => {
            println!("Input is valid.");
            ExitCode::SUCCESS
        }
        Some(message) => {
            println!("{message}");
            ExitCode::FAILURE
        }
    }
}
