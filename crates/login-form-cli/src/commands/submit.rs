use anyhow::Result;
use colored::Colorize;
use login_form::{
    FormConfig, LoginForm, SimulatedAuthenticator, SubmissionOutcome, SubmitError,
};
use std::time::Duration;
use tracing::debug;

use super::print_field_errors;

pub struct SubmitRequest {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    pub fail_with: Option<String>,
    pub latency_ms: Option<u64>,
}

pub async fn execute(config: FormConfig, request: SubmitRequest) -> Result<bool> {
    let latency = request
        .latency_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.submission.simulated_latency());
    let authenticator = match request.fail_with {
        Some(message) => SimulatedAuthenticator::failing(latency, message),
        None => SimulatedAuthenticator::new(latency),
    };
    debug!(?latency, "using simulated backend");

    let form = LoginForm::builder()
        .config(config)
        .authenticator(authenticator)
        .on_success(|values| {
            println!(
                "{} signed in as {} (remember me: {})",
                "✓".green(),
                values.email.cyan(),
                if values.remember_me { "yes" } else { "no" }
            )
        })
        .on_error(|message| println!("{} {}", "✗".red(), message.red()))
        .build();

    form.set_email(request.email);
    form.set_password(request.password);
    form.set_remember_me(request.remember_me);

    let errors = form.validate_all();
    if errors.has_errors() {
        println!("{}", "Not submitted: form has errors".yellow());
        print_field_errors(&errors);
        return Ok(false);
    }

    println!("{}", "Submitting...".green().bold());

    let passed = match form.submit().await {
        Ok(SubmissionOutcome::Succeeded(_)) => true,
        Ok(SubmissionOutcome::Failed(_)) => {
            print_field_errors(&form.errors());
            false
        }
        Err(SubmitError::Invalid(errors)) => {
            println!("{}", "Not submitted: form has errors".yellow());
            print_field_errors(&errors);
            false
        }
        Err(err @ SubmitError::InFlight) => return Err(err.into()),
    };

    println!("State: {}", form.submission_state().to_string().cyan());
    Ok(passed)
}
