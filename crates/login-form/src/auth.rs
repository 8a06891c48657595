//! Authentication backend seam
//!
//! The controller only knows the [`Authenticator`] contract: one awaited call
//! per attempt that either succeeds or fails with a message. The real backend
//! lives outside this crate; [`SimulatedAuthenticator`] stands in for it.

use crate::config::SubmissionSettings;
use async_trait::async_trait;
use login_form_validation::LoginFormValues;
use std::time::Duration;
use thiserror::Error;

/// Failure reported by an authentication backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Performs one login attempt
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Attempt a login with the submitted values
    async fn attempt_login(&self, values: &LoginFormValues) -> Result<(), AuthError>;

    /// Backend name used in logs
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Backend stand-in: waits, then succeeds (or fails with a fixed message)
#[derive(Debug, Clone)]
pub struct SimulatedAuthenticator {
    latency: Duration,
    failure: Option<String>,
}

impl SimulatedAuthenticator {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            failure: None,
        }
    }

    /// Always fails with `message` once the latency has elapsed
    pub fn failing(latency: Duration, message: impl Into<String>) -> Self {
        Self {
            latency,
            failure: Some(message.into()),
        }
    }

    pub fn from_settings(settings: &SubmissionSettings) -> Self {
        Self::new(settings.simulated_latency())
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedAuthenticator {
    fn default() -> Self {
        Self::from_settings(&SubmissionSettings::default())
    }
}

#[async_trait]
impl Authenticator for SimulatedAuthenticator {
    async fn attempt_login(&self, _values: &LoginFormValues) -> Result<(), AuthError> {
        tokio::time::sleep(self.latency).await;

        match &self.failure {
            Some(message) => Err(AuthError::new(message.clone())),
            None => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
