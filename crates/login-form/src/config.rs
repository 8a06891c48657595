// File: src/config.rs
// Purpose: Configuration parsing from login-form.toml

use anyhow::{Context, Result};
use login_form_validation::ValidationSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "login-form.toml";

/// Form configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FormConfig {
    #[serde(default)]
    pub validation: ValidationSettings,

    #[serde(default)]
    pub submission: SubmissionSettings,
}

/// Submission configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionSettings {
    /// Delay of the simulated authentication backend
    #[serde(default = "default_simulated_latency_ms")]
    pub simulated_latency_ms: u64,

    /// Reported when a failed attempt carries no message of its own
    #[serde(default = "default_fallback_error_message")]
    pub fallback_error_message: String,
}

fn default_simulated_latency_ms() -> u64 {
    1000
}

fn default_fallback_error_message() -> String {
    "Login failed".to_string()
}

impl SubmissionSettings {
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

impl Default for SubmissionSettings {
    fn default() -> Self {
        Self {
            simulated_latency_ms: default_simulated_latency_ms(),
            fallback_error_message: default_fallback_error_message(),
        }
    }
}

impl FormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from ./login-form.toml
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }
}
