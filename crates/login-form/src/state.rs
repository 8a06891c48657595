// File: src/state.rs
// Purpose: Touched flags and the submission lifecycle

use login_form_validation::Field;
use std::fmt;

/// Which fields the user has interacted with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchedState {
    pub email: bool,
    pub password: bool,
    pub remember_me: bool,
}

impl TouchedState {
    pub fn get(&self, field: Field) -> bool {
        match field {
            Field::Email => self.email,
            Field::Password => self.password,
            Field::RememberMe => self.remember_me,
        }
    }

    pub fn touch(&mut self, field: Field) {
        match field {
            Field::Email => self.email = true,
            Field::Password => self.password = true,
            Field::RememberMe => self.remember_me = true,
        }
    }

    pub fn touch_all(&mut self) {
        for field in Field::ALL {
            self.touch(field);
        }
    }
}

/// Lifecycle of a submission attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded => "succeeded",
            SubmissionState::Failed => "failed",
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// A completed attempt, successful or not
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionState::Succeeded | SubmissionState::Failed)
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a completed attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Carries the values the attempt was made with
    Succeeded(login_form_validation::LoginFormValues),
    /// Carries the normalized failure message
    Failed(String),
}

impl SubmissionOutcome {
    pub fn state(&self) -> SubmissionState {
        match self {
            SubmissionOutcome::Succeeded(_) => SubmissionState::Succeeded,
            SubmissionOutcome::Failed(_) => SubmissionState::Failed,
        }
    }
}
