//! # login-form
//!
//! Controller for a client-side login form: it owns the field values, touched
//! flags and the cached validation result, and runs at most one submission
//! attempt at a time against an injected [`Authenticator`].
//!
//! ## Submission lifecycle
//!
//! ```text
//!   Idle ──submit──▶ Submitting ──ok──▶ Succeeded ──submit──▶ Submitting
//!    ▲                   │
//!    │                   └──err/panic/dropped──▶ Failed ──submit──▶ Submitting
//!    └───────────────────── reset ────────────────┘
//! ```
//!
//! An invalid form never reaches `Submitting`. A backend failure is written
//! into the password error slot and reported to the `on_error` callback. A
//! `submit()` future dropped before the backend answers leaves the form in
//! `Failed` with the fallback message and fires no callback.
//!
//! ## Configuration
//!
//! [`FormConfig`] is read from `login-form.toml`; every key is optional.
//!
//! ```toml
//! [validation]
//! min_password_length = 8
//!
//! [submission]
//! simulated_latency_ms = 1000
//! fallback_error_message = "Login failed"
//! ```

pub mod auth;
pub mod config;
pub mod controller;
pub mod error;
pub mod state;

pub use login_form_validation as validation;

pub use auth::{AuthError, Authenticator, SimulatedAuthenticator};
pub use config::{FormConfig, SubmissionSettings};
pub use controller::{LoginForm, LoginFormBuilder};
pub use error::{FormError, SubmitError};
pub use state::{SubmissionOutcome, SubmissionState, TouchedState};
