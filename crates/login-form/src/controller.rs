// File: src/controller.rs
// Purpose: Login form controller, owns field state and drives submission

use crate::auth::{Authenticator, SimulatedAuthenticator};
use crate::config::FormConfig;
use crate::error::{FormError, SubmitError};
use crate::state::{SubmissionOutcome, SubmissionState, TouchedState};
use futures::FutureExt;
use login_form_validation::{
    Field, FieldError, FieldErrors, FieldValue, LoginFormValues, ValidationSchema,
};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

type SuccessCallback = Arc<dyn Fn(&LoginFormValues) + Send + Sync>;
type ErrorCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Mutable part of the form, guarded by one lock
#[derive(Debug, Default)]
struct FormState {
    values: LoginFormValues,
    touched: TouchedState,
    errors: FieldErrors,
    submission: SubmissionState,
}

/// Controller for the login form
///
/// Every operation takes `&self`. The state lock is only held for synchronous
/// updates and never across the backend call, so a second `submit()` issued
/// while an attempt is pending observes `Submitting` and is rejected.
///
/// ```rust,no_run
/// use login_form::{LoginForm, SubmissionState};
/// use login_form::validation::Field;
///
/// # async fn run() {
/// let form = LoginForm::builder()
///     .initial_email("user@example.com")
///     .on_success(|values| println!("welcome {}", values.email))
///     .build();
///
/// form.set_field_value(Field::Password, "Password123!").unwrap();
/// form.submit().await.unwrap();
/// assert_eq!(form.submission_state(), SubmissionState::Succeeded);
/// # }
/// ```
pub struct LoginForm {
    state: Mutex<FormState>,
    schema: ValidationSchema,
    authenticator: Arc<dyn Authenticator>,
    on_success: Option<SuccessCallback>,
    on_error: Option<ErrorCallback>,
    fallback_error_message: String,
}

impl LoginForm {
    pub fn builder() -> LoginFormBuilder {
        LoginFormBuilder::default()
    }

    /// Form with default config and the simulated backend
    pub fn new() -> Self {
        Self::builder().build()
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        // state is always left consistent between statements, so a poisoned
        // lock still holds usable data
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ===== Reads =====

    pub fn values(&self) -> LoginFormValues {
        self.lock().values.clone()
    }

    /// Errors from the last validation pass
    pub fn errors(&self) -> FieldErrors {
        self.lock().errors.clone()
    }

    pub fn touched(&self) -> TouchedState {
        self.lock().touched
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.lock().submission
    }

    /// True while an attempt is in flight
    pub fn is_loading(&self) -> bool {
        self.submission_state().is_in_flight()
    }

    /// Error of a field, only once the field has been touched
    pub fn visible_error(&self, field: Field) -> Option<FieldError> {
        let state = self.lock();
        if state.touched.get(field) {
            state.errors.get(field).cloned()
        } else {
            None
        }
    }

    pub fn schema(&self) -> &ValidationSchema {
        &self.schema
    }

    // ===== Mutators =====

    /// Assigns a field, marks it touched and re-validates
    pub fn set_field_value(
        &self,
        field: Field,
        value: impl Into<FieldValue>,
    ) -> Result<(), FormError> {
        let value = value.into();
        let mut state = self.lock();

        match (field, value) {
            (Field::Email, FieldValue::Text(text)) => state.values.email = text,
            (Field::Password, FieldValue::Text(text)) => state.values.password = text,
            (Field::RememberMe, FieldValue::Flag(flag)) => state.values.remember_me = flag,
            (field, value) => {
                return Err(FormError::ValueKind {
                    field,
                    expected: if field.is_text() { "text" } else { "flag" },
                    actual: value.kind(),
                })
            }
        }

        state.touched.touch(field);
        self.revalidate(&mut state);
        Ok(())
    }

    /// Name-based variant of [`LoginForm::set_field_value`]
    pub fn set_field_value_by_name(
        &self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), FormError> {
        let field: Field = name.parse()?;
        self.set_field_value(field, value)
    }

    pub fn set_email(&self, email: impl Into<String>) {
        let mut state = self.lock();
        state.values.email = email.into();
        state.touched.touch(Field::Email);
        self.revalidate(&mut state);
    }

    pub fn set_password(&self, password: impl Into<String>) {
        let mut state = self.lock();
        state.values.password = password.into();
        state.touched.touch(Field::Password);
        self.revalidate(&mut state);
    }

    pub fn set_remember_me(&self, remember_me: bool) {
        let mut state = self.lock();
        state.values.remember_me = remember_me;
        state.touched.touch(Field::RememberMe);
        self.revalidate(&mut state);
    }

    /// Marks a field touched (blur) without changing its value
    pub fn set_field_touched(&self, field: Field) {
        let mut state = self.lock();
        state.touched.touch(field);
        self.revalidate(&mut state);
    }

    /// Re-validates the whole form and returns the result
    pub fn validate_all(&self) -> FieldErrors {
        let mut state = self.lock();
        self.revalidate(&mut state);
        state.errors.clone()
    }

    /// Restores initial values, clears touched flags and returns to `Idle`
    pub fn reset(&self, initial_email: Option<String>) -> Result<(), FormError> {
        let mut state = self.lock();
        if state.submission.is_in_flight() {
            return Err(FormError::SubmissionInFlight);
        }

        *state = FormState {
            values: LoginFormValues::with_email(initial_email.unwrap_or_default()),
            ..FormState::default()
        };
        self.revalidate(&mut state);
        debug!("login form reset");
        Ok(())
    }

    fn revalidate(&self, state: &mut FormState) {
        state.errors = self.schema.validate(&state.values);
        debug!(fields = ?state.errors.fields(), "login form validated");
    }

    // ===== Submission =====

    /// Runs one submission attempt
    ///
    /// Returns an error without calling the backend when the form is invalid
    /// or another attempt is in flight. Backend failures complete the attempt
    /// and come back as [`SubmissionOutcome::Failed`].
    pub async fn submit(&self) -> Result<SubmissionOutcome, SubmitError> {
        let snapshot = self.begin_submission()?;
        let guard = InFlightGuard { form: self };

        info!(backend = self.authenticator.name(), "login submission started");
        debug!(email = %snapshot.email, "submitting login values");

        let attempt = AssertUnwindSafe(async {
            self.authenticator.attempt_login(&snapshot).await
        })
        .catch_unwind()
        .await;

        let failure = match attempt {
            Ok(Ok(())) => None,
            Ok(Err(err)) => Some(self.normalize_message(err.message)),
            Err(panic) => Some(self.normalize_message(panic_message(&*panic))),
        };

        guard.disarm();

        match failure {
            None => {
                self.lock().submission = SubmissionState::Succeeded;
                info!("login submission succeeded");

                if let Some(on_success) = &self.on_success {
                    on_success(&snapshot);
                }
                Ok(SubmissionOutcome::Succeeded(snapshot))
            }
            Some(message) => {
                self.fail_submission(&message);
                warn!(error = %message, "login submission failed");

                if let Some(on_error) = &self.on_error {
                    on_error(&message);
                }
                Ok(SubmissionOutcome::Failed(message))
            }
        }
    }

    fn fail_submission(&self, message: &str) {
        let mut state = self.lock();
        state.submission = SubmissionState::Failed;
        state.errors.set_submission_error(message);
    }

    /// Validates and moves to `Submitting`, returning the values to submit
    fn begin_submission(&self) -> Result<LoginFormValues, SubmitError> {
        let mut state = self.lock();

        if state.submission.is_in_flight() {
            warn!("login submission rejected: already in flight");
            return Err(SubmitError::InFlight);
        }

        state.touched.touch_all();
        self.revalidate(&mut state);
        if state.errors.has_errors() {
            warn!(fields = ?state.errors.fields(), "login submission rejected: invalid form");
            return Err(SubmitError::Invalid(state.errors.clone()));
        }

        state.submission = SubmissionState::Submitting;
        Ok(state.values.clone())
    }

    fn normalize_message(&self, message: String) -> String {
        if message.trim().is_empty() {
            self.fallback_error_message.clone()
        } else {
            message
        }
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Moves an abandoned attempt to `Failed`
///
/// Held while the backend call is pending; a dropped `submit()` future drops
/// it armed.
struct InFlightGuard<'a> {
    form: &'a LoginForm,
}

impl InFlightGuard<'_> {
    fn disarm(self) {
        std::mem::forget(self);
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        warn!("login submission abandoned before completion");
        self.form.fail_submission(&self.form.fallback_error_message);
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::new()
    }
}

/// Builder for [`LoginForm`]
#[derive(Default)]
pub struct LoginFormBuilder {
    initial_email: Option<String>,
    config: FormConfig,
    authenticator: Option<Arc<dyn Authenticator>>,
    on_success: Option<SuccessCallback>,
    on_error: Option<ErrorCallback>,
}

impl LoginFormBuilder {
    pub fn initial_email(mut self, email: impl Into<String>) -> Self {
        self.initial_email = Some(email.into());
        self
    }

    pub fn config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    pub fn authenticator(mut self, authenticator: impl Authenticator + 'static) -> Self {
        self.authenticator = Some(Arc::new(authenticator));
        self
    }

    /// Shares an existing backend handle
    pub fn shared_authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    pub fn on_success(mut self, callback: impl Fn(&LoginFormValues) + Send + Sync + 'static) -> Self {
        self.on_success = Some(Arc::new(callback));
        self
    }

    pub fn on_error(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(callback));
        self
    }

    pub fn build(self) -> LoginForm {
        let schema = ValidationSchema::from_settings(&self.config.validation);
        let authenticator = self.authenticator.unwrap_or_else(|| {
            Arc::new(SimulatedAuthenticator::from_settings(&self.config.submission))
        });

        let values = LoginFormValues::with_email(self.initial_email.unwrap_or_default());
        let errors = schema.validate(&values);

        LoginForm {
            state: Mutex::new(FormState {
                values,
                errors,
                ..FormState::default()
            }),
            schema,
            authenticator,
            on_success: self.on_success,
            on_error: self.on_error,
            fallback_error_message: self.config.submission.fallback_error_message,
        }
    }
}
