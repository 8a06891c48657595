//! Log output of the submission path at the default `info` level

use login_form::validation::Field;
use login_form::{LoginForm, SimulatedAuthenticator};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_info() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}

async fn submit_with(authenticator: SimulatedAuthenticator) {
    let form = LoginForm::builder().authenticator(authenticator).build();
    form.set_field_value(Field::Email, "user@example.com").unwrap();
    form.set_field_value(Field::Password, "Password123!").unwrap();
    form.submit().await.unwrap();
}

#[tokio::test]
async fn test_info_logs_leave_out_credentials() {
    let (logs, _guard) = capture_info();

    submit_with(SimulatedAuthenticator::new(Duration::ZERO)).await;

    let text = logs.text();
    assert!(text.contains("login submission started"));
    assert!(text.contains("login submission succeeded"));
    assert!(!text.contains("user@example.com"));
    assert!(!text.contains("Password123!"));
}

#[tokio::test]
async fn test_failure_log_leaves_out_credentials() {
    let (logs, _guard) = capture_info();

    submit_with(SimulatedAuthenticator::failing(Duration::ZERO, "Network error")).await;

    let text = logs.text();
    assert!(text.contains("login submission failed"));
    assert!(text.contains("Network error"));
    assert!(!text.contains("user@example.com"));
}
