// Stub backend - simulated remote operations with explicit lifecycles
//
// Every "submit" in the app goes through here: validate locally, wait the
// configured latency, then apply the change to the data source. Nothing
// leaves the process. The UI never blocks on these - each call is spawned
// as a Submission whose typed outcome comes back over a channel, and the
// task is aborted when the owning view is torn down, so a user who
// navigates away mid-flight never sees a stale toast.

mod validate;

pub use validate::{validate_email, validate_required};

use crate::data::{DataError, DataSource, EventDraft, RegistrationForm};
use crate::models::User;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Local validation failed before anything was "sent"
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error(transparent)]
    Data(#[from] DataError),
}

impl SubmitError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        SubmitError::Validation {
            field,
            message: message.into(),
        }
    }
}

/// What kind of submission completed - views use this to decide what to do
/// with the outcome (navigate, refresh, show a toast)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitKind {
    Login,
    Signup,
    PasswordReset,
    EventRegistration,
    ProfileSave,
    EventSave,
}

/// Typed result of a finished submission, delivered to the UI loop
#[derive(Debug)]
pub struct SubmitOutcome {
    pub kind: SubmitKind,
    pub result: Result<String, SubmitError>,
}

/// A spawned submission task. Dropping (or aborting) it cancels the task,
/// which ties the simulated request's lifetime to the view that started it.
#[derive(Debug)]
pub struct Submission {
    handle: JoinHandle<()>,
}

impl Submission {
    /// Spawn `fut` and deliver its outcome on `tx` when it finishes
    pub fn spawn(
        kind: SubmitKind,
        tx: mpsc::Sender<SubmitOutcome>,
        fut: impl Future<Output = Result<String, SubmitError>> + Send + 'static,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let result = fut.await;
            // Receiver gone means the app is shutting down
            let _ = tx.send(SubmitOutcome { kind, result }).await;
        });
        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn abort(&self) {
        self.handle.abort();
    }
}

impl Drop for Submission {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// The stub collaborator itself. Copyable so spawned futures can own it.
#[derive(Debug, Clone, Copy)]
pub struct StubBackend {
    latency: Duration,
}

impl StubBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Zero-latency backend for tests
    pub fn instant() -> Self {
        Self {
            latency: Duration::ZERO,
        }
    }

    async fn simulate_roundtrip(self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    pub async fn login(self, email: String, password: String) -> Result<String, SubmitError> {
        validate_email("email", &email)?;
        validate_required("password", &password)?;
        self.simulate_roundtrip().await;
        tracing::info!(email = %email, "login accepted");
        Ok("Welcome back!".to_string())
    }

    pub async fn signup(
        self,
        name: String,
        email: String,
        password: String,
        confirm: String,
    ) -> Result<String, SubmitError> {
        validate_required("name", &name)?;
        validate_email("email", &email)?;
        validate_required("password", &password)?;
        if password != confirm {
            return Err(SubmitError::validation(
                "confirm",
                "Passwords do not match",
            ));
        }
        self.simulate_roundtrip().await;
        tracing::info!(email = %email, "account created");
        Ok(format!("Account created for {name}"))
    }

    pub async fn request_password_reset(self, email: String) -> Result<String, SubmitError> {
        validate_email("email", &email)?;
        self.simulate_roundtrip().await;
        Ok(format!("Reset link sent to {email}"))
    }

    pub async fn register_for_event(
        self,
        data: Arc<dyn DataSource>,
        event_id: String,
        form: RegistrationForm,
    ) -> Result<String, SubmitError> {
        validate_required("name", &form.name)?;
        validate_email("email", &form.email)?;
        self.simulate_roundtrip().await;
        let registration = data.register(&event_id, form)?;
        tracing::info!(event = %registration.event_name, "registration recorded");
        Ok(format!("Registered for {}", registration.event_name))
    }

    pub async fn save_profile(
        self,
        data: Arc<dyn DataSource>,
        user: User,
    ) -> Result<String, SubmitError> {
        validate_required("name", &user.name)?;
        validate_email("email", &user.email)?;
        self.simulate_roundtrip().await;
        data.update_user(user);
        Ok("Profile updated".to_string())
    }

    /// Create (`id` = None) or update an event from an admin draft
    pub async fn save_event(
        self,
        data: Arc<dyn DataSource>,
        id: Option<String>,
        draft: EventDraft,
    ) -> Result<String, SubmitError> {
        validate_required("title", &draft.title)?;
        validate_required("venue", &draft.venue)?;
        if draft.capacity == 0 {
            return Err(SubmitError::validation(
                "capacity",
                "Capacity must be at least 1",
            ));
        }
        if draft.end_at < draft.start_at {
            return Err(SubmitError::validation(
                "schedule",
                "End must not be before start",
            ));
        }
        self.simulate_roundtrip().await;
        let event = match id {
            Some(id) => data.update_event(&id, draft)?,
            None => data.create_event(draft),
        };
        Ok(format!("Saved \"{}\"", event.title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::InMemoryDataSource;

    fn channel() -> (mpsc::Sender<SubmitOutcome>, mpsc::Receiver<SubmitOutcome>) {
        mpsc::channel(8)
    }

    #[tokio::test]
    async fn login_rejects_bad_email_before_the_delay() {
        let backend = StubBackend::instant();
        let err = backend
            .login("not-an-email".into(), "hunter2".into())
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::Validation { field: "email", .. }));
    }

    #[tokio::test]
    async fn signup_checks_password_confirmation() {
        let backend = StubBackend::instant();
        let err = backend
            .signup(
                "Alex".into(),
                "alex@example.com".into(),
                "one".into(),
                "two".into(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::Validation { field: "confirm", .. }));
    }

    #[tokio::test]
    async fn completed_submission_delivers_exactly_one_outcome() {
        let (tx, mut rx) = channel();
        let backend = StubBackend::instant();

        let _submission = Submission::spawn(
            SubmitKind::Login,
            tx,
            backend.login("alex@example.com".into(), "hunter2".into()),
        );

        let outcome = rx.recv().await.expect("outcome should arrive");
        assert_eq!(outcome.kind, SubmitKind::Login);
        assert_eq!(outcome.result.unwrap(), "Welcome back!");

        // Sender dropped with the task - channel closes, nothing else arrives
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn aborted_submission_delivers_nothing() {
        let (tx, mut rx) = channel();
        let backend = StubBackend::new(Duration::from_secs(60));

        let submission = Submission::spawn(
            SubmitKind::PasswordReset,
            tx,
            backend.request_password_reset("alex@example.com".into()),
        );
        submission.abort();
        drop(submission);

        // The only sender was aborted, so the channel closes without a value
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn registration_flows_through_to_the_data_source() {
        let data: Arc<dyn DataSource> = Arc::new(InMemoryDataSource::seeded());
        let backend = StubBackend::instant();

        let message = backend
            .register_for_event(
                data.clone(),
                "1".into(),
                RegistrationForm {
                    name: "Casey Lee".into(),
                    email: "casey@example.com".into(),
                    department: "Computer Science".into(),
                    year: "1st Year".into(),
                },
            )
            .await
            .unwrap();

        assert!(message.contains("AI & Machine Learning Workshop"));
        assert_eq!(data.event("1").unwrap().registered_count, 33);
    }

    #[tokio::test]
    async fn save_event_surfaces_data_errors() {
        let data: Arc<dyn DataSource> = Arc::new(InMemoryDataSource::seeded());
        let backend = StubBackend::instant();
        let draft = EventDraft {
            title: "Renamed".into(),
            description: String::new(),
            department: "Business".into(),
            kind: crate::models::EventType::Seminar,
            start_at: chrono::Utc::now(),
            end_at: chrono::Utc::now(),
            venue: "Hall".into(),
            capacity: 10,
            tags: vec![],
            is_published: Some(true),
        };

        let err = backend
            .save_event(data, Some("999".into()), draft)
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::Data(DataError::NotFound { .. })));
    }
}
