// Data source - the seam between the UI and whatever supplies entities
//
// The UI never touches ambient mock arrays; it holds an injected
// `Arc<dyn DataSource>` and asks for snapshots. The in-memory adapter in
// `memory` is the only implementation in this repo and stands in for a
// future fetch-based adapter. All filtering stays client-side: the contract
// a real backend must satisfy is "return entities of these shapes",
// nothing more.

mod memory;
mod seed;

pub use memory::InMemoryDataSource;

use crate::models::{Department, Event, EventType, Registration, RegistrationStatus, User};
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("event is at capacity")]
    EventFull,
}

impl DataError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        DataError::NotFound {
            kind,
            id: id.into(),
        }
    }
}

/// Fields an admin supplies when creating or editing an event
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub department: String,
    pub kind: EventType,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub venue: String,
    pub capacity: u32,
    pub tags: Vec<String>,
    pub is_published: Option<bool>,
}

/// Fields a visitor fills in when registering for an event
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub department: String,
    pub year: String,
}

/// Everything the views need from the outside world.
///
/// Queries return owned snapshots - the catalog is small and every listing
/// re-derives its page from a fresh snapshot anyway.
pub trait DataSource: Send + Sync {
    /// Full catalog including drafts (admin views)
    fn events(&self) -> Vec<Event>;

    /// Catalog as the public listing sees it (explicitly unpublished hidden)
    fn public_events(&self) -> Vec<Event> {
        self.events().into_iter().filter(|e| e.is_public()).collect()
    }

    fn event(&self, id: &str) -> Result<Event, DataError>;

    fn registrations(&self) -> Vec<Registration>;

    fn registrations_for_user(&self, user_id: &str) -> Vec<Registration> {
        self.registrations()
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect()
    }

    fn departments(&self) -> Vec<Department>;

    fn department(&self, id: &str) -> Result<Department, DataError>;

    /// Events belonging to a council, by the static label mapping.
    /// This is a one-shot partition of the catalog, not a per-keystroke
    /// filter - it shares nothing with the paginated search path.
    fn department_events(&self, department: &Department) -> Vec<Event> {
        self.events()
            .into_iter()
            .filter(|e| department.covers(&e.department))
            .collect()
    }

    fn current_user(&self) -> User;

    fn update_user(&self, user: User);

    fn create_event(&self, draft: EventDraft) -> Event;

    fn update_event(&self, id: &str, draft: EventDraft) -> Result<Event, DataError>;

    fn delete_event(&self, id: &str) -> Result<(), DataError>;

    /// Flip the publish flag; returns the new value. Absent counts as
    /// unpublished, so toggling a draft always publishes it.
    fn toggle_published(&self, id: &str) -> Result<bool, DataError>;

    fn set_registration_status(
        &self,
        id: &str,
        status: RegistrationStatus,
    ) -> Result<(), DataError>;

    /// Append a registration for the event and bump its registered count
    fn register(&self, event_id: &str, form: RegistrationForm)
        -> Result<Registration, DataError>;
}
