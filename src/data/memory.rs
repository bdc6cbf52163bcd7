// In-memory data source adapter
//
// Holds the seed catalog behind an RwLock and applies admin mutations to it.
// State lives for the process only - a fresh session starts from the seed
// again, which is exactly the lifecycle the UI expects.

use super::{seed, DataError, DataSource, EventDraft, RegistrationForm};
use crate::models::{Department, Event, Registration, RegistrationStatus, User};
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

struct Store {
    events: Vec<Event>,
    registrations: Vec<Registration>,
    departments: Vec<Department>,
    user: User,
    user_registrations: Vec<Registration>,
}

pub struct InMemoryDataSource {
    store: RwLock<Store>,
    next_id: AtomicU64,
}

impl InMemoryDataSource {
    /// Build a source pre-loaded with the seed catalog
    pub fn seeded() -> Self {
        Self {
            store: RwLock::new(Store {
                events: seed::events(),
                registrations: seed::registrations(),
                departments: seed::departments(),
                user: seed::profile_user(),
                user_registrations: seed::profile_registrations(),
            }),
            next_id: AtomicU64::new(100),
        }
    }

    /// Build an empty source (test scaffolding)
    pub fn empty() -> Self {
        Self {
            store: RwLock::new(Store {
                events: Vec::new(),
                registrations: Vec::new(),
                departments: Vec::new(),
                user: seed::profile_user(),
                user_registrations: Vec::new(),
            }),
            next_id: AtomicU64::new(100),
        }
    }

    fn fresh_id(&self) -> String {
        self.next_id.fetch_add(1, Ordering::SeqCst).to_string()
    }
}

impl DataSource for InMemoryDataSource {
    fn events(&self) -> Vec<Event> {
        self.store.read().unwrap().events.clone()
    }

    fn event(&self, id: &str) -> Result<Event, DataError> {
        self.store
            .read()
            .unwrap()
            .events
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| DataError::not_found("event", id))
    }

    fn registrations(&self) -> Vec<Registration> {
        self.store.read().unwrap().registrations.clone()
    }

    fn registrations_for_user(&self, user_id: &str) -> Vec<Registration> {
        // The profile user's registrations live in their own list, mirroring
        // the per-page fixtures this store was seeded from
        self.store
            .read()
            .unwrap()
            .user_registrations
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect()
    }

    fn departments(&self) -> Vec<Department> {
        self.store.read().unwrap().departments.clone()
    }

    fn department(&self, id: &str) -> Result<Department, DataError> {
        self.store
            .read()
            .unwrap()
            .departments
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| DataError::not_found("department", id))
    }

    fn current_user(&self) -> User {
        self.store.read().unwrap().user.clone()
    }

    fn update_user(&self, user: User) {
        self.store.write().unwrap().user = user;
    }

    fn create_event(&self, draft: EventDraft) -> Event {
        let event = Event {
            id: self.fresh_id(),
            title: draft.title,
            description: draft.description,
            department: draft.department,
            kind: draft.kind,
            start_at: draft.start_at,
            end_at: draft.end_at,
            venue: draft.venue,
            capacity: draft.capacity,
            registered_count: 0,
            images: Vec::new(),
            tags: draft.tags,
            is_published: draft.is_published,
        };
        self.store.write().unwrap().events.push(event.clone());
        event
    }

    fn update_event(&self, id: &str, draft: EventDraft) -> Result<Event, DataError> {
        let mut store = self.store.write().unwrap();
        let event = store
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| DataError::not_found("event", id))?;

        event.title = draft.title;
        event.description = draft.description;
        event.department = draft.department;
        event.kind = draft.kind;
        event.start_at = draft.start_at;
        event.end_at = draft.end_at;
        event.venue = draft.venue;
        event.capacity = draft.capacity;
        event.tags = draft.tags;
        event.is_published = draft.is_published;
        Ok(event.clone())
    }

    fn delete_event(&self, id: &str) -> Result<(), DataError> {
        let mut store = self.store.write().unwrap();
        let before = store.events.len();
        store.events.retain(|e| e.id != id);
        if store.events.len() == before {
            return Err(DataError::not_found("event", id));
        }
        Ok(())
    }

    fn toggle_published(&self, id: &str) -> Result<bool, DataError> {
        let mut store = self.store.write().unwrap();
        let event = store
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| DataError::not_found("event", id))?;

        let now_published = !event.is_published.unwrap_or(false);
        event.is_published = Some(now_published);
        Ok(now_published)
    }

    fn set_registration_status(
        &self,
        id: &str,
        status: RegistrationStatus,
    ) -> Result<(), DataError> {
        let mut store = self.store.write().unwrap();
        let registration = store
            .registrations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| DataError::not_found("registration", id))?;
        registration.status = status;
        Ok(())
    }

    fn register(
        &self,
        event_id: &str,
        form: RegistrationForm,
    ) -> Result<Registration, DataError> {
        let id = self.fresh_id();
        let mut store = self.store.write().unwrap();
        let event = store
            .events
            .iter_mut()
            .find(|e| e.id == event_id)
            .ok_or_else(|| DataError::not_found("event", event_id))?;

        if event.is_full() {
            return Err(DataError::EventFull);
        }
        event.registered_count += 1;

        let registration = Registration {
            id: id.clone(),
            user_id: format!("u{id}"),
            event_id: event_id.to_string(),
            event_name: event.title.clone(),
            user_name: form.name,
            user_email: form.email,
            department: form.department,
            year: form.year,
            status: RegistrationStatus::Registered,
            timestamp: Utc::now(),
        };
        store.registrations.push(registration.clone());
        Ok(registration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{facet_key, paginate, Predicates};
    use crate::models::EventType;

    fn form(name: &str) -> RegistrationForm {
        RegistrationForm {
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            department: "Computer Science".into(),
            year: "2nd Year".into(),
        }
    }

    #[test]
    fn seed_catalog_paginates_in_twos() {
        let data = InMemoryDataSource::seeded();
        let events = data.events();
        assert_eq!(events.len(), 8);

        let none = Predicates::new();
        let p1 = paginate(&events, &none, 4, 1);
        let p2 = paginate(&events, &none, 4, 2);
        assert_eq!(p1.total_pages, 2);
        let ids = |page: &crate::collection::Page<Event>| {
            page.items.iter().map(|e| e.id.clone()).collect::<Vec<_>>()
        };
        assert_eq!(ids(&p1), ["1", "2", "3", "4"]);
        assert_eq!(ids(&p2), ["5", "6", "7", "8"]);

        // Requesting a page past the end shows the last page's content
        let p3 = paginate(&events, &none, 4, 3);
        assert_eq!(p3.page, 2);
        assert_eq!(ids(&p3), ids(&p2));
    }

    #[test]
    fn search_ai_finds_exactly_the_ml_workshop() {
        let data = InMemoryDataSource::seeded();
        let events = data.events();
        let preds = Predicates::new().search(
            "AI",
            vec![|e: &Event| e.title.as_str(), |e: &Event| e.description.as_str()],
        );
        let page = paginate(&events, &preds, 8, 1);
        assert_eq!(page.total_matching, 1);
        assert_eq!(page.items[0].title, "AI & Machine Learning Workshop");
    }

    #[test]
    fn department_and_type_facets_compose() {
        let data = InMemoryDataSource::seeded();
        let events = data.events();
        let preds = Predicates::new()
            .facet(Some("computer-science"), |e: &Event| {
                facet_key(&e.department)
            })
            .facet(Some("tech"), |e: &Event| e.kind.key().to_string());

        let page = paginate(&events, &preds, 8, 1);
        let ids: Vec<_> = page.items.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["1", "5"]);
    }

    #[test]
    fn cancelled_facet_matches_one_registration() {
        let data = InMemoryDataSource::seeded();
        let rows = data.registrations();
        assert_eq!(rows.len(), 7);

        let preds = Predicates::new().facet(Some("cancelled"), |r: &Registration| {
            r.status.key().to_string()
        });
        let page = paginate(&rows, &preds, 5, 1);
        assert_eq!(page.total_matching, 1);
        assert_eq!(page.items[0].user_name, "David Brown");
    }

    #[test]
    fn public_listing_hides_only_explicitly_unpublished() {
        let data = InMemoryDataSource::seeded();
        let public = data.public_events();
        // Event 4 is the only Some(false) in the seed
        assert_eq!(public.len(), 7);
        assert!(public.iter().all(|e| e.id != "4"));
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let data = InMemoryDataSource::seeded();
        assert_eq!(
            data.event("999"),
            Err(DataError::not_found("event", "999"))
        );
        assert!(data.department("nope").is_err());
        assert!(data.delete_event("999").is_err());
    }

    #[test]
    fn department_partition_follows_label_mapping() {
        let data = InMemoryDataSource::seeded();
        let coe = data.department("coe").unwrap();
        let events = data.department_events(&coe);
        let ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();
        // Computer Science + Electronics events, in catalog order
        assert_eq!(ids, ["1", "2", "5"]);
    }

    #[test]
    fn register_appends_and_bumps_count() {
        let data = InMemoryDataSource::seeded();
        let before = data.event("1").unwrap().registered_count;

        let registration = data.register("1", form("Casey")).unwrap();
        assert_eq!(registration.status, RegistrationStatus::Registered);
        assert_eq!(registration.event_name, "AI & Machine Learning Workshop");

        assert_eq!(data.event("1").unwrap().registered_count, before + 1);
        assert_eq!(data.registrations().len(), 8);
    }

    #[test]
    fn register_rejects_full_events() {
        let data = InMemoryDataSource::seeded();
        let draft = EventDraft {
            title: "Tiny Meetup".into(),
            description: String::new(),
            department: "Computer Science".into(),
            kind: EventType::Seminar,
            start_at: Utc::now(),
            end_at: Utc::now(),
            venue: "Room 1".into(),
            capacity: 1,
            tags: vec![],
            is_published: Some(true),
        };
        let event = data.create_event(draft);

        assert!(data.register(&event.id, form("First")).is_ok());
        assert_eq!(
            data.register(&event.id, form("Second")),
            Err(DataError::EventFull)
        );
    }

    #[test]
    fn toggle_published_treats_absent_as_draft() {
        let data = InMemoryDataSource::seeded();
        // Event 6 is seeded with no publish flag
        assert_eq!(data.event("6").unwrap().is_published, None);
        assert!(data.toggle_published("6").unwrap());
        assert!(!data.toggle_published("6").unwrap());
    }

    #[test]
    fn empty_source_still_yields_one_page() {
        let data = InMemoryDataSource::empty();
        assert!(data.events().is_empty());

        let page = paginate(&data.events(), &Predicates::new(), 4, 1);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
        assert!(data.event("1").is_err());
    }

    #[test]
    fn profile_registrations_are_scoped_to_the_user() {
        let data = InMemoryDataSource::seeded();
        let user = data.current_user();
        let mine = data.registrations_for_user(&user.id);
        assert_eq!(mine.len(), 3);
        assert!(mine.iter().all(|r| r.user_id == user.id));
    }
}
