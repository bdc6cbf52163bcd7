// Event entity and its derived display status

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Categories an event can belong to. Used as a single-select facet on the
/// public events listing and for per-type analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Workshop,
    Hackathon,
    Seminar,
    Competition,
    Cultural,
    Tech,
    Other,
}

impl EventType {
    /// All types in display order (facet dropdown order)
    pub const ALL: [EventType; 7] = [
        EventType::Workshop,
        EventType::Hackathon,
        EventType::Seminar,
        EventType::Competition,
        EventType::Cultural,
        EventType::Tech,
        EventType::Other,
    ];

    /// Stable key used for facet matching
    pub fn key(&self) -> &'static str {
        match self {
            EventType::Workshop => "workshop",
            EventType::Hackathon => "hackathon",
            EventType::Seminar => "seminar",
            EventType::Competition => "competition",
            EventType::Cultural => "cultural",
            EventType::Tech => "tech",
            EventType::Other => "other",
        }
    }

    /// Human-readable label for chips and dropdowns
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Workshop => "Workshop",
            EventType::Hackathon => "Hackathon",
            EventType::Seminar => "Seminar",
            EventType::Competition => "Competition",
            EventType::Cultural => "Cultural",
            EventType::Tech => "Tech",
            EventType::Other => "Other",
        }
    }
}

/// A department event as supplied by the data source.
///
/// `department` is a free-text label, not a foreign key - the Departments
/// page groups events by matching this label against each council's list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub department: String,
    #[serde(rename = "type")]
    pub kind: EventType,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub venue: String,
    pub capacity: u32,
    pub registered_count: u32,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    /// Absent means the event was never explicitly published. Admin views
    /// treat absent as a draft; public views hide only an explicit `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}

/// Lifecycle status derived from publish flag and schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Draft,
    Upcoming,
    Ongoing,
    Completed,
}

impl EventStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Draft => "Draft",
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Ongoing => "Ongoing",
            EventStatus::Completed => "Completed",
        }
    }
}

impl Event {
    /// Status as shown in the admin table
    pub fn status(&self, now: DateTime<Utc>) -> EventStatus {
        if !self.is_published.unwrap_or(false) {
            return EventStatus::Draft;
        }
        if now < self.start_at {
            EventStatus::Upcoming
        } else if now <= self.end_at {
            EventStatus::Ongoing
        } else {
            EventStatus::Completed
        }
    }

    /// Whether the event shows up on public listings.
    /// Only an explicit `Some(false)` hides it there.
    pub fn is_public(&self) -> bool {
        self.is_published != Some(false)
    }

    pub fn is_full(&self) -> bool {
        self.registered_count >= self.capacity
    }

    pub fn seats_left(&self) -> u32 {
        self.capacity.saturating_sub(self.registered_count)
    }

    /// Registered/capacity as a 0-100 percentage for gauges
    pub fn fill_percent(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        (self.registered_count as f64 / self.capacity as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(published: Option<bool>) -> Event {
        Event {
            id: "e1".into(),
            title: "Test".into(),
            description: String::new(),
            department: "Computer Science".into(),
            kind: EventType::Tech,
            start_at: Utc.with_ymd_and_hms(2024, 3, 10, 10, 0, 0).unwrap(),
            end_at: Utc.with_ymd_and_hms(2024, 3, 10, 16, 0, 0).unwrap(),
            venue: "Lab 201".into(),
            capacity: 10,
            registered_count: 4,
            images: vec![],
            tags: vec![],
            is_published: published,
        }
    }

    #[test]
    fn unpublished_is_draft_regardless_of_schedule() {
        let e = event(None);
        let during = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        assert_eq!(e.status(during), EventStatus::Draft);
        assert_eq!(event(Some(false)).status(during), EventStatus::Draft);
    }

    #[test]
    fn published_status_follows_schedule() {
        let e = event(Some(true));
        let before = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let during = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
        assert_eq!(e.status(before), EventStatus::Upcoming);
        assert_eq!(e.status(during), EventStatus::Ongoing);
        assert_eq!(e.status(after), EventStatus::Completed);
    }

    #[test]
    fn public_visibility_hides_only_explicit_false() {
        assert!(event(None).is_public());
        assert!(event(Some(true)).is_public());
        assert!(!event(Some(false)).is_public());
    }

    #[test]
    fn capacity_accessors() {
        let mut e = event(Some(true));
        assert!(!e.is_full());
        assert_eq!(e.seats_left(), 6);
        assert!((e.fill_percent() - 40.0).abs() < f64::EPSILON);

        e.registered_count = 10;
        assert!(e.is_full());
        assert_eq!(e.seats_left(), 0);
    }
}
