// Seed catalog for the in-memory data source
//
// This is the same fixture set the UI was designed around: 8 events across
// six department labels, 7 registrations (one cancelled), 4 councils, and a
// single profile user. Tests elsewhere lean on the exact shape of this data.

use crate::models::{
    Department, Event, EventType, Registration, RegistrationStatus, User, UserRole,
};
use chrono::{DateTime, TimeZone, Utc};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    title: &str,
    description: &str,
    department: &str,
    kind: EventType,
    start_at: DateTime<Utc>,
    end_at: DateTime<Utc>,
    venue: &str,
    capacity: u32,
    registered_count: u32,
    tags: &[&str],
    is_published: Option<bool>,
) -> Event {
    Event {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        department: department.into(),
        kind,
        start_at,
        end_at,
        venue: venue.into(),
        capacity,
        registered_count,
        images: Vec::new(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        is_published,
    }
}

pub fn events() -> Vec<Event> {
    vec![
        event(
            "1",
            "AI & Machine Learning Workshop",
            "Deep dive into modern AI techniques and hands-on machine learning projects with industry experts.",
            "Computer Science",
            EventType::Tech,
            at(2023, 10, 15, 10, 0),
            at(2023, 10, 15, 16, 0),
            "Computer Lab 201",
            50,
            32,
            &["AI", "Machine Learning", "Workshop"],
            Some(true),
        ),
        event(
            "2",
            "Robotics Innovation Challenge",
            "Build and program autonomous robots to solve real-world problems. Compete for prizes with your innovative solutions.",
            "Electronics",
            EventType::Tech,
            at(2023, 11, 22, 9, 0),
            at(2023, 11, 22, 18, 0),
            "Engineering Workshop",
            40,
            28,
            &["Robotics", "Innovation", "Competition"],
            Some(true),
        ),
        event(
            "3",
            "Cultural Fest 2023 - \"Harmony\"",
            "Celebrate diversity through music, dance, drama, and literature. Open to all departments and students.",
            "Cultural Affairs",
            EventType::Cultural,
            at(2023, 12, 10, 10, 0),
            at(2023, 12, 10, 20, 0),
            "Main Auditorium",
            500,
            320,
            &["Cultural", "Festival", "Performance"],
            Some(true),
        ),
        event(
            "4",
            "Startup Pitch Competition",
            "Present your innovative business ideas to venture capitalists and win funding for your startup.",
            "Business",
            EventType::Other,
            at(2024, 1, 15, 14, 0),
            at(2024, 1, 15, 18, 0),
            "Business Center Hall",
            30,
            18,
            &["Startup", "Business", "Pitch"],
            Some(false),
        ),
        event(
            "5",
            "Web Development Bootcamp",
            "Learn modern web development with React, Node.js, and MongoDB in this intensive bootcamp.",
            "Computer Science",
            EventType::Tech,
            at(2023, 11, 5, 9, 0),
            at(2023, 11, 7, 17, 0),
            "Computer Lab 305",
            35,
            29,
            &["Web Development", "React", "Bootcamp"],
            Some(true),
        ),
        event(
            "6",
            "Photography Exhibition",
            "Showcase of student photography talent featuring landscapes, portraits, and abstract art.",
            "Fine Arts",
            EventType::Cultural,
            at(2023, 12, 18, 10, 0),
            at(2023, 12, 20, 18, 0),
            "Art Gallery",
            200,
            85,
            &["Photography", "Exhibition", "Arts"],
            None,
        ),
        event(
            "7",
            "Blockchain & Cryptocurrency Seminar",
            "Understand the fundamentals of blockchain technology and cryptocurrency markets.",
            "Business",
            EventType::Tech,
            at(2024, 2, 8, 14, 0),
            at(2024, 2, 8, 17, 0),
            "Seminar Hall 2",
            100,
            42,
            &["Blockchain", "Cryptocurrency", "Seminar"],
            None,
        ),
        event(
            "8",
            "Environmental Sustainability Workshop",
            "Learn about sustainable practices and how to implement eco-friendly solutions in daily life.",
            "Environmental Science",
            EventType::Workshop,
            at(2024, 1, 25, 10, 0),
            at(2024, 1, 25, 15, 0),
            "Green Campus Center",
            60,
            38,
            &["Environment", "Sustainability", "Workshop"],
            None,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn registration(
    id: &str,
    event_id: &str,
    event_name: &str,
    user_name: &str,
    user_email: &str,
    department: &str,
    year: &str,
    timestamp: DateTime<Utc>,
    status: RegistrationStatus,
) -> Registration {
    Registration {
        id: id.into(),
        user_id: format!("u{id}"),
        event_id: event_id.into(),
        event_name: event_name.into(),
        user_name: user_name.into(),
        user_email: user_email.into(),
        department: department.into(),
        year: year.into(),
        status,
        timestamp,
    }
}

pub fn registrations() -> Vec<Registration> {
    vec![
        registration(
            "1",
            "1",
            "AI & Machine Learning Workshop",
            "John Doe",
            "john.doe@example.com",
            "Computer Science",
            "3rd Year",
            at(2023, 9, 30, 14, 25),
            RegistrationStatus::Registered,
        ),
        registration(
            "2",
            "1",
            "AI & Machine Learning Workshop",
            "Jane Smith",
            "jane.smith@example.com",
            "Electronics",
            "2nd Year",
            at(2023, 10, 1, 9, 15),
            RegistrationStatus::Registered,
        ),
        registration(
            "3",
            "2",
            "Robotics Innovation Challenge",
            "Mike Johnson",
            "mike.j@example.com",
            "Mechanical",
            "4th Year",
            at(2023, 10, 5, 16, 40),
            RegistrationStatus::Registered,
        ),
        registration(
            "4",
            "3",
            "Cultural Fest 2023 - \"Harmony\"",
            "Sarah Williams",
            "sarah.w@example.com",
            "Fine Arts",
            "2nd Year",
            at(2023, 10, 8, 11, 20),
            RegistrationStatus::Registered,
        ),
        registration(
            "5",
            "1",
            "AI & Machine Learning Workshop",
            "David Brown",
            "david.b@example.com",
            "Computer Science",
            "3rd Year",
            at(2023, 10, 2, 13, 45),
            RegistrationStatus::Cancelled,
        ),
        registration(
            "6",
            "2",
            "Robotics Innovation Challenge",
            "Emily Davis",
            "emily.d@example.com",
            "Electronics",
            "1st Year",
            at(2023, 10, 6, 10, 30),
            RegistrationStatus::Attended,
        ),
        registration(
            "7",
            "3",
            "Cultural Fest 2023 - \"Harmony\"",
            "Alex Wilson",
            "alex.w@example.com",
            "Business Administration",
            "2nd Year",
            at(2023, 10, 9, 14, 15),
            RegistrationStatus::Attended,
        ),
    ]
}

fn department(id: &str, name: &str, description: &str, labels: &[&str]) -> Department {
    Department {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        labels: labels.iter().map(|l| l.to_string()).collect(),
    }
}

pub fn departments() -> Vec<Department> {
    vec![
        department(
            "coe",
            "COE - College of Engineering",
            "Focus on cutting-edge technologies in AI, ML, Web Development, Robotics, and core engineering innovations.",
            &["Computer Science", "Electronics"],
        ),
        department(
            "cec",
            "CEC - Cultural & Extracurricular Council",
            "Encouraging students to express their creativity and passion in arts, culture, literature, music, and performance.",
            &["Cultural Affairs", "Fine Arts"],
        ),
        department(
            "cbsa",
            "CBSA - College of Business Studies & Analytics",
            "Dedicated to business, entrepreneurship, financial analytics, and modern corporate innovations.",
            &["Business"],
        ),
        department(
            "hm",
            "HM - Environmental & Sustainability Sciences",
            "Committed to building a sustainable future with environmental awareness, green initiatives, and eco-friendly practices.",
            &["Environmental Science"],
        ),
    ]
}

pub fn profile_user() -> User {
    User {
        id: "1".into(),
        name: "Alex Johnson".into(),
        email: "alex.johnson@example.com".into(),
        role: UserRole::Student,
        department: "Computer Science".into(),
        year: "3rd Year".into(),
        bio: "Computer Science student passionate about AI and machine learning. \
              Looking to connect with like-minded individuals and participate in tech events."
            .into(),
    }
}

/// Registrations belonging to the profile user (their "my events" table)
pub fn profile_registrations() -> Vec<Registration> {
    let user = profile_user();
    vec![
        Registration {
            id: "p1".into(),
            user_id: user.id.clone(),
            event_id: "1".into(),
            event_name: "AI & Machine Learning Workshop".into(),
            user_name: user.name.clone(),
            user_email: user.email.clone(),
            department: user.department.clone(),
            year: user.year.clone(),
            status: RegistrationStatus::Registered,
            timestamp: at(2023, 10, 1, 12, 0),
        },
        Registration {
            id: "p2".into(),
            user_id: user.id.clone(),
            event_id: "2".into(),
            event_name: "Robotics Innovation Challenge".into(),
            user_name: user.name.clone(),
            user_email: user.email.clone(),
            department: user.department.clone(),
            year: user.year.clone(),
            status: RegistrationStatus::Registered,
            timestamp: at(2023, 10, 7, 18, 30),
        },
        Registration {
            id: "p3".into(),
            user_id: user.id,
            event_id: "5".into(),
            event_name: "Web Development Bootcamp".into(),
            user_name: "Alex Johnson".into(),
            user_email: "alex.johnson@example.com".into(),
            department: "Computer Science".into(),
            year: "3rd Year".into(),
            status: RegistrationStatus::Attended,
            timestamp: at(2023, 9, 5, 9, 0),
        },
    ]
}
