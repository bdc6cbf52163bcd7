// Registration entity - who signed up for what

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Registered,
    Attended,
    Cancelled,
}

impl RegistrationStatus {
    pub const ALL: [RegistrationStatus; 3] = [
        RegistrationStatus::Registered,
        RegistrationStatus::Attended,
        RegistrationStatus::Cancelled,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            RegistrationStatus::Registered => "registered",
            RegistrationStatus::Attended => "attended",
            RegistrationStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RegistrationStatus::Registered => "Registered",
            RegistrationStatus::Attended => "Attended",
            RegistrationStatus::Cancelled => "Cancelled",
        }
    }
}

/// One registration row.
///
/// Carries denormalized display fields (event name, registrant name/email,
/// department, year) so the admin table and CSV export never need joins -
/// the data source fills these in when a registration is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: String,
    pub user_id: String,
    pub event_id: String,
    pub event_name: String,
    pub user_name: String,
    pub user_email: String,
    pub department: String,
    pub year: String,
    pub status: RegistrationStatus,
    pub timestamp: DateTime<Utc>,
}
