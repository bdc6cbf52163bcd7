// Department (council) entity

use serde::{Deserialize, Serialize};

/// A department council as shown on the Departments page.
///
/// `labels` is the static mapping that ties events to a council: an event
/// belongs to the council whose `labels` list contains the event's free-text
/// `department` field. This is a label match, not a foreign key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub description: String,
    pub labels: Vec<String>,
}

impl Department {
    /// Whether an event's department label belongs to this council
    pub fn covers(&self, department_label: &str) -> bool {
        self.labels.iter().any(|l| l == department_label)
    }
}
