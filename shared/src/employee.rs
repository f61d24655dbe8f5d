//! Employee view model and wire-record mapping
//!
//! The backend omits fields freely; the mapping here fills the
//! defaults the dashboard relies on so every downstream consumer
//! sees a stable shape.

use serde::{Deserialize, Serialize};

/// Role assumed when the backend omits one.
pub const DEFAULT_ROLE: &str = "GRADER";

/// Daily work hours assumed when the backend omits them.
pub const DEFAULT_WORK_HOURS_PER_DAY: u32 = 8;

/// Raw employee record as returned by `GET /api/employees`.
///
/// Everything is optional on the wire; defaulting happens in
/// [`Employee::from_record`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeRecord {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub work_hours_per_day: Option<u32>,
    pub active: Option<bool>,
    pub available: Option<bool>,
    pub current_load: Option<u32>,
    pub name: Option<String>,
}

/// Employee view model with defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: Option<String>,
    pub role: String,
    pub work_hours_per_day: u32,
    pub active: bool,
    pub available: bool,
    pub current_load: u32,
    pub name: String,
}

impl Employee {
    /// Maps a raw backend record into the view model.
    ///
    /// Defaulting rules: `fullName` falls back to `"{first} {last}"`,
    /// `name` falls back to the (possibly computed) full name, a
    /// missing `role` becomes [`DEFAULT_ROLE`], missing work hours
    /// become [`DEFAULT_WORK_HOURS_PER_DAY`], and a missing `active`
    /// flag means the employee is considered active.
    pub fn from_record(record: EmployeeRecord) -> Self {
        let first_name = record.first_name.unwrap_or_default();
        let last_name = record.last_name.unwrap_or_default();
        let full_name = record
            .full_name
            .unwrap_or_else(|| format!("{} {}", first_name, last_name));
        let name = record.name.unwrap_or_else(|| full_name.clone());

        Self {
            id: record.id.unwrap_or_default(),
            first_name,
            last_name,
            email: record.email,
            role: record.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            work_hours_per_day: record
                .work_hours_per_day
                .unwrap_or(DEFAULT_WORK_HOURS_PER_DAY),
            active: record.active.unwrap_or(true),
            available: record.available.unwrap_or(false),
            current_load: record.current_load.unwrap_or(0),
            full_name,
            name,
        }
    }

    /// Active and available at the same time, i.e. eligible for
    /// planning assignment.
    pub fn is_schedulable(&self) -> bool {
        self.active && self.available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> EmployeeRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_defaults_applied_to_sparse_record() {
        let employee = Employee::from_record(record(
            r#"{"id":"emp-1","firstName":"Ash","lastName":"Ketchum"}"#,
        ));

        assert_eq!(employee.full_name, "Ash Ketchum");
        assert_eq!(employee.name, "Ash Ketchum");
        assert_eq!(employee.role, DEFAULT_ROLE);
        assert_eq!(employee.work_hours_per_day, 8);
        assert!(employee.active);
        assert!(!employee.available);
        assert_eq!(employee.current_load, 0);
    }

    #[test]
    fn test_backend_values_win_over_defaults() {
        let employee = Employee::from_record(record(
            r#"{"id":"emp-2","firstName":"Misty","lastName":"Waterflower",
                "fullName":"M. Waterflower","role":"CERTIFIER",
                "workHoursPerDay":6,"active":false,"available":true,
                "currentLoad":120,"name":"Misty"}"#,
        ));

        assert_eq!(employee.full_name, "M. Waterflower");
        assert_eq!(employee.name, "Misty");
        assert_eq!(employee.role, "CERTIFIER");
        assert_eq!(employee.work_hours_per_day, 6);
        assert!(!employee.active);
        assert!(employee.available);
        assert_eq!(employee.current_load, 120);
    }

    #[test]
    fn test_name_falls_back_to_backend_full_name() {
        let employee = Employee::from_record(record(
            r#"{"id":"emp-3","firstName":"Brock","lastName":"Harrison",
                "fullName":"Brock H."}"#,
        ));

        assert_eq!(employee.name, "Brock H.");
    }

    #[test]
    fn test_schedulable_requires_active_and_available() {
        let mut employee = Employee::from_record(record(r#"{"id":"emp-4"}"#));
        assert!(!employee.is_schedulable());

        employee.available = true;
        assert!(employee.is_schedulable());

        employee.active = false;
        assert!(!employee.is_schedulable());
    }
}
