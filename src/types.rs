//! Core types for roster

use serde::{Deserialize, Serialize};

/// A single employee record.
///
/// `id` is assigned by the store on creation and is immutable afterwards.
/// No other field is validated beyond its serde type shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    /// Business-facing number, not unique-enforced
    pub employee_id: i64,
    pub salary: f64,
    /// ISO date string, stored verbatim
    pub start_date: String,
}

/// Employee fields without an `id`; the request body for create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub employee_id: i64,
    pub salary: f64,
    pub start_date: String,
}

impl EmployeeDraft {
    /// Materialize a new record under the given id.
    pub fn into_employee(self, id: String) -> Employee {
        Employee {
            id,
            name: self.name,
            email: self.email,
            department: self.department,
            position: self.position,
            employee_id: self.employee_id,
            salary: self.salary,
            start_date: self.start_date,
        }
    }

    /// Overwrite every field of `existing` except its id.
    pub fn apply_to(self, existing: &mut Employee) {
        existing.name = self.name;
        existing.email = self.email;
        existing.department = self.department;
        existing.position = self.position;
        existing.employee_id = self.employee_id;
        existing.salary = self.salary;
        existing.start_date = self.start_date;
    }
}

/// On-disk document shape: `{ "employees": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EmployeeDocument {
    pub employees: Vec<Employee>,
}
