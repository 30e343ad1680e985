//! Employee registration and lookup rules.
//!
//! These functions operate on a [`Snapshot`] borrowed from the store;
//! persistence is orchestrated by [`crate::engine::LeaveService`].

use crate::error::{EngineError, EngineResult};
use crate::models::{BalanceSummary, Employee, LeaveBalance, Snapshot};

use super::dates::parse_date;

/// The raw inputs for registering an employee.
///
/// Fields arrive as optional strings straight from the request body so
/// that missing and malformed values surface through the engine's typed
/// error taxonomy rather than as deserialization failures.
#[derive(Debug, Clone, Default)]
pub struct NewEmployee {
    /// Full name.
    pub name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Department name.
    pub department: Option<String>,
    /// Joining date as a `YYYY-MM-DD` string.
    pub joining_date: Option<String>,
}

/// Returns the trimmed field value, or `InvalidInput` when it is
/// missing or blank.
pub(super) fn required_field(value: Option<String>, field: &str) -> EngineResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(EngineError::InvalidInput {
            message: format!("{field} is required"),
        }),
    }
}

/// Registers a new employee.
///
/// Validation order: required fields, joining-date parse, duplicate
/// email (case-insensitive). On success the employee receives the next
/// sequential id and the default leave balances, and is appended to the
/// snapshot.
pub fn register(snapshot: &mut Snapshot, input: NewEmployee) -> EngineResult<Employee> {
    let name = required_field(input.name, "name")?;
    let email = required_field(input.email, "email")?;
    let department = required_field(input.department, "department")?;
    let joining_raw = required_field(input.joining_date, "joining_date")?;
    let joining_date = parse_date(&joining_raw, "joining_date")?;

    if snapshot.employees.iter().any(|e| e.email_matches(&email)) {
        return Err(EngineError::DuplicateEmployee { email });
    }

    let employee = Employee {
        id: snapshot.allocate_employee_id(),
        name,
        email,
        department,
        joining_date,
        leave_balance: LeaveBalance::default(),
    };
    snapshot.employees.push(employee.clone());
    Ok(employee)
}

/// Looks up an employee by id.
pub fn find_employee(snapshot: &Snapshot, id: u64) -> EngineResult<&Employee> {
    snapshot
        .employee(id)
        .ok_or(EngineError::EmployeeNotFound { id })
}

/// Returns the balance view for an employee.
pub fn balance_summary(snapshot: &Snapshot, id: u64) -> EngineResult<BalanceSummary> {
    let employee = find_employee(snapshot, id)?;
    Ok(BalanceSummary {
        id: employee.id,
        name: employee.name.clone(),
        email: employee.email.clone(),
        balance: employee.leave_balance,
    })
}
