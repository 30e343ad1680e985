//! The persisted dataset, treated as a single unit for load/save.

use serde::{Deserialize, Serialize};

use super::employee::Employee;
use super::leave::LeaveRequest;

fn first_id() -> u64 {
    1
}

/// The entire persisted dataset: employees, leave requests, and the
/// sequential id counters.
///
/// A snapshot is always loaded and saved whole; there are no partial
/// updates. The default snapshot is empty with both counters at 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// All registered employees, in registration order.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// All leave requests, in creation order.
    #[serde(default)]
    pub leaves: Vec<LeaveRequest>,
    /// The id the next registered employee will receive.
    #[serde(default = "first_id")]
    pub next_employee_id: u64,
    /// The id the next created leave request will receive.
    #[serde(default = "first_id")]
    pub next_leave_id: u64,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            employees: Vec::new(),
            leaves: Vec::new(),
            next_employee_id: first_id(),
            next_leave_id: first_id(),
        }
    }
}

impl Snapshot {
    /// Looks up an employee by id.
    pub fn employee(&self, id: u64) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Looks up an employee by id, mutably.
    pub fn employee_mut(&mut self, id: u64) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| e.id == id)
    }

    /// Looks up a leave request by id.
    pub fn leave(&self, id: u64) -> Option<&LeaveRequest> {
        self.leaves.iter().find(|l| l.id == id)
    }

    /// Looks up a leave request by id, mutably.
    pub fn leave_mut(&mut self, id: u64) -> Option<&mut LeaveRequest> {
        self.leaves.iter_mut().find(|l| l.id == id)
    }

    /// Returns the next employee id and advances the counter.
    pub fn allocate_employee_id(&mut self) -> u64 {
        let id = self.next_employee_id;
        self.next_employee_id += 1;
        id
    }

    /// Returns the next leave id and advances the counter.
    pub fn allocate_leave_id(&mut self) -> u64 {
        let id = self.next_leave_id;
        self.next_leave_id += 1;
        id
    }
}
