//! Employee model and related types.
//!
//! This module defines the Employee struct and the LeaveBalance type
//! holding the per-type whole-day leave allotments.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::leave::LeaveType;

/// Default casual leave allotment in days.
pub const DEFAULT_CASUAL_DAYS: i64 = 12;

/// Default sick leave allotment in days.
pub const DEFAULT_SICK_DAYS: i64 = 8;

/// Default earned leave allotment in days.
pub const DEFAULT_EARNED_DAYS: i64 = 0;

/// Remaining whole-day leave balances, one bucket per leave type.
///
/// Balances only ever decrease, and only through leave approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// Remaining casual leave days.
    pub casual: i64,
    /// Remaining sick leave days.
    pub sick: i64,
    /// Remaining earned leave days.
    pub earned: i64,
}

impl Default for LeaveBalance {
    fn default() -> Self {
        Self {
            casual: DEFAULT_CASUAL_DAYS,
            sick: DEFAULT_SICK_DAYS,
            earned: DEFAULT_EARNED_DAYS,
        }
    }
}

impl LeaveBalance {
    /// Returns the remaining days for the given leave type.
    pub fn available(&self, leave_type: LeaveType) -> i64 {
        match leave_type {
            LeaveType::Casual => self.casual,
            LeaveType::Sick => self.sick,
            LeaveType::Earned => self.earned,
        }
    }

    /// Deducts `days` from the bucket for the given leave type.
    ///
    /// Callers must have verified the balance is sufficient first.
    pub fn deduct(&mut self, leave_type: LeaveType, days: i64) {
        match leave_type {
            LeaveType::Casual => self.casual -= days,
            LeaveType::Sick => self.sick -= days,
            LeaveType::Earned => self.earned -= days,
        }
    }
}

/// An employee tracked by the leave management system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier, assigned sequentially at registration.
    pub id: u64,
    /// Full name.
    pub name: String,
    /// Email address, unique case-insensitively across all employees.
    pub email: String,
    /// Department name.
    pub department: String,
    /// The date the employee joined; no leave may start before it.
    pub joining_date: NaiveDate,
    /// Remaining leave balances per type.
    pub leave_balance: LeaveBalance,
}

impl Employee {
    /// Returns true if the given email matches this employee's,
    /// ignoring ASCII case.
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }
}

/// The balance view returned for a single employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSummary {
    /// The employee's identifier.
    pub id: u64,
    /// The employee's name.
    pub name: String,
    /// The employee's email address.
    pub email: String,
    /// The employee's remaining leave balances.
    pub balance: LeaveBalance,
}
