//! Leave request model and related types.
//!
//! This module defines the LeaveRequest struct together with the
//! LeaveType and LeaveStatus enums used throughout the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The category of a leave request.
///
/// Each type carries its own independent whole-day balance per employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    /// Casual leave, 12 days by default.
    Casual,
    /// Sick leave, 8 days by default.
    Sick,
    /// Earned leave, accrued externally, 0 days by default.
    Earned,
}

impl LeaveType {
    /// Parses a leave type from its lowercase wire name.
    ///
    /// Returns `None` for anything other than `casual`, `sick`, or
    /// `earned`; the caller decides how to report the rejection.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::models::LeaveType;
    ///
    /// assert_eq!(LeaveType::parse("sick"), Some(LeaveType::Sick));
    /// assert_eq!(LeaveType::parse("sabbatical"), None);
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "casual" => Some(LeaveType::Casual),
            "sick" => Some(LeaveType::Sick),
            "earned" => Some(LeaveType::Earned),
            _ => None,
        }
    }
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveType::Casual => write!(f, "casual"),
            LeaveType::Sick => write!(f, "sick"),
            LeaveType::Earned => write!(f, "earned"),
        }
    }
}

/// The processing status of a leave request.
///
/// A request starts `pending` and moves exactly once to either
/// `approved` or `rejected`; both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved; the employee's balance has been deducted.
    Approved,
    /// Rejected; no balance change.
    Rejected,
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveStatus::Pending => write!(f, "pending"),
            LeaveStatus::Approved => write!(f, "approved"),
            LeaveStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A request for a contiguous range of leave days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier, assigned sequentially at creation.
    pub id: u64,
    /// Short display reference code; never used as a lookup key.
    pub reference: String,
    /// Identifier of the employee the leave belongs to.
    pub employee_id: u64,
    /// The category of leave requested.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Inclusive day count, computed at creation and immutable after.
    pub days: i64,
    /// Current processing status.
    pub status: LeaveStatus,
    /// Optional free-text reason supplied by the requester.
    #[serde(default)]
    pub reason: String,
}

impl LeaveRequest {
    /// Returns true while the request still awaits a decision.
    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }
}
