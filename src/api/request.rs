//! Request types for the leave management API.
//!
//! User-entered fields are deserialized as optional strings and handed
//! to the engine unparsed, so missing and malformed values are reported
//! through the engine's typed error taxonomy in its documented
//! precedence rather than as serde rejections. Identifiers are typed:
//! a non-numeric id in a body, path, or query string is rejected at the
//! boundary.

use serde::{Deserialize, Serialize};

use crate::engine::{NewEmployee, NewLeave};

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// Full name.
    pub name: Option<String>,
    /// Email address, unique case-insensitively.
    pub email: Option<String>,
    /// Department name.
    pub department: Option<String>,
    /// Joining date as `YYYY-MM-DD`.
    pub joining_date: Option<String>,
}

/// Request body for `POST /leaves`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLeaveRequest {
    /// Identifier of the employee requesting leave.
    pub employee_id: Option<u64>,
    /// Leave type: `casual`, `sick`, or `earned`.
    pub leave_type: Option<String>,
    /// First day of leave as `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// Last day of leave as `YYYY-MM-DD`.
    pub end_date: Option<String>,
    /// Optional free-text reason.
    pub reason: Option<String>,
}

/// Query parameters for `GET /leaves`.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveListParams {
    /// Restrict the listing to one employee.
    pub employee_id: Option<u64>,
}

impl From<CreateEmployeeRequest> for NewEmployee {
    fn from(req: CreateEmployeeRequest) -> Self {
        NewEmployee {
            name: req.name,
            email: req.email,
            department: req.department,
            joining_date: req.joining_date,
        }
    }
}

impl From<CreateLeaveRequest> for NewLeave {
    fn from(req: CreateLeaveRequest) -> Self {
        NewLeave {
            employee_id: req.employee_id,
            leave_type: req.leave_type,
            start_date: req.start_date,
            end_date: req.end_date,
            reason: req.reason,
        }
    }
}
