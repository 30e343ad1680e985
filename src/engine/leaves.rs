//! Leave request creation and the approve/reject state machine.
//!
//! Validation order inside [`create`] is part of the contract: callers
//! observe a deterministic error precedence, so an unrecognized leave
//! type is always reported before any date problem, a date problem
//! before a range problem, and so on. Reordering the checks changes
//! externally visible behavior.

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveRequest, LeaveStatus, LeaveType, Snapshot};

use super::dates::{inclusive_day_count, parse_date, ranges_overlap};
use super::registry::required_field;

/// The raw inputs for creating a leave request.
///
/// As with employee registration, user-entered fields arrive as
/// optional strings so validation failures surface as typed engine
/// errors in a fixed order.
#[derive(Debug, Clone, Default)]
pub struct NewLeave {
    /// Identifier of the employee requesting leave.
    pub employee_id: Option<u64>,
    /// Requested leave type (`casual`, `sick`, or `earned`).
    pub leave_type: Option<String>,
    /// First day of leave as a `YYYY-MM-DD` string.
    pub start_date: Option<String>,
    /// Last day of leave as a `YYYY-MM-DD` string.
    pub end_date: Option<String>,
    /// Optional free-text reason.
    pub reason: Option<String>,
}

/// Generates a short display reference for a new leave request.
///
/// The reference is the first eight hex characters of a v4 uuid,
/// uppercased. It is shown to humans only and never used as a key.
pub fn new_reference() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    hex[..8].to_uppercase()
}

/// True if any approved leave of this employee, other than `exclude`,
/// overlaps the given range.
fn has_approved_overlap(
    snapshot: &Snapshot,
    employee_id: u64,
    start: chrono::NaiveDate,
    end: chrono::NaiveDate,
    exclude: Option<u64>,
) -> bool {
    snapshot.leaves.iter().any(|l| {
        l.employee_id == employee_id
            && l.status == LeaveStatus::Approved
            && exclude != Some(l.id)
            && ranges_overlap(start, end, l.start_date, l.end_date)
    })
}

/// Validates and creates a leave request in `pending` status.
///
/// Checks run in this order: employee exists, required fields present,
/// leave type recognized, dates parse, range ordered, range not before
/// the joining date, duration positive, balance sufficient, no overlap
/// with an approved leave. The snapshot is only mutated once every
/// check has passed.
pub fn create(snapshot: &mut Snapshot, input: NewLeave) -> EngineResult<LeaveRequest> {
    let employee_id = input.employee_id.ok_or_else(|| EngineError::InvalidInput {
        message: "employee_id is required".to_string(),
    })?;
    let (joining_date, balance) = {
        let employee = snapshot
            .employee(employee_id)
            .ok_or(EngineError::EmployeeNotFound { id: employee_id })?;
        (employee.joining_date, employee.leave_balance)
    };

    let type_raw = required_field(input.leave_type, "leave_type")?;
    let start_raw = required_field(input.start_date, "start_date")?;
    let end_raw = required_field(input.end_date, "end_date")?;
    let leave_type = LeaveType::parse(&type_raw).ok_or_else(|| EngineError::InvalidInput {
        message: format!("unrecognized leave type '{type_raw}'"),
    })?;

    let start_date = parse_date(&start_raw, "start_date")?;
    let end_date = parse_date(&end_raw, "end_date")?;
    if end_date < start_date {
        return Err(EngineError::InvalidRange {
            start: start_date,
            end: end_date,
        });
    }
    if start_date < joining_date {
        return Err(EngineError::BeforeJoining {
            start: start_date,
            joining: joining_date,
        });
    }

    // Unreachable once the range check has passed; kept as a guard on
    // the invariant that a stored leave always spans at least one day.
    let days = inclusive_day_count(start_date, end_date);
    if days <= 0 {
        return Err(EngineError::InvalidDuration { days });
    }

    let available = balance.available(leave_type);
    if days > available {
        return Err(EngineError::InsufficientBalance {
            leave_type,
            requested: days,
            available,
        });
    }
    if has_approved_overlap(snapshot, employee_id, start_date, end_date, None) {
        return Err(EngineError::OverlapConflict {
            start: start_date,
            end: end_date,
        });
    }

    let leave = LeaveRequest {
        id: snapshot.allocate_leave_id(),
        reference: new_reference(),
        employee_id,
        leave_type,
        start_date,
        end_date,
        days,
        status: LeaveStatus::Pending,
        reason: input.reason.unwrap_or_default(),
    };
    snapshot.leaves.push(leave.clone());
    Ok(leave)
}

/// Lists leave requests in creation order, optionally filtered to one
/// employee.
pub fn list(snapshot: &Snapshot, employee_id: Option<u64>) -> Vec<LeaveRequest> {
    snapshot
        .leaves
        .iter()
        .filter(|l| employee_id.is_none_or(|id| l.employee_id == id))
        .cloned()
        .collect()
}

/// Approves a pending leave request and deducts its days from the
/// employee's balance.
///
/// The balance is re-checked here because other approvals may have
/// drained it since the request was created, and the overlap check is
/// repeated so two overlapping requests that were both pending cannot
/// both reach `approved`.
pub fn approve(snapshot: &mut Snapshot, id: u64) -> EngineResult<LeaveRequest> {
    let (employee_id, leave_type, days, start_date, end_date) = {
        let leave = snapshot.leave(id).ok_or(EngineError::LeaveNotFound { id })?;
        if !leave.is_pending() {
            return Err(EngineError::AlreadyProcessed {
                id,
                status: leave.status,
            });
        }
        (
            leave.employee_id,
            leave.leave_type,
            leave.days,
            leave.start_date,
            leave.end_date,
        )
    };

    // Data-integrity guard: a stored leave should always reference a
    // stored employee.
    let available = snapshot
        .employee(employee_id)
        .ok_or(EngineError::EmployeeNotFound { id: employee_id })?
        .leave_balance
        .available(leave_type);
    if days > available {
        return Err(EngineError::InsufficientBalance {
            leave_type,
            requested: days,
            available,
        });
    }
    if has_approved_overlap(snapshot, employee_id, start_date, end_date, Some(id)) {
        return Err(EngineError::OverlapConflict {
            start: start_date,
            end: end_date,
        });
    }

    let employee = snapshot
        .employee_mut(employee_id)
        .ok_or(EngineError::EmployeeNotFound { id: employee_id })?;
    employee.leave_balance.deduct(leave_type, days);

    let leave = snapshot
        .leave_mut(id)
        .ok_or(EngineError::LeaveNotFound { id })?;
    leave.status = LeaveStatus::Approved;
    Ok(leave.clone())
}

/// Rejects a pending leave request. Balances are not touched.
pub fn reject(snapshot: &mut Snapshot, id: u64) -> EngineResult<LeaveRequest> {
    let leave = snapshot
        .leave_mut(id)
        .ok_or(EngineError::LeaveNotFound { id })?;
    if !leave.is_pending() {
        return Err(EngineError::AlreadyProcessed {
            id,
            status: leave.status,
        });
    }
    leave.status = LeaveStatus::Rejected;
    Ok(leave.clone())
}
