//! Core data models for the leave management engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod leave;
mod snapshot;

pub use employee::{
    BalanceSummary, Employee, LeaveBalance, DEFAULT_CASUAL_DAYS, DEFAULT_EARNED_DAYS,
    DEFAULT_SICK_DAYS,
};
pub use leave::{LeaveRequest, LeaveStatus, LeaveType};
pub use snapshot::Snapshot;
