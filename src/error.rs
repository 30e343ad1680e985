//! Error types for the leave management engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions that can occur while registering employees
//! and processing leave requests.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{LeaveStatus, LeaveType};

/// The main error type for the leave management engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. Every
/// failure is synchronous and final; nothing is retried.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound { id: 42 };
/// assert_eq!(error.to_string(), "Employee not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required request field was missing, blank, or unrecognized.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// A description of what was missing or malformed.
        message: String,
    },

    /// An employee with the same email address already exists.
    #[error("Employee already exists with email '{email}'")]
    DuplicateEmployee {
        /// The conflicting email address (emails match case-insensitively).
        email: String,
    },

    /// No employee exists with the given identifier.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        id: u64,
    },

    /// No leave request exists with the given identifier.
    #[error("Leave request not found: {id}")]
    LeaveNotFound {
        /// The identifier that was looked up.
        id: u64,
    },

    /// A date field could not be parsed as a calendar date.
    #[error("Invalid date in '{field}': {value}")]
    InvalidDate {
        /// The name of the field that failed to parse.
        field: String,
        /// The raw value that was rejected.
        value: String,
    },

    /// The end date of a range precedes its start date.
    #[error("End date {end} is before start date {start}")]
    InvalidRange {
        /// The start of the requested range.
        start: NaiveDate,
        /// The end of the requested range.
        end: NaiveDate,
    },

    /// A leave was requested to start before the employee joined.
    #[error("Leave starting {start} is before joining date {joining}")]
    BeforeJoining {
        /// The requested leave start date.
        start: NaiveDate,
        /// The employee's joining date.
        joining: NaiveDate,
    },

    /// A leave spans a non-positive number of days.
    #[error("Invalid leave duration: {days} days")]
    InvalidDuration {
        /// The computed day count.
        days: i64,
    },

    /// The employee does not have enough balance for the requested leave.
    #[error(
        "Insufficient {leave_type} balance: requested {requested} days, {available} available"
    )]
    InsufficientBalance {
        /// The leave type whose balance was checked.
        leave_type: LeaveType,
        /// The number of days requested.
        requested: i64,
        /// The number of days currently available.
        available: i64,
    },

    /// The requested range overlaps an already approved leave.
    #[error("Leave {start} to {end} overlaps an approved leave")]
    OverlapConflict {
        /// The start of the conflicting range.
        start: NaiveDate,
        /// The end of the conflicting range.
        end: NaiveDate,
    },

    /// The leave request has already reached a terminal status.
    #[error("Leave request {id} was already {status}")]
    AlreadyProcessed {
        /// The identifier of the leave request.
        id: u64,
        /// The terminal status it already holds.
        status: LeaveStatus,
    },

    /// The service configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The snapshot file could not be read or decoded.
    #[error("Failed to load store file '{path}': {message}")]
    StoreLoad {
        /// The path to the snapshot file.
        path: String,
        /// A description of the load error.
        message: String,
    },

    /// The snapshot file could not be written.
    #[error("Failed to write store file '{path}': {message}")]
    StoreSave {
        /// The path to the snapshot file.
        path: String,
        /// A description of the write error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
