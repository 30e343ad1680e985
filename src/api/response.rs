//! Response types for the leave management API.
//!
//! This module defines the error response structures and the mapping
//! from engine errors to HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidInput { .. } => Self::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_INPUT", message),
            ),
            EngineError::DuplicateEmployee { email } => Self::new(
                StatusCode::CONFLICT,
                ApiError::with_details(
                    "DUPLICATE_EMPLOYEE",
                    message,
                    format!("An employee is already registered under '{email}'"),
                ),
            ),
            EngineError::EmployeeNotFound { .. } => Self::new(
                StatusCode::NOT_FOUND,
                ApiError::new("EMPLOYEE_NOT_FOUND", message),
            ),
            EngineError::LeaveNotFound { .. } => Self::new(
                StatusCode::NOT_FOUND,
                ApiError::new("LEAVE_NOT_FOUND", message),
            ),
            EngineError::InvalidDate { .. } => Self::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_DATE",
                    message,
                    "Dates must be calendar dates in YYYY-MM-DD format",
                ),
            ),
            EngineError::InvalidRange { .. } => Self::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_RANGE", message),
            ),
            EngineError::BeforeJoining { .. } => Self::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("BEFORE_JOINING", message),
            ),
            EngineError::InvalidDuration { .. } => Self::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_DURATION", message),
            ),
            EngineError::InsufficientBalance { .. } => Self::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("INSUFFICIENT_BALANCE", message),
            ),
            EngineError::OverlapConflict { .. } => Self::new(
                StatusCode::CONFLICT,
                ApiError::with_details(
                    "OVERLAP_CONFLICT",
                    message,
                    "The requested range shares at least one day with an approved leave",
                ),
            ),
            EngineError::AlreadyProcessed { .. } => Self::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("ALREADY_PROCESSED", message),
            ),
            EngineError::ConfigParse { .. } => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            EngineError::StoreLoad { .. } | EngineError::StoreSave { .. } => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("STORE_ERROR", "Store error", message),
            ),
        }
    }
}
