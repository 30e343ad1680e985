//! HTTP API module for the leave management engine.
//!
//! This module provides the REST endpoints for registering employees
//! and creating, listing, approving, and rejecting leave requests.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CreateEmployeeRequest, CreateLeaveRequest};
pub use response::ApiError;
pub use state::AppState;
