//! Application state for the leave management API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::engine::LeaveService;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// currently just the store-backed leave service.
#[derive(Clone)]
pub struct AppState {
    /// The leave service behind all endpoints.
    service: Arc<LeaveService>,
}

impl AppState {
    /// Creates a new application state wrapping the given service.
    pub fn new(service: LeaveService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Returns a reference to the leave service.
    pub fn service(&self) -> &LeaveService {
        &self.service
    }
}
