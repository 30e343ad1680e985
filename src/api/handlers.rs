//! HTTP request handlers for the leave management API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use uuid::Uuid;

use super::request::{CreateEmployeeRequest, CreateLeaveRequest, LeaveListParams};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route(
            "/employees",
            post(create_employee_handler).get(list_employees_handler),
        )
        .route("/employees/:id/balance", get(employee_balance_handler))
        .route(
            "/leaves",
            post(create_leave_handler).get(list_leaves_handler),
        )
        .route("/leaves/:id/approve", post(approve_leave_handler))
        .route("/leaves/:id/reject", post(reject_leave_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Translates a body-deserialization rejection into an API error.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for GET /, reporting the service name and version.
async fn index_handler() -> Response {
    Json(serde_json::json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
    .into_response()
}

/// Handler for POST /employees.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(rejection_error(correlation_id, rejection)),
            )
                .into_response();
        }
    };

    match state.service().register_employee(request.into()).await {
        Ok(employee) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = employee.id,
                "Employee registered"
            );
            (StatusCode::OK, Json(employee)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Employee registration failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    match state.service().list_employees().await {
        Ok(employees) => (StatusCode::OK, Json(employees)).into_response(),
        Err(err) => {
            warn!(error = %err, "Listing employees failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /employees/:id/balance.
async fn employee_balance_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Response {
    match state.service().employee_balance(id).await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(err) => {
            warn!(employee_id = id, error = %err, "Balance lookup failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /leaves.
async fn create_leave_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLeaveRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(rejection_error(correlation_id, rejection)),
            )
                .into_response();
        }
    };

    match state.service().create_leave(request.into()).await {
        Ok(leave) => {
            info!(
                correlation_id = %correlation_id,
                leave_id = leave.id,
                employee_id = leave.employee_id,
                days = leave.days,
                "Leave request created"
            );
            (StatusCode::OK, Json(leave)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Leave request rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /leaves.
async fn list_leaves_handler(
    State(state): State<AppState>,
    Query(params): Query<LeaveListParams>,
) -> Response {
    match state.service().list_leaves(params.employee_id).await {
        Ok(leaves) => (StatusCode::OK, Json(leaves)).into_response(),
        Err(err) => {
            warn!(error = %err, "Listing leaves failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /leaves/:id/approve.
async fn approve_leave_handler(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match state.service().approve_leave(id).await {
        Ok(leave) => {
            info!(leave_id = id, employee_id = leave.employee_id, "Leave approved");
            (StatusCode::OK, Json(leave)).into_response()
        }
        Err(err) => {
            warn!(leave_id = id, error = %err, "Leave approval failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /leaves/:id/reject.
async fn reject_leave_handler(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match state.service().reject_leave(id).await {
        Ok(leave) => {
            info!(leave_id = id, employee_id = leave.employee_id, "Leave rejected");
            (StatusCode::OK, Json(leave)).into_response()
        }
        Err(err) => {
            warn!(leave_id = id, error = %err, "Leave rejection failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::LeaveService;
    use crate::store::MemoryStore;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn create_test_router() -> Router {
        create_router(AppState::new(LeaveService::new(MemoryStore::new())))
    }

    async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(value) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(value.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    fn employee_body() -> Value {
        json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "department": "Engineering",
            "joining_date": "2024-01-01"
        })
    }

    #[tokio::test]
    async fn test_index_reports_service_and_version() {
        let router = create_test_router();
        let (status, body) = send(&router, "GET", "/", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "leave-engine");
        assert!(body["version"].is_string());
    }

    #[tokio::test]
    async fn test_create_employee_returns_record() {
        let router = create_test_router();
        let (status, body) = send(&router, "POST", "/employees", Some(employee_body())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 1);
        assert_eq!(body["leave_balance"]["casual"], 12);
        assert_eq!(body["leave_balance"]["sick"], 8);
        assert_eq!(body["leave_balance"]["earned"], 0);
    }

    #[tokio::test]
    async fn test_create_employee_missing_field_returns_400() {
        let router = create_test_router();
        let (status, body) = send(
            &router,
            "POST",
            "/employees",
            Some(json!({"name": "Jane Doe"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_test_router();
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/employees")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_balance_of_unknown_employee_returns_404() {
        let router = create_test_router();
        let (status, body) = send(&router, "GET", "/employees/42/balance", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_create_and_list_leaves_with_filter() {
        let router = create_test_router();
        send(&router, "POST", "/employees", Some(employee_body())).await;

        let (status, leave) = send(
            &router,
            "POST",
            "/leaves",
            Some(json!({
                "employee_id": 1,
                "leave_type": "casual",
                "start_date": "2024-02-01",
                "end_date": "2024-02-03"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(leave["days"], 3);
        assert_eq!(leave["status"], "pending");

        let (status, listed) = send(&router, "GET", "/leaves?employee_id=1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let (status, listed) = send(&router, "GET", "/leaves?employee_id=2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(listed.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_approve_unknown_leave_returns_404() {
        let router = create_test_router();
        let (status, body) = send(&router, "POST", "/leaves/9/approve", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "LEAVE_NOT_FOUND");
    }
}
