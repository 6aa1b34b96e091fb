//! API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::api::AppState;
use crate::types::{Employee, EmployeeDraft};
use crate::Error;

/// Uniform response envelope: `{success, data?, error?}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// Handler-level failure carrying the status and the client-facing message.
///
/// The underlying error is logged server-side only; clients get a generic
/// message for internal failures and a descriptive one for lookup misses.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn not_found(id: &str) -> Self {
        tracing::warn!(%id, "employee lookup missed");
        Self {
            status: StatusCode::NOT_FOUND,
            message: "Employee not found".to_string(),
        }
    }

    fn internal(message: &str, source: Error) -> Self {
        tracing::error!(error = %source, "{}", message);
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(self.message),
        };
        (self.status, Json(body)).into_response()
    }
}

/// Health check with system status
pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, ApiError> {
    let employees = state
        .store
        .read_all()
        .await
        .map_err(|e| ApiError::internal("Health check failed", e))?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        employees: employees.len(),
    }))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub employees: usize,
}

/// List all employees
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Employee>>>, ApiError> {
    let employees = state
        .store
        .read_all()
        .await
        .map_err(|e| ApiError::internal("Failed to fetch employees", e))?;

    Ok(Json(ApiResponse::ok(employees)))
}

/// Create a new employee
pub async fn create_employee(
    State(state): State<AppState>,
    Json(draft): Json<EmployeeDraft>,
) -> Result<Response, ApiError> {
    let mut employees = state
        .store
        .read_all()
        .await
        .map_err(|e| ApiError::internal("Failed to create employee", e))?;

    let employee = draft.into_employee(state.store.generate_id());
    employees.push(employee.clone());

    state
        .store
        .write_all(&employees)
        .await
        .map_err(|e| ApiError::internal("Failed to create employee", e))?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(employee))).into_response())
}

/// Update an existing employee
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<EmployeeDraft>,
) -> Result<Json<ApiResponse<Employee>>, ApiError> {
    let mut employees = state
        .store
        .read_all()
        .await
        .map_err(|e| ApiError::internal("Failed to update employee", e))?;

    let employee = employees
        .iter_mut()
        .find(|emp| emp.id == id)
        .ok_or_else(|| ApiError::not_found(&id))?;

    // Id is preserved; the body never overwrites it
    draft.apply_to(employee);
    let updated = employee.clone();

    state
        .store
        .write_all(&employees)
        .await
        .map_err(|e| ApiError::internal("Failed to update employee", e))?;

    Ok(Json(ApiResponse::ok(updated)))
}

/// Delete an employee
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeletedEmployee>>, ApiError> {
    let mut employees = state
        .store
        .read_all()
        .await
        .map_err(|e| ApiError::internal("Failed to delete employee", e))?;

    let index = employees
        .iter()
        .position(|emp| emp.id == id)
        .ok_or_else(|| ApiError::not_found(&id))?;

    employees.remove(index);

    state
        .store
        .write_all(&employees)
        .await
        .map_err(|e| ApiError::internal("Failed to delete employee", e))?;

    Ok(Json(ApiResponse::ok(DeletedEmployee { id })))
}

#[derive(Debug, Serialize)]
pub struct DeletedEmployee {
    pub id: String,
}
