//! Handlers for `/employees` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/employees` | Creation order |
//! | `POST`   | `/employees` | Body: [`EmployeeDraft`]; 201, 400 on invalid input, 409 on duplicate id |
//! | `GET`    | `/employees/:employee_id` | 404 if not found |
//! | `DELETE` | `/employees/:employee_id` | Cascades to attendance; 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use hrms_core::{
  employee::{Employee, EmployeeDraft},
  store::RecordStore,
};
use serde_json::{Value, json};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /employees`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Employee>>, ApiError>
where
  S: RecordStore,
{
  let employees = store.list_employees().await.map_err(ApiError::from_store)?;
  Ok(Json(employees))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /employees` — returns 201 + the stored [`Employee`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<EmployeeDraft>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore,
{
  let Json(draft) = body?;
  let input = draft.validate()?;

  let employee = store.create_employee(input).await.map_err(ApiError::from_store)?;
  tracing::info!(employee_id = %employee.employee_id, "employee created");
  Ok((StatusCode::CREATED, Json(employee)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /employees/:employee_id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(employee_id): Path<String>,
) -> Result<Json<Employee>, ApiError>
where
  S: RecordStore,
{
  let employee = store
    .get_employee(&employee_id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| hrms_core::Error::employee_not_found(&employee_id))?;
  Ok(Json(employee))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /employees/:employee_id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(employee_id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
  S: RecordStore,
{
  store.delete_employee(&employee_id).await.map_err(ApiError::from_store)?;
  tracing::info!(%employee_id, "employee deleted with attendance");
  Ok(Json(json!({ "message": format!("Employee '{employee_id}' deleted successfully") })))
}
