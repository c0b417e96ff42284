//! Handlers for `/attendance` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/attendance` | Body: [`AttendanceDraft`]; upsert, returns 201 + record |
//! | `GET`  | `/attendance` | Optional `?date=YYYY-MM-DD`; newest first |
//! | `GET`  | `/attendance/employee/:employee_id` | Optional `?date=`; 404 for unknown employee |
//! | `GET`  | `/attendance/present-count/:employee_id` | `{"employee_id", "present_days"}` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use hrms_core::{
  aggregate,
  attendance::{AttendanceDraft, AttendanceQuery, AttendanceRecord},
  employee::Employee,
  input::parse_date_filter,
  store::RecordStore,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct DateParams {
  /// ISO 8601 calendar date; narrows results to that single day.
  pub date: Option<String>,
}

/// The employee as a one-element (or empty) snapshot for the aggregation
/// functions, which own the not-found decision.
async fn employee_snapshot<S: RecordStore>(
  store: &S,
  employee_id: &str,
) -> Result<Vec<Employee>, ApiError> {
  let employee = store.get_employee(employee_id).await.map_err(ApiError::from_store)?;
  Ok(employee.into_iter().collect())
}

// ─── Mark ─────────────────────────────────────────────────────────────────────

/// `POST /attendance` — inserts or overwrites the record for
/// `(employee_id, date)` and returns 201 + the resulting record.
pub async fn mark<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<AttendanceDraft>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore,
{
  let Json(draft) = body?;
  let input = draft.validate()?;

  let record = store.mark_attendance(input).await.map_err(ApiError::from_store)?;
  tracing::info!(
    employee_id = %record.employee_id,
    date = %record.date,
    status = %record.status,
    "attendance marked"
  );
  Ok((StatusCode::CREATED, Json(record)))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /attendance[?date=<date>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<DateParams>,
) -> Result<Json<Vec<AttendanceRecord>>, ApiError>
where
  S: RecordStore,
{
  let date = parse_date_filter(params.date.as_deref())?;
  let query = AttendanceQuery::default().with_date(date);

  let records = store.list_attendance(&query).await.map_err(ApiError::from_store)?;
  Ok(Json(aggregate::attendance_log(date, &records)))
}

// ─── Per employee ─────────────────────────────────────────────────────────────

/// `GET /attendance/employee/:employee_id[?date=<date>]`
pub async fn for_employee<S>(
  State(store): State<Arc<S>>,
  Path(employee_id): Path<String>,
  Query(params): Query<DateParams>,
) -> Result<Json<Vec<AttendanceRecord>>, ApiError>
where
  S: RecordStore,
{
  let date = parse_date_filter(params.date.as_deref())?;
  let employees = employee_snapshot(store.as_ref(), &employee_id).await?;
  let query = AttendanceQuery::for_employee(employee_id.as_str()).with_date(date);
  let records = store.list_attendance(&query).await.map_err(ApiError::from_store)?;

  tracing::debug!(%employee_id, ?date, records = records.len(), "attendance history");
  let history = aggregate::employee_attendance(&employee_id, date, &employees, &records)?;
  Ok(Json(history))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PresentCount {
  pub employee_id:  String,
  pub present_days: u64,
}

/// `GET /attendance/present-count/:employee_id`
pub async fn present_count<S>(
  State(store): State<Arc<S>>,
  Path(employee_id): Path<String>,
) -> Result<Json<PresentCount>, ApiError>
where
  S: RecordStore,
{
  let employees = employee_snapshot(store.as_ref(), &employee_id).await?;
  let query = AttendanceQuery::for_employee(employee_id.as_str());
  let records = store.list_attendance(&query).await.map_err(ApiError::from_store)?;

  let present_days = aggregate::present_count(&employee_id, &employees, &records)?;
  Ok(Json(PresentCount { employee_id, present_days }))
}
