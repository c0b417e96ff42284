//! Handlers for `/dashboard` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/dashboard` | Optional `?date=`; defaults to the server's local date |
//! | `GET`  | `/dashboard/departments` | Employees per department, by name |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use chrono::Local;
use hrms_core::{
  aggregate::{self, DashboardStats, DepartmentCount},
  attendance::AttendanceQuery,
  input::parse_date_filter,
  store::RecordStore,
};

use crate::{attendance::DateParams, error::ApiError};

/// `GET /dashboard[?date=<date>]`
pub async fn stats<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<DateParams>,
) -> Result<Json<DashboardStats>, ApiError>
where
  S: RecordStore,
{
  let today = parse_date_filter(params.date.as_deref())?.unwrap_or_else(|| Local::now().date_naive());

  let employees = store.list_employees().await.map_err(ApiError::from_store)?;
  let records = store
    .list_attendance(&AttendanceQuery::on_date(today))
    .await
    .map_err(ApiError::from_store)?;

  Ok(Json(aggregate::dashboard_stats(today, &employees, &records)))
}

/// `GET /dashboard/departments`
pub async fn departments<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<DepartmentCount>>, ApiError>
where
  S: RecordStore,
{
  let employees = store.list_employees().await.map_err(ApiError::from_store)?;
  Ok(Json(aggregate::department_counts(&employees)))
}
