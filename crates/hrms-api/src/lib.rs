//! JSON REST API for the HRMS attendance service.
//!
//! Exposes an axum [`Router`] backed by any [`hrms_core::store::RecordStore`].
//! Auth, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", hrms_api::api_router(store.clone()))
//! ```

pub mod attendance;
pub mod dashboard;
pub mod employees;
pub mod error;

use std::sync::Arc;

use axum::{Router, routing::get};
use hrms_core::store::RecordStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: RecordStore + 'static,
{
  Router::new()
    // Employees
    .route("/employees", get(employees::list::<S>).post(employees::create::<S>))
    .route(
      "/employees/{employee_id}",
      get(employees::get_one::<S>).delete(employees::delete_one::<S>),
    )
    // Attendance
    .route("/attendance", get(attendance::list::<S>).post(attendance::mark::<S>))
    .route("/attendance/employee/{employee_id}", get(attendance::for_employee::<S>))
    .route("/attendance/present-count/{employee_id}", get(attendance::present_count::<S>))
    // Dashboard
    .route("/dashboard", get(dashboard::stats::<S>))
    .route("/dashboard/departments", get(dashboard::departments::<S>))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
