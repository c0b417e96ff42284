//! The `RecordStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `hrms-store-sqlite`).
//! Higher layers (`hrms-api`) depend on this abstraction, not on any
//! concrete backend. The store exclusively owns persisted employees and
//! attendance; the [`aggregate`](crate::aggregate) functions only read what
//! it returns.

use std::future::Future;

use crate::{
  attendance::{AttendanceQuery, AttendanceRecord, MarkAttendance},
  employee::{Employee, NewEmployee},
};

/// Abstraction over durable employee and attendance storage.
///
/// Every write must be visible to every subsequent read on the same store.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait RecordStore: Send + Sync {
  /// Backend error. Domain failures (`NotFound`, `Conflict`) must convert
  /// back into the matching [`crate::Error`] variant.
  type Error: std::error::Error + Send + Sync + Into<crate::Error> + 'static;

  // ── Employees ─────────────────────────────────────────────────────────

  /// Persist a new employee. Fails with `Conflict` if the id is taken.
  fn create_employee(
    &self,
    input: NewEmployee,
  ) -> impl Future<Output = Result<Employee, Self::Error>> + Send + '_;

  /// Retrieve an employee by id. Returns `None` if not found.
  fn get_employee<'a>(
    &'a self,
    employee_id: &'a str,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + 'a;

  /// List all employees in creation order.
  fn list_employees(
    &self,
  ) -> impl Future<Output = Result<Vec<Employee>, Self::Error>> + Send + '_;

  /// Remove an employee together with all of their attendance records.
  ///
  /// Fails with `NotFound` if the id does not exist. No orphaned record may
  /// be observable once this resolves.
  fn delete_employee<'a>(
    &'a self,
    employee_id: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  // ── Attendance ────────────────────────────────────────────────────────

  /// Atomically insert or overwrite the record for `(employee_id, date)` and
  /// return it. An existing record keeps its id.
  ///
  /// Fails with `NotFound` if the employee does not exist. Concurrent marks
  /// for the same pair serialise; last write wins.
  fn mark_attendance(
    &self,
    input: MarkAttendance,
  ) -> impl Future<Output = Result<AttendanceRecord, Self::Error>> + Send + '_;

  /// Records matching `query`, in no particular order.
  fn list_attendance<'a>(
    &'a self,
    query: &'a AttendanceQuery,
  ) -> impl Future<Output = Result<Vec<AttendanceRecord>, Self::Error>> + Send + 'a;
}
