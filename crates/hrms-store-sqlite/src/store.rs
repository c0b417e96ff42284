//! [`SqliteStore`] — the SQLite implementation of [`RecordStore`].

use std::path::Path;

use rusqlite::{OptionalExtension as _, TransactionBehavior};
use uuid::Uuid;

use hrms_core::{
  attendance::{AttendanceQuery, AttendanceRecord, MarkAttendance},
  employee::{Employee, NewEmployee},
  store::RecordStore,
};

use crate::{
  encode::{
    ATTENDANCE_COLUMNS, EMPLOYEE_COLUMNS, RawAttendance, employee_from_row, encode_date,
    encode_status, encode_uuid,
  },
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An HRMS record store backed by a single SQLite file.
///
/// All calls are funnelled through one connection thread, and the
/// `UNIQUE (employee_id, date)` constraint backs the upsert, so concurrent
/// marks for the same pair can never produce a duplicate.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = Error;

  // ── Employees ─────────────────────────────────────────────────────────────

  async fn create_employee(&self, input: NewEmployee) -> Result<Employee> {
    let employee = Employee::from(input);
    let row = employee.clone();

    let inserted = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "INSERT INTO employees (employee_id, full_name, email, department)
           VALUES (?1, ?2, ?3, ?4)
           ON CONFLICT (employee_id) DO NOTHING",
          rusqlite::params![row.employee_id, row.full_name, row.email, row.department],
        )?;
        Ok(n)
      })
      .await?;

    if inserted == 0 {
      return Err(hrms_core::Error::employee_exists(&employee.employee_id).into());
    }
    Ok(employee)
  }

  async fn get_employee<'a>(&'a self, employee_id: &'a str) -> Result<Option<Employee>> {
    let id = employee_id.to_owned();

    let employee = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE employee_id = ?1"),
            rusqlite::params![id],
            employee_from_row,
          )
          .optional()?)
      })
      .await?;

    Ok(employee)
  }

  async fn list_employees(&self) -> Result<Vec<Employee>> {
    let employees = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY rowid"))?;
        let rows = stmt
          .query_map([], employee_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(employees)
  }

  async fn delete_employee<'a>(&'a self, employee_id: &'a str) -> Result<()> {
    let id = employee_id.to_owned();

    // Records go first, in the same transaction, independent of the FK cascade.
    let deleted = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM attendance WHERE employee_id = ?1", rusqlite::params![id])?;
        let n = tx.execute("DELETE FROM employees WHERE employee_id = ?1", rusqlite::params![id])?;
        tx.commit()?;
        Ok(n)
      })
      .await?;

    if deleted == 0 {
      return Err(hrms_core::Error::employee_not_found(employee_id).into());
    }
    Ok(())
  }

  // ── Attendance ────────────────────────────────────────────────────────────

  async fn mark_attendance(&self, input: MarkAttendance) -> Result<AttendanceRecord> {
    let new_id = encode_uuid(Uuid::new_v4());
    let employee_id = input.employee_id.clone();
    let date = encode_date(input.date);
    let status = encode_status(input.status);

    let raw: Option<RawAttendance> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let exists = tx
          .query_row(
            "SELECT 1 FROM employees WHERE employee_id = ?1",
            rusqlite::params![employee_id],
            |_| Ok(()),
          )
          .optional()?
          .is_some();
        if !exists {
          return Ok(None);
        }

        let raw = tx.query_row(
          &format!(
            "INSERT INTO attendance (id, employee_id, date, status)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (employee_id, date) DO UPDATE SET status = excluded.status
             RETURNING {ATTENDANCE_COLUMNS}"
          ),
          rusqlite::params![new_id, employee_id, date, status],
          RawAttendance::from_row,
        )?;
        tx.commit()?;
        Ok(Some(raw))
      })
      .await?;

    match raw {
      Some(raw) => raw.into_record(),
      None => Err(hrms_core::Error::employee_not_found(&input.employee_id).into()),
    }
  }

  async fn list_attendance<'a>(
    &'a self,
    query: &'a AttendanceQuery,
  ) -> Result<Vec<AttendanceRecord>> {
    let employee_id = query.employee_id.clone();
    let date = query.date.map(encode_date);

    let raws: Vec<RawAttendance> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {ATTENDANCE_COLUMNS} FROM attendance
           WHERE (?1 IS NULL OR employee_id = ?1)
             AND (?2 IS NULL OR date = ?2)
           ORDER BY date DESC, employee_id"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![employee_id, date], RawAttendance::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawAttendance::into_record).collect()
  }
}
