//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Dates are stored as `YYYY-MM-DD` strings, which sort chronologically.
//! Statuses are stored as their wire values. UUIDs are stored as hyphenated
//! lowercase strings.

use chrono::NaiveDate;
use hrms_core::{
  attendance::{AttendanceRecord, AttendanceStatus},
  employee::Employee,
  input::DATE_FORMAT,
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── NaiveDate ────────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── AttendanceStatus ─────────────────────────────────────────────────────────

pub fn encode_status(s: AttendanceStatus) -> &'static str { s.as_str() }

pub fn decode_status(s: &str) -> Result<AttendanceStatus> {
  s.parse().map_err(|_| Error::Decode(format!("unknown attendance status: {s:?}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

pub const EMPLOYEE_COLUMNS: &str = "employee_id, full_name, email, department";

pub fn employee_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Employee> {
  Ok(Employee {
    employee_id: row.get(0)?,
    full_name:   row.get(1)?,
    email:       row.get(2)?,
    department:  row.get(3)?,
  })
}

pub const ATTENDANCE_COLUMNS: &str = "id, employee_id, date, status";

/// Raw strings read directly from an `attendance` row.
pub struct RawAttendance {
  pub id:          String,
  pub employee_id: String,
  pub date:        String,
  pub status:      String,
}

impl RawAttendance {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawAttendance {
      id:          row.get(0)?,
      employee_id: row.get(1)?,
      date:        row.get(2)?,
      status:      row.get(3)?,
    })
  }

  pub fn into_record(self) -> Result<AttendanceRecord> {
    Ok(AttendanceRecord {
      id:          decode_uuid(&self.id)?,
      employee_id: self.employee_id,
      date:        decode_date(&self.date)?,
      status:      decode_status(&self.status)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dates_sort_chronologically_as_text() {
    let a = encode_date(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    let b = encode_date(NaiveDate::from_ymd_opt(2024, 1, 9).unwrap());
    let c = encode_date(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
    assert_eq!(b, "2024-01-09");
    assert!(a < b && b < c);
  }

  #[test]
  fn bad_stored_values_are_decode_errors() {
    assert!(matches!(decode_status("present"), Err(Error::Decode(_))));
    assert!(matches!(decode_date("2024/01/10"), Err(Error::DateParse(_))));
    assert!(decode_uuid("not-a-uuid").is_err());
  }
}
