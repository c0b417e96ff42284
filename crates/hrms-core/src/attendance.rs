//! Attendance records — one status per employee per calendar date.
//!
//! At most one record exists for any `(employee_id, date)` pair. Marking the
//! same pair again overwrites the status of the existing record.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Error, Result,
  input::{parse_date, required},
};

// ─── Status ──────────────────────────────────────────────────────────────────

/// The two mutually exclusive statuses tracked per employee per date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
  Present,
  Absent,
}

impl AttendanceStatus {
  pub fn as_str(self) -> &'static str {
    match self {
      AttendanceStatus::Present => "Present",
      AttendanceStatus::Absent => "Absent",
    }
  }
}

impl fmt::Display for AttendanceStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for AttendanceStatus {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "Present" => Ok(AttendanceStatus::Present),
      "Absent" => Ok(AttendanceStatus::Absent),
      other => Err(Error::InvalidInput(format!(
        "status must be 'Present' or 'Absent', got {other:?}"
      ))),
    }
  }
}

// ─── Record ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
  /// Assigned by the store; stable across status updates.
  pub id:          Uuid,
  pub employee_id: String,
  pub date:        NaiveDate,
  pub status:      AttendanceStatus,
}

impl AttendanceRecord {
  pub fn is_present(&self) -> bool { self.status == AttendanceStatus::Present }
}

// ─── Writes ──────────────────────────────────────────────────────────────────

/// A "mark attendance" request as it arrives over the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttendanceDraft {
  pub employee_id: Option<String>,
  pub date:        Option<String>,
  pub status:      Option<String>,
}

/// A validated upsert of the status for `(employee_id, date)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkAttendance {
  pub employee_id: String,
  pub date:        NaiveDate,
  pub status:      AttendanceStatus,
}

impl MarkAttendance {
  pub fn new(employee_id: impl Into<String>, date: NaiveDate, status: AttendanceStatus) -> Self {
    Self { employee_id: employee_id.into(), date, status }
  }
}

impl AttendanceDraft {
  pub fn validate(self) -> Result<MarkAttendance> {
    let employee_id = required("employee_id", self.employee_id)?;
    let date = parse_date(&required("date", self.date)?)?;
    let status = required("status", self.status)?.parse()?;
    Ok(MarkAttendance { employee_id, date, status })
  }
}

// ─── Reads ───────────────────────────────────────────────────────────────────

/// Range query over stored records. `None` fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceQuery {
  pub employee_id: Option<String>,
  pub date:        Option<NaiveDate>,
}

impl AttendanceQuery {
  pub fn for_employee(employee_id: impl Into<String>) -> Self {
    Self { employee_id: Some(employee_id.into()), date: None }
  }

  pub fn on_date(date: NaiveDate) -> Self { Self { employee_id: None, date: Some(date) } }

  pub fn with_date(mut self, date: Option<NaiveDate>) -> Self {
    self.date = date;
    self
  }

  /// Whether `record` satisfies every constraint of this query.
  pub fn matches(&self, record: &AttendanceRecord) -> bool {
    self.employee_id.as_deref().is_none_or(|id| record.employee_id == id)
      && self.date.is_none_or(|d| record.date == d)
  }
}
