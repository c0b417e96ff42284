//! Derived, read-only views over a snapshot of employees and attendance.
//!
//! Every function here is pure: it takes whatever slice a store returned and
//! never touches store state. Ordering is always explicit, never storage
//! insertion order.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  attendance::{AttendanceQuery, AttendanceRecord, AttendanceStatus},
  employee::Employee,
};

// ─── Dashboard ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
  pub total_employees: u64,
  pub present_today:   u64,
  pub absent_today:    u64,
}

/// Headcount plus present/absent counts for `today`.
///
/// An employee with no record for `today` counts towards neither total;
/// there is no implicit "absent by default".
pub fn dashboard_stats(
  today: NaiveDate,
  employees: &[Employee],
  records: &[AttendanceRecord],
) -> DashboardStats {
  let mut stats = DashboardStats { total_employees: employees.len() as u64, ..Default::default() };

  for record in records.iter().filter(|r| r.date == today) {
    match record.status {
      AttendanceStatus::Present => stats.present_today += 1,
      AttendanceStatus::Absent => stats.absent_today += 1,
    }
  }

  stats
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentCount {
  pub department: String,
  pub employees:  u64,
}

/// Number of employees per department, ordered by department name.
pub fn department_counts(employees: &[Employee]) -> Vec<DepartmentCount> {
  let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
  for e in employees {
    *counts.entry(e.department.as_str()).or_default() += 1;
  }
  counts
    .into_iter()
    .map(|(department, employees)| DepartmentCount { department: department.to_owned(), employees })
    .collect()
}

// ─── Per-employee views ──────────────────────────────────────────────────────

fn ensure_employee<'a>(employee_id: &str, employees: &'a [Employee]) -> Result<&'a Employee> {
  employees
    .iter()
    .find(|e| e.employee_id == employee_id)
    .ok_or_else(|| Error::employee_not_found(employee_id))
}

/// Sort most recent first; ties (only possible across employees) fall back
/// to `employee_id` so the order is total.
fn sort_newest_first(records: &mut [AttendanceRecord]) {
  records.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.employee_id.cmp(&b.employee_id)));
}

/// Attendance history for one employee, newest first, optionally narrowed to
/// a single date.
///
/// Fails with [`Error::NotFound`] if `employee_id` is not among `employees`,
/// even when `records` is empty.
pub fn employee_attendance(
  employee_id: &str,
  date: Option<NaiveDate>,
  employees: &[Employee],
  records: &[AttendanceRecord],
) -> Result<Vec<AttendanceRecord>> {
  ensure_employee(employee_id, employees)?;

  let query = AttendanceQuery::for_employee(employee_id).with_date(date);
  let mut history: Vec<AttendanceRecord> =
    records.iter().filter(|r| query.matches(r)).cloned().collect();
  sort_newest_first(&mut history);

  Ok(history)
}

/// Total days `employee_id` was marked present, over all time.
///
/// Defined in terms of [`employee_attendance`] so the two can never
/// disagree.
pub fn present_count(
  employee_id: &str,
  employees: &[Employee],
  records: &[AttendanceRecord],
) -> Result<u64> {
  let history = employee_attendance(employee_id, None, employees, records)?;
  Ok(history.iter().filter(|r| r.is_present()).count() as u64)
}

/// Every record across all employees, newest first, optionally narrowed to a
/// single date.
pub fn attendance_log(date: Option<NaiveDate>, records: &[AttendanceRecord]) -> Vec<AttendanceRecord> {
  let query = AttendanceQuery::default().with_date(date);
  let mut log: Vec<AttendanceRecord> = records.iter().filter(|r| query.matches(r)).cloned().collect();
  sort_newest_first(&mut log);
  log
}

#[cfg(test)]
mod tests {
  use uuid::Uuid;

  use super::*;

  fn day(d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(2024, 1, d).unwrap() }

  fn employee(id: &str, department: &str) -> Employee {
    Employee {
      employee_id: id.into(),
      full_name:   format!("Name of {id}"),
      email:       format!("{}@co.com", id.to_lowercase()),
      department:  department.into(),
    }
  }

  fn record(employee_id: &str, date: NaiveDate, status: AttendanceStatus) -> AttendanceRecord {
    AttendanceRecord { id: Uuid::new_v4(), employee_id: employee_id.into(), date, status }
  }

  use AttendanceStatus::{Absent, Present};

  #[test]
  fn dashboard_counts_only_today() {
    let employees = vec![employee("EMP001", "Engineering"), employee("EMP002", "Sales")];
    let records = vec![
      record("EMP001", day(10), Present),
      record("EMP002", day(10), Absent),
      record("EMP001", day(9), Present),
    ];

    let stats = dashboard_stats(day(10), &employees, &records);
    assert_eq!(stats, DashboardStats { total_employees: 2, present_today: 1, absent_today: 1 });
  }

  #[test]
  fn dashboard_unmarked_employee_counts_nowhere() {
    let employees = vec![employee("EMP001", "Engineering"), employee("EMP002", "Sales")];
    let records = vec![record("EMP001", day(10), Present)];

    let stats = dashboard_stats(day(10), &employees, &records);
    assert_eq!(stats.present_today, 1);
    assert_eq!(stats.absent_today, 0);
  }

  #[test]
  fn dashboard_empty_is_all_zeros() {
    assert_eq!(dashboard_stats(day(10), &[], &[]), DashboardStats::default());
  }

  #[test]
  fn dashboard_today_counts_never_exceed_records() {
    let employees = vec![employee("A", "X"), employee("B", "X"), employee("C", "Y")];
    let mut records = Vec::new();
    for d in 1..=5 {
      for (i, id) in ["A", "B", "C"].iter().enumerate() {
        if (d + i as u32) % 3 != 0 {
          let status = if (d + i as u32) % 2 == 0 { Present } else { Absent };
          records.push(record(id, day(d), status));
        }
      }
    }

    for d in 1..=6 {
      let s = dashboard_stats(day(d), &employees, &records);
      assert!(s.present_today + s.absent_today <= records.len() as u64);
      assert!(s.present_today + s.absent_today <= s.total_employees);
    }
  }

  #[test]
  fn history_is_newest_first() {
    let employees = vec![employee("EMP001", "Engineering")];
    let records = vec![
      record("EMP001", day(10), Present),
      record("EMP001", day(12), Absent),
      record("EMP001", day(11), Absent),
    ];

    let history = employee_attendance("EMP001", None, &employees, &records).unwrap();
    let dates: Vec<_> = history.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![day(12), day(11), day(10)]);
  }

  #[test]
  fn history_date_filter() {
    let employees = vec![employee("EMP001", "Engineering"), employee("EMP002", "Sales")];
    let records = vec![
      record("EMP001", day(10), Present),
      record("EMP001", day(11), Absent),
      record("EMP002", day(10), Absent),
    ];

    let history = employee_attendance("EMP001", Some(day(10)), &employees, &records).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status, Present);

    let none = employee_attendance("EMP001", Some(day(20)), &employees, &records).unwrap();
    assert!(none.is_empty());
  }

  #[test]
  fn unknown_employee_is_not_found_not_empty() {
    let employees = vec![employee("EMP001", "Engineering")];
    let err = employee_attendance("EMP999", None, &employees, &[]).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    let err = present_count("EMP999", &employees, &[]).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
  }

  #[test]
  fn known_employee_without_records_is_empty() {
    let employees = vec![employee("EMP001", "Engineering")];
    assert!(employee_attendance("EMP001", None, &employees, &[]).unwrap().is_empty());
    assert_eq!(present_count("EMP001", &employees, &[]).unwrap(), 0);
  }

  #[test]
  fn employee_ids_are_case_sensitive() {
    let employees = vec![employee("EMP001", "Engineering")];
    assert!(present_count("emp001", &employees, &[]).is_err());
  }

  #[test]
  fn present_count_agrees_with_history() {
    let employees = vec![employee("A", "X"), employee("B", "Y")];
    let records = vec![
      record("A", day(1), Present),
      record("A", day(2), Absent),
      record("A", day(3), Present),
      record("B", day(1), Absent),
      record("B", day(2), Present),
    ];

    for e in &employees {
      let history = employee_attendance(&e.employee_id, None, &employees, &records).unwrap();
      let expected = history.iter().filter(|r| r.status == Present).count() as u64;
      assert_eq!(present_count(&e.employee_id, &employees, &records).unwrap(), expected);
    }
    assert_eq!(present_count("A", &employees, &records).unwrap(), 2);
  }

  #[test]
  fn log_orders_by_date_then_employee() {
    let records = vec![
      record("B", day(10), Present),
      record("A", day(9), Absent),
      record("A", day(10), Absent),
    ];

    let log = attendance_log(None, &records);
    let keys: Vec<_> = log.iter().map(|r| (r.date, r.employee_id.as_str())).collect();
    assert_eq!(keys, vec![(day(10), "A"), (day(10), "B"), (day(9), "A")]);

    assert_eq!(attendance_log(Some(day(9)), &records).len(), 1);
  }

  #[test]
  fn departments_are_counted_exactly() {
    let employees = vec![
      employee("A", "Engineering"),
      employee("B", "Sales"),
      employee("C", "Engineering"),
      employee("D", "engineering"),
    ];

    let counts = department_counts(&employees);
    assert_eq!(
      counts,
      vec![
        DepartmentCount { department: "Engineering".into(), employees: 2 },
        DepartmentCount { department: "Sales".into(), employees: 1 },
        DepartmentCount { department: "engineering".into(), employees: 1 },
      ]
    );
  }
}
