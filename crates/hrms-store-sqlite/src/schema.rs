//! SQL schema for the HRMS SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- rowid preserves creation order for listings.
CREATE TABLE IF NOT EXISTS employees (
    employee_id TEXT PRIMARY KEY,   -- client-supplied, compared exactly
    full_name   TEXT NOT NULL,
    email       TEXT NOT NULL,
    department  TEXT NOT NULL
);

-- One row per (employee, date); re-marking updates the status in place.
CREATE TABLE IF NOT EXISTS attendance (
    id          TEXT PRIMARY KEY,   -- store-assigned UUID
    employee_id TEXT NOT NULL
                REFERENCES employees(employee_id) ON DELETE CASCADE,
    date        TEXT NOT NULL,      -- YYYY-MM-DD
    status      TEXT NOT NULL CHECK (status IN ('Present', 'Absent')),
    UNIQUE (employee_id, date)
);

CREATE INDEX IF NOT EXISTS attendance_date_idx ON attendance(date);

PRAGMA user_version = 1;
";
