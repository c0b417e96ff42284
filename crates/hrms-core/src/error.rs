//! Error types for `hrms-core`.

use thiserror::Error;

/// Failures surfaced by the aggregation core and by record stores.
///
/// Callers must be able to tell "employee has zero records" apart from
/// "employee does not exist", so lookups never collapse [`Error::NotFound`]
/// into an empty result.
#[derive(Debug, Error)]
pub enum Error {
  /// A required field is missing or malformed.
  #[error("invalid input: {0}")]
  InvalidInput(String),

  /// A referenced employee does not exist.
  #[error("{0}")]
  NotFound(String),

  /// An employee with the same id already exists.
  #[error("{0}")]
  Conflict(String),

  /// The backing store failed for a reason unrelated to the request.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn employee_not_found(employee_id: &str) -> Self {
    Error::NotFound(format!("Employee with ID '{employee_id}' not found"))
  }

  pub fn employee_exists(employee_id: &str) -> Self {
    Error::Conflict(format!("Employee with ID '{employee_id}' already exists"))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
