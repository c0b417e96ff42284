//! Input normalisation shared by every write and query path.
//!
//! Request bodies arrive as loosely-typed strings; these helpers turn them
//! into domain values or an [`Error::InvalidInput`] naming the offending
//! field.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::{Error, Result};

/// Wire format for calendar dates (ISO 8601, no time component).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles")
});

/// `YYYY-MM-DD` exactly: chrono alone also takes `2024-1-5` and `+2024-01-10`.
fn is_iso_date_shape(s: &str) -> bool {
  s.len() == 10
    && s.bytes().enumerate().all(|(i, b)| match i {
      4 | 7 => b == b'-',
      _ => b.is_ascii_digit(),
    })
}

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
pub fn parse_date(s: &str) -> Result<NaiveDate> {
  let invalid =
    || Error::InvalidInput(format!("date must be an ISO 8601 date (YYYY-MM-DD), got {s:?}"));
  if !is_iso_date_shape(s) {
    return Err(invalid());
  }
  NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| invalid())
}

/// Parse an optional date filter, treating an empty string as "no filter".
pub fn parse_date_filter(s: Option<&str>) -> Result<Option<NaiveDate>> {
  match s {
    None | Some("") => Ok(None),
    Some(s) => parse_date(s).map(Some),
  }
}

/// Trim a required text field; missing or blank values are rejected.
pub fn required(field: &str, value: Option<String>) -> Result<String> {
  let value = value.unwrap_or_default();
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(Error::InvalidInput(format!("{field} cannot be empty")));
  }
  Ok(trimmed.to_owned())
}

/// Check `email` against a standard address pattern.
pub fn validate_email(email: &str) -> Result<()> {
  if EMAIL_RE.is_match(email) {
    Ok(())
  } else {
    Err(Error::InvalidInput(format!("{email:?} is not a valid email address")))
  }
}
