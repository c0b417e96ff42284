//! Employee — the entity attendance is recorded against.
//!
//! `employee_id` is supplied by the client, immutable, and compared exactly
//! (case-sensitive). Deleting an employee cascades to their attendance.

use serde::{Deserialize, Serialize};

use crate::{
  Result,
  input::{required, validate_email},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
  pub employee_id: String,
  pub full_name:   String,
  pub email:       String,
  pub department:  String,
}

/// A creation request as it arrives over the wire. Every field is optional
/// here so that a missing field is reported as invalid input rather than a
/// deserialisation failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeDraft {
  pub employee_id: Option<String>,
  pub full_name:   Option<String>,
  pub email:       Option<String>,
  pub department:  Option<String>,
}

/// A validated, trimmed employee ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
  pub employee_id: String,
  pub full_name:   String,
  pub email:       String,
  pub department:  String,
}

impl EmployeeDraft {
  /// Trim every field, reject blanks, and check the email pattern.
  pub fn validate(self) -> Result<NewEmployee> {
    let employee_id = required("employee_id", self.employee_id)?;
    let full_name = required("full_name", self.full_name)?;
    let email = required("email", self.email)?;
    let department = required("department", self.department)?;
    validate_email(&email)?;

    Ok(NewEmployee { employee_id, full_name, email, department })
  }
}

impl From<NewEmployee> for Employee {
  fn from(n: NewEmployee) -> Self {
    Employee {
      employee_id: n.employee_id,
      full_name:   n.full_name,
      email:       n.email,
      department:  n.department,
    }
  }
}
