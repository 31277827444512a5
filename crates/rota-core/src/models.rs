//! Roster domain types.
//!
//! Field names follow the backend's camelCase wire format so records
//! deserialize straight out of the REST payloads.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Backend-assigned key of an employee record.
pub type EmployeeId = String;

/// Employee records keyed by their backend id.
///
/// Ordered map so listings render deterministically.
pub type EmployeeMap = BTreeMap<EmployeeId, Employee>;

/// A single employee record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Display name.
    #[serde(rename = "employeeName")]
    pub employee_name: String,
    /// Contact phone number (free-form string).
    pub phone: String,
    /// Weekday the employee works.
    pub shift: Shift,
    /// Id of the account that owns this record.
    #[serde(default)]
    pub uid: String,
}

/// Weekday shift assignment, serialized as the full day name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shift {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Shift {
    /// Returns all shifts in week order (e.g., for pickers).
    pub fn all() -> &'static [Shift] {
        &[
            Shift::Monday,
            Shift::Tuesday,
            Shift::Wednesday,
            Shift::Thursday,
            Shift::Friday,
            Shift::Saturday,
            Shift::Sunday,
        ]
    }

    /// Returns the display name for this shift.
    pub fn display_name(&self) -> &'static str {
        match self {
            Shift::Monday => "Monday",
            Shift::Tuesday => "Tuesday",
            Shift::Wednesday => "Wednesday",
            Shift::Thursday => "Thursday",
            Shift::Friday => "Friday",
            Shift::Saturday => "Saturday",
            Shift::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Shift {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Monday" => Ok(Shift::Monday),
            "Tuesday" => Ok(Shift::Tuesday),
            "Wednesday" => Ok(Shift::Wednesday),
            "Thursday" => Ok(Shift::Thursday),
            "Friday" => Ok(Shift::Friday),
            "Saturday" => Ok(Shift::Saturday),
            "Sunday" => Ok(Shift::Sunday),
            _ => Err(format!("Unknown shift: {value}")),
        }
    }
}
