use serde::Serialize;

use crate::store::Row;

/// A pilot roster entry.
///
/// Every field is free text as entered in the roster. Rows are converted
/// through [`Pilot::from_row`], which substitutes the empty string for any
/// column the source row does not carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pilot {
    /// Unique name within the roster.
    pub name: String,
    /// Availability status ("Available", "On Leave", "Unavailable", ...).
    pub status: String,
    /// Capability tags, comma or space separated.
    pub skills: String,
    /// Free-text home location.
    pub location: String,
    /// Identifier of the mission currently occupying the pilot, or empty.
    pub current_assignment: String,
}

impl Pilot {
    /// Builds a pilot from a store row.
    #[must_use]
    pub fn from_row(row: &Row) -> Self {
        Self {
            name: row.get("name").to_string(),
            status: row.get("status").to_string(),
            skills: row.get("skills").to_string(),
            location: row.get("location").to_string(),
            current_assignment: row.get("current_assignment").to_string(),
        }
    }

    /// Whether the pilot can take a new assignment.
    ///
    /// Status values are compared case-insensitively against the literal
    /// `"available"`.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status.eq_ignore_ascii_case("available")
    }

    /// Whether the pilot is already committed to a mission.
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        !self.current_assignment.is_empty()
    }
}
