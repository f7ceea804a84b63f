use serde::Serialize;

use crate::{domain::contains_ignore_case, store::Row};

/// A mission awaiting a pilot and drone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Mission {
    /// Unique project identifier.
    pub project_id: String,
    /// Skill tag expected to appear, case-insensitively, as a substring of
    /// the assigned pilot's skills field. Empty means any pilot qualifies.
    pub required_skills: String,
    /// Free-text weather forecast. A "rain" substring triggers the
    /// weatherproofing requirement.
    pub weather: String,
}

impl Mission {
    /// Builds a mission from a store row, with absent columns reading as
    /// empty strings.
    #[must_use]
    pub fn from_row(row: &Row) -> Self {
        Self {
            project_id: row.get("project_id").to_string(),
            required_skills: row.get("required_skills").to_string(),
            weather: row.get("weather").to_string(),
        }
    }

    /// Whether the forecast calls for a weatherproof drone.
    #[must_use]
    pub fn requires_weatherproof(&self) -> bool {
        contains_ignore_case(&self.weather, "rain")
    }
}
