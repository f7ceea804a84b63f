use serde::Serialize;

use crate::{domain::contains_ignore_case, store::Row};

/// A drone fleet entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Drone {
    /// Unique identifier within the fleet.
    pub drone_id: String,
    /// Availability status ("Available", "Maintenance", "Unavailable", ...).
    pub status: String,
    /// Capability tags. An "IP" substring marks an ingress-protection
    /// rating, used as the weatherproofing signal.
    pub capabilities: String,
    /// Free-text home location.
    pub location: String,
}

impl Drone {
    /// Builds a drone from a store row, with absent columns reading as
    /// empty strings.
    #[must_use]
    pub fn from_row(row: &Row) -> Self {
        Self {
            drone_id: row.get("drone_id").to_string(),
            status: row.get("status").to_string(),
            capabilities: row.get("capabilities").to_string(),
            location: row.get("location").to_string(),
        }
    }

    /// Whether the drone can be assigned.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status.eq_ignore_ascii_case("available")
    }

    /// Whether the drone is grounded for maintenance.
    #[must_use]
    pub fn under_maintenance(&self) -> bool {
        self.status.eq_ignore_ascii_case("maintenance")
    }

    /// Whether the drone carries an ingress-protection rating.
    #[must_use]
    pub fn is_weatherproof(&self) -> bool {
        contains_ignore_case(&self.capabilities, "ip")
    }
}
