//! Conflict detection over a proposed pilot/drone pair.

use std::fmt;

use serde::Serialize;

use crate::domain::{Drone, Mission, Pilot, contains_ignore_case};

/// Sentinel line reported when no conflict fired.
pub const NO_CONFLICTS: &str = "no conflicts detected";

/// A single warning raised against a proposed assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Conflict {
    /// No pilot satisfied the mission filters.
    NoPilotAvailable,
    /// No drone satisfied the mission filters.
    NoDroneAvailable,
    /// The pilot is already committed to another mission.
    PilotDoubleBooked,
    /// The pilot's skills do not contain the mission's required skills.
    SkillMismatch,
    /// The drone's status marks it as under maintenance.
    DroneUnderMaintenance,
    /// Rain is forecast and the drone carries no IP rating.
    WeatherRisk,
}

impl Conflict {
    /// The human-readable warning for this conflict.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoPilotAvailable => "no pilot available",
            Self::NoDroneAvailable => "no drone available",
            Self::PilotDoubleBooked => "pilot already assigned (double-booking risk)",
            Self::SkillMismatch => "skill mismatch between pilot and mission",
            Self::DroneUnderMaintenance => "drone under maintenance",
            Self::WeatherRisk => "weather risk: non-waterproof drone",
        }
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Inspects a proposed pilot/drone pair against a mission.
///
/// Checks run in a fixed order and are independent and non-exclusive; the
/// order matters only for display. Detection is stateless and
/// side-effect-free.
///
/// The skill check repeats the filter of
/// [`match_pilot`](super::matcher::match_pilot) in the opposite direction:
/// it can never fire for a pilot that matcher selected, but callers may
/// probe an externally chosen pilot (for instance when no skilled pilot
/// was found and the operator forces a specific one), and that path is
/// checked here.
#[must_use]
pub fn detect_conflicts(
    pilot: Option<&Pilot>,
    drone: Option<&Drone>,
    mission: &Mission,
) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    if pilot.is_none() {
        conflicts.push(Conflict::NoPilotAvailable);
    }
    if drone.is_none() {
        conflicts.push(Conflict::NoDroneAvailable);
    }

    if let Some(pilot) = pilot {
        if pilot.is_assigned() {
            conflicts.push(Conflict::PilotDoubleBooked);
        }
        if !contains_ignore_case(&pilot.skills, &mission.required_skills) {
            conflicts.push(Conflict::SkillMismatch);
        }
    }

    if let Some(drone) = drone {
        if drone.under_maintenance() {
            conflicts.push(Conflict::DroneUnderMaintenance);
        }
        if mission.requires_weatherproof() && !drone.is_weatherproof() {
            conflicts.push(Conflict::WeatherRisk);
        }
    }

    conflicts
}

/// Renders conflicts as display lines.
///
/// An empty conflict list becomes the single-element
/// [`NO_CONFLICTS`] sentinel, so the report is never empty.
#[must_use]
pub fn conflict_report(conflicts: &[Conflict]) -> Vec<String> {
    if conflicts.is_empty() {
        vec![NO_CONFLICTS.to_string()]
    } else {
        conflicts.iter().map(ToString::to_string).collect()
    }
}
