//! First-match candidate selection.
//!
//! The matchers pick the first record that survives the mission's static
//! filters. There is no optimization or backtracking, and no consistency
//! guarantee across missions: each call looks at one mission in isolation.

use crate::domain::{Drone, Mission, Pilot, contains_ignore_case};

/// Selects a pilot for `mission` from the roster.
///
/// Keeps pilots whose status is case-insensitively `"available"` and whose
/// skills contain the mission's required skills as a case-insensitive
/// substring, then returns the first survivor in table order. An empty
/// requirement keeps every available pilot.
#[must_use]
pub fn match_pilot<'a>(mission: &Mission, pilots: &'a [Pilot]) -> Option<&'a Pilot> {
    pilots
        .iter()
        .filter(|pilot| pilot.is_available())
        .find(|pilot| contains_ignore_case(&pilot.skills, &mission.required_skills))
}

/// Selects a pilot for `mission`, breaking ties by ascending location.
///
/// Same filters as [`match_pilot`], but the surviving candidates are
/// sorted by their location string before the first is taken. The sort is
/// lexicographic and stable (equal locations keep roster order); it exists
/// only to make the pick deterministic, not as a proximity heuristic — the
/// model carries no coordinates.
#[must_use]
pub fn match_pilot_by_location<'a>(mission: &Mission, pilots: &'a [Pilot]) -> Option<&'a Pilot> {
    let mut candidates: Vec<&Pilot> = pilots
        .iter()
        .filter(|pilot| pilot.is_available())
        .filter(|pilot| contains_ignore_case(&pilot.skills, &mission.required_skills))
        .collect();
    candidates.sort_by(|a, b| a.location.cmp(&b.location));
    candidates.first().copied()
}

/// Selects a drone for `mission` from the fleet.
///
/// Keeps drones whose status is case-insensitively `"available"`. If the
/// forecast contains `"rain"`, only drones with an IP rating in their
/// capabilities survive; otherwise every available drone does. Returns the
/// first survivor in table order.
#[must_use]
pub fn match_drone<'a>(mission: &Mission, drones: &'a [Drone]) -> Option<&'a Drone> {
    let mut available = drones.iter().filter(|drone| drone.is_available());

    if mission.requires_weatherproof() {
        available.find(|drone| drone.is_weatherproof())
    } else {
        available.next()
    }
}

#[cfg(test)]
mod tests {
    use super::{match_drone, match_pilot, match_pilot_by_location};
    use crate::domain::{Drone, Mission, Pilot};

    fn pilot(name: &str, status: &str, skills: &str) -> Pilot {
        Pilot {
            name: name.to_string(),
            status: status.to_string(),
            skills: skills.to_string(),
            ..Pilot::default()
        }
    }

    fn drone(id: &str, status: &str, capabilities: &str) -> Drone {
        Drone {
            drone_id: id.to_string(),
            status: status.to_string(),
            capabilities: capabilities.to_string(),
            ..Drone::default()
        }
    }

    #[test]
    fn skilled_available_pilot_is_matched() {
        // Scenario A from the acceptance notes.
        let pilots = vec![pilot("Asha", "Available", "rope rescue")];
        let mission = Mission {
            required_skills: "rope".to_string(),
            weather: "Sunny".to_string(),
            ..Mission::default()
        };

        let matched = match_pilot(&mission, &pilots).unwrap();
        assert_eq!(matched.name, "Asha");
    }

    #[test]
    fn empty_requirement_matches_first_available_in_table_order() {
        let pilots = vec![
            pilot("Asha", "On Leave", "survey"),
            pilot("Bir", "Available", "thermal"),
            pilot("Chand", "Available", "survey"),
        ];
        let mission = Mission::default();

        let matched = match_pilot(&mission, &pilots).unwrap();
        assert_eq!(matched.name, "Bir");
    }

    #[test]
    fn unavailable_pilots_are_never_matched() {
        let pilots = vec![
            pilot("Asha", "On Leave", "rope"),
            pilot("Bir", "Unavailable", "rope"),
        ];
        let mission = Mission {
            required_skills: "rope".to_string(),
            ..Mission::default()
        };

        assert!(match_pilot(&mission, &pilots).is_none());
    }

    #[test]
    fn skill_match_is_case_insensitive_substring() {
        let pilots = vec![pilot("Asha", "available", "drone,Rope Rescue")];
        let mission = Mission {
            required_skills: "ROPE".to_string(),
            ..Mission::default()
        };

        assert!(match_pilot(&mission, &pilots).is_some());
    }

    #[test]
    fn location_tie_break_sorts_lexicographically() {
        let mut near = pilot("Bir", "Available", "survey");
        near.location = "Agra".to_string();
        let mut far = pilot("Asha", "Available", "survey");
        far.location = "Leh".to_string();

        let pilots = vec![far, near];
        let mission = Mission {
            required_skills: "survey".to_string(),
            ..Mission::default()
        };

        // Table order picks Asha; the location variant picks Bir.
        assert_eq!(match_pilot(&mission, &pilots).unwrap().name, "Asha");
        assert_eq!(
            match_pilot_by_location(&mission, &pilots).unwrap().name,
            "Bir"
        );
    }

    #[test]
    fn location_tie_break_is_stable_for_equal_locations() {
        let pilots = vec![
            pilot("Asha", "Available", "survey"),
            pilot("Bir", "Available", "survey"),
        ];
        let mission = Mission {
            required_skills: "survey".to_string(),
            ..Mission::default()
        };

        assert_eq!(
            match_pilot_by_location(&mission, &pilots).unwrap().name,
            "Asha"
        );
    }

    #[test]
    fn rain_filters_out_non_ip_drones() {
        // Scenario B: the only available drone has no IP rating.
        let drones = vec![drone("D1", "Available", "Camera")];
        let mission = Mission {
            weather: "Rainy".to_string(),
            ..Mission::default()
        };

        assert!(match_drone(&mission, &drones).is_none());
    }

    #[test]
    fn rain_matches_ip_rated_drone() {
        let drones = vec![
            drone("D1", "Available", "Camera"),
            drone("D2", "Available", "Camera, IP67"),
        ];
        let mission = Mission {
            weather: "light rain".to_string(),
            ..Mission::default()
        };

        assert_eq!(match_drone(&mission, &drones).unwrap().drone_id, "D2");
    }

    #[test]
    fn clear_weather_keeps_all_available_drones() {
        let drones = vec![
            drone("D1", "Maintenance", "IP67"),
            drone("D2", "Available", "Camera"),
        ];
        let mission = Mission {
            weather: "Sunny".to_string(),
            ..Mission::default()
        };

        assert_eq!(match_drone(&mission, &drones).unwrap().drone_id, "D2");
    }

    #[test]
    fn empty_tables_match_nothing() {
        let mission = Mission::default();
        assert!(match_pilot(&mission, &[]).is_none());
        assert!(match_pilot_by_location(&mission, &[]).is_none());
        assert!(match_drone(&mission, &[]).is_none());
    }
}
