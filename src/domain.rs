//! Domain models for dispatch.
//!
//! This module contains the typed records for the three roster tables and
//! the data-layout configuration.

mod config;
pub use config::Config;

/// Drone fleet record.
pub mod drone;
pub use drone::Drone;

/// Mission record.
pub mod mission;
pub use mission::Mission;

/// Pilot roster record.
pub mod pilot;
pub use pilot::Pilot;

/// Case-insensitive substring containment.
///
/// An empty `needle` matches every haystack. The match-everything
/// behaviour of an empty skill requirement falls out of this and must be
/// preserved.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
