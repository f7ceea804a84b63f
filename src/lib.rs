//! Mission dispatch for a small drone operation.
//!
//! Rosters of pilots, drones and missions live in a tabular record store.
//! The [`engine`] picks at most one suitable pilot and drone for a mission
//! using static rules and flags simple conflicts; the [`store`] reads the
//! tables and writes single-cell status updates back.

pub mod domain;
pub use domain::{Config, Drone, Mission, Pilot};

/// Pure matching and conflict-detection rules.
pub mod engine;
pub use engine::{
    Conflict, NO_CONFLICTS, conflict_report, detect_conflicts, match_drone, match_pilot,
    match_pilot_by_location,
};

/// Tabular record stores and snapshots.
pub mod store;
pub use store::{
    CsvStore, MemoryStore, RecordStore, Row, Snapshot, StoreError, Table, update_pilot_status,
};
