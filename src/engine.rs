//! Rule-based matching and conflict detection.
//!
//! Everything here is a pure function over in-memory records: no IO, no
//! retries, no suspension points. Candidate selection and conflict
//! detection are deliberately layered — the matchers filter, the detector
//! re-checks — so that a caller who bypasses the matchers still gets
//! warnings for the pair it supplies.

/// Conflict detection over a proposed assignment.
pub mod conflict;
pub use conflict::{Conflict, NO_CONFLICTS, conflict_report, detect_conflicts};

/// Candidate selection for a mission.
pub mod matcher;
pub use matcher::{match_drone, match_pilot, match_pilot_by_location};
