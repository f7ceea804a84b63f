use crate::{
    domain::{Drone, Mission, Pilot},
    store::{RecordStore, StoreError, Table},
};

/// An immutable copy of the three tables, read in one refresh.
///
/// Matching runs entirely against a snapshot, so a single operation sees
/// consistent data. Nothing serializes the snapshot against the live
/// store: a concurrent operator writing between read and use leaves the
/// snapshot stale, and the store's last-write-wins behaviour applies.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Pilot roster, in table order.
    pub pilots: Vec<Pilot>,
    /// Drone fleet, in table order.
    pub drones: Vec<Drone>,
    /// Mission list, in table order.
    pub missions: Vec<Mission>,
}

impl Snapshot {
    /// Reads all three tables from `store`.
    ///
    /// # Errors
    ///
    /// Fails if any table cannot be read; a partial snapshot is never
    /// returned.
    pub fn load<S: RecordStore>(store: &S) -> Result<Self, StoreError> {
        let pilots = store
            .read(Table::Pilots)?
            .iter()
            .map(Pilot::from_row)
            .collect();
        let drones = store
            .read(Table::Drones)?
            .iter()
            .map(Drone::from_row)
            .collect();
        let missions = store
            .read(Table::Missions)?
            .iter()
            .map(Mission::from_row)
            .collect();

        Ok(Self {
            pilots,
            drones,
            missions,
        })
    }

    /// Finds a mission by its project id (exact match).
    #[must_use]
    pub fn mission(&self, project_id: &str) -> Option<&Mission> {
        self.missions
            .iter()
            .find(|mission| mission.project_id == project_id)
    }
}
