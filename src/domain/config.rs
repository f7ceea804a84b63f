use std::path::Path;

use serde::{Deserialize, Serialize};

/// Data-layout configuration for a dispatch directory.
///
/// Names the CSV file backing each of the three tables. Stored as
/// `config.toml` in the data directory; a missing file means the default
/// layout applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// File holding the pilot roster.
    pilots_file: String,
    /// File holding the drone fleet.
    drones_file: String,
    /// File holding the mission list.
    missions_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pilots_file: default_pilots_file(),
            drones_file: default_drones_file(),
            missions_file: default_missions_file(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content
    /// is invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML
    /// or if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// The file backing the pilot roster.
    #[must_use]
    pub fn pilots_file(&self) -> &str {
        &self.pilots_file
    }

    /// The file backing the drone fleet.
    #[must_use]
    pub fn drones_file(&self) -> &str {
        &self.drones_file
    }

    /// The file backing the mission list.
    #[must_use]
    pub fn missions_file(&self) -> &str {
        &self.missions_file
    }
}

fn default_pilots_file() -> String {
    "pilot_roster.csv".to_string()
}

fn default_drones_file() -> String {
    "drone_fleet.csv".to_string()
}

fn default_missions_file() -> String {
    "missions.csv".to_string()
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the
/// domain type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_pilots_file")]
        pilots_file: String,

        #[serde(default = "default_drones_file")]
        drones_file: String,

        #[serde(default = "default_missions_file")]
        missions_file: String,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                pilots_file,
                drones_file,
                missions_file,
            } => Self {
                pilots_file,
                drones_file,
                missions_file,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            pilots_file: config.pilots_file,
            drones_file: config.drones_file,
            missions_file: config.missions_file,
        }
    }
}
