//! The `dsp assign` command: the interactive coordinator flow.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dispatch::{
    CsvStore, Snapshot, conflict_report, detect_conflicts, match_drone, match_pilot,
    match_pilot_by_location, update_pilot_status,
};
use serde_json::json;
use tracing::instrument;

use super::terminal::Colorize;

/// Command arguments for `dsp assign`.
#[derive(Debug, Parser)]
#[command(about = "Match a pilot and drone to a mission and flag conflicts")]
pub struct Assign {
    /// Project id of the mission to staff.
    project_id: String,

    /// Break ties between equally suitable pilots by ascending location.
    #[arg(long)]
    by_location: bool,

    /// Mark the matched pilot unavailable in the roster after matching.
    #[arg(long)]
    commit: bool,

    /// Output format (table, json).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

/// Supported output formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Assign {
    #[instrument(skip(self), fields(project_id = %self.project_id))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut store = CsvStore::open(root);
        let snapshot = Snapshot::load(&store)?;

        let Some(mission) = snapshot.mission(&self.project_id) else {
            let known = snapshot
                .missions
                .iter()
                .map(|mission| mission.project_id.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            if known.is_empty() {
                anyhow::bail!("mission '{}' not found (the mission table is empty)", self.project_id);
            }
            anyhow::bail!(
                "mission '{}' not found (known missions: {known})",
                self.project_id
            );
        };

        let pilot = if self.by_location {
            match_pilot_by_location(mission, &snapshot.pilots)
        } else {
            match_pilot(mission, &snapshot.pilots)
        };
        let drone = match_drone(mission, &snapshot.drones);
        let conflicts = detect_conflicts(pilot, drone, mission);
        let report = conflict_report(&conflicts);

        match self.output {
            OutputFormat::Json => {
                let output = json!({
                    "mission": mission,
                    "pilot": pilot,
                    "drone": drone,
                    "conflicts": conflicts,
                    "report": report,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Table => {
                println!("Assignment for mission {}", mission.project_id);
                println!("{}", "─".repeat(40).dim());

                match pilot {
                    Some(pilot) => {
                        println!("{}", format!("Pilot: {}", pilot.name).success());
                        println!("  Location: {}", pilot.location);
                        println!("  Skills:   {}", pilot.skills);
                    }
                    None => println!("{}", "No suitable pilot found".failure()),
                }

                match drone {
                    Some(drone) => {
                        println!("{}", format!("Drone: {}", drone.drone_id).success());
                        println!("  Capabilities: {}", drone.capabilities);
                    }
                    None => println!("{}", "No suitable drone available".failure()),
                }

                println!();
                println!("Conflict analysis:");
                if conflicts.is_empty() {
                    println!("  {}", report[0].success());
                } else {
                    for line in &report {
                        println!("  {}", line.warning());
                    }
                }
            }
        }

        if self.commit {
            match pilot {
                Some(pilot) => {
                    // The roster may have changed since the snapshot was
                    // read; last write wins, nothing serializes the two.
                    if update_pilot_status(&mut store, &pilot.name, "Unavailable")? {
                        println!(
                            "{}",
                            format!("Marked pilot {} as Unavailable", pilot.name).success()
                        );
                    } else {
                        println!(
                            "{}",
                            format!("Pilot {} vanished from the roster; nothing written", pilot.name)
                                .warning()
                        );
                    }
                }
                None => println!("{}", "No pilot matched; nothing to commit".dim()),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use super::{Assign, OutputFormat};

    fn seed(root: &Path) {
        fs::write(
            root.join("pilot_roster.csv"),
            "name,status,skills,location,current_assignment\n\
             Asha,Available,\"drone,rope rescue\",Leh,\n\
             Bir,On Leave,survey,Goa,\n",
        )
        .unwrap();
        fs::write(
            root.join("drone_fleet.csv"),
            "drone_id,status,capabilities,location\nD1,Available,\"Camera, IP67\",Leh\n",
        )
        .unwrap();
        fs::write(
            root.join("missions.csv"),
            "project_id,required_skills,weather\nM-1,rope,Sunny\n",
        )
        .unwrap();
    }

    fn assign(project_id: &str, commit: bool) -> Assign {
        Assign {
            project_id: project_id.to_string(),
            by_location: false,
            commit,
            output: OutputFormat::Table,
        }
    }

    #[test]
    fn assign_run_succeeds_for_a_known_mission() {
        let tmp = tempfile::tempdir().unwrap();
        seed(tmp.path());

        assign("M-1", false)
            .run(tmp.path().to_path_buf())
            .expect("assign should succeed");
    }

    #[test]
    fn assign_run_fails_for_an_unknown_mission() {
        let tmp = tempfile::tempdir().unwrap();
        seed(tmp.path());

        let error = assign("M-404", false)
            .run(tmp.path().to_path_buf())
            .unwrap_err();
        assert!(error.to_string().contains("M-404"));
    }

    #[test]
    fn assign_run_propagates_store_failures() {
        let tmp = tempfile::tempdir().unwrap();
        // No tables at all: the snapshot read must fail loudly.
        let error = assign("M-1", false)
            .run(tmp.path().to_path_buf())
            .unwrap_err();
        assert!(error.to_string().contains("pilots"));
    }

    #[test]
    fn commit_writes_the_pilot_status_back() {
        let tmp = tempfile::tempdir().unwrap();
        seed(tmp.path());

        assign("M-1", true)
            .run(tmp.path().to_path_buf())
            .expect("assign --commit should succeed");

        let roster = fs::read_to_string(tmp.path().join("pilot_roster.csv")).unwrap();
        assert!(roster.contains("Asha,Unavailable"));
        // The other pilot is untouched.
        assert!(roster.contains("Bir,On Leave"));
    }

    #[test]
    fn json_output_renders() {
        let tmp = tempfile::tempdir().unwrap();
        seed(tmp.path());

        let command = Assign {
            project_id: "M-1".to_string(),
            by_location: true,
            commit: false,
            output: OutputFormat::Json,
        };
        command
            .run(tmp.path().to_path_buf())
            .expect("json output should succeed");
    }
}
