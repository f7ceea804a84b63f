//! The `dsp list` command: the roster dashboard.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dispatch::{CsvStore, Snapshot};
use tracing::instrument;

use super::terminal::{Colorize, is_narrow};

/// Command arguments for `dsp list`.
#[derive(Debug, Parser, Default)]
#[command(about = "Show the pilot, drone and mission tables")]
pub struct List {
    /// Table to list (default: all three).
    #[arg(value_enum)]
    table: Option<TableArg>,

    /// Output format (table, json).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,

    /// Suppress headers and format rows for scripting.
    #[arg(long)]
    quiet: bool,
}

/// Supported output formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Selectable tables.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum TableArg {
    Pilots,
    Drones,
    Missions,
}

impl List {
    #[instrument]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let store = CsvStore::open(root);
        let snapshot = Snapshot::load(&store)?;

        let tables = self.table.map_or_else(
            || vec![TableArg::Pilots, TableArg::Drones, TableArg::Missions],
            |table| vec![table],
        );

        match self.output {
            OutputFormat::Json => render_json(&snapshot, &tables)?,
            OutputFormat::Table => {
                for (index, table) in tables.iter().enumerate() {
                    if index > 0 && !self.quiet {
                        println!();
                    }
                    self.render_section(&snapshot, *table);
                }
            }
        }

        Ok(())
    }

    fn render_section(&self, snapshot: &Snapshot, table: TableArg) {
        let (title, headers, rows) = section(snapshot, table);

        if !self.quiet {
            println!("{title}");
            println!("{}", "─".repeat(title.len().max(16)).dim());
        }

        if rows.is_empty() {
            if !self.quiet {
                println!("(no rows)");
            }
            return;
        }

        if self.quiet {
            for row in rows {
                println!("{}", row.join("\t"));
            }
        } else if is_narrow() {
            // Stacked output for narrow terminals.
            for row in rows {
                for (header, value) in headers.iter().zip(&row) {
                    println!("{header}: {value}");
                }
                println!();
            }
        } else {
            render_table(&headers, &rows);
        }
    }
}

fn section(snapshot: &Snapshot, table: TableArg) -> (&'static str, Vec<&'static str>, Vec<Vec<String>>) {
    match table {
        TableArg::Pilots => (
            "Pilot roster",
            vec!["Name", "Status", "Skills", "Location", "Assignment"],
            snapshot
                .pilots
                .iter()
                .map(|pilot| {
                    vec![
                        pilot.name.clone(),
                        pilot.status.clone(),
                        pilot.skills.clone(),
                        pilot.location.clone(),
                        pilot.current_assignment.clone(),
                    ]
                })
                .collect(),
        ),
        TableArg::Drones => (
            "Drone fleet",
            vec!["Drone", "Status", "Capabilities", "Location"],
            snapshot
                .drones
                .iter()
                .map(|drone| {
                    vec![
                        drone.drone_id.clone(),
                        drone.status.clone(),
                        drone.capabilities.clone(),
                        drone.location.clone(),
                    ]
                })
                .collect(),
        ),
        TableArg::Missions => (
            "Missions",
            vec!["Project", "Required skills", "Weather"],
            snapshot
                .missions
                .iter()
                .map(|mission| {
                    vec![
                        mission.project_id.clone(),
                        mission.required_skills.clone(),
                        mission.weather.clone(),
                    ]
                })
                .collect(),
        ),
    }
}

fn render_table(headers: &[&str], rows: &[Vec<String>]) {
    // Determine column widths for alignment.
    let widths = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            rows.iter()
                .map(|row| row[idx].len())
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect::<Vec<_>>();

    for (header, width) in headers.iter().zip(&widths) {
        print!("{header:<width$}  ");
    }
    println!();

    for width in &widths {
        print!("{:-<width$}  ", "");
    }
    println!();

    for row in rows {
        for (value, width) in row.iter().zip(&widths) {
            print!("{value:<width$}  ");
        }
        println!();
    }
}

fn render_json(snapshot: &Snapshot, tables: &[TableArg]) -> anyhow::Result<()> {
    let mut output = serde_json::Map::new();
    for table in tables {
        match table {
            TableArg::Pilots => {
                output.insert("pilots".to_string(), serde_json::to_value(&snapshot.pilots)?);
            }
            TableArg::Drones => {
                output.insert("drones".to_string(), serde_json::to_value(&snapshot.drones)?);
            }
            TableArg::Missions => {
                output.insert(
                    "missions".to_string(),
                    serde_json::to_value(&snapshot.missions)?,
                );
            }
        }
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::Value::Object(output))?
    );
    Ok(())
}
