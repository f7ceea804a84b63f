//! Command-line coordinator for the dispatch tables.

use std::path::PathBuf;

mod assign;
mod list;
mod terminal;

use assign::Assign;
use clap::ArgAction;
use dispatch::{Config, CsvStore, update_pilot_status};
use list::List;
use tracing::instrument;

/// Top-level command-line interface.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the data directory holding the roster files
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    /// Runs the selected command.
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::List(List::default()))
            .run(self.root)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// Available subcommands.
#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Show the three roster tables (default)
    List(List),

    /// Match a pilot and drone to a mission and flag conflicts
    Assign(Assign),

    /// Update a pilot's roster status
    SetStatus(SetStatus),

    /// Initialize a new dispatch data directory
    Init,
}

impl Command {
    fn run(self, root: PathBuf) -> anyhow::Result<()> {
        match self {
            Self::List(command) => command.run(root)?,
            Self::Assign(command) => command.run(root)?,
            Self::SetStatus(command) => command.run(root)?,
            Self::Init => Init::run(&root)?,
        }
        Ok(())
    }
}

/// Arguments for `dsp init`.
#[derive(Debug, clap::Parser)]
pub struct Init {}

impl Init {
    #[instrument]
    fn run(root: &PathBuf) -> anyhow::Result<()> {
        use std::fs;

        let config_path = root.join("config.toml");
        if config_path.exists() {
            anyhow::bail!("Data directory already initialized (found existing config.toml)");
        }

        fs::create_dir_all(root)
            .map_err(|e| anyhow::anyhow!("Failed to create data directory: {e}"))?;

        let config = Config::default();
        config
            .save(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to create config.toml: {e}"))?;

        let tables = [
            (
                config.pilots_file(),
                "name,status,skills,location,current_assignment\n",
            ),
            (config.drones_file(), "drone_id,status,capabilities,location\n"),
            (config.missions_file(), "project_id,required_skills,weather\n"),
        ];

        for (file, header) in tables {
            let path = root.join(file);
            // Leave any pre-existing roster file alone.
            if path.exists() {
                continue;
            }
            fs::write(&path, header)
                .map_err(|e| anyhow::anyhow!("Failed to create {file}: {e}"))?;
        }

        println!("Initialized dispatch data directory in {}", root.display());
        println!("  Created: config.toml");
        for (file, _) in tables {
            println!("  Created: {file}");
        }
        println!();
        println!("Next steps:");
        println!(
            "  add rows to {} and run 'dsp assign <PROJECT_ID>'",
            config.missions_file()
        );

        Ok(())
    }
}

/// Arguments for `dsp set-status`.
#[derive(Debug, clap::Parser)]
pub struct SetStatus {
    /// Exact name of the pilot to update
    name: String,

    /// New status value (e.g. "Available", "On Leave", "Unavailable")
    status: String,

    /// Skip confirmation prompts
    #[arg(long, short)]
    yes: bool,
}

impl SetStatus {
    #[instrument]
    fn run(self, root: PathBuf) -> anyhow::Result<()> {
        use terminal::Colorize;

        if !self.yes {
            println!("Will set status of {} to '{}'", self.name, self.status);

            eprint!("\nProceed? (y/N) ");
            use std::io::{self, BufRead};
            let stdin = io::stdin();
            let mut line = String::new();
            stdin.lock().read_line(&mut line)?;
            if !line.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled");
                std::process::exit(130);
            }
        }

        let mut store = CsvStore::open(root);
        if update_pilot_status(&mut store, &self.name, &self.status)? {
            println!(
                "{}",
                format!("✅ Set {} to '{}'", self.name, self.status).success()
            );
            Ok(())
        } else {
            anyhow::bail!("Pilot '{}' not found in the roster", self.name);
        }
    }
}
