//! `dsp` — mission dispatch coordinator for a small drone operation.

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
