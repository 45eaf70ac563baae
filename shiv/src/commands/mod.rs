mod check;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;
use shiv_core::HostFailure;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for shiv_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Print each failed host as a diagnostic.
pub(crate) fn report_failures(failures: Vec<HostFailure>) {
    for failure in failures {
        eprintln!("error: host {} was skipped", failure.host);
        eprintln!("{:?}", miette::Report::new(*failure.error));
    }
}

#[derive(Parser)]
#[command(name = "shiv")]
#[command(version)]
#[command(about = "Generate Android field binders from TOML declarations")]
pub(crate) struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate binder sources from shiv.toml
    Generate(GenerateCommand),

    /// Validate shiv.toml and every host without writing files
    Check(CheckCommand),
}
