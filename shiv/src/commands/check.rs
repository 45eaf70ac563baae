use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use shiv_codegen_java::{Generator, LanguageCodegen};
use shiv_manifest::ShivToml;

use super::{UnwrapOrExit, report_failures};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to shiv.toml (defaults to ./shiv.toml)
    #[arg(short, long, default_value = "shiv.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let shiv_toml = ShivToml::open(&self.config).unwrap_or_exit();
        let manifest = shiv_toml.manifest();

        let (files, failures) = Generator::new(manifest).preview();
        if !failures.is_empty() {
            let failed = failures.len();
            report_failures(failures);
            eprintln!(
                "\n{} of {} host{} failed",
                failed,
                manifest.hosts.len(),
                if manifest.hosts.len() == 1 { "" } else { "s" }
            );
            std::process::exit(1);
        }

        println!("✓ {} is valid\n", self.config.display());

        let count = manifest.hosts.len();
        println!("  {} host{}:", count, if count == 1 { "" } else { "s" });
        for (host, file) in manifest.hosts.iter().zip(&files) {
            println!(
                "    {} ({}, {} field{}) -> {}",
                host.name,
                host.kind,
                host.fields.len(),
                if host.fields.len() == 1 { "" } else { "s" },
                file.path
            );
        }

        Ok(())
    }
}
