use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use shiv_codegen_java::{GenerateResult, Generator, LanguageCodegen, PreviewFile};
use shiv_core::HostFailure;
use shiv_manifest::{Manifest, ShivToml};
use tracing::info;

use super::{UnwrapOrExit, report_failures};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to shiv.toml (defaults to ./shiv.toml)
    #[arg(short, long, default_value = "shiv.toml")]
    pub config: PathBuf,

    /// Source root the binders are written under
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Print generated sources without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let shiv_toml = ShivToml::open(&self.config).unwrap_or_exit();
        let manifest = shiv_toml.manifest();

        let failures = if self.dry_run {
            let (files, failures) = preview(manifest);
            print_preview(&files);
            failures
        } else {
            let result = generate(manifest, &self.output)?;
            print_written(&result, &self.output);
            result.failures
        };

        if !failures.is_empty() {
            report_failures(failures);
            std::process::exit(1);
        }
        Ok(())
    }
}

/// Render every host without touching the filesystem.
pub(crate) fn preview(manifest: &Manifest) -> (Vec<PreviewFile>, Vec<HostFailure>) {
    Generator::new(manifest).preview()
}

/// Write the binders of every valid host under `output`.
pub(crate) fn generate(manifest: &Manifest, output: &Path) -> Result<GenerateResult> {
    info!(hosts = manifest.hosts.len(), output = %output.display(), "generating binders");
    Generator::new(manifest)
        .generate(output)
        .wrap_err("Failed to generate binders")
}

fn print_preview(files: &[PreviewFile]) {
    for file in files {
        println!("// {}", file.path);
        println!("{}", file.content);
    }
}

fn print_written(result: &GenerateResult, output: &Path) {
    let count = result.written.len();
    println!(
        "Generated {} binder{} in {}",
        count,
        if count == 1 { "" } else { "s" },
        output.display()
    );
    for path in &result.written {
        println!("  {}", path);
    }
}
