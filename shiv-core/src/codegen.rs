//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;

use crate::Error;

/// Trait for language-specific binder generators.
///
/// Implement this trait to render binders for a new target language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "java", "kotlin")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "java", "kt")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> (Vec<PreviewFile>, Vec<HostFailure>);

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Binder files that were written, relative to the output directory
    pub written: Vec<String>,
    /// Hosts whose binder could not be planned
    pub failures: Vec<HostFailure>,
}

/// A host whose processing was aborted.
///
/// Failures are per host: the remaining hosts are still generated.
#[derive(Debug)]
pub struct HostFailure {
    /// Qualified name of the host
    pub host: String,
    /// The first error raised for this host
    pub error: Box<Error>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
