use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);

        match self.rules().overwrite {
            Overwrite::Always => {
                write_file(&path, &self.render())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, &self.render())?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
    pub header: Option<&'static str>,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (binders)
    Always,
    /// Only create if file doesn't exist
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: None,
        }
    }
}
