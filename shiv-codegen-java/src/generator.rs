use std::path::Path;

use eyre::{Result, WrapErr};
use shiv_codegen::{CodegenContext, DefaultContext, builder::Indent, process_host};
use shiv_core::{GenerateResult, GeneratedFile, HostFailure, LanguageCodegen, PreviewFile};
use shiv_manifest::Manifest;
use tracing::{debug, warn};

use crate::JavaFile;

/// Java generator producing one `$$Binder` class per declared host
pub struct Generator<'a> {
    manifest: &'a Manifest,
    indent: Indent,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "java"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn preview(&self) -> (Vec<PreviewFile>, Vec<HostFailure>) {
        let (files, failures) = self.plan();
        let previews = files
            .iter()
            .map(|file| PreviewFile {
                path: file.relative_path().display().to_string(),
                content: file.render(),
            })
            .collect();
        (previews, failures)
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let (files, failures) = self.plan();
        let mut written = Vec::with_capacity(files.len());

        for file in &files {
            file.write(output_dir).wrap_err_with(|| {
                format!(
                    "failed to write binder {}",
                    file.path(output_dir).display()
                )
            })?;
            written.push(file.relative_path().display().to_string());
        }

        debug!(written = written.len(), failed = failures.len(), "generation finished");
        Ok(GenerateResult { written, failures })
    }
}

impl<'a> Generator<'a> {
    pub fn new(manifest: &'a Manifest) -> Self {
        Self {
            manifest,
            indent: Indent::JAVA,
        }
    }

    /// Use `indent` for generated sources.
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Build the binder for every host.
    ///
    /// Hosts are independent: a failing host is reported and the rest are
    /// still planned.
    fn plan(&self) -> (Vec<JavaFile>, Vec<HostFailure>) {
        let ctx = DefaultContext::new(self.manifest.options.clone());
        let mut files = Vec::new();
        let mut failures = Vec::new();

        for decl in &self.manifest.hosts {
            let host = decl.host_type();
            let package = ctx.package_name(&host);
            match process_host(&ctx, host, decl.bindings()) {
                Ok(binder) => files.push(JavaFile::new(package, binder).indent(self.indent)),
                Err(error) => {
                    warn!(host = %decl.name, %error, "skipping host");
                    failures.push(HostFailure {
                        host: decl.name.clone(),
                        error,
                    });
                }
            }
        }

        (files, failures)
    }
}
