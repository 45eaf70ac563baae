mod file;
mod host;

use std::{collections::HashMap, path::Path, str::FromStr};

pub use file::ShivToml;
pub use host::{FieldDecl, HostDecl};
use serde::Deserialize;
use shiv_core::CodegenOptions;

use crate::{Error, Result, validate::ParseContext};

/// Root manifest for shiv.toml
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Generation options
    #[serde(default)]
    pub options: CodegenOptions,

    /// Host declarations, in file order
    #[serde(default, rename = "host")]
    pub hosts: Vec<HostDecl>,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "shiv.toml")
    }
}

impl Manifest {
    /// Parse a shiv.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a shiv.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let manifest: Self =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        manifest.validate(content, filename)?;
        Ok(manifest)
    }

    /// Find a host by qualified name
    pub fn host(&self, name: &str) -> Option<&HostDecl> {
        self.hosts.iter().find(|host| host.name == name)
    }

    /// Validate the manifest after parsing
    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        let ctx = ParseContext::new(src, filename);
        let mut seen: HashMap<&str, usize> = HashMap::new();
        // search offset so repeated names resolve to the right declaration
        let mut cursor = 0;

        for host in &self.hosts {
            let span = ctx.find_span(&host.name, cursor);
            let offset = span.map_or(cursor, |s| s.offset());

            if let Some(&first) = seen.get(host.name.as_str()) {
                return Err(Error::duplicate_host(
                    &host.name,
                    ctx.src(),
                    ctx.filename(),
                    ctx.find_span(&host.name, first),
                    span,
                ));
            }
            seen.insert(host.name.as_str(), offset.saturating_sub(1));

            ctx.validate_qualified_name(&host.name, "host", cursor)?;
            host.validate(&ctx, offset)?;
            cursor = offset;
        }
        Ok(())
    }
}
